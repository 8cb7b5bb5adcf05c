// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows transient toast and snack-bar overlays in applications
//! built with the Iced GUI framework.
//!
//! The toast overlay lives in [`ui::toast`]; [`app`] holds the configuration
//! layer and the demo application launched by the binary.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod error;
pub mod ui;
