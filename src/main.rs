// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, config::StyleKind, Flags};
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "iced_toast=info";

const HELP: &str = "\
IcedToast demo

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --message <TEXT>      Message shown by the main toast
  --style <STYLE>       Root toast style: default | snack-bar
  --config-dir <PATH>   Directory containing settings.toml
  --hidden              Start with the toast hidden
  -h, --help            Print this help
";

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        message: optional_flag(&mut args, "--message"),
        style: optional_flag::<StyleKind>(&mut args, "--style"),
        config_dir: optional_flag(&mut args, "--config-dir"),
        hidden: args.contains("--hidden"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}

/// Reads an optional flag value, logging and dropping values that fail to parse.
fn optional_flag<T>(args: &mut pico_args::Arguments, flag: &'static str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    args.opt_value_from_str(flag).unwrap_or_else(|err| {
        tracing::warn!(flag, %err, "ignoring invalid flag value");
        None
    })
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
