// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate toast styles and design token coherence.

#[cfg(test)]
mod tests {
    use iced_toast::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
    use iced_toast::ui::toast::{
        default_style, snack_bar_style, with_toast_style, AnyToastStyle, Message, ToastEnvironment,
        ToastStyle,
    };
    use iced::Element;

    /// A host-defined style plugged in next to the built-in ones.
    #[derive(Debug)]
    struct Banner;

    impl ToastStyle for Banner {
        fn name(&self) -> &'static str {
            "banner"
        }

        fn view<'a>(
            &self,
            message: &'a str,
            _opacity: f32,
            _interactive: bool,
        ) -> Element<'a, Message> {
            iced::widget::text(message).into()
        }
    }

    #[test]
    fn built_in_styles_render_at_any_opacity() {
        let styles: [AnyToastStyle; 2] = [
            default_style().into(),
            snack_bar_style("Undo", || {}).into(),
        ];
        for style in &styles {
            for fade in [0.0, 0.5, 1.0] {
                let _ = style.view("Saved", fade, true);
                let _ = style.view("", fade, false);
            }
        }
    }

    #[test]
    fn custom_style_resolves_through_environment() {
        let env = ToastEnvironment::new().toast_style(Banner);
        assert_eq!(env.style().name(), "banner");
        assert!(env.style().action().is_none());
    }

    #[test]
    fn with_toast_style_leaves_parent_untouched() {
        let parent = ToastEnvironment::new().toast_style(Banner);
        let _: Element<'_, ()> = with_toast_style(&parent, default_style(), |scope| {
            assert_eq!(scope.style().name(), "default");
            iced::widget::text("child").into()
        });
        assert_eq!(parent.style().name(), "banner");
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::INDIGO_500;
        let _ = palette::WHITE;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        let _ = sizing::SNACK_BAR_HEIGHT;
        let _ = typography::FOOTNOTE;
    }
}
