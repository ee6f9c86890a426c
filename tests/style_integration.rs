// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::{Background, Theme};
    use iced_qr::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_qr::ui::styles::{button, container};
    use iced_qr::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::selected(&theme, iced::widget::button::Status::Active);
        let _ = button::unselected(&theme, iced::widget::button::Status::Active);
        let _ = button::disabled()(&theme, iced::widget::button::Status::Active);
    }

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Dark;

        let _ = container::panel(&theme);
        let _ = container::toolbar(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        let _ = sizing::ICON_MD;
    }

    #[test]
    fn unselected_buttons_adapt_to_the_theme() {
        let light = button::unselected(&Theme::Light, iced::widget::button::Status::Active);
        let dark = button::unselected(&Theme::Dark, iced::widget::button::Status::Active);

        // Backgrounds should be visually opposite between light and dark
        let (Some(Background::Color(light_bg)), Some(Background::Color(dark_bg))) =
            (light.background, dark.background)
        else {
            panic!("Expected background colors");
        };
        assert!(light_bg.r > dark_bg.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_color.r < dark.text_color.r);
    }

    #[test]
    fn theme_modes_resolve_consistently() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }
}
