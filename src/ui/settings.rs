// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language, appearance, and generator defaults.
//!
//! Language and theme changes apply immediately and are persisted by the
//! parent. The default symbol size goes through a text buffer that is
//! validated live but only committed when the user leaves the screen; an
//! uncommittable buffer keeps the user here until it is fixed.

use crate::app::config::{MAX_SYMBOL_SIZE_PX, MIN_SYMBOL_SIZE_PX};
use crate::i18n::fluent::I18n;
use crate::qr::form::ErrorCorrection;
use crate::ui::action_icons;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, rule, scrollable, text, text_input, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};
use unic_langid::LanguageIdentifier;

/// Width of the default size input.
const SIZE_INPUT_WIDTH: f32 = 160.0;

/// Initial values handed over by the parent when the app starts.
pub struct StateConfig {
    pub theme_mode: ThemeMode,
    pub default_symbol_size: u32,
    pub default_error_correction: ErrorCorrection,
}

/// Local UI state for the settings screen.
#[derive(Debug, Clone)]
pub struct State {
    theme_mode: ThemeMode,
    default_error_correction: ErrorCorrection,
    /// Committed default symbol size.
    default_size: u32,
    /// Raw text of the default size input.
    default_size_input: String,
    /// Set when the buffer has edits that are not committed yet.
    default_size_dirty: bool,
    default_size_error_key: Option<&'static str>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(StateConfig {
            theme_mode: ThemeMode::default(),
            default_symbol_size: crate::app::config::DEFAULT_SYMBOL_SIZE_PX,
            default_error_correction: ErrorCorrection::default(),
        })
    }
}

/// Contextual data needed to render the settings view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the settings widgets.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    DefaultSizeInputChanged(String),
    DefaultErrorCorrectionSelected(ErrorCorrection),
    Back,
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Switch the UI language and persist the choice.
    LanguageSelected(LanguageIdentifier),
    /// Apply and persist the theme mode.
    ThemeModeSelected(ThemeMode),
    /// Persist the new generator default.
    DefaultErrorCorrectionChanged(ErrorCorrection),
    /// Return to the generator screen.
    Back,
}

impl State {
    /// Creates the settings state from the loaded configuration.
    #[must_use]
    pub fn new(config: StateConfig) -> Self {
        Self {
            theme_mode: config.theme_mode,
            default_error_correction: config.default_error_correction,
            default_size: config.default_symbol_size,
            default_size_input: config.default_symbol_size.to_string(),
            default_size_dirty: false,
            default_size_error_key: None,
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
            Message::ThemeModeSelected(mode) => {
                self.theme_mode = mode;
                Event::ThemeModeSelected(mode)
            }
            Message::DefaultSizeInputChanged(value) => {
                self.default_size_error_key = validate_size(&value).err();
                self.default_size_input = value;
                self.default_size_dirty = true;
                Event::None
            }
            Message::DefaultErrorCorrectionSelected(level) => {
                self.default_error_correction = level;
                Event::DefaultErrorCorrectionChanged(level)
            }
            Message::Back => Event::Back,
        }
    }

    /// Commits the default size buffer when leaving the screen.
    ///
    /// Returns `Ok(Some(value))` when a new value should be persisted and
    /// `Ok(None)` when the buffer has no uncommitted edits. On an invalid
    /// buffer the error key is returned and stored; the caller keeps the
    /// user on the settings screen.
    pub fn ensure_default_size_committed(&mut self) -> Result<Option<u32>, &'static str> {
        if !self.default_size_dirty {
            return Ok(None);
        }

        match validate_size(&self.default_size_input) {
            Ok(value) => {
                self.default_size = value;
                self.default_size_input = value.to_string();
                self.default_size_dirty = false;
                self.default_size_error_key = None;
                Ok(Some(value))
            }
            Err(key) => {
                self.default_size_error_key = Some(key);
                Err(key)
            }
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn default_error_correction(&self) -> ErrorCorrection {
        self.default_error_correction
    }

    pub fn default_size(&self) -> u32 {
        self.default_size
    }

    pub fn default_size_input_value(&self) -> &str {
        &self.default_size_input
    }

    pub fn default_size_input_dirty(&self) -> bool {
        self.default_size_dirty
    }

    pub fn default_size_error_key(&self) -> Option<&'static str> {
        self.default_size_error_key
    }

    /// Render the settings screen.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let back_button = button(
            text(format!("← {}", ctx.i18n.tr("settings-back-button"))).size(typography::BODY),
        )
        .on_press(Message::Back);

        let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

        let content = Column::new()
            .width(Length::Fill)
            .spacing(spacing::LG)
            .align_x(Horizontal::Left)
            .padding(spacing::MD)
            .push(back_button)
            .push(title)
            .push(self.build_language_section(&ctx))
            .push(self.build_appearance_section(&ctx))
            .push(self.build_generator_defaults_section(&ctx));

        scrollable(content).into()
    }

    /// Build the language picker section.
    fn build_language_section<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let mut buttons = Column::new().spacing(spacing::XS);

        for locale in &ctx.i18n.available_locales {
            let display_name = locale.to_string();

            // Check for a translated language name, e.g. "language-name-fr".
            let translated_name = ctx.i18n.tr(&format!("language-name-{locale}"));
            let label = if translated_name.starts_with("MISSING:") {
                display_name
            } else {
                format!("{translated_name} ({display_name})")
            };

            let style = if ctx.i18n.current_locale() == locale {
                styles::button::selected
            } else {
                styles::button::unselected
            };

            buttons = buttons.push(
                button(text(label).size(typography::BODY))
                    .on_press(Message::LanguageSelected(locale.clone()))
                    .padding([spacing::XXS, spacing::SM])
                    .style(style),
            );
        }

        build_section(
            action_icons::sections::language(),
            ctx.i18n.tr("settings-section-language"),
            buttons.into(),
        )
    }

    /// Build the theme mode section.
    fn build_appearance_section<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::XS);
        for mode in ThemeMode::ALL {
            let style = if self.theme_mode == mode {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row = row.push(
                button(
                    text(ctx.i18n.tr(mode.label_key()))
                        .size(typography::BODY_SM)
                        .center(),
                )
                .on_press(Message::ThemeModeSelected(mode))
                .padding([spacing::XXS, spacing::SM])
                .style(style),
            );
        }

        let content = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(ctx.i18n.tr("settings-theme-mode-label")).size(typography::BODY))
            .push(row);

        build_section(
            action_icons::sections::appearance(),
            ctx.i18n.tr("settings-section-appearance"),
            content.into(),
        )
    }

    /// Build the generator defaults section.
    fn build_generator_defaults_section<'a>(
        &'a self,
        ctx: &ViewContext<'a>,
    ) -> Element<'a, Message> {
        let size_placeholder = ctx.i18n.tr("settings-default-size-placeholder");
        let size_input = text_input(size_placeholder.as_str(), &self.default_size_input)
            .on_input(Message::DefaultSizeInputChanged)
            .padding(spacing::XXS)
            .size(typography::BODY)
            .width(Length::Fixed(SIZE_INPUT_WIDTH));

        let mut size_column = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(ctx.i18n.tr("settings-default-size-label")).size(typography::BODY))
            .push(size_input);

        if let Some(key) = self.default_size_error_key {
            size_column = size_column.push(
                text(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
        }

        let mut level_row = Row::new().spacing(spacing::XS);
        for level in ErrorCorrection::ALL {
            let style = if self.default_error_correction == level {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            level_row = level_row.push(
                button(
                    text(ctx.i18n.tr(level.label_key()))
                        .size(typography::BODY_SM)
                        .center(),
                )
                .on_press(Message::DefaultErrorCorrectionSelected(level))
                .padding([spacing::XXS, spacing::SM])
                .style(style),
            );
        }

        let content = Column::new()
            .spacing(spacing::SM)
            .push(size_column)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        Text::new(ctx.i18n.tr("settings-default-error-correction-label"))
                            .size(typography::BODY),
                    )
                    .push(level_row),
            );

        build_section(
            action_icons::sections::generator_defaults(),
            ctx.i18n.tr("settings-section-generator-defaults"),
            content.into(),
        )
    }
}

/// Validates a size buffer against the supported symbol range.
fn validate_size(input: &str) -> Result<u32, &'static str> {
    match input.trim().parse::<u32>() {
        Ok(value) if (MIN_SYMBOL_SIZE_PX..=MAX_SYMBOL_SIZE_PX).contains(&value) => Ok(value),
        Ok(_) => Err("settings-default-size-error-range"),
        Err(_) => Err("settings-default-size-error-invalid"),
    }
}

/// Build a section with icon, title, and content (same pattern as help/about).
fn build_section(
    icon: iced::widget::Image<iced::widget::image::Handle>,
    title: String,
    content: Element<'_, Message>,
) -> Element<'_, Message> {
    let icon_sized = icons::sized(icon, sizing::ICON_MD);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icon_sized)
        .push(Text::new(title).size(typography::TITLE_SM));

    let inner = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(StateConfig {
            theme_mode: ThemeMode::System,
            default_symbol_size: 256,
            default_error_correction: ErrorCorrection::Low,
        })
    }

    #[test]
    fn new_state_echoes_the_configured_size() {
        let state = state();

        assert_eq!(state.default_size(), 256);
        assert_eq!(state.default_size_input_value(), "256");
        assert!(!state.default_size_input_dirty());
        assert!(state.default_size_error_key().is_none());
    }

    #[test]
    fn language_selection_emits_event() {
        let mut state = state();
        let locale: LanguageIdentifier = "fr".parse().unwrap();

        let event = state.update(Message::LanguageSelected(locale.clone()));

        match event {
            Event::LanguageSelected(selected) => assert_eq!(selected, locale),
            other => panic!("expected LanguageSelected, got {other:?}"),
        }
    }

    #[test]
    fn theme_mode_selection_updates_state_and_emits() {
        let mut state = state();

        let event = state.update(Message::ThemeModeSelected(ThemeMode::Dark));

        assert_eq!(state.theme_mode(), ThemeMode::Dark);
        assert!(matches!(event, Event::ThemeModeSelected(ThemeMode::Dark)));
    }

    #[test]
    fn error_correction_selection_updates_state_and_emits() {
        let mut state = state();

        let event = state.update(Message::DefaultErrorCorrectionSelected(
            ErrorCorrection::High,
        ));

        assert_eq!(state.default_error_correction(), ErrorCorrection::High);
        assert!(matches!(
            event,
            Event::DefaultErrorCorrectionChanged(ErrorCorrection::High)
        ));
    }

    #[test]
    fn size_input_validates_live_without_committing() {
        let mut state = state();

        state.update(Message::DefaultSizeInputChanged("abc".to_string()));
        assert!(state.default_size_input_dirty());
        assert_eq!(
            state.default_size_error_key(),
            Some("settings-default-size-error-invalid")
        );
        assert_eq!(state.default_size(), 256, "committed value is untouched");

        state.update(Message::DefaultSizeInputChanged("2000".to_string()));
        assert_eq!(
            state.default_size_error_key(),
            Some("settings-default-size-error-range")
        );

        state.update(Message::DefaultSizeInputChanged("300".to_string()));
        assert!(state.default_size_error_key().is_none());
        assert_eq!(state.default_size(), 256, "commit waits for screen leave");
    }

    #[test]
    fn ensure_committed_without_edits_returns_none() {
        let mut state = state();

        assert_eq!(state.ensure_default_size_committed(), Ok(None));
    }

    #[test]
    fn ensure_committed_with_valid_buffer_returns_the_value() {
        let mut state = state();
        state.update(Message::DefaultSizeInputChanged("512".to_string()));

        let result = state.ensure_default_size_committed();

        assert_eq!(result, Ok(Some(512)));
        assert_eq!(state.default_size(), 512);
        assert!(!state.default_size_input_dirty());
        assert!(state.default_size_error_key().is_none());
    }

    #[test]
    fn ensure_committed_with_invalid_buffer_errors() {
        let mut state = state();
        state.update(Message::DefaultSizeInputChanged("huge".to_string()));

        let result = state.ensure_default_size_committed();

        assert_eq!(result, Err("settings-default-size-error-invalid"));
        assert!(state.default_size_input_dirty());
        assert_eq!(
            state.default_size_error_key(),
            Some("settings-default-size-error-invalid")
        );
    }

    #[test]
    fn back_emits_event() {
        let mut state = state();

        assert!(matches!(state.update(Message::Back), Event::Back));
    }

    #[test]
    fn settings_view_renders() {
        let state = state();
        let i18n = I18n::default();
        let _element = state.view(ViewContext { i18n: &i18n });
    }
}
