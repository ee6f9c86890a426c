// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! This module handles saving user preferences to disk, including
//! generator defaults, theme mode, and language selection.

use super::Message;
use crate::app::config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::settings::State as SettingsState;
use crate::ui::theming::ThemeMode;
use iced::Task;
use unic_langid::LanguageIdentifier;

/// Borrowed application state needed to write preferences to disk.
pub struct PreferencesContext<'a> {
    pub i18n: &'a I18n,
    pub settings: &'a SettingsState,
    pub theme_mode: ThemeMode,
    pub notifications: &'a mut notifications::Manager,
}

/// Persists the current preferences to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the config functions directly rather than through `Task`s.
pub fn persist_preferences(ctx: &mut PreferencesContext<'_>) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, _) = config::load();
    cfg.general.language = Some(ctx.i18n.current_locale().to_string());
    cfg.general.theme_mode = ctx.theme_mode;
    cfg.generator.symbol_size = Some(ctx.settings.default_size());
    cfg.generator.error_correction = Some(ctx.settings.default_error_correction());

    if config::save(&cfg).is_err() {
        ctx.notifications
            .push(notifications::Notification::warning(
                "notification-config-save-error",
            ));
    }

    Task::none()
}

/// Applies the newly selected locale and persists it to config.
pub fn apply_language_change(
    i18n: &mut I18n,
    locale: &LanguageIdentifier,
    notifications: &mut notifications::Manager,
) -> Task<Message> {
    i18n.set_locale(locale.clone());

    let (mut cfg, _) = config::load();
    cfg.general.language = Some(locale.to_string());

    if config::save(&cfg).is_err() {
        notifications.push(notifications::Notification::warning(
            "notification-config-save-error",
        ));
    }

    Task::none()
}
