// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers dispatched from
//! `App::update`, grouped by the component they serve.

use super::{persistence, Message, Screen};
use crate::i18n::fluent::I18n;
use crate::qr::export::ExportFormat;
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::generator::{self, Event as GeneratorEvent, State as GeneratorState};
use crate::ui::help::{self, Event as HelpEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications;
use crate::ui::settings::{self, Event as SettingsEvent, State as SettingsState};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub generator: &'a mut GeneratorState,
    pub settings: &'a mut SettingsState,
    pub help_state: &'a mut help::State,
    pub menu_open: &'a mut bool,
    pub theme_mode: &'a mut ThemeMode,
    pub persisted: &'a mut super::persisted_state::AppState,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Creates a `PreferencesContext` for persisting preferences.
    pub fn preferences_context(&mut self) -> persistence::PreferencesContext<'_> {
        persistence::PreferencesContext {
            i18n: self.i18n,
            settings: self.settings,
            theme_mode: *self.theme_mode,
            notifications: self.notifications,
        }
    }
}

/// Handles generator component messages.
pub fn handle_generator_message(
    ctx: &mut UpdateContext<'_>,
    message: generator::Message,
) -> Task<Message> {
    match ctx.generator.update(message) {
        GeneratorEvent::None => Task::none(),
        GeneratorEvent::GenerateFailed { message_key } => {
            ctx.notifications
                .push(notifications::Notification::error(message_key));
            Task::none()
        }
        GeneratorEvent::DownloadRequested(format) => {
            let last_dir = ctx.persisted.last_save_directory.clone();
            handle_save_dialog(format, last_dir)
        }
        GeneratorEvent::ExportUnavailable => {
            ctx.notifications.push(notifications::Notification::warning(
                "notification-export-nothing",
            ));
            Task::none()
        }
        GeneratorEvent::CopyRequested(text) => {
            // The clipboard task produces no completion message; report
            // success right away.
            ctx.notifications.push(notifications::Notification::success(
                "notification-copy-success",
            ));
            iced::clipboard::write(text)
        }
    }
}

/// Opens the native save dialog for the given export format.
pub fn handle_save_dialog(
    format: ExportFormat,
    last_save_directory: Option<PathBuf>,
) -> Task<Message> {
    let filename = format.default_filename();
    let filter_ext = [format.extension()];

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name(&filename)
                .add_filter(format.description(), &filter_ext);

            // Use last save directory if available
            if let Some(dir) = last_save_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        move |path| Message::SaveDialogResult { path, format },
    )
}

/// Handles screen transitions.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    // Handle Settings → Generator transition: commit pending edits first
    if matches!(target, Screen::Generator) && matches!(ctx.screen, Screen::Settings) {
        match ctx.settings.ensure_default_size_committed() {
            Ok(Some(_)) => {
                *ctx.screen = target;
                return persistence::persist_preferences(&mut ctx.preferences_context());
            }
            Ok(None) => {
                *ctx.screen = target;
                return Task::none();
            }
            Err(_) => {
                // Invalid buffer keeps the user on the settings screen
                *ctx.screen = Screen::Settings;
                return Task::none();
            }
        }
    }

    *ctx.screen = target;
    Task::none()
}

/// Handles settings component messages.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message) {
        SettingsEvent::None => Task::none(),
        SettingsEvent::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, &locale, ctx.notifications)
        }
        SettingsEvent::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
            persistence::persist_preferences(&mut ctx.preferences_context())
        }
        SettingsEvent::DefaultErrorCorrectionChanged(_) => {
            persistence::persist_preferences(&mut ctx.preferences_context())
        }
        SettingsEvent::Back => handle_screen_switch(ctx, Screen::Generator),
    }
}

/// Handles navbar component messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::OpenSettings => {
            *ctx.screen = Screen::Settings;
            Task::none()
        }
        NavbarEvent::OpenHelp => {
            *ctx.screen = Screen::Help;
            Task::none()
        }
        NavbarEvent::OpenAbout => {
            *ctx.screen = Screen::About;
            Task::none()
        }
    }
}

/// Handles help screen messages.
pub fn handle_help_message(ctx: &mut UpdateContext<'_>, message: help::Message) -> Task<Message> {
    match help::update(ctx.help_state, message) {
        HelpEvent::None => Task::none(),
        HelpEvent::Back => {
            *ctx.screen = Screen::Generator;
            Task::none()
        }
    }
}

/// Handles about screen messages.
pub fn handle_about_message(
    ctx: &mut UpdateContext<'_>,
    message: &about::Message,
) -> Task<Message> {
    match about::update(message) {
        AboutEvent::None => Task::none(),
        AboutEvent::Back => {
            *ctx.screen = Screen::Generator;
            Task::none()
        }
    }
}
