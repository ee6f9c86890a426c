// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the generator and
//! secondary screens.
//!
//! The `App` struct wires together the domains (generator, localization,
//! settings) and translates messages into side effects like config
//! persistence or file export. This file intentionally keeps policy
//! decisions (minimum window size, persistence format, localization
//! switching) close to the main update loop so it is easy to audit
//! user-facing behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::qr::export::ExportFormat;
use crate::ui::generator::State as GeneratorState;
use crate::ui::help;
use crate::ui::notifications;
use crate::ui::settings::{State as SettingsState, StateConfig as SettingsConfig};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    generator: GeneratorState,
    settings: SettingsState,
    theme_mode: ThemeMode,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// Help screen state (tracks expanded sections).
    help_state: help::State,
    /// Persisted application state (last save directory, last export format).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_artifact", &self.generator.has_artifact())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Ensures symbol sizes stay inside the supported range so persisted
/// configs cannot request nonsensical dimensions.
fn clamp_symbol_size(value: u32) -> u32 {
    value.clamp(config::MIN_SYMBOL_SIZE_PX, config::MAX_SYMBOL_SIZE_PX)
}

/// Builds the window settings
pub fn window_settings_with_locale() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings_with_locale())
        .subscription(App::subscription)
        .run_with(move || App::new(flags))
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Generator,
            generator: GeneratorState::default(),
            settings: SettingsState::default(),
            theme_mode: ThemeMode::System,
            menu_open: false,
            help_state: help::State::new(),
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from the loaded configuration and the
    /// `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;

        let default_size = clamp_symbol_size(
            config
                .generator
                .symbol_size
                .unwrap_or(config::DEFAULT_SYMBOL_SIZE_PX),
        );
        app.settings = SettingsState::new(SettingsConfig {
            theme_mode: config.general.theme_mode,
            default_symbol_size: default_size,
            default_error_correction: config.generator.error_correction.unwrap_or_default(),
        });
        app.generator = GeneratorState::new(&config.generator);

        // Load application state (last save directory, last export format)
        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        if let Some(text) = flags.initial_text {
            app.generator.set_text(text);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            generator: &mut self.generator,
            settings: &mut self.settings,
            help_state: &mut self.help_state,
            menu_open: &mut self.menu_open,
            theme_mode: &mut self.theme_mode,
            persisted: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Generator(generator_message) => {
                update::handle_generator_message(&mut ctx, generator_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Help(help_message) => update::handle_help_message(&mut ctx, help_message),
            Message::About(about_message) => {
                update::handle_about_message(&mut ctx, &about_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::DownloadShortcut => self.handle_download_shortcut(),
            Message::SaveDialogResult { path, format } => {
                self.handle_save_dialog_result(path, format)
            }
            Message::Tick(_instant) => {
                // Tick notification manager to handle auto-dismiss
                self.notifications.tick();
                Task::none()
            }
        }
    }

    /// Re-exports with the last used format, skipping the format menu.
    fn handle_download_shortcut(&mut self) -> Task<Message> {
        if !self.generator.has_artifact() {
            self.notifications.push(notifications::Notification::warning(
                "notification-export-nothing",
            ));
            return Task::none();
        }

        let format = self.app_state.last_export_format.unwrap_or_default();
        update::handle_save_dialog(format, self.app_state.last_save_directory.clone())
    }

    /// Writes the artifact to the chosen path and remembers the destination.
    fn handle_save_dialog_result(
        &mut self,
        path: Option<PathBuf>,
        format: ExportFormat,
    ) -> Task<Message> {
        let Some(path) = path else {
            // User cancelled the dialog
            return Task::none();
        };
        let Some(artifact) = self.generator.artifact() else {
            return Task::none();
        };

        // An extension typed into the dialog overrides the requested format.
        let format = ExportFormat::from_path(&path).unwrap_or(format);

        match crate::qr::export::save(artifact, format, &path) {
            Ok(()) => {
                let filename = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("qrcode");
                self.notifications.push(
                    notifications::Notification::success("notification-save-success")
                        .with_arg("filename", filename),
                );

                // Remember the save directory and format for next time
                self.app_state.set_last_save_directory_from_file(&path);
                self.app_state.last_export_format = Some(format);
                if let Some(key) = self.app_state.save() {
                    self.notifications
                        .push(notifications::Notification::warning(&key));
                }
            }
            Err(error) => {
                self.notifications.push(
                    notifications::Notification::error("notification-save-error")
                        .with_arg("error", error.to_string()),
                );
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            generator: &self.generator,
            settings: &self.settings,
            help_state: &self.help_state,
            menu_open: self.menu_open,
            notifications: &self.notifications,
            is_dark_theme: self.theme_mode.is_dark(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::DEFAULT_SYMBOL_SIZE_PX;
    use crate::qr::form::ErrorCorrection;
    use crate::ui::generator;
    use crate::ui::navbar;
    use crate::ui::settings;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    /// Runs `test` with config and data directories redirected to a fresh
    /// temporary directory, restoring the previous environment afterwards.
    fn with_temp_dirs<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous_config = std::env::var(paths::ENV_CONFIG_DIR).ok();
        let previous_data = std::env::var(paths::ENV_DATA_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());
        std::env::set_var(paths::ENV_DATA_DIR, temp_dir.path());

        test(temp_dir.path());

        match previous_config {
            Some(value) => std::env::set_var(paths::ENV_CONFIG_DIR, value),
            None => std::env::remove_var(paths::ENV_CONFIG_DIR),
        }
        match previous_data {
            Some(value) => std::env::set_var(paths::ENV_DATA_DIR, value),
            None => std::env::remove_var(paths::ENV_DATA_DIR),
        }
    }

    fn app_with_artifact() -> App {
        let mut app = App::default();
        let _ = app.update(Message::Generator(generator::Message::TextChanged(
            "https://example.com".into(),
        )));
        let _ = app.update(Message::Generator(generator::Message::Generate));
        assert!(app.generator.has_artifact());
        app
    }

    #[test]
    fn new_starts_on_generator_without_artifact() {
        with_temp_dirs(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Generator);
            assert!(!app.generator.has_artifact());
        });
    }

    #[test]
    fn new_seeds_the_text_field_from_flags() {
        with_temp_dirs(|_| {
            let flags = Flags {
                initial_text: Some("hello".into()),
                ..Flags::default()
            };
            let (app, _task) = App::new(flags);
            assert_eq!(app.generator.form().text, "hello");
        });
    }

    #[test]
    fn new_applies_persisted_generator_defaults() {
        with_temp_dirs(|_| {
            let config = config::Config {
                generator: config::GeneratorConfig {
                    symbol_size: Some(512),
                    error_correction: Some(ErrorCorrection::High),
                },
                ..config::Config::default()
            };
            config::save(&config).expect("failed to save config");

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.settings.default_size(), 512);
            assert_eq!(
                app.settings.default_error_correction(),
                ErrorCorrection::High
            );
            assert_eq!(app.generator.form().size.value(), 512);
            assert_eq!(app.generator.form().error_correction, ErrorCorrection::High);
        });
    }

    #[test]
    fn new_clamps_out_of_range_persisted_size() {
        with_temp_dirs(|_| {
            let config = config::Config {
                generator: config::GeneratorConfig {
                    symbol_size: Some(20_000),
                    error_correction: None,
                },
                ..config::Config::default()
            };
            config::save(&config).expect("failed to save config");

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.settings.default_size(), config::MAX_SYMBOL_SIZE_PX);
        });
    }

    #[test]
    fn theme_follows_the_selected_mode() {
        let mut app = App::default();

        app.theme_mode = ThemeMode::Light;
        assert_eq!(app.theme(), Theme::Light);

        app.theme_mode = ThemeMode::Dark;
        assert_eq!(app.theme(), Theme::Dark);

        // System mode follows the detected OS theme.
        app.theme_mode = ThemeMode::System;
        let expected = if ThemeMode::System.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        };
        assert_eq!(app.theme(), expected);
    }

    #[test]
    fn default_size_changes_commit_when_leaving_settings() {
        with_temp_dirs(|_| {
            let mut app = App {
                screen: Screen::Settings,
                ..App::default()
            };
            let _ = app.update(Message::Settings(
                settings::Message::DefaultSizeInputChanged("300".into()),
            ));

            let _ = app.update(Message::SwitchScreen(Screen::Generator));

            assert_eq!(app.screen, Screen::Generator);
            assert_eq!(app.settings.default_size(), 300);
            assert_eq!(app.settings.default_size_input_value(), "300");
            assert!(!app.settings.default_size_input_dirty());
            assert!(app.settings.default_size_error_key().is_none());
        });
    }

    #[test]
    fn invalid_default_size_prevents_leaving_settings() {
        with_temp_dirs(|_| {
            let mut app = App {
                screen: Screen::Settings,
                ..App::default()
            };
            let _ = app.update(Message::Settings(
                settings::Message::DefaultSizeInputChanged("not-a-number".into()),
            ));

            let _ = app.update(Message::SwitchScreen(Screen::Generator));

            assert_eq!(app.screen, Screen::Settings);
            assert_eq!(
                app.settings.default_size_error_key(),
                Some("settings-default-size-error-invalid")
            );
            assert!(app.settings.default_size_input_dirty());
            assert_eq!(app.settings.default_size(), DEFAULT_SYMBOL_SIZE_PX);
        });
    }

    #[test]
    fn out_of_range_default_size_shows_error_and_stays_in_settings() {
        with_temp_dirs(|_| {
            let mut app = App {
                screen: Screen::Settings,
                ..App::default()
            };
            let _ = app.update(Message::Settings(
                settings::Message::DefaultSizeInputChanged("5000".into()),
            ));

            let _ = app.update(Message::SwitchScreen(Screen::Generator));

            assert_eq!(app.screen, Screen::Settings);
            assert_eq!(
                app.settings.default_size_error_key(),
                Some("settings-default-size-error-range")
            );
            assert!(app.settings.default_size_input_dirty());
            assert_eq!(app.settings.default_size(), DEFAULT_SYMBOL_SIZE_PX);
        });
    }

    #[test]
    fn settings_back_button_commits_pending_size() {
        with_temp_dirs(|_| {
            let mut app = App {
                screen: Screen::Settings,
                ..App::default()
            };
            let _ = app.update(Message::Settings(
                settings::Message::DefaultSizeInputChanged("128".into()),
            ));

            let _ = app.update(Message::Settings(settings::Message::Back));

            assert_eq!(app.screen, Screen::Generator);
            assert_eq!(app.settings.default_size(), 128);
        });
    }

    #[test]
    fn theme_mode_selection_applies_immediately() {
        with_temp_dirs(|_| {
            let mut app = App {
                screen: Screen::Settings,
                ..App::default()
            };

            let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
                ThemeMode::Light,
            )));

            assert_eq!(app.theme_mode, ThemeMode::Light);
            assert_eq!(app.theme(), Theme::Light);
        });
    }

    #[test]
    fn navbar_menu_items_switch_screens() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSettings));
        assert_eq!(app.screen, Screen::Settings);
        assert!(!app.menu_open);
    }

    #[test]
    fn help_and_about_return_to_generator() {
        let mut app = App {
            screen: Screen::Help,
            ..App::default()
        };
        let _ = app.update(Message::Help(crate::ui::help::Message::Back));
        assert_eq!(app.screen, Screen::Generator);

        app.screen = Screen::About;
        let _ = app.update(Message::About(crate::ui::about::Message::Back));
        assert_eq!(app.screen, Screen::Generator);
    }

    #[test]
    fn generate_with_text_produces_an_artifact() {
        let app = app_with_artifact();
        assert!(app.generator.artifact().is_some());
    }

    #[test]
    fn download_without_artifact_warns() {
        let mut app = App::default();

        let _ = app.update(Message::Generator(generator::Message::Download(
            ExportFormat::Png,
        )));

        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn download_shortcut_without_artifact_warns() {
        let mut app = App::default();

        let _ = app.update(Message::DownloadShortcut);

        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn copy_text_pushes_a_success_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Generator(generator::Message::TextChanged(
            "hello".into(),
        )));

        let _ = app.update(Message::Generator(generator::Message::CopyText));

        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn save_dialog_cancel_is_a_no_op() {
        let mut app = app_with_artifact();

        let _ = app.update(Message::SaveDialogResult {
            path: None,
            format: ExportFormat::Png,
        });

        assert_eq!(app.notifications.visible_count(), 0);
        assert!(app.app_state.last_export_format.is_none());
    }

    #[test]
    fn save_dialog_result_writes_the_file_and_remembers_the_format() {
        with_temp_dirs(|dir| {
            let mut app = app_with_artifact();
            let target = dir.join("qrcode.svg");

            let _ = app.update(Message::SaveDialogResult {
                path: Some(target.clone()),
                format: ExportFormat::Svg,
            });

            assert!(target.exists());
            assert_eq!(app.app_state.last_export_format, Some(ExportFormat::Svg));
            assert_eq!(
                app.app_state.last_save_directory.as_deref(),
                Some(dir)
            );
            assert_eq!(app.notifications.visible_count(), 1);
        });
    }

    #[test]
    fn typed_extension_overrides_the_requested_format() {
        with_temp_dirs(|dir| {
            let mut app = app_with_artifact();
            let target = dir.join("renamed.svg");

            let _ = app.update(Message::SaveDialogResult {
                path: Some(target.clone()),
                format: ExportFormat::Png,
            });

            let contents = std::fs::read_to_string(&target).expect("failed to read export");
            assert!(contents.starts_with("<?xml"));
            assert_eq!(app.app_state.last_export_format, Some(ExportFormat::Svg));
        });
    }

    #[test]
    fn save_dialog_result_failure_pushes_an_error_toast() {
        with_temp_dirs(|dir| {
            let mut app = app_with_artifact();
            // Parent directory that cannot be created as a directory
            let blocker = dir.join("blocker");
            std::fs::write(&blocker, b"file").expect("failed to write blocker");
            let target = blocker.join("qrcode.png");

            let _ = app.update(Message::SaveDialogResult {
                path: Some(target),
                format: ExportFormat::Png,
            });

            assert_eq!(app.notifications.visible_count(), 1);
            assert!(app.app_state.last_export_format.is_none());
        });
    }

    #[test]
    fn tick_dismisses_expired_notifications() {
        let mut app = App::default();
        app.notifications
            .push(notifications::Notification::success("notification-copy-success"));
        assert!(app.notifications.has_notifications());

        // A fresh success toast is not yet expired
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn clamp_symbol_size_bounds_values() {
        assert_eq!(clamp_symbol_size(10), config::MIN_SYMBOL_SIZE_PX);
        assert_eq!(clamp_symbol_size(256), 256);
        assert_eq!(clamp_symbol_size(20_000), config::MAX_SYMBOL_SIZE_PX);
    }
}
