// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::qr::export::ExportFormat;
use crate::ui::about;
use crate::ui::generator;
use crate::ui::help;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Generator(generator::Message),
    SwitchScreen(Screen),
    Settings(settings::Message),
    Navbar(navbar::Message),
    Help(help::Message),
    About(about::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the export save dialog.
    SaveDialogResult {
        path: Option<PathBuf>,
        format: ExportFormat,
    },
    /// Keyboard shortcut requesting an export with the last used format.
    DownloadShortcut,
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional text to pre-fill the generator input with.
    pub initial_text: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `ICED_QR_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_QR_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
