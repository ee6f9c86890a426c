// SPDX-License-Identifier: MPL-2.0
//! Generator message/event types re-exported by the facade.

use crate::qr::export::ExportFormat;
use crate::qr::form::{ErrorCorrection, GradientType};

/// One of the four editable color fields on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Foreground,
    Background,
    GradientStart,
    GradientEnd,
}

impl ColorField {
    /// Returns the i18n message key for the field label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ColorField::Foreground => "generator-foreground-label",
            ColorField::Background => "generator-background-label",
            ColorField::GradientStart => "generator-gradient-start-label",
            ColorField::GradientEnd => "generator-gradient-end-label",
        }
    }
}

/// A single RGB channel, addressed by the color sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Messages emitted by the generator widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Text to encode changed.
    TextChanged(String),
    /// Size input buffer changed (live validation).
    SizeInputChanged(String),
    /// Size input submitted (Enter), echoes the committed value back.
    SizeInputSubmitted,
    /// Error correction level picked from the toggle group.
    ErrorCorrectionSelected(ErrorCorrection),
    /// Hex buffer for a color field changed.
    HexInputChanged(ColorField, String),
    /// One RGB slider moved.
    ChannelChanged(ColorField, Channel, u8),
    /// Gradient checkbox toggled.
    GradientToggled(bool),
    /// Gradient shape picked from the toggle group.
    GradientTypeSelected(GradientType),
    /// Render the form into a new artifact.
    Generate,
    /// Export the current artifact in the given format.
    Download(ExportFormat),
    /// Copy the input text to the clipboard.
    CopyText,
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Generation failed; the key resolves to a toast message.
    GenerateFailed {
        message_key: &'static str,
    },
    /// Open the save dialog for the given format.
    DownloadRequested(ExportFormat),
    /// Export was invoked with no artifact to export.
    ExportUnavailable,
    /// Write the given text to the clipboard.
    CopyRequested(String),
}
