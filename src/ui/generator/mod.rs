// SPDX-License-Identifier: MPL-2.0
//! Generator screen: the QR form, preview, and export actions.
//!
//! This module follows the same "state down, messages up" pattern as the
//! settings module. The form holds the live field values; generating takes
//! an immutable snapshot of them, so later edits never touch an existing
//! artifact. Side effects (save dialog, clipboard, toasts) are requested
//! from the parent through [`Event`].

use crate::app::config::GeneratorConfig;
use crate::error::Error;
use crate::qr::artifact::Artifact;
use crate::qr::form::{FormState, RgbColor, SizePixels};

mod messages;
mod view;

pub use messages::{Channel, ColorField, Event, Message};
pub use view::ViewContext;

/// Editable hex text buffer for one color field.
///
/// The buffer keeps whatever the user typed; the form color only changes
/// when the buffer parses. An unparseable buffer flags the field and leaves
/// the last committed color in place.
#[derive(Debug, Clone)]
struct HexInput {
    buffer: String,
    error_key: Option<&'static str>,
}

impl HexInput {
    fn from_color(color: RgbColor) -> Self {
        Self {
            buffer: color.to_hex(),
            error_key: None,
        }
    }

    /// Resets the buffer to the canonical hex of `color` and clears the flag.
    fn sync(&mut self, color: RgbColor) {
        self.buffer = color.to_hex();
        self.error_key = None;
    }
}

/// Local UI state for the generator screen.
#[derive(Debug, Clone)]
pub struct State {
    /// Live form values, mutated only by [`State::update`].
    form: FormState,
    /// Raw text of the size input.
    size_input: String,
    /// Set while the size input does not match the committed size.
    size_error_key: Option<&'static str>,
    foreground_hex: HexInput,
    background_hex: HexInput,
    gradient_start_hex: HexInput,
    gradient_end_hex: HexInput,
    /// Last successfully generated artifact, replaced wholesale.
    artifact: Option<Artifact>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl State {
    /// Creates a fresh form, applying the configured generator defaults.
    #[must_use]
    pub fn new(defaults: &GeneratorConfig) -> Self {
        let mut form = FormState::default();
        if let Some(size) = defaults.symbol_size {
            form.size = SizePixels::new(size);
        }
        if let Some(level) = defaults.error_correction {
            form.error_correction = level;
        }

        Self {
            size_input: form.size.value().to_string(),
            size_error_key: None,
            foreground_hex: HexInput::from_color(form.foreground),
            background_hex: HexInput::from_color(form.background),
            gradient_start_hex: HexInput::from_color(form.gradient_start),
            gradient_end_hex: HexInput::from_color(form.gradient_end),
            artifact: None,
            form,
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TextChanged(value) => {
                self.form.text = value;
                Event::None
            }
            Message::SizeInputChanged(value) => {
                self.handle_size_input(value);
                Event::None
            }
            Message::SizeInputSubmitted => {
                self.commit_size_input();
                Event::None
            }
            Message::ErrorCorrectionSelected(level) => {
                self.form.error_correction = level;
                Event::None
            }
            Message::HexInputChanged(field, value) => {
                self.handle_hex_input(field, value);
                Event::None
            }
            Message::ChannelChanged(field, channel, value) => {
                self.handle_channel_change(field, channel, value);
                Event::None
            }
            Message::GradientToggled(enabled) => {
                self.form.gradient_enabled = enabled;
                Event::None
            }
            Message::GradientTypeSelected(kind) => {
                self.form.gradient_type = kind;
                Event::None
            }
            Message::Generate => self.handle_generate(),
            Message::Download(format) => {
                if self.artifact.is_some() {
                    Event::DownloadRequested(format)
                } else {
                    Event::ExportUnavailable
                }
            }
            Message::CopyText => Event::CopyRequested(self.form.text.clone()),
        }
    }

    /// The live form values.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The last generated artifact, if any.
    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    /// Whether at least one generation has succeeded.
    #[must_use]
    pub fn has_artifact(&self) -> bool {
        self.artifact.is_some()
    }

    /// Seeds the text field, used for the positional CLI argument.
    pub fn set_text(&mut self, text: String) {
        self.form.text = text;
    }

    /// Parses the size buffer, committing the clamped value on every edit.
    ///
    /// The buffer keeps the raw text while the user types; a flag is set
    /// whenever the committed size disagrees with it.
    fn handle_size_input(&mut self, value: String) {
        match value.trim().parse::<u32>() {
            Ok(raw) => {
                let clamped = SizePixels::new(raw);
                self.form.size = clamped;
                self.size_error_key =
                    (clamped.value() != raw).then_some("generator-size-error-range");
            }
            Err(_) => {
                self.size_error_key = Some("generator-size-error-invalid");
            }
        }
        self.size_input = value;
    }

    /// Echoes the committed size back into the buffer and clears the flag.
    fn commit_size_input(&mut self) {
        self.size_input = self.form.size.value().to_string();
        self.size_error_key = None;
    }

    fn handle_hex_input(&mut self, field: ColorField, value: String) {
        match RgbColor::from_hex(&value) {
            Some(color) => {
                *self.color_mut(field) = color;
                let hex = self.hex_input_mut(field);
                hex.buffer = value;
                hex.error_key = None;
            }
            None => {
                let hex = self.hex_input_mut(field);
                hex.buffer = value;
                hex.error_key = Some("generator-color-error-invalid");
            }
        }
    }

    fn handle_channel_change(&mut self, field: ColorField, channel: Channel, value: u8) {
        let committed = {
            let color = self.color_mut(field);
            match channel {
                Channel::Red => color.r = value,
                Channel::Green => color.g = value,
                Channel::Blue => color.b = value,
            }
            *color
        };
        self.hex_input_mut(field).sync(committed);
    }

    fn handle_generate(&mut self) -> Event {
        // Empty input is a strict no-op: no artifact, no error shown.
        if !self.form.can_generate() {
            return Event::None;
        }

        match Artifact::generate(&self.form) {
            Ok(artifact) => {
                self.artifact = Some(artifact);
                Event::None
            }
            Err(Error::Encode(encode)) => Event::GenerateFailed {
                message_key: encode.i18n_key(),
            },
            Err(_) => Event::GenerateFailed {
                message_key: "error-render-failed",
            },
        }
    }

    fn color_mut(&mut self, field: ColorField) -> &mut RgbColor {
        match field {
            ColorField::Foreground => &mut self.form.foreground,
            ColorField::Background => &mut self.form.background,
            ColorField::GradientStart => &mut self.form.gradient_start,
            ColorField::GradientEnd => &mut self.form.gradient_end,
        }
    }

    fn color(&self, field: ColorField) -> RgbColor {
        match field {
            ColorField::Foreground => self.form.foreground,
            ColorField::Background => self.form.background,
            ColorField::GradientStart => self.form.gradient_start,
            ColorField::GradientEnd => self.form.gradient_end,
        }
    }

    fn hex_input(&self, field: ColorField) -> &HexInput {
        match field {
            ColorField::Foreground => &self.foreground_hex,
            ColorField::Background => &self.background_hex,
            ColorField::GradientStart => &self.gradient_start_hex,
            ColorField::GradientEnd => &self.gradient_end_hex,
        }
    }

    fn hex_input_mut(&mut self, field: ColorField) -> &mut HexInput {
        match field {
            ColorField::Foreground => &mut self.foreground_hex,
            ColorField::Background => &mut self.background_hex,
            ColorField::GradientStart => &mut self.gradient_start_hex,
            ColorField::GradientEnd => &mut self.gradient_end_hex,
        }
    }
}
