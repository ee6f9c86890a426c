// SPDX-License-Identifier: MPL-2.0
//! Form state for the generator.
//!
//! This module holds the user-editable fields that describe a QR symbol
//! before it is rendered: the encoded text, colors, pixel size, error
//! correction level, and the optional background gradient. Field values are
//! stored verbatim as the user edits them; the only invariant enforced here
//! is the symbol size range, which the [`SizePixels`] type guarantees.

use crate::app::config::{DEFAULT_SYMBOL_SIZE_PX, MAX_SYMBOL_SIZE_PX, MIN_SYMBOL_SIZE_PX};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque sRGB color with 8-bit channels.
///
/// Parses from `#rrggbb` hex notation (the leading `#` is optional) and
/// formats back to lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` hex string. Case-insensitive, leading `#` optional.
    ///
    /// Returns `None` for anything that is not exactly six hex digits.
    #[must_use]
    pub fn from_hex(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Returns the lowercase `#rrggbb` representation.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Symbol size in pixels, guaranteed to be within the supported range.
///
/// This type ensures that size values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePixels(u32);

impl SizePixels {
    /// Creates a new size, clamping the value to the valid range.
    #[must_use]
    pub fn new(pixels: u32) -> Self {
        Self(pixels.clamp(MIN_SYMBOL_SIZE_PX, MAX_SYMBOL_SIZE_PX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns whether the size is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SYMBOL_SIZE_PX
    }

    /// Returns whether the size is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SYMBOL_SIZE_PX
    }
}

impl Default for SizePixels {
    fn default() -> Self {
        Self(DEFAULT_SYMBOL_SIZE_PX)
    }
}

/// QR symbol redundancy tier, trading capacity for damage tolerance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCorrection {
    /// Recovers from roughly 7% symbol damage.
    #[default]
    Low,
    /// Recovers from roughly 15% symbol damage.
    Medium,
    /// Recovers from roughly 25% symbol damage.
    Quartile,
    /// Recovers from roughly 30% symbol damage.
    High,
}

impl ErrorCorrection {
    /// All levels, in ascending redundancy order.
    pub const ALL: [ErrorCorrection; 4] = [
        ErrorCorrection::Low,
        ErrorCorrection::Medium,
        ErrorCorrection::Quartile,
        ErrorCorrection::High,
    ];

    /// Returns the i18n message key for this level.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ErrorCorrection::Low => "error-correction-low",
            ErrorCorrection::Medium => "error-correction-medium",
            ErrorCorrection::Quartile => "error-correction-quartile",
            ErrorCorrection::High => "error-correction-high",
        }
    }

    /// Maps to the encoder's error correction level.
    #[must_use]
    pub fn ec_level(self) -> qrcode::EcLevel {
        match self {
            ErrorCorrection::Low => qrcode::EcLevel::L,
            ErrorCorrection::Medium => qrcode::EcLevel::M,
            ErrorCorrection::Quartile => qrcode::EcLevel::Q,
            ErrorCorrection::High => qrcode::EcLevel::H,
        }
    }
}

/// Shape of the optional background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
}

impl GradientType {
    pub const ALL: [GradientType; 2] = [GradientType::Linear, GradientType::Radial];

    /// Returns the i18n message key for this gradient type.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            GradientType::Linear => "gradient-type-linear",
            GradientType::Radial => "gradient-type-radial",
        }
    }

    /// Lowercase keyword used in the background style string.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            GradientType::Linear => "linear",
            GradientType::Radial => "radial",
        }
    }
}

/// User-editable description of the QR symbol to render.
///
/// Mutated exclusively by the generator component's update handlers.
/// [`crate::qr::artifact::Artifact`] captures an immutable snapshot of this
/// struct at generation time.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Text to encode in the symbol.
    pub text: String,

    /// Color of the dark modules.
    pub foreground: RgbColor,

    /// Flat background color, used when the gradient is disabled.
    pub background: RgbColor,

    /// Rendered symbol edge length in pixels.
    pub size: SizePixels,

    /// Error correction level for the symbol.
    pub error_correction: ErrorCorrection,

    /// Whether the background uses a two-color gradient instead of the
    /// flat background color.
    pub gradient_enabled: bool,

    /// Shape of the background gradient.
    pub gradient_type: GradientType,

    /// First gradient stop color.
    pub gradient_start: RgbColor,

    /// Second gradient stop color.
    pub gradient_end: RgbColor,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            text: String::new(),
            foreground: RgbColor::BLACK,
            background: RgbColor::WHITE,
            size: SizePixels::default(),
            error_correction: ErrorCorrection::default(),
            gradient_enabled: false,
            gradient_type: GradientType::default(),
            gradient_start: RgbColor::BLACK,
            gradient_end: RgbColor::WHITE,
        }
    }
}

impl FormState {
    /// Returns whether the form describes an encodable symbol.
    ///
    /// Generation is a no-op while the trimmed text is empty.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Describes the background fill as a style string.
    ///
    /// Returns `"<type>-gradient(<color1>, <color2>)"` when the gradient is
    /// enabled, `"none"` otherwise.
    #[must_use]
    pub fn background_style(&self) -> String {
        if self.gradient_enabled {
            format!(
                "{}-gradient({}, {})",
                self.gradient_type.keyword(),
                self.gradient_start,
                self.gradient_end
            )
        } else {
            "none".to_string()
        }
    }
}
