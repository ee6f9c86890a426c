// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for PNG icons.
//!
//! PNG format ensures consistent cross-platform rendering (no SVG interpretation
//! differences on Windows). Icons are embedded at compile time via `include_bytes!`
//! and handles are cached using `OnceLock` for optimal performance.
//!
//! # Module Structure
//!
//! - **`icons::*`** - Dark icons (black) for light surfaces
//! - **`icons::light::*`** - Light icons (white) for colored buttons and dark theme UI
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let save_button = button(icons::download());
//! let menu_button = button(icons::light::hamburger());
//! ```
//!
//! For theme-aware icons, use [`action_icons`](super::action_icons) which
//! automatically selects the correct variant based on theme.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `download` not `export_png`).

use iced::widget::image::{Handle, Image};
use iced::Length;
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
///
/// Icons are generated from SVG sources at build time and placed in `OUT_DIR`.
macro_rules! define_icon {
    ($name:ident, dark, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Image<Handle> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("OUT_DIR"), "/icons/dark/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_bytes(DATA));
            Image::new(handle.clone())
        }
    };
    ($name:ident, light, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Image<Handle> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("OUT_DIR"), "/icons/light/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_bytes(DATA));
            Image::new(handle.clone())
        }
    };
}

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(
    hamburger,
    dark,
    "hamburger.png",
    "Hamburger menu icon: three horizontal lines."
);
define_icon!(cog, dark, "cog.png", "Cog icon: gear/settings.");
define_icon!(
    help,
    dark,
    "help.png",
    "Help icon: question mark in circle."
);
define_icon!(info, dark, "info.png", "Info icon: letter 'i' in circle.");

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(
    warning,
    dark,
    "warning.png",
    "Warning icon: triangle with exclamation mark."
);
define_icon!(
    checkmark,
    dark,
    "checkmark.png",
    "Checkmark icon: check/tick mark for success."
);
define_icon!(cross, dark, "cross.png", "Cross icon: X mark shape.");

// =============================================================================
// Action Icons
// =============================================================================

define_icon!(
    download,
    dark,
    "download.png",
    "Download icon: arrow pointing down into a tray."
);
define_icon!(
    copy,
    dark,
    "copy.png",
    "Copy icon: two overlapping rectangles."
);

// =============================================================================
// Section Icons
// =============================================================================

define_icon!(
    globe,
    dark,
    "globe.png",
    "Globe icon: world/international (for language settings)."
);
define_icon!(
    sliders,
    dark,
    "sliders.png",
    "Sliders icon: three horizontal tracks with knobs."
);
define_icon!(
    droplet,
    dark,
    "droplet.png",
    "Droplet icon: teardrop shape (for color and gradient settings)."
);
define_icon!(
    qr_grid,
    dark,
    "qr_grid.png",
    "QR grid icon: stylized grid of square modules."
);

// =============================================================================
// Light Icons (White variants for colored buttons and dark theme UI)
// =============================================================================

/// Light icon variants (white) for colored button backgrounds and dark theme UI.
///
/// Access via [`action_icons`](super::action_icons) for semantic usage.
#[allow(clippy::wildcard_imports)] // Required for define_icon! macro expansion
pub mod light {
    use super::*;

    define_icon!(
        hamburger,
        light,
        "hamburger.png",
        "Hamburger menu icon (white): for navbar."
    );
    define_icon!(
        download,
        light,
        "download.png",
        "Download icon (white): for dark theme UI."
    );
    define_icon!(
        copy,
        light,
        "copy.png",
        "Copy icon (white): for dark theme UI."
    );
    define_icon!(
        qr_grid,
        light,
        "qr_grid.png",
        "QR grid icon (white): for dark theme UI."
    );
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized(icon: Image<Handle>, size: f32) -> Image<Handle> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
