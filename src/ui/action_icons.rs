// SPDX-License-Identifier: MPL-2.0
//! Semantic action icons mapping.
//!
//! This module provides a semantic layer over [`icons`](super::icons), mapping
//! user actions to their visual icon representations. This separation allows
//! changing an action's icon in one place without modifying all usage sites.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Component / Help Screen         │  ← Uses semantic names
//! ├─────────────────────────────────────────┤
//! │         action_icons (this module)      │  ← Semantic → Visual mapping
//! ├─────────────────────────────────────────┤
//! │         icons (visual primitives)       │  ← Raw PNG assets
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - **`navigation::*`** - Navbar and menu icons
//! - **`generator::*`** - Generator screen actions (theme-aware where needed)
//! - **`notification::*`** - Icons for toast notifications
//! - **`sections::*`** - Icons for settings and help section headers
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::action_icons;
//!
//! let menu = button(action_icons::navigation::menu());
//! let save = button(action_icons::generator::download(is_dark_theme));
//! ```
//!
//! # Naming Convention
//!
//! Functions are named by **what action they represent**, not what they look like.
//! The underlying visual icon can change without affecting call sites.

use super::icons;

// =============================================================================
// Navigation Actions
// =============================================================================

/// Icons for app navigation.
pub mod navigation {
    use super::icons;
    use iced::widget::image::{Handle, Image};

    /// Open hamburger menu (light icon for navbar button).
    #[must_use]
    pub fn menu() -> Image<Handle> {
        icons::light::hamburger()
    }

    /// Open settings.
    #[must_use]
    pub fn settings() -> Image<Handle> {
        icons::cog()
    }

    /// Open help.
    #[must_use]
    pub fn help() -> Image<Handle> {
        icons::help()
    }

    /// Open about screen.
    #[must_use]
    pub fn about() -> Image<Handle> {
        icons::info()
    }

    /// Close / dismiss.
    #[must_use]
    pub fn close() -> Image<Handle> {
        icons::cross()
    }
}

// =============================================================================
// Generator Actions
// =============================================================================

/// Icons for the generator screen.
pub mod generator {
    use super::icons;
    use iced::widget::image::{Handle, Image};

    /// Download the rendered symbol.
    /// Returns dark icon for light theme, light icon for dark theme.
    #[must_use]
    pub fn download(is_dark_theme: bool) -> Image<Handle> {
        if is_dark_theme {
            icons::light::download()
        } else {
            icons::download()
        }
    }

    /// Copy the input text to the clipboard.
    /// Returns dark icon for light theme, light icon for dark theme.
    #[must_use]
    pub fn copy(is_dark_theme: bool) -> Image<Handle> {
        if is_dark_theme {
            icons::light::copy()
        } else {
            icons::copy()
        }
    }

    /// Placeholder shown in the preview area before the first generation.
    /// Returns dark icon for light theme, light icon for dark theme.
    #[must_use]
    pub fn placeholder(is_dark_theme: bool) -> Image<Handle> {
        if is_dark_theme {
            icons::light::qr_grid()
        } else {
            icons::qr_grid()
        }
    }
}

// =============================================================================
// Notification Severity Icons
// =============================================================================

/// Icons for notification severities.
pub mod notification {
    use super::icons;
    use iced::widget::image::{Handle, Image};

    /// Success notification.
    #[must_use]
    pub fn success() -> Image<Handle> {
        icons::checkmark()
    }

    /// Warning notification.
    #[must_use]
    pub fn warning() -> Image<Handle> {
        icons::warning()
    }

    /// Error notification.
    #[must_use]
    pub fn error() -> Image<Handle> {
        icons::warning()
    }

    /// Info notification.
    #[must_use]
    pub fn info() -> Image<Handle> {
        icons::info()
    }
}

// =============================================================================
// Section Header Icons
// =============================================================================

/// Icons for settings and help screen sections.
pub mod sections {
    use super::icons;
    use iced::widget::image::{Handle, Image};

    /// Language selection section.
    #[must_use]
    pub fn language() -> Image<Handle> {
        icons::globe()
    }

    /// Appearance / theme section.
    #[must_use]
    pub fn appearance() -> Image<Handle> {
        icons::droplet()
    }

    /// Generator defaults section.
    #[must_use]
    pub fn generator_defaults() -> Image<Handle> {
        icons::sliders()
    }

    /// Generator form documentation section.
    #[must_use]
    pub fn generator() -> Image<Handle> {
        icons::qr_grid()
    }

    /// Styling / gradient documentation section.
    #[must_use]
    pub fn styling() -> Image<Handle> {
        icons::droplet()
    }

    /// Export documentation section.
    #[must_use]
    pub fn export() -> Image<Handle> {
        icons::download()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Re-export of [`icons::sized`] for convenience.
pub use icons::sized;

// =============================================================================
// Tests
// =============================================================================
