// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`generator`] - Main generator form with live preview and export actions
//! - [`settings`] - Application preferences and generator defaults
//! - [`help`] - Keyboard shortcuts and usage documentation
//! - [`about`] - Application version and credits
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - PNG icon loading and rendering (visual primitives)
//! - [`action_icons`] - Semantic action-to-icon mapping
//! - [`navbar`] - Navigation bar with hamburger menu
//! - [`notifications`] - Toast notification system for user feedback

pub mod about;
pub mod action_icons;
pub mod design_tokens;
pub mod generator;
pub mod help;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
