// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Symbol Size Defaults
// ==========================================================================

/// Default rendered symbol size in pixels.
pub const DEFAULT_SYMBOL_SIZE_PX: u32 = 256;

/// Minimum allowed symbol size in pixels.
pub const MIN_SYMBOL_SIZE_PX: u32 = 50;

/// Maximum allowed symbol size in pixels.
pub const MAX_SYMBOL_SIZE_PX: u32 = 1000;

// ==========================================================================
// Quiet Zone
// ==========================================================================

/// Width of the quiet zone around the symbol, in modules.
/// The QR standard mandates at least four.
pub const QUIET_ZONE_MODULES: u32 = 4;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SYMBOL_SIZE_PX > 0);
    assert!(MAX_SYMBOL_SIZE_PX > MIN_SYMBOL_SIZE_PX);
    assert!(DEFAULT_SYMBOL_SIZE_PX >= MIN_SYMBOL_SIZE_PX);
    assert!(DEFAULT_SYMBOL_SIZE_PX <= MAX_SYMBOL_SIZE_PX);

    assert!(QUIET_ZONE_MODULES >= 4);
};
