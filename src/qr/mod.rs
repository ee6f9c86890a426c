// SPDX-License-Identifier: MPL-2.0
//! QR symbol generation: form state, encoding, rendering, and export.

pub mod artifact;
pub mod export;
pub mod form;
pub mod render;
pub mod svg_export;

// Re-export commonly used types
pub use artifact::Artifact;
pub use export::ExportFormat;
pub use form::{ErrorCorrection, FormState, GradientType, RgbColor, SizePixels};
pub use render::ModuleGrid;
