// SPDX-License-Identifier: MPL-2.0
//! Export of generated symbols to PNG and SVG files.
//!
//! The two formats take fully separate paths: PNG re-encodes the pixels
//! rendered at generation time, while SVG writes a fresh vector document
//! from the module matrix.

use crate::error::{Error, Result};
use crate::qr::artifact::Artifact;
use crate::qr::svg_export;
use image_rs::{ImageBuffer, Rgba};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Supported download formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// Raster export at the configured pixel size.
    #[default]
    Png,
    /// Vector export, resolution independent.
    Svg,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }

    /// Returns the filter label shown by the native save dialog.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG image",
            ExportFormat::Svg => "SVG document",
        }
    }

    /// Detects format from a file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "svg" => Some(ExportFormat::Svg),
            _ => None,
        }
    }

    /// Detects format from a file path extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Default filename offered by the save dialog.
    #[must_use]
    pub fn default_filename(&self) -> String {
        format!("qrcode.{}", self.extension())
    }
}

/// Writes the artifact to `path` in the requested format.
///
/// # Errors
///
/// Returns [`Error::Io`] if encoding fails or the file cannot be written.
pub fn save(artifact: &Artifact, format: ExportFormat, path: &Path) -> Result<()> {
    match format {
        ExportFormat::Png => save_png(artifact, path),
        ExportFormat::Svg => save_svg(artifact, path),
    }
}

/// Encodes the rendered pixels as PNG and writes them to `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if encoding fails or the file cannot be written.
pub fn save_png(artifact: &Artifact, path: &Path) -> Result<()> {
    let img: ImageBuffer<Rgba<u8>, _> =
        ImageBuffer::from_raw(artifact.size, artifact.size, artifact.rgba_bytes().to_vec())
            .ok_or_else(|| {
                Error::Io("Failed to create image buffer from rendered pixels".to_string())
            })?;

    img.save_with_format(path, image_rs::ImageFormat::Png)
        .map_err(|e| Error::Io(format!("Failed to save PNG: {e}")))?;

    Ok(())
}

/// Writes the vector document for the artifact to `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn save_svg(artifact: &Artifact, path: &Path) -> Result<()> {
    let doc = svg_export::document(artifact.modules(), artifact.form());
    fs::write(path, doc)?;

    Ok(())
}
