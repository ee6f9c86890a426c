// SPDX-License-Identifier: MPL-2.0
//! Generated artifact: the rendered symbol plus the form snapshot it was
//! produced from.

use std::sync::Arc;

use iced::widget::image;

use crate::error::Result;
use crate::qr::form::FormState;
use crate::qr::render::{self, ModuleGrid};

/// A finished QR symbol.
///
/// Generating replaces the previous artifact wholesale. Edits made to the
/// live form afterwards do not affect an existing artifact; exports always
/// read from the snapshot taken at generation time.
#[derive(Debug, Clone)]
pub struct Artifact {
    form: FormState,
    modules: ModuleGrid,
    /// Preview handle for the on-screen image widget.
    pub handle: image::Handle,
    /// Rendered edge length in pixels.
    pub size: u32,
    /// Straight RGBA bytes backing the PNG export.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl Artifact {
    /// Encodes and renders `form` into a finished artifact.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Encode`] when the text does not fit
    /// any QR symbol version, and [`crate::error::Error::Render`] when the
    /// pixel surface cannot be allocated.
    pub fn generate(form: &FormState) -> Result<Self> {
        let modules = render::encode_modules(&form.text, form.error_correction)?;
        let pixels = render::rasterize(&modules, form)?;

        let size = form.size.value();
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(size, size, rgba_bytes.to_vec());

        Ok(Self {
            form: form.clone(),
            modules,
            handle,
            size,
            rgba_bytes,
        })
    }

    /// The form snapshot the artifact was generated from.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The encoded module matrix, used by the SVG export.
    pub fn modules(&self) -> &ModuleGrid {
        &self.modules
    }

    /// Returns a reference to the rendered RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Background description of the snapshot, shown under the preview.
    pub fn background_style(&self) -> String {
        self.form.background_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EncodeError, Error};
    use crate::qr::form::{GradientType, RgbColor, SizePixels};

    #[test]
    fn generate_snapshots_the_form() {
        let mut form = FormState {
            text: "https://example.com".to_string(),
            ..FormState::default()
        };
        let artifact = Artifact::generate(&form).expect("generation should succeed");

        form.text = "edited afterwards".to_string();
        assert_eq!(artifact.form().text, "https://example.com");
    }

    #[test]
    fn generate_reports_pixel_dimensions() {
        let form = FormState {
            text: "hello".to_string(),
            size: SizePixels::new(300),
            ..FormState::default()
        };
        let artifact = Artifact::generate(&form).expect("generation should succeed");

        assert_eq!(artifact.size, 300);
        assert_eq!(artifact.rgba_bytes().len(), 300 * 300 * 4);
        assert!(artifact.modules().width() > 0);
    }

    #[test]
    fn generate_propagates_encode_failures() {
        let form = FormState {
            text: "a".repeat(8000),
            ..FormState::default()
        };

        match Artifact::generate(&form) {
            Err(Error::Encode(EncodeError::DataTooLong)) => {}
            other => panic!("expected DataTooLong, got {other:?}"),
        }
    }

    #[test]
    fn background_style_reflects_the_snapshot() {
        let form = FormState {
            text: "hello".to_string(),
            gradient_enabled: true,
            gradient_type: GradientType::Radial,
            gradient_start: RgbColor::new(0xff, 0x00, 0x00),
            gradient_end: RgbColor::new(0x00, 0xff, 0x00),
            ..FormState::default()
        };
        let artifact = Artifact::generate(&form).expect("generation should succeed");

        assert_eq!(
            artifact.background_style(),
            "radial-gradient(#ff0000, #00ff00)"
        );
    }
}
