// SPDX-License-Identifier: MPL-2.0
//! Rasterization of QR symbols into RGBA pixel buffers.
//!
//! Encoding is delegated to the `qrcode` crate. Drawing goes through
//! `tiny-skia` so gradient backgrounds use the same geometry as the
//! SVG export.

use qrcode::QrCode;
use tiny_skia::{
    GradientStop, LinearGradient, Paint, Pixmap, Point, RadialGradient, Rect, Shader, SpreadMode,
    Transform,
};

use crate::app::config::defaults::QUIET_ZONE_MODULES;
use crate::error::{Error, Result};
use crate::qr::form::{ErrorCorrection, FormState, GradientType, RgbColor};

/// Dark/light module matrix of an encoded symbol, without the quiet zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    width: usize,
    dark: Vec<bool>,
}

impl ModuleGrid {
    fn from_code(code: &QrCode) -> Self {
        let width = code.width();
        let dark = code
            .to_colors()
            .into_iter()
            .map(|module| matches!(module, qrcode::Color::Dark))
            .collect();

        Self { width, dark }
    }

    /// Side length of the symbol in modules.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at `(x, y)` is dark.
    ///
    /// Coordinates outside the symbol count as light, matching the quiet
    /// zone that surrounds it.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.width {
            return false;
        }

        self.dark[y * self.width + x]
    }
}

/// Encodes `text` into a module matrix at the requested error correction
/// level. The symbol version is chosen automatically by the encoder.
pub fn encode_modules(text: &str, level: ErrorCorrection) -> Result<ModuleGrid> {
    let code = QrCode::with_error_correction_level(text, level.ec_level())?;

    Ok(ModuleGrid::from_code(&code))
}

/// Renders the symbol into a square `size x size` straight RGBA buffer.
///
/// The symbol is centered inside a quiet zone of [`QUIET_ZONE_MODULES`]
/// modules on every side. All fill colors are fully opaque, so the
/// premultiplied pixmap contents are valid straight RGBA as-is.
pub fn rasterize(modules: &ModuleGrid, form: &FormState) -> Result<Vec<u8>> {
    let size = form.size.value();
    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| Error::Render(format!("cannot allocate a {size}x{size} surface")))?;

    fill_background(&mut pixmap, form);

    let total_modules = modules.width() as u32 + 2 * QUIET_ZONE_MODULES;
    let module_px = size as f32 / total_modules as f32;
    let origin = QUIET_ZONE_MODULES as f32 * module_px;

    let mut paint = Paint::default();
    paint.set_color(skia_color(form.foreground));
    paint.anti_alias = false;

    for y in 0..modules.width() {
        let mut x = 0;
        while x < modules.width() {
            if !modules.is_dark(x, y) {
                x += 1;
                continue;
            }

            // Merge a horizontal run of dark modules into one rectangle.
            let run_start = x;
            while x < modules.width() && modules.is_dark(x, y) {
                x += 1;
            }

            let rect = Rect::from_xywh(
                origin + run_start as f32 * module_px,
                origin + y as f32 * module_px,
                (x - run_start) as f32 * module_px,
                module_px,
            );
            if let Some(rect) = rect {
                pixmap.fill_rect(rect, &paint, Transform::identity(), None);
            }
        }
    }

    Ok(pixmap.take())
}

fn fill_background(pixmap: &mut Pixmap, form: &FormState) {
    if !form.gradient_enabled {
        pixmap.fill(skia_color(form.background));
        return;
    }

    let size = pixmap.width() as f32;
    let shader = gradient_shader(form, size);
    let rect = Rect::from_xywh(0.0, 0.0, size, size);
    let (Some(shader), Some(rect)) = (shader, rect) else {
        // Degenerate gradient geometry. Fall back to a flat fill with the
        // first stop color.
        pixmap.fill(skia_color(form.gradient_start));
        return;
    };

    let mut paint = Paint::default();
    paint.shader = shader;
    paint.anti_alias = false;
    pixmap.fill_rect(rect, &paint, Transform::identity(), None);
}

fn gradient_shader(form: &FormState, size: f32) -> Option<Shader<'static>> {
    let stops = vec![
        GradientStop::new(0.0, skia_color(form.gradient_start)),
        GradientStop::new(1.0, skia_color(form.gradient_end)),
    ];

    match form.gradient_type {
        GradientType::Linear => LinearGradient::new(
            Point::from_xy(0.0, 0.0),
            Point::from_xy(0.0, size),
            stops,
            SpreadMode::Pad,
            Transform::identity(),
        ),
        GradientType::Radial => {
            let center = size / 2.0;
            // Radius reaches the farthest corner of the surface.
            let radius = size * std::f32::consts::FRAC_1_SQRT_2;
            RadialGradient::new(
                Point::from_xy(center, center),
                Point::from_xy(center, center),
                radius,
                stops,
                SpreadMode::Pad,
                Transform::identity(),
            )
        }
    }
}

fn skia_color(color: RgbColor) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncodeError;
    use crate::qr::form::SizePixels;

    fn pixel(data: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * size + x) * 4) as usize;
        [data[i], data[i + 1], data[i + 2], data[i + 3]]
    }

    #[test]
    fn encode_produces_square_grid() {
        let grid = encode_modules("hello", ErrorCorrection::Low).unwrap();

        // Short payloads fit the smallest symbol version.
        assert_eq!(grid.width(), 21);
        // Finder patterns put a dark module in three of the four corners.
        assert!(grid.is_dark(0, 0));
        assert!(grid.is_dark(grid.width() - 1, 0));
        assert!(grid.is_dark(0, grid.width() - 1));
    }

    #[test]
    fn out_of_range_modules_are_light() {
        let grid = encode_modules("hello", ErrorCorrection::Low).unwrap();

        assert!(!grid.is_dark(grid.width(), 0));
        assert!(!grid.is_dark(0, grid.width()));
    }

    #[test]
    fn encode_rejects_oversized_input() {
        let long = "a".repeat(8000);
        let err = encode_modules(&long, ErrorCorrection::High).unwrap_err();

        assert!(matches!(err, Error::Encode(EncodeError::DataTooLong)));
    }

    #[test]
    fn higher_correction_grows_the_symbol() {
        let payload = "https://example.com/some/longer/path";
        let low = encode_modules(payload, ErrorCorrection::Low).unwrap();
        let high = encode_modules(payload, ErrorCorrection::High).unwrap();

        assert!(high.width() > low.width());
    }

    #[test]
    fn rasterize_fills_quiet_zone_with_background() {
        let form = FormState {
            text: "hello".to_string(),
            size: SizePixels::new(210),
            ..FormState::default()
        };
        let grid = encode_modules(&form.text, form.error_correction).unwrap();
        let data = rasterize(&grid, &form).unwrap();

        assert_eq!(data.len(), 210 * 210 * 4);
        assert_eq!(pixel(&data, 210, 0, 0), [255, 255, 255, 255]);
        assert_eq!(pixel(&data, 210, 209, 209), [255, 255, 255, 255]);
    }

    #[test]
    fn rasterize_honors_custom_colors() {
        // 290 px over 21 + 8 modules gives exactly 10 px per module, so
        // the top-left finder module covers pixels 40..50.
        let form = FormState {
            text: "hello".to_string(),
            foreground: RgbColor::new(16, 32, 64),
            background: RgbColor::new(250, 240, 230),
            size: SizePixels::new(290),
            ..FormState::default()
        };
        let grid = encode_modules(&form.text, form.error_correction).unwrap();
        let data = rasterize(&grid, &form).unwrap();

        assert_eq!(pixel(&data, 290, 1, 1), [250, 240, 230, 255]);
        assert_eq!(pixel(&data, 290, 45, 45), [16, 32, 64, 255]);
    }

    #[test]
    fn linear_gradient_runs_top_to_bottom() {
        let form = FormState {
            text: "hello".to_string(),
            size: SizePixels::new(200),
            gradient_enabled: true,
            gradient_start: RgbColor::new(255, 0, 0),
            gradient_end: RgbColor::new(0, 0, 255),
            ..FormState::default()
        };
        let grid = encode_modules(&form.text, form.error_correction).unwrap();
        let data = rasterize(&grid, &form).unwrap();

        let top = pixel(&data, 200, 0, 0);
        let bottom = pixel(&data, 200, 0, 199);
        assert!(top[0] > 200 && top[2] < 50, "top should be near the start color: {top:?}");
        assert!(bottom[2] > 200 && bottom[0] < 50, "bottom should be near the end color: {bottom:?}");
    }

    #[test]
    fn radial_gradient_ends_at_the_corners() {
        let form = FormState {
            text: "hello".to_string(),
            size: SizePixels::new(200),
            gradient_enabled: true,
            gradient_type: GradientType::Radial,
            gradient_start: RgbColor::new(255, 0, 0),
            gradient_end: RgbColor::new(0, 0, 255),
            ..FormState::default()
        };
        let grid = encode_modules(&form.text, form.error_correction).unwrap();
        let data = rasterize(&grid, &form).unwrap();

        // Corners sit at the full gradient radius.
        let corner = pixel(&data, 200, 0, 0);
        assert!(corner[2] > 200 && corner[0] < 50, "corner should be near the end color: {corner:?}");

        // The top edge midpoint is closer to the center, so both stops
        // contribute. A top-to-bottom linear gradient would leave it pure
        // red instead.
        let top_mid = pixel(&data, 200, 100, 0);
        assert!(top_mid[0] < 130, "radial falloff should mix the colors: {top_mid:?}");
        assert!(top_mid[2] > 130, "radial falloff should mix the colors: {top_mid:?}");
    }
}
