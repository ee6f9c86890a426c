// SPDX-License-Identifier: MPL-2.0
//! Build script for compile-time asset generation.
//!
//! Renders the SVG icon sources into the PNG variants embedded by
//! `src/ui/icons.rs`: a dark set (black, for light surfaces) and a light
//! set (white, for colored buttons and dark theme UI). On Windows it also
//! embeds the application icon into the executable.

use std::env;
use std::fs;
use std::path::Path;

/// Icon names rendered in the dark (black) variant.
const DARK_ICONS: &[&str] = &[
    "hamburger",
    "cog",
    "help",
    "info",
    "warning",
    "checkmark",
    "cross",
    "download",
    "copy",
    "globe",
    "sliders",
    "droplet",
    "qr_grid",
];

/// Icon names additionally rendered in the light (white) variant.
const LIGHT_ICONS: &[&str] = &["hamburger", "download", "copy", "qr_grid"];

/// Edge length of the rendered icon bitmaps in pixels.
const ICON_SIZE_PX: u32 = 64;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");

    println!("cargo:rerun-if-changed=assets/icons/svg");

    let dark_dir = Path::new(&out_dir).join("icons").join("dark");
    let light_dir = Path::new(&out_dir).join("icons").join("light");
    fs::create_dir_all(&dark_dir).expect("Failed to create dark icon dir");
    fs::create_dir_all(&light_dir).expect("Failed to create light icon dir");

    for name in DARK_ICONS {
        let svg_path = format!("assets/icons/svg/{name}.svg");
        let source = fs::read_to_string(&svg_path)
            .unwrap_or_else(|e| panic!("Failed to read {svg_path}: {e}"));
        render_svg(&source, &dark_dir.join(format!("{name}.png")));

        if LIGHT_ICONS.contains(name) {
            // Light variants recolor the black fill to white
            let light_source = source.replace("#000000", "#ffffff");
            render_svg(&light_source, &light_dir.join(format!("{name}.png")));
        }
    }

    // Only run on Windows
    #[cfg(target_os = "windows")]
    {
        let mut res = winresource::WindowsResource::new();
        res.set_icon("assets/branding/iced_qr.ico");
        res.compile().expect("Failed to compile Windows resources");
    }
}

/// Rasterizes an SVG string into a square PNG at `ICON_SIZE_PX`.
fn render_svg(source: &str, out_path: &Path) {
    let options = resvg::usvg::Options::default();
    let tree = resvg::usvg::Tree::from_str(source, &options).expect("Failed to parse icon SVG");

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE_PX, ICON_SIZE_PX)
        .expect("Failed to allocate icon pixmap");

    let size = tree.size();
    let scale_x = ICON_SIZE_PX as f32 / size.width();
    let scale_y = ICON_SIZE_PX as f32 / size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let png = pixmap.encode_png().expect("Failed to encode icon PNG");
    fs::write(out_path, png)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", out_path.display()));
}
