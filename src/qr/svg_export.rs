// SPDX-License-Identifier: MPL-2.0
//! SVG document writer for generated symbols.
//!
//! The document uses one module per user unit and scales through the
//! `width`/`height` attributes, so the markup stays small at any export
//! size. Geometry matches the raster render, including the quiet zone
//! and the gradient shapes.

use crate::app::config::defaults::QUIET_ZONE_MODULES;
use crate::qr::form::{FormState, GradientType};
use crate::qr::render::ModuleGrid;

/// Writes a standalone SVG document for the given symbol.
#[must_use]
pub fn document(modules: &ModuleGrid, form: &FormState) -> String {
    let size = form.size.value();
    let total = modules.width() as u32 + 2 * QUIET_ZONE_MODULES;

    let (defs, background_fill) = if form.gradient_enabled {
        (gradient_defs(form), String::from("url(#background)"))
    } else {
        (String::new(), form.background.to_hex())
    };

    let foreground = form.foreground.to_hex();
    let path = module_path(modules);

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {total} {total}" shape-rendering="crispEdges">
{defs}<rect width="{total}" height="{total}" fill="{background_fill}"/>
<path fill="{foreground}" d="{path}"/>
</svg>
"#
    )
}

fn gradient_defs(form: &FormState) -> String {
    let start = form.gradient_start.to_hex();
    let end = form.gradient_end.to_hex();

    match form.gradient_type {
        GradientType::Linear => format!(
            r#"<defs>
<linearGradient id="background" x1="0" y1="0" x2="0" y2="1">
<stop offset="0" stop-color="{start}"/>
<stop offset="1" stop-color="{end}"/>
</linearGradient>
</defs>
"#
        ),
        // The radius is half the bounding box diagonal, so the gradient
        // reaches the corners like the raster render does.
        GradientType::Radial => format!(
            r#"<defs>
<radialGradient id="background" cx="0.5" cy="0.5" r="0.7071068">
<stop offset="0" stop-color="{start}"/>
<stop offset="1" stop-color="{end}"/>
</radialGradient>
</defs>
"#
        ),
    }
}

/// One `M..h..v1h-..z` subpath per horizontal run of dark modules.
fn module_path(modules: &ModuleGrid) -> String {
    let offset = QUIET_ZONE_MODULES as usize;
    let mut d = String::new();

    for y in 0..modules.width() {
        let mut x = 0;
        while x < modules.width() {
            if !modules.is_dark(x, y) {
                x += 1;
                continue;
            }

            let run_start = x;
            while x < modules.width() && modules.is_dark(x, y) {
                x += 1;
            }
            let run = x - run_start;

            if !d.is_empty() {
                d.push(' ');
            }
            d.push_str(&format!(
                "M{} {}h{}v1h-{}z",
                run_start + offset,
                y + offset,
                run,
                run
            ));
        }
    }

    d
}
