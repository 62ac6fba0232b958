//! SVG rendering of membership functions
//!
//! One chart per fuzzy variable: x axis spans the observed range, y axis
//! is the membership degree in [0, 1], one polyline per modality through
//! the sorted universe points, legend in the top-right corner.

use std::fmt::Write;

use crate::fuzzifier::FuzzyVariable;
use crate::types::{PLOT_HEIGHT, PLOT_PADDING, PLOT_PALETTE, PLOT_WIDTH};

/// Render `variable` as a standalone SVG document.
pub fn render_svg(variable: &FuzzyVariable) -> String {
    let mut svg = String::new();
    let (min, max) = variable.range();
    let span = if max > min { max - min } else { 1.0 };
    let plot_w = PLOT_WIDTH - 2.0 * PLOT_PADDING;
    let plot_h = PLOT_HEIGHT - 2.0 * PLOT_PADDING;
    let to_x = |v: f64| PLOT_PADDING + (v - min) / span * plot_w;
    let to_y = |d: f64| PLOT_PADDING + (1.0 - d) * plot_h;

    writeln!(
        svg,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = PLOT_WIDTH,
        h = PLOT_HEIGHT
    )
    .ok();
    writeln!(
        svg,
        r#"<style>
    .axis {{ stroke: #333; stroke-width: 1; }}
    .label {{ font-family: sans-serif; font-size: 12px; fill: #333; }}
    .title {{ font-family: sans-serif; font-size: 16px; fill: #111; }}
</style>"#
    )
    .ok();

    // Title
    writeln!(
        svg,
        r#"  <text class="title" x="{}" y="{}" text-anchor="middle">{}</text>"#,
        PLOT_WIDTH / 2.0,
        PLOT_PADDING / 2.0,
        escape(variable.name())
    )
    .ok();

    // Axes
    let (x0, y0) = (PLOT_PADDING, PLOT_HEIGHT - PLOT_PADDING);
    writeln!(
        svg,
        r#"  <line class="axis" x1="{x0}" y1="{y0}" x2="{}" y2="{y0}" />"#,
        PLOT_WIDTH - PLOT_PADDING
    )
    .ok();
    writeln!(
        svg,
        r#"  <line class="axis" x1="{x0}" y1="{y0}" x2="{x0}" y2="{}" />"#,
        PLOT_PADDING
    )
    .ok();
    for (value, anchor, x) in [(min, "start", x0), (max, "end", PLOT_WIDTH - PLOT_PADDING)] {
        writeln!(
            svg,
            r#"  <text class="label" x="{x}" y="{}" text-anchor="{anchor}">{}</text>"#,
            y0 + 16.0,
            format_tick(value)
        )
        .ok();
    }
    for (degree, label) in [(0.0, "0"), (1.0, "1")] {
        writeln!(
            svg,
            r#"  <text class="label" x="{}" y="{}" text-anchor="end">{label}</text>"#,
            x0 - 6.0,
            to_y(degree) + 4.0
        )
        .ok();
    }

    // Sorted universe with the matching degrees for each term
    let mut order: Vec<usize> = (0..variable.universe().len())
        .filter(|&i| !variable.universe()[i].is_nan())
        .collect();
    order.sort_by(|&a, &b| variable.universe()[a].total_cmp(&variable.universe()[b]));

    for (k, term) in variable.terms().iter().enumerate() {
        let color = PLOT_PALETTE[k % PLOT_PALETTE.len()];
        let points: Vec<String> = order
            .iter()
            .map(|&i| {
                format!(
                    "{:.2},{:.2}",
                    to_x(variable.universe()[i]),
                    to_y(term.degrees()[i])
                )
            })
            .collect();
        writeln!(
            svg,
            r#"  <polyline fill="none" stroke="{color}" stroke-width="2" points="{}" />"#,
            points.join(" ")
        )
        .ok();

        // Legend entry
        let ly = PLOT_PADDING + 16.0 * k as f64;
        let lx = PLOT_WIDTH - PLOT_PADDING - 110.0;
        writeln!(
            svg,
            r#"  <line x1="{lx}" y1="{ly}" x2="{}" y2="{ly}" stroke="{color}" stroke-width="2" />"#,
            lx + 18.0
        )
        .ok();
        writeln!(
            svg,
            r#"  <text class="label" x="{}" y="{}">{}</text>"#,
            lx + 24.0,
            ly + 4.0,
            escape(term.name())
        )
        .ok();
    }

    writeln!(svg, "</svg>").ok();
    svg
}

/// File-system safe stem for a feature name
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "feature".to_string()
    } else {
        stem
    }
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.3}")
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
