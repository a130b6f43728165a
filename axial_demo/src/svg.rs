// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for `axial_demo`.

use std::fmt::Write as _;

use axial::{AxisScene, Canvas, RuleMark, TextAnchor, TextMark, VerticalAnchor};
use kurbo::Cap;
use peniko::Brush;

/// Line height of multi-line text, in ems.
const LINE_HEIGHT: f64 = 1.2;

/// Renders a scene: a full `<svg>` document for standalone axes, a `<g>` fragment otherwise.
pub(crate) fn render_scene(scene: &AxisScene) -> String {
    let group = render_group(scene);
    match &scene.canvas {
        Some(canvas) => wrap_svg(canvas, &group),
        None => group,
    }
}

/// Wraps fragments into one `<svg>` document.
pub(crate) fn wrap_svg(canvas: &Canvas, body: &str) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = canvas.width,
        h = canvas.height,
    );
    out.push('\n');
    if let Some(fill) = &canvas.fill {
        out.push_str(r#"<rect x="0" y="0" width="100%" height="100%""#);
        write_paint_attr(&mut out, "fill", fill);
        out.push_str("/>\n");
    }
    out.push_str(body);
    out.push_str("</svg>\n");
    out
}

fn render_group(scene: &AxisScene) -> String {
    let t = scene.transform.translation();
    let mut out = String::new();
    let _ = writeln!(out, r#"<g transform="translate({} {})">"#, t.x, t.y);
    for rule in &scene.grid {
        write_rule(&mut out, rule);
    }
    write_rule(&mut out, &scene.axis_line);
    for tick in &scene.ticks {
        write_rule(&mut out, &tick.rule);
        write_text(&mut out, &tick.label);
    }
    if let Some(label) = &scene.label {
        write_text(&mut out, label);
    }
    out.push_str("</g>\n");
    out
}

fn write_rule(out: &mut String, rule: &RuleMark) {
    let Some(stroke) = &rule.stroke else {
        return;
    };
    if stroke.stroke_width <= 0.0 {
        return;
    }
    let line = rule.line;
    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
        line.p0.x, line.p0.y, line.p1.x, line.p1.y
    );
    write_paint_attr(out, "stroke", &stroke.brush);
    let cap = match stroke.cap {
        Cap::Butt => "butt",
        Cap::Round => "round",
        Cap::Square => "square",
    };
    let _ = write!(
        out,
        r#" stroke-width="{}" stroke-linecap="{cap}"/>"#,
        stroke.stroke_width
    );
    out.push('\n');
}

fn write_text(out: &mut String, text: &TextMark) {
    let baseline = match text.vertical_anchor {
        VerticalAnchor::Start => "hanging",
        VerticalAnchor::Middle => "middle",
        VerticalAnchor::End => "alphabetic",
    };
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let (x, y) = (text.pos.x, text.pos.y);
    let _ = write!(
        out,
        r#"<text x="{x}" y="{y}" font-size="{}" text-anchor="{anchor}" dominant-baseline="{baseline}""#,
        text.style.font_size
    );
    if let Some(family) = &text.style.font_family {
        let _ = write!(out, r#" font-family="{}""#, escape_xml(family));
    }
    if text.angle != 0.0 {
        let _ = write!(out, r#" transform="rotate({} {x} {y})""#, text.angle);
    }
    write_paint_attr(out, "fill", &text.style.fill);
    out.push('>');

    let lines: Vec<&str> = text.lines().collect();
    if lines.len() == 1 {
        out.push_str(&escape_xml(lines[0]));
    } else {
        // Shift the block so the anchor keeps its meaning for the whole block.
        let extra = (lines.len() - 1) as f64 * LINE_HEIGHT;
        let first_dy = match text.vertical_anchor {
            VerticalAnchor::Start => 0.0,
            VerticalAnchor::Middle => -extra / 2.0,
            VerticalAnchor::End => -extra,
        };
        for (i, line) in lines.iter().enumerate() {
            let dy = if i == 0 { first_dy } else { LINE_HEIGHT };
            let _ = write!(
                out,
                r#"<tspan x="{x}" dy="{dy}em">{}</tspan>"#,
                escape_xml(line)
            );
        }
    }
    out.push_str("</text>\n");
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axial::{AxisConfig, Orientation, TickValues};

    #[test]
    fn standalone_scenes_are_svg_documents() {
        let svg = render_scene(&AxisConfig::new().with_domain((0.0, 100.0)).scene());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"<g transform="translate(0 250)">"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn embedded_scenes_are_bare_groups() {
        let svg = render_scene(&AxisConfig::new().with_standalone(false).scene());
        assert!(svg.starts_with("<g"));
        assert!(!svg.contains("<svg"));
    }

    #[test]
    fn multi_line_labels_become_tspans() {
        let scene = AxisConfig::new()
            .with_orientation(Orientation::Bottom)
            .with_tick_values(TickValues::categorical(["Mets\nNY", "A & B"]))
            .scene();
        let svg = render_scene(&scene);
        assert!(svg.contains(">Mets</tspan>"));
        assert!(svg.contains(">NY</tspan>"));
        assert!(svg.contains("A &amp; B"));
    }

    #[test]
    fn zero_width_rules_are_skipped() {
        // The default grid stroke width is zero.
        let svg = render_scene(&AxisConfig::new().with_domain((0.0, 100.0)).scene());
        assert!(!svg.contains("#c9c5bb"));
    }
}
