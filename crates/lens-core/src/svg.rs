//! Standalone SVG rendering of the optical bench.
//!
//! The output is a complete `<svg>` element. The web frontend injects it into
//! the page and the native CLI prints it, so nothing here touches a platform API.

use crate::frame::DiagramFrame;
use crate::layout::Viewport;
use crate::locale::{format_fixed, Labels};
use crate::rays::Ray;
use crate::state::{AppState, ViewMode};
use std::fmt::{self, Write};

const ARROW_HEAD_WIDTH: f64 = 10.0;
const ARROW_HEAD_HEIGHT: f64 = 12.0;
const LENS_BULGE_PX: f64 = 18.0;
const FOCAL_DOT_RADIUS: f64 = 4.0;

/// Coordinates rounded to two decimals with trailing zeros dropped.
pub fn px(value: f64) -> String {
    let s = format_fixed(value, 2);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// SVG path data for a ray polyline.
pub fn ray_path_data(ray: &Ray) -> String {
    ray.points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}{} {}", if i == 0 { "M" } else { "L" }, px(p.x), px(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Triangle for an arrow tip at `(x, y)`. `direction` 1 points up, -1 points down.
pub fn arrow_head_points(x: f64, y: f64, direction: f64) -> String {
    let base_y = y + direction * ARROW_HEAD_HEIGHT;
    format!(
        "{},{} {},{} {},{}",
        px(x),
        px(y),
        px(x - ARROW_HEAD_WIDTH / 2.0),
        px(base_y),
        px(x + ARROW_HEAD_WIDTH / 2.0),
        px(base_y)
    )
}

pub fn render_diagram(
    frame: &DiagramFrame,
    state: &AppState,
    viewport: &Viewport,
    labels: &Labels,
) -> String {
    let mut out = String::with_capacity(4096);
    _ = write_diagram(&mut out, frame, state, viewport, labels);
    out
}

fn write_diagram(
    out: &mut String,
    frame: &DiagramFrame,
    state: &AppState,
    viewport: &Viewport,
    labels: &Labels,
) -> fmt::Result {
    let axis_y = frame.scale.axis_y;
    let half = frame.lens_half_height;
    let layout = &frame.layout;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="experiment-canvas" viewBox="0 0 {} {}" role="img" aria-label="{}">"#,
        px(viewport.width),
        px(viewport.height),
        labels.diagram_aria
    )?;

    // Optical axis
    writeln!(
        out,
        r#"<line class="axis-line" x1="0" y1="{y}" x2="{w}" y2="{y}"/>"#,
        y = px(axis_y),
        w = px(viewport.width)
    )?;

    // Screen
    writeln!(
        out,
        r#"<line class="screen-line" x1="{x}" y1="{y1}" x2="{x}" y2="{y2}"/>"#,
        x = px(layout.screen_x),
        y1 = px(axis_y - half),
        y2 = px(axis_y + half)
    )?;
    write_label(out, "label", layout.screen_x, axis_y + half + 18.0, labels.diagram_screen)?;

    // Lens
    let lx = layout.lens_x;
    let top = axis_y - half;
    let bottom = axis_y + half;
    writeln!(
        out,
        r#"<line class="lens-line" x1="{x}" y1="{y1}" x2="{x}" y2="{y2}"/>"#,
        x = px(lx),
        y1 = px(top),
        y2 = px(bottom)
    )?;
    writeln!(
        out,
        r#"<path class="lens-outline" d="M {} {} Q {} {} {} {} L {} {} Q {} {} {} {} Z"/>"#,
        px(lx - LENS_BULGE_PX),
        px(top),
        px(lx),
        px(top - LENS_BULGE_PX),
        px(lx + LENS_BULGE_PX),
        px(top),
        px(lx + LENS_BULGE_PX),
        px(bottom),
        px(lx),
        px(bottom + LENS_BULGE_PX),
        px(lx - LENS_BULGE_PX),
        px(bottom)
    )?;
    write_label(out, "label", lx, top - 12.0, labels.diagram_lens)?;

    // Focal points
    for f in [frame.near_focal, frame.far_focal] {
        writeln!(
            out,
            r#"<circle class="focal-point" cx="{}" cy="{}" r="{}"/>"#,
            px(f.x),
            px(f.y),
            px(FOCAL_DOT_RADIUS)
        )?;
        write_label(out, "label", f.x, axis_y + 20.0, labels.diagram_focal)?;
    }

    // Object
    let object_top = axis_y - frame.object_height_px;
    writeln!(
        out,
        r#"<line class="object-arrow" x1="{x}" y1="{y1}" x2="{x}" y2="{y2}"/>"#,
        x = px(layout.object_x),
        y1 = px(axis_y),
        y2 = px(object_top)
    )?;
    writeln!(
        out,
        r#"<polygon class="object-arrow" points="{}"/>"#,
        arrow_head_points(layout.object_x, object_top, 1.0)
    )?;
    write_label(out, "label", layout.object_x, axis_y + 20.0, labels.diagram_object)?;

    // Image, only when it forms at a finite distance
    if let Some(tip) = frame.image_tip {
        let class = if frame.result.is_virtual_image() {
            "image-arrow virtual"
        } else {
            "image-arrow"
        };
        let points_up = tip.y < axis_y;
        writeln!(out, r#"<g class="{class}">"#)?;
        writeln!(
            out,
            r#"<line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}"/>"#,
            x = px(tip.x),
            y1 = px(axis_y),
            y2 = px(tip.y)
        )?;
        writeln!(
            out,
            r#"<polygon points="{}"/>"#,
            arrow_head_points(tip.x, tip.y, if points_up { 1.0 } else { -1.0 })
        )?;
        let label_y = tip.y + if points_up { -14.0 } else { 24.0 };
        write_label(out, "label", tip.x, label_y, labels.diagram_image)?;
        writeln!(out, "</g>")?;
    }

    if !frame.rays.is_empty() {
        writeln!(out, r#"<g class="rays">"#)?;
        for ray in &frame.rays {
            let class = if ray.dashed { "ray dashed" } else { "ray" };
            writeln!(out, r#"<path class="{class}" d="{}"/>"#, ray_path_data(ray))?;
        }
        writeln!(out, "</g>")?;
    }

    if state.view_mode == ViewMode::Detail {
        writeln!(out, r#"<g class="detail-layer">"#)?;
        write_label(
            out,
            "detail-text",
            layout.object_x,
            object_top - 18.0,
            &format!("a = {} cm", format_fixed(state.object_distance_cm, 1)),
        )?;
        write_label(
            out,
            "detail-text",
            layout.screen_x,
            axis_y + half + 36.0,
            &format!(
                "{} = {} cm",
                labels.diagram_screen,
                format_fixed(state.screen_distance_cm, 1)
            ),
        )?;
        writeln!(
            out,
            r#"<text class="detail-text" x="{}" y="{}">f = {} cm</text>"#,
            px(lx + 12.0),
            px(top - 36.0),
            format_fixed(state.focal_length_cm, 1)
        )?;
        if let (Some(b), Some(tip)) = (frame.result.image_distance_cm, frame.image_tip) {
            // Keep the label on the side of the axis the image glyph grows towards.
            let side = if tip.y <= axis_y { 1.0 } else { -1.0 };
            write_label(
                out,
                "detail-text",
                tip.x,
                axis_y - side * 18.0,
                &format!("b = {} cm", format_fixed(b, 1)),
            )?;
        }
        writeln!(out, "</g>")?;
    }

    writeln!(out, "</svg>")
}

fn write_label(out: &mut String, class: &str, x: f64, y: f64, text: &str) -> fmt::Result {
    writeln!(
        out,
        r#"<text class="{class}" x="{}" y="{}" text-anchor="middle">{text}</text>"#,
        px(x),
        px(y)
    )
}
