use lens_core::{describe_text, format_fixed, AppState, DiagramFrame, Labels, ViewMode};
use std::fmt::Write;

/// Plain-text summary of one solved setup.
pub fn render(state: &AppState, frame: &DiagramFrame, labels: &Labels) -> String {
    let mut out = String::new();
    let lens = &frame.result;

    _ = writeln!(out, "{}", labels.title);
    _ = writeln!(out, "{}: 1 / f = 1 / a + 1 / b", labels.formula_title);
    _ = writeln!(out, "  f = {} cm", format_fixed(state.focal_length_cm, 1));
    _ = writeln!(out, "  a = {} cm", format_fixed(state.object_distance_cm, 1));
    match lens.image_distance_cm {
        Some(b) => {
            _ = writeln!(out, "  b = {} cm", format_fixed(b, 1));
        }
        None => {
            _ = writeln!(out, "  b = {}", labels.infinity);
            _ = writeln!(out, "  {}", labels.infinity_note);
        }
    }

    let magnification = lens
        .magnification
        .map(|m| format!("{}\u{d7}", format_fixed(m, 2)))
        .unwrap_or_else(|| "--".to_string());
    _ = writeln!(out, "{}: {}", labels.detail_magnification, magnification);
    _ = writeln!(
        out,
        "{}: {}",
        labels.card_observed,
        describe_text(frame.descriptor.as_ref(), labels)
    );
    _ = writeln!(
        out,
        "{}: {} cm ({})",
        labels.detail_screen_distance,
        format_fixed(state.screen_distance_cm, 1),
        if lens.is_image_on_screen {
            labels.in_focus
        } else {
            labels.out_of_focus
        }
    );

    if state.view_mode == ViewMode::Detail {
        let l = &frame.layout;
        let image_x = l
            .image_x
            .map(|x| format_fixed(x, 1))
            .unwrap_or_else(|| "--".to_string());
        _ = writeln!(
            out,
            "layout @ {} px/cm: lens={} object={} image={} screen={}",
            format_fixed(frame.scale.px_per_cm, 2),
            format_fixed(l.lens_x, 1),
            format_fixed(l.object_x, 1),
            image_x,
            format_fixed(l.screen_x, 1)
        );
        _ = writeln!(
            out,
            "rays: {} ({} dashed)",
            frame.rays.len(),
            frame.rays.iter().filter(|r| r.dashed).count()
        );
    }
    out
}
