// Host-side tests for the per-render frame bundle, labels, and SVG output.

use lens_core::locale::{EN, JA};
use lens_core::svg::{arrow_head_points, px, ray_path_data, render_diagram};
use lens_core::*;

fn frame_for(state: &AppState) -> DiagramFrame {
    DiagramFrame::compute(state, &Viewport::default())
}

#[test]
fn frame_bundles_default_experiment() {
    let state = AppState::default();
    let f = frame_for(&state);
    assert!(f.result.is_real_image);
    assert_eq!(
        f.descriptor.map(|d| d.size),
        Some(ImageSize::Reduced)
    );
    assert!((f.scale.px_per_cm - 13.0).abs() < 1e-9);
    assert_eq!(f.rays.len(), 3);
    assert!((f.object_height_px - 78.0).abs() < 1e-9);
    let tip = f.image_tip.unwrap();
    assert!((tip.x - 645.0).abs() < 1e-6 && (tip.y - 219.0).abs() < 1e-6);
    assert!((f.near_focal.x - 320.0).abs() < 1e-9);
    assert!((f.far_focal.x - 580.0).abs() < 1e-9);
}

#[test]
fn frame_without_rays() {
    let state = AppState::default().apply(Action::SetShowRays(false));
    assert!(frame_for(&state).rays.is_empty());
}

#[test]
fn frame_at_focal_plane_has_no_image() {
    let state = AppState::default().apply(Action::SetObjectDistance(10.0));
    let f = frame_for(&state);
    assert_eq!(f.descriptor, None);
    assert_eq!(f.image_tip, None);
    assert_eq!(f.layout.image_x, None);
    assert_eq!(f.rays.len(), 3);
}

#[test]
fn describe_text_per_locale() {
    let d = describe(Some(-0.5), true);
    assert_eq!(describe_text(d.as_ref(), &EN), "real, inverted, reduced");
    assert_eq!(describe_text(d.as_ref(), &JA), "実像・倒立・縮小");
    let d = describe(Some(2.0), false);
    assert_eq!(describe_text(d.as_ref(), &EN), "virtual, upright, enlarged");
    assert_eq!(describe_text(None, &EN), "Image at infinity");
    assert_eq!(describe_text(None, &JA), JA.image_at_infinity);
}

#[test]
fn locale_from_tag() {
    assert_eq!(Locale::from_tag("en"), Locale::En);
    assert_eq!(Locale::from_tag("en-US"), Locale::En);
    assert_eq!(Locale::from_tag("EN_gb"), Locale::En);
    assert_eq!(Locale::from_tag("ja-JP"), Locale::Ja);
    assert_eq!(Locale::from_tag(""), Locale::Ja);
    assert_eq!(Locale::from_tag("fr"), Locale::Ja);
    assert_eq!(Locale::En.labels().reset, "Reset");
    assert_eq!(Locale::Ja.labels().reset, "リセット");
}

#[test]
fn format_fixed_drops_negative_zero() {
    assert_eq!(format_fixed(15.0, 1), "15.0");
    assert_eq!(format_fixed(-10.0, 1), "-10.0");
    assert_eq!(format_fixed(-0.5, 2), "-0.50");
    assert_eq!(format_fixed(-0.04, 1), "0.0");
    assert_eq!(format_fixed(-0.0, 2), "0.00");
}

#[test]
fn format_fixed_rounds_ties_away_from_zero() {
    assert_eq!(format_fixed(6.25, 1), "6.3");
    assert_eq!(format_fixed(-0.125, 2), "-0.13");
    assert_eq!(format_fixed(0.5, 0), "1");
    assert_eq!(format_fixed(99.5, 0), "100");
    assert_eq!(format_fixed(9.996, 2), "10.00");
    // 1.005 is stored just below the tie
    assert_eq!(format_fixed(1.005, 2), "1.00");
    assert_eq!(format_fixed(2.0, 0), "2");
}

#[test]
fn format_fixed_rounds_solved_values_at_ties() {
    let r = solve(25.0, 5.0, 20.0);
    assert_eq!(format_fixed(r.image_distance_cm.unwrap(), 1), "6.3");

    let r = solve(45.0, 5.0, 20.0);
    assert_eq!(format_fixed(r.magnification.unwrap(), 2), "-0.13");
}

#[test]
fn px_trims_trailing_zeros() {
    assert_eq!(px(450.0), "450");
    assert_eq!(px(100.0), "100");
    assert_eq!(px(10.5), "10.5");
    assert_eq!(px(-36.0), "-36");
    assert_eq!(px(0.001), "0");
    assert_eq!(px(1.234_56), "1.23");
}

#[test]
fn path_and_arrow_helpers() {
    let state = AppState::default();
    let f = frame_for(&state);
    assert_eq!(ray_path_data(&f.rays[0]), "M60 102 L450 102 L645 219");
    assert_eq!(arrow_head_points(60.0, 102.0, 1.0), "60,102 55,114 65,114");
    assert_eq!(arrow_head_points(645.0, 219.0, -1.0), "645,219 640,207 650,207");
}

#[test]
fn svg_for_real_image() {
    let state = AppState::default();
    let svg = render_diagram(&frame_for(&state), &state, &Viewport::default(), &EN);
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"viewBox="0 0 900 360""#));
    assert!(svg.contains(r#"<g class="image-arrow">"#));
    assert_eq!(svg.matches(r#"class="ray""#).count(), 3);
    assert_eq!(svg.matches("ray dashed").count(), 0);
    assert!(!svg.contains("detail-layer"));
}

#[test]
fn svg_for_virtual_image_marks_dashed_rays() {
    let state = AppState::default().apply(Action::SetObjectDistance(5.0));
    let svg = render_diagram(&frame_for(&state), &state, &Viewport::default(), &EN);
    assert!(svg.contains("image-arrow virtual"));
    assert_eq!(svg.matches(r#"class="ray dashed""#).count(), 3);
}

#[test]
fn svg_at_focal_plane_omits_image() {
    let state = AppState::default().apply(Action::SetObjectDistance(10.0));
    let svg = render_diagram(&frame_for(&state), &state, &Viewport::default(), &EN);
    assert!(!svg.contains("image-arrow"));
    assert!(!svg.contains(">Image<"));
    assert_eq!(svg.matches(r#"class="ray""#).count(), 3);
}

#[test]
fn svg_without_rays_has_no_ray_group() {
    let state = AppState::default().apply(Action::ToggleRays);
    let svg = render_diagram(&frame_for(&state), &state, &Viewport::default(), &EN);
    assert!(!svg.contains(r#"class="rays""#));
}

#[test]
fn svg_detail_layer_annotates_distances() {
    let state = AppState::default().apply(Action::SetViewMode(ViewMode::Detail));
    let svg = render_diagram(&frame_for(&state), &state, &Viewport::default(), &EN);
    assert!(svg.contains("detail-layer"));
    assert!(svg.contains("a = 30.0 cm"));
    assert!(svg.contains("Screen = 20.0 cm"));
    assert!(svg.contains("f = 10.0 cm"));
    assert!(svg.contains("b = 15.0 cm"));

    let degenerate = state.apply(Action::SetObjectDistance(10.0));
    let svg = render_diagram(
        &frame_for(&degenerate),
        &degenerate,
        &Viewport::default(),
        &EN,
    );
    assert!(!svg.contains("b = "));
}

#[test]
fn svg_uses_locale_labels() {
    let state = AppState::default();
    let svg = render_diagram(&frame_for(&state), &state, &Viewport::default(), &JA);
    assert!(svg.contains(">レンズ<"));
    assert!(svg.contains(JA.diagram_aria));
}
