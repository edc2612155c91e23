// Host-side tests for diagram scale and marker layout.

use lens_core::constants::*;
use lens_core::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn inputs(a: f64, f: f64, s: f64) -> OpticalInputs {
    OpticalInputs {
        object_distance_cm: a,
        focal_length_cm: f,
        screen_distance_cm: s,
    }
}

#[test]
fn default_viewport_matches_constants() {
    let v = Viewport::default();
    assert_eq!(v.width, VIEWBOX_WIDTH);
    assert_eq!(v.height, VIEWBOX_HEIGHT);
    assert_eq!(v.padding_px, PADDING_PX);
    assert_eq!(v.min_scale, MIN_SCALE);
    assert_eq!(v.max_scale, MAX_SCALE);
}

#[test]
fn scale_fits_farthest_marker() {
    // max distance 30 cm -> (450 - 60) / 30 = 13 px/cm
    let i = inputs(30.0, 10.0, 20.0);
    let r = i.solve();
    let s = compute_scale(&Viewport::default(), &i, &r);
    assert!(approx(s.px_per_cm, 13.0), "scale = {}", s.px_per_cm);
    assert!(approx(s.origin_x, 450.0));
    assert!(approx(s.axis_y, 180.0));
}

#[test]
fn scale_counts_virtual_image_distance_by_magnitude() {
    // a = 8, f = 10 -> b = -40, which dominates: 390 / 40 = 9.75
    let i = inputs(8.0, 10.0, 20.0);
    let r = i.solve();
    let s = compute_scale(&Viewport::default(), &i, &r);
    assert!(approx(s.px_per_cm, 9.75), "scale = {}", s.px_per_cm);
}

#[test]
fn scale_is_clamped_to_min_and_max() {
    let v = Viewport::default();

    let far = inputs(100.0, 5.0, 100.0);
    let s = compute_scale(&v, &far, &far.solve());
    assert!(approx(s.px_per_cm, MIN_SCALE));

    let near = inputs(2.0, 1.0, 2.0);
    let s = compute_scale(&v, &near, &near.solve());
    assert!(approx(s.px_per_cm, MAX_SCALE));
}

#[test]
fn scale_floor_of_one_centimetre() {
    // With a wide clamp, tiny distances are measured against 1 cm
    let v = Viewport {
        min_scale: 0.0,
        max_scale: 1000.0,
        ..Viewport::default()
    };
    let i = inputs(0.5, 0.25, 0.5);
    let s = compute_scale(&v, &i, &i.solve());
    assert!(approx(s.px_per_cm, 390.0), "scale = {}", s.px_per_cm);
}

#[test]
fn scale_ignores_image_at_infinity() {
    // Object on the focal plane: only a, f, and screen count -> 390 / 20 = 19.5 -> 18
    let i = inputs(10.0, 10.0, 20.0);
    let r = i.solve();
    assert!(r.image_distance_cm.is_none());
    let s = compute_scale(&Viewport::default(), &i, &r);
    assert!(approx(s.px_per_cm, 18.0));
}

#[test]
fn layout_places_markers_around_lens() {
    let i = inputs(30.0, 10.0, 20.0);
    let r = i.solve();
    let s = compute_scale(&Viewport::default(), &i, &r);
    let l = compute_layout(&s, &i, &r);
    assert!(approx(l.lens_x, 450.0));
    assert!(approx(l.object_x, 60.0));
    assert!(approx(l.screen_x, 710.0));
    assert!(approx(l.image_x.unwrap(), 645.0));
}

#[test]
fn virtual_image_is_left_of_lens() {
    let i = inputs(5.0, 10.0, 20.0);
    let r = i.solve();
    let s = compute_scale(&Viewport::default(), &i, &r);
    let l = compute_layout(&s, &i, &r);
    let image_x = l.image_x.unwrap();
    assert!(image_x < l.lens_x);
    // Virtual image is farther from the lens than the object
    assert!(image_x < l.object_x);
}

#[test]
fn layout_has_no_image_at_focal_plane() {
    let i = inputs(10.0, 10.0, 20.0);
    let r = i.solve();
    let s = compute_scale(&Viewport::default(), &i, &r);
    assert_eq!(compute_layout(&s, &i, &r).image_x, None);
}

#[test]
fn focal_points_are_symmetric_on_axis() {
    let i = inputs(30.0, 10.0, 20.0);
    let s = ScaleInfo {
        px_per_cm: 13.0,
        origin_x: 450.0,
        axis_y: 180.0,
    };
    let (near, far) = focal_points(&s, &i);
    assert!(approx(near.x, 320.0) && approx(near.y, 180.0));
    assert!(approx(far.x, 580.0) && approx(far.y, 180.0));
}

#[test]
fn lens_half_height_is_capped_by_viewport() {
    let v = Viewport::default();
    let small = ScaleInfo {
        px_per_cm: 6.0,
        origin_x: 450.0,
        axis_y: 180.0,
    };
    assert!(approx(lens_half_height(&v, &small), 48.0));
    let large = ScaleInfo {
        px_per_cm: 18.0,
        ..small
    };
    // 18 * 8 = 144 < 0.42 * 360 = 151.2
    assert!(approx(lens_half_height(&v, &large), 144.0));
    let tall_scale = ScaleInfo {
        px_per_cm: 40.0,
        ..small
    };
    assert!(approx(lens_half_height(&v, &tall_scale), 151.2));
}
