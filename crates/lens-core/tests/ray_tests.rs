// Host-side tests for the principal-ray tracer.

use glam::DVec2;
use lens_core::constants::OBJECT_HEIGHT_CM;
use lens_core::*;

const BOUNDS: RayBounds = RayBounds {
    min_x: 0.0,
    max_x: 900.0,
};

fn close(p: DVec2, x: f64, y: f64) -> bool {
    (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6
}

fn trace(a: f64, f: f64, s: f64) -> (LensResult, Vec<Ray>) {
    let inputs = OpticalInputs {
        object_distance_cm: a,
        focal_length_cm: f,
        screen_distance_cm: s,
    };
    let lens = inputs.solve();
    let scale = compute_scale(&Viewport::default(), &inputs, &lens);
    let rays = compute_rays(&scale, &inputs, &lens, OBJECT_HEIGHT_CM, BOUNDS);
    (lens, rays)
}

#[test]
fn y_at_x_interpolates_and_extrapolates() {
    let p1 = DVec2::new(0.0, 0.0);
    let p2 = DVec2::new(10.0, 5.0);
    assert!((y_at_x(p1, p2, 5.0) - 2.5).abs() < 1e-12);
    assert!((y_at_x(p1, p2, 20.0) - 10.0).abs() < 1e-12);
    assert!((y_at_x(p1, p2, -10.0) + 5.0).abs() < 1e-12);
}

#[test]
fn y_at_x_vertical_segment_returns_first_y() {
    let p1 = DVec2::new(3.0, 7.0);
    let p2 = DVec2::new(3.0, -40.0);
    assert_eq!(y_at_x(p1, p2, 100.0), 7.0);
}

#[test]
fn display_magnification_is_clamped() {
    assert_eq!(display_magnification(Some(10.0)), 3.5);
    assert_eq!(display_magnification(Some(-10.0)), -3.5);
    assert_eq!(display_magnification(Some(-0.5)), -0.5);
    assert_eq!(display_magnification(None), 0.0);
}

#[test]
fn real_image_rays_converge_on_image_tip() {
    // a = 30, f = 10: scale 13, object tip (60, 102), image tip (645, 219)
    let (lens, rays) = trace(30.0, 10.0, 20.0);
    assert!(lens.is_real_image);
    assert_eq!(rays.len(), 3);
    assert!(rays.iter().all(|r| !r.dashed));

    let ray1 = &rays[0].points;
    assert_eq!(ray1.len(), 3);
    assert!(close(ray1[0], 60.0, 102.0));
    assert!(close(ray1[1], 450.0, 102.0));
    assert!(close(ray1[2], 645.0, 219.0));

    let ray2 = &rays[1].points;
    assert_eq!(ray2.len(), 3);
    assert!(close(ray2[1], 450.0, 180.0));
    assert!(close(ray2[2], 645.0, 219.0));

    let ray3 = &rays[2].points;
    assert_eq!(ray3.len(), 4);
    assert!(close(ray3[1], 320.0, 180.0));
    // Through the near focus the ray reaches the lens at the image height
    assert!(close(ray3[2], 450.0, 219.0));
    assert!(close(ray3[3], 645.0, 219.0));
}

#[test]
fn virtual_image_adds_dashed_extensions() {
    // a = 5, f = 10: scale 18, object tip (360, 72), image tip (270, -36)
    let (lens, rays) = trace(5.0, 10.0, 20.0);
    assert!(lens.is_virtual_image());
    assert_eq!(rays.len(), 6);
    let dashed: Vec<_> = rays.iter().filter(|r| r.dashed).collect();
    assert_eq!(dashed.len(), 3);
    assert_eq!(rays.iter().filter(|r| !r.dashed).count(), 3);

    // Solid and dashed alternate
    for (i, ray) in rays.iter().enumerate() {
        assert_eq!(ray.dashed, i % 2 == 1, "ray {i}");
    }

    // Every dashed segment starts on the lens plane and ends at the image tip
    for ray in &dashed {
        assert_eq!(ray.points.len(), 2);
        assert!((ray.points[0].x - 450.0).abs() < 1e-9);
        assert!(close(ray.points[1], 270.0, -36.0));
    }

    // Ray 1 diverges through the far focus out to the bound
    assert!(close(rays[0].points[2], 900.0, 342.0));
    // Ray 2 continues straight through the centre
    assert!(close(rays[2].points[2], 900.0, 720.0));
    // Ray 3 leaves the lens parallel to the axis
    assert!(close(rays[4].points[2], 450.0, -36.0));
    assert!(close(rays[4].points[3], 900.0, -36.0));
}

#[test]
fn dashed_extensions_are_collinear_with_refracted_rays() {
    let (_, rays) = trace(8.0, 12.0, 20.0);
    assert_eq!(rays.len(), 6);
    for pair in rays.chunks(2) {
        let solid = &pair[0].points;
        let dashed = &pair[1].points;
        let n = solid.len();
        let (lens_pt, end) = (solid[n - 2], solid[n - 1]);
        let tip = dashed[1];
        let y = y_at_x(lens_pt, end, tip.x);
        assert!((y - tip.y).abs() < 1e-6, "extension misses image tip: {y} vs {}", tip.y);
    }
}

#[test]
fn focal_plane_object_draws_primary_rays_only() {
    // a = f = 10: scale 18, object tip (270, 72)
    let (lens, rays) = trace(10.0, 10.0, 20.0);
    assert!(lens.image_distance_cm.is_none());
    assert_eq!(rays.len(), 3);
    assert!(rays.iter().all(|r| !r.dashed));
    assert!(rays.iter().all(|r| (r.points.last().unwrap().x - 900.0).abs() < 1e-9));

    // Ray 3 passes through a focal point directly below the object tip
    assert!(close(rays[2].points[2], 450.0, 72.0));
    assert!(close(rays[2].points[3], 900.0, 72.0));
}

#[test]
fn ray_count_over_range() {
    let mut a = 5.0;
    while a <= 100.0 {
        let (lens, rays) = trace(a, 15.0, 40.0);
        let expected = match lens.image_distance_cm {
            Some(_) if !lens.is_real_image => 6,
            _ => 3,
        };
        assert_eq!(rays.len(), expected, "a = {a}");
        a += 2.5;
    }
}

#[test]
fn image_tip_uses_clamped_magnification() {
    // a = 11, f = 10 -> b = 110, m = -10; glyph drawn at -3.5x
    let inputs = OpticalInputs {
        object_distance_cm: 11.0,
        focal_length_cm: 10.0,
        screen_distance_cm: 20.0,
    };
    let lens = inputs.solve();
    assert!((lens.magnification.unwrap() + 10.0).abs() < 1e-6);
    let scale = compute_scale(&Viewport::default(), &inputs, &lens);
    let layout = compute_layout(&scale, &inputs, &lens);
    let tip = image_tip(&scale, &layout, &lens, OBJECT_HEIGHT_CM).unwrap();
    let expected_y = scale.axis_y + OBJECT_HEIGHT_CM * scale.px_per_cm * 3.5;
    assert!((tip.y - expected_y).abs() < 1e-9);
}
