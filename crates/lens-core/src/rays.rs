//! The three principal rays from the object tip.
//!
//! Each ray is a short polyline in diagram pixels. For a virtual image an extra
//! dashed segment traces the refracted ray backwards from the lens plane to the
//! image tip, where the light appears to come from.

use crate::constants::{DISPLAY_MAGNIFICATION_LIMIT, EPSILON};
use crate::layout::{compute_layout, focal_points, OpticalLayout, ScaleInfo};
use crate::optics::{LensResult, OpticalInputs};
use glam::DVec2;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub points: SmallVec<[DVec2; 4]>,
    pub dashed: bool,
}

impl Ray {
    fn solid(points: SmallVec<[DVec2; 4]>) -> Self {
        Self {
            points,
            dashed: false,
        }
    }

    fn dashed(from: DVec2, to: DVec2) -> Self {
        Self {
            points: smallvec![from, to],
            dashed: true,
        }
    }
}

/// Horizontal extent rays are extrapolated to when they head off towards infinity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayBounds {
    pub min_x: f64,
    pub max_x: f64,
}

/// Y on the line through `p1` and `p2` at `x`. A vertical segment yields `p1.y`.
#[inline]
pub fn y_at_x(p1: DVec2, p2: DVec2, x: f64) -> f64 {
    if (p2.x - p1.x).abs() < EPSILON {
        return p1.y;
    }
    let slope = (p2.y - p1.y) / (p2.x - p1.x);
    p1.y + slope * (x - p1.x)
}

/// Magnification used to size the image glyph. `None` draws as zero height.
#[inline]
pub fn display_magnification(magnification: Option<f64>) -> f64 {
    magnification
        .unwrap_or(0.0)
        .clamp(-DISPLAY_MAGNIFICATION_LIMIT, DISPLAY_MAGNIFICATION_LIMIT)
}

/// Tip of the image arrow, or `None` when the image is at infinity.
pub fn image_tip(
    scale: &ScaleInfo,
    layout: &OpticalLayout,
    lens: &LensResult,
    object_height_cm: f64,
) -> Option<DVec2> {
    let image_height_px =
        object_height_cm * scale.px_per_cm * display_magnification(lens.magnification);
    layout
        .image_x
        .map(|x| DVec2::new(x, scale.axis_y - image_height_px))
}

pub fn compute_rays(
    scale: &ScaleInfo,
    inputs: &OpticalInputs,
    lens: &LensResult,
    object_height_cm: f64,
    bounds: RayBounds,
) -> Vec<Ray> {
    let layout = compute_layout(scale, inputs, lens);
    let object_top = DVec2::new(
        layout.object_x,
        scale.axis_y - object_height_cm * scale.px_per_cm,
    );
    let lens_center = DVec2::new(layout.lens_x, scale.axis_y);
    let (near_focal, far_focal) = focal_points(scale, inputs);

    // Real images terminate every ray at the tip; the rest run to the bound.
    let image_top = image_tip(scale, &layout, lens, object_height_cm);
    let real_tip = image_top.filter(|_| lens.is_real_image);
    let virtual_tip = image_top.filter(|_| !lens.is_real_image);

    let mut rays = Vec::with_capacity(6);

    // Ray 1: parallel to the axis, refracted through the far focal point
    let ray1_lens = DVec2::new(layout.lens_x, object_top.y);
    let ray1_end = real_tip.unwrap_or_else(|| {
        DVec2::new(bounds.max_x, y_at_x(ray1_lens, far_focal, bounds.max_x))
    });
    rays.push(Ray::solid(smallvec![object_top, ray1_lens, ray1_end]));
    if let Some(tip) = virtual_tip {
        rays.push(Ray::dashed(ray1_lens, tip));
    }

    // Ray 2: through the lens centre, undeviated
    let ray2_end = real_tip.unwrap_or_else(|| {
        DVec2::new(bounds.max_x, y_at_x(object_top, lens_center, bounds.max_x))
    });
    rays.push(Ray::solid(smallvec![object_top, lens_center, ray2_end]));
    if let Some(tip) = virtual_tip {
        rays.push(Ray::dashed(lens_center, tip));
    }

    // Ray 3: through the near focal point, leaves the lens parallel to the axis
    let ray3_lens = DVec2::new(layout.lens_x, y_at_x(object_top, near_focal, layout.lens_x));
    let ray3_end = real_tip.unwrap_or_else(|| DVec2::new(bounds.max_x, ray3_lens.y));
    rays.push(Ray::solid(smallvec![
        object_top, near_focal, ray3_lens, ray3_end
    ]));
    if let Some(tip) = virtual_tip {
        rays.push(Ray::dashed(ray3_lens, tip));
    }

    rays
}
