//! Mapping from centimetres on the optical bench to diagram pixels.

use crate::constants::*;
use crate::optics::{LensResult, OpticalInputs};
use glam::DVec2;

/// Logical drawing surface the diagram is laid out in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding_px: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWBOX_WIDTH,
            height: VIEWBOX_HEIGHT,
            padding_px: PADDING_PX,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
        }
    }
}

/// Pixel scale and origin for one render. The lens sits at `(origin_x, axis_y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleInfo {
    pub px_per_cm: f64,
    pub origin_x: f64,
    pub axis_y: f64,
}

/// X positions of the bench markers along the optical axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpticalLayout {
    pub lens_x: f64,
    pub object_x: f64,
    pub image_x: Option<f64>,
    pub screen_x: f64,
}

/// Pick a scale so the farthest marker still fits in half the viewport.
pub fn compute_scale(viewport: &Viewport, inputs: &OpticalInputs, lens: &LensResult) -> ScaleInfo {
    let max_distance_cm = [
        inputs.object_distance_cm,
        inputs.screen_distance_cm,
        lens.image_distance_cm.map(f64::abs).unwrap_or(0.0),
        inputs.focal_length_cm,
        1.0,
    ]
    .into_iter()
    .fold(f64::MIN, f64::max);

    let px_per_cm = ((viewport.width / 2.0 - viewport.padding_px) / max_distance_cm)
        .clamp(viewport.min_scale, viewport.max_scale);

    ScaleInfo {
        px_per_cm,
        origin_x: viewport.width / 2.0,
        axis_y: viewport.height / 2.0,
    }
}

pub fn compute_layout(scale: &ScaleInfo, inputs: &OpticalInputs, lens: &LensResult) -> OpticalLayout {
    let ScaleInfo {
        px_per_cm,
        origin_x,
        ..
    } = *scale;

    OpticalLayout {
        lens_x: origin_x,
        object_x: origin_x - inputs.object_distance_cm * px_per_cm,
        image_x: lens.image_distance_cm.map(|b| origin_x + b * px_per_cm),
        screen_x: origin_x + inputs.screen_distance_cm * px_per_cm,
    }
}

/// Near (object-side) and far focal points, both on the axis.
#[inline]
pub fn focal_points(scale: &ScaleInfo, inputs: &OpticalInputs) -> (DVec2, DVec2) {
    let offset = inputs.focal_length_cm * scale.px_per_cm;
    (
        DVec2::new(scale.origin_x - offset, scale.axis_y),
        DVec2::new(scale.origin_x + offset, scale.axis_y),
    )
}

/// Half the drawn height of the lens and screen, capped to fit the viewport.
#[inline]
pub fn lens_half_height(viewport: &Viewport, scale: &ScaleInfo) -> f64 {
    (viewport.height * LENS_HALF_HEIGHT_VIEW_RATIO).min(scale.px_per_cm * LENS_HALF_HEIGHT_CM)
}
