//! Everything one diagram render derives from the current [`AppState`].

use crate::constants::OBJECT_HEIGHT_CM;
use crate::layout::{
    compute_layout, compute_scale, focal_points, lens_half_height, OpticalLayout, ScaleInfo,
    Viewport,
};
use crate::optics::{describe, ImageDescriptor, LensResult};
use crate::rays::{compute_rays, image_tip, Ray, RayBounds};
use crate::state::AppState;
use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub struct DiagramFrame {
    pub result: LensResult,
    pub descriptor: Option<ImageDescriptor>,
    pub scale: ScaleInfo,
    pub layout: OpticalLayout,
    /// Empty when rays are hidden.
    pub rays: Vec<Ray>,
    pub image_tip: Option<DVec2>,
    pub near_focal: DVec2,
    pub far_focal: DVec2,
    pub lens_half_height: f64,
    pub object_height_px: f64,
}

impl DiagramFrame {
    pub fn compute(state: &AppState, viewport: &Viewport) -> Self {
        let inputs = state.inputs();
        let result = inputs.solve();
        let descriptor = describe(result.magnification, result.is_real_image);
        let scale = compute_scale(viewport, &inputs, &result);
        let layout = compute_layout(&scale, &inputs, &result);
        let (near_focal, far_focal) = focal_points(&scale, &inputs);

        let rays = if state.show_rays {
            compute_rays(
                &scale,
                &inputs,
                &result,
                OBJECT_HEIGHT_CM,
                RayBounds {
                    min_x: 0.0,
                    max_x: viewport.width,
                },
            )
        } else {
            Vec::new()
        };

        Self {
            result,
            descriptor,
            scale,
            layout,
            rays,
            image_tip: image_tip(&scale, &layout, &result, OBJECT_HEIGHT_CM),
            near_focal,
            far_focal,
            lens_half_height: lens_half_height(viewport, &scale),
            object_height_px: OBJECT_HEIGHT_CM * scale.px_per_cm,
        }
    }
}
