//! Thin-lens solver and image classification.
//!
//! Everything here is a pure function of the three distances. The solver uses
//! the real-is-positive convention: a positive image distance lies on the far
//! side of the lens, a negative one on the object's side.

use crate::constants::{EPSILON, FOCUS_TOLERANCE_CM};
use crate::error::{Field, InputError};

/// The three distances a learner controls, all in centimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpticalInputs {
    pub object_distance_cm: f64,
    pub focal_length_cm: f64,
    pub screen_distance_cm: f64,
}

impl OpticalInputs {
    /// Build validated inputs, rejecting non-finite or non-positive distances.
    pub fn new(
        object_distance_cm: f64,
        focal_length_cm: f64,
        screen_distance_cm: f64,
    ) -> Result<Self, InputError> {
        check(Field::ObjectDistance, object_distance_cm)?;
        check(Field::FocalLength, focal_length_cm)?;
        check(Field::ScreenDistance, screen_distance_cm)?;
        Ok(Self {
            object_distance_cm,
            focal_length_cm,
            screen_distance_cm,
        })
    }

    #[inline]
    pub fn solve(&self) -> LensResult {
        solve(
            self.object_distance_cm,
            self.focal_length_cm,
            self.screen_distance_cm,
        )
    }
}

fn check(field: Field, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(InputError::NonPositive { field, value });
    }
    Ok(())
}

/// Outcome of one thin-lens solve.
///
/// `image_distance_cm` and `magnification` are `None` together, when the object
/// sits on the focal plane and the image forms at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LensResult {
    pub image_distance_cm: Option<f64>,
    pub magnification: Option<f64>,
    pub is_real_image: bool,
    pub is_inverted: bool,
    pub is_image_on_screen: bool,
}

impl LensResult {
    /// True when an image exists and it is virtual.
    #[inline]
    pub fn is_virtual_image(&self) -> bool {
        self.image_distance_cm.is_some() && !self.is_real_image
    }
}

/// Solve 1/f = 1/a + 1/b for b and classify the resulting image.
///
/// No validation happens here; callers keep the distances finite and positive.
pub fn solve(object_distance_cm: f64, focal_length_cm: f64, screen_distance_cm: f64) -> LensResult {
    let inv_b = 1.0 / focal_length_cm - 1.0 / object_distance_cm;

    if inv_b.abs() < EPSILON {
        log::debug!(
            "[optics] object at focal plane (a={object_distance_cm}, f={focal_length_cm}); image at infinity"
        );
        return LensResult::default();
    }

    let image_distance_cm = 1.0 / inv_b;
    let magnification = -image_distance_cm / object_distance_cm;
    let is_real_image = image_distance_cm > 0.0;
    let is_image_on_screen =
        is_real_image && (image_distance_cm - screen_distance_cm).abs() < FOCUS_TOLERANCE_CM;

    log::trace!(
        "[optics] a={object_distance_cm} f={focal_length_cm} -> b={image_distance_cm:.3} m={magnification:.3}"
    );

    LensResult {
        image_distance_cm: Some(image_distance_cm),
        magnification: Some(magnification),
        is_real_image,
        is_inverted: magnification < 0.0,
        is_image_on_screen,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Upright,
    Inverted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Real,
    Virtual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSize {
    Enlarged,
    Reduced,
    Same,
}

/// Qualitative description of an image, as shown in the comparison panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub orientation: Orientation,
    pub kind: ImageKind,
    pub size: ImageSize,
}

/// Classify an image from its magnification. Returns `None` for an image at infinity.
pub fn describe(magnification: Option<f64>, is_real_image: bool) -> Option<ImageDescriptor> {
    let magnification = magnification?;
    let abs_mag = magnification.abs();
    Some(ImageDescriptor {
        orientation: if magnification < 0.0 {
            Orientation::Inverted
        } else {
            Orientation::Upright
        },
        kind: if is_real_image {
            ImageKind::Real
        } else {
            ImageKind::Virtual
        },
        size: if abs_mag > 1.0 {
            ImageSize::Enlarged
        } else if abs_mag < 1.0 {
            ImageSize::Reduced
        } else {
            ImageSize::Same
        },
    })
}
