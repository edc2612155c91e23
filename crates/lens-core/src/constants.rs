// Shared optics and diagram tuning constants used by both web and native frontends.

// Solver
pub const EPSILON: f64 = 1e-6; // |1/f - 1/a| below this means the object sits on the focal plane
pub const FOCUS_TOLERANCE_CM: f64 = 0.5; // image within this distance of the screen counts as focused

// Diagram viewport (logical SVG units)
pub const VIEWBOX_WIDTH: f64 = 900.0;
pub const VIEWBOX_HEIGHT: f64 = 360.0;
pub const PADDING_PX: f64 = 60.0; // kept clear between the farthest marker and the viewport edge

// Pixel scale clamp (px per cm)
pub const MIN_SCALE: f64 = 6.0;
pub const MAX_SCALE: f64 = 18.0;

// Glyph sizing
pub const OBJECT_HEIGHT_CM: f64 = 6.0;
pub const DISPLAY_MAGNIFICATION_LIMIT: f64 = 3.5; // image glyph only; reported magnification is never clamped
pub const LENS_HALF_HEIGHT_VIEW_RATIO: f64 = 0.42;
pub const LENS_HALF_HEIGHT_CM: f64 = 8.0;

// Slider range shared by all three distance controls
pub const DISTANCE_MIN_CM: f64 = 5.0;
pub const DISTANCE_MAX_CM: f64 = 100.0;
pub const DISTANCE_STEP_CM: f64 = 0.5;

// Initial experiment
pub const DEFAULT_OBJECT_DISTANCE_CM: f64 = 30.0;
pub const DEFAULT_SCREEN_DISTANCE_CM: f64 = 20.0;
pub const DEFAULT_FOCAL_LENGTH_CM: f64 = 10.0;
