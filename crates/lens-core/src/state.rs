//! Application state shared with the frontends.
//!
//! `AppState` is a plain value. Frontends never mutate it field by field; they
//! feed an [`Action`] through [`AppState::apply`] and replace their copy with
//! the returned record, then recompute everything derived from it.

use crate::constants::*;
use crate::error::Field;
use crate::optics::OpticalInputs;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Simple,
    Detail,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Simple, ViewMode::Detail];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Simple => "simple",
            ViewMode::Detail => "detail",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Simple => ViewMode::Detail,
            ViewMode::Detail => ViewMode::Simple,
        }
    }
}

/// Panel shown on narrow screens, where only one fits at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MobileTab {
    #[default]
    Experiment,
    Image,
    Control,
}

impl MobileTab {
    pub const ALL: [MobileTab; 3] = [MobileTab::Experiment, MobileTab::Image, MobileTab::Control];

    pub fn as_str(self) -> &'static str {
        match self {
            MobileTab::Experiment => "experiment",
            MobileTab::Image => "image",
            MobileTab::Control => "control",
        }
    }
}

/// Slider limits for one distance control, plus parsing of its number field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for DistanceRange {
    fn default() -> Self {
        Self {
            min: DISTANCE_MIN_CM,
            max: DISTANCE_MAX_CM,
            step: DISTANCE_STEP_CM,
        }
    }
}

impl DistanceRange {
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Value to apply while the user is still typing. Empty or unparsable text
    /// leaves the current value alone.
    pub fn parse_edit(&self, raw: &str) -> Option<f64> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        self.parse_clamped(raw)
    }

    /// Value to apply when the field loses focus. Clearing the field snaps to `min`.
    pub fn parse_commit(&self, raw: &str) -> Option<f64> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Some(self.min);
        }
        self.parse_clamped(raw)
    }

    fn parse_clamped(&self, raw: &str) -> Option<f64> {
        raw.parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .map(|v| self.clamp(v))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    SetObjectDistance(f64),
    SetScreenDistance(f64),
    SetFocalLength(f64),
    SetViewMode(ViewMode),
    SetShowRays(bool),
    ToggleRays,
    SetActiveTab(MobileTab),
    Reset,
}

impl Action {
    /// The setter action for one of the three distance controls.
    pub fn set_distance(field: Field, value_cm: f64) -> Self {
        match field {
            Field::ObjectDistance => Action::SetObjectDistance(value_cm),
            Field::FocalLength => Action::SetFocalLength(value_cm),
            Field::ScreenDistance => Action::SetScreenDistance(value_cm),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppState {
    // Physics
    pub object_distance_cm: f64,
    pub screen_distance_cm: f64,
    pub focal_length_cm: f64,

    // Display
    pub view_mode: ViewMode,
    pub show_rays: bool,

    // Narrow-screen layout
    pub active_tab: MobileTab,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            object_distance_cm: DEFAULT_OBJECT_DISTANCE_CM,
            screen_distance_cm: DEFAULT_SCREEN_DISTANCE_CM,
            focal_length_cm: DEFAULT_FOCAL_LENGTH_CM,
            view_mode: ViewMode::Simple,
            show_rays: true,
            active_tab: MobileTab::Experiment,
        }
    }
}

impl AppState {
    /// Return the state that results from `action`. Distances are clamped to the
    /// slider range; a non-finite distance is ignored.
    pub fn apply(self, action: Action) -> AppState {
        let range = DistanceRange::default();
        let distance = |v: f64| v.is_finite().then(|| range.clamp(v));
        match action {
            Action::SetObjectDistance(v) => match distance(v) {
                Some(object_distance_cm) => AppState {
                    object_distance_cm,
                    ..self
                },
                None => self,
            },
            Action::SetScreenDistance(v) => match distance(v) {
                Some(screen_distance_cm) => AppState {
                    screen_distance_cm,
                    ..self
                },
                None => self,
            },
            Action::SetFocalLength(v) => match distance(v) {
                Some(focal_length_cm) => AppState {
                    focal_length_cm,
                    ..self
                },
                None => self,
            },
            Action::SetViewMode(view_mode) => AppState { view_mode, ..self },
            Action::SetShowRays(show_rays) => AppState { show_rays, ..self },
            Action::ToggleRays => AppState {
                show_rays: !self.show_rays,
                ..self
            },
            Action::SetActiveTab(active_tab) => AppState { active_tab, ..self },
            Action::Reset => AppState::default(),
        }
    }

    pub fn distance(&self, field: Field) -> f64 {
        match field {
            Field::ObjectDistance => self.object_distance_cm,
            Field::FocalLength => self.focal_length_cm,
            Field::ScreenDistance => self.screen_distance_cm,
        }
    }

    #[inline]
    pub fn inputs(&self) -> OpticalInputs {
        OpticalInputs {
            object_distance_cm: self.object_distance_cm,
            focal_length_cm: self.focal_length_cm,
            screen_distance_cm: self.screen_distance_cm,
        }
    }
}
