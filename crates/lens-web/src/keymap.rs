// Keyboard shortcuts mapped onto state actions.
// Kept free of DOM types so the mapping can be tested on the host.

use lens_core::{Action, AppState, DistanceRange, Field, MobileTab};

// Shift multiplies the nudge step
pub const COARSE_STEP_MULTIPLIER: f64 = 10.0;

#[inline]
pub fn nudge(state: &AppState, field: Field, steps: f64, coarse: bool) -> Action {
    let range = DistanceRange::default();
    let step = if coarse {
        range.step * COARSE_STEP_MULTIPLIER
    } else {
        range.step
    };
    Action::set_distance(field, state.distance(field) + steps * step)
}

#[inline]
pub fn tab_for_digit(key: &str) -> Option<MobileTab> {
    match key {
        "1" => Some(MobileTab::Experiment),
        "2" => Some(MobileTab::Image),
        "3" => Some(MobileTab::Control),
        _ => None,
    }
}

/// Map a `KeyboardEvent.key` value to an action, if the key is bound.
pub fn action_for_key(key: &str, shift: bool, state: &AppState) -> Option<Action> {
    if let Some(tab) = tab_for_digit(key) {
        return Some(Action::SetActiveTab(tab));
    }
    let action = match key {
        "ArrowLeft" => nudge(state, Field::ObjectDistance, -1.0, shift),
        "ArrowRight" => nudge(state, Field::ObjectDistance, 1.0, shift),
        "ArrowDown" => nudge(state, Field::FocalLength, -1.0, shift),
        "ArrowUp" => nudge(state, Field::FocalLength, 1.0, shift),
        // Shifted ',' and '.' arrive as '<' and '>' on most layouts
        "," => nudge(state, Field::ScreenDistance, -1.0, shift),
        "." => nudge(state, Field::ScreenDistance, 1.0, shift),
        "<" => nudge(state, Field::ScreenDistance, -1.0, true),
        ">" => nudge(state, Field::ScreenDistance, 1.0, true),
        "r" | "R" => Action::ToggleRays,
        "v" | "V" => Action::SetViewMode(state.view_mode.toggled()),
        "0" => Action::Reset,
        "s" | "S" => {
            let lens = state.inputs().solve();
            match lens.image_distance_cm {
                Some(b) if lens.is_real_image => Action::SetScreenDistance(b),
                _ => return None,
            }
        }
        _ => return None,
    };
    Some(action)
}
