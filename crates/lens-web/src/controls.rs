use crate::dom;
use crate::markup;
use crate::render::CONTROLS_ID;
use crate::Store;
use lens_core::{Action, DistanceRange, Field};
use wasm_bindgen::JsCast;
use web_sys as web;

fn field_input(ev: &web::Event) -> Option<(Field, web::HtmlInputElement)> {
    let input = dom::event_element(ev)?.dyn_into::<web::HtmlInputElement>().ok()?;
    let field = markup::field_from_id(&input.get_attribute("data-field")?)?;
    Some((field, input))
}

/// Wire the control panel through one set of delegated listeners on its container.
pub fn wire(store: &Store) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let panel: web::EventTarget = dom::element(&document, CONTROLS_ID)?.into();
    let range = DistanceRange::default();

    // Slider drags and keystrokes in the number fields
    let s = store.clone();
    dom::listen(&panel, "input", move |ev: web::Event| {
        let Some((field, input)) = field_input(&ev) else {
            return;
        };
        let value = if input.type_() == "range" {
            input.value().parse::<f64>().ok()
        } else {
            range.parse_edit(&input.value())
        };
        if let Some(v) = value {
            s.dispatch(Action::set_distance(field, v));
        }
    });

    // Leaving a number field commits it; an empty field snaps to the minimum
    let s = store.clone();
    dom::listen(&panel, "focusout", move |ev: web::Event| {
        let Some((field, input)) = field_input(&ev) else {
            return;
        };
        if input.type_() != "number" {
            return;
        }
        let changed = match range.parse_commit(&input.value()) {
            Some(v) => s.dispatch(Action::set_distance(field, v)),
            None => {
                log::debug!("[controls] discarding unparsable {field} input");
                false
            }
        };
        // Rewrite the field with the clamped value even when the state held still
        if !changed {
            s.render();
        }
    });

    let s = store.clone();
    dom::listen(&panel, "change", move |ev: web::Event| {
        let Some(input) = dom::event_element(&ev)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        if input.id() == "show-rays" {
            s.dispatch(Action::SetShowRays(input.checked()));
        }
    });

    let s = store.clone();
    dom::listen(&panel, "click", move |ev: web::Event| {
        if let Some((_, id)) = dom::closest_with_attr(&ev, "data-view-mode") {
            if let Some(mode) = markup::view_mode_from_id(&id) {
                s.dispatch(Action::SetViewMode(mode));
            }
            return;
        }
        if dom::event_element(&ev).is_some_and(|el| el.id() == "reset") {
            s.dispatch(Action::Reset);
        }
    });

    Ok(())
}
