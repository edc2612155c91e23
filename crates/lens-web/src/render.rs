use crate::dom;
use crate::markup;
use lens_core::svg::render_diagram;
use lens_core::{AppState, DiagramFrame, DistanceRange, Field, Locale, Viewport};
use web_sys as web;

// Element ids the page provides (see index.html)
pub const APP_ROOT_ID: &str = "app";
pub const DIAGRAM_ID: &str = "diagram";
pub const FORMULA_ID: &str = "formula";
pub const WIPE_ID: &str = "wipe";
pub const STATUS_ID: &str = "status";
pub const CONTROLS_ID: &str = "controls";
pub const TAB_BAR_ID: &str = "tab-bar";

/// Fill in the parts that are built once: header text and the control skeleton.
pub fn render_static(document: &web::Document, state: &AppState, locale: Locale) -> anyhow::Result<()> {
    let labels = locale.labels();
    for id in [APP_ROOT_ID, DIAGRAM_ID, FORMULA_ID, WIPE_ID, STATUS_ID, CONTROLS_ID, TAB_BAR_ID] {
        dom::element(document, id)?;
    }

    for (selector, text) in [
        (".app-eyebrow", labels.eyebrow),
        (".app-title", labels.title),
        (".app-subtitle", labels.subtitle),
        ("#experiment-heading", labels.experiment_heading),
        ("#experiment-meta", labels.experiment_meta),
        ("#control-heading", labels.control_heading),
        ("#control-meta", labels.control_meta),
        ("#image-heading", labels.image_heading),
        ("#image-meta", labels.image_meta),
    ] {
        if let Ok(Some(el)) = document.query_selector(selector) {
            el.set_text_content(Some(text));
        }
    }

    dom::set_inner_html(
        document,
        CONTROLS_ID,
        &markup::controls_html(state, &DistanceRange::default(), labels),
    );
    Ok(())
}

/// Recompute everything derived from `state` and push it into the page.
pub fn render_all(document: &web::Document, state: &AppState, viewport: &Viewport, locale: Locale) {
    let labels = locale.labels();
    let frame = DiagramFrame::compute(state, viewport);

    dom::set_inner_html(
        document,
        DIAGRAM_ID,
        &render_diagram(&frame, state, viewport, labels),
    );
    dom::set_inner_html(document, STATUS_ID, &markup::status_html(state, &frame.result, labels));
    dom::set_inner_html(document, FORMULA_ID, &markup::formula_html(state, &frame.result, labels));
    dom::set_inner_html(
        document,
        WIPE_ID,
        &markup::wipe_html(state, &frame.result, frame.descriptor.as_ref(), labels),
    );
    dom::set_inner_html(document, TAB_BAR_ID, &markup::tab_bar_html(state.active_tab, labels));

    if let Some(root) = document.get_element_by_id(APP_ROOT_ID) {
        _ = root.set_attribute("data-active-tab", state.active_tab.as_str());
    }
    sync_controls(document, state);
}

/// Push state values back into the inputs, leaving a number field alone while it is being typed in.
fn sync_controls(document: &web::Document, state: &AppState) {
    for field in Field::ALL {
        let value = state.distance(field).to_string();
        if let Some(range) = dom::input_by_id(document, &markup::range_input_id(field)) {
            range.set_value(&value);
        }
        if let Some(number) = dom::input_by_id(document, &markup::number_input_id(field)) {
            if !dom::is_active_element(document, &number) {
                number.set_value(&value);
            }
        }
    }

    if let Some(rays) = dom::input_by_id(document, "show-rays") {
        rays.set_checked(state.show_rays);
    }

    if let Ok(buttons) = document.query_selector_all("[data-view-mode]") {
        for i in 0..buttons.length() {
            let Some(el) = buttons
                .item(i)
                .and_then(|n| wasm_bindgen::JsCast::dyn_into::<web::Element>(n).ok())
            else {
                continue;
            };
            let active = el.get_attribute("data-view-mode").as_deref() == Some(state.view_mode.as_str());
            _ = el.class_list().toggle_with_force("active", active);
        }
    }
}
