use crate::dom;
use crate::keymap::action_for_key;
use crate::Store;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys pressed while a form input has focus belong to that input.
fn is_in_input(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .is_some_and(|t| t.dyn_into::<web::HtmlInputElement>().is_ok())
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, store: &Store) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || is_in_input(ev) {
        return;
    }
    let key = ev.key();
    if let Some(action) = action_for_key(&key, ev.shift_key(), &store.snapshot()) {
        log::debug!("[keys] {key} -> {action:?}");
        store.dispatch(action);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(store: &Store) {
    if let Some(window) = web::window() {
        let store = store.clone();
        let target: web::EventTarget = window.into();
        dom::listen(&target, "keydown", move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &store);
        });
    }
}
