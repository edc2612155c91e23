#![cfg(target_arch = "wasm32")]
use lens_core::{Action, AppState, Locale, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod controls;
mod dom;
mod events;
mod keymap;
mod markup;
mod render;
mod tabs;

/// Owner of the single app state record.
///
/// Every change goes through [`Store::dispatch`], which swaps in the record
/// returned by `AppState::apply` and re-renders from it.
#[derive(Clone)]
pub(crate) struct Store {
    state: Rc<RefCell<AppState>>,
    document: web::Document,
    locale: Locale,
    viewport: Viewport,
}

impl Store {
    fn new(document: web::Document, locale: Locale) -> Self {
        Self {
            state: Rc::new(RefCell::new(AppState::default())),
            document,
            locale,
            viewport: Viewport::default(),
        }
    }

    #[inline]
    pub(crate) fn snapshot(&self) -> AppState {
        *self.state.borrow()
    }

    /// Apply `action` and re-render. Returns false when the state did not change.
    pub(crate) fn dispatch(&self, action: Action) -> bool {
        let current = self.snapshot();
        let next = current.apply(action);
        if next == current {
            return false;
        }
        log::debug!(
            "[state] {action:?} -> a={} s={} f={} mode={:?} rays={} tab={:?}",
            next.object_distance_cm,
            next.screen_distance_cm,
            next.focal_length_cm,
            next.view_mode,
            next.show_rays,
            next.active_tab
        );
        *self.state.borrow_mut() = next;
        self.render();
        true
    }

    pub(crate) fn render(&self) {
        render::render_all(&self.document, &self.snapshot(), &self.viewport, self.locale);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lens-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let locale = document
        .document_element()
        .and_then(|html| html.get_attribute("lang"))
        .map(|tag| Locale::from_tag(&tag))
        .unwrap_or_default();
    log::info!("[init] locale={locale:?}");

    let store = Store::new(document.clone(), locale);

    render::render_static(&document, &store.snapshot(), locale)?;
    controls::wire(&store)?;
    tabs::wire(&store)?;
    events::wire_global_keydown(&store);

    store.render();
    Ok(())
}
