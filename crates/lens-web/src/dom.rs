use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))
}

#[inline]
pub fn set_inner_html(document: &web::Document, id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_inner_html(html);
    }
}

/// Attach a listener for `event` to `target` for the lifetime of the page.
pub fn listen<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] failed to add {event} listener: {e:?}");
    }
    closure.forget();
}

/// Element that dispatched `ev`, if it is an `Element`.
#[inline]
pub fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

/// Walk up from the event target to the nearest element carrying `attr`.
pub fn closest_with_attr(ev: &web::Event, attr: &str) -> Option<(web::Element, String)> {
    let el = event_element(ev)?;
    let found = el.closest(&format!("[{attr}]")).ok().flatten()?;
    let value = found.get_attribute(attr)?;
    Some((found, value))
}

pub fn input_by_id(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

#[inline]
pub fn is_active_element(document: &web::Document, el: &web::Element) -> bool {
    document
        .active_element()
        .map(|active| &active == el)
        .unwrap_or(false)
}
