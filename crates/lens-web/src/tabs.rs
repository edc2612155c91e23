use crate::dom;
use crate::markup;
use crate::render::TAB_BAR_ID;
use crate::Store;
use lens_core::Action;
use web_sys as web;

pub fn wire(store: &Store) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let bar: web::EventTarget = dom::element(&document, TAB_BAR_ID)?.into();
    let s = store.clone();
    dom::listen(&bar, "click", move |ev: web::Event| {
        if let Some(tab) = dom::closest_with_attr(&ev, "data-tab")
            .and_then(|(_, id)| markup::tab_from_id(&id))
        {
            s.dispatch(Action::SetActiveTab(tab));
        }
    });
    Ok(())
}
