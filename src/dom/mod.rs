//! Bindings from the static page's markup to the state in [`crate::state`].
//!
//! Every adapter reads its nodes once at startup. Listeners stay registered
//! for the life of the page, so their closures are leaked with
//! [`Closure::forget`].

pub mod contact_form;
pub mod faq;
pub mod header;
pub mod navbar;
pub mod preloader;
pub mod reveal;
pub mod smooth_scroll;
pub mod stats;
pub mod testimonials;

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentReadyState, Element, Event, EventTarget, NodeList, Window};

use crate::error::Result;

pub const ACTIVE: &str = "active";

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// The window `load` event has already fired once the document is complete.
pub fn load_already_fired(state: DocumentReadyState) -> bool {
    state == DocumentReadyState::Complete
}

/// Runs `handler` on window `load`. The wasm module can start after `load`
/// has fired, in which case the handler runs right away instead.
pub fn on_load<F>(window: &Window, document: &Document, mut handler: F) -> Result<()>
where
    F: FnMut() + 'static,
{
    if load_already_fired(document.ready_state()) {
        handler();
        return Ok(());
    }
    listen(window, "load", move |_| handler())
}

/// Registers the same handler on every element.
pub fn listen_all<F>(elements: &[Element], event: &str, handler: F) -> Result<()>
where
    F: Fn(Event) + 'static,
{
    let handler = Rc::new(handler);
    for element in elements {
        let handler = handler.clone();
        listen(element, event, move |e| handler(e))?;
    }
    Ok(())
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("Failed to set class {}: {:?}", class, e);
    }
}

pub fn viewport_height(window: &Window) -> Option<f64> {
    window.inner_height().ok().and_then(|h| h.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_counts_as_fired_only_when_complete() {
        assert!(load_already_fired(DocumentReadyState::Complete));
        assert!(!load_already_fired(DocumentReadyState::Interactive));
        assert!(!load_already_fired(DocumentReadyState::Loading));
    }
}
