//! Small helpers over `web-sys` document access

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList};

/// Every element of a node list, skipping non-element nodes
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Elements matching `selector` under `root`; an invalid selector matches nothing
pub fn select_all(root: &Document, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            tracing::warn!(selector, error = ?e, "Invalid selector");
            Vec::new()
        }
    }
}

/// First match of `selector` inside `root`
pub fn select_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Nearest ancestor of `element` (itself included) matching `selector`
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// Run `f` once the document has been parsed
pub fn on_ready<F>(document: &Document, f: F)
where
    F: FnOnce() + 'static,
{
    if document.ready_state() == "loading" {
        EventListener::once(document, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}
