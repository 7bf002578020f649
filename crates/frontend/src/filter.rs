//! Category filter preview
//!
//! Echoes the checked categories into the results panel. Nothing is filtered.

use crate::dom::select_all;
use forum_core::filter::describe_selection;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

pub const APPLY_BUTTON_ID: &str = "apply-filter";
pub const RESULTS_ID: &str = "filter-results";
const CHECKED_CATEGORIES: &str = r#"input[name="category"]:checked"#;

/// Values of the checked category boxes, in document order
pub fn checked_categories(document: &Document) -> Vec<String> {
    select_all(document, CHECKED_CATEGORIES)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .collect()
}

/// Replace the results panel with a paragraph describing `selected`
pub fn render_results(document: &Document, selected: &[String]) {
    let Some(results) = document.get_element_by_id(RESULTS_ID) else {
        return;
    };

    results.set_inner_html("");
    match document.create_element("p") {
        Ok(paragraph) => {
            paragraph.set_text_content(Some(&describe_selection(selected)));
            if let Err(e) = results.append_child(&paragraph) {
                tracing::warn!(error = ?e, "Failed to render filter results");
            }
        }
        Err(e) => tracing::warn!(error = ?e, "Failed to create results paragraph"),
    }
}

pub fn bind(document: &Document) {
    let Some(button) = document.get_element_by_id(APPLY_BUTTON_ID) else {
        return;
    };

    let document = document.clone();
    EventListener::new(&button, "click", move |_| {
        let selected = checked_categories(&document);
        tracing::debug!(?selected, "Filter preview");
        render_results(&document, &selected);
    })
    .forget();
}
