//! Back-to-top link

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Document, ScrollBehavior, ScrollToOptions, window};

pub const LINK_ID: &str = "back-to-top";

pub fn bind(document: &Document) {
    let Some(link) = document.get_element_by_id(LINK_ID) else {
        return;
    };

    EventListener::new_with_options(
        &link,
        "click",
        EventListenerOptions::enable_prevent_default(),
        |event| {
            event.prevent_default();
            if let Some(window) = window() {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        },
    )
    .forget();
}
