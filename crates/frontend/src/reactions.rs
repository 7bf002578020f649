//! Like/dislike controls

use crate::dom::{closest, select_all, select_in};
use forum_core::{Counters, FrontendConfig, ReactionSurface, Synchronizer, VoteIntent};
use forum_http::ReactionClient;
use gloo_events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use web_sys::{Document, Element, window};

/// The page around one clicked reaction control
pub struct DomSurface<'a> {
    control: &'a Element,
    config: &'a FrontendConfig,
}

impl<'a> DomSurface<'a> {
    pub const fn new(control: &'a Element, config: &'a FrontendConfig) -> Self {
        Self { control, config }
    }

    /// Smallest container holding the control's counter pair
    pub fn container(&self) -> Option<Element> {
        self.config
            .container_strategy()
            .resolve(|selector| closest(self.control, selector))
    }
}

impl ReactionSurface for DomSurface<'_> {
    fn update_counters(&self, counters: Counters) {
        let Some(container) = self.container() else {
            tracing::debug!("No counter container around reaction control");
            return;
        };

        if let Some(likes) = select_in(&container, &self.config.likes_counter_selector) {
            likes.set_text_content(Some(&counters.likes.to_string()));
        }
        if let Some(dislikes) = select_in(&container, &self.config.dislikes_counter_selector) {
            dislikes.set_text_content(Some(&counters.dislikes.to_string()));
        }
    }

    fn redirect(&self, path: &str) {
        if let Some(window) = window()
            && let Err(e) = window.location().set_href(path)
        {
            tracing::error!(path, error = ?e, "Redirect failed");
        }
    }

    fn notify(&self, message: &str) {
        if let Some(window) = window()
            && let Err(e) = window.alert_with_message(message)
        {
            tracing::warn!(error = ?e, "Failed to show notification");
        }
    }
}

/// Attach the vote handler to every reaction control on the page
pub fn bind(document: &Document, sync: &Rc<Synchronizer<ReactionClient>>) {
    let controls = select_all(document, &sync.config().reaction_selector);
    tracing::debug!(count = controls.len(), "Binding reaction controls");

    for control in controls {
        let sync = Rc::clone(sync);
        let target = control.clone();

        EventListener::new_with_options(
            &control,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                event.stop_propagation();

                let intent = match VoteIntent::from_attributes(
                    target.get_attribute("data-type").as_deref(),
                    target.get_attribute("data-id").as_deref(),
                    target.get_attribute("data-like").as_deref(),
                ) {
                    Ok(intent) => intent,
                    Err(e) => {
                        tracing::warn!(error = %e, "Ignoring reaction control");
                        return;
                    }
                };

                let sync = Rc::clone(&sync);
                let control = target.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let surface = DomSurface::new(&control, sync.config());
                    sync.submit_vote(&intent, &surface).await;
                });
            },
        )
        .forget();
    }
}
