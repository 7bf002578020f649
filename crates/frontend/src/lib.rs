//! Forum page scripts compiled to WebAssembly

pub mod back_to_top;
pub mod config;
pub mod dom;
pub mod filter;
pub mod logging;
pub mod reactions;
pub mod theme;

use forum_core::Synchronizer;
use forum_http::ReactionClient;
use std::rc::Rc;
use web_sys::window;

/// Wire every page behaviour once the document is ready
pub fn start() {
    let Some(document) = window().and_then(|w| w.document()) else {
        tracing::error!("No document available, page scripts not started");
        return;
    };

    let ready_document = document.clone();
    dom::on_ready(&document, move || {
        let document = ready_document;
        let config = config::load(&document);

        theme::init(&document, &config, theme::PreferenceStore::detect());
        back_to_top::bind(&document);
        filter::bind(&document);

        match ReactionClient::new(config::base_url()) {
            Ok(client) => {
                let sync = Rc::new(Synchronizer::new(client, config));
                reactions::bind(&document, &sync);
            }
            Err(e) => tracing::error!(error = %e, "Failed to create reaction client"),
        }
    });
}
