//! Theme management module

mod storage;

pub use storage::PreferenceStore;

use crate::dom::{closest, select_all, select_in};
use forum_core::{FrontendConfig, KeyValueStore, Theme, ThemeSettings};
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Document attribute carrying the active theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Reflect `theme` on the document element and every toggle control
pub fn apply_theme(document: &Document, config: &FrontendConfig, theme: Theme) {
    if let Some(root) = document.document_element() {
        let result = match theme.document_attribute() {
            Some(value) => root.set_attribute(THEME_ATTRIBUTE, value),
            None => root.remove_attribute(THEME_ATTRIBUTE),
        };
        if let Err(e) = result {
            tracing::warn!(error = ?e, "Failed to update theme attribute");
        }
    }

    for button in select_all(document, &config.theme_toggle_selector) {
        if let Some(icon) = select_in(&button, &config.theme_icon_selector) {
            icon.set_text_content(Some(theme.toggle_icon()));
            if let Err(e) = button.set_attribute("title", theme.toggle_title()) {
                tracing::warn!(error = ?e, "Failed to update theme toggle title");
            }
        }
    }
}

/// Flip the stored preference and apply it
pub fn toggle_theme<S: KeyValueStore>(
    document: &Document,
    config: &FrontendConfig,
    settings: &ThemeSettings<S>,
) -> Theme {
    let theme = settings.get().toggle();
    if let Err(e) = settings.set(theme) {
        tracing::warn!(error = %e, "Failed to persist theme");
    }
    apply_theme(document, config, theme);
    theme
}

/// Apply the saved theme and handle clicks on any toggle control
pub fn init(document: &Document, config: &FrontendConfig, store: PreferenceStore) {
    let settings = ThemeSettings::new(store, config.theme_storage_key.clone());

    let theme = settings.get();
    if let Err(e) = settings.set(theme) {
        tracing::warn!(error = %e, "Failed to persist theme");
    }
    apply_theme(document, config, theme);
    tracing::debug!(%theme, "Theme initialised");

    let document_handle = document.clone();
    let config = config.clone();
    EventListener::new_with_options(
        document,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let on_toggle = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| closest(&element, &config.theme_toggle_selector))
                .is_some();

            if on_toggle {
                event.prevent_default();
                toggle_theme(&document_handle, &config, &settings);
            }
        },
    )
    .forget();
}
