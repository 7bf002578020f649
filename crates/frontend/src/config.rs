//! Page-supplied configuration

use forum_core::FrontendConfig;
use web_sys::{Document, window};

/// Id of the inline JSON element that may override the defaults
pub const CONFIG_ELEMENT_ID: &str = "forum-config";

/// Read the configuration embedded in the page, falling back to defaults
pub fn load(document: &Document) -> FrontendConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return FrontendConfig::default();
    };

    FrontendConfig::from_json(&json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring invalid page configuration");
        FrontendConfig::default()
    })
}

/// Get the base URL for API calls
pub fn base_url() -> String {
    if let Some(window) = window()
        && let Ok(origin) = window.location().origin()
    {
        return origin;
    }

    String::new()
}
