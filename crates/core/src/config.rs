//! Frontend configuration
//!
//! Every path and selector the page scripts depend on lives here so a
//! template can override them with an inline JSON document.

use crate::container::ContainerStrategy;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Configuration shared by all page behaviours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Where unauthorized votes send the browser
    pub login_path: String,
    /// Vote endpoint for posts
    pub like_post_path: String,
    /// Vote endpoint for comments
    pub like_comment_path: String,
    /// Persistent storage key holding the theme preference
    pub theme_storage_key: String,
    /// Elements acting as reaction controls
    pub reaction_selector: String,
    /// Counter containers, tried in order from the clicked control outwards
    pub container_selectors: Vec<String>,
    /// Likes counter, relative to the resolved container
    pub likes_counter_selector: String,
    /// Dislikes counter, relative to the resolved container
    pub dislikes_counter_selector: String,
    /// Theme toggle controls
    pub theme_toggle_selector: String,
    /// Icon element inside a theme toggle
    pub theme_icon_selector: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            like_post_path: "/like_post".to_string(),
            like_comment_path: "/like_comment".to_string(),
            theme_storage_key: "forum-theme".to_string(),
            reaction_selector: ".reaction-btn".to_string(),
            container_selectors: vec![
                ".pinterest-card-actions".to_string(),
                "article, .card-body".to_string(),
            ],
            likes_counter_selector: r#".reaction-btn[data-like="1"] .likes-count"#.to_string(),
            dislikes_counter_selector: r#".reaction-btn[data-like="0"] .dislikes-count"#
                .to_string(),
            theme_toggle_selector: ".theme-toggle".to_string(),
            theme_icon_selector: ".theme-toggle-icon".to_string(),
        }
    }
}

impl FrontendConfig {
    /// Parse and validate a JSON override; absent fields keep their defaults
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        let required = [
            ("login_path", &self.login_path),
            ("like_post_path", &self.like_post_path),
            ("like_comment_path", &self.like_comment_path),
            ("theme_storage_key", &self.theme_storage_key),
            ("reaction_selector", &self.reaction_selector),
            ("likes_counter_selector", &self.likes_counter_selector),
            ("dislikes_counter_selector", &self.dislikes_counter_selector),
            ("theme_toggle_selector", &self.theme_toggle_selector),
            ("theme_icon_selector", &self.theme_icon_selector),
        ];

        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CoreError::invalid_config(format!("{name} must not be empty")));
        }

        if self.container_selectors.is_empty()
            || self.container_selectors.iter().any(|s| s.trim().is_empty())
        {
            return Err(CoreError::invalid_config(
                "container_selectors must list at least one non-empty selector",
            ));
        }

        Ok(())
    }

    /// Container resolution rules in precedence order
    pub fn container_strategy(&self) -> ContainerStrategy {
        ContainerStrategy::from_selectors(&self.container_selectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FrontendConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.theme_storage_key, "forum-theme");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = FrontendConfig::from_json(r#"{"login_path": "/signin"}"#).unwrap();
        assert_eq!(config.login_path, "/signin");
        assert_eq!(config.like_post_path, "/like_post");
        assert_eq!(config.container_selectors.len(), 2);
    }

    #[test]
    fn test_rejects_empty_values() {
        let err = FrontendConfig::from_json(r#"{"like_post_path": " "}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { .. }));

        let err = FrontendConfig::from_json(r#"{"container_selectors": []}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { .. }));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = FrontendConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::Serialization { .. }));
    }
}
