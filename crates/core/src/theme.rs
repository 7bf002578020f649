//! Theme preference

use crate::error::CoreResult;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Value of the document's `data-theme` attribute; light removes it
    pub const fn document_attribute(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark"),
        }
    }

    /// Icon shown on toggle controls, pointing at the other theme
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    pub const fn toggle_title(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything other than `dark` is the light theme
impl FromStr for Theme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "dark" { Self::Dark } else { Self::Light })
    }
}

/// Persistent string storage (`localStorage` in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> CoreResult<()>;
}

/// In-memory store, used when the browser offers no persistent storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        (**self).set(key, value)
    }
}

/// Theme preference backed by an injected store
pub struct ThemeSettings<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemeSettings<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored preference, light when nothing is stored
    pub fn get(&self) -> Theme {
        self.store
            .get(&self.key)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn set(&self, theme: Theme) -> CoreResult<()> {
        self.store.set(&self.key, theme.as_str())
    }

    /// Flip the stored preference and return the new theme
    pub fn toggle(&self) -> CoreResult<Theme> {
        let theme = self.get().toggle();
        self.set(theme)?;
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_light() {
        let settings = ThemeSettings::new(MemoryStore::new(), "forum-theme");
        assert_eq!(settings.get(), Theme::Light);
    }

    #[test]
    fn test_unknown_stored_value_is_light() {
        let store = MemoryStore::new();
        store.set("forum-theme", "solarized").unwrap();

        let settings = ThemeSettings::new(&store, "forum-theme");
        assert_eq!(settings.get(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_restores_original_state() {
        let store = MemoryStore::new();
        let settings = ThemeSettings::new(&store, "forum-theme");
        let original = settings.get().document_attribute();

        assert_eq!(settings.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.get("forum-theme").as_deref(), Some("dark"));
        assert_eq!(settings.get().document_attribute(), Some("dark"));

        assert_eq!(settings.toggle().unwrap(), Theme::Light);
        assert_eq!(store.get("forum-theme").as_deref(), Some("light"));
        assert_eq!(settings.get().document_attribute(), original);
    }

    #[test]
    fn test_toggle_controls_point_at_other_theme() {
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
        assert_eq!(Theme::Dark.toggle_title(), "Switch to light mode");
        assert_eq!(Theme::Light.toggle_icon(), "🌙");
        assert_eq!(Theme::Light.toggle_title(), "Switch to dark mode");
    }
}
