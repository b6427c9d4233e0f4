//! Page configuration: element ids, storage key and display strings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The documentation templates agree on a small set of identifiers. They are
//! collected here so the behavior modules never hard-code DOM names. A page
//! can override any of them with a JSON object in the root element's
//! `data-enhancer-config` attribute.

use serde::Deserialize;

use crate::error::StartError;
use crate::host::Document;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Root-element attribute holding JSON overrides for [`PageConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-enhancer-config";

pub const DEFAULT_STORAGE_KEY: &str = "bots-theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TOGGLE_ID: &str = "themeToggle";
pub const DEFAULT_LAST_UPDATED_ID: &str = "lastUpdated";
pub const DEFAULT_PAGE_LAST_UPDATED_ID: &str = "pageLastUpdated";
pub const DEFAULT_LAST_UPDATED_PREFIX: &str = "Last Updated: ";
pub const DEFAULT_LIGHT_SCHEME_QUERY: &str = "(prefers-color-scheme: light)";
pub const DEFAULT_MAX_ANCHOR_DEPTH: usize = 32;

/// Glyph shown on the toggle while the light theme is active.
pub const MOON_GLYPH: &str = "\u{1F319}";
/// Glyph shown on the toggle while the dark theme is active.
pub const SUN_GLYPH: &str = "\u{2600}\u{FE0F}";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Attribute on the root element marking the light theme.
    pub theme_attribute: String,
    pub toggle_id: String,
    pub last_updated_id: String,
    pub page_last_updated_id: String,
    pub last_updated_prefix: String,
    pub light_scheme_query: String,
    pub light_active_glyph: String,
    pub dark_active_glyph: String,
    /// Ancestors inspected above a click target when looking for an anchor.
    pub max_anchor_depth: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            theme_attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            last_updated_id: DEFAULT_LAST_UPDATED_ID.to_owned(),
            page_last_updated_id: DEFAULT_PAGE_LAST_UPDATED_ID.to_owned(),
            last_updated_prefix: DEFAULT_LAST_UPDATED_PREFIX.to_owned(),
            light_scheme_query: DEFAULT_LIGHT_SCHEME_QUERY.to_owned(),
            light_active_glyph: MOON_GLYPH.to_owned(),
            dark_active_glyph: SUN_GLYPH.to_owned(),
            max_anchor_depth: DEFAULT_MAX_ANCHOR_DEPTH,
        }
    }
}

impl PageConfig {
    /// Overlay a (possibly partial) JSON object on the defaults.
    ///
    /// Missing fields keep their default; unknown fields are ignored.
    pub fn from_json(raw: &str) -> Result<Self, StartError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    /// Read overrides from the root element's [`CONFIG_ATTRIBUTE`].
    ///
    /// No root element or no attribute means the defaults.
    pub fn from_document<D>(doc: &D) -> Result<Self, StartError>
    where
        D: Document + ?Sized,
    {
        match doc.root_element().and_then(|root| doc.attribute(&root, CONFIG_ATTRIBUTE)) {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}
