//! Light/dark theme preference: load, apply and toggle.
//!
//! Reads the user's preference from the [`PreferenceStore`] (falling back to
//! the environment's color-scheme query) and marks the root element with
//! `data-theme="light"` when the light theme is active. The dark theme is the
//! unmarked state. Toggle writes back to the store and re-applies.
//!
//! TRADE-OFFS
//! ==========
//! The applied state is always re-read from the root attribute instead of
//! being cached, so a page that changed the attribute by other means still
//! toggles to the visually opposite theme.

use crate::config::PageConfig;
use crate::host::{ColorScheme, Document, PreferenceStore};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

const LIGHT: &str = "light";
const DARK: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }

    /// Interpret a stored or attribute value. Only `"light"` is light.
    pub fn from_marker(raw: &str) -> Self {
        if raw == LIGHT { Self::Light } else { Self::Dark }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Read the persisted preference, or derive one from the environment.
///
/// A non-empty stored value always wins. Without one, the environment's
/// `prefers-color-scheme: light` decides; everything else is dark.
pub fn load_preference<S, C>(store: &S, scheme: &C, config: &PageConfig) -> ThemePreference
where
    S: PreferenceStore + ?Sized,
    C: ColorScheme + ?Sized,
{
    if let Some(stored) = store.load(&config.storage_key).filter(|v| !v.is_empty()) {
        return ThemePreference::from_marker(&stored);
    }
    if scheme.matches(&config.light_scheme_query) {
        ThemePreference::Light
    } else {
        ThemePreference::Dark
    }
}

/// Mark the root element and refresh the toggle glyph for `pref`.
pub fn apply_preference<D>(doc: &D, config: &PageConfig, pref: ThemePreference)
where
    D: Document + ?Sized,
{
    if let Some(root) = doc.root_element() {
        let result = match pref {
            ThemePreference::Light => doc.set_attribute(&root, &config.theme_attribute, LIGHT),
            ThemePreference::Dark => doc.remove_attribute(&root, &config.theme_attribute),
        };
        if let Err(e) = result {
            log::warn!("theme: failed to mark root element: {e}");
        }
    }

    if let Some(toggle) = doc.element_by_id(&config.toggle_id) {
        let glyph = match pref {
            ThemePreference::Light => &config.light_active_glyph,
            ThemePreference::Dark => &config.dark_active_glyph,
        };
        doc.set_text(&toggle, glyph);
    }
}

/// The theme currently applied to the root element.
pub fn current_preference<D>(doc: &D, config: &PageConfig) -> ThemePreference
where
    D: Document + ?Sized,
{
    doc.root_element()
        .and_then(|root| doc.attribute(&root, &config.theme_attribute))
        .map_or(ThemePreference::Dark, |raw| ThemePreference::from_marker(&raw))
}

/// Flip the applied theme, persist it and re-apply. Returns the new theme.
pub fn toggle<D, S>(doc: &D, store: &S, config: &PageConfig) -> ThemePreference
where
    D: Document + ?Sized,
    S: PreferenceStore + ?Sized,
{
    let next = current_preference(doc, config).opposite();
    if let Err(e) = store.store(&config.storage_key, next.as_str()) {
        log::warn!("theme: failed to persist {}: {e}", next.as_str());
    }
    apply_preference(doc, config, next);
    log::debug!("theme: switched to {}", next.as_str());
    next
}
