//! Page enhancer tying the theme, scroll and timestamp behaviors to the host
//! handles it was constructed with.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser layer builds one `PageEnhancer` per page and forwards the three
//! external signals to it: script load (`init`), toggle activation (`toggle`)
//! and document clicks (`handle_click`). No state is cached between calls.

use crate::config::PageConfig;
use crate::host::{ColorScheme, Document, PreferenceStore};
use crate::scroll::{self, ClickOutcome};
use crate::theme::{self, ThemePreference};
use crate::timestamp;

#[cfg(test)]
#[path = "enhancer_test.rs"]
mod enhancer_test;

pub struct PageEnhancer<D, S, C> {
    config: PageConfig,
    document: D,
    store: S,
    scheme: C,
}

impl<D, S, C> PageEnhancer<D, S, C>
where
    D: Document,
    S: PreferenceStore,
    C: ColorScheme,
{
    pub fn new(config: PageConfig, document: D, store: S, scheme: C) -> Self {
        Self { config, document, store, scheme }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Apply the loaded theme and stamp the last-modified labels.
    pub fn init(&self) -> ThemePreference {
        let pref = self.load_preference();
        self.apply_preference(pref);
        self.update_last_modified();
        log::debug!("enhancer: initialized with {} theme", pref.as_str());
        pref
    }

    pub fn load_preference(&self) -> ThemePreference {
        theme::load_preference(&self.store, &self.scheme, &self.config)
    }

    pub fn apply_preference(&self, pref: ThemePreference) {
        theme::apply_preference(&self.document, &self.config, pref);
    }

    pub fn current_preference(&self) -> ThemePreference {
        theme::current_preference(&self.document, &self.config)
    }

    pub fn toggle(&self) -> ThemePreference {
        theme::toggle(&self.document, &self.store, &self.config)
    }

    /// The toggle control, if the page has one.
    pub fn toggle_control(&self) -> Option<D::Element> {
        self.document.element_by_id(&self.config.toggle_id)
    }

    pub fn handle_click(&self, target: &D::Element) -> ClickOutcome {
        scroll::intercept_click(&self.document, target, self.config.max_anchor_depth)
    }

    pub fn update_last_modified(&self) -> usize {
        timestamp::update_last_modified(&self.document, &self.config)
    }
}
