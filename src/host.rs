//! Host seams between the page behaviors and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The behaviors never reach for `window`/`document` globals. They receive a
//! [`Document`], a [`PreferenceStore`] and a [`ColorScheme`] and only talk to
//! those, which keeps them runnable outside a browser. The `web` module
//! provides the web-sys implementations; tests use an in-memory tree.

use crate::error::HostError;

/// The document object model, reduced to what the page behaviors use.
///
/// Element handles are opaque to callers and cheap to clone.
pub trait Document {
    type Element: Clone;

    /// The `<html>` element.
    fn root_element(&self) -> Option<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn parent_element(&self, element: &Self::Element) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) -> Result<(), HostError>;

    fn remove_attribute(&self, element: &Self::Element, name: &str) -> Result<(), HostError>;

    /// Replace the element's children with a single text node.
    fn set_text(&self, element: &Self::Element, text: &str);

    /// Animated scroll aligning `element` to the top of the viewport.
    /// Fire-and-forget; the animation cannot be cancelled from here.
    fn smooth_scroll_into_view(&self, element: &Self::Element);

    /// Last modification instant of the document in Unix milliseconds, if the
    /// host reports a parseable one.
    fn last_modified_millis(&self) -> Option<i64>;
}

/// Durable key-value storage for the theme preference.
pub trait PreferenceStore {
    /// `None` when the key is absent or storage cannot be read.
    fn load(&self, key: &str) -> Option<String>;

    fn store(&self, key: &str, value: &str) -> Result<(), HostError>;
}

/// Environment color-scheme media query.
pub trait ColorScheme {
    /// Whether `query` currently matches. `false` when queries are unsupported.
    fn matches(&self, query: &str) -> bool;
}
