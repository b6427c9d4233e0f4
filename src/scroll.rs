//! Smooth scrolling for same-page anchors.
//!
//! A document-level click is inspected for an enclosing link whose `href`
//! starts with `#`. When the fragment names an element on the page, the click
//! becomes a smooth scroll to that element and the caller must cancel the
//! default navigation. Anything else is left to the browser.

use crate::host::Document;

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

const HREF: &str = "href";

/// What the caller must do with the click event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A scroll was issued; suppress default navigation.
    Scrolled,
    /// Not ours; let the browser handle it.
    Ignored,
}

/// Walk from `start` toward the root looking for a same-page link.
///
/// `start` itself is checked first, then at most `max_depth` ancestors.
/// Returns the link element and its raw `href`.
pub fn find_anchor<D>(doc: &D, start: &D::Element, max_depth: usize) -> Option<(D::Element, String)>
where
    D: Document + ?Sized,
{
    let mut current = Some(start.clone());
    for _ in 0..=max_depth {
        let element = current?;
        if let Some(href) = doc.attribute(&element, HREF).filter(|h| h.starts_with('#')) {
            return Some((element, href));
        }
        current = doc.parent_element(&element);
    }
    None
}

/// Handle a click whose target is `target`.
pub fn intercept_click<D>(doc: &D, target: &D::Element, max_depth: usize) -> ClickOutcome
where
    D: Document + ?Sized,
{
    let Some((_, href)) = find_anchor(doc, target, max_depth) else {
        return ClickOutcome::Ignored;
    };
    let fragment = &href[1..];
    if fragment.is_empty() {
        return ClickOutcome::Ignored;
    }
    let Some(destination) = doc.element_by_id(fragment) else {
        return ClickOutcome::Ignored;
    };
    doc.smooth_scroll_into_view(&destination);
    log::debug!("scroll: #{fragment}");
    ClickOutcome::Scrolled
}
