//! # docs-enhancer
//!
//! WebAssembly page enhancements for the bots documentation site: a persisted
//! light/dark theme toggle, smooth scrolling for same-page anchors, and a
//! "last updated" stamp derived from the document's modification time.
//!
//! Everything that touches the browser goes through the seams in [`host`], so
//! the behavior modules run natively against fakes. The `browser` feature adds
//! the [`web`] bindings and the `#[wasm_bindgen(start)]` entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Element ids, storage key and other fixed identifiers |
//! | [`error`] | Host call and install errors |
//! | [`host`] | `Document` / `PreferenceStore` / `ColorScheme` seams |
//! | [`theme`] | Theme preference load, apply and toggle |
//! | [`scroll`] | Same-page anchor click interception |
//! | [`timestamp`] | Europe/Berlin formatting of the last-modified instant |
//! | [`enhancer`] | [`enhancer::PageEnhancer`] tying the behaviors to injected handles |

pub mod config;
pub mod enhancer;
pub mod error;
pub mod host;
pub mod scroll;
pub mod theme;
pub mod timestamp;

#[cfg(feature = "browser")]
pub mod web;

#[cfg(test)]
pub(crate) mod fake_dom;

pub use config::PageConfig;
pub use enhancer::PageEnhancer;
pub use error::{HostError, StartError};
pub use scroll::ClickOutcome;
pub use theme::ThemePreference;
