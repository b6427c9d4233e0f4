//! Browser bindings: web-sys implementations of the host seams and the event
//! wiring that drives [`PageEnhancer`].
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches `window`, `document` and
//! `localStorage`. It is compiled with the `browser` feature and runs once
//! when the WASM module is instantiated by the page.
//!
//! TRADE-OFFS
//! ==========
//! Listener closures are leaked with `Closure::forget`; they must live as long
//! as the page and there is no teardown path for a static document.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, EventTarget, MediaQueryList, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Storage, Window,
};

use crate::config::PageConfig;
use crate::enhancer::PageEnhancer;
use crate::error::{HostError, StartError};
use crate::host::{ColorScheme, Document, PreferenceStore};
use crate::scroll::ClickOutcome;

type WebEnhancer = PageEnhancer<WebDocument, LocalStorage, MediaQuery>;

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `web_sys::Document` behind the [`Document`] seam.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl Document for WebDocument {
    type Element = Element;

    fn root_element(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn parent_element(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<(), HostError> {
        element.set_attribute(name, value).map_err(|e| HostError::Dom(js_message(&e)))
    }

    fn remove_attribute(&self, element: &Element, name: &str) -> Result<(), HostError> {
        element.remove_attribute(name).map_err(|e| HostError::Dom(js_message(&e)))
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn smooth_scroll_into_view(&self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn last_modified_millis(&self) -> Option<i64> {
        let parsed = js_sys::Date::parse(&self.document.last_modified());
        parsed.is_finite().then(|| parsed as i64)
    }
}

/// `window.localStorage`, or nothing when the browser denies access.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {}", js_message(&e));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("localStorage read of {key} failed: {}", js_message(&e));
                None
            }
        }
    }

    fn store(&self, key: &str, value: &str) -> Result<(), HostError> {
        let storage = self.storage.as_ref().ok_or(HostError::StorageUnavailable)?;
        storage.set_item(key, value).map_err(|e| HostError::Storage(js_message(&e)))
    }
}

/// `window.matchMedia`.
pub struct MediaQuery {
    window: Window,
}

impl MediaQuery {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ColorScheme for MediaQuery {
    fn matches(&self, query: &str) -> bool {
        match self.window.match_media(query) {
            Ok(list) => list.as_ref().is_some_and(MediaQueryList::matches),
            Err(_) => false,
        }
    }
}

/// Resolve a click target to the element the user actually hit.
fn event_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    if let Some(element) = target.dyn_ref::<Element>() {
        return Some(element.clone());
    }
    target.dyn_ref::<Node>().and_then(Node::parent_element)
}

fn listen(target: &EventTarget, event: &'static str, handler: Closure<dyn FnMut(Event)>) -> Result<(), StartError> {
    target
        .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
        .map_err(|e| StartError::Listener { event, message: js_message(&e) })?;
    handler.forget();
    Ok(())
}

/// Build the enhancer for the current page and attach its listeners.
///
/// The timestamp is stamped immediately and again on `DOMContentLoaded`, so
/// it lands whether or not the document finished parsing before this ran.
pub fn install(config: PageConfig) -> Result<(), StartError> {
    let window = web_sys::window().ok_or(StartError::NoWindow)?;
    let document = window.document().ok_or(StartError::NoDocument)?;

    let enhancer: Rc<WebEnhancer> = Rc::new(PageEnhancer::new(
        config,
        WebDocument::new(document.clone()),
        LocalStorage::from_window(&window),
        MediaQuery::new(window),
    ));
    enhancer.init();

    if let Some(control) = enhancer.toggle_control() {
        let handle = Rc::clone(&enhancer);
        listen(
            &control,
            "click",
            Closure::new(move |_event: Event| {
                handle.toggle();
            }),
        )?;
    }

    let handle = Rc::clone(&enhancer);
    listen(
        &document,
        "click",
        Closure::new(move |event: Event| {
            let Some(target) = event_element(&event) else {
                return;
            };
            if handle.handle_click(&target) == ClickOutcome::Scrolled {
                event.prevent_default();
            }
        }),
    )?;

    let handle = Rc::clone(&enhancer);
    listen(
        &document,
        "DOMContentLoaded",
        Closure::new(move |_event: Event| {
            handle.update_last_modified();
        }),
    )?;

    log::info!("docs-enhancer installed");
    Ok(())
}

/// Page overrides from the root element, or the defaults when they are
/// missing or malformed.
fn page_config() -> PageConfig {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return PageConfig::default();
    };
    PageConfig::from_document(&WebDocument::new(document)).unwrap_or_else(|e| {
        log::warn!("docs-enhancer: ignoring page config: {e}");
        PageConfig::default()
    })
}

/// WASM entry point: set up console logging and enhance the page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger already set: {e}")));
    }
    if let Err(e) = install(page_config()) {
        log::error!("docs-enhancer: {e}");
    }
}
