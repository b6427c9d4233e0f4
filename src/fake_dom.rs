//! In-memory host implementations for tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::error::HostError;
use crate::host::{ColorScheme, Document, PreferenceStore};

#[derive(Debug, Default)]
struct FakeNode {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    parent: Option<usize>,
}

/// Element tree addressed by index. Index 0 is the `<html>` root.
#[derive(Debug)]
pub struct FakeDom {
    nodes: RefCell<Vec<FakeNode>>,
    scrolls: RefCell<Vec<usize>>,
    mutations: Cell<usize>,
    last_modified: Option<i64>,
    fail_writes: Cell<bool>,
}

impl Default for FakeDom {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDom {
    pub fn new() -> Self {
        let root = FakeNode { tag: "html".into(), ..FakeNode::default() };
        Self {
            nodes: RefCell::new(vec![root]),
            scrolls: RefCell::new(Vec::new()),
            mutations: Cell::new(0),
            last_modified: None,
            fail_writes: Cell::new(false),
        }
    }

    pub fn with_last_modified(mut self, millis: i64) -> Self {
        self.last_modified = Some(millis);
        self
    }

    pub const ROOT: usize = 0;

    /// Append an element under `parent`, optionally with an `id`.
    pub fn add(&self, parent: usize, tag: &str, id: Option<&str>) -> usize {
        let mut attributes = BTreeMap::new();
        if let Some(id) = id {
            attributes.insert("id".to_owned(), id.to_owned());
        }
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode { tag: tag.to_owned(), attributes, text: None, parent: Some(parent) });
        nodes.len() - 1
    }

    /// Append an `<a href=...>` under `parent`.
    pub fn add_link(&self, parent: usize, href: &str) -> usize {
        let link = self.add(parent, "a", None);
        self.nodes.borrow_mut()[link].attributes.insert("href".to_owned(), href.to_owned());
        link
    }

    pub fn tag(&self, element: usize) -> String {
        self.nodes.borrow()[element].tag.clone()
    }

    pub fn text(&self, element: usize) -> Option<String> {
        self.nodes.borrow()[element].text.clone()
    }

    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.nodes.borrow()[Self::ROOT].attributes.get(name).cloned()
    }

    /// Elements scrolled to, in call order.
    pub fn scrolls(&self) -> Vec<usize> {
        self.scrolls.borrow().clone()
    }

    pub fn mutations(&self) -> usize {
        self.mutations.get()
    }

    /// Make every attribute write fail from now on.
    pub fn fail_writes(&self) {
        self.fail_writes.set(true);
    }

    fn record_mutation(&self) {
        self.mutations.set(self.mutations.get() + 1);
    }
}

impl Document for FakeDom {
    type Element = usize;

    fn root_element(&self) -> Option<usize> {
        Some(Self::ROOT)
    }

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.attributes.get("id").is_some_and(|v| v == id))
    }

    fn parent_element(&self, element: &usize) -> Option<usize> {
        self.nodes.borrow().get(*element).and_then(|node| node.parent)
    }

    fn attribute(&self, element: &usize, name: &str) -> Option<String> {
        self.nodes.borrow().get(*element).and_then(|node| node.attributes.get(name).cloned())
    }

    fn set_attribute(&self, element: &usize, name: &str, value: &str) -> Result<(), HostError> {
        if self.fail_writes.get() {
            return Err(HostError::Dom(format!("set_attribute {name} rejected")));
        }
        let mut nodes = self.nodes.borrow_mut();
        let node = nodes.get_mut(*element).ok_or_else(|| HostError::Dom("detached element".into()))?;
        node.attributes.insert(name.to_owned(), value.to_owned());
        self.record_mutation();
        Ok(())
    }

    fn remove_attribute(&self, element: &usize, name: &str) -> Result<(), HostError> {
        if self.fail_writes.get() {
            return Err(HostError::Dom(format!("remove_attribute {name} rejected")));
        }
        let mut nodes = self.nodes.borrow_mut();
        let node = nodes.get_mut(*element).ok_or_else(|| HostError::Dom("detached element".into()))?;
        node.attributes.remove(name);
        self.record_mutation();
        Ok(())
    }

    fn set_text(&self, element: &usize, text: &str) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(*element) {
            node.text = Some(text.to_owned());
            self.record_mutation();
        }
    }

    fn smooth_scroll_into_view(&self, element: &usize) {
        self.scrolls.borrow_mut().push(*element);
    }

    fn last_modified_millis(&self) -> Option<i64> {
        self.last_modified
    }
}

/// `localStorage` stand-in. `unavailable()` models a blocked storage area.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn unavailable() -> Self {
        Self { entries: RefCell::default(), unavailable: true }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        if self.unavailable {
            return None;
        }
        self.get(key)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), HostError> {
        if self.unavailable {
            return Err(HostError::StorageUnavailable);
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Color-scheme query answering with a fixed light/dark preference.
#[derive(Debug, Clone, Copy)]
pub struct FixedScheme {
    pub prefers_light: bool,
}

impl ColorScheme for FixedScheme {
    fn matches(&self, query: &str) -> bool {
        self.prefers_light && query.contains("light")
    }
}
