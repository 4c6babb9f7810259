//! Address-bar state: the `date` query parameter and the history stack.
//!
//! The engine never touches the browser directly. It reads and writes the
//! query string through [`NavigationHistory`]; the frontend implements it on
//! top of `window.history`, and [`MemoryHistory`] backs tests and non-browser
//! hosts.

use std::cell::RefCell;
use url::form_urlencoded;

/// The navigation history of the hosting page
pub trait NavigationHistory {
    /// Current query string, with or without the leading `?`
    fn search(&self) -> String;

    /// Navigate to the same page with a new query string, adding a history entry
    fn push_search(&self, search: &str);
}

/// Value of `param` in a query string, if present and non-empty
pub fn read_query_param(search: &str, param: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Query string with `param` set to `value`, keeping every other parameter
pub fn write_query_param(search: &str, param: &str, value: &str) -> String {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, existing) in form_urlencoded::parse(query.as_bytes()) {
        if key != param {
            serializer.append_pair(&key, &existing);
        }
    }
    serializer.append_pair(param, value);
    format!("?{}", serializer.finish())
}

/// In-memory history stack with browser-like back/forward semantics
#[derive(Debug, Default)]
pub struct MemoryHistory {
    state: RefCell<HistoryStack>,
}

#[derive(Debug)]
struct HistoryStack {
    entries: Vec<String>,
    index: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self {
            entries: vec![String::new()],
            index: 0,
        }
    }
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History whose current entry has the given query string
    pub fn with_search(search: &str) -> Self {
        Self {
            state: RefCell::new(HistoryStack {
                entries: vec![search.to_string()],
                index: 0,
            }),
        }
    }

    /// Step back one entry; false when already at the oldest entry
    pub fn back(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.index == 0 {
            return false;
        }
        state.index -= 1;
        true
    }

    /// Step forward one entry; false when already at the newest entry
    pub fn forward(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.index + 1 >= state.entries.len() {
            return false;
        }
        state.index += 1;
        true
    }

    /// Number of entries, never less than one
    pub fn len(&self) -> usize {
        self.state.borrow().entries.len()
    }
}

impl NavigationHistory for MemoryHistory {
    fn search(&self) -> String {
        let state = self.state.borrow();
        state.entries[state.index].clone()
    }

    fn push_search(&self, search: &str) {
        let mut state = self.state.borrow_mut();
        let next = state.index + 1;
        state.entries.truncate(next);
        state.entries.push(search.to_string());
        state.index = next;
    }
}
