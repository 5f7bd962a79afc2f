//! Page location capabilities.
//!
//! The browser adapter lives in the web crate; [`MemoryLocation`] backs tests
//! and non-browser hosts.

use std::cell::{Cell, RefCell};

use crate::error::CodecError;

/// Read access to the current page location.
pub trait LocationReader {
    /// Current query string in `location.search` form (`""` or `?...`).
    fn query_string(&self) -> Result<String, CodecError>;
}

/// Write access to the current page location.
pub trait LocationWriter {
    /// Replace the current history entry with `url` without navigating.
    fn replace_location(&self, url: &str) -> Result<(), CodecError>;
}

/// In-memory location holding a single path-and-query URL.
#[derive(Debug, Default)]
pub struct MemoryLocation {
    url: RefCell<String>,
    replacements: Cell<usize>,
}

impl MemoryLocation {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: RefCell::new(url.into()),
            replacements: Cell::new(0),
        }
    }

    /// Current URL.
    pub fn url(&self) -> String {
        self.url.borrow().clone()
    }

    /// Number of times the location was replaced.
    pub fn replacements(&self) -> usize {
        self.replacements.get()
    }
}

impl LocationReader for MemoryLocation {
    fn query_string(&self) -> Result<String, CodecError> {
        let url = self.url.borrow();
        let without_fragment = url.split('#').next().unwrap_or_default();
        Ok(without_fragment
            .find('?')
            .map(|i| without_fragment[i..].to_string())
            .unwrap_or_default())
    }
}

impl LocationWriter for MemoryLocation {
    fn replace_location(&self, url: &str) -> Result<(), CodecError> {
        *self.url.borrow_mut() = url.to_string();
        self.replacements.set(self.replacements.get() + 1);
        Ok(())
    }
}
