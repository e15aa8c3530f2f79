use super::backend::{decode_items, StorageBackend};
use crate::error::{BillzError, Result};
use crate::model::Item;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Keeps the persisted document as a JSON string, so everything that goes
/// through it is serialized and parsed exactly like on disk.
///
/// Uses `RefCell` for interior mutability since billz is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<String>>,
    set_aside: RefCell<Option<String>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `document` as the persisted content, valid or not.
    pub fn with_document(document: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.document.borrow_mut() = Some(document.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// The persisted document, as last written.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// The document moved away by [`StorageBackend::set_aside`].
    pub fn set_aside_document(&self) -> Option<String> {
        self.set_aside.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load_items(&self) -> Result<Option<Vec<Item>>> {
        match self.document.borrow().as_deref() {
            None => Ok(None),
            Some(doc) => Ok(Some(decode_items(doc)?)),
        }
    }

    fn save_items(&self, items: &[Item]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(BillzError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        let doc = serde_json::to_string_pretty(items).map_err(BillzError::Serialization)?;
        *self.document.borrow_mut() = Some(doc);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn set_aside(&self) -> Result<Option<PathBuf>> {
        let doc = self.document.borrow_mut().take();
        match doc {
            Some(doc) => {
                *self.set_aside.borrow_mut() = Some(doc);
                Ok(Some(PathBuf::from("memory://items.json.corrupt")))
            }
            None => Ok(None),
        }
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://items.json")
    }
}
