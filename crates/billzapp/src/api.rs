//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all billz operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., turning `"1-3"` into item selectors)
//! - **Supplies ambient values** such as the settings and today's date for exports
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout or stderr
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over StorageBackend
//!
//! `BillzApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `BillzApi<FsBackend>`
//! - Testing: `BillzApi<MemBackend>`
//!
//! API tests verify dispatch and argument handling only; command logic is
//! tested in the command modules.

use crate::commands;
use crate::config::BillzConfig;
use crate::error::{BillzError, Result};
use crate::index::{parse_selectors, ItemSelector};
use crate::model::ItemPatch;
use crate::store::{ItemStore, SortKey, SortOrder, StorageBackend};
use chrono::Local;
use std::path::{Path, PathBuf};

/// The main API facade for billz operations.
pub struct BillzApi<B: StorageBackend> {
    store: ItemStore<B>,
    paths: commands::BillzPaths,
}

impl<B: StorageBackend> BillzApi<B> {
    /// Opens the store, loading whatever the backend holds.
    pub fn new(backend: B, paths: commands::BillzPaths) -> Self {
        Self {
            store: ItemStore::open(backend),
            paths,
        }
    }

    pub fn add_item(&mut self, name: &str, price: &str, date: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, price, date)
    }

    pub fn list_items(&self, filter: ItemFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &filter)
    }

    pub fn view_items<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = selectors_from(selectors)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn update_item(&mut self, selector: &str, patch: ItemPatch) -> Result<commands::CmdResult> {
        let selectors = selectors_from(&[selector])?;
        match selectors.as_slice() {
            [single] => commands::update::run(&mut self.store, single, &patch),
            _ => Err(BillzError::Api(
                "Select exactly one item to edit".to_string(),
            )),
        }
    }

    pub fn remove_items<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = selectors_from(selectors)?;
        commands::remove::run(&mut self.store, &selectors)
    }

    pub fn sort_items(&mut self, key: SortKey, order: SortOrder) -> Result<commands::CmdResult> {
        commands::sort::run(&mut self.store, key, order)
    }

    pub fn total(&self) -> Result<commands::CmdResult> {
        commands::total::run(&self.store)
    }

    /// Writes the invoice dated today.
    pub fn export_invoice(&self, destination: Option<&Path>) -> Result<commands::CmdResult> {
        let config = BillzConfig::load(&self.paths.data_dir)?;
        commands::export::run(&self.store, &config, destination, Local::now().date_naive())
    }

    pub fn preview_invoice(&self) -> Result<commands::CmdResult> {
        let config = BillzConfig::load(&self.paths.data_dir)?;
        commands::export::preview(&self.store, &config, Local::now().date_naive())
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn reload(&mut self) -> Result<commands::CmdResult> {
        commands::reload::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Where the items are persisted.
    pub fn data_file(&self) -> PathBuf {
        self.store.backend().location()
    }

    pub fn paths(&self) -> &commands::BillzPaths {
        &self.paths
    }
}

fn selectors_from<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ItemSelector>> {
    if inputs.is_empty() {
        return Err(BillzError::Api("No items selected".to_string()));
    }
    parse_selectors(inputs).map_err(BillzError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::ItemFilter;
pub use commands::{BillzPaths, CmdMessage, CmdResult, MessageLevel};
