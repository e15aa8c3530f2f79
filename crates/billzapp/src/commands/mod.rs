//! # Command Layer
//!
//! This module contains the **core business logic** of billz. Each command lives in its
//! own submodule and implements pure Rust functions that operate on the [`ItemStore`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: No stdout, stderr, or output formatting
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. This struct carries:
//! - `affected_items`: Items that were added, changed or removed
//! - `listed_items`: Items to display
//! - `total`: The running total after the command
//! - `messages`: Structured messages with levels (info, success, warning, error)
//! - `export_path`, `stats`, `config`, `invoice_text`: Command specific payloads
//!
//! Both item lists use [`DisplayItem`], which pairs an [`crate::model::Item`] with its
//! display index. The UI layer decides how to render all of this.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `MemBackend` to avoid filesystem dependencies.
//!
//! ## Command Modules
//!
//! - [`add`]: Validate and append a new item
//! - [`list`]: List items, optionally filtered by name
//! - [`view`]: Show selected items
//! - [`update`]: Change fields of an item in place
//! - [`remove`]: Remove selected items
//! - [`sort`]: Reorder the sequence by name, price or date
//! - [`total`]: The running total
//! - [`export`]: Write the invoice PDF
//! - [`stats`]: Summary statistics
//! - [`reload`]: Re-read the persisted document
//! - [`config`]: Show and change settings
//! - [`helpers`]: Shared utilities (selector resolution)

use crate::config::BillzConfig;
use crate::index::DisplayItem;
use crate::stats::Stats;
use crate::store::{ItemStore, StorageBackend};
use serde::Serialize;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod export;
pub mod helpers;
pub mod list;
pub mod reload;
pub mod remove;
pub mod sort;
pub mod stats;
pub mod total;
pub mod update;
pub mod view;

/// Filesystem locations used by billz.
#[derive(Debug, Clone)]
pub struct BillzPaths {
    pub data_dir: PathBuf,
}

impl BillzPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<DisplayItem>,
    pub listed_items: Vec<DisplayItem>,
    pub total: Option<f64>,
    pub messages: Vec<CmdMessage>,
    pub export_path: Option<PathBuf>,
    pub stats: Option<Stats>,
    pub config: Option<BillzConfig>,
    /// Plain-text rendering of the invoice, set by the export preview.
    pub invoice_text: Option<String>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_total(mut self, total: f64) -> Self {
        self.total = Some(total);
        self
    }
}

/// Adds a warning when the last mutation did not reach storage.
pub(crate) fn warn_if_unsaved<B: StorageBackend>(store: &ItemStore<B>, result: &mut CmdResult) {
    if store.last_save_failed() {
        result.add_message(CmdMessage::warning(format!(
            "Changes could not be saved to {}; they are kept for this session only.",
            store.backend().location().display()
        )));
    }
}
