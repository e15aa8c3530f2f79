//! # Data Directory
//!
//! billz keeps everything in one directory: `items.json` holds the item sequence and
//! `config.json` the settings.
//!
//! The directory is resolved during [`initialize`]:
//! 1. If `data_override` is provided (the CLI's `--data DIR`) → use it directly.
//! 2. Otherwise → the OS-appropriate data directory via the `directories` crate
//!    (e.g. `~/.local/share/billz` on Linux).
//!
//! The directory is created on the first save, not here, so read-only commands on a
//! fresh machine leave no trace.

use crate::api::{BillzApi, BillzPaths};
use crate::config::BillzConfig;
use crate::error::{BillzError, Result};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct BillzContext {
    pub api: BillzApi<FsBackend>,
    pub config: BillzConfig,
}

/// The platform data directory, if the platform has one.
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "billz", "billz").map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    default_data_dir()
        .ok_or_else(|| BillzError::Api("Could not determine a data directory".to_string()))
}

/// Resolves the data directory, loads settings and opens the item store.
pub fn initialize(data_override: Option<PathBuf>) -> Result<BillzContext> {
    let data_dir = resolve_data_dir(data_override)?;
    debug!(data_dir = %data_dir.display(), "initializing");

    let config = BillzConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "could not read settings, using defaults");
        BillzConfig::default()
    });

    let backend = FsBackend::new(data_dir.clone());
    let api = BillzApi::new(backend, BillzPaths::new(data_dir));

    Ok(BillzContext { api, config })
}
