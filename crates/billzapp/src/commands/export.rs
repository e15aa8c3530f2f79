use crate::commands::{CmdMessage, CmdResult};
use crate::config::BillzConfig;
use crate::error::Result;
use crate::invoice::{render_pdf, write_pdf, InvoiceLayout};
use crate::store::{ItemStore, StorageBackend};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const INVOICE_TITLE: &str = "Rechnung";

/// Renders the invoice for the current sequence and writes it to `destination`.
///
/// Without a destination the configured file name is used in the working
/// directory; a directory destination gets that file name appended.
pub fn run<B: StorageBackend>(
    store: &ItemStore<B>,
    config: &BillzConfig,
    destination: Option<&Path>,
    export_date: NaiveDate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_total(store.total_cost());

    if store.is_empty() {
        result.add_message(CmdMessage::info("No items to export."));
        return Ok(result);
    }

    let layout = InvoiceLayout::build(store.items(), store.total_cost(), config, export_date);
    let path = resolve_destination(destination, &config.export_file);

    let written = render_pdf(&layout, INVOICE_TITLE).and_then(|bytes| write_pdf(&bytes, &path));
    if let Err(e) = written {
        warn!(path = %path.display(), error = %e, "invoice export failed");
        return Err(e);
    }

    info!(path = %path.display(), items = store.len(), "invoice exported");
    result.add_message(CmdMessage::success(format!(
        "Invoice saved: {}",
        path.display()
    )));
    result.export_path = Some(path);
    Ok(result)
}

/// Builds the invoice layout without writing anything.
pub fn preview<B: StorageBackend>(
    store: &ItemStore<B>,
    config: &BillzConfig,
    export_date: NaiveDate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_total(store.total_cost());
    if store.is_empty() {
        result.add_message(CmdMessage::info("No items to export."));
        return Ok(result);
    }
    let layout = InvoiceLayout::build(store.items(), store.total_cost(), config, export_date);
    result.invoice_text = Some(layout.to_text());
    Ok(result)
}

pub fn resolve_destination(destination: Option<&Path>, file_name: &str) -> PathBuf {
    match destination {
        None => PathBuf::from(file_name),
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
    }
}
