use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ItemStore, StorageBackend};

use super::helpers::indexed_items;

/// Discards the in-memory sequence and re-reads the persisted one.
pub fn run<B: StorageBackend>(store: &mut ItemStore<B>) -> Result<CmdResult> {
    let count = store.load();
    let mut result = CmdResult::default()
        .with_listed_items(indexed_items(store))
        .with_total(store.total_cost());
    let item_word = if count == 1 { "item" } else { "items" };
    result.add_message(CmdMessage::info(format!(
        "Loaded {} {} from {}",
        count,
        item_word,
        store.backend().location().display()
    )));
    Ok(result)
}
