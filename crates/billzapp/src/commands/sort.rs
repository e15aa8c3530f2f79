use crate::commands::{warn_if_unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ItemStore, SortKey, SortOrder, StorageBackend};

use super::helpers::indexed_items;

/// Reorders the whole sequence and lists it in its new order.
pub fn run<B: StorageBackend>(
    store: &mut ItemStore<B>,
    key: SortKey,
    order: SortOrder,
) -> Result<CmdResult> {
    store.sort(key, order);

    let direction = match order {
        SortOrder::Ascending => "ascending",
        SortOrder::Descending => "descending",
    };
    let mut result = CmdResult::default()
        .with_listed_items(indexed_items(store))
        .with_total(store.total_cost());
    result.add_message(CmdMessage::info(format!(
        "Sorted by {} ({})",
        key, direction
    )));
    warn_if_unsaved(store, &mut result);
    Ok(result)
}
