use crate::commands::{warn_if_unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayItem, ItemSelector};
use crate::store::{ItemStore, StorageBackend};

use super::helpers::resolve_selectors;

/// Removes every selected item. All selectors are resolved before the first
/// removal, so indexes refer to the sequence as it was listed.
pub fn run<B: StorageBackend>(
    store: &mut ItemStore<B>,
    selectors: &[ItemSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for (index, id) in resolved {
        if let Some(item) = store.remove(&id) {
            result.add_message(CmdMessage::success(format!(
                "Item removed ({}): {}",
                index, item.name
            )));
            result.affected_items.push(DisplayItem { index, item });
        }
    }

    warn_if_unsaved(store, &mut result);
    Ok(result.with_total(store.total_cost()))
}
