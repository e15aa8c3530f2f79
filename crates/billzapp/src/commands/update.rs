use crate::commands::{warn_if_unsaved, CmdMessage, CmdResult};
use crate::error::{BillzError, Result};
use crate::index::{DisplayItem, ItemSelector};
use crate::model::ItemPatch;
use crate::store::{ItemStore, StorageBackend};

use super::helpers::resolve_selectors;

/// Changes fields of exactly one item in place.
pub fn run<B: StorageBackend>(
    store: &mut ItemStore<B>,
    selector: &ItemSelector,
    patch: &ItemPatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        return Err(BillzError::Api(
            "Nothing to change: give a new name, price or date".to_string(),
        ));
    }

    let resolved = resolve_selectors(store, std::slice::from_ref(selector))?;
    let (index, id) = resolved
        .into_iter()
        .next()
        .ok_or_else(|| BillzError::Api(format!("Nothing matches {}", selector)))?;

    let item = store.update(&id, patch)?;

    let mut result = CmdResult::default().with_total(store.total_cost());
    result.add_message(CmdMessage::success(format!(
        "Item updated ({}): {}",
        index, item.name
    )));
    result.affected_items.push(DisplayItem { index, item });
    warn_if_unsaved(store, &mut result);
    Ok(result)
}
