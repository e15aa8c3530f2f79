use crate::error::{BillzError, Result};
use crate::index::{index_items, DisplayItem, ItemSelector};
use crate::store::{ItemStore, StorageBackend};
use uuid::Uuid;

pub fn indexed_items<B: StorageBackend>(store: &ItemStore<B>) -> Vec<DisplayItem> {
    index_items(store.items())
}

/// Resolves selectors to `(display index, id)` pairs against the current order.
///
/// Resolution happens in full before the caller mutates anything, so removing
/// several items by index never hits a shifted position. A name selector must
/// match exactly one item, either by its full name or, failing that, by a part
/// of it.
pub fn resolve_selectors<B: StorageBackend>(
    store: &ItemStore<B>,
    selectors: &[ItemSelector],
) -> Result<Vec<(usize, Uuid)>> {
    let indexed = indexed_items(store);
    let mut resolved: Vec<(usize, Uuid)> = Vec::with_capacity(selectors.len());

    for selector in selectors {
        let found = match selector {
            ItemSelector::Index(n) => indexed
                .iter()
                .find(|dp| dp.index == *n)
                .map(|dp| (dp.index, dp.item.id))
                .ok_or_else(|| BillzError::Api(format!("Index {} not found", n)))?,
            ItemSelector::Id(id) => indexed
                .iter()
                .find(|dp| dp.item.id == *id)
                .map(|dp| (dp.index, dp.item.id))
                .ok_or(BillzError::ItemNotFound(*id))?,
            ItemSelector::Name(term) => {
                // An exact name beats partial matches, so "Coffee" still resolves
                // next to "Coffee filter".
                let exact: Vec<&DisplayItem> = indexed
                    .iter()
                    .filter(|dp| dp.item.has_name(term))
                    .collect();
                let matches: Vec<&DisplayItem> = if exact.is_empty() {
                    indexed
                        .iter()
                        .filter(|dp| dp.item.matches_name(term))
                        .collect()
                } else {
                    exact
                };
                match matches.as_slice() {
                    [] => {
                        return Err(BillzError::Api(format!(
                            "No item matches \"{}\"",
                            term
                        )))
                    }
                    [single] => (single.index, single.item.id),
                    many => {
                        return Err(BillzError::Api(format!(
                            "\"{}\" matches {} items, use an index instead",
                            term,
                            many.len()
                        )))
                    }
                }
            }
        };
        if !resolved.iter().any(|(_, id)| *id == found.1) {
            resolved.push(found);
        }
    }

    Ok(resolved)
}

pub fn items_by_selectors<B: StorageBackend>(
    store: &ItemStore<B>,
    selectors: &[ItemSelector],
) -> Result<Vec<DisplayItem>> {
    let resolved = resolve_selectors(store, selectors)?;
    let mut items = Vec::with_capacity(resolved.len());
    for (index, id) in resolved {
        let item = store.get(&id).ok_or(BillzError::ItemNotFound(id))?.clone();
        items.push(DisplayItem { index, item });
    }
    Ok(items)
}
