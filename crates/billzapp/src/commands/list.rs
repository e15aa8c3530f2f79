use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{ItemStore, StorageBackend};

use super::helpers::indexed_items;

#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Case-insensitive substring of the item name.
    pub search: Option<String>,
}

/// Lists items in sequence order. Filtered items keep their canonical index.
/// The total always covers the whole sequence.
pub fn run<B: StorageBackend>(store: &ItemStore<B>, filter: &ItemFilter) -> Result<CmdResult> {
    let items = indexed_items(store);
    let listed = match filter.search.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => items
            .into_iter()
            .filter(|dp| dp.item.matches_name(term))
            .collect(),
        _ => items,
    };

    Ok(CmdResult::default()
        .with_listed_items(listed)
        .with_total(store.total_cost()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn store() -> ItemStore<MemBackend> {
        let mut store = ItemStore::with_backend(MemBackend::new());
        store.add("Coffee", "4", "2024-01-01").unwrap();
        store.add("Tea", "3", "2024-01-02").unwrap();
        store
    }

    #[test]
    fn lists_everything_in_order() {
        let result = run(&store(), &ItemFilter::default()).unwrap();
        assert_eq!(result.listed_items.len(), 2);
        assert_eq!(result.listed_items[0].item.name, "Coffee");
        assert_eq!(result.listed_items[1].index, 2);
        assert_eq!(result.total, Some(7.0));
    }

    #[test]
    fn filter_keeps_canonical_indexes() {
        let filter = ItemFilter {
            search: Some("TEA".into()),
        };
        let result = run(&store(), &filter).unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].index, 2);
        assert_eq!(result.total, Some(7.0));
    }

    #[test]
    fn blank_search_lists_everything() {
        let filter = ItemFilter {
            search: Some("  ".into()),
        };
        let result = run(&store(), &filter).unwrap();
        assert_eq!(result.listed_items.len(), 2);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = ItemStore::with_backend(MemBackend::new());
        let result = run(&store, &ItemFilter::default()).unwrap();
        assert!(result.listed_items.is_empty());
        assert_eq!(result.total, Some(0.0));
    }
}
