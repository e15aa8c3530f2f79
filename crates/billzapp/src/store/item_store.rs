use super::backend::StorageBackend;
use crate::error::{BillzError, Result};
use crate::model::{Item, ItemPatch};
use std::cmp::{Ordering, Reverse};
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
    Date,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Price => write!(f, "price"),
            SortKey::Date => write!(f, "date"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortOrder::Ascending
    }
}

/// The authoritative, ordered sequence of items plus its persisted copy.
///
/// Every mutation is followed by a full save through the backend. Save failures
/// are logged and otherwise ignored: the in-memory sequence stays the source of
/// truth for the session. [`ItemStore::last_save_failed`] tells callers whether
/// the most recent mutation made it to storage.
pub struct ItemStore<B: StorageBackend> {
    items: Vec<Item>,
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    last_save_failed: bool,
}

impl<B: StorageBackend> ItemStore<B> {
    /// Creates an empty store without reading the backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            items: Vec::new(),
            backend,
            last_save_failed: false,
        }
    }

    /// Creates a store and loads the persisted items.
    pub fn open(backend: B) -> Self {
        let mut store = Self::with_backend(backend);
        store.load();
        store
    }

    /// Replaces the in-memory sequence with the persisted one and returns the
    /// number of items loaded.
    ///
    /// Never fails: an unreadable or malformed document yields an empty sequence.
    /// A malformed document is set aside first so later saves cannot clobber it.
    /// Single unreadable records are skipped by the backend and the rest loads.
    pub fn load(&mut self) -> usize {
        self.items = match self.backend.load_items() {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(BillzError::Serialization(e)) => {
                warn!(
                    path = %self.backend.location().display(),
                    error = %e,
                    "item document is malformed, starting empty"
                );
                match self.backend.set_aside() {
                    Ok(Some(moved)) => {
                        warn!(path = %moved.display(), "kept malformed item document")
                    }
                    Ok(None) => {}
                    Err(e) => warn!(error = %e, "could not set malformed item document aside"),
                }
                Vec::new()
            }
            Err(e) => {
                warn!(
                    path = %self.backend.location().display(),
                    error = %e,
                    "could not read items, starting empty"
                );
                Vec::new()
            }
        };
        debug!(count = self.items.len(), "items loaded");
        self.items.len()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// 0-based position of the item in the sequence.
    pub fn position(&self, id: &Uuid) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn last_save_failed(&self) -> bool {
        self.last_save_failed
    }

    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Validates the fields, appends a new item and persists.
    pub fn add(&mut self, name: &str, price: &str, date: &str) -> Result<Item> {
        let item = Item::from_input(name, price, date)?;
        self.items.push(item.clone());
        self.persist();
        Ok(item)
    }

    /// Removes the item with `id`. Nothing is written when it is absent.
    pub fn remove(&mut self, id: &Uuid) -> Option<Item> {
        let pos = self.position(id)?;
        let removed = self.items.remove(pos);
        self.persist();
        Some(removed)
    }

    /// Changes fields of an existing item in place, keeping its id and position.
    pub fn update(&mut self, id: &Uuid, patch: &ItemPatch) -> Result<Item> {
        let pos = self.position(id).ok_or(BillzError::ItemNotFound(*id))?;
        let updated = patch.apply_to(&self.items[pos])?;
        self.items[pos] = updated.clone();
        self.persist();
        Ok(updated)
    }

    pub fn sort(&mut self, key: SortKey, order: SortOrder) {
        match key {
            SortKey::Name => self.sort_by_name(order.is_ascending()),
            SortKey::Price => self.sort_by_price(order.is_ascending()),
            SortKey::Date => self.sort_by_date(order.is_ascending()),
        }
    }

    /// Case-insensitive, stable.
    pub fn sort_by_name(&mut self, ascending: bool) {
        if ascending {
            self.items.sort_by_cached_key(|item| item.name.to_lowercase());
        } else {
            self.items
                .sort_by_cached_key(|item| Reverse(item.name.to_lowercase()));
        }
        self.persist();
    }

    /// Numeric, stable in both directions.
    pub fn sort_by_price(&mut self, ascending: bool) {
        self.sort_with(ascending, |a, b| a.price.total_cmp(&b.price));
    }

    /// Chronological, stable in both directions.
    pub fn sort_by_date(&mut self, ascending: bool) {
        self.sort_with(ascending, |a, b| a.date.cmp(&b.date));
    }

    fn sort_with<F>(&mut self, ascending: bool, cmp: F)
    where
        F: Fn(&Item, &Item) -> Ordering,
    {
        if ascending {
            self.items.sort_by(|a, b| cmp(a, b));
        } else {
            self.items.sort_by(|a, b| cmp(b, a));
        }
        self.persist();
    }

    fn persist(&mut self) {
        match self.backend.save_items(&self.items) {
            Ok(()) => {
                self.last_save_failed = false;
                debug!(count = self.items.len(), "items saved");
            }
            Err(e) => {
                self.last_save_failed = true;
                warn!(
                    path = %self.backend.location().display(),
                    error = %e,
                    "could not save items, changes are kept in memory only"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::store::mem_backend::MemBackend;
    use chrono::NaiveDate;

    fn store_with(entries: &[(&str, &str, &str)]) -> ItemStore<MemBackend> {
        let mut store = ItemStore::with_backend(MemBackend::new());
        for (name, price, date) in entries {
            store.add(name, price, date).unwrap();
        }
        store
    }

    fn names<B: StorageBackend>(store: &ItemStore<B>) -> Vec<String> {
        store.items().iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn add_appends_and_persists() {
        let mut store = store_with(&[("First", "1", "2024-01-01")]);
        let before = store.total_cost();

        let item = store.add("Widget", "12.50", "01-01-2024").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[1], item);
        assert_eq!(item.price, 12.50);
        assert_eq!(store.total_cost() - before, 12.50);
        assert_eq!(store.backend().save_count(), 2);
    }

    #[test]
    fn invalid_add_never_mutates_or_persists() {
        let mut store = store_with(&[("First", "1", "2024-01-01")]);
        let snapshot = store.items().to_vec();

        let cases = [
            ("", "1", "2024-01-01", ValidationError::EmptyName),
            ("A", "", "2024-01-01", ValidationError::EmptyPrice),
            ("A", "abc", "2024-01-01", ValidationError::InvalidPrice("abc".into())),
            ("A", "-3", "2024-01-01", ValidationError::NegativePrice),
            ("A", "1", "", ValidationError::EmptyDate),
        ];
        for (name, price, date, expected) in cases {
            match store.add(name, price, date) {
                Err(BillzError::Validation(e)) => assert_eq!(e, expected),
                other => panic!("expected validation error, got {:?}", other),
            }
        }

        assert_eq!(store.items(), snapshot.as_slice());
        assert_eq!(store.backend().save_count(), 1);
    }

    #[test]
    fn remove_absent_id_is_a_no_op() {
        let mut store = store_with(&[("A", "1", "2024-01-01"), ("B", "2", "2024-01-02")]);
        let before_doc = store.backend().document();

        assert!(store.remove(&Uuid::new_v4()).is_none());

        assert_eq!(names(&store), vec!["A", "B"]);
        assert_eq!(store.backend().document(), before_doc);
        assert_eq!(store.backend().save_count(), 2);
    }

    #[test]
    fn remove_present_id_removes_only_that_item() {
        let mut store = store_with(&[
            ("A", "1", "2024-01-01"),
            ("B", "2", "2024-01-02"),
            ("C", "3", "2024-01-03"),
        ]);
        let id = store.items()[1].id;

        let removed = store.remove(&id).unwrap();

        assert_eq!(removed.name, "B");
        assert_eq!(names(&store), vec!["A", "C"]);
        assert_eq!(store.backend().save_count(), 4);
    }

    #[test]
    fn update_changes_fields_in_place() {
        let mut store = store_with(&[("A", "1", "2024-01-01"), ("B", "2", "2024-01-02")]);
        let id = store.items()[0].id;

        let patch = ItemPatch {
            name: Some("Renamed".into()),
            date: Some("03.02.2024".into()),
            ..Default::default()
        };
        let updated = store.update(&id, &patch).unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(store.items()[0].name, "Renamed");
        assert_eq!(store.items()[0].price, 1.0);
        assert_eq!(
            store.items()[0].date,
            NaiveDate::from_ymd_opt(2024, 2, 3).unwrap()
        );
        assert_eq!(names(&store), vec!["Renamed", "B"]);
    }

    #[test]
    fn rejected_update_leaves_item_alone() {
        let mut store = store_with(&[("A", "1", "2024-01-01")]);
        let id = store.items()[0].id;
        let before = store.items().to_vec();

        let patch = ItemPatch {
            name: Some("Fine".into()),
            price: Some("x".into()),
            ..Default::default()
        };
        assert!(store.update(&id, &patch).is_err());
        assert_eq!(store.items(), before.as_slice());
        assert_eq!(store.backend().save_count(), 1);
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut store = store_with(&[("A", "1", "2024-01-01")]);
        let missing = Uuid::new_v4();
        let result = store.update(&missing, &ItemPatch::default());
        assert!(matches!(result, Err(BillzError::ItemNotFound(id)) if id == missing));
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let mut store = store_with(&[
            ("Banana", "1", "2024-01-01"),
            ("apple", "1", "2024-01-01"),
            ("cherry", "1", "2024-01-01"),
        ]);

        store.sort_by_name(true);
        assert_eq!(names(&store), vec!["apple", "Banana", "cherry"]);

        store.sort_by_name(false);
        assert_eq!(names(&store), vec!["cherry", "Banana", "apple"]);
    }

    #[test]
    fn sort_by_price_descending_reverses_distinct_prices() {
        let mut store = store_with(&[
            ("B", "2", "2024-01-01"),
            ("C", "3", "2024-01-01"),
            ("A", "1", "2024-01-01"),
        ]);

        store.sort_by_price(true);
        let ascending = names(&store);
        assert_eq!(ascending, vec!["A", "B", "C"]);

        store.sort_by_price(false);
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(names(&store), reversed);
    }

    #[test]
    fn sort_by_price_is_stable_for_equal_prices() {
        let mut store = store_with(&[
            ("first", "5", "2024-01-01"),
            ("cheap", "1", "2024-01-01"),
            ("second", "5", "2024-01-01"),
        ]);

        store.sort_by_price(true);
        assert_eq!(names(&store), vec!["cheap", "first", "second"]);

        store.sort_by_price(false);
        assert_eq!(names(&store), vec!["first", "second", "cheap"]);
    }

    #[test]
    fn sort_by_date_is_chronological_across_input_formats() {
        let mut store = store_with(&[
            ("march", "1", "Mar 1, 2024"),
            ("january", "1", "15.01.2024"),
            ("february", "1", "2024-02-10"),
        ]);

        store.sort_by_date(true);
        assert_eq!(names(&store), vec!["january", "february", "march"]);

        store.sort(SortKey::Date, SortOrder::Descending);
        assert_eq!(names(&store), vec!["march", "february", "january"]);
    }

    #[test]
    fn sorting_persists() {
        let mut store = store_with(&[("B", "1", "2024-01-01"), ("A", "1", "2024-01-01")]);
        store.sort_by_name(true);

        let mut reopened = ItemStore::with_backend(MemBackend::with_document(
            store.backend().document().unwrap(),
        ));
        reopened.load();
        assert_eq!(names(&reopened), vec!["A", "B"]);
    }

    #[test]
    fn total_of_empty_store_is_zero() {
        let store = ItemStore::with_backend(MemBackend::new());
        assert_eq!(store.total_cost(), 0.0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = store_with(&[
            ("A", "1.25", "2024-01-01"),
            ("B", "0", "31.12.2023"),
            ("C", "99,99", "Feb 29, 2024"),
        ]);

        let reopened = ItemStore::open(MemBackend::with_document(
            store.backend().document().unwrap(),
        ));

        assert_eq!(reopened.items(), store.items());
    }

    #[test]
    fn load_from_missing_document_is_empty() {
        let mut store = ItemStore::with_backend(MemBackend::new());
        assert_eq!(store.load(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn load_from_corrupt_document_is_empty_and_keeps_the_document() {
        let mut store = ItemStore::with_backend(MemBackend::with_document("{ not json"));
        assert_eq!(store.load(), 0);
        assert!(store.is_empty());
        assert_eq!(
            store.backend().set_aside_document().as_deref(),
            Some("{ not json")
        );
        assert!(store.backend().document().is_none());
    }

    #[test]
    fn load_keeps_readable_records_of_a_mixed_document() {
        let doc = r#"[
            {"id": "e621e1f8-c36c-495a-93fc-0c247a3e6e5f", "name": "Coffee", "price": 4.5, "date": "17.10.2024"},
            {"id": "0b0a5c1e-2f7d-4c59-9d43-7c1f0d6a1b2c", "name": "Tea", "price": 2, "date": "5 Sept 2024"},
            {"id": "5d3c1a9b-8e2f-4a6d-b1c0-3e4f5a6b7c8d", "name": "Broken", "price": 1, "date": "someday"}
        ]"#;
        let mut store = ItemStore::with_backend(MemBackend::with_document(doc));

        assert_eq!(store.load(), 2);
        assert_eq!(names(&store), vec!["Coffee", "Tea"]);
        assert_eq!(store.total_cost(), 6.5);
        assert!(store.backend().set_aside_document().is_none());
        assert!(store.backend().document().is_some());
    }

    #[test]
    fn load_replaces_in_memory_items() {
        let mut store = store_with(&[("A", "1", "2024-01-01")]);
        store.backend().set_simulate_write_error(true);
        store.add("Unsaved", "1", "2024-01-01").unwrap();
        assert_eq!(store.len(), 2);

        store.load();
        assert_eq!(names(&store), vec!["A"]);
    }

    #[test]
    fn failed_save_keeps_memory_authoritative() {
        let mut store = store_with(&[("A", "1", "2024-01-01")]);
        store.backend().set_simulate_write_error(true);

        store.add("B", "2", "2024-01-02").unwrap();
        assert!(store.last_save_failed());
        assert_eq!(names(&store), vec!["A", "B"]);
        assert_eq!(store.total_cost(), 3.0);

        store.backend().set_simulate_write_error(false);
        store.sort_by_name(false);
        assert!(!store.last_save_failed());
        assert_eq!(store.backend().save_count(), 2);
    }
}
