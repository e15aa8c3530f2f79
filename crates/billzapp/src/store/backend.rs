use crate::error::{BillzError, Result};
use crate::model::Item;
use std::path::PathBuf;
use tracing::warn;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ItemStore handles the "what" (the sequence, sorting, validation).
pub trait StorageBackend {
    /// Load the persisted item document.
    /// Returns Ok(None) if nothing has been persisted yet.
    /// Returns Err on I/O failures and on documents that are not a JSON array.
    /// Single records that do not parse are skipped (see [`decode_items`]).
    fn load_items(&self) -> Result<Option<Vec<Item>>>;

    /// Overwrite the persisted document with `items`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_items(&self, items: &[Item]) -> Result<()>;

    /// Move an unreadable document out of the way so the next save does not
    /// overwrite it. Returns where it went, if anywhere.
    fn set_aside(&self) -> Result<Option<PathBuf>>;

    /// Where the document lives. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}

/// Decodes a stored item document.
///
/// Only a document that is not a JSON array is malformed as a whole. Records are
/// read one by one, and a record that cannot be read is skipped with a warning so
/// the rest of the sequence still loads.
pub fn decode_items(content: &str) -> Result<Vec<Item>> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(content).map_err(BillzError::Serialization)?;

    let mut items = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        let id = record
            .get("id")
            .and_then(|id| id.as_str())
            .unwrap_or("?")
            .to_string();
        match serde_json::from_value::<Item>(record) {
            Ok(item) => items.push(item),
            Err(e) => warn!(
                position = position + 1,
                id = %id,
                error = %e,
                "skipping unreadable item record"
            ),
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COFFEE: &str = "e621e1f8-c36c-495a-93fc-0c247a3e6e5f";
    const TEA: &str = "0b0a5c1e-2f7d-4c59-9d43-7c1f0d6a1b2c";
    const BROKEN: &str = "5d3c1a9b-8e2f-4a6d-b1c0-3e4f5a6b7c8d";

    #[test]
    fn skips_only_unreadable_records() {
        let doc = format!(
            r#"[
                {{"id": "{COFFEE}", "name": "Coffee", "price": 4.5, "date": "17.10.2024"}},
                {{"id": "{BROKEN}", "name": "Broken", "price": 1, "date": "someday"}},
                {{"id": "{TEA}", "name": "Tea", "price": 2, "date": "5 Sept 2024"}},
                {{"name": "No id"}}
            ]"#
        );

        let items = decode_items(&doc).unwrap();

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Coffee", "Tea"]);
    }

    #[test]
    fn non_array_document_is_malformed() {
        assert!(matches!(
            decode_items(r#"{"items": []}"#),
            Err(BillzError::Serialization(_))
        ));
        assert!(matches!(
            decode_items("not json"),
            Err(BillzError::Serialization(_))
        ));
    }
}
