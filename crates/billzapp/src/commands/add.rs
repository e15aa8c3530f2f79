use crate::commands::{warn_if_unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayItem;
use crate::store::{ItemStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut ItemStore<B>,
    name: &str,
    price: &str,
    date: &str,
) -> Result<CmdResult> {
    let item = store.add(name, price, date)?;

    let mut result = CmdResult::default().with_total(store.total_cost());
    // New items always land at the end
    let index = store.len();
    result.add_message(CmdMessage::success(format!(
        "Item added ({}): {}",
        index, item.name
    )));
    result.affected_items.push(DisplayItem { index, item });
    warn_if_unsaved(store, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::{BillzError, ValidationError};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn adds_item_at_the_end() {
        let mut store = ItemStore::with_backend(MemBackend::new());
        run(&mut store, "A", "1", "2024-01-01").unwrap();
        let result = run(&mut store, "Widget", "12.50", "01-01-2024").unwrap();

        assert_eq!(result.affected_items.len(), 1);
        assert_eq!(result.affected_items[0].index, 2);
        assert_eq!(result.affected_items[0].item.name, "Widget");
        assert_eq!(result.total, Some(13.5));
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn validation_errors_propagate() {
        let mut store = ItemStore::with_backend(MemBackend::new());
        let result = run(&mut store, "Widget", "twelve", "01-01-2024");
        assert!(matches!(
            result,
            Err(BillzError::Validation(ValidationError::InvalidPrice(_)))
        ));
        assert!(store.is_empty());
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn warns_when_save_fails() {
        let mut store = ItemStore::with_backend(MemBackend::new());
        store.backend().set_simulate_write_error(true);
        let result = run(&mut store, "Widget", "1", "2024-01-01").unwrap();

        assert_eq!(store.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }
}
