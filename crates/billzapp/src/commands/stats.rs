use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::stats::summarize;
use crate::store::{ItemStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &ItemStore<B>) -> Result<CmdResult> {
    let stats = summarize(store.items());
    let mut result = CmdResult::default().with_total(stats.total);
    if stats.count == 0 {
        result.add_message(CmdMessage::info("No items yet."));
    }
    result.stats = Some(stats);
    Ok(result)
}
