use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{ItemStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &ItemStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_total(store.total_cost()))
}
