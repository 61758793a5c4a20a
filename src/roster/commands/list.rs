use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

pub fn run(store: &RecordStore) -> Result<CmdResult> {
    let listed: Vec<_> = store.iter().cloned().collect();
    tracing::debug!(op = "list", count = listed.len(), "listing records");
    Ok(CmdResult::default().with_listed_records(listed))
}
