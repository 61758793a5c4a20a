use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

pub fn by_last_name(store: &RecordStore, name: &str) -> Result<CmdResult> {
    let listed: Vec<Record> = store.with_last_name(name).cloned().collect();
    tracing::debug!(op = "search_last_name", name, count = listed.len(), "searched");
    Ok(to_result(listed))
}

/// Fails with `InvalidMajor` when `major` has fewer than three characters.
pub fn by_major(store: &RecordStore, major: &str) -> Result<CmdResult> {
    let listed: Vec<Record> = store.with_major_prefix(major)?.cloned().collect();
    tracing::debug!(op = "search_major", major, count = listed.len(), "searched");
    Ok(to_result(listed))
}

fn to_result(listed: Vec<Record>) -> CmdResult {
    let ids = listed.iter().map(Record::id).collect();
    CmdResult::default()
        .with_ids(ids)
        .with_listed_records(listed)
}
