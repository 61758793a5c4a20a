use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::store::RecordStore;

/// Looks up one student. A miss is reported as a warning, not an error.
pub fn run(store: &RecordStore, id: i32) -> Result<CmdResult> {
    tracing::debug!(op = "get", id, "looking up record");
    match store.find_by_id(id) {
        Some(record) => Ok(CmdResult::default()
            .with_listed_records(vec![record.clone()])
            .with_ids(vec![id])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(
                RosterError::RecordNotFound(id).to_string(),
            ));
            Ok(result)
        }
    }
}
