use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::normalize::CaseMode;
use crate::store::RecordStore;

pub fn run(store: &mut RecordStore, mode: CaseMode) -> Result<CmdResult> {
    store.normalize_all(mode);
    tracing::debug!(op = "normalize", %mode, count = store.len(), "normalized records");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Normalized {} records ({} casing)",
        store.len(),
        mode
    )));
    Ok(result)
}
