use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run(store: &RecordStore, id: i32) -> Result<CmdResult> {
    let present = store.contains_id(id);
    tracing::debug!(op = "check", id, present, "checking id");

    let mut result = CmdResult::default();
    if present {
        result.ids.push(id);
        result.add_message(CmdMessage::success(format!("Id {} is taken", id)));
    } else {
        result.add_message(CmdMessage::info(format!("Id {} is free", id)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn reports_taken_and_free_ids() {
        let store = StoreFixture::new().with_records(2).build();

        let taken = run(&store, 2).unwrap();
        assert_eq!(taken.ids, vec![2]);
        assert!(taken.messages[0].content.contains("taken"));

        let free = run(&store, 3).unwrap();
        assert!(free.ids.is_empty());
        assert!(free.messages[0].content.contains("free"));
    }
}
