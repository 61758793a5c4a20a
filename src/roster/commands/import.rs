use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::Record;
use crate::normalize::{normalize_record, CaseMode};
use crate::store::RecordStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads every roster file into the store.
///
/// Unreadable files, malformed lines and records whose id is already present
/// are skipped with a warning; the rest of each file still loads. When
/// `normalize` is set, each record is normalized before insertion.
pub fn run(
    store: &mut RecordStore,
    paths: &[PathBuf],
    normalize: Option<CaseMode>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut imported_count = 0;

    for path in paths {
        let (records, bad_lines) = match load_file(path) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load roster");
                result.add_message(CmdMessage::warning(format!(
                    "Failed to import {}: {}",
                    path.display(),
                    e
                )));
                continue;
            }
        };

        for err in bad_lines {
            tracing::warn!(path = %path.display(), error = %err, "skipping roster line");
            result.add_message(CmdMessage::warning(format!(
                "Skipped {}: {}",
                path.display(),
                err
            )));
        }

        for mut record in records {
            if let Some(mode) = normalize {
                normalize_record(&mut record, mode);
            }
            match store.try_insert(record) {
                Ok(()) => imported_count += 1,
                Err(RosterError::DuplicateId(id)) => {
                    result.add_message(CmdMessage::warning(format!(
                        "Skipped duplicate id {} in {}",
                        id,
                        path.display()
                    )));
                }
                Err(e) => return Err(e),
            }
        }
    }

    tracing::debug!(op = "import", count = imported_count, "imported records");
    result.add_message(CmdMessage::info(format!(
        "Loaded {} records",
        imported_count
    )));
    Ok(result)
}

pub fn load_file(path: &Path) -> Result<(Vec<Record>, Vec<RosterError>)> {
    let content = fs::read_to_string(path)?;
    Ok(parse_roster(&content))
}

/// Parses roster text: one record per line, blank lines and `#` comments
/// skipped. Lines that do not parse come back as `Parse` errors carrying their
/// 1-based line number.
pub fn parse_roster(content: &str) -> (Vec<Record>, Vec<RosterError>) {
    let mut records = Vec::new();
    let mut errors = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.parse::<Record>() {
            Ok(record) => records.push(record),
            Err(reason) => errors.push(RosterError::Parse { line: i + 1, reason }),
        }
    }

    (records, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    const ROSTER: &str = "\
# id first last gpa major
1 ann lee 3.5 csc

2 bob kim 2.75 math
";

    fn write_roster(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parses_lines_and_skips_comments() {
        let (records, errors) = parse_roster(ROSTER);
        assert!(errors.is_empty());
        assert_eq!(
            records,
            vec![
                Record::new(1, "ann", "lee", 3.5, "csc"),
                Record::new(2, "bob", "kim", 2.75, "math"),
            ]
        );
    }

    #[test]
    fn parse_errors_carry_line_numbers() {
        let (records, errors) =
            parse_roster("1 ann lee 3.5 csc\n\n2 bob kim\n3 cy wu 3.0 art\n");
        assert_eq!(records.len(), 2);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], RosterError::Parse { line: 3, .. }));
    }

    #[test]
    fn bad_lines_are_skipped_but_good_ones_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_roster(
            dir.path(),
            "mixed.txt",
            "1 ann lee 3.5 csc\n2 bob\n3 cy wu 3.0 art\n",
        );

        let mut store = RecordStore::new();
        let result = run(&mut store, &[path], None).unwrap();

        let ids: Vec<i32> = store.iter().map(Record::id).collect();
        assert_eq!(ids, vec![3, 1]);
        let warning = result
            .messages
            .iter()
            .find(|m| m.level == MessageLevel::Warning)
            .unwrap();
        assert!(warning.content.contains("mixed.txt"));
        assert!(warning.content.contains("line 2"));
        assert!(result.messages.iter().any(|m| m.content == "Loaded 2 records"));
    }

    #[test]
    fn imports_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_roster(dir.path(), "a.txt", ROSTER);

        let mut store = RecordStore::new();
        let result = run(&mut store, &[path], None).unwrap();

        let ids: Vec<i32> = store.iter().map(Record::id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "Loaded 2 records"));
    }

    #[test]
    fn normalizes_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_roster(dir.path(), "a.txt", ROSTER);

        let mut store = RecordStore::new();
        run(&mut store, &[path], Some(CaseMode::Title)).unwrap();
        assert_eq!(
            store.find_by_id(2),
            Some(&Record::new(2, "Bob", "Kim", 2.75, "MATH"))
        );
    }

    #[test]
    fn duplicates_and_bad_files_become_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_roster(dir.path(), "a.txt", ROSTER);
        let second = write_roster(dir.path(), "b.txt", "2 dup dup 1.0 dup\n3 cy wu 3.0 art\n");
        let broken = write_roster(dir.path(), "c.txt", "not a record\n");
        let missing = dir.path().join("missing.txt");

        let mut store = RecordStore::new();
        let result = run(&mut store, &[first, second, broken, missing], None).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.find_by_id(2).unwrap().first_name, "bob");

        let warnings: Vec<&str> = result
            .messages
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("duplicate id 2"));
        assert!(warnings[1].contains("c.txt"));
        assert!(warnings[2].contains("missing.txt"));
    }
}
