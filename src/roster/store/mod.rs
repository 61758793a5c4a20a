//! # Record Store
//!
//! [`RecordStore`] owns every [`Record`] it holds. Records are appended to a
//! `Vec` and visited back to front, so traversal is always
//! most-recently-inserted first:
//!
//! ```text
//! insert A, insert B, insert C   ->   iter(): C, B, A
//! ```
//!
//! Every lookup is a linear scan in that traversal order, and every id-list
//! result preserves it.
//!
//! ## Uniqueness
//!
//! [`RecordStore::insert`] does not check ids. Callers that need unique ids
//! either call [`RecordStore::contains_id`] first or use
//! [`RecordStore::try_insert`], which does both.
//!
//! ## Lifetime
//!
//! Records are dropped with the store. [`RecordStore::release`] consumes the
//! store so it cannot be used afterwards; [`RecordStore::clear`] empties it in
//! place.

use crate::error::{Result, RosterError};
use crate::model::Record;
use crate::normalize::{normalize_record, CaseMode};
use std::iter::Rev;
use std::slice;

/// Number of leading characters compared by major searches.
pub const MAJOR_PREFIX_LEN: usize = 3;

pub type Iter<'a> = Rev<slice::Iter<'a, Record>>;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adds a record at the front of traversal. Does not check for duplicate ids.
    pub fn insert(&mut self, record: Record) {
        tracing::debug!(op = "insert", id = record.id(), "inserting record");
        self.records.push(record);
    }

    /// Adds a record only if no stored record has the same id.
    pub fn try_insert(&mut self, record: Record) -> Result<()> {
        if self.contains_id(record.id()) {
            return Err(RosterError::DuplicateId(record.id()));
        }
        self.insert(record);
        Ok(())
    }

    pub fn contains_id(&self, id: i32) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    pub fn find_by_id(&self, id: i32) -> Option<&Record> {
        self.iter().find(|r| r.id() == id)
    }

    /// Ids of every record whose last name equals `name` exactly (case-sensitive).
    pub fn find_by_last_name(&self, name: &str) -> Vec<i32> {
        self.with_last_name(name).map(Record::id).collect()
    }

    /// Ids of every record whose major starts with the same three characters
    /// as `major`. Stored majors shorter than three characters never match.
    pub fn find_by_major_prefix(&self, major: &str) -> Result<Vec<i32>> {
        Ok(self.with_major_prefix(major)?.map(Record::id).collect())
    }

    /// Records matched by [`RecordStore::find_by_last_name`], in traversal order.
    pub fn with_last_name<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.iter().filter(move |r| r.last_name == name)
    }

    /// Records matched by [`RecordStore::find_by_major_prefix`], in traversal order.
    pub fn with_major_prefix<'a>(
        &'a self,
        major: &str,
    ) -> Result<impl Iterator<Item = &'a Record> + 'a> {
        let prefix: Vec<char> = major.chars().take(MAJOR_PREFIX_LEN).collect();
        if prefix.len() < MAJOR_PREFIX_LEN {
            return Err(RosterError::InvalidMajor {
                query: major.to_string(),
            });
        }

        Ok(self.iter().filter(move |r| {
            r.major
                .chars()
                .take(MAJOR_PREFIX_LEN)
                .eq(prefix.iter().copied())
        }))
    }

    /// Records in traversal order. Each call starts again from the newest record.
    pub fn iter(&self) -> Iter<'_> {
        self.records.iter().rev()
    }

    /// Calls `visitor` on every record in traversal order.
    pub fn for_each<F: FnMut(&Record)>(&self, visitor: F) {
        self.iter().for_each(visitor)
    }

    /// Removes the first record in traversal order with the given id.
    pub fn remove(&mut self, id: i32) -> Option<Record> {
        let pos = self.records.iter().rposition(|r| r.id() == id)?;
        tracing::debug!(op = "remove", id, "removing record");
        Some(self.records.remove(pos))
    }

    pub fn clear(&mut self) {
        tracing::debug!(op = "clear", count = self.records.len(), "clearing store");
        self.records.clear();
    }

    pub fn normalize_all(&mut self, mode: CaseMode) {
        for record in &mut self.records {
            normalize_record(record, mode);
        }
    }

    /// Drops the store and every record in it, returning how many were released.
    pub fn release(self) -> usize {
        let count = self.records.len();
        tracing::debug!(op = "release", count, "releasing store");
        count
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Inserts in iteration order, so the last record yielded is traversed first.
impl FromIterator<Record> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut store = RecordStore::new();
        store.extend(iter);
        store
    }
}

impl Extend<Record> for RecordStore {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: RecordStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: RecordStore::new(),
            }
        }

        /// Inserts `count` records with ids `1..=count`.
        pub fn with_records(mut self, count: usize) -> Self {
            for i in 1..=count as i32 {
                self.store.insert(Record::new(
                    i,
                    format!("first{}", i),
                    format!("last{}", i),
                    2.0 + (i % 3) as f32 * 0.5,
                    "GEN",
                ));
            }
            self
        }

        pub fn with_student(
            mut self,
            id: i32,
            first: &str,
            last: &str,
            gpa: f32,
            major: &str,
        ) -> Self {
            self.store.insert(Record::new(id, first, last, gpa, major));
            self
        }

        pub fn build(self) -> RecordStore {
            self.store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    fn sample() -> RecordStore {
        StoreFixture::new()
            .with_student(1, "ann", "lee", 3.5, "CSC")
            .with_student(2, "bob", "kim", 2.8, "MATH")
            .with_student(3, "cal", "lee", 3.9, "CSE")
            .build()
    }

    #[test]
    fn contains_every_inserted_id_and_nothing_else() {
        let store = sample();
        for id in [1, 2, 3] {
            assert!(store.contains_id(id));
        }
        assert!(!store.contains_id(4));
        assert!(!RecordStore::new().contains_id(1));
    }

    #[test]
    fn find_by_id_returns_equal_record() {
        let mut store = RecordStore::new();
        let record = Record::new(42, "ann", "lee", 3.5, "cs");
        store.insert(record.clone());
        assert_eq!(store.find_by_id(42), Some(&record));
        assert_eq!(store.find_by_id(7), None);
    }

    #[test]
    fn find_by_id_prefers_newest_duplicate() {
        let mut store = RecordStore::new();
        store.insert(Record::new(1, "old", "x", 1.0, "AAA"));
        store.insert(Record::new(1, "new", "x", 1.0, "AAA"));
        assert_eq!(store.find_by_id(1).unwrap().first_name, "new");
    }

    #[test]
    fn traversal_is_reverse_of_insertion() {
        let store = sample();
        let ids: Vec<i32> = store.iter().map(Record::id).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        // restartable
        let again: Vec<i32> = (&store).into_iter().map(Record::id).collect();
        assert_eq!(again, ids);

        let mut visited = Vec::new();
        store.for_each(|r| visited.push(r.id()));
        assert_eq!(visited, ids);
    }

    #[test]
    fn last_name_search_is_exact_and_ordered() {
        let store = sample();
        assert_eq!(store.find_by_last_name("lee"), vec![3, 1]);
        assert_eq!(store.find_by_last_name("kim"), vec![2]);
        assert!(store.find_by_last_name("Lee").is_empty());
        assert!(store.find_by_last_name("le").is_empty());
        assert!(store.find_by_last_name("leee").is_empty());
        assert!(RecordStore::new().find_by_last_name("lee").is_empty());
    }

    #[test]
    fn empty_last_name_matches_only_empty_names() {
        let mut store = sample();
        store.insert(Record::new(9, "x", "", 1.0, "AAA"));
        assert_eq!(store.find_by_last_name(""), vec![9]);
    }

    #[test]
    fn major_search_compares_three_characters() {
        let store = sample();
        assert_eq!(store.find_by_major_prefix("CSC").unwrap(), vec![1]);
        assert_eq!(store.find_by_major_prefix("CSE101").unwrap(), vec![3]);
        assert_eq!(store.find_by_major_prefix("MATHS").unwrap(), vec![2]);
        assert!(store.find_by_major_prefix("csc").unwrap().is_empty());
        assert!(store.find_by_major_prefix("BIO").unwrap().is_empty());
    }

    #[test]
    fn short_major_query_is_rejected() {
        let store = sample();
        let err = store.find_by_major_prefix("CS").unwrap_err();
        assert!(matches!(err, RosterError::InvalidMajor { ref query } if query == "CS"));
        assert!(store.find_by_major_prefix("").is_err());
    }

    #[test]
    fn short_stored_major_never_matches() {
        let mut store = RecordStore::new();
        store.insert(Record::new(7, "ann", "lee", 3.5, "cs"));
        assert!(store.find_by_major_prefix("csc").unwrap().is_empty());
    }

    #[test]
    fn try_insert_rejects_duplicates() {
        let mut store = sample();
        let err = store
            .try_insert(Record::new(2, "dup", "dup", 0.0, "DUP"))
            .unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId(2)));
        assert_eq!(store.len(), 3);

        store.try_insert(Record::new(4, "dee", "ng", 3.0, "ART")).unwrap();
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn remove_and_clear_keep_len_consistent() {
        let mut store = sample();
        let removed = store.remove(2).unwrap();
        assert_eq!(removed.id(), 2);
        assert_eq!(store.len(), 2);
        assert!(!store.contains_id(2));
        assert!(store.remove(2).is_none());

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn release_reports_every_record() {
        assert_eq!(RecordStore::new().release(), 0);
        assert_eq!(StoreFixture::new().with_records(1).build().release(), 1);
        assert_eq!(StoreFixture::new().with_records(250).build().release(), 250);
    }

    #[test]
    fn collects_in_insertion_order() {
        let store: RecordStore = (1..=3)
            .map(|i| Record::new(i, "f", "l", 1.0, "AAA"))
            .collect();
        let ids: Vec<i32> = store.iter().map(Record::id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn normalize_all_rewrites_fields() {
        let mut store = RecordStore::new();
        store.insert(Record::new(1, "ann", "LEE", 3.5, "csc"));
        store.normalize_all(CaseMode::Title);
        assert_eq!(
            store.find_by_id(1),
            Some(&Record::new(1, "Ann", "Lee", 3.5, "CSC"))
        );
    }
}
