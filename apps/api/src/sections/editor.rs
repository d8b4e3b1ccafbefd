//! The transient working copy behind each section's "Edit" action.
//!
//! Closed → Open on `open`; Open → Closed on `save` (store mutated) or
//! `cancel` (no side effect). The working copy is value-copied in on open and
//! value-copied out on save; it never aliases the committed sequence.

use thiserror::Error;
use tracing::debug;

use crate::records::{next_id, sanitize_all, FieldError, FieldValue, Record};
use crate::storage::{RecordStore, StoreError};

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("editor is not open")]
    NotOpen,

    #[error("editor is already open")]
    AlreadyOpen,

    #[error("no record at index {index} (have {len})")]
    RecordOutOfRange { index: usize, len: usize },

    #[error("no item at index {index} in '{field}' (have {len})")]
    ItemOutOfRange {
        field: String,
        index: usize,
        len: usize,
    },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("failed to save: {0}")]
    Store(#[from] StoreError),

    #[error("failed to encode working copy: {0}")]
    Encode(#[source] serde_json::Error),
}

pub struct RecordEditor<R: Record> {
    working: Option<Vec<R>>,
}

impl<R: Record> Default for RecordEditor<R> {
    fn default() -> Self {
        Self { working: None }
    }
}

impl<R: Record> RecordEditor<R> {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.working.is_some()
    }

    /// Seeds the working copy from the committed sequence.
    pub fn open(&mut self, committed: &[R]) -> Result<&[R], EditorError> {
        if self.working.is_some() {
            return Err(EditorError::AlreadyOpen);
        }
        Ok(self.working.insert(committed.to_vec()).as_slice())
    }

    pub fn records(&self) -> Result<&[R], EditorError> {
        self.working.as_deref().ok_or(EditorError::NotOpen)
    }

    /// Appends a blank record and returns its index.
    pub fn add_record(&mut self) -> Result<usize, EditorError> {
        let working = self.working_mut()?;
        let record = R::blank(next_id(working));
        working.push(record);
        Ok(working.len() - 1)
    }

    pub fn remove_record(&mut self, index: usize) -> Result<R, EditorError> {
        let working = self.working_mut()?;
        check_index(index, working.len())?;
        Ok(working.remove(index))
    }

    pub fn update_field(
        &mut self,
        index: usize,
        field: &str,
        value: FieldValue,
    ) -> Result<(), EditorError> {
        self.record_mut(index)?.set_field(field, value)?;
        Ok(())
    }

    /// Appends an empty entry to a list field and returns its index.
    pub fn add_list_item(&mut self, index: usize, field: &str) -> Result<usize, EditorError> {
        let items = self.record_mut(index)?.list_mut(field)?;
        items.push(String::new());
        Ok(items.len() - 1)
    }

    pub fn remove_list_item(
        &mut self,
        index: usize,
        field: &str,
        item: usize,
    ) -> Result<String, EditorError> {
        let items = self.record_mut(index)?.list_mut(field)?;
        check_item(field, item, items.len())?;
        Ok(items.remove(item))
    }

    pub fn update_list_item(
        &mut self,
        index: usize,
        field: &str,
        item: usize,
        value: String,
    ) -> Result<(), EditorError> {
        let items = self.record_mut(index)?.list_mut(field)?;
        check_item(field, item, items.len())?;
        items[item] = value;
        Ok(())
    }

    /// Drops records that fail the entity invariant, commits the rest, and
    /// closes. If the commit fails the editor stays open with its edits.
    pub fn save(&mut self, store: &mut RecordStore<R>) -> Result<(), EditorError> {
        let working = self.working.take().ok_or(EditorError::NotOpen)?;
        let total = working.len();
        let valid = sanitize_all(working.clone());
        if valid.len() != total {
            debug!(
                "Filtered {} invalid records from '{}' on save",
                total - valid.len(),
                R::STORAGE_KEY
            );
        }

        if let Err(e) = store.commit(valid) {
            self.working = Some(working);
            return Err(e.into());
        }
        Ok(())
    }

    /// Discards the working copy. Cancelling a closed editor is a no-op.
    pub fn cancel(&mut self) {
        if self.working.take().is_some() {
            debug!("Discarded working copy of '{}'", R::STORAGE_KEY);
        }
    }

    fn working_mut(&mut self) -> Result<&mut Vec<R>, EditorError> {
        self.working.as_mut().ok_or(EditorError::NotOpen)
    }

    fn record_mut(&mut self, index: usize) -> Result<&mut R, EditorError> {
        let working = self.working_mut()?;
        let len = working.len();
        working
            .get_mut(index)
            .ok_or(EditorError::RecordOutOfRange { index, len })
    }
}

fn check_index(index: usize, len: usize) -> Result<(), EditorError> {
    if index < len {
        Ok(())
    } else {
        Err(EditorError::RecordOutOfRange { index, len })
    }
}

fn check_item(field: &str, index: usize, len: usize) -> Result<(), EditorError> {
    if index < len {
        Ok(())
    } else {
        Err(EditorError::ItemOutOfRange {
            field: field.to_string(),
            index,
            len,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::records::{Project, Skill, Testimonial, TimelineEvent};
    use crate::storage::{KeyValueStore, MemoryStore};

    fn store<R: Record>() -> RecordStore<R> {
        RecordStore::load(Arc::new(MemoryStore::new()))
    }

    fn opened<R: Record>(store: &RecordStore<R>) -> RecordEditor<R> {
        let mut editor = RecordEditor::new();
        editor.open(store.records()).unwrap();
        editor
    }

    #[test]
    fn test_closed_editor_rejects_edits() {
        let mut editor = RecordEditor::<Skill>::new();
        assert!(matches!(editor.add_record(), Err(EditorError::NotOpen)));
        assert!(matches!(editor.records(), Err(EditorError::NotOpen)));
        let mut s = store::<Skill>();
        assert!(matches!(editor.save(&mut s), Err(EditorError::NotOpen)));
    }

    #[test]
    fn test_open_twice_is_rejected() {
        let s = store::<Skill>();
        let mut editor = opened(&s);
        assert!(matches!(
            editor.open(s.records()),
            Err(EditorError::AlreadyOpen)
        ));
    }

    #[test]
    fn test_add_then_remove_restores_working_copy() {
        let s = store::<TimelineEvent>();
        let mut editor = opened(&s);
        let before = editor.records().unwrap().to_vec();

        let index = editor.add_record().unwrap();
        assert_eq!(editor.records().unwrap().len(), before.len() + 1);
        editor.remove_record(index).unwrap();

        assert_eq!(editor.records().unwrap(), before.as_slice());
    }

    #[test]
    fn test_added_ids_stay_distinct() {
        let s = store::<Testimonial>();
        let mut editor = opened(&s);
        editor.remove_record(1).unwrap();
        for _ in 0..5 {
            editor.add_record().unwrap();
        }
        editor.remove_record(0).unwrap();
        editor.add_record().unwrap();

        let ids: Vec<u32> = editor.records().unwrap().iter().map(|t| t.id).collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_add_after_max_id_stays_distinct() {
        let mut s = store::<Testimonial>();
        let mut persisted = Testimonial::defaults();
        persisted.truncate(1);
        persisted[0].id = u32::MAX;
        s.commit(persisted).unwrap();

        let mut editor = opened(&s);
        editor.add_record().unwrap();
        editor.add_record().unwrap();

        let ids: Vec<u32> = editor.records().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![u32::MAX, 1, 2]);
    }

    #[test]
    fn test_add_on_empty_assigns_id_one() {
        let mut s = store::<Testimonial>();
        s.commit(Vec::new()).unwrap();
        let mut editor = opened(&s);
        editor.add_record().unwrap();
        assert_eq!(editor.records().unwrap()[0].id, 1);
    }

    #[test]
    fn test_update_field_touches_one_record() {
        let s = store::<Skill>();
        let mut editor = opened(&s);
        editor
            .update_field(2, "name", FieldValue::Text("Rust".into()))
            .unwrap();

        let working = editor.records().unwrap();
        assert_eq!(working[2], Skill::new("Rust", 88));
        assert_eq!(&working[..2], &s.records()[..2]);
        assert_eq!(&working[3..], &s.records()[3..]);
        assert_eq!(s.records()[2].name, "Java");
    }

    #[test]
    fn test_level_150_is_clamped_on_save() {
        let mut s = store::<Skill>();
        let mut editor = opened(&s);
        editor
            .update_field(0, "level", FieldValue::Number(150))
            .unwrap();
        editor.save(&mut s).unwrap();

        assert!(!editor.is_open());
        assert_eq!(s.records().len(), 8);
        assert_eq!(s.records()[0], Skill::new("Selenium", 100));
    }

    #[test]
    fn test_save_drops_invalid_skills() {
        let mut s = store::<Skill>();
        let mut editor = opened(&s);
        editor.add_record().unwrap();
        editor.update_field(1, "level", FieldValue::Number(0)).unwrap();
        editor.save(&mut s).unwrap();

        assert_eq!(s.records().len(), 7);
        assert!(s.records().iter().all(|sk| sk.level > 0 && !sk.name.is_empty()));
    }

    #[test]
    fn test_blank_testimonial_is_filtered_on_save() {
        let mut s = store::<Testimonial>();
        let mut editor = opened(&s);
        editor.add_record().unwrap();
        editor.save(&mut s).unwrap();
        assert_eq!(s.records().len(), 3);
    }

    #[test]
    fn test_cancel_never_commits() {
        let mut s = store::<Skill>();
        let before = s.records().to_vec();
        let mut editor = opened(&s);
        editor.remove_record(0).unwrap();
        editor
            .update_field(0, "name", FieldValue::Text("Changed".into()))
            .unwrap();
        editor.cancel();

        assert!(!editor.is_open());
        assert_eq!(s.records(), before.as_slice());

        // Reopening shows the committed data, not the discarded edits.
        editor.open(s.records()).unwrap();
        assert_eq!(editor.records().unwrap(), before.as_slice());
        editor.cancel();
        editor.save(&mut s).unwrap_err();
    }

    #[test]
    fn test_reopen_after_save_reflects_commit() {
        let mut s = store::<Skill>();
        let mut editor = opened(&s);
        editor.remove_record(7).unwrap();
        editor.save(&mut s).unwrap();
        editor.open(s.records()).unwrap();
        assert_eq!(editor.records().unwrap().len(), 7);
    }

    #[test]
    fn test_achievement_list_ops() {
        let mut s = store::<TimelineEvent>();
        let mut editor = opened(&s);
        let item = editor.add_list_item(0, "achievements").unwrap();
        assert_eq!(item, 3);
        editor
            .update_list_item(0, "achievements", item, "Shipped v2".into())
            .unwrap();
        editor.add_list_item(0, "achievements").unwrap();
        let removed = editor.remove_list_item(0, "achievements", 0).unwrap();
        assert_eq!(removed, "Reduced test execution time by 70%");
        editor.save(&mut s).unwrap();

        let saved = &s.records()[0].achievements;
        assert_eq!(saved.len(), 3);
        assert_eq!(saved.last().map(String::as_str), Some("Shipped v2"));
    }

    #[test]
    fn test_list_item_out_of_range() {
        let s = store::<Project>();
        let mut editor = opened(&s);
        let err = editor
            .update_list_item(0, "highlights", 10, "x".into())
            .unwrap_err();
        assert!(matches!(err, EditorError::ItemOutOfRange { len: 4, .. }));
    }

    #[test]
    fn test_record_out_of_range() {
        let s = store::<Skill>();
        let mut editor = opened(&s);
        assert!(matches!(
            editor.remove_record(8),
            Err(EditorError::RecordOutOfRange { index: 8, len: 8 })
        ));
    }

    #[test]
    fn test_failed_save_keeps_editor_open() {
        struct FailingStore;
        impl KeyValueStore for FailingStore {
            fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
                Ok(None)
            }
            fn set(&self, _key: &str, _value: String) -> Result<(), StoreError> {
                Err(StoreError::Poisoned)
            }
        }

        let mut s = RecordStore::<Skill>::load(Arc::new(FailingStore));
        let mut editor = opened(&s);
        editor.remove_record(0).unwrap();
        assert!(matches!(editor.save(&mut s), Err(EditorError::Store(_))));

        assert!(editor.is_open());
        assert_eq!(editor.records().unwrap().len(), 7);
        assert_eq!(s.records().len(), 8);
    }
}
