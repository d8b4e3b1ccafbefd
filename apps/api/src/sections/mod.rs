// Editable sections: one record store and one editor per section, exposed to
// the handlers through the object-safe `SectionOps` trait.

pub mod editor;
pub mod handlers;
pub mod view;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::records::{FieldValue, Project, Skill, Testimonial, TimelineEvent};
use crate::storage::{KeyValueStore, RecordStore};
use editor::{EditorError, RecordEditor};
use view::{editable_view, SectionRecord, SectionView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Skills,
    Projects,
    Timeline,
    Testimonials,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Timeline,
        SectionKind::Testimonials,
    ];

    /// Page anchor and path segment.
    pub fn id(self) -> &'static str {
        match self {
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Timeline => "timeline",
            SectionKind::Testimonials => "testimonials",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Skills => "Skills & Expertise",
            SectionKind::Projects => "Featured Project",
            SectionKind::Timeline => "Career Journey",
            SectionKind::Testimonials => "Client Testimonials",
        }
    }

    pub fn subtitle(self) -> Option<&'static str> {
        match self {
            SectionKind::Timeline => Some("My professional growth and achievements over the years"),
            SectionKind::Testimonials => {
                Some("What colleagues and clients say about working with me")
            }
            _ => None,
        }
    }
}

/// What a client sees of an open editor.
#[derive(Debug, Clone, Serialize)]
pub struct EditorView {
    pub section: SectionKind,
    pub records: Value,
}

pub struct EditableSection<R: SectionRecord> {
    store: RecordStore<R>,
    editor: RecordEditor<R>,
}

impl<R: SectionRecord> EditableSection<R> {
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store: RecordStore::load(kv),
            editor: RecordEditor::new(),
        }
    }

    pub fn records(&self) -> &[R] {
        self.store.records()
    }

    fn editor_view(&self, records: &[R]) -> Result<EditorView, EditorError> {
        Ok(EditorView {
            section: R::KIND,
            records: serde_json::to_value(records).map_err(EditorError::Encode)?,
        })
    }
}

/// Section operations with the record type erased, so handlers can dispatch
/// on the path segment.
pub trait SectionOps: Send {
    fn view(&self) -> SectionView;
    fn open_editor(&mut self) -> Result<EditorView, EditorError>;
    fn working_copy(&self) -> Result<EditorView, EditorError>;
    fn add_record(&mut self) -> Result<usize, EditorError>;
    fn remove_record(&mut self, index: usize) -> Result<(), EditorError>;
    fn update_field(
        &mut self,
        index: usize,
        field: &str,
        value: FieldValue,
    ) -> Result<(), EditorError>;
    fn add_list_item(&mut self, index: usize, field: &str) -> Result<usize, EditorError>;
    fn remove_list_item(
        &mut self,
        index: usize,
        field: &str,
        item: usize,
    ) -> Result<(), EditorError>;
    fn update_list_item(
        &mut self,
        index: usize,
        field: &str,
        item: usize,
        value: String,
    ) -> Result<(), EditorError>;
    fn save(&mut self) -> Result<SectionView, EditorError>;
    fn cancel(&mut self);
}

impl<R: SectionRecord> SectionOps for EditableSection<R> {
    fn view(&self) -> SectionView {
        editable_view(self.store.records())
    }

    fn open_editor(&mut self) -> Result<EditorView, EditorError> {
        self.editor.open(self.store.records())?;
        self.working_copy()
    }

    fn working_copy(&self) -> Result<EditorView, EditorError> {
        self.editor_view(self.editor.records()?)
    }

    fn add_record(&mut self) -> Result<usize, EditorError> {
        self.editor.add_record()
    }

    fn remove_record(&mut self, index: usize) -> Result<(), EditorError> {
        self.editor.remove_record(index).map(|_| ())
    }

    fn update_field(
        &mut self,
        index: usize,
        field: &str,
        value: FieldValue,
    ) -> Result<(), EditorError> {
        self.editor.update_field(index, field, value)
    }

    fn add_list_item(&mut self, index: usize, field: &str) -> Result<usize, EditorError> {
        self.editor.add_list_item(index, field)
    }

    fn remove_list_item(
        &mut self,
        index: usize,
        field: &str,
        item: usize,
    ) -> Result<(), EditorError> {
        self.editor.remove_list_item(index, field, item).map(|_| ())
    }

    fn update_list_item(
        &mut self,
        index: usize,
        field: &str,
        item: usize,
        value: String,
    ) -> Result<(), EditorError> {
        self.editor.update_list_item(index, field, item, value)
    }

    fn save(&mut self) -> Result<SectionView, EditorError> {
        self.editor.save(&mut self.store)?;
        Ok(self.view())
    }

    fn cancel(&mut self) {
        self.editor.cancel();
    }
}

/// Every editable section of the page, all sharing one key-value store.
pub struct Portfolio {
    pub skills: EditableSection<Skill>,
    pub projects: EditableSection<Project>,
    pub timeline: EditableSection<TimelineEvent>,
    pub testimonials: EditableSection<Testimonial>,
}

impl Portfolio {
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            skills: EditableSection::load(kv.clone()),
            projects: EditableSection::load(kv.clone()),
            timeline: EditableSection::load(kv.clone()),
            testimonials: EditableSection::load(kv),
        }
    }

    pub fn section(&self, kind: SectionKind) -> &dyn SectionOps {
        match kind {
            SectionKind::Skills => &self.skills,
            SectionKind::Projects => &self.projects,
            SectionKind::Timeline => &self.timeline,
            SectionKind::Testimonials => &self.testimonials,
        }
    }

    pub fn section_mut(&mut self, kind: SectionKind) -> &mut dyn SectionOps {
        match kind {
            SectionKind::Skills => &mut self.skills,
            SectionKind::Projects => &mut self.projects,
            SectionKind::Timeline => &mut self.timeline,
            SectionKind::Testimonials => &mut self.testimonials,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Record;
    use crate::storage::MemoryStore;

    #[test]
    fn test_section_ids_roundtrip() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(SectionKind::from_id("blog"), None);
    }

    #[test]
    fn test_sections_are_independent() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut portfolio = Portfolio::load(kv.clone());

        let skills = portfolio.section_mut(SectionKind::Skills);
        skills.open_editor().unwrap();
        skills.remove_record(0).unwrap();
        skills.save().unwrap();

        assert!(kv.get(Skill::STORAGE_KEY).unwrap().is_some());
        assert!(kv.get(Testimonial::STORAGE_KEY).unwrap().is_none());
        assert_eq!(portfolio.skills.records().len(), 7);
        assert_eq!(portfolio.testimonials.records().len(), 3);
    }

    #[test]
    fn test_view_ignores_working_copy() {
        let mut portfolio = Portfolio::load(Arc::new(MemoryStore::new()));
        let section = portfolio.section_mut(SectionKind::Testimonials);
        section.open_editor().unwrap();
        section.remove_record(0).unwrap();
        section.remove_record(0).unwrap();

        let json = serde_json::to_value(section.view()).unwrap();
        assert_eq!(json["body"]["content"].as_array().unwrap().len(), 3);
        assert!(section.working_copy().is_ok());
    }

    #[test]
    fn test_save_returns_rerendered_view() {
        let mut portfolio = Portfolio::load(Arc::new(MemoryStore::new()));
        let section = portfolio.section_mut(SectionKind::Projects);
        section.open_editor().unwrap();
        let index = section.add_record().unwrap();
        section
            .update_field(index, "title", FieldValue::Text("Portfolio API".into()))
            .unwrap();
        let item = section.add_list_item(index, "techStack").unwrap();
        section
            .update_list_item(index, "techStack", item, "Rust".into())
            .unwrap();

        let view = section.save().unwrap();
        let json = serde_json::to_value(view).unwrap();
        let projects = json["body"]["content"].as_array().unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1]["id"], 2);
        assert_eq!(projects[1]["techStack"][0], "Rust");
        assert!(matches!(section.working_copy(), Err(EditorError::NotOpen)));
    }

    #[test]
    fn test_editor_view_carries_section() {
        let mut portfolio = Portfolio::load(Arc::new(MemoryStore::new()));
        let view = portfolio
            .section_mut(SectionKind::Timeline)
            .open_editor()
            .unwrap();
        assert_eq!(view.section, SectionKind::Timeline);
        assert_eq!(view.records.as_array().unwrap().len(), 5);
    }
}
