// SPDX-License-Identifier: Apache-2.0
// © Folio Contributors <https://github.com/folio-dev/folio>
//! Canonical in-memory owner of the portfolio document.
//!
//! Every mutation goes through [`DocumentStore::update`], which replaces
//! exactly one top-level field and writes the whole document back to storage
//! synchronously. The in-memory document is the source of truth for the
//! running session: a failed durable write is logged and otherwise ignored.

use crate::document::{
    Certification, Contacts, Course, OngoingWork, PortfolioData, Skill,
};
use crate::storage::{KvService, KvStore, DOCUMENT_KEY};
use tracing::warn;

/// A typed replacement value for one top-level document field.
///
/// Collection variants carry the complete new collection; there is no
/// element-level update primitive at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentField {
    /// Display name.
    Name(String),
    /// Biography text.
    Bio(String),
    /// Profile photo URL or data URL; `None` clears it.
    ProfileImage(Option<String>),
    /// The whole skills collection.
    Skills(Vec<Skill>),
    /// The whole ongoing-works collection.
    OngoingWorks(Vec<OngoingWork>),
    /// The whole courses collection.
    Courses(Vec<Course>),
    /// The whole certifications collection.
    Certifications(Vec<Certification>),
    /// The contact links.
    Contacts(Contacts),
}

impl DocumentField {
    fn apply(self, doc: &mut PortfolioData) {
        match self {
            Self::Name(name) => doc.name = name,
            Self::Bio(bio) => doc.bio = bio,
            Self::ProfileImage(image) => doc.profile_image = image,
            Self::Skills(skills) => doc.skills = skills,
            Self::OngoingWorks(works) => doc.ongoing_works = works,
            Self::Courses(courses) => doc.courses = courses,
            Self::Certifications(certs) => doc.certifications = certs,
            Self::Contacts(contacts) => doc.contacts = contacts,
        }
    }
}

/// Owns the canonical document and its persistence service.
pub struct DocumentStore<S> {
    service: KvService<S>,
    data: PortfolioData,
}

impl<S> DocumentStore<S>
where
    S: KvStore,
{
    /// Load the document from storage, shape-completed against the built-in
    /// defaults. Never fails: an unreadable or unparseable stored value logs
    /// a warning and yields the defaults untouched.
    pub fn open(service: KvService<S>) -> Self {
        let data = match service.load::<serde_json::Value>(DOCUMENT_KEY) {
            Ok(Some(raw)) => {
                if !raw.is_object() {
                    warn!("stored document is not a JSON object, using defaults");
                }
                PortfolioData::from_stored(&raw)
            }
            Ok(None) => PortfolioData::default(),
            Err(err) => {
                warn!("failed to load stored document, using defaults: {err}");
                PortfolioData::default()
            }
        };
        Self { service, data }
    }

    /// Current document. No side effects.
    #[must_use]
    pub fn document(&self) -> &PortfolioData {
        &self.data
    }

    /// Replace one top-level field and persist the full resulting document
    /// synchronously. A failed write is logged; the in-memory document stays
    /// authoritative for the session, so no error reaches the caller.
    pub fn update(&mut self, field: DocumentField) {
        field.apply(&mut self.data);
        if let Err(err) = self.service.save(DOCUMENT_KEY, &self.data) {
            warn!("failed to persist document: {err}");
        }
    }

    /// Consume the store and return the persistence service.
    pub fn into_service(self) -> KvService<S> {
        self.service
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::storage::{MemoryKvStore, StorageError};

    #[test]
    fn update_replaces_exactly_one_field() {
        let mut store = DocumentStore::open(KvService::new(MemoryKvStore::new()));
        let before = store.document().clone();

        store.update(DocumentField::Name("Ada".into()));

        let after = store.document();
        assert_eq!(after.name, "Ada");
        assert_eq!(after.bio, before.bio);
        assert_eq!(after.skills, before.skills);
        assert_eq!(after.courses, before.courses);
    }

    #[test]
    fn updates_are_visible_after_reopening_the_store() {
        let mut store = DocumentStore::open(KvService::new(MemoryKvStore::new()));
        store.update(DocumentField::Bio("Short bio".into()));

        let reopened = DocumentStore::open(store.into_service());
        assert_eq!(reopened.document().bio, "Short bio");
    }

    #[test]
    fn corrupt_stored_document_falls_back_to_defaults() {
        let service = KvService::new(MemoryKvStore::new());
        service.save_str(DOCUMENT_KEY, "{not json at all").unwrap();

        let store = DocumentStore::open(service);
        assert_eq!(*store.document(), PortfolioData::default());
    }

    #[test]
    fn non_object_document_logs_and_falls_back_to_defaults() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl Write for Capture {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let sink = Arc::new(Mutex::new(Vec::new()));
        let writer = Capture(Arc::clone(&sink));
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .finish();

        let service = KvService::new(MemoryKvStore::new());
        service.save_str(DOCUMENT_KEY, "[1,2,3]").unwrap();

        let store =
            tracing::subscriber::with_default(subscriber, || DocumentStore::open(service));
        assert_eq!(*store.document(), PortfolioData::default());

        let logs = String::from_utf8(sink.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("not a JSON object"));
    }

    #[test]
    fn empty_storage_yields_the_defaults() {
        let store = DocumentStore::open(KvService::new(MemoryKvStore::new()));
        assert_eq!(*store.document(), PortfolioData::default());
    }

    /// Store whose writes always fail, for exercising the log-and-continue
    /// policy on persistence errors.
    struct ReadOnlyStore;

    impl crate::storage::KvStore for ReadOnlyStore {
        fn load_raw(&self, _key: &str) -> Result<Vec<u8>, StorageError> {
            Err(StorageError::NotFound)
        }
        fn save_raw(&self, _key: &str, _data: &[u8]) -> Result<(), StorageError> {
            Err(StorageError::Other("storage full".into()))
        }
        fn remove_raw(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_keeps_the_in_memory_document_authoritative() {
        let mut store = DocumentStore::open(KvService::new(ReadOnlyStore));
        store.update(DocumentField::Name("Ada".into()));
        assert_eq!(store.document().name, "Ada");
    }
}
