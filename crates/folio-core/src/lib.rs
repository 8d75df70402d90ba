// SPDX-License-Identifier: Apache-2.0
// © Folio Contributors <https://github.com/folio-dev/folio>
//! Core services for the Folio in-place portfolio editor: the document
//! model, its storage port, the edit-authorization gate, and the generic
//! collection editor shared by every editable list.
//! Keeps UI adapters thin and framework-agnostic.

pub mod auth;
pub mod chord;
pub mod collection;
pub mod document;
pub mod image;
pub mod prefs;
pub mod storage;
pub mod store;

pub use auth::{EditGate, ToggleOutcome, DEFAULT_EDIT_SECRET};
pub use chord::{KeyChord, KeyEvent, EDIT_MODE_CHORD};
pub use collection::{fresh_id, id_from_millis, CollectionEditor};
pub use document::{
    Certification, Contacts, Course, CourseStatus, OngoingWork, PortfolioData, Skill,
    SkillCategory, WorkStatus, MAX_SKILL_LEVEL,
};
pub use image::{read_data_url, ImageError};
pub use prefs::{Palette, Prefs, Theme};
pub use storage::{
    KvService, KvStore, MemoryKvStore, StorageError, DOCUMENT_KEY, EDIT_MODE_KEY, PALETTE_KEY,
    THEME_KEY,
};
pub use store::{DocumentField, DocumentStore};
