// SPDX-License-Identifier: Apache-2.0
// © Folio Contributors <https://github.com/folio-dev/folio>
//! Generic add/edit/remove logic shared by every editable collection.
//!
//! All operations are pure: collection in, collection out. The caller passes
//! the result to [`crate::store::DocumentStore::update`] as a whole new
//! collection; there is no element-level update primitive at the store layer.
//!
//! Ids are the creation-time wall clock in milliseconds rendered as a
//! string. Two items created within the same clock tick therefore collide;
//! `edit` then rewrites the first occurrence and `remove` drops every
//! occurrence. Skills carry no id at all and use the positional [`indexed`]
//! variant, which is fragile under any reordering between read and write.

use std::marker::PhantomData;
use std::time::{SystemTime, UNIX_EPOCH};

/// Render a millisecond timestamp as a collection-item id.
#[must_use]
pub fn id_from_millis(millis: u128) -> String {
    millis.to_string()
}

/// Generate a fresh item id from the current wall clock.
#[must_use]
pub fn fresh_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis());
    id_from_millis(millis)
}

/// Pure add/edit/remove over an id-bearing collection, parameterized by the
/// item type and an id-extraction function. Instantiated once per collection
/// (courses, certifications, ongoing works).
pub struct CollectionEditor<T, F>
where
    F: Fn(&T) -> &str,
{
    id_of: F,
    _items: PhantomData<fn(&T)>,
}

impl<T, F> CollectionEditor<T, F>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    /// Create an editor using `id_of` to read an item's id.
    pub fn new(id_of: F) -> Self {
        Self {
            id_of,
            _items: PhantomData,
        }
    }

    /// Append `item` to the end of the collection. Never fails; order is
    /// insertion order.
    pub fn add(&self, items: &[T], item: T) -> Vec<T> {
        let mut out = items.to_vec();
        out.push(item);
        out
    }

    /// Replace the first element whose id equals `id` with `replacement`.
    /// When no element matches, the collection is returned unchanged
    /// (no insert-on-miss).
    pub fn edit(&self, items: &[T], id: &str, replacement: T) -> Vec<T> {
        let mut out = items.to_vec();
        if let Some(index) = items.iter().position(|item| (self.id_of)(item) == id) {
            out[index] = replacement;
        }
        out
    }

    /// Filter out every element whose id equals `id`. Removing an absent id
    /// is a no-op.
    pub fn remove(&self, items: &[T], id: &str) -> Vec<T> {
        items
            .iter()
            .filter(|item| (self.id_of)(item) != id)
            .cloned()
            .collect()
    }
}

/// Index-based variant of the editor contract, used for skills, which carry
/// no id field. Identity is purely positional.
pub mod indexed {
    /// Append `item` to the end of the collection.
    pub fn add<T: Clone>(items: &[T], item: T) -> Vec<T> {
        let mut out = items.to_vec();
        out.push(item);
        out
    }

    /// Replace the element at `index` with `replacement`. An out-of-range
    /// index leaves the collection unchanged.
    pub fn edit<T: Clone>(items: &[T], index: usize, replacement: T) -> Vec<T> {
        let mut out = items.to_vec();
        if let Some(slot) = out.get_mut(index) {
            *slot = replacement;
        }
        out
    }

    /// Drop the element at `index`. An out-of-range index is a no-op.
    pub fn remove<T: Clone>(items: &[T], index: usize) -> Vec<T> {
        items
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != index)
            .map(|(_, item)| item.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::document::{Course, CourseStatus};

    fn course(id: &str, title: &str) -> Course {
        Course {
            id: id.into(),
            title: title.into(),
            institution: "X".into(),
            period: "2024".into(),
            status: CourseStatus::Completed,
        }
    }

    fn editor() -> CollectionEditor<Course, impl Fn(&Course) -> &str> {
        CollectionEditor::new(|course: &Course| course.id.as_str())
    }

    #[test]
    fn add_then_remove_restores_the_collection() {
        let original = vec![course("1", "CS"), course("2", "Math")];
        let fresh = course("1724500000000", "Physics");

        let editor = editor();
        let with_item = editor.add(&original, fresh.clone());
        assert_eq!(with_item.len(), 3);
        assert_eq!(with_item.last(), Some(&fresh));

        let restored = editor.remove(&with_item, &fresh.id);
        assert_eq!(restored, original);
    }

    #[test]
    fn edit_replaces_only_the_matching_item() {
        let items = vec![course("1", "CS"), course("2", "Math"), course("3", "Art")];
        let mut replacement = course("2", "Applied Math");
        replacement.institution = "Y".into();

        let edited = editor().edit(&items, "2", replacement.clone());
        assert_eq!(edited[0], items[0]);
        assert_eq!(edited[2], items[2]);
        assert_eq!(edited[1], replacement);
    }

    #[test]
    fn edit_of_an_absent_id_changes_nothing() {
        let items = vec![course("1", "CS")];
        let edited = editor().edit(&items, "404", course("404", "Ghost"));
        assert_eq!(edited, items);
    }

    #[test]
    fn remove_of_an_absent_id_is_a_no_op() {
        let items = vec![course("1", "CS")];
        assert_eq!(editor().remove(&items, "404"), items);
    }

    #[test]
    fn distinct_timestamps_yield_distinct_ids() {
        let ids: Vec<String> = (0..64).map(|tick| id_from_millis(1_700_000_000_000 + tick)).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn same_instant_ids_collide_and_first_match_wins() {
        // Two items created in the same clock tick share an id. This is a
        // documented property of the id scheme, not something the editor
        // prevents.
        let id = id_from_millis(1_700_000_000_000);
        let first = course(&id, "First");
        let second = course(&id, "Second");
        let items = vec![first, second.clone()];

        let editor = editor();
        let edited = editor.edit(&items, &id, course(&id, "Rewritten"));
        assert_eq!(edited[0].title, "Rewritten");
        assert_eq!(edited[1], second);

        // remove filters every occurrence of the shared id
        assert!(editor.remove(&items, &id).is_empty());
    }

    #[test]
    fn indexed_variant_edits_and_removes_by_position() {
        let items = vec!["a", "b", "c"];
        assert_eq!(indexed::add(&items, "d"), vec!["a", "b", "c", "d"]);
        assert_eq!(indexed::edit(&items, 1, "B"), vec!["a", "B", "c"]);
        assert_eq!(indexed::remove(&items, 0), vec!["b", "c"]);
    }

    #[test]
    fn indexed_variant_ignores_out_of_range_positions() {
        let items = vec!["a", "b"];
        assert_eq!(indexed::edit(&items, 9, "z"), items);
        assert_eq!(indexed::remove(&items, 9), items);
    }
}
