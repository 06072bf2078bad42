//! In-memory catalog of color swatches.
//!
//! The registry owns the canonical [`ColorRecord`]s. Everything it hands out
//! is a detached copy; edits only become visible through
//! [`ColorRegistry::commit_change`].

use std::collections::HashMap;

use thiserror::Error;

use crate::color_utils::distinct_palette;
use crate::model::{ColorId, ColorRecord};

/// Errors from registry mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A record with this identifier already exists
    #[error("Color {id} already exists in the catalog")]
    DuplicateId {
        /// The conflicting identifier
        id: ColorId,
    },
}

/// Ordered collection of color records, keyed by identifier.
///
/// Records are kept in a map for lookup and a separate vector for
/// insertion order; both always hold the same set of identifiers.
#[derive(Debug, Clone, Default)]
pub struct ColorRegistry {
    /// Canonical records, keyed by their ID.
    records: HashMap<ColorId, ColorRecord>,
    /// Insertion order, used for enumeration and export.
    order: Vec<ColorId>,
}

impl ColorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record with a freshly generated identifier and return it.
    ///
    /// Channels are stored as given, without range checks.
    pub fn add_new_color(
        &mut self,
        name: impl Into<String>,
        code: impl Into<String>,
        red: i32,
        green: i32,
        blue: i32,
    ) -> ColorId {
        let id = ColorId::new();
        self.insert_unchecked(ColorRecord::new(id, name, code, red, green, blue));
        log::debug!("Added color {} <{} {} {}>", id, red, green, blue);
        id
    }

    /// Append a record that keeps a caller-supplied identifier.
    pub fn add_color_with_id(
        &mut self,
        id: ColorId,
        name: impl Into<String>,
        code: impl Into<String>,
        red: i32,
        green: i32,
        blue: i32,
    ) -> Result<ColorId, RegistryError> {
        if self.records.contains_key(&id) {
            return Err(RegistryError::DuplicateId { id });
        }
        self.insert_unchecked(ColorRecord::new(id, name, code, red, green, blue));
        log::debug!("Added color {} <{} {} {}>", id, red, green, blue);
        Ok(id)
    }

    fn insert_unchecked(&mut self, record: ColorRecord) {
        self.order.push(record.id());
        self.records.insert(record.id(), record);
    }

    /// Detached copy of the record with `id`, or `None` if there is none.
    pub fn get_copy(&self, id: &ColorId) -> Option<ColorRecord> {
        self.records.get(id).cloned()
    }

    /// Whether a record with `id` exists.
    pub fn contains(&self, id: &ColorId) -> bool {
        self.records.contains_key(id)
    }

    /// Remove the record with `id`. Returns whether one was found.
    pub fn remove(&mut self, id: &ColorId) -> bool {
        if self.records.remove(id).is_none() {
            return false;
        }
        self.order.retain(|existing| existing != id);
        log::debug!("Removed color {}", id);
        true
    }

    /// Apply an edited copy back onto the canonical record with the same id.
    ///
    /// Returns `false` without creating anything when no such record exists.
    /// Last writer wins: a stale copy overwrites newer canonical values.
    pub fn commit_change(&mut self, record: &ColorRecord) -> bool {
        match self.records.get_mut(&record.id()) {
            Some(canonical) => {
                canonical.copy_from(record);
                log::trace!("Committed {}: {}", record.id(), canonical);
                true
            }
            None => {
                log::trace!("Commit for unknown color {} ignored", record.id());
                false
            }
        }
    }

    /// Copy out, mutate and commit in one step. Returns `false` on a miss.
    pub fn edit<F>(&mut self, id: &ColorId, f: F) -> bool
    where
        F: FnOnce(&mut ColorRecord),
    {
        let Some(mut copy) = self.get_copy(id) else {
            return false;
        };
        f(&mut copy);
        self.commit_change(&copy)
    }

    /// Rename the record with `id`.
    pub fn set_name(&mut self, id: &ColorId, name: impl Into<String>) -> bool {
        let name = name.into();
        self.edit(id, |record| record.name = name)
    }

    /// Change the catalog code of the record with `id`.
    pub fn set_code(&mut self, id: &ColorId, code: impl Into<String>) -> bool {
        let code = code.into();
        self.edit(id, |record| record.code = code)
    }

    /// Discard every record. Copies already handed out are unaffected.
    pub fn clear_all(&mut self) {
        self.records.clear();
        self.order.clear();
        log::debug!("Cleared color catalog");
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Snapshot of all identifiers in insertion order.
    ///
    /// The snapshot does not track later mutations; lookups of ids removed
    /// since the snapshot was taken simply return `None`.
    pub fn all_ids(&self) -> Vec<ColorId> {
        self.order.clone()
    }

    /// Detached copies of all records in insertion order.
    pub fn records(&self) -> Vec<ColorRecord> {
        self.iter().cloned().collect()
    }

    /// Borrowing iterator over canonical records in insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &ColorRecord> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Replace the whole catalog with `records`, keeping their order.
    ///
    /// Callers must guarantee the identifiers are unique.
    pub(crate) fn replace_all(&mut self, records: Vec<ColorRecord>) {
        self.records.clear();
        self.order.clear();
        self.order.reserve(records.len());
        for record in records {
            self.order.push(record.id());
            self.records.insert(record.id(), record);
        }
        debug_assert_eq!(self.records.len(), self.order.len());
    }

    /// Append `count` demo swatches named `name 1..` / `code 1..`.
    pub fn populate_examples(&mut self, count: usize) {
        for (i, (r, g, b)) in distinct_palette(count).into_iter().enumerate() {
            let n = i + 1;
            self.add_new_color(format!("name {}", n), format!("code {}", n), r, g, b);
        }
    }
}
