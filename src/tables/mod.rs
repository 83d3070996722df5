//! Document structure tables: layers, layer instances and pages

use crate::error::{LayoutError, Result};
use crate::types::ObjectRef;
use indexmap::IndexMap;

pub mod layer;
pub mod page;

pub use layer::{Layer, LayerFlags, LayerInstance};
pub use page::Page;

/// Ordered name index over document objects
///
/// Names are unique case-insensitively. The table keeps the order objects
/// were added in, and that order is meaningful: for layers it is the
/// stacking order, first = bottom.
#[derive(Debug, Clone)]
pub struct NamedTable<R: ObjectRef> {
    entries: IndexMap<String, R>,
}

impl<R: ObjectRef> NamedTable<R> {
    /// Create a new empty table
    pub fn new() -> Self {
        NamedTable {
            entries: IndexMap::new(),
        }
    }

    fn key(name: &str) -> String {
        name.to_uppercase()
    }

    /// Add an entry, `Duplicate` when the name is taken
    pub fn add(&mut self, name: &str, r: R) -> Result<()> {
        let key = Self::key(name);
        if self.entries.contains_key(&key) {
            return Err(LayoutError::Duplicate(format!(
                "'{}' already exists in table",
                name
            )));
        }
        self.entries.insert(key, r);
        Ok(())
    }

    /// Get an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<R> {
        self.entries.get(&Self::key(name)).copied()
    }

    /// Remove an entry, keeping the order of the rest
    pub fn remove(&mut self, r: R) -> bool {
        match self.position(r) {
            Some(index) => {
                self.entries.shift_remove_index(index);
                true
            }
            None => false,
        }
    }

    /// Rename an entry, `Duplicate` when the new name is taken by another
    pub fn rename(&mut self, r: R, new_name: &str) -> Result<()> {
        let key = Self::key(new_name);
        if let Some(existing) = self.entries.get(&key) {
            if *existing != r {
                return Err(LayoutError::Duplicate(format!(
                    "'{}' already exists in table",
                    new_name
                )));
            }
        }
        let index = self
            .position(r)
            .ok_or_else(|| LayoutError::InvalidInput(format!("{:?} not in table", r)))?;
        self.entries.shift_remove_index(index);
        self.entries.shift_insert(index, key, r);
        Ok(())
    }

    /// Check if a name exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&Self::key(name))
    }

    /// Position of an entry in table order
    pub fn position(&self, r: R) -> Option<usize> {
        self.entries.values().position(|v| *v == r)
    }

    /// Move an entry to a new position, shifting the others
    pub fn move_to(&mut self, r: R, index: usize) -> Result<()> {
        let from = self
            .position(r)
            .ok_or_else(|| LayoutError::InvalidArgument(format!("{:?} not in table", r)))?;
        if index >= self.entries.len() {
            return Err(LayoutError::OutOfRange(format!(
                "index {} of {}",
                index,
                self.entries.len()
            )));
        }
        self.entries.move_index(from, index);
        Ok(())
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in table order
    pub fn iter(&self) -> impl Iterator<Item = R> + '_ {
        self.entries.values().copied()
    }
}

impl<R: ObjectRef> Default for NamedTable<R> {
    fn default() -> Self {
        Self::new()
    }
}
