//! Attribute dictionary - named map of typed values attached to an object

use super::TypedValue;
use crate::error::{LayoutError, Result};
use crate::types::Handle;
use indexmap::IndexMap;

/// Attribute dictionary
///
/// Keys are unique UTF-8 strings. Lookup ignores insertion order;
/// enumeration follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    name: String,
    /// Object this dictionary is attached to, `NULL` while unattached
    pub(crate) owner: Handle,
    entries: IndexMap<String, TypedValue>,
}

impl Dictionary {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: Handle::NULL,
            entries: IndexMap::new(),
        }
    }

    /// Dictionary name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning object, if attached
    pub fn owner(&self) -> Option<Handle> {
        self.owner.is_valid().then_some(self.owner)
    }

    /// Insert or overwrite a value
    ///
    /// Overwriting keeps the key's original enumeration position.
    pub fn set(&mut self, key: impl Into<String>, value: TypedValue) -> Result<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(LayoutError::InvalidArgument(
                "dictionary key is empty".to_string(),
            ));
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Get a value, `NoData` when the key is absent
    pub fn get(&self, key: &str) -> Result<&TypedValue> {
        self.entries
            .get(key)
            .ok_or_else(|| LayoutError::NoData(format!("key '{}' not in '{}'", key, self.name)))
    }

    /// Remove a value, `NoData` when the key is absent
    pub fn remove(&mut self, key: &str) -> Result<TypedValue> {
        self.entries
            .shift_remove(key)
            .ok_or_else(|| LayoutError::NoData(format!("key '{}' not in '{}'", key, self.name)))
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
