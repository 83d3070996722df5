//! Classification info - schema types applied to an object

use crate::error::{LayoutError, Result};

/// One applied classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationEntry {
    /// Schema name, e.g. `"IFC 2x3"`
    pub schema_name: String,
    /// Type within the schema, e.g. `"IfcWall"`
    pub schema_type: String,
    /// Attribute path inside the type, outermost first
    pub attribute_path: Vec<String>,
}

impl ClassificationEntry {
    pub fn new(schema_name: impl Into<String>, schema_type: impl Into<String>) -> Self {
        Self {
            schema_name: schema_name.into(),
            schema_type: schema_type.into(),
            attribute_path: Vec::new(),
        }
    }

    /// Builder: set the attribute path
    pub fn with_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute_path = path.into_iter().map(Into::into).collect();
        self
    }
}

/// Ordered list of classifications
///
/// Value-like: one owner, destroyed by its first release.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassificationInfo {
    entries: Vec<ClassificationEntry>,
}

impl ClassificationInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; a schema may classify an object only once
    pub fn add_entry(&mut self, entry: ClassificationEntry) -> Result<()> {
        if entry.schema_name.is_empty() || entry.schema_type.is_empty() {
            return Err(LayoutError::InvalidArgument(
                "schema name and type are required".to_string(),
            ));
        }
        if self.entries.iter().any(|e| e.schema_name == entry.schema_name) {
            return Err(LayoutError::Duplicate(format!(
                "schema '{}' already applied",
                entry.schema_name
            )));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entry by index, `OutOfRange` past the end
    pub fn entry(&self, index: usize) -> Result<&ClassificationEntry> {
        self.entries.get(index).ok_or_else(|| {
            LayoutError::OutOfRange(format!(
                "entry {} of {}",
                index,
                self.entries.len()
            ))
        })
    }

    pub fn entries(&self) -> &[ClassificationEntry] {
        &self.entries
    }
}
