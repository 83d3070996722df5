//! Group entity - ordered composite of other entities

use super::EntityCommon;
use crate::types::{AxisAlignedRect2D, EntityRef};

/// Group entity
///
/// A group owns an ordered list of child entities and holds one reference
/// on each of them. The document keeps the group at two or more children;
/// a group that drops below two is dissolved into its parent.
///
/// The child list is only mutated by the document, which keeps each
/// child's container pointer in sync with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub(crate) common: EntityCommon,
    /// Group name (may be empty)
    pub name: String,
    pub(crate) children: Vec<EntityRef>,
}

impl Group {
    /// Minimum number of children a group keeps
    pub const MIN_CHILDREN: usize = 2;

    pub(crate) fn new(bounds: AxisAlignedRect2D, children: Vec<EntityRef>) -> Self {
        Self {
            common: EntityCommon::new(bounds),
            name: String::new(),
            children,
        }
    }

    pub fn common(&self) -> &EntityCommon {
        &self.common
    }

    /// Children in draw order
    pub fn children(&self) -> &[EntityRef] {
        &self.children
    }

    /// Get the number of children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the group has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if the group directly contains an entity
    pub fn contains(&self, entity: EntityRef) -> bool {
        self.children.contains(&entity)
    }

    /// Index of a direct child
    pub fn position(&self, entity: EntityRef) -> Option<usize> {
        self.children.iter().position(|c| *c == entity)
    }

    /// Get a child by index
    pub fn get(&self, index: usize) -> Option<EntityRef> {
        self.children.get(index).copied()
    }

    /// Iterate over children
    pub fn iter(&self) -> impl Iterator<Item = &EntityRef> {
        self.children.iter()
    }

    /// True when the group has fallen below [`Group::MIN_CHILDREN`]
    pub fn needs_dissolve(&self) -> bool {
        self.children.len() < Self::MIN_CHILDREN
    }
}
