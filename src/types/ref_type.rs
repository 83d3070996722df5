//! Runtime type tags for document objects

use std::fmt;

/// Concrete kind of a live object
///
/// Every object in a document carries one of these tags. The type-erased
/// [`EntityRef`](super::EntityRef) is resolved back to a concrete kind by
/// comparing against this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RefType {
    /// Raster image placed on a page
    Image,
    /// Composite of two or more entities
    Group,
    /// Axis-aligned rectangle shape
    Rectangle,
    /// Layer definition
    Layer,
    /// Per-page (or shared) draw list of a layer
    LayerInstance,
    /// Document page
    Page,
    /// Attribute dictionary
    Dictionary,
    /// Tagged value container
    TypedValue,
    /// Font description
    Font,
    /// Application command metadata
    Command,
    /// Application instance description
    Application,
    /// Classification schema entries
    ClassificationInfo,
}

impl RefType {
    /// All kinds in tag order
    pub const ALL: [RefType; 12] = [
        RefType::Image,
        RefType::Group,
        RefType::Rectangle,
        RefType::Layer,
        RefType::LayerInstance,
        RefType::Page,
        RefType::Dictionary,
        RefType::TypedValue,
        RefType::Font,
        RefType::Command,
        RefType::Application,
        RefType::ClassificationInfo,
    ];

    /// Kind name as used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            RefType::Image => "Image",
            RefType::Group => "Group",
            RefType::Rectangle => "Rectangle",
            RefType::Layer => "Layer",
            RefType::LayerInstance => "LayerInstance",
            RefType::Page => "Page",
            RefType::Dictionary => "Dictionary",
            RefType::TypedValue => "TypedValue",
            RefType::Font => "Font",
            RefType::Command => "Command",
            RefType::Application => "Application",
            RefType::ClassificationInfo => "ClassificationInfo",
        }
    }

    /// Kinds that can be placed in a layer instance or a group
    pub const fn is_drawable(self) -> bool {
        matches!(self, RefType::Image | RefType::Group | RefType::Rectangle)
    }

    /// Kinds whose lifetime is governed by a reference count
    ///
    /// The remaining kinds are value-like: they have a single owner and are
    /// destroyed by the first release.
    pub const fn is_shareable(self) -> bool {
        !matches!(self, RefType::TypedValue | RefType::ClassificationInfo)
    }

    /// Stable numeric tag used by the C surface
    pub const fn to_code(self) -> i32 {
        match self {
            RefType::Image => 1,
            RefType::Group => 2,
            RefType::Rectangle => 3,
            RefType::Layer => 4,
            RefType::LayerInstance => 5,
            RefType::Page => 6,
            RefType::Dictionary => 7,
            RefType::TypedValue => 8,
            RefType::Font => 9,
            RefType::Command => 10,
            RefType::Application => 11,
            RefType::ClassificationInfo => 12,
        }
    }

    /// Inverse of [`RefType::to_code`]
    pub fn from_code(code: i32) -> Option<Self> {
        RefType::ALL.iter().copied().find(|t| t.to_code() == code)
    }
}

impl fmt::Display for RefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
