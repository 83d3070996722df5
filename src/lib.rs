//! # layoutrs
//!
//! A pure Rust document-object model for 2D page layout documents.
//!
//! Every object (images, rectangles, groups, layers, pages, attribute
//! dictionaries, fonts, ...) lives in a [`Document`] and is reached through
//! a small `Copy` reference carrying a generational handle. References
//! never dangle: once an object is destroyed, every copy of its reference
//! stops resolving and operations on it fail with `InvalidInput`.
//!
//! ## Features
//!
//! - Explicit reference counting: create, add-reference, release
//! - Type-checked upcast to [`EntityRef`] and downcast back
//! - Named attribute dictionaries of typed values on any object
//! - Ordered containment: layer draw order, nested groups with
//!   automatic dissolve, reorder and ungroup
//! - Pages with shared and per-page layers
//! - Images from PNG, JPEG, BMP and GIF files
//! - A C ABI in [`ffi`] with closed result codes
//!
//! ## Quick Start
//!
//! ```rust
//! use layoutrs::{Document, types::{AxisAlignedRect2D, ObjectRef}};
//!
//! let mut doc = Document::new();
//! let layer = doc.layer_by_name("Default")?;
//! let page = doc.pages()[0];
//!
//! let a = doc.create_rectangle(AxisAlignedRect2D::from_xywh(0.0, 0.0, 2.0, 1.0))?;
//! let b = doc.create_rectangle(AxisAlignedRect2D::from_xywh(3.0, 0.0, 2.0, 1.0))?;
//! doc.add_entity(a, layer, Some(page))?;
//! doc.add_entity(b, layer, Some(page))?;
//!
//! let group = doc.create_group(&[a.upcast(), b.upcast()])?;
//! assert_eq!(doc.group_child_count(group)?, 2);
//!
//! let meta = doc.attribute_dictionary(group, "meta")?;
//! doc.dictionary_set(meta, "author", "ann")?;
//! # Ok::<(), layoutrs::LayoutError>(())
//! ```

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod ffi;
pub mod io;
pub mod notification;
pub mod objects;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{ErrorKind, LayoutError, Result};
pub use types::{
    AxisAlignedRect2D, Color, EntityRef, Handle, ObjectRef, RefType, Transform2D, Vector2,
    Vector3,
};

// Re-export entity types
pub use entities::{Container, EntityFlags, Group, Image, Rectangle};

// Re-export object types
pub use objects::{Dictionary, ObjectType, TypedValue, TypedValueType};

// Re-export table types
pub use tables::{Layer, LayerInstance, Page};

// Re-export document
pub use document::{Document, DocumentConfiguration, DocumentStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
