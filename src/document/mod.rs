//! Layout document
//!
//! The [`Document`] owns every object in one generational arena and is the
//! only way to reach them: callers hold typed references ([`ImageRef`],
//! [`GroupRef`], ...) and pass them back to the document, which checks
//! them before touching any state.
//!
//! The implementation is split by concern:
//! - `lifecycle`: factories, reference counting, type dispatch
//! - `structure`: pages, layers and layer instances
//! - `attributes`: attribute dictionaries and typed values
//! - `containment`: draw order, groups and entity accessors

mod arena;
mod attributes;
mod containment;
mod lifecycle;
mod structure;

pub use arena::Payload;

use crate::error::{LayoutError, Result};
use crate::notification::NotificationCollection;
use crate::objects::ObjectType;
use crate::tables::NamedTable;
use crate::types::{EntityRef, Handle, LayerRef, ObjectRef, PageRef, RefType};
use arena::Arena;

/// Settings applied when a document is created
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentConfiguration {
    /// Number of arena slots reserved up front
    pub initial_capacity: usize,
    /// Name of the page created with the document
    pub default_page_name: String,
    /// Name of the layer created with the document
    pub default_layer_name: String,
    /// Create a first page along with the document
    pub create_default_page: bool,
    /// Largest image file accepted by `create_image_from_file`
    pub max_image_bytes: usize,
}

impl Default for DocumentConfiguration {
    fn default() -> Self {
        DocumentConfiguration {
            initial_capacity: 64,
            default_page_name: "Page 1".to_string(),
            default_layer_name: "Default".to_string(),
            create_default_page: true,
            max_image_bytes: 64 * 1024 * 1024,
        }
    }
}

/// Object lifecycle counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    /// Objects ever created
    pub created: u64,
    /// Objects destroyed
    pub destroyed: u64,
    /// Objects currently alive
    pub live: usize,
}

/// A layout document
///
/// # Example
/// ```
/// use layoutrs::{Document, types::AxisAlignedRect2D};
///
/// let mut doc = Document::new();
/// let layer = doc.layers().next().unwrap();
/// let page = doc.pages()[0];
///
/// let rect = doc.create_rectangle(AxisAlignedRect2D::from_xywh(0.0, 0.0, 2.0, 1.0)).unwrap();
/// doc.add_entity(rect, layer, Some(page)).unwrap();
/// assert!(doc.entity_is_in_document(rect).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    config: DocumentConfiguration,
    arena: Arena,
    /// Pages in presentation order
    pages: Vec<PageRef>,
    /// Layers in stacking order, first = bottom
    layers: NamedTable<LayerRef>,
    notifications: NotificationCollection,
}

impl Document {
    /// Create a document with the default configuration
    pub fn new() -> Self {
        Self::with_configuration(DocumentConfiguration::default())
    }

    /// Create a document with a custom configuration
    pub fn with_configuration(config: DocumentConfiguration) -> Self {
        let mut doc = Document {
            arena: Arena::with_capacity(config.initial_capacity),
            pages: Vec::new(),
            layers: NamedTable::new(),
            notifications: NotificationCollection::new(),
            config,
        };
        doc.initialize_defaults();
        doc
    }

    fn initialize_defaults(&mut self) {
        if self.config.create_default_page {
            let name = self.config.default_page_name.clone();
            self.insert_page(&name);
        }
        let name = self.config.default_layer_name.clone();
        self.insert_layer(&name, false);
    }

    pub fn configuration(&self) -> &DocumentConfiguration {
        &self.config
    }

    /// Non-fatal events recorded by document operations
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            created: self.arena.created(),
            destroyed: self.arena.destroyed(),
            live: self.arena.live(),
        }
    }

    /// Check whether a reference resolves to a live object of its kind
    pub fn is_alive<R: ObjectRef>(&self, r: R) -> bool {
        self.arena
            .get(r.handle())
            .map_or(false, |o| o.ref_type() == R::REF_TYPE)
    }

    /// Check whether an entity reference resolves to any live object
    pub fn is_entity_alive(&self, entity: EntityRef) -> bool {
        self.arena.is_alive(entity.handle())
    }

    /// Current reference count, for diagnostics only
    pub fn reference_count(&self, entity: impl Into<EntityRef>) -> Result<u32> {
        let entity = entity.into();
        self.arena
            .slot(entity.handle())
            .map(|s| s.ref_count)
            .ok_or_else(|| stale(entity.handle()))
    }

    /// Runtime tag of a live object
    pub fn ref_type(&self, entity: impl Into<EntityRef>) -> Result<RefType> {
        self.object(entity.into().handle()).map(ObjectType::ref_type)
    }

    /// Borrow the payload behind a typed reference
    pub fn get<R: Payload>(&self, r: R) -> Result<&R::Target> {
        let object = self.object(r.handle())?;
        R::payload(object).ok_or_else(|| kind_mismatch(r.handle(), R::REF_TYPE, object))
    }

    /// Mutably borrow the payload behind a typed reference
    pub fn get_mut<R: Payload>(&mut self, r: R) -> Result<&mut R::Target> {
        let handle = r.handle();
        let object = self.arena.get_mut(handle).ok_or_else(|| stale(handle))?;
        let actual = object.ref_type();
        R::payload_mut(object).ok_or_else(|| {
            LayoutError::InvalidInput(format!(
                "{} refers to a {}, not a {}",
                handle,
                actual,
                R::REF_TYPE
            ))
        })
    }

    pub(crate) fn object(&self, handle: Handle) -> Result<&ObjectType> {
        self.arena.get(handle).ok_or_else(|| stale(handle))
    }

    pub(crate) fn object_mut(&mut self, handle: Handle) -> Result<&mut ObjectType> {
        self.arena.get_mut(handle).ok_or_else(|| stale(handle))
    }

    /// Check that a typed reference is live and of its own kind
    pub(crate) fn check<R: ObjectRef>(&self, r: R) -> Result<()> {
        let object = self.object(r.handle())?;
        if object.ref_type() != R::REF_TYPE {
            return Err(kind_mismatch(r.handle(), R::REF_TYPE, object));
        }
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn stale(handle: Handle) -> LayoutError {
    if handle.is_null() {
        LayoutError::InvalidInput("handle is invalid".to_string())
    } else {
        LayoutError::InvalidInput(format!("{} does not reference a live object", handle))
    }
}

fn kind_mismatch(handle: Handle, expected: RefType, object: &ObjectType) -> LayoutError {
    LayoutError::InvalidInput(format!(
        "{} refers to a {}, not a {}",
        handle,
        object.ref_type(),
        expected
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::{AxisAlignedRect2D, FontRef, RectangleRef};

    #[test]
    fn test_default_document() {
        let doc = Document::new();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.layer_count(), 1);
        let page = doc.pages()[0];
        assert_eq!(doc.get(page).unwrap().name(), "Page 1");
        let layer = doc.layer_by_name("default").unwrap();
        assert!(!doc.get(layer).unwrap().is_shared());
        assert_eq!(doc.get(layer).unwrap().instances().len(), 1);
        assert!(doc.notifications().is_empty());
    }

    #[test]
    fn test_custom_configuration() {
        let doc = Document::with_configuration(DocumentConfiguration {
            create_default_page: false,
            default_layer_name: "Base".to_string(),
            ..Default::default()
        });
        assert_eq!(doc.page_count(), 0);
        assert!(doc.layer_by_name("Base").is_ok());
        assert_eq!(doc.configuration().initial_capacity, 64);
    }

    #[test]
    fn test_get_checks_kind() {
        let mut doc = Document::new();
        let rect = doc
            .create_rectangle(AxisAlignedRect2D::from_xywh(0.0, 0.0, 1.0, 1.0))
            .unwrap();
        let forged = FontRef::from_handle(rect.handle());
        assert_eq!(doc.get(forged).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert!(!doc.is_alive(forged));
        assert!(doc.is_alive(rect));
    }

    #[test]
    fn test_invalid_handle_is_invalid_input() {
        let doc = Document::new();
        let err = doc.get(RectangleRef::invalid()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            doc.ref_type(EntityRef::invalid()).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_stats_track_lifecycle() {
        let mut doc = Document::new();
        let before = doc.stats();
        let mut rect = doc
            .create_rectangle(AxisAlignedRect2D::from_xywh(0.0, 0.0, 1.0, 1.0))
            .unwrap();
        assert_eq!(doc.stats().live, before.live + 1);
        doc.release(&mut rect).unwrap();
        let after = doc.stats();
        assert_eq!(after.created, before.created + 1);
        assert_eq!(after.destroyed, before.destroyed + 1);
        assert_eq!(after.live, before.live);
    }
}
