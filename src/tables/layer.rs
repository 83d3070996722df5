//! Layer definitions and layer instances

use crate::types::{EntityRef, LayerInstanceRef, LayerRef, PageRef};

/// Layer flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerFlags {
    /// Entities on the layer cannot be edited
    pub locked: bool,
    /// Layer is not drawn
    pub hidden: bool,
    /// Layer is drawn on screen but not printed
    pub non_printing: bool,
}

/// A layer definition
///
/// A shared layer has one instance for the whole document; a non-shared
/// layer has one instance per page.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub(crate) name: String,
    pub(crate) shared: bool,
    /// Layer flags
    pub flags: LayerFlags,
    pub(crate) instances: Vec<LayerInstanceRef>,
}

impl Layer {
    pub(crate) fn new(name: impl Into<String>, shared: bool) -> Self {
        Layer {
            name: name.into(),
            shared,
            flags: LayerFlags::default(),
            instances: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_shared(&self) -> bool {
        self.shared
    }

    /// All instances: exactly one when shared, one per page otherwise
    pub fn instances(&self) -> &[LayerInstanceRef] {
        &self.instances
    }

    pub fn lock(&mut self) {
        self.flags.locked = true;
    }

    pub fn unlock(&mut self) {
        self.flags.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.flags.locked
    }

    /// Check if the layer is drawn
    pub fn is_visible(&self) -> bool {
        !self.flags.hidden
    }
}

/// A layer's draw list
///
/// Entities are stored bottom to top: index 0 is drawn first.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerInstance {
    pub(crate) layer: LayerRef,
    /// Page for non-shared layers, `None` for the shared instance
    pub(crate) page: Option<PageRef>,
    pub(crate) entities: Vec<EntityRef>,
}

impl LayerInstance {
    pub(crate) fn new(layer: LayerRef, page: Option<PageRef>) -> Self {
        LayerInstance {
            layer,
            page,
            entities: Vec::new(),
        }
    }

    /// Layer definition this is an instance of
    pub fn layer(&self) -> LayerRef {
        self.layer
    }

    /// Page of a non-shared instance
    pub fn page(&self) -> Option<PageRef> {
        self.page
    }

    pub fn is_shared(&self) -> bool {
        self.page.is_none()
    }

    /// Entities in draw order
    pub fn entities(&self) -> &[EntityRef] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, entity: EntityRef) -> bool {
        self.entities.contains(&entity)
    }

    pub fn position(&self, entity: EntityRef) -> Option<usize> {
        self.entities.iter().position(|e| *e == entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Handle, ObjectRef};

    #[test]
    fn test_layer_creation() {
        let layer = Layer::new("Notes", true);
        assert_eq!(layer.name(), "Notes");
        assert!(layer.is_shared());
        assert!(layer.instances().is_empty());
        assert!(layer.is_visible());
    }

    #[test]
    fn test_layer_lock() {
        let mut layer = Layer::new("Default", false);
        layer.lock();
        assert!(layer.is_locked());
        layer.unlock();
        assert!(!layer.is_locked());
    }

    #[test]
    fn test_instance_scope() {
        let layer = LayerRef::from_handle(Handle::new(1, 1));
        let page = PageRef::from_handle(Handle::new(2, 1));
        assert!(LayerInstance::new(layer, None).is_shared());
        let inst = LayerInstance::new(layer, Some(page));
        assert!(!inst.is_shared());
        assert_eq!(inst.page(), Some(page));
        assert_eq!(inst.layer(), layer);
        assert!(inst.is_empty());
    }
}
