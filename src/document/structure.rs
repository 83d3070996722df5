//! Pages, layers and layer instances
//!
//! The document holds the only structural reference to each page and layer
//! definition, and each layer holds its instances. References handed out
//! by this module are borrowed: they stay valid until the page or layer is
//! removed, and need no release.

use super::Document;
use crate::error::{LayoutError, Result};
use crate::objects::ObjectType;
use crate::tables::{Layer, LayerInstance, Page};
use crate::types::{LayerInstanceRef, LayerRef, ObjectRef, PageRef};
use tracing::debug;

impl Document {
    pub(crate) fn insert_page(&mut self, name: &str) -> PageRef {
        let page = PageRef::from_handle(self.arena.insert(ObjectType::Page(Page::new(name))));
        self.pages.push(page);

        let unshared: Vec<LayerRef> = self
            .layers
            .iter()
            .filter(|l| matches!(self.get(*l), Ok(layer) if !layer.is_shared()))
            .collect();
        for layer in unshared {
            self.insert_instance(layer, Some(page));
        }
        debug!("Created page '{}' {}", name, page);
        page
    }

    pub(crate) fn insert_layer(&mut self, name: &str, shared: bool) -> LayerRef {
        let layer = LayerRef::from_handle(
            self.arena
                .insert(ObjectType::Layer(Layer::new(name, shared))),
        );
        self.layers.add(name, layer).ok();
        self.create_instances(layer, shared);
        debug!("Created layer '{}' {} (shared: {})", name, layer, shared);
        layer
    }

    fn create_instances(&mut self, layer: LayerRef, shared: bool) {
        if shared {
            self.insert_instance(layer, None);
        } else {
            for page in self.pages.clone() {
                self.insert_instance(layer, Some(page));
            }
        }
    }

    fn insert_instance(&mut self, layer: LayerRef, page: Option<PageRef>) -> LayerInstanceRef {
        let instance = LayerInstanceRef::from_handle(
            self.arena
                .insert(ObjectType::LayerInstance(LayerInstance::new(layer, page))),
        );
        if let Ok(l) = self.get_mut(layer) {
            l.instances.push(instance);
        }
        instance
    }

    // ---- pages ----

    /// Append a page
    ///
    /// Every non-shared layer gets an instance on the new page.
    pub fn add_page(&mut self, name: &str) -> Result<PageRef> {
        if name.is_empty() {
            return Err(LayoutError::InvalidArgument("page name is empty".to_string()));
        }
        Ok(self.insert_page(name))
    }

    /// Remove a page along with its non-shared layer instances
    ///
    /// Entities on those instances lose the instance's reference. The last
    /// page cannot be removed.
    pub fn remove_page(&mut self, page: PageRef) -> Result<()> {
        self.check(page)?;
        let index = self
            .pages
            .iter()
            .position(|p| *p == page)
            .ok_or_else(|| LayoutError::InvalidInput(format!("{} is not in this document", page)))?;
        if self.pages.len() == 1 {
            return Err(LayoutError::Generic(
                "cannot remove the last page".to_string(),
            ));
        }

        let mut doomed = Vec::new();
        for layer in self.layers.iter() {
            let instances = &self.get(layer)?.instances;
            doomed.extend(
                instances
                    .iter()
                    .copied()
                    .filter(|i| instance_page(&self.arena, *i) == Some(page)),
            );
        }
        for layer in self.layers.iter().collect::<Vec<_>>() {
            self.get_mut(layer)?.instances.retain(|i| !doomed.contains(i));
        }
        for instance in doomed {
            self.force_destroy(instance.handle());
        }

        self.pages.remove(index);
        self.force_destroy(page.handle());
        debug!("Removed page {}", page);
        Ok(())
    }

    /// Pages in presentation order
    pub fn pages(&self) -> &[PageRef] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Index of a page in presentation order
    pub fn page_index(&self, page: PageRef) -> Result<usize> {
        self.check(page)?;
        self.pages
            .iter()
            .position(|p| *p == page)
            .ok_or_else(|| LayoutError::InvalidInput(format!("{} is not in this document", page)))
    }

    // ---- layers ----

    /// Add a layer on top of the stack
    ///
    /// Names are unique without regard to case.
    pub fn add_layer(&mut self, name: &str, shared: bool) -> Result<LayerRef> {
        if name.is_empty() {
            return Err(LayoutError::InvalidArgument("layer name is empty".to_string()));
        }
        if self.layers.contains(name) {
            return Err(LayoutError::Duplicate(format!(
                "layer '{}' already exists",
                name
            )));
        }
        Ok(self.insert_layer(name, shared))
    }

    /// Remove a layer and every instance of it
    ///
    /// The last layer cannot be removed.
    pub fn remove_layer(&mut self, layer: LayerRef) -> Result<()> {
        self.check(layer)?;
        if self.layers.len() == 1 {
            return Err(LayoutError::Generic(
                "cannot remove the last layer".to_string(),
            ));
        }
        self.layers.remove(layer);
        self.force_destroy(layer.handle());
        debug!("Removed layer {}", layer);
        Ok(())
    }

    /// Layers in stacking order, bottom first
    pub fn layers(&self) -> impl Iterator<Item = LayerRef> + '_ {
        self.layers.iter()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Look up a layer by name (case-insensitive); `NoData` when absent
    pub fn layer_by_name(&self, name: &str) -> Result<LayerRef> {
        self.layers
            .get(name)
            .ok_or_else(|| LayoutError::NoData(format!("no layer named '{}'", name)))
    }

    pub fn rename_layer(&mut self, layer: LayerRef, name: &str) -> Result<()> {
        self.check(layer)?;
        if name.is_empty() {
            return Err(LayoutError::InvalidArgument("layer name is empty".to_string()));
        }
        self.layers.rename(layer, name)?;
        self.get_mut(layer)?.name = name.to_string();
        Ok(())
    }

    /// Move a layer to a new stacking position
    pub fn reorder_layer(&mut self, layer: LayerRef, index: usize) -> Result<()> {
        self.check(layer)?;
        self.layers.move_to(layer, index)
    }

    pub fn layer_index(&self, layer: LayerRef) -> Result<usize> {
        self.check(layer)?;
        self.layers
            .position(layer)
            .ok_or_else(|| LayoutError::InvalidInput(format!("{} is not in this document", layer)))
    }

    /// Instance of a layer holding its entities for a page
    ///
    /// Shared layers ignore `page`. Non-shared layers need one
    /// (`InvalidArgument` when missing).
    pub fn layer_instance(&self, layer: LayerRef, page: Option<PageRef>) -> Result<LayerInstanceRef> {
        let definition = self.get(layer)?;
        if definition.is_shared() {
            return definition
                .instances
                .first()
                .copied()
                .ok_or_else(|| LayoutError::NoData(format!("{} has no instance", layer)));
        }
        let page = page.ok_or_else(|| {
            LayoutError::InvalidArgument(format!(
                "layer '{}' is not shared; a page is required",
                definition.name()
            ))
        })?;
        self.check(page)?;
        definition
            .instances
            .iter()
            .copied()
            .find(|i| instance_page(&self.arena, *i) == Some(page))
            .ok_or_else(|| LayoutError::InvalidInput(format!("{} is not in this document", page)))
    }

    /// Switch a layer between shared and per-page scoping
    ///
    /// Only allowed while no instance of the layer holds entities.
    pub fn set_layer_shared(&mut self, layer: LayerRef, shared: bool) -> Result<()> {
        let definition = self.get(layer)?;
        if definition.is_shared() == shared {
            return Ok(());
        }
        let instances = definition.instances.clone();
        for instance in &instances {
            if !self.get(*instance)?.is_empty() {
                return Err(LayoutError::Generic(format!(
                    "layer '{}' holds entities",
                    definition.name()
                )));
            }
        }

        for instance in instances {
            self.force_destroy(instance.handle());
        }
        let definition = self.get_mut(layer)?;
        definition.instances.clear();
        definition.shared = shared;
        self.create_instances(layer, shared);
        debug!("Layer {} is now shared: {}", layer, shared);
        Ok(())
    }
}

fn instance_page(arena: &super::arena::Arena, instance: LayerInstanceRef) -> Option<PageRef> {
    match arena.get(instance.handle()) {
        Some(ObjectType::LayerInstance(i)) => i.page(),
        _ => None,
    }
}
