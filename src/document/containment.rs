//! Draw order, groups and entity accessors
//!
//! Entities live in exactly one container at a time: the draw list of a
//! layer instance or the child list of a group. The container holds one
//! reference on each member and the member records its container, and both
//! sides are only changed together here.

use super::Document;
use crate::entities::{Container, EntityCommon, EntityFlags, Group};
use crate::error::{LayoutError, Result};
use crate::notification::NotificationType;
use crate::objects::ObjectType;
use crate::types::{
    AxisAlignedRect2D, EntityRef, GroupRef, LayerInstanceRef, LayerRef, ObjectRef, PageRef,
    Transform2D,
};
use ahash::AHashSet;
use tracing::debug;

impl Document {
    fn entity_common(&self, entity: EntityRef) -> Result<&EntityCommon> {
        let object = self.object(entity.handle())?;
        object.common().ok_or_else(|| {
            LayoutError::InvalidArgument(format!(
                "{} is a {}, not a drawable entity",
                entity,
                object.ref_type()
            ))
        })
    }

    fn entity_common_mut(&mut self, entity: EntityRef) -> Result<&mut EntityCommon> {
        let object = self.object_mut(entity.handle())?;
        let kind = object.ref_type();
        object.common_mut().ok_or_else(|| {
            LayoutError::InvalidArgument(format!(
                "{} is a {}, not a drawable entity",
                entity, kind
            ))
        })
    }

    fn set_container(&mut self, entity: EntityRef, container: Option<Container>) {
        if let Ok(common) = self.entity_common_mut(entity) {
            common.container = container;
        }
    }

    pub(crate) fn members(&self, container: Container) -> Result<&Vec<EntityRef>> {
        match container {
            Container::LayerInstance(i) => Ok(&self.get(i)?.entities),
            Container::Group(g) => Ok(&self.get(g)?.children),
        }
    }

    fn members_mut(&mut self, container: Container) -> Result<&mut Vec<EntityRef>> {
        match container {
            Container::LayerInstance(i) => Ok(&mut self.get_mut(i)?.entities),
            Container::Group(g) => Ok(&mut self.get_mut(g)?.children),
        }
    }

    /// Layer instance at the top of an entity's container chain
    fn root_instance(&self, entity: EntityRef) -> Result<Option<LayerInstanceRef>> {
        let mut current = self.entity_common(entity)?.container;
        while let Some(container) = current {
            match container {
                Container::LayerInstance(i) => return Ok(Some(i)),
                Container::Group(g) => current = self.get(g)?.common.container,
            }
        }
        Ok(None)
    }

    /// `None` outside a document, otherwise the page of a non-shared
    /// layer (`Some(None)` on a shared layer)
    fn layer_scope(&self, entity: EntityRef) -> Result<Option<Option<PageRef>>> {
        match self.root_instance(entity)? {
            Some(instance) => Ok(Some(self.get(instance)?.page())),
            None => Ok(None),
        }
    }

    // ---- placement ----

    /// Place an unattached entity on top of a layer's draw order
    ///
    /// `page` selects the instance of a non-shared layer and is ignored
    /// for shared layers.
    pub fn add_entity(
        &mut self,
        entity: impl Into<EntityRef>,
        layer: LayerRef,
        page: Option<PageRef>,
    ) -> Result<()> {
        let entity = entity.into();
        if let Some(container) = self.entity_common(entity)?.container {
            return Err(LayoutError::Generic(format!(
                "{} is already placed in {:?}",
                entity, container
            )));
        }
        let instance = self.layer_instance(layer, page)?;
        self.get_mut(instance)?.entities.push(entity);
        self.set_container(entity, Some(Container::LayerInstance(instance)));
        self.bump(entity.handle());
        Ok(())
    }

    /// Detach an entity from its container, dropping the container's
    /// reference
    ///
    /// A group left with fewer than two children dissolves.
    pub fn remove_entity(&mut self, entity: impl Into<EntityRef>) -> Result<()> {
        let entity = entity.into();
        let container = self.entity_common(entity)?.container.ok_or_else(|| {
            LayoutError::InvalidArgument(format!("{} is not in a container", entity))
        })?;
        let members = self.members_mut(container)?;
        if let Some(index) = members.iter().position(|m| *m == entity) {
            members.remove(index);
        }
        self.set_container(entity, None);
        self.settle(container);
        self.release_handles(vec![entity.handle()]);
        Ok(())
    }

    /// Move a member to `index` within its container
    ///
    /// Members after the old and new positions shift, keeping indices
    /// contiguous. A non-member is `InvalidArgument`, `index >= len` is
    /// `OutOfRange`.
    pub fn reorder_entity(
        &mut self,
        container: impl Into<Container>,
        entity: impl Into<EntityRef>,
        index: usize,
    ) -> Result<()> {
        let container = container.into();
        let entity = entity.into();
        self.members(container)?;
        self.object(entity.handle())?;

        let members = self.members_mut(container)?;
        let from = members.iter().position(|m| *m == entity).ok_or_else(|| {
            LayoutError::InvalidArgument(format!("{} is not a member of {:?}", entity, container))
        })?;
        if index >= members.len() {
            return Err(LayoutError::OutOfRange(format!(
                "index {} in a container of {}",
                index,
                members.len()
            )));
        }
        let moved = members.remove(from);
        members.insert(index, moved);
        Ok(())
    }

    /// Draw list of a layer instance, bottom first
    pub fn layer_instance_entities(&self, instance: LayerInstanceRef) -> Result<&[EntityRef]> {
        Ok(&self.get(instance)?.entities)
    }

    // ---- groups ----

    /// Group two or more entities
    ///
    /// All entities must be live drawables, listed once, with no entity
    /// listed next to one of its own ancestors. They must be all outside a
    /// document or all inside one, and then all on shared layers or all on
    /// non-shared layers of one page. Any violation is `Generic` and leaves
    /// the document unchanged.
    ///
    /// The group takes the place of the first listed entity in its
    /// container. The caller receives the group's single caller reference.
    pub fn create_group(&mut self, entities: &[EntityRef]) -> Result<GroupRef> {
        if entities.len() < Group::MIN_CHILDREN {
            return Err(LayoutError::Generic(format!(
                "a group needs at least {} entities, got {}",
                Group::MIN_CHILDREN,
                entities.len()
            )));
        }
        for entity in entities {
            let object = self.object(entity.handle())?;
            if !object.is_entity() {
                return Err(LayoutError::Generic(format!(
                    "{} is a {} and cannot be grouped",
                    entity,
                    object.ref_type()
                )));
            }
        }

        let mut seen = AHashSet::with_capacity(entities.len());
        for entity in entities {
            if !seen.insert(*entity) {
                return Err(LayoutError::Generic(format!("{} is listed twice", entity)));
            }
        }
        for entity in entities {
            let mut current = self.entity_common(*entity)?.container;
            while let Some(Container::Group(g)) = current {
                if seen.contains(&g.upcast()) {
                    return Err(LayoutError::Generic(format!(
                        "{} is listed together with its ancestor {}",
                        entity, g
                    )));
                }
                current = self.get(g)?.common.container;
            }
        }

        let scopes = entities
            .iter()
            .map(|e| self.layer_scope(*e))
            .collect::<Result<Vec<_>>>()?;
        let first = scopes[0];
        if scopes.iter().any(|s| s.is_some() != first.is_some()) {
            return Err(LayoutError::Generic(
                "entities mix document members and free entities".to_string(),
            ));
        }
        if scopes.iter().any(|s| *s != first) {
            return Err(LayoutError::Generic(
                "entities are not on the same layer scope".to_string(),
            ));
        }

        // commit
        let mut bounds = self.entity_bounds(entities[0])?;
        for entity in &entities[1..] {
            bounds = bounds.union(&self.entity_bounds(*entity)?);
        }
        let target = self.entity_common(entities[0])?.container;
        let group = GroupRef::from_handle(
            self.arena
                .insert(ObjectType::Group(Group::new(bounds, entities.to_vec()))),
        );

        if let Some(container) = target {
            let members = self.members_mut(container)?;
            let index = members
                .iter()
                .position(|m| *m == entities[0])
                .unwrap_or(members.len());
            members.insert(index, group.upcast());
            self.set_container(group.upcast(), Some(container));
            self.bump(group.handle());
        }

        let mut affected = Vec::new();
        for entity in entities {
            match self.entity_common(*entity)?.container {
                Some(container) => {
                    // the old container's reference passes to the group
                    let members = self.members_mut(container)?;
                    if let Some(index) = members.iter().position(|m| m == entity) {
                        members.remove(index);
                    }
                    if !affected.contains(&container) {
                        affected.push(container);
                    }
                }
                None => self.bump(entity.handle()),
            }
            self.set_container(*entity, Some(Container::Group(group)));
        }

        debug!("Created group {} of {} entities", group, entities.len());
        for container in affected {
            self.settle(container);
        }
        if let Some(container) = self.entity_common(group.upcast())?.container {
            self.settle(container);
        }
        Ok(group)
    }

    /// Replace a group by its children and destroy it
    ///
    /// The children take the group's place in its container, in order.
    /// The group is destroyed even when other references to it exist, and
    /// `group` is reset to invalid.
    pub fn ungroup(&mut self, group: &mut GroupRef) -> Result<()> {
        let g = *group;
        let payload = self.get_mut(g)?;
        let children = std::mem::take(&mut payload.children);
        let parent = payload.common.container;
        self.splice_out(g, children, parent);
        self.force_destroy(g.handle());
        debug!("Ungrouped {}", g);
        if let Some(container) = parent {
            self.settle(container);
        }
        *group = GroupRef::invalid();
        Ok(())
    }

    /// Put `children` where `group` sits in `parent`, or free them
    fn splice_out(&mut self, group: GroupRef, children: Vec<EntityRef>, parent: Option<Container>) {
        match parent {
            Some(container) => {
                if let Ok(members) = self.members_mut(container) {
                    if let Some(index) = members.iter().position(|m| *m == group.upcast()) {
                        members.splice(index..=index, children.iter().copied());
                    }
                }
                for child in children {
                    self.set_container(child, Some(container));
                }
            }
            None => {
                for child in &children {
                    self.set_container(*child, None);
                }
                self.release_handles(children.iter().map(|c| c.handle()).collect());
            }
        }
    }

    /// Dissolve undersized groups and refresh group bounds from
    /// `container` up to the top of its chain
    fn settle(&mut self, container: Container) {
        let mut current = Some(container);
        while let Some(Container::Group(g)) = current {
            let Ok(group) = self.get_mut(g) else {
                return;
            };
            let parent = group.common.container;
            if group.needs_dissolve() {
                let children = std::mem::take(&mut group.children);
                self.splice_out(g, children, parent);
                self.force_destroy(g.handle());
                debug!("Dissolved group {}", g);
                self.notifications.notify(
                    NotificationType::Info,
                    format!("group {} dissolved after dropping below {} children", g, Group::MIN_CHILDREN),
                );
            } else {
                self.refresh_group_bounds(g);
            }
            current = parent;
        }
    }

    fn refresh_group_bounds(&mut self, group: GroupRef) {
        let Ok(children) = self.get(group).map(|g| g.children.clone()) else {
            return;
        };
        let bounds = children
            .iter()
            .filter_map(|c| self.entity_common(*c).ok().map(EntityCommon::bounds))
            .reduce(|a, b| a.union(&b));
        if let (Some(bounds), Ok(payload)) = (bounds, self.get_mut(group)) {
            payload.common.bounds = bounds;
        }
    }

    pub fn group_children(&self, group: GroupRef) -> Result<&[EntityRef]> {
        Ok(self.get(group)?.children())
    }

    pub fn group_child_count(&self, group: GroupRef) -> Result<usize> {
        Ok(self.get(group)?.len())
    }

    // ---- queries ----

    /// Direct container of an entity
    pub fn entity_container(&self, entity: impl Into<EntityRef>) -> Result<Option<Container>> {
        Ok(self.entity_common(entity.into())?.container)
    }

    /// Group directly containing an entity
    pub fn entity_parent_group(&self, entity: impl Into<EntityRef>) -> Result<Option<GroupRef>> {
        Ok(match self.entity_common(entity.into())?.container {
            Some(Container::Group(g)) => Some(g),
            _ => None,
        })
    }

    /// Layer instance the entity is drawn in, through any groups
    pub fn entity_layer_instance(
        &self,
        entity: impl Into<EntityRef>,
    ) -> Result<Option<LayerInstanceRef>> {
        self.root_instance(entity.into())
    }

    pub fn entity_layer(&self, entity: impl Into<EntityRef>) -> Result<Option<LayerRef>> {
        match self.root_instance(entity.into())? {
            Some(instance) => Ok(Some(self.get(instance)?.layer())),
            None => Ok(None),
        }
    }

    /// Page of an entity on a non-shared layer
    pub fn entity_page(&self, entity: impl Into<EntityRef>) -> Result<Option<PageRef>> {
        match self.root_instance(entity.into())? {
            Some(instance) => Ok(self.get(instance)?.page()),
            None => Ok(None),
        }
    }

    pub fn entity_is_in_document(&self, entity: impl Into<EntityRef>) -> Result<bool> {
        Ok(self.root_instance(entity.into())?.is_some())
    }

    pub fn entity_is_on_shared_layer(&self, entity: impl Into<EntityRef>) -> Result<bool> {
        match self.root_instance(entity.into())? {
            Some(instance) => Ok(self.get(instance)?.is_shared()),
            None => Ok(false),
        }
    }

    // ---- geometry and flags ----

    /// Axis-aligned bounds after the entity's transform
    pub fn entity_bounds(&self, entity: impl Into<EntityRef>) -> Result<AxisAlignedRect2D> {
        Ok(self.entity_common(entity.into())?.bounds())
    }

    /// Move and scale an entity so its bounds become `bounds`
    pub fn set_entity_bounds(
        &mut self,
        entity: impl Into<EntityRef>,
        bounds: AxisAlignedRect2D,
    ) -> Result<()> {
        let entity = entity.into();
        let bounds = bounds.validated()?;
        let current = self.entity_bounds(entity)?;
        let t = Transform2D::scaling_about(
            bounds.width() / current.width(),
            bounds.height() / current.height(),
            current.upper_left,
        )
        .then(&Transform2D::translation(bounds.upper_left - current.upper_left));
        self.apply_transform(entity, t)
    }

    pub fn entity_transform(&self, entity: impl Into<EntityRef>) -> Result<Transform2D> {
        Ok(self.entity_common(entity.into())?.transform())
    }

    /// Compose `transform` onto an entity, after its current transform
    ///
    /// For a group the transform goes to every descendant. Singular or
    /// non-finite transforms are `InvalidArgument`.
    pub fn apply_transform(
        &mut self,
        entity: impl Into<EntityRef>,
        transform: Transform2D,
    ) -> Result<()> {
        let entity = entity.into();
        if !transform.is_finite() || transform.determinant() == 0.0 {
            return Err(LayoutError::InvalidArgument(format!(
                "transform {:?} is not invertible",
                transform
            )));
        }
        let parent = self.entity_common(entity)?.container;

        let mut groups = Vec::new();
        let mut stack = vec![entity];
        while let Some(current) = stack.pop() {
            match self.object_mut(current.handle())? {
                ObjectType::Group(g) => {
                    stack.extend(g.children.iter().copied());
                    groups.push(GroupRef::from_handle(current.handle()));
                }
                other => {
                    if let Some(common) = other.common_mut() {
                        common.transform = common.transform.then(&transform);
                    }
                }
            }
        }
        // parents were visited before their children
        for group in groups.into_iter().rev() {
            self.refresh_group_bounds(group);
        }
        if let Some(container) = parent {
            self.settle(container);
        }
        Ok(())
    }

    pub fn entity_flags(&self, entity: impl Into<EntityRef>) -> Result<EntityFlags> {
        Ok(self.entity_common(entity.into())?.flags)
    }

    pub fn set_entity_flags(
        &mut self,
        entity: impl Into<EntityRef>,
        flags: EntityFlags,
    ) -> Result<()> {
        self.entity_common_mut(entity.into())?.flags = flags;
        Ok(())
    }
}
