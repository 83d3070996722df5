//! Drawable entities
//!
//! Entities are the objects a page draws: images, rectangles and groups of
//! other entities. Each one carries an [`EntityCommon`] block with its
//! bounds, transform, flags and the container it currently lives in.

use crate::types::{AxisAlignedRect2D, GroupRef, Handle, LayerInstanceRef, ObjectRef, Transform2D};
use bitflags::bitflags;

pub mod group;
pub mod image;
pub mod rectangle;

pub use group::Group;
pub use image::Image;
pub use rectangle::Rectangle;

bitflags! {
    /// Per-entity state flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EntityFlags: u32 {
        /// Entity cannot be selected or edited.
        const LOCKED = 1;
        /// Entity is not drawn on screen.
        const HIDDEN = 2;
        /// Entity is drawn on screen but not printed or exported.
        const NON_PRINTING = 4;
    }
}

/// Where an entity currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// Top level of a layer's draw list
    LayerInstance(LayerInstanceRef),
    /// Inside a group
    Group(GroupRef),
}

impl Container {
    /// Handle of the containing object
    pub fn handle(&self) -> Handle {
        match self {
            Container::LayerInstance(i) => i.handle(),
            Container::Group(g) => g.handle(),
        }
    }
}

impl From<LayerInstanceRef> for Container {
    fn from(r: LayerInstanceRef) -> Self {
        Container::LayerInstance(r)
    }
}

impl From<GroupRef> for Container {
    fn from(r: GroupRef) -> Self {
        Container::Group(r)
    }
}

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Untransformed bounds
    pub(crate) bounds: AxisAlignedRect2D,
    /// Placement transform
    pub(crate) transform: Transform2D,
    /// State flags
    pub flags: EntityFlags,
    /// Current container, if attached
    pub(crate) container: Option<Container>,
}

impl EntityCommon {
    /// Create entity data with the given (already validated) bounds
    pub fn new(bounds: AxisAlignedRect2D) -> Self {
        EntityCommon {
            bounds,
            transform: Transform2D::IDENTITY,
            flags: EntityFlags::empty(),
            container: None,
        }
    }

    /// Untransformed bounds
    pub fn untransformed_bounds(&self) -> AxisAlignedRect2D {
        self.bounds
    }

    /// Axis-aligned bounds after applying the transform
    pub fn bounds(&self) -> AxisAlignedRect2D {
        self.transform
            .apply_to_rect(&self.bounds)
            .axis_aligned_bounds()
    }

    /// Placement transform
    pub fn transform(&self) -> Transform2D {
        self.transform
    }

    /// Current container
    pub fn container(&self) -> Option<Container> {
        self.container
    }

    pub fn is_locked(&self) -> bool {
        self.flags.contains(EntityFlags::LOCKED)
    }

    pub fn is_hidden(&self) -> bool {
        self.flags.contains(EntityFlags::HIDDEN)
    }
}
