//! Typed object references
//!
//! Each concrete kind gets its own reference type wrapping a [`Handle`].
//! Typed references are plain `Copy` values, like the raw handles they
//! wrap: copying one aliases the same object and does not touch its
//! reference count.
//!
//! [`EntityRef`] is the type-erased view. Converting a typed reference into
//! it (upcast) is total and purely structural. Going back (downcast) needs
//! the document, which owns the runtime tag; see
//! [`Document::downcast`](crate::Document::downcast).

use super::{Handle, RefType};
use std::fmt;

/// Behaviour shared by every typed reference
pub trait ObjectRef: Copy + Eq + fmt::Debug {
    /// Runtime tag of the kind this reference points at
    const REF_TYPE: RefType;

    /// Wrap a raw handle without checking its kind
    fn from_handle(handle: Handle) -> Self;

    /// The wrapped handle
    fn handle(&self) -> Handle;

    /// A reference bound to nothing
    fn invalid() -> Self {
        Self::from_handle(Handle::NULL)
    }

    /// True unless this is the null reference
    fn is_valid(&self) -> bool {
        self.handle().is_valid()
    }

    /// Widen to the type-erased entity view
    ///
    /// An invalid reference upcasts to an invalid entity.
    fn upcast(self) -> EntityRef {
        EntityRef(self.handle())
    }
}

/// Kinds whose references may be shared through
/// [`Document::add_reference`](crate::Document::add_reference)
pub trait Shareable: ObjectRef {}

/// Kinds that can live in a layer instance or a group
pub trait Drawable: ObjectRef {}

/// Type-erased reference to any document object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EntityRef(Handle);

impl EntityRef {
    /// Wrap a raw handle
    pub const fn from_handle(handle: Handle) -> Self {
        EntityRef(handle)
    }

    /// A reference bound to nothing
    pub const fn invalid() -> Self {
        EntityRef(Handle::NULL)
    }

    /// The wrapped handle
    pub const fn handle(&self) -> Handle {
        self.0
    }

    /// True unless this is the null reference
    pub const fn is_valid(&self) -> bool {
        self.0.is_valid()
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

macro_rules! define_ref {
    ($(#[$meta:meta])* $name:ident => $ty:ident $(, $marker:ident)*) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(Handle);

        impl ObjectRef for $name {
            const REF_TYPE: RefType = RefType::$ty;

            fn from_handle(handle: Handle) -> Self {
                $name(handle)
            }

            fn handle(&self) -> Handle {
                self.0
            }
        }

        $(impl $marker for $name {})*

        impl From<$name> for EntityRef {
            fn from(r: $name) -> Self {
                r.upcast()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", RefType::$ty, self.0)
            }
        }
    };
}

define_ref!(
    /// Reference to a raster image entity
    ImageRef => Image, Shareable, Drawable
);
define_ref!(
    /// Reference to a group entity
    GroupRef => Group, Shareable, Drawable
);
define_ref!(
    /// Reference to a rectangle entity
    RectangleRef => Rectangle, Shareable, Drawable
);
define_ref!(
    /// Reference to a layer definition
    LayerRef => Layer, Shareable
);
define_ref!(
    /// Reference to a layer instance (a layer's draw list on one page, or
    /// on every page for shared layers)
    LayerInstanceRef => LayerInstance, Shareable
);
define_ref!(
    /// Reference to a page
    PageRef => Page, Shareable
);
define_ref!(
    /// Reference to an attribute dictionary
    DictionaryRef => Dictionary, Shareable
);
define_ref!(
    /// Reference to a typed value container (value-like, single owner)
    TypedValueRef => TypedValue
);
define_ref!(
    /// Reference to a font description
    FontRef => Font, Shareable
);
define_ref!(
    /// Reference to command metadata
    CommandRef => Command, Shareable
);
define_ref!(
    /// Reference to an application instance
    ApplicationRef => Application, Shareable
);
define_ref!(
    /// Reference to classification info (value-like, single owner)
    ClassificationInfoRef => ClassificationInfo
);
