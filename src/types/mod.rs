//! Core value types: handles, typed references and page geometry

pub mod bounds;
pub mod color;
pub mod handle;
pub mod ref_type;
pub mod refs;
pub mod transform;
pub mod vector;

pub use bounds::{AxisAlignedRect2D, OrientedRect2D};
pub use color::Color;
pub use handle::Handle;
pub use ref_type::RefType;
pub use refs::{
    ApplicationRef, ClassificationInfoRef, CommandRef, DictionaryRef, Drawable, EntityRef,
    FontRef, GroupRef, ImageRef, LayerInstanceRef, LayerRef, ObjectRef, PageRef, RectangleRef,
    Shareable, TypedValueRef,
};
pub use transform::Transform2D;
pub use vector::{Vector2, Vector3};
