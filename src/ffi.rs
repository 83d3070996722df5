//! C ABI
//!
//! Every function returns a [`LoResult`] and writes its outputs only on
//! success. Object handles cross the boundary as [`LoHandle`] values; the
//! document crosses it as an opaque pointer created by
//! [`lo_document_create`] and freed by [`lo_document_release`].
//!
//! Output handle slots passed to factories must not already hold a live
//! object (`OverwriteValid`). Null input pointers are `NullPointerInput`,
//! null output pointers are `NullPointerOutput`, and strings that are not
//! UTF-8 are `InvalidArgument`.
//!
//! All functions taking raw pointers are `unsafe`: the caller guarantees
//! that non-null pointers are valid for the access described and that the
//! document is not used from two threads at once.
#![allow(clippy::missing_safety_doc)]

use crate::document::Document;
use crate::error::{ErrorKind, LayoutError, Result};
use crate::objects::TypedValue;
use crate::types::{
    ApplicationRef, AxisAlignedRect2D, ClassificationInfoRef, CommandRef, DictionaryRef,
    EntityRef, FontRef, GroupRef, Handle, ImageRef, LayerInstanceRef, LayerRef, ObjectRef,
    PageRef, RectangleRef, TypedValueRef, Vector2,
};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

// --- C-Compatible Data Structures ---

/// Object handle as seen from C. All zeros is the invalid handle.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoHandle {
    pub index: u32,
    pub generation: u32,
}

impl LoHandle {
    pub const INVALID: LoHandle = LoHandle {
        index: 0,
        generation: 0,
    };

    fn handle(self) -> Handle {
        Handle::new(self.index, self.generation)
    }
}

impl From<Handle> for LoHandle {
    fn from(h: Handle) -> Self {
        if h.is_null() {
            return LoHandle::INVALID;
        }
        LoHandle {
            index: h.index(),
            generation: h.generation(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoPoint2D {
    pub x: f64,
    pub y: f64,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoAxisAlignedRect2D {
    pub upper_left: LoPoint2D,
    pub lower_right: LoPoint2D,
}

impl From<LoAxisAlignedRect2D> for AxisAlignedRect2D {
    fn from(r: LoAxisAlignedRect2D) -> Self {
        AxisAlignedRect2D::new(
            Vector2::new(r.upper_left.x, r.upper_left.y),
            Vector2::new(r.lower_right.x, r.lower_right.y),
        )
    }
}

impl From<AxisAlignedRect2D> for LoAxisAlignedRect2D {
    fn from(r: AxisAlignedRect2D) -> Self {
        LoAxisAlignedRect2D {
            upper_left: LoPoint2D {
                x: r.upper_left.x,
                y: r.upper_left.y,
            },
            lower_right: LoPoint2D {
                x: r.lower_right.x,
                y: r.lower_right.y,
            },
        }
    }
}

/// Result code of every C function
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoResult {
    Success = 0,
    NullPointerInput = 1,
    NullPointerOutput = 2,
    InvalidInput = 3,
    InvalidOutput = 4,
    OverwriteValid = 5,
    OutOfRange = 6,
    NoData = 7,
    Duplicate = 8,
    InvalidArgument = 9,
    Serialization = 10,
    Generic = 11,
}

impl From<ErrorKind> for LoResult {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NullPointerInput => LoResult::NullPointerInput,
            ErrorKind::NullPointerOutput => LoResult::NullPointerOutput,
            ErrorKind::InvalidInput => LoResult::InvalidInput,
            ErrorKind::InvalidOutput => LoResult::InvalidOutput,
            ErrorKind::OverwriteValid => LoResult::OverwriteValid,
            ErrorKind::OutOfRange => LoResult::OutOfRange,
            ErrorKind::NoData => LoResult::NoData,
            ErrorKind::Duplicate => LoResult::Duplicate,
            ErrorKind::InvalidArgument => LoResult::InvalidArgument,
            ErrorKind::Serialization => LoResult::Serialization,
            ErrorKind::Generic => LoResult::Generic,
        }
    }
}

fn run(f: impl FnOnce() -> Result<()>) -> LoResult {
    match f() {
        Ok(()) => LoResult::Success,
        Err(e) => e.kind().into(),
    }
}

// --- Pointer helpers ---

unsafe fn document<'a>(doc: *mut Document) -> Result<&'a mut Document> {
    doc.as_mut().ok_or(LayoutError::NullPointerInput)
}

unsafe fn document_ref<'a>(doc: *const Document) -> Result<&'a Document> {
    doc.as_ref().ok_or(LayoutError::NullPointerInput)
}

/// Output slot for a new object: present, and not holding a live one
unsafe fn new_object_slot<'a>(doc: &Document, out: *mut LoHandle) -> Result<&'a mut LoHandle> {
    let slot = out.as_mut().ok_or(LayoutError::NullPointerOutput)?;
    if doc.is_entity_alive(EntityRef::from_handle(slot.handle())) {
        return Err(LayoutError::OverwriteValid);
    }
    Ok(slot)
}

unsafe fn output<'a, T>(out: *mut T) -> Result<&'a mut T> {
    out.as_mut().ok_or(LayoutError::NullPointerOutput)
}

unsafe fn input<'a, T>(p: *const T) -> Result<&'a T> {
    p.as_ref().ok_or(LayoutError::NullPointerInput)
}

unsafe fn c_str<'a>(s: *const c_char) -> Result<&'a str> {
    if s.is_null() {
        return Err(LayoutError::NullPointerInput);
    }
    CStr::from_ptr(s)
        .to_str()
        .map_err(|e| LayoutError::InvalidArgument(format!("string is not UTF-8: {}", e)))
}

fn typed<R: ObjectRef>(h: LoHandle) -> R {
    R::from_handle(h.handle())
}

fn entity_of(h: LoHandle) -> EntityRef {
    EntityRef::from_handle(h.handle())
}

/// The invalid handle selects no page
fn optional_page(h: LoHandle) -> Option<PageRef> {
    Some(typed::<PageRef>(h)).filter(|p| p.is_valid())
}

// --- Memory Management ---

/// Frees a C string returned by the library.
#[no_mangle]
pub unsafe extern "C" fn lo_string_free(string: *mut c_char) {
    if !string.is_null() {
        drop(CString::from_raw(string));
    }
}

// --- Document ---

#[no_mangle]
pub unsafe extern "C" fn lo_document_create(out: *mut *mut Document) -> LoResult {
    run(|| {
        let slot = output(out)?;
        if !slot.is_null() {
            return Err(LayoutError::OverwriteValid);
        }
        *slot = Box::into_raw(Box::new(Document::new()));
        Ok(())
    })
}

/// Destroys a document and every object in it, then nulls the pointer.
#[no_mangle]
pub unsafe extern "C" fn lo_document_release(doc: *mut *mut Document) -> LoResult {
    run(|| {
        let slot = doc.as_mut().ok_or(LayoutError::NullPointerInput)?;
        if slot.is_null() {
            return Err(LayoutError::InvalidInput("document is null".to_string()));
        }
        drop(Box::from_raw(*slot));
        *slot = ptr::null_mut();
        Ok(())
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_document_get_page_count(
    doc: *const Document,
    out: *mut usize,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        *output(out)? = doc.page_count();
        Ok(())
    })
}

/// Page by index; the page is owned by the document and needs no release.
#[no_mangle]
pub unsafe extern "C" fn lo_document_get_page_at_index(
    doc: *const Document,
    index: usize,
    out: *mut LoHandle,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        let slot = output(out)?;
        let page = doc.pages().get(index).copied().ok_or_else(|| {
            LayoutError::OutOfRange(format!("page {} of {}", index, doc.page_count()))
        })?;
        *slot = page.handle().into();
        Ok(())
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_document_get_layer_count(
    doc: *const Document,
    out: *mut usize,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        *output(out)? = doc.layer_count();
        Ok(())
    })
}

/// Layer by stacking index; owned by the document.
#[no_mangle]
pub unsafe extern "C" fn lo_document_get_layer_at_index(
    doc: *const Document,
    index: usize,
    out: *mut LoHandle,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        let slot = output(out)?;
        let layer = doc.layers().nth(index).ok_or_else(|| {
            LayoutError::OutOfRange(format!("layer {} of {}", index, doc.layer_count()))
        })?;
        *slot = layer.handle().into();
        Ok(())
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_document_add_layer(
    doc: *mut Document,
    name: *const c_char,
    shared: bool,
    out: *mut LoHandle,
) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        let slot = new_object_slot(doc, out)?;
        let layer = doc.add_layer(c_str(name)?, shared)?;
        *slot = layer.handle().into();
        Ok(())
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_document_add_page(
    doc: *mut Document,
    name: *const c_char,
    out: *mut LoHandle,
) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        let slot = new_object_slot(doc, out)?;
        let page = doc.add_page(c_str(name)?)?;
        *slot = page.handle().into();
        Ok(())
    })
}

/// Places an entity on a layer. `page` may be invalid for shared layers.
#[no_mangle]
pub unsafe extern "C" fn lo_document_add_entity(
    doc: *mut Document,
    entity: LoHandle,
    layer: LoHandle,
    page: LoHandle,
) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        let page = optional_page(page);
        doc.add_entity(entity_of(entity), typed::<LayerRef>(layer), page)
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_document_remove_entity(doc: *mut Document, entity: LoHandle) -> LoResult {
    run(|| document(doc)?.remove_entity(entity_of(entity)))
}

#[no_mangle]
pub unsafe extern "C" fn lo_layer_get_instance(
    doc: *const Document,
    layer: LoHandle,
    page: LoHandle,
    out: *mut LoHandle,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        let slot = output(out)?;
        let page = optional_page(page);
        *slot = doc
            .layer_instance(typed::<LayerRef>(layer), page)?
            .handle()
            .into();
        Ok(())
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_layer_instance_get_entity_count(
    doc: *const Document,
    instance: LoHandle,
    out: *mut usize,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        let slot = output(out)?;
        *slot = doc.layer_instance_entities(typed(instance))?.len();
        Ok(())
    })
}

/// Entity by draw index, bottom first; owned by the layer instance.
#[no_mangle]
pub unsafe extern "C" fn lo_layer_instance_get_entity_at_index(
    doc: *const Document,
    instance: LoHandle,
    index: usize,
    out: *mut LoHandle,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        let slot = output(out)?;
        let members = doc.layer_instance_entities(typed(instance))?;
        let entity = members.get(index).copied().ok_or_else(|| {
            LayoutError::OutOfRange(format!("entity {} of {}", index, members.len()))
        })?;
        *slot = entity.handle().into();
        Ok(())
    })
}

// --- Entities ---

#[no_mangle]
pub unsafe extern "C" fn lo_rectangle_create(
    doc: *mut Document,
    out: *mut LoHandle,
    bounds: *const LoAxisAlignedRect2D,
) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        let slot = new_object_slot(doc, out)?;
        let bounds = *input(bounds)?;
        *slot = doc.create_rectangle(bounds.into())?.handle().into();
        Ok(())
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_image_create_from_file(
    doc: *mut Document,
    out: *mut LoHandle,
    path: *const c_char,
    bounds: *const LoAxisAlignedRect2D,
) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        let slot = new_object_slot(doc, out)?;
        let path = c_str(path)?;
        let bounds = *input(bounds)?;
        *slot = doc
            .create_image_from_file(path, bounds.into())?
            .handle()
            .into();
        Ok(())
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_image_create_from_bytes(
    doc: *mut Document,
    out: *mut LoHandle,
    data: *const u8,
    len: usize,
    bounds: *const LoAxisAlignedRect2D,
) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        let slot = new_object_slot(doc, out)?;
        if data.is_null() {
            return Err(LayoutError::NullPointerInput);
        }
        let bytes = std::slice::from_raw_parts(data, len).to_vec();
        let bounds = *input(bounds)?;
        *slot = doc
            .create_image_from_bytes(bytes, bounds.into())?
            .handle()
            .into();
        Ok(())
    })
}

/// Writes the entity's `RefType` code.
#[no_mangle]
pub unsafe extern "C" fn lo_entity_get_type(
    doc: *const Document,
    entity: LoHandle,
    out: *mut i32,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        let slot = output(out)?;
        *slot = doc.ref_type(entity_of(entity))?.to_code();
        Ok(())
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_entity_get_bounds(
    doc: *const Document,
    entity: LoHandle,
    out: *mut LoAxisAlignedRect2D,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        let slot = output(out)?;
        *slot = doc.entity_bounds(entity_of(entity))?.into();
        Ok(())
    })
}

/// Reorders a member of a layer instance's draw list.
#[no_mangle]
pub unsafe extern "C" fn lo_layer_instance_reorder_entity(
    doc: *mut Document,
    instance: LoHandle,
    entity: LoHandle,
    index: usize,
) -> LoResult {
    run(|| {
        document(doc)?.reorder_entity(
            typed::<LayerInstanceRef>(instance),
            entity_of(entity),
            index,
        )
    })
}

// --- Groups ---

#[no_mangle]
pub unsafe extern "C" fn lo_group_create(
    doc: *mut Document,
    out: *mut LoHandle,
    entities: *const LoHandle,
    count: usize,
) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        let slot = new_object_slot(doc, out)?;
        if entities.is_null() {
            return Err(LayoutError::NullPointerInput);
        }
        let list: Vec<EntityRef> = std::slice::from_raw_parts(entities, count)
            .iter()
            .map(|h| entity_of(*h))
            .collect();
        *slot = doc.create_group(&list)?.handle().into();
        Ok(())
    })
}

/// Flattens a group into its parent and invalidates `group`.
#[no_mangle]
pub unsafe extern "C" fn lo_group_ungroup(doc: *mut Document, group: *mut LoHandle) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        let slot = group.as_mut().ok_or(LayoutError::NullPointerInput)?;
        let mut g = typed::<GroupRef>(*slot);
        doc.ungroup(&mut g)?;
        *slot = LoHandle::INVALID;
        Ok(())
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_group_get_child_count(
    doc: *const Document,
    group: LoHandle,
    out: *mut usize,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        let slot = output(out)?;
        *slot = doc.group_child_count(typed::<GroupRef>(group))?;
        Ok(())
    })
}

/// Child by index; the child stays owned by the group.
#[no_mangle]
pub unsafe extern "C" fn lo_group_get_child_at_index(
    doc: *const Document,
    group: LoHandle,
    index: usize,
    out: *mut LoHandle,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        let slot = output(out)?;
        let children = doc.group_children(typed::<GroupRef>(group))?;
        let child = children.get(index).copied().ok_or_else(|| {
            LayoutError::OutOfRange(format!("child {} of {}", index, children.len()))
        })?;
        *slot = child.handle().into();
        Ok(())
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_group_reorder_entity(
    doc: *mut Document,
    group: LoHandle,
    entity: LoHandle,
    index: usize,
) -> LoResult {
    run(|| {
        document(doc)?.reorder_entity(
            typed::<GroupRef>(group),
            entity_of(entity),
            index,
        )
    })
}

// --- Dictionaries and typed values ---

#[no_mangle]
pub unsafe extern "C" fn lo_dictionary_create(
    doc: *mut Document,
    out: *mut LoHandle,
    name: *const c_char,
) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        let slot = new_object_slot(doc, out)?;
        *slot = doc.create_dictionary(c_str(name)?).handle().into();
        Ok(())
    })
}

/// Gets or creates a named attribute dictionary. The dictionary is owned
/// by the entity and needs no release.
#[no_mangle]
pub unsafe extern "C" fn lo_entity_get_attribute_dictionary(
    doc: *mut Document,
    entity: LoHandle,
    name: *const c_char,
    out: *mut LoHandle,
) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        // borrowed from the entity, so a slot already holding it is fine
        let slot = output(out)?;
        let name = c_str(name)?;
        *slot = doc
            .attribute_dictionary(entity_of(entity), name)?
            .handle()
            .into();
        Ok(())
    })
}

/// Attaches a dictionary; on success the caller's reference belongs to
/// the entity.
#[no_mangle]
pub unsafe extern "C" fn lo_entity_add_attribute_dictionary(
    doc: *mut Document,
    entity: LoHandle,
    dictionary: LoHandle,
) -> LoResult {
    run(|| {
        document(doc)?.add_attribute_dictionary(
            entity_of(entity),
            typed::<DictionaryRef>(dictionary),
        )
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_entity_get_attribute_dictionary_count(
    doc: *const Document,
    entity: LoHandle,
    out: *mut usize,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        let slot = output(out)?;
        *slot = doc.attribute_dictionary_count(entity_of(entity))?;
        Ok(())
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_dictionary_set_value(
    doc: *mut Document,
    dictionary: LoHandle,
    key: *const c_char,
    value: LoHandle,
) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        let key = c_str(key)?;
        doc.dictionary_set_value(typed::<DictionaryRef>(dictionary), key, typed(value))
    })
}

/// Copies a value into the pre-created typed value `value`.
#[no_mangle]
pub unsafe extern "C" fn lo_dictionary_get_value(
    doc: *mut Document,
    dictionary: LoHandle,
    key: *const c_char,
    value: LoHandle,
) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        let key = c_str(key)?;
        doc.dictionary_get_value(typed::<DictionaryRef>(dictionary), key, typed(value))
    })
}

#[no_mangle]
pub unsafe extern "C" fn lo_typed_value_create(doc: *mut Document, out: *mut LoHandle) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        let slot = new_object_slot(doc, out)?;
        *slot = doc.create_typed_value().handle().into();
        Ok(())
    })
}

/// Writes the `TypedValueType` code of a typed value.
#[no_mangle]
pub unsafe extern "C" fn lo_typed_value_get_type(
    doc: *const Document,
    value: LoHandle,
    out: *mut i32,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        let slot = output(out)?;
        *slot = doc.typed_value(typed(value))?.value_type() as i32;
        Ok(())
    })
}

macro_rules! typed_value_accessors {
    ($set:ident, $get:ident, $ty:ty, $getter:ident) => {
        #[no_mangle]
        pub unsafe extern "C" fn $set(doc: *mut Document, value: LoHandle, v: $ty) -> LoResult {
            run(|| document(doc)?.set_typed_value(typed::<TypedValueRef>(value), v))
        }

        /// `NoData` when the value holds another type.
        #[no_mangle]
        pub unsafe extern "C" fn $get(
            doc: *const Document,
            value: LoHandle,
            out: *mut $ty,
        ) -> LoResult {
            run(|| {
                let doc = document_ref(doc)?;
                let slot = output(out)?;
                *slot = doc.typed_value(typed(value))?.$getter()?;
                Ok(())
            })
        }
    };
}

typed_value_accessors!(lo_typed_value_set_bool, lo_typed_value_get_bool, bool, get_bool);
typed_value_accessors!(lo_typed_value_set_int32, lo_typed_value_get_int32, i32, get_int32);
typed_value_accessors!(lo_typed_value_set_double, lo_typed_value_get_double, f64, get_double);

#[no_mangle]
pub unsafe extern "C" fn lo_typed_value_set_string(
    doc: *mut Document,
    value: LoHandle,
    s: *const c_char,
) -> LoResult {
    run(|| {
        let doc = document(doc)?;
        let s = c_str(s)?;
        doc.set_typed_value(typed::<TypedValueRef>(value), TypedValue::from(s))
    })
}

/// Copies out a string value; free the result with [`lo_string_free`].
#[no_mangle]
pub unsafe extern "C" fn lo_typed_value_get_string(
    doc: *const Document,
    value: LoHandle,
    out: *mut *mut c_char,
) -> LoResult {
    run(|| {
        let doc = document_ref(doc)?;
        let slot = output(out)?;
        let s = doc.typed_value(typed(value))?.get_str()?;
        let s = CString::new(s)
            .map_err(|_| LayoutError::InvalidArgument("string holds a NUL byte".to_string()))?;
        *slot = s.into_raw();
        Ok(())
    })
}

// --- Per-kind lifecycle and type dispatch ---

macro_rules! lifecycle_functions {
    ($r:ty, $release:ident, $to_entity:ident, $from_entity:ident) => {
        /// Releases the caller's reference and invalidates the handle.
        #[no_mangle]
        pub unsafe extern "C" fn $release(doc: *mut Document, r: *mut LoHandle) -> LoResult {
            run(|| {
                let doc = document(doc)?;
                let slot = r.as_mut().ok_or(LayoutError::NullPointerInput)?;
                let mut typed_ref = typed::<$r>(*slot);
                doc.release(&mut typed_ref)?;
                *slot = LoHandle::INVALID;
                Ok(())
            })
        }

        /// Upcast; an invalid handle yields an invalid entity.
        #[no_mangle]
        pub unsafe extern "C" fn $to_entity(r: LoHandle, out: *mut LoHandle) -> LoResult {
            run(|| {
                let slot = output(out)?;
                *slot = typed::<$r>(r).upcast().handle().into();
                Ok(())
            })
        }

        /// Downcast; writes the invalid handle when the kinds differ.
        #[no_mangle]
        pub unsafe extern "C" fn $from_entity(
            doc: *const Document,
            entity: LoHandle,
            out: *mut LoHandle,
        ) -> LoResult {
            run(|| {
                let doc = document_ref(doc)?;
                let slot = output(out)?;
                *slot = doc.downcast::<$r>(entity_of(entity)).handle().into();
                Ok(())
            })
        }
    };
    ($r:ty, $add:ident, $release:ident, $to_entity:ident, $from_entity:ident) => {
        #[no_mangle]
        pub unsafe extern "C" fn $add(doc: *mut Document, r: LoHandle) -> LoResult {
            run(|| document(doc)?.add_reference(typed::<$r>(r)))
        }

        lifecycle_functions!($r, $release, $to_entity, $from_entity);
    };
}

lifecycle_functions!(
    ImageRef,
    lo_image_add_reference,
    lo_image_release,
    lo_image_to_entity,
    lo_entity_to_image
);
lifecycle_functions!(
    GroupRef,
    lo_group_add_reference,
    lo_group_release,
    lo_group_to_entity,
    lo_entity_to_group
);
lifecycle_functions!(
    RectangleRef,
    lo_rectangle_add_reference,
    lo_rectangle_release,
    lo_rectangle_to_entity,
    lo_entity_to_rectangle
);
lifecycle_functions!(
    LayerRef,
    lo_layer_add_reference,
    lo_layer_release,
    lo_layer_to_entity,
    lo_entity_to_layer
);
lifecycle_functions!(
    LayerInstanceRef,
    lo_layer_instance_add_reference,
    lo_layer_instance_release,
    lo_layer_instance_to_entity,
    lo_entity_to_layer_instance
);
lifecycle_functions!(
    PageRef,
    lo_page_add_reference,
    lo_page_release,
    lo_page_to_entity,
    lo_entity_to_page
);
lifecycle_functions!(
    DictionaryRef,
    lo_dictionary_add_reference,
    lo_dictionary_release,
    lo_dictionary_to_entity,
    lo_entity_to_dictionary
);
lifecycle_functions!(
    FontRef,
    lo_font_add_reference,
    lo_font_release,
    lo_font_to_entity,
    lo_entity_to_font
);
lifecycle_functions!(
    CommandRef,
    lo_command_add_reference,
    lo_command_release,
    lo_command_to_entity,
    lo_entity_to_command
);
lifecycle_functions!(
    ApplicationRef,
    lo_application_add_reference,
    lo_application_release,
    lo_application_to_entity,
    lo_entity_to_application
);
lifecycle_functions!(
    TypedValueRef,
    lo_typed_value_release,
    lo_typed_value_to_entity,
    lo_entity_to_typed_value
);
lifecycle_functions!(
    ClassificationInfoRef,
    lo_classification_info_release,
    lo_classification_info_to_entity,
    lo_entity_to_classification_info
);
