//! The C surface driven the way a C caller would

mod common;

use common::builders::png_bytes;
use layoutrs::ffi::*;
use layoutrs::Document;
use std::ffi::{CStr, CString};
use std::ptr;

fn rect(x: f64) -> LoAxisAlignedRect2D {
    LoAxisAlignedRect2D {
        upper_left: LoPoint2D { x, y: 0.0 },
        lower_right: LoPoint2D { x: x + 1.0, y: 1.0 },
    }
}

struct Session {
    doc: *mut Document,
    layer: LoHandle,
    page: LoHandle,
}

impl Session {
    fn open() -> Self {
        let mut doc = ptr::null_mut();
        let mut layer = LoHandle::INVALID;
        let mut page = LoHandle::INVALID;
        unsafe {
            assert_eq!(lo_document_create(&mut doc), LoResult::Success);
            assert_eq!(lo_document_get_layer_at_index(doc, 0, &mut layer), LoResult::Success);
            assert_eq!(lo_document_get_page_at_index(doc, 0, &mut page), LoResult::Success);
        }
        Session { doc, layer, page }
    }

    /// A rectangle on the default layer, held only by the layer
    fn placed_rectangle(&self, x: f64) -> LoHandle {
        let mut r = LoHandle::INVALID;
        unsafe {
            assert_eq!(lo_rectangle_create(self.doc, &mut r, &rect(x)), LoResult::Success);
            assert_eq!(
                lo_document_add_entity(self.doc, r, self.layer, self.page),
                LoResult::Success
            );
            let mut caller = r;
            assert_eq!(lo_rectangle_release(self.doc, &mut caller), LoResult::Success);
        }
        r
    }

    fn draw_order(&self) -> Vec<LoHandle> {
        let mut instance = LoHandle::INVALID;
        let mut count = 0;
        unsafe {
            assert_eq!(
                lo_layer_get_instance(self.doc, self.layer, self.page, &mut instance),
                LoResult::Success
            );
            assert_eq!(
                lo_layer_instance_get_entity_count(self.doc, instance, &mut count),
                LoResult::Success
            );
            (0..count)
                .map(|i| {
                    let mut e = LoHandle::INVALID;
                    assert_eq!(
                        lo_layer_instance_get_entity_at_index(self.doc, instance, i, &mut e),
                        LoResult::Success
                    );
                    e
                })
                .collect()
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        unsafe {
            assert_eq!(lo_document_release(&mut self.doc), LoResult::Success);
        }
    }
}

#[test]
fn document_release_clears_the_pointer() {
    let mut doc = ptr::null_mut();
    unsafe {
        assert_eq!(lo_document_create(&mut doc), LoResult::Success);
        assert!(!doc.is_null());
        assert_eq!(lo_document_create(&mut doc), LoResult::OverwriteValid);
        assert_eq!(lo_document_release(&mut doc), LoResult::Success);
        assert!(doc.is_null());
        assert_eq!(lo_document_release(&mut doc), LoResult::InvalidInput);
        assert_eq!(lo_document_release(ptr::null_mut()), LoResult::NullPointerInput);
    }
}

#[test]
fn image_from_bytes_and_bounds() {
    let session = Session::open();
    let bytes = png_bytes(8, 8);
    let mut image = LoHandle::INVALID;
    let mut bounds = LoAxisAlignedRect2D::default();
    unsafe {
        assert_eq!(
            lo_image_create_from_bytes(session.doc, &mut image, bytes.as_ptr(), bytes.len(), &rect(3.0)),
            LoResult::Success
        );
        assert_eq!(lo_entity_get_bounds(session.doc, image, &mut bounds), LoResult::Success);
        let mut missing = LoHandle::INVALID;
        assert_eq!(
            lo_image_create_from_bytes(session.doc, &mut missing, ptr::null(), 0, &rect(0.0)),
            LoResult::NullPointerInput
        );
    }
    assert_eq!(bounds.upper_left.x, 3.0);
    assert_eq!(bounds.lower_right.y, 1.0);
}

#[test]
fn invalid_utf8_names_are_invalid_arguments() {
    let session = Session::open();
    let bad = [0xFFu8, 0xFE, 0x00];
    let mut layer = LoHandle::INVALID;
    unsafe {
        assert_eq!(
            lo_document_add_layer(session.doc, bad.as_ptr() as *const _, false, &mut layer),
            LoResult::InvalidArgument
        );
        let name = CString::new("Notes").unwrap();
        assert_eq!(
            lo_document_add_layer(session.doc, name.as_ptr(), false, &mut layer),
            LoResult::Success
        );
        let mut again = LoHandle::INVALID;
        assert_eq!(
            lo_document_add_layer(session.doc, name.as_ptr(), false, &mut again),
            LoResult::Duplicate
        );
        let mut count = 0;
        assert_eq!(lo_document_get_layer_count(session.doc, &mut count), LoResult::Success);
        assert_eq!(count, 2);
    }
}

#[test]
fn ungroup_restores_the_draw_order() {
    let session = Session::open();
    let x = session.placed_rectangle(0.0);
    let a = session.placed_rectangle(2.0);
    let b = session.placed_rectangle(4.0);
    let y = session.placed_rectangle(6.0);

    let mut group = LoHandle::INVALID;
    let mut child = LoHandle::INVALID;
    unsafe {
        assert_eq!(lo_group_create(session.doc, &mut group, [a, b].as_ptr(), 2), LoResult::Success);
        assert_eq!(lo_group_get_child_at_index(session.doc, group, 1, &mut child), LoResult::Success);
        assert_eq!(child, b);
        assert_eq!(
            lo_group_get_child_at_index(session.doc, group, 2, &mut child),
            LoResult::OutOfRange
        );
        assert_eq!(lo_group_reorder_entity(session.doc, group, b, 0), LoResult::Success);
        assert_eq!(lo_group_reorder_entity(session.doc, group, x, 0), LoResult::InvalidArgument);

        let mut stale = group;
        assert_eq!(lo_group_ungroup(session.doc, &mut group), LoResult::Success);
        assert_eq!(group, LoHandle::INVALID);
        assert_eq!(lo_group_release(session.doc, &mut stale), LoResult::InvalidInput);
    }

    assert_eq!(session.draw_order(), vec![x, b, a, y]);
}

#[test]
fn typed_values_through_the_c_surface() {
    let session = Session::open();
    let mut value = LoHandle::INVALID;
    let mut out = 0.0f64;
    let mut kind = -1;
    unsafe {
        assert_eq!(lo_typed_value_create(session.doc, &mut value), LoResult::Success);
        assert_eq!(lo_typed_value_set_double(session.doc, value, 0.25), LoResult::Success);
        assert_eq!(lo_typed_value_get_double(session.doc, value, &mut out), LoResult::Success);
        assert_eq!(lo_typed_value_get_type(session.doc, value, &mut kind), LoResult::Success);

        let mut flag = false;
        assert_eq!(lo_typed_value_get_bool(session.doc, value, &mut flag), LoResult::NoData);

        let text = CString::new("label").unwrap();
        assert_eq!(lo_typed_value_set_string(session.doc, value, text.as_ptr()), LoResult::Success);
        let mut s = ptr::null_mut();
        assert_eq!(lo_typed_value_get_string(session.doc, value, &mut s), LoResult::Success);
        assert_eq!(CStr::from_ptr(s).to_str().unwrap(), "label");
        lo_string_free(s);

        // value-like kinds have no add-reference entry point; release works
        assert_eq!(lo_typed_value_release(session.doc, &mut value), LoResult::Success);
    }
    assert_eq!(out, 0.25);
    assert_eq!(kind, layoutrs::TypedValueType::Double as i32);
}

#[test]
fn attaching_a_created_dictionary() {
    let session = Session::open();
    let r = session.placed_rectangle(0.0);
    let name = CString::new("notes").unwrap();
    let mut dictionary = LoHandle::INVALID;
    let mut count = 0;
    unsafe {
        assert_eq!(lo_dictionary_create(session.doc, &mut dictionary, name.as_ptr()), LoResult::Success);
        assert_eq!(lo_entity_add_attribute_dictionary(session.doc, r, dictionary), LoResult::Success);
        assert_eq!(
            lo_entity_add_attribute_dictionary(session.doc, r, dictionary),
            LoResult::InvalidArgument
        );
        assert_eq!(
            lo_entity_get_attribute_dictionary_count(session.doc, r, &mut count),
            LoResult::Success
        );
    }
    assert_eq!(count, 1);
}

#[test]
fn attribute_dictionary_lookup_reuses_the_output_slot() {
    let session = Session::open();
    let r = session.placed_rectangle(0.0);
    let name = CString::new("meta").unwrap();
    let mut dictionary = LoHandle::INVALID;
    let mut count = 0;
    unsafe {
        assert_eq!(
            lo_entity_get_attribute_dictionary(session.doc, r, name.as_ptr(), &mut dictionary),
            LoResult::Success
        );
        let first = dictionary;
        assert_eq!(
            lo_entity_get_attribute_dictionary(session.doc, r, name.as_ptr(), &mut dictionary),
            LoResult::Success
        );
        assert_eq!(dictionary, first);
        assert_eq!(
            lo_entity_get_attribute_dictionary_count(session.doc, r, &mut count),
            LoResult::Success
        );
    }
    assert_eq!(count, 1);
}
