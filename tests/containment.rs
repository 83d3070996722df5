//! Draw order, grouping, ungrouping and group dissolve

mod common;

use common::builders::Layout;
use common::unit_at;
use layoutrs::notification::NotificationType;
use layoutrs::types::GroupRef;
use layoutrs::{AxisAlignedRect2D, Container, Document, EntityFlags, ErrorKind, ObjectRef};
use layoutrs::{Transform2D, Vector2};

#[test]
fn entities_are_added_on_top() {
    let layout = Layout::with_rectangles(3);
    assert_eq!(layout.order(), layout.entities);
    for e in &layout.entities {
        assert_eq!(
            layout.doc.entity_container(*e).unwrap(),
            Some(Container::LayerInstance(layout.instance))
        );
    }
}

#[test]
fn adding_a_placed_entity_twice_is_refused() {
    let mut layout = Layout::with_rectangles(1);
    let err = layout
        .doc
        .add_entity(layout.entities[0], layout.layer, Some(layout.page))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generic);
    assert_eq!(layout.order().len(), 1);
}

#[test]
fn reorder_to_size_is_out_of_range() {
    let mut layout = Layout::with_rectangles(3);
    let err = layout
        .doc
        .reorder_entity(layout.instance, layout.entities[0], 3)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(layout.order(), layout.entities);
}

#[test]
fn reorder_to_last_index_moves_to_the_top() {
    let mut layout = Layout::with_rectangles(3);
    let e = layout.entities.clone();
    layout.doc.reorder_entity(layout.instance, e[0], 2).unwrap();
    assert_eq!(layout.order(), vec![e[1], e[2], e[0]]);

    layout.doc.reorder_entity(layout.instance, e[0], 0).unwrap();
    assert_eq!(layout.order(), e);
}

#[test]
fn reorder_of_a_non_member_is_an_invalid_argument() {
    let mut layout = Layout::with_rectangles(2);
    let free = layout.doc.create_rectangle(unit_at(10.0)).unwrap();
    let err = layout
        .doc
        .reorder_entity(layout.instance, free, 0)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn group_with_a_duplicate_fails_and_leaves_no_group() {
    let mut layout = Layout::with_rectangles(2);
    let before = layout.doc.stats();
    let e = layout.entities[0];
    let group = layout.doc.create_group(&[e, e]).unwrap_or_else(|err| {
        assert_eq!(err.kind(), ErrorKind::Generic);
        GroupRef::invalid()
    });
    assert!(!group.is_valid());
    assert_eq!(layout.doc.stats(), before);
    assert_eq!(layout.order(), layout.entities);
}

#[test]
fn group_needs_two_entities() {
    let mut layout = Layout::with_rectangles(1);
    let err = layout.doc.create_group(&layout.entities.clone()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generic);
}

#[test]
fn group_of_two_takes_the_first_entitys_place() {
    let mut layout = Layout::with_rectangles(4);
    let e = layout.entities.clone();
    let group = layout.group(&[2, 1]);

    assert_eq!(layout.doc.group_children(group).unwrap(), &[e[2], e[1]]);
    assert_eq!(layout.order(), vec![e[0], group.upcast(), e[3]]);
    assert_eq!(
        layout.doc.entity_parent_group(e[1]).unwrap(),
        Some(group)
    );
    assert_eq!(layout.doc.reference_count(e[1]).unwrap(), 1);
    assert_eq!(layout.doc.reference_count(group).unwrap(), 1);
}

#[test]
fn group_bounds_cover_the_children() {
    let mut layout = Layout::with_rectangles(2);
    let group = layout.group(&[0, 1]);
    let bounds = layout.doc.entity_bounds(group).unwrap();
    assert_eq!(bounds, AxisAlignedRect2D::from_xywh(0.0, 0.0, 3.0, 1.0));
}

#[test]
fn ungroup_splices_children_into_the_parent() {
    // [X, G, Y] with G = [A, B]
    let mut layout = Layout::with_rectangles(4);
    let e = layout.entities.clone();
    let mut group = layout.group(&[1, 2]);
    let stale = group;
    assert_eq!(layout.order(), vec![e[0], group.upcast(), e[3]]);

    layout.doc.ungroup(&mut group).unwrap();
    assert!(!group.is_valid());
    assert!(!layout.doc.is_alive(stale));
    assert_eq!(layout.order(), vec![e[0], e[1], e[2], e[3]]);
    assert_eq!(
        layout.doc.entity_container(e[1]).unwrap(),
        Some(Container::LayerInstance(layout.instance))
    );
    assert_eq!(layout.doc.reference_count(e[1]).unwrap(), 1);
}

#[test]
fn ungroup_destroys_the_group_even_with_outstanding_references() {
    let mut layout = Layout::with_rectangles(2);
    let mut group = layout.group(&[0, 1]);
    layout.doc.add_reference(group).unwrap();
    let alias = group;
    layout.doc.ungroup(&mut group).unwrap();
    assert!(!layout.doc.is_alive(alias));
}

#[test]
fn removing_a_child_below_two_dissolves_the_group() {
    let mut layout = Layout::with_rectangles(3);
    let e = layout.entities.clone();
    let group = layout.group(&[0, 1]);
    layout.doc.clear_notifications();

    layout.doc.remove_entity(e[0]).unwrap();
    assert!(!layout.doc.is_alive(group));
    assert_eq!(layout.order(), vec![e[1], e[2]]);
    assert!(layout.doc.notifications().has_type(NotificationType::Info));
}

#[test]
fn dissolve_cascades_through_nested_groups() {
    let mut layout = Layout::with_rectangles(3);
    let e = layout.entities.clone();
    let inner = layout.group(&[0, 1]);
    let outer = layout
        .doc
        .create_group(&[inner.upcast(), e[2]])
        .unwrap();
    let mut outer_alias = outer;
    layout.doc.release(&mut outer_alias).unwrap();

    // outer = [inner, C], inner = [A, B]; dropping C dissolves outer only
    layout.doc.remove_entity(e[2]).unwrap();
    assert!(!layout.doc.is_alive(outer));
    assert!(layout.doc.is_alive(inner));
    assert_eq!(layout.order(), vec![inner.upcast()]);

    // dropping B dissolves inner into the layer
    layout.doc.remove_entity(e[1]).unwrap();
    assert!(!layout.doc.is_alive(inner));
    assert_eq!(layout.order(), vec![e[0]]);
}

#[test]
fn grouping_all_children_of_a_group_replaces_it() {
    let mut layout = Layout::with_rectangles(2);
    let e = layout.entities.clone();
    let outer = layout.group(&[0, 1]);
    let inner = layout.doc.create_group(&[e[0], e[1]]).unwrap();

    assert!(!layout.doc.is_alive(outer));
    assert_eq!(layout.order(), vec![inner.upcast()]);
    assert_eq!(layout.doc.group_children(inner).unwrap(), &[e[0], e[1]]);
}

#[test]
fn an_entity_and_its_ancestor_cannot_be_grouped() {
    let mut layout = Layout::with_rectangles(3);
    let e = layout.entities.clone();
    let group = layout.group(&[0, 1]);
    let err = layout
        .doc
        .create_group(&[group.upcast(), e[0]])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generic);
}

#[test]
fn free_and_placed_entities_cannot_be_mixed() {
    let mut layout = Layout::with_rectangles(1);
    let free = layout.doc.create_rectangle(unit_at(5.0)).unwrap();
    let err = layout
        .doc
        .create_group(&[layout.entities[0], free.upcast()])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generic);
}

#[test]
fn entities_on_different_pages_cannot_be_grouped() {
    let mut layout = Layout::with_rectangles(1);
    let second = layout.doc.add_page("Page 2").unwrap();
    let mut r = layout.doc.create_rectangle(unit_at(5.0)).unwrap();
    layout.doc.add_entity(r, layout.layer, Some(second)).unwrap();
    let other = r.upcast();
    layout.doc.release(&mut r).unwrap();

    let err = layout
        .doc
        .create_group(&[layout.entities[0], other])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generic);
}

#[test]
fn non_drawables_cannot_be_grouped() {
    let mut layout = Layout::with_rectangles(1);
    let font = layout.doc.create_font("Serif", 9.0).unwrap();
    let err = layout
        .doc
        .create_group(&[layout.entities[0], font.upcast()])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generic);
}

#[test]
fn reorder_inside_a_group() {
    let mut layout = Layout::with_rectangles(3);
    let e = layout.entities.clone();
    let group = layout.group(&[0, 1, 2]);
    layout.doc.reorder_entity(group, e[0], 2).unwrap();
    assert_eq!(layout.doc.group_children(group).unwrap(), &[e[1], e[2], e[0]]);
}

#[test]
fn membership_queries_follow_the_chain() {
    let mut layout = Layout::with_rectangles(2);
    let e = layout.entities.clone();
    let _group = layout.group(&[0, 1]);

    let doc = &layout.doc;
    assert_eq!(doc.entity_layer_instance(e[0]).unwrap(), Some(layout.instance));
    assert_eq!(doc.entity_layer(e[0]).unwrap(), Some(layout.layer));
    assert_eq!(doc.entity_page(e[0]).unwrap(), Some(layout.page));
    assert!(doc.entity_is_in_document(e[0]).unwrap());
    assert!(!doc.entity_is_on_shared_layer(e[0]).unwrap());
}

#[test]
fn shared_layer_members_have_no_page() {
    let mut doc = Document::new();
    let master = doc.add_layer("Master", true).unwrap();
    let mut r = doc.create_rectangle(unit_at(0.0)).unwrap();
    doc.add_entity(r, master, None).unwrap();
    assert!(doc.entity_is_on_shared_layer(r).unwrap());
    assert_eq!(doc.entity_page(r).unwrap(), None);
    let entity = r.upcast();
    doc.release(&mut r).unwrap();
    assert!(doc.is_entity_alive(entity));
}

#[test]
fn transforming_a_group_moves_its_children() {
    let mut layout = Layout::with_rectangles(2);
    let e = layout.entities.clone();
    let group = layout.group(&[0, 1]);

    layout
        .doc
        .apply_transform(group, Transform2D::translation(Vector2::new(10.0, 5.0)))
        .unwrap();
    assert_eq!(
        layout.doc.entity_bounds(e[0]).unwrap(),
        AxisAlignedRect2D::from_xywh(10.0, 5.0, 1.0, 1.0)
    );
    assert_eq!(
        layout.doc.entity_bounds(group).unwrap(),
        AxisAlignedRect2D::from_xywh(10.0, 5.0, 3.0, 1.0)
    );
}

#[test]
fn singular_transforms_are_refused() {
    let mut layout = Layout::with_rectangles(1);
    let err = layout
        .doc
        .apply_transform(layout.entities[0], Transform2D::scaling(0.0, 1.0))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn set_bounds_grows_the_parent_group() {
    let mut layout = Layout::with_rectangles(2);
    let e = layout.entities.clone();
    let group = layout.group(&[0, 1]);
    let target = AxisAlignedRect2D::from_xywh(0.0, 0.0, 2.0, 4.0);
    layout.doc.set_entity_bounds(e[0], target).unwrap();

    assert_eq!(layout.doc.entity_bounds(e[0]).unwrap(), target);
    assert_eq!(
        layout.doc.entity_bounds(group).unwrap(),
        AxisAlignedRect2D::from_xywh(0.0, 0.0, 3.0, 4.0)
    );
}

#[test]
fn flags_round_trip() {
    let mut layout = Layout::with_rectangles(1);
    let e = layout.entities[0];
    let flags = EntityFlags::LOCKED | EntityFlags::NON_PRINTING;
    layout.doc.set_entity_flags(e, flags).unwrap();
    assert_eq!(layout.doc.entity_flags(e).unwrap(), flags);
}
