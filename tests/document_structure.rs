//! Pages, layers and their instances

mod common;

use common::builders::Layout;
use common::unit_at;
use layoutrs::{Document, DocumentConfiguration, ErrorKind, ObjectRef};

#[test]
fn a_new_document_has_one_page_and_one_layer() {
    let doc = Document::new();
    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.layer_count(), 1);
    let page = doc.pages()[0];
    assert_eq!(doc.get(page).unwrap().name(), "Page 1");
    let layer = doc.layer_by_name("default").unwrap();
    assert!(!doc.get(layer).unwrap().is_shared());
    assert!(doc.layer_instance(layer, Some(page)).is_ok());
}

#[test]
fn configuration_names_the_defaults() {
    let doc = Document::with_configuration(DocumentConfiguration {
        default_page_name: "Cover".to_string(),
        default_layer_name: "Base".to_string(),
        ..DocumentConfiguration::default()
    });
    assert_eq!(doc.get(doc.pages()[0]).unwrap().name(), "Cover");
    assert!(doc.layer_by_name("BASE").is_ok());
    assert_eq!(doc.configuration().default_layer_name, "Base");
}

#[test]
fn new_pages_get_instances_of_per_page_layers() {
    let mut doc = Document::new();
    let master = doc.add_layer("Master", true).unwrap();
    let layer = doc.layer_by_name("Default").unwrap();
    let second = doc.add_page("Page 2").unwrap();

    let first_instance = doc.layer_instance(layer, Some(doc.pages()[0])).unwrap();
    let second_instance = doc.layer_instance(layer, Some(second)).unwrap();
    assert_ne!(first_instance, second_instance);
    assert_eq!(doc.get(second_instance).unwrap().page(), Some(second));

    // shared layers keep one instance for every page
    let shared = doc.layer_instance(master, None).unwrap();
    assert_eq!(doc.layer_instance(master, Some(second)).unwrap(), shared);
    assert_eq!(doc.get(master).unwrap().instances().len(), 1);
}

#[test]
fn per_page_layers_need_a_page() {
    let doc = Document::new();
    let layer = doc.layer_by_name("Default").unwrap();
    let err = doc.layer_instance(layer, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn layer_names_are_unique_without_regard_to_case() {
    let mut doc = Document::new();
    doc.add_layer("Notes", false).unwrap();
    let err = doc.add_layer("NOTES", true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Duplicate);
    assert_eq!(doc.add_layer("", false).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(doc.layer_by_name("missing").unwrap_err().kind(), ErrorKind::NoData);
}

#[test]
fn rename_and_reorder_layers() {
    let mut doc = Document::new();
    let base = doc.layer_by_name("Default").unwrap();
    let top = doc.add_layer("Top", false).unwrap();
    assert_eq!(doc.layers().collect::<Vec<_>>(), vec![base, top]);

    doc.reorder_layer(top, 0).unwrap();
    assert_eq!(doc.layer_index(top).unwrap(), 0);
    assert_eq!(doc.reorder_layer(top, 2).unwrap_err().kind(), ErrorKind::OutOfRange);

    doc.rename_layer(top, "Annotations").unwrap();
    assert_eq!(doc.layer_by_name("annotations").unwrap(), top);
    assert_eq!(doc.get(top).unwrap().name(), "Annotations");
    assert_eq!(
        doc.rename_layer(base, "ANNOTATIONS").unwrap_err().kind(),
        ErrorKind::Duplicate
    );
}

#[test]
fn removing_a_page_releases_its_entities() {
    let mut layout = Layout::with_rectangles(2);
    let second = layout.doc.add_page("Page 2").unwrap();
    let first = layout.page;
    let instance = layout.instance;

    layout.doc.remove_page(first).unwrap();
    assert_eq!(layout.doc.pages(), &[second]);
    assert!(!layout.doc.is_alive(first));
    assert!(!layout.doc.is_alive(instance));
    for e in &layout.entities {
        assert!(!layout.doc.is_entity_alive(*e));
    }
}

#[test]
fn removing_a_page_keeps_entities_with_caller_references() {
    let mut layout = Layout::with_rectangles(1);
    layout.doc.add_page("Page 2").unwrap();
    let e = layout.entities[0];
    layout.doc.add_entity_reference(e).unwrap();

    layout.doc.remove_page(layout.page).unwrap();
    assert!(layout.doc.is_entity_alive(e));
    assert!(!layout.doc.entity_is_in_document(e).unwrap());
}

#[test]
fn the_last_page_and_layer_stay() {
    let mut doc = Document::new();
    let page = doc.pages()[0];
    let layer = doc.layer_by_name("Default").unwrap();
    assert_eq!(doc.remove_page(page).unwrap_err().kind(), ErrorKind::Generic);
    assert_eq!(doc.remove_layer(layer).unwrap_err().kind(), ErrorKind::Generic);
}

#[test]
fn removing_a_layer_drops_its_instances() {
    let mut doc = Document::new();
    let notes = doc.add_layer("Notes", false).unwrap();
    let page = doc.pages()[0];
    let instance = doc.layer_instance(notes, Some(page)).unwrap();
    let mut r = doc.create_rectangle(unit_at(0.0)).unwrap();
    doc.add_entity(r, notes, Some(page)).unwrap();
    let entity = r.upcast();
    doc.release(&mut r).unwrap();

    doc.remove_layer(notes).unwrap();
    assert!(!doc.is_alive(notes));
    assert!(!doc.is_alive(instance));
    assert!(!doc.is_entity_alive(entity));
    assert_eq!(doc.layer_count(), 1);
}

#[test]
fn document_owned_objects_cannot_be_released_away() {
    let mut doc = Document::new();
    let mut page = doc.pages()[0];
    let mut layer = doc.layer_by_name("Default").unwrap();
    assert_eq!(doc.release(&mut page).unwrap_err().kind(), ErrorKind::Generic);
    assert_eq!(doc.release(&mut layer).unwrap_err().kind(), ErrorKind::Generic);
    assert!(page.is_valid());
    assert!(doc.is_alive(layer));
}

#[test]
fn sharing_switches_only_while_empty() {
    let mut layout = Layout::with_rectangles(1);
    let err = layout.doc.set_layer_shared(layout.layer, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generic);

    let notes = layout.doc.add_layer("Notes", false).unwrap();
    layout.doc.set_layer_shared(notes, true).unwrap();
    assert!(layout.doc.get(notes).unwrap().is_shared());
    let instance = layout.doc.layer_instance(notes, None).unwrap();
    assert!(layout.doc.get(instance).unwrap().is_shared());

    layout.doc.set_layer_shared(notes, false).unwrap();
    assert!(!layout.doc.is_alive(instance));
    assert!(layout.doc.layer_instance(notes, Some(layout.page)).is_ok());
}

#[test]
fn page_index_follows_presentation_order() {
    let mut doc = Document::new();
    let second = doc.add_page("Page 2").unwrap();
    assert_eq!(doc.page_index(second).unwrap(), 1);
    assert_eq!(doc.add_page("").unwrap_err().kind(), ErrorKind::InvalidArgument);
}
