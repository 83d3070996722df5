//! Document and image byte builders

#![allow(dead_code)]

use super::unit_at;
use layoutrs::types::{GroupRef, LayerInstanceRef, LayerRef, PageRef};
use layoutrs::{Document, EntityRef, ObjectRef};

/// A document with `count` rectangles on the default layer of the first
/// page. The caller's references have been released, so the layer
/// instance holds the only reference to each rectangle.
pub struct Layout {
    pub doc: Document,
    pub layer: LayerRef,
    pub page: PageRef,
    pub instance: LayerInstanceRef,
    pub entities: Vec<EntityRef>,
}

impl Layout {
    pub fn with_rectangles(count: usize) -> Self {
        let mut doc = Document::new();
        let layer = doc.layer_by_name("Default").unwrap();
        let page = doc.pages()[0];
        let instance = doc.layer_instance(layer, Some(page)).unwrap();
        let mut entities = Vec::with_capacity(count);
        for i in 0..count {
            let mut r = doc.create_rectangle(unit_at(i as f64 * 2.0)).unwrap();
            doc.add_entity(r, layer, Some(page)).unwrap();
            entities.push(r.upcast());
            doc.release(&mut r).unwrap();
        }
        Layout {
            doc,
            layer,
            page,
            instance,
            entities,
        }
    }

    /// Top-level draw order of the default layer instance
    pub fn order(&self) -> Vec<EntityRef> {
        self.doc
            .layer_instance_entities(self.instance)
            .unwrap()
            .to_vec()
    }

    /// Group the entities at `indices` and drop the caller's reference
    pub fn group(&mut self, indices: &[usize]) -> GroupRef {
        let list: Vec<EntityRef> = indices.iter().map(|&i| self.entities[i]).collect();
        let group = self.doc.create_group(&list).unwrap();
        let mut alias = group;
        self.doc.release(&mut alias).unwrap();
        group
    }
}

/// Minimal PNG: signature plus an IHDR chunk
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0, 0, 0, 0, 0]);
    bytes
}

/// Minimal GIF: header and logical screen descriptor
pub fn gif_bytes(width: u16, height: u16) -> Vec<u8> {
    let mut bytes = b"GIF89a".to_vec();
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes.extend_from_slice(&[0, 0, 0]);
    bytes
}
