//! Build a small layout from the image files given on the command line and
//! print its layers, draw order and groups.
//!
//! ```text
//! lo_inspect logo.png photo.jpg
//! RUST_LOG=layoutrs=debug lo_inspect logo.png
//! ```

use anyhow::{Context, Result};
use layoutrs::{AxisAlignedRect2D, Document, EntityRef, ObjectRef, RefType};
use tracing_subscriber::EnvFilter;

fn print_members(doc: &Document, members: &[EntityRef], depth: usize) -> Result<()> {
    for &entity in members {
        let kind = doc.ref_type(entity)?;
        let bounds = doc.entity_bounds(entity)?;
        println!("{:indent$}{} {} {}", "", kind, entity.handle(), bounds, indent = depth * 2);
        if kind == RefType::Group {
            let group = doc.downcast(entity);
            print_members(doc, doc.group_children(group)?, depth + 1)?;
        }
        for name in doc.attribute_dictionary_names(entity)? {
            let dictionary = doc.find_attribute_dictionary(entity, &name)?;
            for key in doc.dictionary_keys(dictionary)? {
                println!(
                    "{:indent$}  {}.{} = {:?}",
                    "",
                    name,
                    key,
                    doc.dictionary_get(dictionary, &key)?,
                    indent = depth * 2
                );
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("layoutrs=info")),
        )
        .init();

    let mut doc = Document::new();
    let layer = doc.layer_by_name("Default")?;
    let page = doc.pages()[0];

    let mut placed = Vec::new();
    let mut frame = doc.create_rectangle(AxisAlignedRect2D::from_xywh(0.0, 0.0, 8.5, 11.0))?;
    doc.add_entity(frame, layer, Some(page))?;
    // the layer instance holds the frame now
    doc.release(&mut frame)?;

    for (i, path) in std::env::args().skip(1).enumerate() {
        let bounds = AxisAlignedRect2D::from_xywh(0.5 + i as f64, 0.5 + i as f64, 3.0, 2.0);
        let mut image = doc
            .create_image_from_file(&path, bounds)
            .with_context(|| format!("loading {}", path))?;
        doc.add_entity(image, layer, Some(page))?;
        let meta = doc.attribute_dictionary(image, "source")?;
        doc.dictionary_set(meta, "path", path.as_str())?;
        placed.push(image.upcast());
        doc.release(&mut image)?;
    }

    if placed.len() >= 2 {
        let mut group = doc.create_group(&placed)?;
        doc.release(&mut group)?;
    }

    println!("layoutrs {}", layoutrs::VERSION);
    for page in doc.pages().to_vec() {
        println!("page {}", doc.get(page)?.name());
        for layer in doc.layers().collect::<Vec<_>>() {
            let l = doc.get(layer)?;
            let instance = doc.layer_instance(layer, Some(page))?;
            let members = doc.layer_instance_entities(instance)?;
            println!(
                "  layer {}{} ({} entities)",
                l.name(),
                if l.is_shared() { " [shared]" } else { "" },
                members.len()
            );
            print_members(&doc, members, 2)?;
        }
    }

    for notification in doc.notifications() {
        println!("{}", notification);
    }
    let stats = doc.stats();
    println!(
        "objects: {} live, {} created, {} destroyed",
        stats.live, stats.created, stats.destroyed
    );
    Ok(())
}
