//! Shared helpers for layoutrs integration tests.
//!
//! Builders for a document with a populated default layer, and byte
//! builders for minimal encoded images.

#![allow(dead_code)]

pub mod builders;

use layoutrs::AxisAlignedRect2D;
use std::path::PathBuf;

/// Unit square at `(x, 0)`
pub fn unit_at(x: f64) -> AxisAlignedRect2D {
    AxisAlignedRect2D::from_xywh(x, 0.0, 1.0, 1.0)
}

/// Fresh path in the system temp dir, unique per test and process
pub fn temp_path(test_name: &str, file_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "layoutrs-{}-{}",
        std::process::id(),
        test_name
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(file_name)
}
