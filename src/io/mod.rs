//! I/O for file-backed entities

pub mod image;

pub use image::{read_image_file, sniff, ImageFormat, ImageHeader};
