//! Image entity - raster image placed on a page

use super::EntityCommon;
use crate::error::{LayoutError, Result};
use crate::io::image::{ImageFormat, ImageHeader};
use crate::types::AxisAlignedRect2D;
use std::path::{Path, PathBuf};

/// Raster image entity
///
/// The encoded bytes are kept as loaded; only the header is interpreted.
///
/// # Example
/// ```ignore
/// use layoutrs::{AxisAlignedRect2D, Document};
///
/// let mut doc = Document::new();
/// let bounds = AxisAlignedRect2D::from_xywh(1.0, 1.0, 4.0, 3.0);
/// let image = doc.create_image_from_file("photo.png", bounds)?;
/// let payload = doc.get(image)?;
/// println!("{} x {}", payload.pixel_width(), payload.pixel_height());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub(crate) common: EntityCommon,
    header: ImageHeader,
    data: Vec<u8>,
    source_path: Option<PathBuf>,
    clip: Option<AxisAlignedRect2D>,
}

impl Image {
    pub(crate) fn new(bounds: AxisAlignedRect2D, header: ImageHeader, data: Vec<u8>) -> Self {
        Self {
            common: EntityCommon::new(bounds),
            header,
            data,
            source_path: None,
            clip: None,
        }
    }

    pub(crate) fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    pub fn common(&self) -> &EntityCommon {
        &self.common
    }

    /// Encoded format
    pub fn format(&self) -> ImageFormat {
        self.header.format
    }

    /// Get image width in pixels
    pub fn pixel_width(&self) -> u32 {
        self.header.width
    }

    /// Get image height in pixels
    pub fn pixel_height(&self) -> u32 {
        self.header.height
    }

    /// Get the aspect ratio (width/height)
    pub fn aspect_ratio(&self) -> f64 {
        self.header.width as f64 / self.header.height as f64
    }

    /// Encoded bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// File the image was loaded from, if any
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Clip rectangle in untransformed entity space
    pub fn clip(&self) -> Option<AxisAlignedRect2D> {
        self.clip
    }

    /// Set or clear the clip rectangle
    ///
    /// A clip rectangle must have area and must overlap the image bounds.
    pub fn set_clip(&mut self, clip: Option<AxisAlignedRect2D>) -> Result<()> {
        let clip = match clip {
            Some(rect) => {
                let rect = rect.validated()?;
                let b = self.common.bounds;
                let overlaps = rect.upper_left.x < b.lower_right.x
                    && rect.lower_right.x > b.upper_left.x
                    && rect.upper_left.y < b.lower_right.y
                    && rect.lower_right.y > b.upper_left.y;
                if !overlaps {
                    return Err(LayoutError::OutOfRange(format!(
                        "clip {} lies outside image bounds {}",
                        rect, b
                    )));
                }
                Some(rect)
            }
            None => None,
        };
        self.clip = clip;
        Ok(())
    }

    /// Output resolution in pixels per page unit along x
    pub fn resolution(&self) -> f64 {
        self.header.width as f64 / self.common.bounds.width().abs()
    }
}
