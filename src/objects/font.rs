//! Font description

use crate::error::{LayoutError, Result};

/// Font description shared by text-bearing styles
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: String,
    point_size: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Font {
    pub(crate) fn new(family: impl Into<String>, point_size: f64) -> Result<Self> {
        let family = family.into();
        if family.trim().is_empty() {
            return Err(LayoutError::InvalidArgument(
                "font family is empty".to_string(),
            ));
        }
        validate_point_size(point_size)?;
        Ok(Self {
            family,
            point_size,
            bold: false,
            italic: false,
            underline: false,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn point_size(&self) -> f64 {
        self.point_size
    }

    pub fn set_point_size(&mut self, point_size: f64) -> Result<()> {
        validate_point_size(point_size)?;
        self.point_size = point_size;
        Ok(())
    }

    /// Face name as shown in font pickers, e.g. "Helvetica Bold Italic"
    pub fn face_name(&self) -> String {
        let mut name = self.family.clone();
        if self.bold {
            name.push_str(" Bold");
        }
        if self.italic {
            name.push_str(" Italic");
        }
        name
    }
}

fn validate_point_size(point_size: f64) -> Result<()> {
    if !point_size.is_finite() || point_size <= 0.0 {
        return Err(LayoutError::OutOfRange(format!(
            "point size {} must be positive",
            point_size
        )));
    }
    Ok(())
}
