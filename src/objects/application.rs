//! Application instance description

use crate::error::{LayoutError, Result};
use std::fmt;

/// Application version triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AppVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl AppVersion {
    pub const fn new(major: u32, minor: u32, build: u32) -> Self {
        AppVersion {
            major,
            minor,
            build,
        }
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

/// Application instance
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    name: String,
    version: AppVersion,
    /// BCP 47 locale tag, e.g. `"en-US"`
    pub locale: String,
}

impl Application {
    pub(crate) fn new(name: impl Into<String>, version: AppVersion) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(LayoutError::InvalidArgument(
                "application name is empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            version,
            locale: "en-US".to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> AppVersion {
        self.version
    }

    /// Name and version, e.g. "LayOut 2024.0.1"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
