//! Document page

/// A document page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub(crate) name: String,
    /// Page is shown in presentation mode
    pub in_presentation: bool,
}

impl Page {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Page {
            name: name.into(),
            in_presentation: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
