//! Command metadata - menu and toolbar entries exposed by an application

use crate::error::{LayoutError, Result};
use bitflags::bitflags;

bitflags! {
    /// Validation state of a command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CommandState: u8 {
        /// Command can be invoked.
        const ENABLED = 1;
        /// Command shows a check mark.
        const CHECKED = 2;
        /// Command appears in menus and toolbars.
        const VISIBLE = 4;
    }
}

impl Default for CommandState {
    fn default() -> Self {
        CommandState::ENABLED | CommandState::VISIBLE
    }
}

/// Command metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    identifier: String,
    pub menu_text: String,
    pub tooltip: String,
    pub status_bar_text: String,
    pub state: CommandState,
}

impl Command {
    pub(crate) fn new(identifier: impl Into<String>, menu_text: impl Into<String>) -> Result<Self> {
        let identifier = identifier.into();
        if identifier.is_empty() || identifier.chars().any(char::is_whitespace) {
            return Err(LayoutError::InvalidArgument(format!(
                "command identifier '{}' must be non-empty without whitespace",
                identifier
            )));
        }
        Ok(Self {
            identifier,
            menu_text: menu_text.into(),
            tooltip: String::new(),
            status_bar_text: String::new(),
            state: CommandState::default(),
        })
    }

    /// Stable identifier, e.g. `"edit.group"`
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn is_enabled(&self) -> bool {
        self.state.contains(CommandState::ENABLED)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.set(CommandState::ENABLED, enabled);
    }

    pub fn is_checked(&self) -> bool {
        self.state.contains(CommandState::CHECKED)
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.state.set(CommandState::CHECKED, checked);
    }
}
