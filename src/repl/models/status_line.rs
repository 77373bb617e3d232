//! # Status Line Model
//!
//! State shown on the last terminal row: the pending ex command while in
//! Command mode, and otherwise the label of the last navigation action.

use bytes::Bytes;
use std::fmt;

/// What the status row reports after a key in Normal or Insert mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusAction {
    Up,
    Down,
    Left,
    Right,
    /// Unbound input echoed in Normal mode
    Input(Bytes),
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusAction::Up => f.write_str("Up"),
            StatusAction::Down => f.write_str("Down"),
            StatusAction::Left => f.write_str("Left"),
            StatusAction::Right => f.write_str("Right"),
            StatusAction::Input(bytes) => write!(f, "input: {}", String::from_utf8_lossy(bytes)),
        }
    }
}

/// Status line model containing all status row state
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    /// Ex command typed after `:`
    command_buffer: String,

    /// Last action shown on the status row
    action: Option<StatusAction>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    // === Command Buffer Methods ===

    pub fn command_buffer(&self) -> &str {
        &self.command_buffer
    }

    pub fn is_command_empty(&self) -> bool {
        self.command_buffer.is_empty()
    }

    /// Append typed input; invalid UTF-8 is replaced rather than rejected
    pub fn append_to_command_buffer(&mut self, bytes: &[u8]) {
        self.command_buffer.push_str(&String::from_utf8_lossy(bytes));
    }

    /// Remove the last character from the command buffer
    pub fn backspace_command_buffer(&mut self) {
        self.command_buffer.pop();
    }

    pub fn clear_command_buffer(&mut self) {
        self.command_buffer.clear();
    }

    /// Take the command buffer, leaving it empty
    pub fn take_command_buffer(&mut self) -> String {
        std::mem::take(&mut self.command_buffer)
    }

    // === Action Methods ===

    pub fn action(&self) -> Option<&StatusAction> {
        self.action.as_ref()
    }

    pub fn set_action(&mut self, action: StatusAction) {
        self.action = Some(action);
    }
}
