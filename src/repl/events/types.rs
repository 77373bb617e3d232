//! # Core Event Types
//!
//! Common types used throughout the event system: cursor positions, the
//! viewport extent and editor modes.

use std::fmt;

/// Cursor position on screen, both coordinates 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl CursorPosition {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Top-left corner
    pub fn origin() -> Self {
        Self::new(1, 1)
    }
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::origin()
    }
}

/// Visible terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: u16,
    pub columns: u16,
}

impl Viewport {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self { rows, columns }
    }

    /// Rows available for buffer content; the last row belongs to the status line
    pub fn content_rows(&self) -> usize {
        usize::from(self.rows.saturating_sub(1))
    }

    /// Row used for the status line and the command prompt
    pub fn status_row(&self) -> u16 {
        self.rows
    }
}

/// Editor mode (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Navigation mode; arrow keys move, `i` and `:` switch modes
    #[default]
    Normal,
    /// Typed bytes are spliced into the current line
    Insert,
    /// Typed characters accumulate into the pending command
    Command,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditorMode::Normal => "NORMAL",
            EditorMode::Insert => "INSERT",
            EditorMode::Command => "COMMAND",
        };
        f.write_str(name)
    }
}
