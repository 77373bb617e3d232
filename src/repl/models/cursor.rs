//! # Cursor Model
//!
//! Holds the cursor position and applies floor-bounded moves. Upper bounds
//! depend on line lengths and the editor mode, so they are enforced by the
//! editor state rather than here.

use crate::repl::events::CursorPosition;

/// Cursor position with bounded movement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorModel {
    position: CursorPosition,
}

impl CursorModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(position: CursorPosition) -> Self {
        Self { position }
    }

    pub fn position(&self) -> CursorPosition {
        self.position
    }

    pub fn x(&self) -> usize {
        self.position.x
    }

    pub fn y(&self) -> usize {
        self.position.y
    }

    /// A move that would cross row 1 leaves the row unchanged
    pub fn move_up(&mut self, n: usize) {
        if self.position.y > n {
            self.position.y -= n;
        }
    }

    pub fn move_down(&mut self, n: usize) {
        self.position.y += n;
    }

    /// A move that would cross column 1 leaves the column unchanged
    pub fn move_left(&mut self, n: usize) {
        if self.position.x > n {
            self.position.x -= n;
        }
    }

    pub fn move_right(&mut self, n: usize) {
        self.position.x += n;
    }

    /// Set the column directly; used when clamping against a shorter line
    pub fn set_x(&mut self, x: usize) {
        debug_assert!(x >= 1, "cursor column is 1-based");
        self.position.x = x.max(1);
    }

    pub fn set_y(&mut self, y: usize) {
        debug_assert!(y >= 1, "cursor row is 1-based");
        self.position.y = y.max(1);
    }
}
