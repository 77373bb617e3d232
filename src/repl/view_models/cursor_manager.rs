//! # Cursor Management
//!
//! Arrow-key movement with clamping against the line buffer. The cursor model
//! only guards the lower bound; the upper column bound depends on the mode:
//! the last character in Normal mode, one past it in Insert mode.

use crate::repl::events::{CursorPosition, EditorMode, ViewEvent};
use crate::repl::models::StatusAction;
use crate::repl::view_models::core::EditorState;

impl EditorState {
    /// Get current cursor position
    pub fn get_cursor_position(&self) -> CursorPosition {
        self.cursor.position()
    }

    /// Rightmost column the cursor may occupy on `row` in the current mode
    fn column_limit(&self, row: usize) -> usize {
        let len = self.buffer.line_len(row);
        match self.mode {
            EditorMode::Insert => len + 1,
            EditorMode::Normal | EditorMode::Command => len.max(1),
        }
    }

    /// Pull the column back onto `row` if that line is shorter than the cursor column
    fn clamp_column_to(&mut self, row: usize) {
        let limit = self.column_limit(row);
        if self.cursor.x() > limit {
            self.cursor.set_x(limit);
        }
    }

    pub fn move_cursor_up(&mut self) {
        let y = self.cursor.y();
        if y <= 1 {
            return;
        }
        self.clamp_column_to(y - 1);
        self.cursor.move_up(1);
        self.report_movement(StatusAction::Up);
    }

    pub fn move_cursor_down(&mut self) {
        let y = self.cursor.y();
        if y >= self.buffer.line_count() {
            return;
        }
        self.clamp_column_to(y + 1);
        self.cursor.move_down(1);
        self.report_movement(StatusAction::Down);
    }

    /// Floored at the first column; never wraps to the previous line
    pub fn move_cursor_left(&mut self) {
        self.cursor.move_left(1);
        self.report_movement(StatusAction::Left);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor.x() >= self.column_limit(self.cursor.y()) {
            return;
        }
        self.cursor.move_right(1);
        self.report_movement(StatusAction::Right);
    }

    /// Echo unbound Normal-mode input on the status row
    pub(super) fn echo_input(&mut self, bytes: bytes::Bytes) {
        self.report_movement(StatusAction::Input(bytes));
    }

    fn report_movement(&mut self, action: StatusAction) {
        tracing::debug!("Cursor at {:?} after {}", self.cursor.position(), action);
        self.status_line.set_action(action);
        self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);
    }
}
