//! # Buffer Operations
//!
//! Text insertion in Insert mode.

use crate::repl::events::ViewEvent;
use crate::repl::view_models::core::EditorState;

impl EditorState {
    /// Splice `bytes` in before the cursor and advance the cursor one column.
    /// An empty chunk leaves the buffer and cursor untouched.
    pub fn insert_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let position = self.cursor.position();
        self.buffer.splice_insert(position.y, position.x, bytes);
        self.cursor.move_right(1);

        tracing::debug!(
            "Inserted {} byte(s) at {:?}, cursor now {:?}",
            bytes.len(),
            position,
            self.cursor.position()
        );
        self.emit_view_event([ViewEvent::LineRedrawRequired { row: position.y }]);
    }
}
