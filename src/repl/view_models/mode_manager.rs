//! # Mode Management
//!
//! Handles editor mode transitions and the status-line side effects that go
//! with them.

use crate::repl::events::{EditorMode, ViewEvent};
use crate::repl::view_models::core::EditorState;

impl EditorState {
    /// Get current editor mode
    pub fn get_mode(&self) -> EditorMode {
        self.mode
    }

    /// Change editor mode
    ///
    /// Leaving Command mode always clears the pending command and the prompt row;
    /// entering it shows an empty prompt.
    pub fn change_mode(&mut self, mode: EditorMode) {
        let old_mode = self.mode;
        if old_mode == mode {
            return;
        }
        tracing::debug!("Changing mode from {:?} to {:?}", old_mode, mode);

        self.mode = mode;

        if old_mode == EditorMode::Command {
            self.status_line.clear_command_buffer();
            self.emit_view_event([ViewEvent::CommandLineClosed]);
        }
        if mode == EditorMode::Command {
            self.status_line.clear_command_buffer();
            self.emit_view_event([ViewEvent::CommandLineUpdateRequired]);
        }

        tracing::info!("Changed mode from {:?} to {:?}", old_mode, mode);
    }

    pub fn is_normal_mode(&self) -> bool {
        self.mode == EditorMode::Normal
    }

    pub fn is_insert_mode(&self) -> bool {
        self.mode == EditorMode::Insert
    }

    pub fn is_command_mode(&self) -> bool {
        self.mode == EditorMode::Command
    }
}
