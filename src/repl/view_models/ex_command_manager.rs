//! # Ex Command Management
//!
//! Handles the pending command typed after `:` and hands it to an
//! [`ExCommandHandler`] on Enter.

use anyhow::Result;

use crate::repl::events::{EditorMode, ViewEvent};
use crate::repl::view_models::core::EditorState;

/// Receives ex commands when the user presses Enter in Command mode
pub trait ExCommandHandler: Send {
    fn execute(&mut self, command: &str) -> Result<()>;
}

/// Default handler: commands are accepted and dropped
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardingCommandHandler;

impl ExCommandHandler for DiscardingCommandHandler {
    fn execute(&mut self, command: &str) -> Result<()> {
        tracing::debug!("Discarding ex command: {:?}", command);
        Ok(())
    }
}

impl EditorState {
    /// Get ex command buffer
    pub fn get_ex_command_buffer(&self) -> &str {
        self.status_line.command_buffer()
    }

    /// Append typed input to the ex command buffer
    pub fn add_ex_command_bytes(&mut self, bytes: &[u8]) {
        self.status_line.append_to_command_buffer(bytes);
        self.emit_view_event([ViewEvent::CommandLineUpdateRequired]);
    }

    /// Remove the last character; an already empty buffer cancels command entry
    pub fn backspace_ex_command(&mut self) {
        if self.status_line.is_command_empty() {
            self.change_mode(EditorMode::Normal);
            return;
        }
        self.status_line.backspace_command_buffer();
        self.emit_view_event([ViewEvent::CommandLineUpdateRequired]);
    }

    /// Abandon the pending command
    pub fn cancel_ex_command(&mut self) {
        self.change_mode(EditorMode::Normal);
    }

    /// Hand the pending command to the handler and return to Normal mode
    pub fn execute_ex_command(&mut self) {
        let command = self.status_line.take_command_buffer();
        tracing::info!("Executing ex command: {:?}", command);

        if let Err(e) = self.command_handler.execute(&command) {
            tracing::warn!("Ex command {:?} failed: {}", command, e);
        }

        self.change_mode(EditorMode::Normal);
    }
}
