//! # Core Editor State
//!
//! Contains the [`EditorState`] struct, its construction, and the key dispatch
//! entry point. Mode, cursor, buffer and command-line behaviour live in the
//! sibling manager modules as further `impl EditorState` blocks.

use std::fmt;

use crate::exit_status::ExitStatus;
use crate::repl::events::{CursorPosition, EditorMode, Key, ViewEvent};
use crate::repl::models::{CursorModel, LineBuffer, StatusLine};
use crate::repl::view_models::ex_command_manager::{DiscardingCommandHandler, ExCommandHandler};

/// Result of dispatching one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Keep reading input
    Continue,
    /// End the input loop with this status
    Exit(ExitStatus),
}

/// All mutable editor state, owned by the input loop
pub struct EditorState {
    pub(super) buffer: LineBuffer,
    pub(super) cursor: CursorModel,
    pub(super) mode: EditorMode,
    pub(super) status_line: StatusLine,
    pub(super) command_handler: Box<dyn ExCommandHandler>,
    pending_view_events: Vec<ViewEvent>,
}

impl EditorState {
    /// Create editor state over the given buffer, cursor at the origin, Normal mode
    pub fn new(buffer: LineBuffer) -> Self {
        Self {
            buffer,
            cursor: CursorModel::new(),
            mode: EditorMode::Normal,
            status_line: StatusLine::new(),
            command_handler: Box::new(DiscardingCommandHandler),
            pending_view_events: Vec::new(),
        }
    }

    /// Create editor state from loaded file lines
    pub fn from_lines(lines: Vec<Vec<u8>>) -> Self {
        Self::new(LineBuffer::new(lines))
    }

    /// Replace the handler that receives executed ex commands
    pub fn with_command_handler(mut self, handler: Box<dyn ExCommandHandler>) -> Self {
        self.command_handler = handler;
        self
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    /// Dispatch one decoded key to the handler for the current mode
    pub fn dispatch(&mut self, key: Key) -> Dispatch {
        tracing::debug!("Dispatching {:?} in {:?} mode", key, self.mode);

        if key == Key::Interrupt {
            tracing::info!("Interrupt key received, requesting exit");
            return Dispatch::Exit(ExitStatus::Interrupted);
        }

        match self.mode {
            EditorMode::Normal => self.handle_normal_key(key),
            EditorMode::Insert => self.handle_insert_key(key),
            EditorMode::Command => self.handle_command_key(key),
        }

        Dispatch::Continue
    }

    fn handle_normal_key(&mut self, key: Key) {
        match key {
            Key::ArrowUp => self.move_cursor_up(),
            Key::ArrowDown => self.move_cursor_down(),
            Key::ArrowLeft => self.move_cursor_left(),
            Key::ArrowRight => self.move_cursor_right(),
            Key::Other(bytes) if &bytes[..] == b"i" => self.change_mode(EditorMode::Insert),
            Key::Other(bytes) if &bytes[..] == b":" => self.change_mode(EditorMode::Command),
            Key::Other(bytes) => self.echo_input(bytes),
            Key::Escape | Key::Enter | Key::Backspace | Key::Delete | Key::Interrupt => {}
        }
    }

    fn handle_insert_key(&mut self, key: Key) {
        match key {
            Key::ArrowUp => self.move_cursor_up(),
            Key::ArrowDown => self.move_cursor_down(),
            Key::ArrowLeft => self.move_cursor_left(),
            Key::ArrowRight => self.move_cursor_right(),
            Key::Escape => self.change_mode(EditorMode::Normal),
            Key::Other(bytes) => self.insert_bytes(&bytes),
            // Line splitting and deletion are not supported
            Key::Enter | Key::Backspace | Key::Delete | Key::Interrupt => {}
        }
    }

    fn handle_command_key(&mut self, key: Key) {
        match key {
            Key::Escape => self.cancel_ex_command(),
            Key::Enter => self.execute_ex_command(),
            Key::Backspace | Key::Delete => self.backspace_ex_command(),
            Key::Other(bytes) => self.add_ex_command_bytes(&bytes),
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight | Key::Interrupt => {}
        }
    }

    /// Queue view events for the renderer
    pub(super) fn emit_view_event(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        self.pending_view_events.extend(events);
    }

    /// Drain the view events queued since the last call
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }

    /// Place the cursor directly (initial state, tests)
    pub fn set_cursor_position(&mut self, position: CursorPosition) {
        self.cursor.set_x(position.x);
        self.cursor.set_y(position.y);
    }
}

impl fmt::Debug for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorState")
            .field("mode", &self.mode)
            .field("cursor", &self.cursor.position())
            .field("line_count", &self.buffer.line_count())
            .field("command_buffer", &self.status_line.command_buffer())
            .finish()
    }
}
