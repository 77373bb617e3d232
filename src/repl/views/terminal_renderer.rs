//! # View Layer
//!
//! Renders the editor state as escape-coded output. The renderer reads the
//! state but never mutates it, and it is the only writer to the terminal.
//!
//! Full repaints drop raw mode for their duration so that `\n` also returns
//! the carriage; every other update addresses rows explicitly.

use anyhow::{Context, Result};
use std::io::Write;

use super::ansi_escape_codes::{cursor_to, CLEAR_LINE_ENTIRE, CLEAR_SCREEN, CURSOR_HOME};
use crate::config::DEFAULT_STATUS_WIDTH;
use crate::repl::events::{Viewport, ViewEvent};
use crate::repl::io::RenderStream;
use crate::repl::view_models::EditorState;

/// Trait for rendering views
pub trait ViewRenderer {
    /// Put the terminal into editing mode
    fn initialize(&mut self) -> Result<()>;

    /// Clear the screen and repaint every content row
    fn render_full(&mut self, state: &EditorState) -> Result<()>;

    /// Rewrite the status row with the latest status action
    fn render_status_bar(&mut self, state: &EditorState) -> Result<()>;

    /// Rewrite one buffer row after an edit
    fn render_line(&mut self, state: &EditorState, row: usize) -> Result<()>;

    /// Show the command prompt with the pending command
    fn render_command_line(&mut self, state: &EditorState) -> Result<()>;

    /// Blank the prompt row and put the cursor back into the text
    fn close_command_line(&mut self, state: &EditorState) -> Result<()>;

    /// Handle view events
    fn handle_view_event(&mut self, event: &ViewEvent, state: &EditorState) -> Result<()>;

    /// Track a new terminal extent
    fn update_viewport(&mut self, viewport: Viewport);

    /// Restore the terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Renderer writing to a [`RenderStream`]
pub struct TerminalRenderer<RS: RenderStream> {
    stream: RS,
    viewport: Viewport,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer sized to the stream's current viewport
    pub fn new(stream: RS) -> Result<Self> {
        let viewport = stream.viewport()?;
        Ok(Self::with_viewport(stream, viewport))
    }

    pub fn with_viewport(stream: RS, viewport: Viewport) -> Self {
        Self { stream, viewport }
    }

    /// Get current viewport
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn write_and_flush(&mut self, bytes: &[u8]) -> Result<()> {
        self.stream
            .write_all(bytes)
            .and_then(|_| self.stream.flush())
            .context("Failed to write to terminal")
    }

    /// Bytes of a full repaint for `state`
    fn full_frame(&self, state: &EditorState) -> Vec<u8> {
        let buffer = state.buffer();
        let mut frame = Vec::new();
        frame.extend_from_slice(CLEAR_SCREEN.as_bytes());
        frame.extend_from_slice(CURSOR_HOME.as_bytes());

        for row in 1..=self.viewport.content_rows() {
            if let Some(line) = buffer.line(row) {
                frame.extend_from_slice(line);
            }
            frame.push(b'\n');
        }

        if buffer.is_empty() {
            frame.extend_from_slice(CURSOR_HOME.as_bytes());
        } else {
            frame.extend_from_slice(cursor_home_for(state).as_bytes());
        }
        frame
    }
}

/// Escape sequence placing the terminal cursor on the editor cursor
fn cursor_home_for(state: &EditorState) -> String {
    let position = state.get_cursor_position();
    cursor_to(position.y, position.x)
}

/// Status text padded so a shorter label overwrites a longer one
fn status_text(state: &EditorState) -> String {
    let position = state.get_cursor_position();
    let label = state
        .status_line()
        .action()
        .map(ToString::to_string)
        .unwrap_or_default();
    let text = format!("> X: {}, Y: {}, {}", position.x, position.y, label);
    format!("{text:<width$}", width = DEFAULT_STATUS_WIDTH)
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.stream.enable_raw_mode()
    }

    fn render_full(&mut self, state: &EditorState) -> Result<()> {
        let frame = self.full_frame(state);
        self.stream.disable_raw_mode()?;
        self.write_and_flush(&frame)?;
        self.stream.enable_raw_mode()
    }

    fn render_status_bar(&mut self, state: &EditorState) -> Result<()> {
        let output = format!(
            "{}{}{}{}",
            cursor_to(usize::from(self.viewport.status_row()), 0),
            CLEAR_LINE_ENTIRE,
            status_text(state),
            cursor_home_for(state),
        );
        self.write_and_flush(output.as_bytes())
    }

    fn render_line(&mut self, state: &EditorState, row: usize) -> Result<()> {
        let mut output = cursor_to(row, 0).into_bytes();
        output.extend_from_slice(state.buffer().line(row).unwrap_or_default());
        output.extend_from_slice(cursor_home_for(state).as_bytes());
        self.write_and_flush(&output)
    }

    fn render_command_line(&mut self, state: &EditorState) -> Result<()> {
        let output = format!(
            "{}{}:{}",
            cursor_to(usize::from(self.viewport.status_row()), 0),
            CLEAR_LINE_ENTIRE,
            state.get_ex_command_buffer(),
        );
        self.write_and_flush(output.as_bytes())
    }

    fn close_command_line(&mut self, state: &EditorState) -> Result<()> {
        let output = format!(
            "{}{}{}",
            cursor_to(usize::from(self.viewport.status_row()), 0),
            CLEAR_LINE_ENTIRE,
            cursor_home_for(state),
        );
        self.write_and_flush(output.as_bytes())
    }

    fn handle_view_event(&mut self, event: &ViewEvent, state: &EditorState) -> Result<()> {
        match event {
            ViewEvent::StatusBarUpdateRequired => self.render_status_bar(state),
            ViewEvent::LineRedrawRequired { row } => self.render_line(state, *row),
            ViewEvent::CommandLineUpdateRequired => self.render_command_line(state),
            ViewEvent::CommandLineClosed => self.close_command_line(state),
        }
    }

    fn update_viewport(&mut self, viewport: Viewport) {
        tracing::debug!(?viewport, "viewport updated");
        self.viewport = viewport;
    }

    fn cleanup(&mut self) -> Result<()> {
        self.stream.flush().context("Failed to flush terminal")?;
        self.stream.disable_raw_mode()
    }
}
