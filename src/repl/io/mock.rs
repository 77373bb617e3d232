//! # Mock I/O Implementations for Testing
//!
//! Scripted input and recorded output, so the input loop can run without a
//! terminal.

use anyhow::{anyhow, Result};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{EventStream, RenderStream};
use crate::repl::events::{InputEvent, Viewport};

/// Mock event stream for testing
///
/// Hands out pre-programmed events in order, then reports end of input.
#[derive(Debug, Default)]
pub struct MockEventStream {
    events: VecDeque<Result<InputEvent, String>>,
}

impl MockEventStream {
    /// Create a new mock event stream with pre-programmed events
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self {
            events: events.into_iter().map(Ok).collect(),
        }
    }

    /// Create an empty mock event stream
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add an event to the stream
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(Ok(event));
    }

    /// Queue a read failure; the loop sees it as an I/O error
    pub fn push_error(&mut self, message: &str) {
        self.events.push_back(Err(message.to_string()));
    }
}

impl EventStream for MockEventStream {
    async fn next_event(&mut self) -> Result<Option<InputEvent>> {
        match self.events.pop_front() {
            Some(Ok(event)) => Ok(Some(event)),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Ok(None),
        }
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    GetViewport,
    EnableRawMode,
    DisableRawMode,
    Write(Vec<u8>),
    Flush,
}

/// Shared view of everything a [`MockRenderStream`] recorded.
///
/// Cloned out before the stream is moved into a controller, so tests can
/// still inspect output afterwards.
#[derive(Debug, Clone, Default)]
pub struct RenderHistory {
    commands: Arc<Mutex<Vec<RenderCommand>>>,
}

impl RenderHistory {
    fn lock(&self) -> MutexGuard<'_, Vec<RenderCommand>> {
        self.commands.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, command: RenderCommand) {
        self.lock().push(command);
    }

    /// Get recorded commands for verification
    pub fn commands(&self) -> Vec<RenderCommand> {
        self.lock().clone()
    }

    /// Clear recorded commands
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// All written bytes, concatenated
    pub fn output(&self) -> Vec<u8> {
        self.lock()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Write(bytes) => Some(bytes.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    /// Written bytes as a (lossy) string
    pub fn output_string(&self) -> String {
        String::from_utf8_lossy(&self.output()).into_owned()
    }

    /// Check if a specific command was recorded
    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.lock().contains(command)
    }

    /// Whether raw mode is on after the recorded toggles
    pub fn raw_mode(&self) -> bool {
        self.lock()
            .iter()
            .rev()
            .find_map(|command| match command {
                RenderCommand::EnableRawMode => Some(true),
                RenderCommand::DisableRawMode => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

/// Mock render stream for testing
///
/// Records all rendering commands for verification in tests.
#[derive(Debug)]
pub struct MockRenderStream {
    history: RenderHistory,
    viewport: Viewport,
}

impl MockRenderStream {
    /// Create a new mock render stream
    pub fn new() -> Self {
        Self::with_viewport(Viewport::new(24, 80))
    }

    /// Create a mock render stream with specific terminal size
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            history: RenderHistory::default(),
            viewport,
        }
    }

    /// Handle on the recorded commands that outlives the stream
    pub fn history(&self) -> RenderHistory {
        self.history.clone()
    }

    /// Change the size reported by [`RenderStream::viewport`]
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.history.record(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.history.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn viewport(&self) -> Result<Viewport> {
        self.history.record(RenderCommand::GetViewport);
        Ok(self.viewport)
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.history.record(RenderCommand::EnableRawMode);
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.history.record(RenderCommand::DisableRawMode);
        Ok(())
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}
