//! # I/O Abstraction Layer
//!
//! Trait seams between the input loop and the outside world, so the loop can
//! be driven by a real terminal or by scripted input in tests.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream  ──▶ stdin thread + signal task
//!                            ──▶ TerminalRenderStream ──▶ stdout + crossterm::terminal
//!
//! Testing:     AppController ──▶ MockEventStream      ──▶ VecDeque<InputEvent>
//!                            ──▶ MockRenderStream     ──▶ Vec<RenderCommand>
//! ```

use anyhow::Result;
use std::io::Write;

use crate::repl::events::{InputEvent, Viewport};

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream, RenderCommand, RenderHistory};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Ordered source of input events
#[allow(async_fn_in_trait)]
pub trait EventStream {
    /// Wait for the next event.
    ///
    /// `Ok(None)` means the input is exhausted and the loop should end normally.
    async fn next_event(&mut self) -> Result<Option<InputEvent>>;
}

/// Byte sink for escape-coded output plus the terminal controls the loop needs
pub trait RenderStream: Write + Send {
    /// Current terminal extent
    fn viewport(&self) -> Result<Viewport>;

    /// Enable terminal raw mode
    fn enable_raw_mode(&mut self) -> Result<()>;

    /// Disable terminal raw mode
    fn disable_raw_mode(&mut self) -> Result<()>;
}
