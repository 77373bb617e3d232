//! # Terminal I/O Implementations
//!
//! Production implementations backed by stdin/stdout. All crossterm and
//! signal handling is isolated to this module.

use anyhow::{Context, Result};
use bytes::Bytes;
use crossterm::terminal;
use std::io::{self, Read, Write};
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{EventStream, RenderStream};
use crate::config::INPUT_CHUNK_SIZE;
use crate::repl::events::{InputEvent, Viewport};

/// Query the terminal size as a [`Viewport`]
pub fn terminal_viewport() -> io::Result<Viewport> {
    let (columns, rows) = terminal::size()?;
    Ok(Viewport::new(rows, columns))
}

/// Event stream fed by a stdin reader thread and a signal task.
///
/// Both producers push into one unbounded channel, so stdin chunks and
/// signals are consumed in the order they arrived.
pub struct TerminalEventStream {
    receiver: UnboundedReceiver<Result<InputEvent>>,
}

impl TerminalEventStream {
    /// Start the producers. Must be called from within a tokio runtime.
    pub fn spawn() -> Result<Self> {
        let (sender, receiver) = mpsc::unbounded_channel();

        spawn_stdin_reader(sender.clone());
        spawn_signal_listener(sender)?;

        Ok(Self { receiver })
    }
}

/// One event per `read` call. Runs on a plain thread so a blocked read
/// never holds the runtime open on shutdown.
fn spawn_stdin_reader(sender: UnboundedSender<Result<InputEvent>>) {
    std::thread::spawn(move || {
        let mut stdin = io::stdin().lock();
        let mut buf = [0u8; INPUT_CHUNK_SIZE];
        loop {
            let event = match stdin.read(&mut buf) {
                Ok(0) => {
                    tracing::info!("stdin closed");
                    break;
                }
                Ok(n) => Ok(InputEvent::Data(Bytes::copy_from_slice(&buf[..n]))),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => Err(anyhow::Error::from(e).context("Failed to read from stdin")),
            };
            let failed = event.is_err();
            if sender.send(event).is_err() || failed {
                break;
            }
        }
    });
}

fn spawn_signal_listener(sender: UnboundedSender<Result<InputEvent>>) -> Result<()> {
    let mut interrupt =
        signal(SignalKind::interrupt()).context("Failed to install SIGINT handler")?;
    let mut terminate =
        signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?;
    let mut window_change =
        signal(SignalKind::window_change()).context("Failed to install SIGWINCH handler")?;

    tokio::spawn(async move {
        loop {
            let event = tokio::select! {
                Some(()) = interrupt.recv() => Ok(InputEvent::Interrupt),
                Some(()) = terminate.recv() => Ok(InputEvent::Terminate),
                Some(()) = window_change.recv() => terminal_viewport()
                    .map(InputEvent::Resize)
                    .context("Failed to query terminal size after resize"),
                else => break,
            };
            tracing::debug!(?event, "signal received");
            if sender.send(event).is_err() {
                break;
            }
        }
    });

    Ok(())
}

impl EventStream for TerminalEventStream {
    async fn next_event(&mut self) -> Result<Option<InputEvent>> {
        self.receiver.recv().await.transpose()
    }
}

/// Render stream writing straight to the terminal.
pub struct TerminalRenderStream<W: Write> {
    writer: W,
}

impl TerminalRenderStream<io::Stdout> {
    /// Create a new terminal render stream using stdout
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> Write for TerminalRenderStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + Send> RenderStream for TerminalRenderStream<W> {
    fn viewport(&self) -> Result<Viewport> {
        terminal_viewport().context("Failed to query terminal size")
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Failed to disable raw mode")
    }
}

impl Default for TerminalRenderStream<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}
