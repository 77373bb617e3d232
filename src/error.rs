//! Startup failures.
//!
//! Everything that can go wrong before the first repaint aborts the process
//! with a fixed diagnostic. Failures after that point travel as `anyhow::Error`.

use std::path::PathBuf;
use thiserror::Error;

use crate::exit_status::ExitStatus;

/// Errors that abort the editor before it takes over the terminal
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Gim: Warning: Input is not from a terminal\nGim: Error reading input, exiting...\nGim: Finished.")]
    NotATerminal,

    #[error("Gim: Error: No file given\nGim: Usage: gim <FILE>\nGim: Finished.")]
    NoFile,

    #[error("Gim: Warning: Only one file can be edited\nGim: Trying to edit more than one file...\nGim: Finished.")]
    TooManyFiles,

    #[error("{} is not exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("file read error: {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("set window size error: {0}")]
    Viewport(#[source] std::io::Error),
}

impl StartupError {
    /// Every startup failure maps to the generic error status
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::Error
    }
}
