//! # Input Events
//!
//! Everything the input loop consumes arrives as an [`InputEvent`] on a single
//! ordered queue: raw stdin chunks and out-of-band signal notifications alike.

use bytes::Bytes;

use super::types::Viewport;

/// Events fed to the input loop, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// One raw read from stdin; decoded as a single key
    Data(Bytes),

    /// Terminal was resized to the given extent
    Resize(Viewport),

    /// SIGINT delivered outside raw mode
    Interrupt,

    /// SIGTERM
    Terminate,
}

impl InputEvent {
    /// Convenience constructor for tests and scripted input
    pub fn data(bytes: impl AsRef<[u8]>) -> Self {
        InputEvent::Data(Bytes::copy_from_slice(bytes.as_ref()))
    }
}
