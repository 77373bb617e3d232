//! # View Events
//!
//! Emitted by the editor state to tell the renderer what changed, so that a key
//! press redraws one status row or one line instead of the whole screen.

/// Rendering work requested by the editor state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Rewrite the status row with the latest status action
    StatusBarUpdateRequired,

    /// Rewrite one buffer row (1-based) after an edit
    LineRedrawRequired { row: usize },

    /// Rewrite the command prompt with the pending command
    CommandLineUpdateRequired,

    /// Command entry ended; blank the prompt row
    CommandLineClosed,
}
