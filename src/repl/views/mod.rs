//! # Views Module
//!
//! Turns editor state into escape-coded terminal output.

pub mod ansi_escape_codes;
pub mod terminal_renderer;

pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
