//! # Gim - A Tiny Modal Text Viewer
//!
//! Loads one file, shows it in the terminal and lets the user move around with
//! the arrow keys, insert text after `i` and type a command line after `:`.
//!
//! Edits live only in memory; nothing is written back to disk.

pub mod cmd_args;
pub mod config;
pub mod error;
pub mod exit_status;
pub mod repl;
pub mod source_file;

pub use error::StartupError;
pub use exit_status::ExitStatus;
pub use repl::*;
