//! Step definitions for Cucumber tests
//!
//! - `setup` - source file and terminal extent
//! - `input` - keys, raw chunks and signals fed to the input loop
//! - `assertions` - editor state and terminal output after the run

pub mod assertions;
pub mod input;
pub mod setup;
