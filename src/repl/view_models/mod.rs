//! # Editor State
//!
//! The editing state machine, split the way the rest of the crate is split:
//!
//! - `core`: the [`EditorState`] struct and key dispatch
//! - `mode_manager`: mode transitions
//! - `cursor_manager`: arrow movement and clamping
//! - `buffer_operations`: Insert-mode splicing
//! - `ex_command_manager`: the `:` command line

pub mod buffer_operations;
pub mod core;
pub mod cursor_manager;
pub mod ex_command_manager;
pub mod mode_manager;


pub use self::core::{Dispatch, EditorState};
pub use ex_command_manager::{DiscardingCommandHandler, ExCommandHandler};
