//! # Editor Core
//!
//! Model-View-ViewModel layout of the editor:
//!
//! ```text
//!  stdin / signals ──▶ io::EventStream ──▶ AppController ──▶ key_decoder::decode
//!                                              │
//!                                              ▼
//!                       views::TerminalRenderer ◀── ViewEvents ── EditorState
//!                                │                                  │
//!                                ▼                                  ▼
//!                        io::RenderStream               CursorModel, LineBuffer,
//!                                                       StatusLine
//! ```

pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod view_models;
pub mod views;

pub use controllers::AppController;
pub use events::{decode, CursorPosition, EditorMode, InputEvent, Key, ViewEvent, Viewport};
pub use view_models::{DiscardingCommandHandler, Dispatch, EditorState, ExCommandHandler};
pub use views::{TerminalRenderer, ViewRenderer};
