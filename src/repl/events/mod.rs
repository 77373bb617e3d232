//! # Events Module
//!
//! Input events entering the loop, the keys decoded from them, and the view
//! events the editor state hands to the renderer.

pub mod input_events;
pub mod key_decoder;
pub mod types;
pub mod view_events;

pub use input_events::InputEvent;
pub use key_decoder::{decode, decode_slice, Key};
pub use types::{CursorPosition, EditorMode, Viewport};
pub use view_events::ViewEvent;
