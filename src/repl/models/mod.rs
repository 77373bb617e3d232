//! # Models
//!
//! Pure state with no knowledge of terminals: the cursor, the line buffer and
//! the status line.

pub mod cursor;
pub mod line_buffer;
pub mod status_line;

pub use cursor::CursorModel;
pub use line_buffer::LineBuffer;
pub use status_line::{StatusAction, StatusLine};
