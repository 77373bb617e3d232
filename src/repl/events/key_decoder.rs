//! # Key Decoder
//!
//! Maps one raw stdin chunk to one logical [`Key`]. Matching is exact
//! whole-chunk equality against VT100/ANSI key sequences; there is no
//! prefix matching and no reassembly of sequences split across reads.

use bytes::Bytes;

/// Logical key decoded from a raw input chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowRight,
    ArrowLeft,
    /// Ctrl+C
    Interrupt,
    Delete,
    Backspace,
    Enter,
    /// Anything not in the table, carrying the raw chunk
    Other(Bytes),
}

/// Decode a raw chunk into a key
///
/// The `ESC O x` arrow forms are what terminals send in application cursor
/// mode (tmux, Emacs ansi-term); they decode to the same keys as `ESC [ x`.
pub fn decode(chunk: &Bytes) -> Key {
    match &chunk[..] {
        [0x1b] => Key::Escape,
        [0x1b, b'[' | b'O', b'A'] => Key::ArrowUp,
        [0x1b, b'[' | b'O', b'B'] => Key::ArrowDown,
        [0x1b, b'[' | b'O', b'C'] => Key::ArrowRight,
        [0x1b, b'[' | b'O', b'D'] => Key::ArrowLeft,
        [0x03] => Key::Interrupt,
        [0x1b, b'[', b'3', b'~'] => Key::Delete,
        [0x7f] | [0x08] => Key::Backspace,
        [0x0d] => Key::Enter,
        _ => Key::Other(chunk.clone()),
    }
}

/// Decode a borrowed slice
pub fn decode_slice(chunk: &[u8]) -> Key {
    decode(&Bytes::copy_from_slice(chunk))
}
