//! ANSI escape codes for screen and cursor control
//!
//! Written as raw sequences rather than crossterm commands because the
//! renderer's output is byte-exact and uses 1-based coordinates.

// ============================================================================
// SCREEN CONTROL
// ============================================================================

pub const CLEAR_SCREEN: &str = "\x1b[2J"; // Clear entire screen
pub const CURSOR_HOME: &str = "\x1b[H"; // Move cursor to top-left

// ============================================================================
// LINE CONTROL
// ============================================================================

pub const CLEAR_LINE_ENTIRE: &str = "\x1b[2K"; // Clear entire line

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Move the cursor to `row`, `column` (both 1-based; column 0 is accepted as the first column)
pub fn cursor_to(row: usize, column: usize) -> String {
    format!("\x1b[{row};{column}H")
}
