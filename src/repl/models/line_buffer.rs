//! # Line Buffer
//!
//! Ordered, mutable sequence of text lines stored as raw bytes. Columns are
//! byte offsets, matching how the cursor is reported on the status line.

/// Lines of the file being viewed, top to bottom
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Vec<u8>>,
}

impl LineBuffer {
    pub fn new(lines: Vec<Vec<u8>>) -> Self {
        Self { lines }
    }

    /// Build a buffer from string lines (tests and fixtures)
    pub fn from_strs<S: AsRef<str>>(lines: &[S]) -> Self {
        Self::new(
            lines
                .iter()
                .map(|line| line.as_ref().as_bytes().to_vec())
                .collect(),
        )
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at a 1-based row
    pub fn line(&self, row: usize) -> Option<&[u8]> {
        row.checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(Vec::as_slice)
    }

    /// Length of a 1-based row; rows past the end (including the implicit
    /// empty line of an empty buffer) have length 0
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).map_or(0, <[u8]>::len)
    }

    /// Insert `bytes` before the byte at 1-based `column` of 1-based `row`.
    ///
    /// `column` may be one past the end of the line to append. Inserting into
    /// row 1 of an empty buffer materialises its implicit empty line.
    ///
    /// # Panics
    ///
    /// When `row` or `column` is out of range; callers clamp the cursor first.
    pub fn splice_insert(&mut self, row: usize, column: usize, bytes: &[u8]) {
        if self.lines.is_empty() && row == 1 {
            self.lines.push(Vec::new());
        }
        assert!(
            row >= 1 && row <= self.lines.len(),
            "splice row {row} outside 1..={}",
            self.lines.len()
        );
        let line = &mut self.lines[row - 1];
        assert!(
            column >= 1 && column <= line.len() + 1,
            "splice column {column} outside 1..={}",
            line.len() + 1
        );

        let at = column - 1;
        line.splice(at..at, bytes.iter().copied());
    }
}
