//! Row/column lookups over a multi-line buffer.
//!
//! Rows and columns are 0-based; columns are UTF-8 byte offsets within the row.

pub struct SourceMap<'a> {
    src: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> SourceMap<'a> {
    pub fn new(src: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in src.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { src, line_starts }
    }

    /// Returns `(row, col)` for a byte offset. Offsets past the end clamp to the last row.
    pub fn line_col(&self, byte: u32) -> (usize, usize) {
        let b = (byte as usize).min(self.src.len());
        let line_idx = match self.line_starts.binary_search(&b) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let col = b.saturating_sub(self.line_starts[line_idx]);
        (line_idx, col)
    }

    /// Absolute byte offset of `(row, col)`, if the position lies inside the row.
    pub fn offset(&self, row: usize, col: usize) -> Option<u32> {
        let line = self.line(row)?;
        if col > line.len() {
            return None;
        }
        u32::try_from(self.line_starts[row] + col).ok()
    }

    /// Text of `row` without its trailing line break.
    pub fn line(&self, row: usize) -> Option<&'a str> {
        let start = *self.line_starts.get(row)?;
        let end = self
            .line_starts
            .get(row + 1)
            .map(|next| next - 1)
            .unwrap_or(self.src.len());
        let line = self.src.get(start..end)?;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }
}
