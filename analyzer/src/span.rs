/// Half-open byte span into the source string: `[start, end)`.
///
/// `start` and `end` must be valid UTF-8 slice boundaries for that same source string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Self { start, end }
    }

    /// Editor rule for "the token at the cursor": the cursor sits after at least one
    /// character of the span, i.e. `start < cursor <= end`.
    pub fn contains_cursor(&self, cursor: u32) -> bool {
        self.start < cursor && cursor <= self.end
    }

    /// Slices `source` by this span, or returns `""` if the span is out of range.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or("")
    }
}
