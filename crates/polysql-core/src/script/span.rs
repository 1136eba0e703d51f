//! Byte ranges into a script.

/// Half-open byte range `start..end` into the script a segment came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the covered slice of `source`.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_text() {
        assert_eq!(Span::new(7, 9).text("Select :Id"), ":I");
        assert_eq!(Span::default().text("abc"), "");
    }
}
