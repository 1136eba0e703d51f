//! Hand-written span scanner for placeholder scripts.

use super::Span;

/// Classification of a scanned span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// `:Name` with one or more ASCII word characters.
    Placeholder,
    /// `--` up to, not including, the line break.
    LineComment,
    /// `/* ... */`, or to end of input when unterminated.
    BlockComment,
    /// `'...'` with `''` escapes, or to end of input when unterminated.
    StringLiteral,
    /// Anything else.
    Text,
}

/// A classified span of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// What the span is.
    pub kind: SpanKind,
    /// Where it is.
    pub span: Span,
}

impl Segment {
    /// Returns the raw text of this segment.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns the placeholder name, without the colon.
    #[must_use]
    pub fn placeholder_name<'a>(&self, source: &'a str) -> Option<&'a str> {
        match self.kind {
            SpanKind::Placeholder => Some(&source[self.span.start + 1..self.span.end]),
            _ => None,
        }
    }
}

const fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Iterator over the segments of a script.
///
/// Segments are contiguous, non-overlapping and cover the whole input.
pub struct Scanner<'a> {
    /// The script being scanned.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current segment.
    start: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Returns the kind of special span starting at the current position.
    fn special_at_pos(&self) -> Option<SpanKind> {
        match (self.peek()?, self.peek_next()) {
            (':', Some(c)) if is_word(c) => Some(SpanKind::Placeholder),
            ('-', Some('-')) => Some(SpanKind::LineComment),
            ('\'', _) => Some(SpanKind::StringLiteral),
            ('/', Some('*')) => Some(SpanKind::BlockComment),
            _ => None,
        }
    }

    fn scan_placeholder(&mut self) {
        self.advance(); // :
        while self.peek().is_some_and(is_word) {
            self.advance();
        }
    }

    fn scan_line_comment(&mut self) {
        self.advance(); // -
        self.advance(); // -
        while self.peek().is_some_and(|c| c != '\n' && c != '\r') {
            self.advance();
        }
    }

    fn scan_string_literal(&mut self) {
        self.advance(); // opening quote
        loop {
            match self.advance() {
                Some('\'') if self.peek() == Some('\'') => {
                    self.advance();
                }
                Some('\'') | None => break,
                Some(_) => {}
            }
        }
    }

    fn scan_block_comment(&mut self) {
        self.advance(); // /
        self.advance(); // *
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    break;
                }
                None => break,
                Some(_) => {}
            }
        }
    }

    fn scan_text(&mut self) {
        self.advance();
        while self.peek().is_some() && self.special_at_pos().is_none() {
            self.advance();
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.pos >= self.input.len() {
            return None;
        }
        self.start = self.pos;
        let kind = self.special_at_pos().unwrap_or(SpanKind::Text);
        match kind {
            SpanKind::Placeholder => self.scan_placeholder(),
            SpanKind::LineComment => self.scan_line_comment(),
            SpanKind::StringLiteral => self.scan_string_literal(),
            SpanKind::BlockComment => self.scan_block_comment(),
            SpanKind::Text => self.scan_text(),
        }
        Some(Segment {
            kind,
            span: Span::new(self.start, self.pos),
        })
    }
}

/// Splits a script into classified segments.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Segment> {
    Scanner::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<(SpanKind, &str)> {
        tokenize(input)
            .into_iter()
            .map(|s| (s.kind, s.text(input)))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            kinds("Id = :Id and N=:Name_2"),
            vec![
                (SpanKind::Text, "Id = "),
                (SpanKind::Placeholder, ":Id"),
                (SpanKind::Text, " and N="),
                (SpanKind::Placeholder, ":Name_2"),
            ]
        );
    }

    #[test]
    fn test_bare_colon_is_text() {
        assert_eq!(kinds("a : b:"), vec![(SpanKind::Text, "a : b:")]);
        assert_eq!(
            kinds("x::int"),
            vec![(SpanKind::Text, "x:"), (SpanKind::Placeholder, ":int")]
        );
    }

    #[test]
    fn test_non_ascii_word_ends_placeholder() {
        assert_eq!(
            kinds(":abé"),
            vec![(SpanKind::Placeholder, ":ab"), (SpanKind::Text, "é")]
        );
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(
            kinds("'1:2' :A"),
            vec![
                (SpanKind::StringLiteral, "'1:2'"),
                (SpanKind::Text, " "),
                (SpanKind::Placeholder, ":A"),
            ]
        );
        assert_eq!(
            kinds("'it''s' x"),
            vec![(SpanKind::StringLiteral, "'it''s'"), (SpanKind::Text, " x")]
        );
        assert_eq!(kinds("''"), vec![(SpanKind::StringLiteral, "''")]);
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        assert_eq!(
            kinds("a 'open :A"),
            vec![(SpanKind::Text, "a "), (SpanKind::StringLiteral, "'open :A")]
        );
        assert_eq!(kinds("'x''"), vec![(SpanKind::StringLiteral, "'x''")]);
    }

    #[test]
    fn test_line_comment_stops_before_newline() {
        assert_eq!(
            kinds("-- :A\n:B"),
            vec![
                (SpanKind::LineComment, "-- :A"),
                (SpanKind::Text, "\n"),
                (SpanKind::Placeholder, ":B"),
            ]
        );
        assert_eq!(kinds("a - b"), vec![(SpanKind::Text, "a - b")]);
    }

    #[test]
    fn test_block_comments() {
        assert_eq!(
            kinds("/* :A */:B"),
            vec![
                (SpanKind::BlockComment, "/* :A */"),
                (SpanKind::Placeholder, ":B"),
            ]
        );
        assert_eq!(kinds("/* open"), vec![(SpanKind::BlockComment, "/* open")]);
        assert_eq!(kinds("a / b"), vec![(SpanKind::Text, "a / b")]);
    }

    #[test]
    fn test_placeholder_name() {
        let input = "x=:Key";
        let segments = tokenize(input);
        assert_eq!(segments[1].placeholder_name(input), Some("Key"));
        assert_eq!(segments[0].placeholder_name(input), None);
    }
}
