//! Inline code-span markup.
//!
//! Titles may delimit inline code with single backtick pairs. This is a small
//! explicit parser producing structured spans, so the renderer never pattern
//! matches on raw markup.

/// A piece of a parsed title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Text(&'a str),
    Code(&'a str),
}

/// Split `input` into text and code spans.
///
/// A code span is the shortest non-empty run between two backticks, so an
/// empty pair never swallows the delimiter that follows it. An unterminated
/// backtick is not markup and stays literal text.
pub fn parse(input: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut rest = input;
    while let Some(open) = rest.find('`') {
        // Closing delimiter: the first backtick after a non-empty body. An
        // adjacent backtick belongs to the body, not an empty pair.
        let after = &rest[open + 1..];
        let close = match after.find('`') {
            Some(0) => match after[1..].find('`') {
                Some(offset) => open + 2 + offset,
                None => break,
            },
            Some(offset) => open + 1 + offset,
            None => break,
        };
        if open > 0 {
            spans.push(Span::Text(&rest[..open]));
        }
        spans.push(Span::Code(&rest[open + 1..close]));
        rest = &rest[close + 1..];
    }
    if !rest.is_empty() {
        spans.push(Span::Text(rest));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(parse("2018 edition"), vec![Span::Text("2018 edition")]);
    }

    #[test]
    fn test_single_code_span() {
        assert_eq!(
            parse("`Pin` as a method receiver"),
            vec![Span::Code("Pin"), Span::Text(" as a method receiver")]
        );
    }

    #[test]
    fn test_multiple_code_spans() {
        assert_eq!(
            parse("`std::task` and `std::future`"),
            vec![
                Span::Code("std::task"),
                Span::Text(" and "),
                Span::Code("std::future"),
            ]
        );
    }

    #[test]
    fn test_unterminated_backtick_stays_literal() {
        assert_eq!(
            parse("a `broken title"),
            vec![Span::Text("a `broken title")]
        );
    }

    #[test]
    fn test_lone_empty_pair_stays_literal() {
        assert_eq!(parse("a `` b"), vec![Span::Text("a `` b")]);
    }

    #[test]
    fn test_empty_pair_keeps_the_next_delimiter() {
        // The second backtick opens the span body instead of closing an
        // empty one.
        assert_eq!(parse("``x`"), vec![Span::Code("`x")]);
        assert_eq!(
            parse("`` `x`"),
            vec![Span::Code("` "), Span::Text("x`")]
        );
    }

    #[test]
    fn test_multibyte_span_body() {
        assert_eq!(
            parse("`é` accent"),
            vec![Span::Code("é"), Span::Text(" accent")]
        );
    }
}
