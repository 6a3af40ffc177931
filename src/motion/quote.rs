//! Quoted-string objects (`i"`, `a"`, `i'`, `a'`, `iq`, `aq`).
//!
//! Quote characters are paired in order of appearance: the 1st with the
//! 2nd, the 3rd with the 4th, and so on. There is no escape handling.

use super::Span;

/// Opening and closing positions of each quote pair.
fn pairs(text: &[u8], quote: u8) -> Vec<(usize, usize)> {
    let positions: Vec<usize> = text
        .iter()
        .enumerate()
        .filter(|(_, &b)| b == quote)
        .map(|(i, _)| i)
        .collect();

    positions
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

fn contains(pair: (usize, usize), cursor: usize) -> bool {
    pair.0 <= cursor && cursor <= pair.1
}

/// Picks the pair for `cursor`: the pair containing it (delimiters
/// included), else the first pair after it, else the last pair.
pub fn quote_pair(text: &[u8], cursor: usize, quote: u8) -> Option<(usize, usize)> {
    let pairs = pairs(text, quote);

    pairs
        .iter()
        .find(|&&pair| contains(pair, cursor))
        .or_else(|| pairs.iter().find(|&&(open, _)| open > cursor))
        .or_else(|| pairs.last())
        .copied()
}

fn to_span(pair: (usize, usize), inner: bool) -> Span {
    if inner {
        Span::new(pair.0 + 1, pair.1)
    } else {
        Span::new(pair.0, pair.1 + 1)
    }
}

/// The object delimited by `quote` nearest to `cursor`.
pub fn quote_object(text: &[u8], cursor: usize, quote: u8, inner: bool) -> Option<Span> {
    quote_pair(text, cursor, quote).map(|pair| to_span(pair, inner))
}

/// The `q` object: the better of the `"` and `'` candidates.
///
/// A pair that contains the cursor beats one that doesn't; between two
/// containing pairs the tighter one wins; otherwise the pair whose opening
/// quote is nearer the cursor wins.
pub fn any_quote_object(text: &[u8], cursor: usize, inner: bool) -> Option<Span> {
    let double = quote_pair(text, cursor, b'"');
    let single = quote_pair(text, cursor, b'\'');

    let chosen = match (double, single) {
        (None, None) => return None,
        (Some(pair), None) | (None, Some(pair)) => pair,
        (Some(d), Some(s)) => match (contains(d, cursor), contains(s, cursor)) {
            (true, false) => d,
            (false, true) => s,
            (true, true) => {
                if s.1 - s.0 < d.1 - d.0 {
                    s
                } else {
                    d
                }
            }
            (false, false) => {
                if s.0.abs_diff(cursor) < d.0.abs_diff(cursor) {
                    s
                } else {
                    d
                }
            }
        },
    };

    Some(to_span(chosen, inner))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_inside_pair() {
        let text = br#"say "hello" now"#;
        assert_eq!(quote_object(text, 6, b'"', true), Some(Span::new(5, 10)));
        assert_eq!(quote_object(text, 6, b'"', false), Some(Span::new(4, 11)));
    }

    #[test]
    fn test_cursor_on_delimiter_counts_as_inside() {
        let text = br#"a "b" c"#;
        assert_eq!(quote_object(text, 2, b'"', true), Some(Span::new(3, 4)));
        assert_eq!(quote_object(text, 4, b'"', true), Some(Span::new(3, 4)));
    }

    #[test]
    fn test_cursor_before_pairs_prefers_next() {
        let text = br#"x "one" "two""#;
        assert_eq!(quote_object(text, 0, b'"', true), Some(Span::new(3, 6)));
    }

    #[test]
    fn test_cursor_between_pairs_prefers_next() {
        let text = br#""one" x "two""#;
        assert_eq!(quote_object(text, 6, b'"', true), Some(Span::new(9, 12)));
    }

    #[test]
    fn test_cursor_after_pairs_falls_back_to_last() {
        let text = br#""one" "two" end"#;
        assert_eq!(quote_object(text, 13, b'"', true), Some(Span::new(7, 10)));
    }

    #[test]
    fn test_fewer_than_two_quotes() {
        assert_eq!(quote_object(b"it's", 0, b'\'', true), None);
        assert_eq!(quote_object(b"none", 0, b'"', false), None);
    }

    #[test]
    fn test_any_quote_prefers_tightest_nested() {
        let text = br#"outer "inner 'nested' here" end"#;
        assert_eq!(any_quote_object(text, 16, true), Some(Span::new(14, 20)));
    }

    #[test]
    fn test_any_quote_prefers_containing_pair() {
        let text = br#"'a' "bcd""#;
        assert_eq!(any_quote_object(text, 6, true), Some(Span::new(5, 8)));
    }

    #[test]
    fn test_any_quote_nearest_when_outside() {
        let text = br#"x 'a'    "b""#;
        assert_eq!(any_quote_object(text, 0, false), Some(Span::new(2, 5)));
    }
}
