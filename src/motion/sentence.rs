//! Sentence boundaries for the `is` / `as` objects.
//!
//! A sentence ends at `.`, `!` or `?` followed by whitespace or the end of
//! the text.

use super::Span;

fn is_blank(b: u8) -> bool {
    b.is_ascii_whitespace()
}

fn ends_sentence(text: &[u8], i: usize) -> bool {
    matches!(text[i], b'.' | b'!' | b'?') && (i + 1 == text.len() || is_blank(text[i + 1]))
}

/// Start of the sentence containing `cursor`: just past the previous
/// terminator and its trailing whitespace, or 0.
pub fn sentence_start(text: &[u8], cursor: usize) -> usize {
    let mut i = cursor.min(text.len());
    while i > 0 {
        i -= 1;
        if ends_sentence(text, i) {
            let mut start = i + 1;
            while start < text.len() && is_blank(text[start]) {
                start += 1;
            }
            return start;
        }
    }
    0
}

/// End of the sentence containing `cursor`: one past the next terminator,
/// or the text length.
pub fn sentence_end(text: &[u8], cursor: usize) -> usize {
    (cursor.min(text.len())..text.len())
        .find(|&i| ends_sentence(text, i))
        .map(|i| i + 1)
        .unwrap_or(text.len())
}

/// The `is` / `as` object under `cursor`.
///
/// The around form adds trailing whitespace, or leading whitespace when
/// the sentence has none trailing.
pub fn sentence_object(text: &[u8], cursor: usize, inner: bool) -> Option<Span> {
    if text.is_empty() {
        return None;
    }

    let end = sentence_end(text, cursor);
    let start = sentence_start(text, cursor).min(end);
    if start == end {
        return None;
    }
    if inner {
        return Some(Span::new(start, end));
    }

    let mut trailing = end;
    while trailing < text.len() && is_blank(text[trailing]) {
        trailing += 1;
    }
    if trailing > end {
        return Some(Span::new(start, trailing));
    }

    let mut leading = start;
    while leading > 0 && is_blank(text[leading - 1]) {
        leading -= 1;
    }
    Some(Span::new(leading, end))
}
