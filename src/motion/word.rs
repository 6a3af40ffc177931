//! Word and WORD boundaries.
//!
//! A lower-case word is a maximal run of one [`CharClass`]; a WORD (`big`)
//! is a maximal run of non-whitespace.

use super::{char_class, CharClass, Span};

fn is_blank(b: u8) -> bool {
    b.is_ascii_whitespace()
}

/// Maximal run of bytes sharing the class of `text[pos]`.
fn run_at(text: &[u8], pos: usize, big: bool) -> Span {
    let class = char_class(text[pos], big);
    let mut start = pos;
    while start > 0 && char_class(text[start - 1], big) == class {
        start -= 1;
    }
    let mut end = pos + 1;
    while end < text.len() && char_class(text[end], big) == class {
        end += 1;
    }
    Span::new(start, end)
}

/// Start of the next word after `pos` (`w` / `W`).
///
/// Skips the rest of the current word, then any whitespace. Returns the
/// text length when there is no next word.
pub fn next_word_start(text: &[u8], pos: usize, big: bool) -> usize {
    let len = text.len();
    if pos >= len {
        return len;
    }

    let mut p = pos;
    let class = char_class(text[p], big);
    if class != CharClass::Whitespace {
        while p < len && char_class(text[p], big) == class {
            p += 1;
        }
    }
    while p < len && is_blank(text[p]) {
        p += 1;
    }
    p
}

/// Start of the word before `pos` (`b` / `B`).
pub fn prev_word_start(text: &[u8], pos: usize, big: bool) -> usize {
    let mut p = pos.min(text.len());
    while p > 0 && is_blank(text[p - 1]) {
        p -= 1;
    }
    if p == 0 {
        return 0;
    }

    let class = char_class(text[p - 1], big);
    while p > 0 && char_class(text[p - 1], big) == class {
        p -= 1;
    }
    p
}

/// Last byte of the word ending after `pos` (`e` / `E`).
///
/// Stays put on the final byte of the text.
pub fn word_end(text: &[u8], pos: usize, big: bool) -> usize {
    let len = text.len();
    let mut p = pos + 1;
    if p >= len {
        return pos.min(len);
    }

    while p < len && is_blank(text[p]) {
        p += 1;
    }
    if p >= len {
        return len - 1;
    }

    let class = char_class(text[p], big);
    while p + 1 < len && char_class(text[p + 1], big) == class {
        p += 1;
    }
    p
}

/// The `iw` / `aw` (or `iW` / `aW`) object under `cursor`.
///
/// On whitespace the inner object is the whitespace run, and the around
/// form extends into the following word (or the preceding one at the end
/// of the text). On a word the inner object is the word, and the around
/// form adds trailing whitespace, or leading whitespace if there is none
/// trailing.
pub fn word_object(text: &[u8], cursor: usize, inner: bool, big: bool) -> Option<Span> {
    let len = text.len();
    if len == 0 {
        return None;
    }

    let pos = cursor.min(len - 1);
    let run = run_at(text, pos, big);
    if inner {
        return Some(run);
    }

    let Span { mut start, mut end } = run;
    if is_blank(text[pos]) {
        if end < len {
            end = run_at(text, end, big).end;
        } else if start > 0 {
            start = run_at(text, start - 1, big).start;
        }
    } else if end < len && is_blank(text[end]) {
        end = run_at(text, end, big).end;
    } else if start > 0 && is_blank(text[start - 1]) {
        start = run_at(text, start - 1, big).start;
    }

    Some(Span::new(start, end))
}
