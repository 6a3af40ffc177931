//! Motion and text-object resolution.
//!
//! Everything here is a pure function over `(text, cursor, ...)`: nothing
//! touches a buffer. Key schemes call these to decide where the cursor goes
//! or which span an operator acts on, and the vim scheme calls the same
//! functions again when replaying a change with `.`.
//!
//! # Modules
//!
//! - `word`: word/WORD boundaries and the `iw`/`aw` objects
//! - `sentence`: sentence boundaries and the `is`/`as` objects
//! - `quote`: quoted-string objects (`i"`, `a'`, `iq`, ...)
//! - `find`: character-find targets for `f`, `F`, `t`, `T`

pub mod find;
pub mod quote;
pub mod sentence;
pub mod word;

pub use find::{find_char, FindKind};

/// Half-open byte range `[start, end)` within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `pos` lies within the span, counting both ends.
    pub fn contains_inclusive(&self, pos: usize) -> bool {
        self.start <= pos && pos <= self.end
    }
}

/// Character classes used for word boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Word,
    Punctuation,
}

/// Classifies a byte. With `big` set (WORD motions), every non-whitespace
/// byte falls into the same class.
pub fn char_class(b: u8, big: bool) -> CharClass {
    if b.is_ascii_whitespace() {
        CharClass::Whitespace
    } else if big || b.is_ascii_alphanumeric() || b == b'_' || !b.is_ascii() {
        CharClass::Word
    } else {
        CharClass::Punctuation
    }
}

/// Cursor motions understood by both schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// `h`
    Left,
    /// `l`
    Right,
    /// `w`
    WordForward,
    /// `b`
    WordBackward,
    /// `e`
    WordEnd,
    /// `W`
    BigWordForward,
    /// `B`
    BigWordBackward,
    /// `E`
    BigWordEnd,
    /// `0`
    LineStart,
    /// `^`
    FirstNonBlank,
    /// `$`
    LineEnd,
}

impl Motion {
    /// Maps a normal-mode key to its motion. `0` is handled by the caller,
    /// since it doubles as a count digit.
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            b'h' => Some(Motion::Left),
            b'l' => Some(Motion::Right),
            b'w' => Some(Motion::WordForward),
            b'b' => Some(Motion::WordBackward),
            b'e' => Some(Motion::WordEnd),
            b'W' => Some(Motion::BigWordForward),
            b'B' => Some(Motion::BigWordBackward),
            b'E' => Some(Motion::BigWordEnd),
            b'0' => Some(Motion::LineStart),
            b'^' => Some(Motion::FirstNonBlank),
            b'$' => Some(Motion::LineEnd),
            _ => None,
        }
    }

    /// Inclusive motions include the landing position when combined with
    /// an operator.
    pub fn is_inclusive(self) -> bool {
        matches!(self, Motion::WordEnd | Motion::BigWordEnd | Motion::LineEnd)
    }

    /// Line-anchored motions land in the same place regardless of count.
    pub fn ignores_count(self) -> bool {
        matches!(
            self,
            Motion::LineStart | Motion::FirstNonBlank | Motion::LineEnd
        )
    }

    /// Applies the motion once from `cursor`.
    pub fn step(self, text: &[u8], cursor: usize) -> usize {
        let cursor = cursor.min(text.len());
        match self {
            Motion::Left => cursor.saturating_sub(1),
            Motion::Right => (cursor + 1).min(text.len()),
            Motion::WordForward => word::next_word_start(text, cursor, false),
            Motion::WordBackward => word::prev_word_start(text, cursor, false),
            Motion::WordEnd => word::word_end(text, cursor, false),
            Motion::BigWordForward => word::next_word_start(text, cursor, true),
            Motion::BigWordBackward => word::prev_word_start(text, cursor, true),
            Motion::BigWordEnd => word::word_end(text, cursor, true),
            Motion::LineStart => 0,
            Motion::FirstNonBlank => first_non_blank(text),
            Motion::LineEnd => text.len(),
        }
    }

    /// Applies the motion `count` times (once for count-insensitive motions).
    pub fn apply(self, text: &[u8], cursor: usize, count: usize) -> usize {
        let repeats = if self.ignores_count() { 1 } else { count.max(1) };
        let mut pos = cursor.min(text.len());
        for _ in 0..repeats {
            let next = self.step(text, pos);
            if next == pos {
                break;
            }
            pos = next;
        }
        pos
    }
}

/// Position of the first non-whitespace byte, or the end of the text.
pub fn first_non_blank(text: &[u8]) -> usize {
    text.iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(text.len())
}

/// Text objects reachable after `i` or `a` in operator-pending mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextObject {
    /// `w`
    Word,
    /// `W`
    BigWord,
    /// `"`
    DoubleQuote,
    /// `'`
    SingleQuote,
    /// `q`: whichever quote pair fits best
    AnyQuote,
    /// `s`
    Sentence,
}

impl TextObject {
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            b'w' => Some(TextObject::Word),
            b'W' => Some(TextObject::BigWord),
            b'"' => Some(TextObject::DoubleQuote),
            b'\'' => Some(TextObject::SingleQuote),
            b'q' => Some(TextObject::AnyQuote),
            b's' => Some(TextObject::Sentence),
            _ => None,
        }
    }

    /// Resolves the object around `cursor`. `inner` selects the inner form,
    /// otherwise the around form. Returns None when no object exists.
    pub fn resolve(self, text: &[u8], cursor: usize, inner: bool) -> Option<Span> {
        match self {
            TextObject::Word => word::word_object(text, cursor, inner, false),
            TextObject::BigWord => word::word_object(text, cursor, inner, true),
            TextObject::DoubleQuote => quote::quote_object(text, cursor, b'"', inner),
            TextObject::SingleQuote => quote::quote_object(text, cursor, b'\'', inner),
            TextObject::AnyQuote => quote::any_quote_object(text, cursor, inner),
            TextObject::Sentence => sentence::sentence_object(text, cursor, inner),
        }
    }
}
