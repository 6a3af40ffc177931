//! Keystroke decoding.
//!
//! Callers hand the key schemes one logical keystroke at a time as the
//! 1–3 raw bytes the terminal produced. [`Key::parse`] turns those bytes
//! into a `Key` so that the schemes never deal with escape sequences.

/// A decoded keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable ASCII (0x20–0x7E)
    Char(u8),
    /// Control chord, carried as the lower-case letter or symbol (`Ctrl(b'a')`)
    Ctrl(u8),
    /// Escape followed by a printable byte (Meta/Alt chord)
    Alt(u8),
    /// Carriage return or line feed
    Enter,
    /// Lone escape
    Esc,
    /// DEL or BS
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    /// Anything else
    Unknown,
}

impl Key {
    /// Decodes one keystroke.
    ///
    /// # Example
    ///
    /// ```
    /// use linequill::input::keys::Key;
    ///
    /// assert_eq!(Key::parse(b"x"), Key::Char(b'x'));
    /// assert_eq!(Key::parse(&[0x01]), Key::Ctrl(b'a'));
    /// assert_eq!(Key::parse(b"\x1b[D"), Key::Left);
    /// ```
    pub fn parse(bytes: &[u8]) -> Key {
        match bytes {
            [] => Key::Unknown,
            [0x1B] => Key::Esc,
            [0x1B, b'[' | b'O', code] => match *code {
                b'A' => Key::Up,
                b'B' => Key::Down,
                b'C' => Key::Right,
                b'D' => Key::Left,
                b'H' => Key::Home,
                b'F' => Key::End,
                _ => Key::Unknown,
            },
            [0x1B, b] if is_printable(*b) => Key::Alt(*b),
            [b'\r'] | [b'\n'] => Key::Enter,
            [0x7F] | [0x08] => Key::Backspace,
            [b'\t'] => Key::Tab,
            [b] if *b < 0x20 => Key::Ctrl((b + 0x40).to_ascii_lowercase()),
            [b] if is_printable(*b) => Key::Char(*b),
            _ => Key::Unknown,
        }
    }

    /// The printable byte carried by a `Char` key.
    pub fn printable(self) -> Option<u8> {
        match self {
            Key::Char(b) => Some(b),
            _ => None,
        }
    }
}

/// True for printable ASCII, space through tilde.
pub fn is_printable(b: u8) -> bool {
    (0x20..=0x7E).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_keys() {
        assert_eq!(Key::parse(b" "), Key::Char(b' '));
        assert_eq!(Key::parse(b"~"), Key::Char(b'~'));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(Key::parse(&[0x17]), Key::Ctrl(b'w'));
        assert_eq!(Key::parse(&[0x12]), Key::Ctrl(b'r'));
        assert_eq!(Key::parse(&[0x1F]), Key::Ctrl(b'_'));
        assert_eq!(Key::parse(&[0x00]), Key::Ctrl(b'@'));
    }

    #[test]
    fn test_special_keys_win_over_control_chords() {
        assert_eq!(Key::parse(b"\r"), Key::Enter);
        assert_eq!(Key::parse(b"\n"), Key::Enter);
        assert_eq!(Key::parse(&[0x08]), Key::Backspace);
        assert_eq!(Key::parse(&[0x7F]), Key::Backspace);
        assert_eq!(Key::parse(b"\t"), Key::Tab);
        assert_eq!(Key::parse(&[0x1B]), Key::Esc);
    }

    #[test]
    fn test_arrow_sequences() {
        assert_eq!(Key::parse(b"\x1b[A"), Key::Up);
        assert_eq!(Key::parse(b"\x1b[B"), Key::Down);
        assert_eq!(Key::parse(b"\x1b[C"), Key::Right);
        assert_eq!(Key::parse(b"\x1bOD"), Key::Left);
        assert_eq!(Key::parse(b"\x1b[H"), Key::Home);
        assert_eq!(Key::parse(b"\x1b[F"), Key::End);
        assert_eq!(Key::parse(b"\x1b[Z"), Key::Unknown);
    }

    #[test]
    fn test_alt_chords() {
        assert_eq!(Key::parse(b"\x1bb"), Key::Alt(b'b'));
        assert_eq!(Key::parse(b"\x1bf"), Key::Alt(b'f'));
    }

    #[test]
    fn test_unknown_bytes() {
        assert_eq!(Key::parse(&[0xC3, 0xA9]), Key::Unknown);
        assert_eq!(Key::parse(&[]), Key::Unknown);
    }
}
