//! Key schemes: interchangeable keystroke interpreters.
//!
//! A [`KeyScheme`] takes one keystroke, edits a [`LineBuffer`] through its
//! primitives, and reports what happened as an [`Event`]. Two schemes are
//! provided:
//!
//! - [`EmacsScheme`]: always inserting, readline-style control keys
//! - [`VimScheme`]: modal editing with operators, motions, counts, text
//!   objects, finds and `.` repeat
//!
//! # Example
//!
//! ```
//! use linequill::editor::LineBuffer;
//! use linequill::scheme::{new_scheme, SchemeKind};
//!
//! let mut buffer = LineBuffer::new(0);
//! let mut scheme = new_scheme(SchemeKind::Emacs);
//!
//! let event = scheme.handle_key(&mut buffer, b"a");
//! assert!(event.consumed && event.text_changed);
//! assert_eq!(buffer.text(), "a");
//! ```

pub mod emacs;
pub mod vim;

pub use emacs::{CtrlYAction, EmacsScheme};
pub use vim::VimScheme;

use crate::editor::LineBuffer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of interpreting one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Event {
    /// The scheme handled the key; callers should not route it elsewhere.
    pub consumed: bool,
    /// The buffer content changed.
    pub text_changed: bool,
    /// The user asked to submit the line.
    pub submit: bool,
    /// The user asked to abandon editing.
    pub cancel: bool,
}

impl Event {
    /// The key was not handled.
    pub fn ignored() -> Self {
        Self::default()
    }

    /// The key was handled without changing the text.
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::default()
        }
    }

    /// The key was handled and changed the text.
    pub fn changed() -> Self {
        Self {
            consumed: true,
            text_changed: true,
            ..Self::default()
        }
    }

    /// Handled; `changed` says whether the text changed.
    pub fn handled(changed: bool) -> Self {
        if changed {
            Self::changed()
        } else {
            Self::consumed()
        }
    }

    pub fn submit() -> Self {
        Self {
            consumed: true,
            submit: true,
            ..Self::default()
        }
    }

    pub fn cancel() -> Self {
        Self {
            consumed: true,
            cancel: true,
            ..Self::default()
        }
    }
}

/// A keystroke interpreter.
pub trait KeyScheme {
    /// Short identifier shown to users ("emacs", "vim").
    fn name(&self) -> &'static str;

    /// Interprets one keystroke given as its 1–3 raw bytes.
    fn handle_key(&mut self, buffer: &mut LineBuffer, key: &[u8]) -> Event;

    /// True when printable keys are inserted as text.
    fn in_insert_mode(&self) -> bool;

    /// Mode label for status lines.
    fn mode_label(&self) -> String {
        if self.in_insert_mode() {
            "INSERT".to_string()
        } else {
            "NORMAL".to_string()
        }
    }
}

/// Selects one of the built-in schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    Emacs,
    #[default]
    Vim,
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemeKind::Emacs => write!(f, "emacs"),
            SchemeKind::Vim => write!(f, "vim"),
        }
    }
}

/// Builds a scheme with default settings.
pub fn new_scheme(kind: SchemeKind) -> Box<dyn KeyScheme> {
    match kind {
        SchemeKind::Emacs => Box::new(EmacsScheme::new()),
        SchemeKind::Vim => Box::new(VimScheme::new()),
    }
}
