//! linequill - a single-line text editing engine with interchangeable
//! Emacs-style and Vim-style key schemes.
//!
//! The engine is the [`editor`], [`motion`] and [`scheme`] modules: a byte
//! buffer with a cursor and undo history, pure motion and text-object
//! resolvers, and the two keystroke interpreters. Everything else
//! ([`input`], [`ui`], [`theme`], [`config`]) supports the terminal front
//! end shipped as the `linequill` binary.
//!
//! # Example
//!
//! ```
//! use linequill::editor::LineBuffer;
//! use linequill::scheme::{new_scheme, SchemeKind};
//!
//! let mut buffer = LineBuffer::with_text("hello world", 50);
//! let mut vim = new_scheme(SchemeKind::Vim);
//!
//! for key in ["0", "d", "w"] {
//!     vim.handle_key(&mut buffer, key.as_bytes());
//! }
//! assert_eq!(buffer.text(), "world");
//! ```

pub mod config;
pub mod editor;
pub mod input;
pub mod motion;
pub mod scheme;
pub mod theme;
pub mod ui;
