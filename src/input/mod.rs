//! Keyboard input: a raw keystroke source and the keystroke decoder.

pub mod handler;
pub mod keys;

pub use handler::InputHandler;
pub use keys::Key;
