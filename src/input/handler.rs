//! Raw keystroke source for the demo binary.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read, Stdin};
use termion::event::Event;
use termion::input::{EventsAndRaw, TermReadEventsAndRaw};
use tracing::trace;

/// Event source for reading terminal input.
///
/// The iterator is kept across calls so that bytes already pulled from the
/// terminal during a fast paste are not lost.
enum EventSource {
    /// Reading from stdin
    Stdin(EventsAndRaw<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(EventsAndRaw<File>),
    /// Reading from an arbitrary byte stream
    Reader(EventsAndRaw<Box<dyn Read>>),
}

/// Yields one keystroke at a time as the raw bytes the terminal sent.
///
/// termion does the escape-sequence splitting; the key schemes get the
/// bytes untouched and decode them with [`Key::parse`](super::keys::Key::parse).
pub struct InputHandler {
    events: EventSource,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events_and_raw()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin is not a terminal.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events_and_raw()),
        })
    }

    /// Creates an InputHandler over any byte stream.
    ///
    /// # Example
    ///
    /// ```
    /// use linequill::input::InputHandler;
    ///
    /// let mut handler = InputHandler::from_reader(&b"hi"[..]);
    /// assert_eq!(handler.next_key().unwrap(), Some(b"h".to_vec()));
    /// ```
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        let boxed: Box<dyn Read> = Box::new(reader);
        Self {
            events: EventSource::Reader(boxed.events_and_raw()),
        }
    }

    /// Blocks until the next keystroke and returns its raw bytes.
    ///
    /// Mouse reports are skipped. Returns `Ok(None)` once the input is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails
    pub fn next_key(&mut self) -> Result<Option<Vec<u8>>> {
        loop {
            let next = match &mut self.events {
                EventSource::Stdin(events) => events.next(),
                EventSource::Tty(events) => events.next(),
                EventSource::Reader(events) => events.next(),
            };

            let Some(result) = next else {
                return Ok(None);
            };
            let (event, raw) = result.context("Failed to read keyboard input")?;

            match event {
                Event::Mouse(_) => trace!(?raw, "skipping mouse report"),
                _ => return Ok(Some(raw)),
            }
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
