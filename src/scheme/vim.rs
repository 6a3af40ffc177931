//! Vim-style modal key scheme.
//!
//! The scheme is a state machine over three modes (see [`VimMode`]) plus a
//! handful of one-key sub-states: a pending replace (`r`), a pending find
//! (`f F t T`) and a pending text object (`i`/`a` after an operator).
//!
//! Plain motions, operators and `.` replays all resolve their target
//! through one dispatch (`landing` / `resolve_range`), so a replay always
//! recomputes its target against the current text and cursor.
//!
//! Counts: digits typed before an operator and digits typed after it are
//! not multiplied. Whichever count was typed last wins, so `2dw`, `d2w`
//! and `5d2w` all delete two words.

use super::{Event, KeyScheme};
use crate::editor::mode::VimMode;
use crate::editor::repeat::{InsertEntry, LastChange, Operator, SimpleCommand};
use crate::editor::LineBuffer;
use crate::input::keys::Key;
use crate::motion::{find_char, word, FindKind, Motion, Span, TextObject};
use tracing::{debug, trace};

/// Counts beyond this are clamped.
const MAX_COUNT: usize = 99_999;

/// One-key sub-states that capture the next keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Pending {
    #[default]
    None,
    /// `i` or `a` was pressed after an operator.
    TextObject { inner: bool },
    /// `r` was pressed.
    Replace,
    /// `f`, `F`, `t` or `T` was pressed.
    Find(FindKind),
}

/// What an operator acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Motion(Motion),
    TextObject(TextObject, bool),
    Find(FindKind, u8),
    /// Doubled operator (`dd`, `cc`, `yy`): the whole line.
    Line,
}

impl Target {
    /// The repeat record for `operator` applied to this target.
    fn change(self, operator: Operator, count: usize) -> LastChange {
        let typed = String::new();
        match self {
            Target::Motion(motion) => LastChange::Motion {
                operator,
                motion,
                count,
                typed,
            },
            Target::TextObject(object, inner) => LastChange::TextObject {
                operator,
                object,
                inner,
                count,
                typed,
            },
            Target::Find(kind, target) => LastChange::Find {
                operator,
                kind,
                target,
                count,
                typed,
            },
            Target::Line => match operator {
                Operator::Change => LastChange::Insert {
                    entry: InsertEntry::SubstituteLine,
                    count,
                    typed,
                },
                _ => LastChange::Simple {
                    command: SimpleCommand::DeleteLine,
                    count,
                },
            },
        }
    }
}

/// Range from `start` to a motion's landing point `end`.
///
/// Forward inclusive motions take the landing byte too, unless it is
/// already the end of the text. Backward motions cover `[end, start)`.
fn operator_span(len: usize, start: usize, end: usize, inclusive: bool) -> Span {
    if end >= start {
        let end = if inclusive && end < len { end + 1 } else { end };
        Span::new(start, end)
    } else {
        Span::new(end, start)
    }
}

/// Where the cursor lands for a motion or find. Objects and whole-line
/// targets have no landing point.
fn landing(text: &[u8], cursor: usize, target: Target, count: usize) -> Option<usize> {
    match target {
        Target::Motion(motion) => Some(motion.apply(text, cursor, count)),
        Target::Find(kind, ch) => find_char(text, cursor, kind, ch, count),
        Target::TextObject(..) | Target::Line => None,
    }
}

/// Resolves the range an operator acts on. Returns None when the target
/// does not exist (missing find character, no quotes, empty text).
fn resolve_range(text: &[u8], cursor: usize, target: Target, count: usize) -> Option<Span> {
    match target {
        Target::Motion(motion) => landing(text, cursor, target, count)
            .map(|end| operator_span(text.len(), cursor, end, motion.is_inclusive())),
        Target::Find(..) => landing(text, cursor, target, count)
            .map(|end| operator_span(text.len(), cursor, end, true)),
        Target::TextObject(object, inner) => object.resolve(text, cursor, inner),
        Target::Line => Some(Span::new(0, text.len())),
    }
}

/// Modal editing scheme.
#[derive(Debug, Clone, Default)]
pub struct VimScheme {
    mode: VimMode,
    operator: Option<Operator>,
    /// Digits typed since the last reset.
    count: usize,
    /// Count typed before the pending operator.
    operator_count: usize,
    pending: Pending,
    last_change: Option<LastChange>,
    /// Change whose insert session is in progress.
    recording: Option<LastChange>,
    /// Text typed during the current insert session.
    insert_text: String,
    /// An undo snapshot already covers the current insert session.
    session_saved: bool,
}

impl VimScheme {
    /// Creates a scheme in Normal mode with no history.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> VimMode {
        self.mode
    }

    /// The count typed so far, if any.
    pub fn pending_count(&self) -> Option<usize> {
        match (self.count, self.operator_count) {
            (0, 0) => None,
            (0, n) | (n, _) => Some(n),
        }
    }

    /// The change `.` would replay.
    pub fn last_change(&self) -> Option<&LastChange> {
        self.last_change.as_ref()
    }

    fn set_mode(&mut self, mode: VimMode) {
        if self.mode != mode {
            debug!(from = %self.mode, to = %mode, "vim mode change");
            self.mode = mode;
        }
    }

    fn has_pending_state(&self) -> bool {
        self.mode == VimMode::OperatorPending
            || self.count > 0
            || self.operator_count > 0
            || self.pending != Pending::None
    }

    /// Drops any pending operator, count or sub-state and returns to Normal.
    fn reset(&mut self) {
        self.operator = None;
        self.count = 0;
        self.operator_count = 0;
        self.pending = Pending::None;
        if self.mode == VimMode::OperatorPending {
            self.set_mode(VimMode::Normal);
        }
    }

    /// Effective count for the command being executed; clears both counts.
    fn take_count(&mut self) -> usize {
        let count = match (self.count, self.operator_count) {
            (0, 0) => 1,
            (0, n) | (n, _) => n,
        };
        self.count = 0;
        self.operator_count = 0;
        count
    }

    fn push_digit(&mut self, digit: u8) -> Event {
        self.count = (self.count * 10 + usize::from(digit - b'0')).min(MAX_COUNT);
        Event::consumed()
    }

    fn handle_normal(&mut self, buffer: &mut LineBuffer, key: Key) -> Event {
        match self.pending {
            Pending::Replace => return self.finish_replace(buffer, key),
            Pending::Find(kind) => return self.finish_find(buffer, kind, key),
            Pending::TextObject { inner } => return self.finish_text_object(buffer, inner, key),
            Pending::None => {}
        }

        match key {
            Key::Esc => {
                if self.has_pending_state() {
                    self.reset();
                    Event::consumed()
                } else {
                    Event::cancel()
                }
            }
            Key::Enter => {
                self.reset();
                Event::submit()
            }
            Key::Char(digit @ b'1'..=b'9') => self.push_digit(digit),
            Key::Char(b'0') if self.count > 0 => self.push_digit(b'0'),
            Key::Char(ch) => self.handle_normal_char(buffer, ch),
            Key::Left => self.motion(buffer, Motion::Left),
            Key::Right => self.motion(buffer, Motion::Right),
            Key::Home => self.motion(buffer, Motion::LineStart),
            Key::End => self.motion(buffer, Motion::LineEnd),
            Key::Ctrl(b'r') if self.mode == VimMode::Normal => {
                let count = self.take_count();
                let redone = (0..count).filter(|_| buffer.redo()).count();
                Event::handled(redone > 0)
            }
            other => self.unrecognized(other),
        }
    }

    fn unrecognized(&mut self, key: Key) -> Event {
        if self.mode == VimMode::OperatorPending {
            trace!(?key, "discarding pending operator");
            self.reset();
            Event::consumed()
        } else {
            trace!(?key, "vim normal mode passing key through");
            self.reset();
            Event::ignored()
        }
    }

    fn handle_normal_char(&mut self, buffer: &mut LineBuffer, ch: u8) -> Event {
        if let Some(operator) = self.operator.filter(|_| self.mode == VimMode::OperatorPending) {
            return self.handle_operator_target(buffer, operator, ch);
        }

        if let Some(motion) = Motion::from_key(ch) {
            return self.motion(buffer, motion);
        }
        if let Some(operator) = Operator::from_key(ch) {
            self.operator_count = self.count;
            self.count = 0;
            self.operator = Some(operator);
            self.set_mode(VimMode::OperatorPending);
            return Event::consumed();
        }
        if let Some(kind) = FindKind::from_key(ch) {
            self.pending = Pending::Find(kind);
            return Event::consumed();
        }
        if let Some(entry) = InsertEntry::from_key(ch) {
            let count = self.take_count();
            return self.enter_insert(buffer, entry, count);
        }

        match ch {
            b'x' => self.simple(buffer, SimpleCommand::DeleteChar),
            b'X' => self.simple(buffer, SimpleCommand::DeleteCharBefore),
            b'D' => self.simple(buffer, SimpleCommand::DeleteToEnd),
            b'~' => self.simple(buffer, SimpleCommand::ToggleCase),
            b'r' => {
                self.pending = Pending::Replace;
                Event::consumed()
            }
            b'u' => {
                let count = self.take_count();
                let undone = (0..count).filter(|_| buffer.undo()).count();
                Event::handled(undone > 0)
            }
            b'.' => self.repeat_last_change(buffer),
            _ => self.unrecognized(Key::Char(ch)),
        }
    }

    /// Keys arriving while an operator waits for its target.
    fn handle_operator_target(&mut self, buffer: &mut LineBuffer, operator: Operator, ch: u8) -> Event {
        if ch == operator.key() {
            let count = self.take_count();
            self.reset();
            return self.run_operator(buffer, operator, Target::Line, count, None);
        }
        if ch == b'i' || ch == b'a' {
            self.pending = Pending::TextObject { inner: ch == b'i' };
            return Event::consumed();
        }
        if let Some(kind) = FindKind::from_key(ch) {
            self.pending = Pending::Find(kind);
            return Event::consumed();
        }
        if let Some(motion) = Motion::from_key(ch) {
            return self.motion(buffer, motion);
        }
        self.unrecognized(Key::Char(ch))
    }

    /// Moves the cursor, or applies the pending operator over the motion.
    fn motion(&mut self, buffer: &mut LineBuffer, motion: Motion) -> Event {
        let count = self.take_count();
        match self.operator.take() {
            Some(operator) if self.mode == VimMode::OperatorPending => {
                self.reset();
                self.run_operator(buffer, operator, Target::Motion(motion), count, None)
            }
            _ => {
                self.reset();
                self.move_to(buffer, Target::Motion(motion), count)
            }
        }
    }

    fn finish_text_object(&mut self, buffer: &mut LineBuffer, inner: bool, key: Key) -> Event {
        self.pending = Pending::None;
        let object = key.printable().and_then(TextObject::from_key);
        let (Some(object), Some(operator)) = (object, self.operator) else {
            self.reset();
            return Event::consumed();
        };

        let count = self.take_count();
        self.reset();
        self.run_operator(buffer, operator, Target::TextObject(object, inner), count, None)
    }

    fn finish_find(&mut self, buffer: &mut LineBuffer, kind: FindKind, key: Key) -> Event {
        self.pending = Pending::None;
        let Some(target) = key.printable() else {
            self.reset();
            return Event::consumed();
        };

        let count = self.take_count();
        let operator = self.operator.filter(|_| self.mode == VimMode::OperatorPending);
        self.reset();

        if let Some(operator) = operator {
            return self.run_operator(buffer, operator, Target::Find(kind, target), count, None);
        }

        self.move_to(buffer, Target::Find(kind, target), count)
    }

    /// Moves the cursor without an operator. A missing find target leaves
    /// the cursor where it is.
    fn move_to(&self, buffer: &mut LineBuffer, target: Target, count: usize) -> Event {
        match landing(buffer.as_bytes(), buffer.cursor(), target, count) {
            Some(pos) => buffer.set_cursor(pos),
            None => trace!(goal = ?target, count, "motion target not found"),
        }
        Event::consumed()
    }

    fn finish_replace(&mut self, buffer: &mut LineBuffer, key: Key) -> Event {
        self.pending = Pending::None;
        let Some(ch) = key.printable() else {
            self.reset();
            return Event::consumed();
        };

        let count = self.take_count();
        self.reset();
        let changed = replace_chars(buffer, ch, count);
        if changed {
            self.last_change = Some(LastChange::Replace { ch, count });
        }
        Event::handled(changed)
    }

    fn simple(&mut self, buffer: &mut LineBuffer, command: SimpleCommand) -> Event {
        let count = self.take_count();
        self.reset();
        let changed = run_simple(buffer, command, count);
        if changed {
            self.last_change = Some(LastChange::Simple { command, count });
        }
        Event::handled(changed)
    }

    /// Applies `operator` over `target`.
    ///
    /// `replay` carries the recorded insert text when a change is being
    /// repeated with `.`; live changes enter Insert mode and start
    /// recording instead.
    fn run_operator(
        &mut self,
        buffer: &mut LineBuffer,
        operator: Operator,
        target: Target,
        count: usize,
        replay: Option<&str>,
    ) -> Event {
        let Some(span) = resolve_range(buffer.as_bytes(), buffer.cursor(), target, count) else {
            trace!(goal = ?target, "operator target not found");
            return Event::consumed();
        };

        match operator {
            Operator::Yank => {
                buffer.set_cursor(span.start);
                Event::consumed()
            }
            Operator::Delete => {
                if span.is_empty() {
                    buffer.set_cursor(span.start);
                    return Event::consumed();
                }
                buffer.save_state();
                buffer.delete_range(span.start, span.end);
                if replay.is_none() {
                    self.last_change = Some(target.change(operator, count));
                }
                Event::changed()
            }
            Operator::Change => {
                buffer.save_state();
                let changed = buffer.delete_range(span.start, span.end);
                match replay {
                    Some(text) => {
                        buffer.insert_str(text);
                        step_back(buffer);
                        Event::changed()
                    }
                    None => {
                        self.session_saved = true;
                        self.start_recording(target.change(operator, count));
                        self.set_mode(VimMode::Insert);
                        Event::handled(changed)
                    }
                }
            }
        }
    }

    fn enter_insert(&mut self, buffer: &mut LineBuffer, entry: InsertEntry, count: usize) -> Event {
        self.reset();
        let changed = match entry {
            InsertEntry::Substitute | InsertEntry::SubstituteLine | InsertEntry::ChangeToEnd => {
                buffer.save_state();
                self.session_saved = true;
                apply_entry(buffer, entry, count)
            }
            _ => apply_entry(buffer, entry, count),
        };

        self.start_recording(LastChange::Insert {
            entry,
            count,
            typed: String::new(),
        });
        self.set_mode(VimMode::Insert);
        Event::handled(changed)
    }

    fn start_recording(&mut self, change: LastChange) {
        self.recording = Some(change);
        self.insert_text.clear();
    }

    /// Saves one undo snapshot per insert session, before its first edit.
    fn save_session(&mut self, buffer: &mut LineBuffer) {
        if !self.session_saved {
            buffer.save_state();
            self.session_saved = true;
        }
    }

    fn handle_insert(&mut self, buffer: &mut LineBuffer, key: Key) -> Event {
        match key {
            Key::Esc => {
                self.leave_insert(buffer);
                Event::consumed()
            }
            Key::Enter => Event::submit(),
            Key::Char(ch) => {
                self.save_session(buffer);
                buffer.insert(ch);
                self.insert_text.push(char::from(ch));
                Event::changed()
            }
            Key::Backspace => {
                if buffer.cursor() == 0 {
                    return Event::consumed();
                }
                self.save_session(buffer);
                buffer.delete_backward();
                self.insert_text.pop();
                Event::changed()
            }
            Key::Ctrl(b'w') => {
                let cursor = buffer.cursor();
                let start = word::prev_word_start(buffer.as_bytes(), cursor, false);
                self.delete_in_insert(buffer, start, cursor)
            }
            Key::Ctrl(b'u') => {
                let cursor = buffer.cursor();
                self.delete_in_insert(buffer, 0, cursor)
            }
            Key::Left => {
                buffer.left();
                Event::consumed()
            }
            Key::Right => {
                buffer.right();
                Event::consumed()
            }
            Key::Home => {
                buffer.home();
                Event::consumed()
            }
            Key::End => {
                buffer.end();
                Event::consumed()
            }
            other => {
                trace!(?other, "vim insert mode ignored key");
                Event::ignored()
            }
        }
    }

    fn delete_in_insert(&mut self, buffer: &mut LineBuffer, start: usize, end: usize) -> Event {
        if start >= end {
            return Event::consumed();
        }
        self.save_session(buffer);
        buffer.delete_range(start, end);
        let keep = self.insert_text.len().saturating_sub(end - start);
        self.insert_text.truncate(keep);
        Event::changed()
    }

    /// Returns to Normal, finishing any recording for `.`.
    fn leave_insert(&mut self, buffer: &mut LineBuffer) {
        if let Some(change) = self.recording.take() {
            let typed = std::mem::take(&mut self.insert_text);
            if let LastChange::Insert { entry, count, .. } = &change {
                if entry.repeats_text() && !typed.is_empty() {
                    for _ in 1..*count {
                        buffer.insert_str(&typed);
                    }
                }
            }
            self.last_change = Some(change.with_typed(typed));
        }

        self.session_saved = false;
        self.set_mode(VimMode::Normal);
        step_back(buffer);
    }

    fn repeat_last_change(&mut self, buffer: &mut LineBuffer) -> Event {
        let explicit = self.pending_count();
        self.reset();

        let Some(change) = self.last_change.clone() else {
            return Event::consumed();
        };
        let change = match explicit {
            Some(count) => change.with_count(count),
            None => change,
        };

        let event = self.replay(buffer, &change);
        self.last_change = Some(change);
        event
    }

    fn replay(&mut self, buffer: &mut LineBuffer, change: &LastChange) -> Event {
        debug!(?change, "repeating last change");
        match change {
            LastChange::Simple { command, count } => {
                Event::handled(run_simple(buffer, *command, *count))
            }
            LastChange::Replace { ch, count } => Event::handled(replace_chars(buffer, *ch, *count)),
            LastChange::Motion {
                operator,
                motion,
                count,
                typed,
            } => self.run_operator(buffer, *operator, Target::Motion(*motion), *count, Some(typed)),
            LastChange::TextObject {
                operator,
                object,
                inner,
                count,
                typed,
            } => self.run_operator(
                buffer,
                *operator,
                Target::TextObject(*object, *inner),
                *count,
                Some(typed),
            ),
            LastChange::Find {
                operator,
                kind,
                target,
                count,
                typed,
            } => self.run_operator(
                buffer,
                *operator,
                Target::Find(*kind, *target),
                *count,
                Some(typed),
            ),
            LastChange::Insert {
                entry,
                count,
                typed,
            } => {
                let changes = !typed.is_empty() || entry_deletes(buffer, *entry);
                if changes {
                    buffer.save_state();
                }
                apply_entry(buffer, *entry, *count);
                let times = if entry.repeats_text() { *count } else { 1 };
                for _ in 0..times {
                    buffer.insert_str(typed);
                }
                step_back(buffer);
                Event::handled(changes)
            }
        }
    }
}

/// Cursor movement and deletion performed when entering insert mode.
/// Returns whether the text changed.
fn apply_entry(buffer: &mut LineBuffer, entry: InsertEntry, count: usize) -> bool {
    match entry {
        InsertEntry::Insert => false,
        InsertEntry::Append => {
            buffer.right();
            false
        }
        InsertEntry::InsertAtStart => {
            buffer.home();
            false
        }
        InsertEntry::AppendAtEnd => {
            buffer.end();
            false
        }
        InsertEntry::Substitute => {
            let cursor = buffer.cursor();
            buffer.delete_range(cursor, cursor + count.max(1))
        }
        InsertEntry::SubstituteLine => buffer.clear(),
        InsertEntry::ChangeToEnd => buffer.kill_to_end(),
    }
}

/// Whether entering insert mode through `entry` removes text.
fn entry_deletes(buffer: &LineBuffer, entry: InsertEntry) -> bool {
    match entry {
        InsertEntry::Substitute | InsertEntry::ChangeToEnd => buffer.cursor() < buffer.len(),
        InsertEntry::SubstituteLine => !buffer.is_empty(),
        InsertEntry::Insert
        | InsertEntry::Append
        | InsertEntry::InsertAtStart
        | InsertEntry::AppendAtEnd => false,
    }
}

/// Vim places the cursor on the last inserted character when leaving
/// insert mode.
fn step_back(buffer: &mut LineBuffer) {
    if !buffer.is_empty() {
        buffer.left();
    }
}

/// Executes a simple command, saving a snapshot only if the text will change.
fn run_simple(buffer: &mut LineBuffer, command: SimpleCommand, count: usize) -> bool {
    let cursor = buffer.cursor();
    let len = buffer.len();
    let count = count.max(1);

    match command {
        SimpleCommand::DeleteChar => {
            let end = (cursor + count).min(len);
            if cursor >= end {
                return false;
            }
            buffer.save_state();
            buffer.delete_range(cursor, end)
        }
        SimpleCommand::DeleteCharBefore => {
            let start = cursor.saturating_sub(count);
            if start >= cursor {
                return false;
            }
            buffer.save_state();
            buffer.delete_range(start, cursor)
        }
        SimpleCommand::DeleteToEnd => {
            if cursor >= len {
                return false;
            }
            buffer.save_state();
            buffer.kill_to_end()
        }
        SimpleCommand::DeleteLine => {
            if len == 0 {
                return false;
            }
            buffer.save_state();
            buffer.clear()
        }
        SimpleCommand::ToggleCase => {
            let end = (cursor + count).min(len);
            if cursor >= end {
                return false;
            }
            let mut content = buffer.as_bytes().to_vec();
            for b in &mut content[cursor..end] {
                *b = if b.is_ascii_uppercase() {
                    b.to_ascii_lowercase()
                } else {
                    b.to_ascii_uppercase()
                };
            }
            buffer.save_state();
            buffer.set_bytes(content);
            buffer.set_cursor(end);
            true
        }
    }
}

/// Replaces up to `count` characters from the cursor with `ch`, leaving the
/// cursor on the last one replaced.
fn replace_chars(buffer: &mut LineBuffer, ch: u8, count: usize) -> bool {
    let cursor = buffer.cursor();
    let n = count.max(1).min(buffer.len().saturating_sub(cursor));
    if n == 0 {
        return false;
    }

    buffer.save_state();
    for pos in cursor..cursor + n {
        buffer.replace_at(pos, ch);
    }
    buffer.set_cursor(cursor + n - 1);
    true
}

impl KeyScheme for VimScheme {
    fn name(&self) -> &'static str {
        "vim"
    }

    fn in_insert_mode(&self) -> bool {
        self.mode == VimMode::Insert
    }

    fn mode_label(&self) -> String {
        self.mode.to_string()
    }

    fn handle_key(&mut self, buffer: &mut LineBuffer, bytes: &[u8]) -> Event {
        let key = Key::parse(bytes);
        match self.mode {
            VimMode::Insert => self.handle_insert(buffer, key),
            VimMode::Normal | VimMode::OperatorPending => self.handle_normal(buffer, key),
        }
    }
}
