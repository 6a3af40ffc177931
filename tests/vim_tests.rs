use linequill::editor::mode::VimMode;
use linequill::editor::repeat::{LastChange, Operator, SimpleCommand};
use linequill::editor::LineBuffer;
use linequill::motion::Motion;
use linequill::scheme::{Event, KeyScheme, VimScheme};

const ESC: &str = "\x1b";

/// Feeds each byte of `keys` as its own keystroke and returns the last event.
fn type_keys(vim: &mut VimScheme, buffer: &mut LineBuffer, keys: &str) -> Event {
    let mut last = Event::ignored();
    for b in keys.bytes() {
        last = vim.handle_key(buffer, &[b]);
    }
    last
}

fn buffer_at(text: &str, cursor: usize) -> LineBuffer {
    let mut buffer = LineBuffer::with_text(text, 50);
    buffer.set_cursor(cursor);
    buffer
}

#[test]
fn test_dot_repeats_delete_word() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("one two three four", 0);

    type_keys(&mut vim, &mut buffer, "dw");
    assert_eq!(buffer.text(), "two three four");

    type_keys(&mut vim, &mut buffer, ".");
    assert_eq!(buffer.text(), "three four");

    type_keys(&mut vim, &mut buffer, ".");
    assert_eq!(buffer.text(), "four");
}

#[test]
fn test_inclusive_and_exclusive_motions() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("hello world", 0);
    let event = type_keys(&mut vim, &mut buffer, "de");
    assert!(event.text_changed);
    assert_eq!(buffer.text(), " world");

    let mut buffer = buffer_at("hello world", 0);
    type_keys(&mut vim, &mut buffer, "dw");
    assert_eq!(buffer.text(), "world");
}

#[test]
fn test_delete_to_line_end_is_inclusive() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("hello world", 5);
    type_keys(&mut vim, &mut buffer, "d$");
    assert_eq!(buffer.text(), "hello");
}

#[test]
fn test_inner_and_around_word() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("hello world test", 7);
    type_keys(&mut vim, &mut buffer, "diw");
    assert_eq!(buffer.text(), "hello  test");
    assert_eq!(buffer.cursor(), 6);

    let mut buffer = buffer_at("hello world test", 7);
    type_keys(&mut vim, &mut buffer, "daw");
    assert_eq!(buffer.text(), "hello test");
}

#[test]
fn test_any_quote_prefers_tightest_pair() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("outer \"inner 'nested' here\" end", 16);
    type_keys(&mut vim, &mut buffer, "diq");
    assert_eq!(buffer.text(), "outer \"inner '' here\" end");
}

#[test]
fn test_inner_double_quote() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("say \"hi there\" now", 7);
    type_keys(&mut vim, &mut buffer, "ci\"yo");
    type_keys(&mut vim, &mut buffer, ESC);
    assert_eq!(buffer.text(), "say \"yo\" now");
    assert_eq!(vim.mode(), VimMode::Normal);
}

#[test]
fn test_missing_text_object_is_a_noop() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("no quotes here", 3);
    let event = type_keys(&mut vim, &mut buffer, "di\"");
    assert!(event.consumed);
    assert!(!event.text_changed);
    assert_eq!(buffer.text(), "no quotes here");
    assert_eq!(vim.mode(), VimMode::Normal);
}

#[test]
fn test_find_with_count() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("hello world", 0);
    let event = type_keys(&mut vim, &mut buffer, "2fo");
    assert!(event.consumed);
    assert_eq!(buffer.cursor(), 7);
}

#[test]
fn test_find_with_too_few_occurrences_stays_put() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("hello world", 0);
    type_keys(&mut vim, &mut buffer, "3fo");
    assert_eq!(buffer.cursor(), 0);
    assert_eq!(buffer.text(), "hello world");
    assert_eq!(vim.mode(), VimMode::Normal);

    // The next command runs normally
    type_keys(&mut vim, &mut buffer, "x");
    assert_eq!(buffer.text(), "ello world");
}

#[test]
fn test_find_till_and_backward_with_operator() {
    let mut vim = VimScheme::new();

    let mut buffer = buffer_at("hello world", 0);
    type_keys(&mut vim, &mut buffer, "dfo");
    assert_eq!(buffer.text(), " world");

    let mut buffer = buffer_at("hello world", 0);
    type_keys(&mut vim, &mut buffer, "dto");
    assert_eq!(buffer.text(), "o world");

    let mut buffer = buffer_at("hello world", 10);
    type_keys(&mut vim, &mut buffer, "dFo");
    assert_eq!(buffer.text(), "hello wd");
}

#[test]
fn test_escape_clears_pending_operator_without_cancel() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("hello", 0);

    type_keys(&mut vim, &mut buffer, "d");
    assert_eq!(vim.mode(), VimMode::OperatorPending);

    let event = type_keys(&mut vim, &mut buffer, ESC);
    assert!(event.consumed);
    assert!(!event.cancel);
    assert_eq!(vim.mode(), VimMode::Normal);
    assert_eq!(buffer.text(), "hello");

    let event = type_keys(&mut vim, &mut buffer, ESC);
    assert!(event.cancel);
}

#[test]
fn test_escape_clears_count_without_cancel() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("hello", 0);

    type_keys(&mut vim, &mut buffer, "3");
    assert_eq!(vim.pending_count(), Some(3));
    let event = type_keys(&mut vim, &mut buffer, ESC);
    assert!(!event.cancel);
    assert_eq!(vim.pending_count(), None);
}

#[test]
fn test_scroll_keys_pass_through() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("hello", 2);

    for keys in ["j", "k", "3j"] {
        let event = type_keys(&mut vim, &mut buffer, keys);
        assert!(!event.consumed, "{} should not be consumed", keys);
        assert!(!event.text_changed);
    }
    assert_eq!(buffer.text(), "hello");
    assert_eq!(buffer.cursor(), 2);
}

#[test]
fn test_unknown_key_after_operator_is_absorbed() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("hello", 0);
    let event = type_keys(&mut vim, &mut buffer, "dz");
    assert!(event.consumed);
    assert_eq!(vim.mode(), VimMode::Normal);
    assert_eq!(buffer.text(), "hello");
}

#[test]
fn test_undo_redo_inverse() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("hello world", 0);

    type_keys(&mut vim, &mut buffer, "dw");
    assert_eq!(buffer.text(), "world");

    type_keys(&mut vim, &mut buffer, "u");
    assert_eq!(buffer.text(), "hello world");
    assert_eq!(buffer.cursor(), 0);

    type_keys(&mut vim, &mut buffer, "\x12");
    assert_eq!(buffer.text(), "world");

    type_keys(&mut vim, &mut buffer, "u");
    type_keys(&mut vim, &mut buffer, "x");
    assert_eq!(buffer.text(), "ello world");

    let event = type_keys(&mut vim, &mut buffer, "\x12");
    assert!(!event.text_changed);
    assert_eq!(buffer.text(), "ello world");
}

#[test]
fn test_insert_session_is_one_undo_step() {
    let mut vim = VimScheme::new();
    let mut buffer = LineBuffer::new(50);

    type_keys(&mut vim, &mut buffer, "ihello");
    type_keys(&mut vim, &mut buffer, ESC);
    assert_eq!(buffer.text(), "hello");
    assert_eq!(buffer.cursor(), 4);

    type_keys(&mut vim, &mut buffer, "u");
    assert_eq!(buffer.text(), "");
}

#[test]
fn test_counted_insert_repeats_text() {
    let mut vim = VimScheme::new();
    let mut buffer = LineBuffer::new(50);

    type_keys(&mut vim, &mut buffer, "3ihi");
    type_keys(&mut vim, &mut buffer, ESC);
    assert_eq!(buffer.text(), "hihihi");
    assert_eq!(buffer.cursor(), 5);
}

#[test]
fn test_append_entries() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("abc", 0);

    type_keys(&mut vim, &mut buffer, "aX");
    type_keys(&mut vim, &mut buffer, ESC);
    assert_eq!(buffer.text(), "aXbc");
    assert_eq!(buffer.cursor(), 1);

    type_keys(&mut vim, &mut buffer, "Az");
    type_keys(&mut vim, &mut buffer, ESC);
    type_keys(&mut vim, &mut buffer, "Iy");
    type_keys(&mut vim, &mut buffer, ESC);
    assert_eq!(buffer.text(), "yaXbcz");
}

#[test]
fn test_change_then_repeat() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("foo bar baz", 0);

    type_keys(&mut vim, &mut buffer, "ceyy");
    type_keys(&mut vim, &mut buffer, ESC);
    assert_eq!(buffer.text(), "yy bar baz");
    assert_eq!(buffer.cursor(), 1);

    type_keys(&mut vim, &mut buffer, "w.");
    assert_eq!(buffer.text(), "yy yy baz");
    assert_eq!(buffer.cursor(), 4);
    assert_eq!(vim.mode(), VimMode::Normal);
}

#[test]
fn test_change_line_and_substitute() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("abc", 1);
    type_keys(&mut vim, &mut buffer, "ccxyz");
    type_keys(&mut vim, &mut buffer, ESC);
    assert_eq!(buffer.text(), "xyz");
    assert_eq!(buffer.cursor(), 2);

    let mut buffer = buffer_at("abcdef", 1);
    type_keys(&mut vim, &mut buffer, "2sQ");
    type_keys(&mut vim, &mut buffer, ESC);
    assert_eq!(buffer.text(), "aQdef");

    let mut buffer = buffer_at("abcdef", 2);
    type_keys(&mut vim, &mut buffer, "C!");
    type_keys(&mut vim, &mut buffer, ESC);
    assert_eq!(buffer.text(), "ab!");
}

#[test]
fn test_delete_line_is_recorded_as_simple() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("abc", 1);
    type_keys(&mut vim, &mut buffer, "dd");
    assert_eq!(buffer.text(), "");
    assert_eq!(
        vim.last_change(),
        Some(&LastChange::Simple {
            command: SimpleCommand::DeleteLine,
            count: 1
        })
    );
}

#[test]
fn test_yank_moves_cursor_without_recording() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("hello world", 6);
    let event = type_keys(&mut vim, &mut buffer, "yb");
    assert!(!event.text_changed);
    assert_eq!(buffer.cursor(), 0);
    assert_eq!(buffer.text(), "hello world");
    assert!(vim.last_change().is_none());
}

#[test]
fn test_simple_commands() {
    let mut vim = VimScheme::new();

    let mut buffer = buffer_at("abcdef", 0);
    type_keys(&mut vim, &mut buffer, "2x");
    assert_eq!(buffer.text(), "cdef");
    type_keys(&mut vim, &mut buffer, "$X");
    assert_eq!(buffer.text(), "cde");

    let mut buffer = buffer_at("hello world", 5);
    type_keys(&mut vim, &mut buffer, "D");
    assert_eq!(buffer.text(), "hello");

    let mut buffer = buffer_at("abc", 0);
    type_keys(&mut vim, &mut buffer, "2~");
    assert_eq!(buffer.text(), "ABc");
    assert_eq!(buffer.cursor(), 2);
}

#[test]
fn test_replace_with_count_and_repeat() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("abcd", 0);

    type_keys(&mut vim, &mut buffer, "3rx");
    assert_eq!(buffer.text(), "xxxd");
    assert_eq!(buffer.cursor(), 2);

    type_keys(&mut vim, &mut buffer, "l.");
    assert_eq!(buffer.text(), "xxxx");
    assert_eq!(buffer.cursor(), 3);
}

#[test]
fn test_latest_count_wins() {
    let mut vim = VimScheme::new();

    let mut buffer = buffer_at("a b c d e f", 0);
    type_keys(&mut vim, &mut buffer, "2dw");
    assert_eq!(buffer.text(), "c d e f");

    let mut buffer = buffer_at("a b c d e f", 0);
    type_keys(&mut vim, &mut buffer, "d2w");
    assert_eq!(buffer.text(), "c d e f");

    let mut buffer = buffer_at("a b c d e f", 0);
    type_keys(&mut vim, &mut buffer, "5d2w");
    assert_eq!(buffer.text(), "c d e f");
    assert_eq!(
        vim.last_change(),
        Some(&LastChange::Motion {
            operator: Operator::Delete,
            motion: Motion::WordForward,
            count: 2,
            typed: String::new(),
        })
    );
}

#[test]
fn test_dot_with_new_count() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("a b c d e f", 0);

    type_keys(&mut vim, &mut buffer, "dw");
    assert_eq!(buffer.text(), "b c d e f");

    type_keys(&mut vim, &mut buffer, "3.");
    assert_eq!(buffer.text(), "e f");
}

#[test]
fn test_motions_with_counts() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("  one two three", 0);

    type_keys(&mut vim, &mut buffer, "^");
    assert_eq!(buffer.cursor(), 2);
    type_keys(&mut vim, &mut buffer, "2w");
    assert_eq!(buffer.cursor(), 10);
    type_keys(&mut vim, &mut buffer, "b");
    assert_eq!(buffer.cursor(), 6);
    type_keys(&mut vim, &mut buffer, "10l");
    assert_eq!(buffer.cursor(), 15);
    type_keys(&mut vim, &mut buffer, "0");
    assert_eq!(buffer.cursor(), 0);
}

#[test]
fn test_enter_submits_in_both_modes() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("abc", 0);

    assert!(type_keys(&mut vim, &mut buffer, "\r").submit);

    type_keys(&mut vim, &mut buffer, "i");
    assert!(vim.in_insert_mode());
    assert!(type_keys(&mut vim, &mut buffer, "\r").submit);
}

#[test]
fn test_insert_mode_editing_keys() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("foo bar", 7);

    type_keys(&mut vim, &mut buffer, "a");
    type_keys(&mut vim, &mut buffer, "\x17");
    assert_eq!(buffer.text(), "foo ");

    type_keys(&mut vim, &mut buffer, "xy\x7f");
    assert_eq!(buffer.text(), "foo x");

    type_keys(&mut vim, &mut buffer, "\x15");
    assert_eq!(buffer.text(), "");
}

#[test]
fn test_mode_labels() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("abc", 0);
    assert_eq!(vim.mode_label(), "NORMAL");

    type_keys(&mut vim, &mut buffer, "c");
    assert_eq!(vim.mode_label(), "O-PENDING");

    type_keys(&mut vim, &mut buffer, "l");
    assert_eq!(vim.mode_label(), "INSERT");
    assert!(vim.in_insert_mode());
}

#[test]
fn test_arrow_keys_move_in_normal_mode() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("abc", 1);

    vim.handle_key(&mut buffer, b"\x1b[C");
    assert_eq!(buffer.cursor(), 2);
    vim.handle_key(&mut buffer, b"\x1b[H");
    assert_eq!(buffer.cursor(), 0);
    vim.handle_key(&mut buffer, b"\x1b[F");
    assert_eq!(buffer.cursor(), 3);
}

#[test]
fn test_cursor_stays_in_bounds() {
    let alphabet: &[&str] = &[
        "h", "l", "w", "b", "e", "W", "B", "E", "0", "^", "$", "x", "X", "D", "~", "d", "c",
        "y", "i", "a", "I", "A", "s", "S", "C", "r", "f", "t", "F", "T", "u", "\x12", ".", "2",
        "q", "\"", "'", " ", "o", ESC, ESC,
    ];

    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("The quick 'brown' fox. Jumps \"over\" it.", 12);
    let mut seed: u32 = 12345;

    for _ in 0..2000 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
        let key = alphabet[(seed >> 16) as usize % alphabet.len()];
        vim.handle_key(&mut buffer, key.as_bytes());
        assert!(
            buffer.cursor() <= buffer.len(),
            "cursor {} past len {} after {:?}",
            buffer.cursor(),
            buffer.len(),
            key
        );
    }
}

#[test]
fn test_delete_around_sentence() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("Hello world. This is fine! Last one", 15);

    type_keys(&mut vim, &mut buffer, "das");
    assert_eq!(buffer.text(), "Hello world. Last one");
}

#[test]
fn test_dot_repeats_text_object_at_new_cursor() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("alpha beta gamma", 0);

    type_keys(&mut vim, &mut buffer, "daw");
    assert_eq!(buffer.text(), "beta gamma");

    type_keys(&mut vim, &mut buffer, ".");
    assert_eq!(buffer.text(), "gamma");
}

#[test]
fn test_dot_repeats_find_operator() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("axbxcxd", 0);

    type_keys(&mut vim, &mut buffer, "dfx");
    assert_eq!(buffer.text(), "bxcxd");

    type_keys(&mut vim, &mut buffer, ".");
    assert_eq!(buffer.text(), "cxd");
}

#[test]
fn test_dot_repeats_change_inside_quotes_on_another_pair() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("say 'hi' and 'yo'", 5);

    type_keys(&mut vim, &mut buffer, "ci'ok");
    type_keys(&mut vim, &mut buffer, ESC);
    assert_eq!(buffer.text(), "say 'ok' and 'yo'");

    type_keys(&mut vim, &mut buffer, "fy.");
    assert_eq!(buffer.text(), "say 'ok' and 'ok'");
    assert_eq!(vim.mode(), VimMode::Normal);
}

#[test]
fn test_repeating_empty_insert_changes_nothing() {
    let mut vim = VimScheme::new();
    let mut buffer = buffer_at("abc", 0);

    type_keys(&mut vim, &mut buffer, "A");
    type_keys(&mut vim, &mut buffer, ESC);

    let event = type_keys(&mut vim, &mut buffer, ".");
    assert!(event.consumed);
    assert!(!event.text_changed);
    assert_eq!(buffer.text(), "abc");
    assert!(!buffer.undo());
}
