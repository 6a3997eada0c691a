//! Tests for the textinput component.

use super::*;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn ctrl(c: char) -> Msg {
    Box::new(KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    })
}

fn focused() -> Model {
    let mut input = new();
    let _ = input.focus();
    input
}

fn type_str(input: &mut Model, s: &str) {
    for ch in s.chars() {
        input.update(key(KeyCode::Char(ch)));
    }
}

#[test]
fn test_new_default_values() {
    let input = new();

    assert_eq!(input.prompt, "> ");
    assert_eq!(input.placeholder, "");
    assert_eq!(input.echo_character, '*');
    assert_eq!(input.char_limit, 0);
    assert_eq!(input.width(), 0);
    assert_eq!(input.value(), "");
    assert_eq!(input.position(), 0);
    assert!(!input.focused());
    assert_eq!(input.echo_mode, EchoMode::EchoNormal);
    assert!(input.err.is_none());
}

#[test]
fn test_set_value_moves_cursor_to_end() {
    let mut input = new();
    input.set_value("hello world");

    assert_eq!(input.value(), "hello world");
    assert_eq!(input.position(), 11);
}

#[test]
fn test_set_value_with_char_limit() {
    let mut input = new();
    input.set_char_limit(5);
    input.set_value("hello world");

    assert_eq!(input.value(), "hello");
}

#[test]
fn test_set_cursor_is_clamped() {
    let mut input = new();
    input.set_value("hello");

    input.set_cursor(2);
    assert_eq!(input.position(), 2);

    input.set_cursor(100);
    assert_eq!(input.position(), 5);
}

#[test]
fn test_unfocused_input_ignores_keys() {
    let mut input = new();
    input.update(key(KeyCode::Char('a')));
    assert_eq!(input.value(), "");
}

#[test]
fn test_typing_and_backspace() {
    let mut input = focused();
    type_str(&mut input, "abc");
    assert_eq!(input.value(), "abc");

    input.update(key(KeyCode::Backspace));
    assert_eq!(input.value(), "ab");
    assert_eq!(input.position(), 2);
}

#[test]
fn test_insert_in_the_middle() {
    let mut input = focused();
    type_str(&mut input, "ac");
    input.update(key(KeyCode::Left));
    type_str(&mut input, "b");

    assert_eq!(input.value(), "abc");
    assert_eq!(input.position(), 2);
}

#[test]
fn test_char_limit_stops_typing() {
    let mut input = focused();
    input.set_char_limit(3);
    type_str(&mut input, "abcdef");
    assert_eq!(input.value(), "abc");
}

#[test]
fn test_delete_word_backward_stops_at_comma() {
    let mut input = focused();
    input.set_value("alice,bob");
    input.update(ctrl('w'));
    assert_eq!(input.value(), "alice,");
}

#[test]
fn test_delete_before_and_after_cursor() {
    let mut input = focused();
    input.set_value("hello world");
    input.set_cursor(5);

    input.update(ctrl('k'));
    assert_eq!(input.value(), "hello");

    input.set_cursor(2);
    input.update(ctrl('u'));
    assert_eq!(input.value(), "llo");
    assert_eq!(input.position(), 0);
}

#[test]
fn test_line_start_and_end() {
    let mut input = focused();
    input.set_value("hello");
    input.update(ctrl('a'));
    assert_eq!(input.position(), 0);
    input.update(ctrl('e'));
    assert_eq!(input.position(), 5);
}

#[test]
fn test_paste_message_inserts_at_cursor() {
    let mut input = focused();
    input.set_value("ad");
    input.set_cursor(1);
    input.update(Box::new(PasteMsg("bc".to_string())));

    assert_eq!(input.value(), "abcd");
    assert_eq!(input.position(), 3);
}

#[test]
fn test_paste_error_is_recorded() {
    let mut input = focused();
    input.update(Box::new(PasteErrMsg("no clipboard".to_string())));
    assert_eq!(input.err.as_deref(), Some("no clipboard"));
}

#[test]
fn test_echo_modes() {
    let mut input = new();
    input.set_value("secret");

    let view_normal = lipgloss::strip_ansi(&input.view());
    assert!(view_normal.contains("secret"));

    input.set_echo_mode(EchoMode::EchoPassword);
    let view_password = lipgloss::strip_ansi(&input.view());
    assert!(view_password.contains("******"));
    assert!(!view_password.contains("secret"));

    input.set_echo_mode(EchoMode::EchoNone);
    let view_none = lipgloss::strip_ansi(&input.view());
    assert!(!view_none.contains("secret"));
    assert!(!view_none.contains('*'));
}

#[test]
fn test_placeholder() {
    let mut input = new();
    input.set_placeholder("Enter text");

    let view_empty = lipgloss::strip_ansi(&input.view());
    assert!(view_empty.contains("Enter text"));

    input.set_value("actual");
    let view_with_text = lipgloss::strip_ansi(&input.view());
    assert!(!view_with_text.contains("Enter text"));
    assert!(view_with_text.contains("actual"));
}

#[test]
fn test_scrolls_to_keep_cursor_visible() {
    let mut input = focused();
    input.set_width(5);
    type_str(&mut input, "abcdefghij");

    let view = lipgloss::strip_ansi(&input.view());
    assert!(view.contains("fghij"));
    assert!(!view.contains("abc"));

    input.update(ctrl('a'));
    let view = lipgloss::strip_ansi(&input.view());
    assert!(view.contains("abcde"));
}
