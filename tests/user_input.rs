//! Drives the user input the way a bubbletea program would.

use bubbletea_rs::{KeyMsg, Model, Msg};
use bubbletea_user_input::cursor::BlinkMsg;
use bubbletea_user_input::prelude::*;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::{Arc, Mutex};

fn press(code: KeyCode, modifiers: KeyModifiers) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers,
    })
}

fn type_str(input: &mut UserBasicInput, s: &str) {
    for ch in s.chars() {
        input.update(press(KeyCode::Char(ch), KeyModifiers::NONE));
    }
}

#[test]
fn test_model_init_uses_defaults() {
    let (input, cmd) = <UserBasicInput as Model>::init();
    assert!(cmd.is_none());
    assert_eq!(input.value(), "");
    assert_eq!(input.variant(), Variant::FormInput);
    assert_eq!(input.props().batch_max, 200);
}

#[test]
fn test_batch_entry_session() {
    let accepted = Arc::new(Mutex::new(Vec::new()));
    let refused = Arc::new(Mutex::new(0usize));
    let (a, r) = (Arc::clone(&accepted), Arc::clone(&refused));

    let props = Props::from_toml_str(
        r#"
        batch = true
        batch_max = 3
        no_form_style = true
        name = "accounts"
        "#,
    )
    .unwrap();

    let mut input = user_input_new(props)
        .on_change(move |e: &ChangeEvent| a.lock().unwrap().push(e.value.clone()))
        .with_reporter(move |_: &BatchError| *r.lock().unwrap() += 1);
    let _ = input.focus();

    type_str(&mut input, "alice, bob, carol, dave");

    // ", dave" never gets past the comma
    assert_eq!(input.value(), "alice,bob,caroldave");
    assert_eq!(*refused.lock().unwrap(), 1);
    assert_eq!(
        accepted.lock().unwrap().last().map(String::as_str),
        Some("alice,bob,caroldave")
    );

    // removing an entry frees room for another
    input.update(press(KeyCode::Char('w'), KeyModifiers::CONTROL));
    assert_eq!(input.value(), "alice,bob,");
    type_str(&mut input, "erin");
    assert_eq!(input.value(), "alice,bob,erin");
}

#[test]
fn test_fuzzy_field_round_trip() {
    let mut input = user_input_new(
        Props::new()
            .with_fuzzy(true)
            .with_checkbox_name("fuzzy")
            .with_label("Account")
            .with_placeholder("Enter account"),
    );
    let _ = input.focus();

    input.update(press(KeyCode::Char('t'), KeyModifiers::CONTROL));
    type_str(&mut input, " ali ce ");

    assert!(input.checked());
    assert_eq!(input.value(), "alice");

    let view = lipgloss_extras::lipgloss::strip_ansi(&input.view());
    assert!(view.contains("Account"));
    assert!(view.contains("alice"));
    assert!(view.contains("[x] Fuzzy"));
}

#[tokio::test]
async fn test_focus_command_resolves_to_blink() {
    let mut input = user_input_new(Props::default());
    let cmd = input.focus().expect("focus starts the cursor blinking");

    let msg = cmd.await.expect("blink message");
    assert!(msg.downcast_ref::<BlinkMsg>().is_some());

    // feeding the blink back schedules the next one and leaves the value alone
    assert!(input.update(msg).is_some());
    assert_eq!(input.value(), "");
}

#[tokio::test]
async fn test_disabled_input_keeps_blinking() {
    let mut input = user_input_new(Props::new().with_disabled(true));
    let cmd = input.focus().expect("focus starts the cursor blinking");
    let msg = cmd.await.expect("blink message");

    assert!(input.update(msg).is_some());
    input.update(press(KeyCode::Char('a'), KeyModifiers::NONE));
    assert_eq!(input.value(), "");
}
