//! Core model for the textinput component.

use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{EchoMode, PasteErrMsg};
use crate::cursor::{new as cursor_new, Model as Cursor};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// A single-line text input field.
///
/// Supports cursor movement and editing keys, placeholder text, a prompt,
/// echo modes for secrets, a character limit and horizontal scrolling once
/// the text is wider than [`Model::width`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_user_input::textinput::{new, EchoMode};
///
/// let mut input = new();
/// let _ = input.focus();
/// input.set_placeholder("Enter your name...");
/// input.set_width(30);
/// input.set_char_limit(50);
/// input.set_echo_mode(EchoMode::EchoPassword);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Last clipboard error, if any.
    pub err: Option<String>,

    /// Prompt displayed before the text.
    pub prompt: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style of the typed text.
    pub text_style: Style,

    /// Text displayed while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder.
    pub placeholder_style: Style,

    /// Caret.
    pub cursor: Cursor,
    /// Key bindings.
    pub key_map: KeyMap,

    /// How characters are echoed.
    pub echo_mode: EchoMode,
    /// Mask character for [`EchoMode::EchoPassword`].
    pub echo_character: char,

    pub(super) value: Vec<char>,
    pub(super) focus: bool,
    pub(super) pos: usize,
    // visible columns, 0 = unbounded
    pub(super) width: usize,
    // 0 = no limit
    pub(super) char_limit: usize,

    // visible window into `value`
    pub(super) offset: usize,
    pub(super) offset_right: usize,
}

/// Creates an unfocused input with the default prompt `"> "`.
pub fn new() -> Model {
    Model {
        err: None,
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor: cursor_new(),
        key_map: default_key_map(),
        echo_mode: EchoMode::EchoNormal,
        echo_character: '*',
        value: Vec::new(),
        focus: false,
        pos: 0,
        width: 0,
        char_limit: 0,
        offset: 0,
        offset_right: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

/// Reads the system clipboard.
///
/// The returned command resolves to a [`PasteMsg`](super::PasteMsg) with the
/// clipboard text, or a [`PasteErrMsg`] when the clipboard is unavailable or
/// the `clipboard-support` feature is disabled.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
