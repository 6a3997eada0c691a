#![warn(missing_docs)]

//! # bubbletea-user-input
//!
//! A user/account input component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, built from the same pieces as the rest of the widget family:
//! a text input, a cursor, key bindings and lipgloss styles.
//!
//! ## Overview
//!
//! [`UserBasicInput`] is a single line input meant for identifiers such as
//! user names or account ids. On top of a plain text input it:
//!
//! - strips whitespace and zero-width spaces from everything typed or pasted
//!   (unless `disable_trim` is set),
//! - optionally accepts a comma separated batch of identifiers and refuses
//!   edits that would exceed `batch_max` entries,
//! - optionally shows a "fuzzy" checkbox next to the input,
//! - optionally wraps itself in a labelled, bordered form field.
//!
//! Like every widget here it follows the Elm Architecture with `update()` and
//! `view()` methods.
//!
//! ## Focus Management
//!
//! All components implement the [`Component`] trait:
//!
//! ```rust
//! use bubbletea_user_input::prelude::*;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _cmd = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut input = user_input_new(Props::default());
//! handle_focus(&mut input);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_user_input::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     account: UserBasicInput,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut account = user_input_new(
//!             Props::new()
//!                 .with_batch(200)
//!                 .with_label("Accounts")
//!                 .with_placeholder("alice,bob,..."),
//!         );
//!         let cmd = account.focus();
//!         (Self { account }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.account.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.account.view()
//!     }
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! bubbletea-user-input = "0.1"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```
//!
//! ## Logging
//!
//! Edits refused by the batch limit are reported as `tracing` error events
//! on the `bubbletea_user_input` target unless another
//! [`Reporter`] is installed with [`UserBasicInput::with_reporter`]. The
//! crate never installs a subscriber.

pub mod batch;
pub mod checkbox;
pub mod cursor;
pub mod diagnostics;
pub mod error;
pub mod key;
pub mod normalize;
pub mod props;
pub mod textinput;
pub mod userinput;
pub mod variant;

use bubbletea_rs::Cmd;

/// Focus management shared by all components.
///
/// - `focus()` marks the component as receiving keyboard input and may
///   return a command, e.g. to start the cursor blinking.
/// - `blur()` stops it receiving input.
/// - `focused()` reports the current state.
///
/// ```rust
/// use bubbletea_user_input::prelude::*;
///
/// let mut input = textinput_new();
/// assert!(!input.focused());
///
/// let _ = input.focus();
/// assert!(input.focused());
///
/// input.blur();
/// assert!(!input.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Whether the component has keyboard focus.
    fn focused(&self) -> bool;
}

pub use batch::{segment_count, BatchError, BatchLimit, DEFAULT_BATCH_MAX};
pub use checkbox::Model as Checkbox;
pub use cursor::Model as Cursor;
pub use diagnostics::{Reporter, TracingReporter};
pub use error::{Error, Result};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use normalize::normalize;
pub use props::{InputProps, Props};
pub use textinput::{
    default_key_map as textinput_default_key_map, new as textinput_new, paste, EchoMode,
    KeyMap as TextInputKeyMap, Model as TextInput, PasteErrMsg, PasteMsg,
};
pub use userinput::{
    default_key_map as user_input_default_key_map, new as user_input_new, ChangeEvent,
    ChangeFunc, ChangeOutcome, FuzzyChangeEvent, FuzzyChangeFunc, KeyMap as UserInputKeyMap,
    Styles as UserInputStyles, UserBasicInput,
};
pub use variant::Variant;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_user_input::prelude::*;
///
/// let input = user_input_new(Props::new().with_fuzzy(true));
/// assert_eq!(input.variant(), Variant::FuzzyField);
/// ```
pub mod prelude {
    pub use crate::batch::{BatchError, BatchLimit};
    pub use crate::checkbox::Model as Checkbox;
    pub use crate::diagnostics::{Reporter, TracingReporter};
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
        Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::normalize::normalize;
    pub use crate::props::{InputProps, Props};
    pub use crate::textinput::{
        new as textinput_new, EchoMode, Model as TextInput, PasteErrMsg, PasteMsg,
    };
    pub use crate::userinput::{
        new as user_input_new, ChangeEvent, ChangeOutcome, FuzzyChangeEvent,
        KeyMap as UserInputKeyMap, UserBasicInput,
    };
    pub use crate::variant::Variant;
    pub use crate::Component;
}
