//! The user/account input component.
//!
//! [`UserBasicInput`] wraps a [`textinput`](crate::textinput) and adds three
//! things on top of it:
//!
//! - every edit is normalized (see [`crate::normalize`]) unless
//!   `disable_trim` is set,
//! - in batch mode, edits with more comma separated entries than `batch_max`
//!   are reported to the [`Reporter`](crate::Reporter) and dropped,
//! - the `fuzzy` and `no_form_style` flags pick one of four
//!   [`Variant`](crate::Variant)s, the fuzzy ones adding a checkbox.
//!
//! # Usage
//!
//! ```rust
//! use bubbletea_user_input::prelude::*;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut input = user_input_new(
//!     Props::new()
//!         .with_fuzzy(true)
//!         .with_name("username")
//!         .with_placeholder("Enter account"),
//! )
//! .on_change(|e: &ChangeEvent| println!("{:?} = {}", e.name, e.value));
//! let _ = input.focus();
//!
//! input.update(Box::new(KeyMsg { key: KeyCode::Char('a'), modifiers: KeyModifiers::NONE }));
//! input.update(Box::new(KeyMsg { key: KeyCode::Char(' '), modifiers: KeyModifiers::NONE }));
//! assert_eq!(input.value(), "a");
//!
//! input.update(Box::new(KeyMsg { key: KeyCode::Char('t'), modifiers: KeyModifiers::CONTROL }));
//! assert!(input.checked());
//! ```

pub mod model;
pub mod view;


pub use model::{
    default_key_map, new, ChangeEvent, ChangeFunc, ChangeOutcome, FuzzyChangeEvent,
    FuzzyChangeFunc, KeyMap, Styles, UserBasicInput,
};
