//! Single-line text input used as the presentation primitive of the user input.
//!
//! The model keeps its value as a vector of characters so cursor positions are
//! character indices. It knows nothing about normalization or batch limits;
//! [`crate::userinput`] drives it and decides which edits are kept.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_user_input::textinput::new;
//!
//! let mut input = new();
//! let _ = input.focus();
//! input.set_placeholder("Enter account...");
//! input.set_width(30);
//! input.set_value("alice");
//! assert_eq!(input.value(), "alice");
//! ```
//!
//! # Echo Modes
//!
//! ```rust
//! use bubbletea_user_input::textinput::{new, EchoMode};
//!
//! let mut input = new();
//! input.set_echo_mode(EchoMode::EchoPassword);
//! ```

pub mod keymap;
pub mod methods;
pub mod model;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model};
pub use types::{EchoMode, PasteErrMsg, PasteMsg};
