//! Configuration of the user input.
//!
//! [`Props`] holds the behaviour flags; [`InputProps`] holds display settings
//! that are handed to the underlying text input unchanged. Both can be built
//! in code or read from TOML:
//!
//! ```rust
//! use bubbletea_user_input::{Props, Variant};
//!
//! let props = Props::from_toml_str(r#"
//!     fuzzy = true
//!     batch = true
//!     batch_max = 50
//!     name = "username"
//!     placeholder = "Enter account"
//! "#).unwrap();
//!
//! assert_eq!(props.variant(), Variant::FuzzyField);
//! assert_eq!(props.batch_limit().max, 50);
//! assert_eq!(props.input.placeholder, "Enter account");
//! ```

use crate::batch::{BatchLimit, DEFAULT_BATCH_MAX};
use crate::checkbox::DEFAULT_LABEL;
use crate::error::Result;
use crate::textinput::{EchoMode, Model as TextInput};
use crate::variant::Variant;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use serde::Deserialize;
use std::path::Path;

/// Display settings passed through to the text input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct InputProps {
    /// Field name reported in change events.
    pub name: Option<String>,
    /// Text shown while the value is empty.
    pub placeholder: String,
    /// Label drawn above the input in form and fuzzy variants.
    pub label: Option<String>,
    /// Visible columns of the text, 0 for unbounded.
    pub width: usize,
    /// Prompt before the text. `None` keeps the input's default.
    pub prompt: Option<String>,
    /// Maximum characters, 0 for no limit.
    pub char_limit: usize,
    /// How typed characters are displayed.
    pub echo_mode: EchoMode,
    /// Ignore keystrokes.
    pub disabled: bool,
    /// Identifier for test harnesses that locate the input by id.
    pub test_id: Option<String>,
}

impl InputProps {
    /// Copies these settings onto a text input.
    pub fn apply(&self, input: &mut TextInput) {
        input.set_placeholder(&self.placeholder);
        input.set_width(self.width);
        input.set_char_limit(self.char_limit);
        input.set_echo_mode(self.echo_mode);
        if let Some(prompt) = &self.prompt {
            input.prompt = prompt.clone();
        }
    }
}

/// Behaviour flags and passthrough settings of a
/// [`UserBasicInput`](crate::UserBasicInput).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Props {
    /// Externally supplied value.
    pub value: String,
    /// Name reported with fuzzy checkbox changes.
    pub checkbox_name: Option<String>,
    /// Text next to the fuzzy checkbox.
    pub checkbox_label: String,
    /// Fuzzy checkbox state.
    pub checked: bool,
    /// Show the fuzzy checkbox.
    pub fuzzy: bool,
    /// Draw without the form field wrapper.
    pub no_form_style: bool,
    /// Enforce [`Props::batch_max`].
    pub batch: bool,
    /// Maximum comma separated entries in batch mode.
    pub batch_max: usize,
    /// Keep whitespace and zero-width spaces.
    pub disable_trim: bool,
    /// Style of the form field wrapping the fuzzy variant.
    #[serde(skip)]
    pub field_style: Style,
    /// Settings for the text input.
    #[serde(flatten)]
    pub input: InputProps,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            value: String::new(),
            checkbox_name: None,
            checkbox_label: DEFAULT_LABEL.to_string(),
            checked: false,
            fuzzy: false,
            no_form_style: false,
            batch: false,
            batch_max: DEFAULT_BATCH_MAX,
            disable_trim: false,
            field_style: default_field_style(),
            input: InputProps::default(),
        }
    }
}

/// Default [`Props::field_style`]: a thin grey border.
pub fn default_field_style() -> Style {
    Style::new()
        .border_style(lipgloss::normal_border())
        .border_foreground(Color::from("240"))
        .padding(0, 1, 0, 1)
}

impl Props {
    /// Props with every default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses props from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads props from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Presentation picked by the `fuzzy` and `no_form_style` flags.
    pub fn variant(&self) -> Variant {
        Variant::select(self.fuzzy, self.no_form_style)
    }

    /// Entry cap in effect.
    pub fn batch_limit(&self) -> BatchLimit {
        BatchLimit {
            enabled: self.batch,
            max: self.batch_max,
        }
    }

    /// Sets the external value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Shows the fuzzy checkbox.
    pub fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Drops the form field wrapper.
    pub fn with_no_form_style(mut self, no_form_style: bool) -> Self {
        self.no_form_style = no_form_style;
        self
    }

    /// Enables batch mode with at most `max` entries.
    pub fn with_batch(mut self, max: usize) -> Self {
        self.batch = true;
        self.batch_max = max;
        self
    }

    /// Keeps whitespace.
    pub fn with_disable_trim(mut self, disable_trim: bool) -> Self {
        self.disable_trim = disable_trim;
        self
    }

    /// Names the fuzzy checkbox.
    pub fn with_checkbox_name(mut self, name: impl Into<String>) -> Self {
        self.checkbox_name = Some(name.into());
        self
    }

    /// Sets the fuzzy checkbox state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Sets the style of the fuzzy form field.
    pub fn with_field_style(mut self, style: Style) -> Self {
        self.field_style = style;
        self
    }

    /// Sets the field name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.input.name = Some(name.into());
        self
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input.placeholder = placeholder.into();
        self
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.input.label = Some(label.into());
        self
    }

    /// Sets the visible width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.input.width = width;
        self
    }

    /// Disables the input.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.input.disabled = disabled;
        self
    }

    /// Caps the value at `limit` characters, 0 for no cap.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.input.char_limit = limit;
        self
    }

    /// Sets the test id.
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.input.test_id = Some(test_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let props = Props::default();
        assert_eq!(props.value, "");
        assert!(!props.checked);
        assert!(!props.fuzzy);
        assert!(!props.no_form_style);
        assert!(!props.batch);
        assert_eq!(props.batch_max, 200);
        assert!(!props.disable_trim);
        assert_eq!(props.checkbox_label, "Fuzzy");
        assert_eq!(props.variant(), Variant::FormInput);
        assert_eq!(props.input, InputProps::default());
    }

    #[test]
    fn test_from_toml_keeps_defaults_for_missing_keys() {
        let props = Props::from_toml_str("no_form_style = true\nwidth = 24").unwrap();
        assert!(props.no_form_style);
        assert_eq!(props.input.width, 24);
        assert_eq!(props.batch_max, 200);
        assert_eq!(props.variant(), Variant::Input);
    }

    #[test]
    fn test_from_toml_echo_mode() {
        let props = Props::from_toml_str(r#"echo_mode = "echo_password""#).unwrap();
        assert_eq!(props.input.echo_mode, EchoMode::EchoPassword);
    }

    #[test]
    fn test_from_toml_rejects_wrong_types() {
        let err = Props::from_toml_str("batch_max = \"lots\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = Props::from_toml_file("/nonexistent/user-input.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_builders() {
        let props = Props::new()
            .with_value("alice")
            .with_fuzzy(true)
            .with_no_form_style(true)
            .with_batch(10)
            .with_checkbox_name("fuzzy")
            .with_checked(true)
            .with_name("username")
            .with_placeholder("Enter account")
            .with_label("Account")
            .with_width(30);

        assert_eq!(props.variant(), Variant::FuzzyInput);
        assert_eq!(props.batch_limit(), BatchLimit::new(10));
        assert_eq!(props.input.name.as_deref(), Some("username"));
        assert_eq!(props.input.label.as_deref(), Some("Account"));
        assert_eq!(props.checkbox_name.as_deref(), Some("fuzzy"));
    }

    #[test]
    fn test_test_id_from_toml() {
        let props = Props::from_toml_str(r#"test_id = "account-input""#).unwrap();
        assert_eq!(props.input.test_id.as_deref(), Some("account-input"));
        assert_eq!(
            Props::new().with_test_id("account-input").input,
            props.input
        );
    }

    #[test]
    fn test_apply_copies_display_settings() {
        let props = InputProps {
            placeholder: "who?".to_string(),
            width: 12,
            prompt: Some("$ ".to_string()),
            char_limit: 8,
            ..InputProps::default()
        };
        let mut input = crate::textinput::new();
        props.apply(&mut input);

        assert_eq!(input.placeholder, "who?");
        assert_eq!(input.width(), 12);
        assert_eq!(input.prompt, "$ ");
        input.set_value("abcdefghij");
        assert_eq!(input.value(), "abcdefgh");
    }
}
