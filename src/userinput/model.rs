//! State and update handling for the user input.

use crate::batch::BatchError;
use crate::checkbox::Model as Checkbox;
use crate::diagnostics::{Reporter, TracingReporter};
use crate::key::{matches_binding, new_binding, with_help, with_keys_str, Binding};
use crate::normalize::normalize;
use crate::props::Props;
use crate::textinput::{self, Model as TextInput, PasteMsg};
use crate::variant::Variant;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use std::fmt;

/// Sent to the change callback after an edit is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Field name from [`InputProps::name`](crate::InputProps::name).
    pub name: Option<String>,
    /// The accepted, normalized value.
    pub value: String,
}

/// Sent to the fuzzy callback when the checkbox flips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyChangeEvent {
    /// Name from [`Props::checkbox_name`].
    pub name: Option<String>,
    /// New checkbox state.
    pub checked: bool,
}

/// Change callback.
pub type ChangeFunc = Box<dyn FnMut(&ChangeEvent) + Send>;

/// Fuzzy checkbox callback.
pub type FuzzyChangeFunc = Box<dyn FnMut(&FuzzyChangeEvent) + Send>;

/// Result of running a candidate value through the change pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The value was stored and the change callback ran with it.
    Accepted(String),
    /// The value was dropped and reported.
    Rejected(BatchError),
}

impl ChangeOutcome {
    /// Whether the edit was kept.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ChangeOutcome::Accepted(_))
    }
}

/// Bindings handled by the user input itself. Editing keys belong to the
/// inner text input.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Flip the fuzzy checkbox.
    pub toggle_fuzzy: Binding,
}

/// Default bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        toggle_fuzzy: new_binding(vec![
            with_keys_str(&["ctrl+t"]),
            with_help("ctrl+t", "toggle fuzzy"),
        ]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl crate::key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.toggle_fuzzy]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.toggle_fuzzy]]
    }
}

/// Styles of the form wrapper.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Label above wrapped variants.
    pub label: Style,
    /// Label when the input is disabled.
    pub disabled_label: Style,
    /// Border around the form input.
    pub field: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            label: Style::new().bold(true),
            disabled_label: Style::new().foreground(Color::from("240")),
            field: Style::new()
                .border_style(lipgloss::normal_border())
                .border_foreground(Color::from("240"))
                .padding(0, 1, 0, 1),
        }
    }
}

/// User/account input with normalization, batch limits and an optional fuzzy
/// checkbox.
///
/// Every edit, typed or pasted, goes through the same pipeline: the
/// candidate is normalized, checked against the batch limit, and then either
/// stored and passed to the change callback, or reported and dropped.
///
/// # Examples
///
/// ```rust
/// use bubbletea_user_input::{ChangeOutcome, Props, UserBasicInput};
///
/// let mut input = UserBasicInput::new(Props::new().with_batch(2).with_value(" alice "));
/// assert_eq!(input.value(), "alice");
///
/// assert!(input.input_changed("alice, bob").is_accepted());
/// assert_eq!(input.value(), "alice,bob");
///
/// assert!(matches!(input.input_changed("a,b,c"), ChangeOutcome::Rejected(_)));
/// assert_eq!(input.value(), "alice,bob");
/// ```
pub struct UserBasicInput {
    props: Props,
    pub(super) input: TextInput,
    pub(super) checkbox: Checkbox,
    /// Component level bindings.
    pub key_map: KeyMap,
    /// Wrapper styles.
    pub styles: Styles,
    on_change: ChangeFunc,
    on_fuzzy_change: FuzzyChangeFunc,
    reporter: Box<dyn Reporter>,
}

/// Creates a user input from props.
pub fn new(props: Props) -> UserBasicInput {
    UserBasicInput::new(props)
}

impl UserBasicInput {
    /// Creates the input; its value is the normalized `props.value`.
    pub fn new(props: Props) -> Self {
        let mut input = textinput::new();
        props.input.apply(&mut input);

        let mut checkbox = Checkbox::new(props.checkbox_label.clone()).with_checked(props.checked);
        checkbox.set_name(props.checkbox_name.clone());
        checkbox.set_disabled(props.input.disabled);

        let mut m = Self {
            props,
            input,
            checkbox,
            key_map: default_key_map(),
            styles: Styles::default(),
            on_change: Box::new(|_| {}),
            on_fuzzy_change: Box::new(|_| {}),
            reporter: Box::new(TracingReporter),
        };
        m.reset_value();
        m
    }

    /// Registers the change callback.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        self.on_change = Box::new(f);
        self
    }

    /// Registers the fuzzy checkbox callback.
    pub fn on_fuzzy_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(&FuzzyChangeEvent) + Send + 'static,
    {
        self.on_fuzzy_change = Box::new(f);
        self
    }

    /// Replaces the reporter that receives rejected edits.
    pub fn with_reporter<R>(mut self, reporter: R) -> Self
    where
        R: Reporter + 'static,
    {
        self.reporter = Box::new(reporter);
        self
    }

    /// Current props.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Replaces the props. The value is re-derived only when `props.value`
    /// differs from the previous external value.
    pub fn set_props(&mut self, props: Props) {
        let value_changed = props.value != self.props.value;
        self.props = props;

        self.props.input.apply(&mut self.input);
        self.checkbox.set_label(self.props.checkbox_label.clone());
        self.checkbox.set_name(self.props.checkbox_name.clone());
        self.checkbox.set_checked(self.props.checked);
        self.checkbox.set_disabled(self.props.input.disabled);

        if value_changed {
            self.reset_value();
        }
    }

    /// Sets the external value. The displayed value always becomes its
    /// normalized form; no batch check runs and no callback fires.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.props.value = value.into();
        self.reset_value();
    }

    fn reset_value(&mut self) {
        let value = normalize(&self.props.value, self.props.disable_trim);
        self.input.set_value(&value);
        self.input.cursor_end();
    }

    /// Displayed value.
    pub fn value(&self) -> String {
        self.input.value()
    }

    /// Fuzzy checkbox state.
    pub fn checked(&self) -> bool {
        self.checkbox.checked()
    }

    /// Sets the fuzzy checkbox state without calling the fuzzy callback.
    pub fn set_checked(&mut self, checked: bool) {
        self.props.checked = checked;
        self.checkbox.set_checked(checked);
    }

    /// Test id from [`InputProps::test_id`](crate::InputProps::test_id).
    pub fn test_id(&self) -> Option<&str> {
        self.props.input.test_id.as_deref()
    }

    /// Presentation in use.
    pub fn variant(&self) -> Variant {
        self.props.variant()
    }

    /// The inner text input.
    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// Runs `raw` through the change pipeline.
    ///
    /// The candidate is normalized, cut to the character limit and checked
    /// against the batch limit. An accepted value replaces the displayed value
    /// and is passed to the change callback; a rejected one goes to the
    /// reporter and leaves everything untouched.
    pub fn input_changed(&mut self, raw: &str) -> ChangeOutcome {
        let mut candidate = normalize(raw, self.props.disable_trim).into_owned();
        let limit = self.props.input.char_limit;
        if limit > 0 {
            if let Some((cut, _)) = candidate.char_indices().nth(limit) {
                candidate.truncate(cut);
            }
        }

        if let Err(err) = self.props.batch_limit().check(&candidate) {
            self.reporter.report(&err);
            return ChangeOutcome::Rejected(err);
        }

        self.input.set_value(&candidate);
        (self.on_change)(&ChangeEvent {
            name: self.props.input.name.clone(),
            value: candidate.clone(),
        });
        ChangeOutcome::Accepted(candidate)
    }

    /// Flips the fuzzy checkbox and calls the fuzzy callback.
    ///
    /// Returns the new state. Disabled inputs keep their state and the
    /// callback does not run.
    pub fn toggle_fuzzy(&mut self) -> bool {
        let before = self.checkbox.checked();
        let checked = self.checkbox.toggle();
        if checked != before {
            self.props.checked = checked;
            (self.on_fuzzy_change)(&FuzzyChangeEvent {
                name: self.props.checkbox_name.clone(),
                checked,
            });
        }
        checked
    }

    /// Handles key and paste messages.
    ///
    /// In fuzzy variants the toggle binding flips the checkbox. Everything
    /// else is given to the text input; when that changes the text, the new
    /// text runs through [`input_changed`](Self::input_changed) and a
    /// rejected edit restores the previous text and cursor. Disabled inputs
    /// drop key and paste messages.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if self.props.input.disabled {
            // blink ticks still reach the caret
            if msg.is::<KeyMsg>() || msg.is::<PasteMsg>() {
                return None;
            }
            return self.input.update(msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.variant().is_fuzzy()
                && self.input.focused()
                && matches_binding(key_msg, &self.key_map.toggle_fuzzy)
            {
                self.toggle_fuzzy();
                return None;
            }
        }

        let before = self.input.value();
        let before_pos = self.input.position();

        let cmd = self.input.update(msg);

        let after = self.input.value();
        if after != before {
            let head: String = after.chars().take(self.input.position()).collect();
            match self.input_changed(&after) {
                ChangeOutcome::Accepted(_) => {
                    // stripped characters before the cursor shift it left
                    let pos = normalize(&head, self.props.disable_trim).chars().count();
                    self.input.set_cursor(pos);
                }
                ChangeOutcome::Rejected(_) => {
                    self.input.set_value(&before);
                    self.input.set_cursor(before_pos);
                }
            }
        }

        cmd
    }
}

impl fmt::Debug for UserBasicInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserBasicInput")
            .field("test_id", &self.test_id())
            .field("props", &self.props)
            .field("value", &self.input.value())
            .field("checked", &self.checkbox.checked())
            .field("variant", &self.variant())
            .finish_non_exhaustive()
    }
}

impl Component for UserBasicInput {
    fn focus(&mut self) -> Option<Cmd> {
        self.input.focus()
    }

    fn blur(&mut self) {
        self.input.blur()
    }

    fn focused(&self) -> bool {
        self.input.focused()
    }
}

impl BubbleTeaModel for UserBasicInput {
    fn init() -> (Self, Option<Cmd>) {
        (new(Props::default()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
