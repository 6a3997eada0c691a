//! Checkbox shown next to the text input in fuzzy mode.
//!
//! The checkbox only stores its state and renders it; the owning component
//! decides which key toggles it and who is told about the change.
//!
//! ```rust
//! use bubbletea_user_input::checkbox::Model as Checkbox;
//!
//! let mut cb = Checkbox::new("Fuzzy").with_name("fuzzy");
//! assert!(!cb.checked());
//! assert!(cb.toggle());
//! assert!(cb.view().contains("Fuzzy"));
//! ```

use lipgloss_extras::prelude::*;

/// Label used when none is configured.
pub const DEFAULT_LABEL: &str = "Fuzzy";

/// Styles of the checkbox.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Box when checked.
    pub checked: Style,
    /// Box when unchecked.
    pub unchecked: Style,
    /// Label text.
    pub label: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            checked: Style::new().foreground(Color::from("212")).bold(true),
            unchecked: Style::new().foreground(Color::from("240")),
            label: Style::new(),
        }
    }
}

/// A labelled on/off box.
#[derive(Debug, Clone)]
pub struct Model {
    name: Option<String>,
    label: String,
    checked: bool,
    disabled: bool,
    /// Rendering styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}

impl Model {
    /// Creates an unchecked checkbox.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            name: None,
            label: label.into(),
            checked: false,
            disabled: false,
            styles: Styles::default(),
        }
    }

    /// Sets the name reported with changes.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the initial state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Name reported with changes.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Text next to the box.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Current state.
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Sets the state without notifying anyone.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Whether toggling is blocked.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Blocks or allows toggling.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Flips the state and returns the new one. Disabled checkboxes keep
    /// their state.
    pub fn toggle(&mut self) -> bool {
        if !self.disabled {
            self.checked = !self.checked;
        }
        self.checked
    }

    /// Renders `[x] label` or `[ ] label`.
    pub fn view(&self) -> String {
        let mark = if self.checked {
            self.styles.checked.render("[x]")
        } else {
            self.styles.unchecked.render("[ ]")
        };
        if self.label.is_empty() {
            return mark;
        }
        format!("{} {}", mark, self.styles.label.render(&self.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss;

    #[test]
    fn test_toggle() {
        let mut cb = Model::default();
        assert!(!cb.checked());
        assert!(cb.toggle());
        assert!(!cb.toggle());
    }

    #[test]
    fn test_disabled_checkbox_does_not_toggle() {
        let mut cb = Model::new("Fuzzy").with_checked(true);
        cb.set_disabled(true);
        assert!(cb.toggle());
        assert!(cb.checked());
    }

    #[test]
    fn test_view_shows_state_and_label() {
        let mut cb = Model::new("Fuzzy");
        assert_eq!(lipgloss::strip_ansi(&cb.view()), "[ ] Fuzzy");
        cb.set_checked(true);
        assert_eq!(lipgloss::strip_ansi(&cb.view()), "[x] Fuzzy");
    }

    #[test]
    fn test_name() {
        let cb = Model::default().with_name("fuzzy_user");
        assert_eq!(cb.name(), Some("fuzzy_user"));
        assert_eq!(cb.label(), DEFAULT_LABEL);
    }
}
