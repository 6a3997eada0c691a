//! Choice of presentation for the user input.

use std::fmt;

/// One of the four ways a [`UserBasicInput`](crate::UserBasicInput) is drawn.
///
/// | `fuzzy` | `no_form_style` | variant |
/// |---------|-----------------|---------|
/// | false   | false           | [`Variant::FormInput`] |
/// | false   | true            | [`Variant::Input`] |
/// | true    | false           | [`Variant::FuzzyField`] |
/// | true    | true            | [`Variant::FuzzyInput`] |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Bare text input.
    Input,
    /// Text input inside a labelled, bordered form field.
    FormInput,
    /// Text input followed by the fuzzy checkbox.
    FuzzyInput,
    /// Text input and fuzzy checkbox inside a styled form field.
    FuzzyField,
}

impl Variant {
    /// Picks the variant for the two presentation flags.
    ///
    /// ```rust
    /// use bubbletea_user_input::Variant;
    ///
    /// assert_eq!(Variant::select(false, false), Variant::FormInput);
    /// assert_eq!(Variant::select(true, true), Variant::FuzzyInput);
    /// ```
    pub fn select(fuzzy: bool, no_form_style: bool) -> Self {
        match (fuzzy, no_form_style) {
            (false, false) => Variant::FormInput,
            (false, true) => Variant::Input,
            (true, false) => Variant::FuzzyField,
            (true, true) => Variant::FuzzyInput,
        }
    }

    /// Whether the fuzzy checkbox is shown.
    pub fn is_fuzzy(self) -> bool {
        matches!(self, Variant::FuzzyInput | Variant::FuzzyField)
    }

    /// Whether the input is wrapped in a form field.
    pub fn is_wrapped(self) -> bool {
        matches!(self, Variant::FormInput | Variant::FuzzyField)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Input => "input",
            Variant::FormInput => "form-input",
            Variant::FuzzyInput => "fuzzy-input",
            Variant::FuzzyField => "fuzzy-field",
        };
        f.write_str(name)
    }
}
