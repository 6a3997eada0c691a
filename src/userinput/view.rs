//! Rendering of the four user input variants.

use super::model::UserBasicInput;
use crate::variant::Variant;
use lipgloss_extras::prelude::*;

impl UserBasicInput {
    /// Renders the variant selected by the props.
    ///
    /// - [`Variant::Input`]: the text input, with the label inline before it.
    /// - [`Variant::FormInput`]: label on its own line above the bordered input.
    /// - [`Variant::FuzzyInput`]: label above the input and fuzzy checkbox.
    /// - [`Variant::FuzzyField`]: the same inside [`Props::field_style`](crate::Props::field_style).
    pub fn view(&self) -> String {
        match self.variant() {
            Variant::Input => match self.label_view() {
                Some(label) => format!("{} {}", label, self.input.view()),
                None => self.input.view(),
            },
            Variant::FormInput => self.stack_label(self.styles.field.render(&self.input.view())),
            Variant::FuzzyInput => self.stack_label(self.fuzzy_row()),
            Variant::FuzzyField => {
                let body = self.stack_label(self.fuzzy_row());
                self.props().field_style.render(&body)
            }
        }
    }

    fn fuzzy_row(&self) -> String {
        format!("{}  {}", self.input.view(), self.checkbox.view())
    }

    fn label_view(&self) -> Option<String> {
        let label = self.props().input.label.as_deref().filter(|l| !l.is_empty())?;
        let style: &Style = if self.props().input.disabled {
            &self.styles.disabled_label
        } else {
            &self.styles.label
        };
        Some(style.render(label))
    }

    fn stack_label(&self, body: String) -> String {
        match self.label_view() {
            Some(label) => format!("{}\n{}", label, body),
            None => body,
        }
    }
}
