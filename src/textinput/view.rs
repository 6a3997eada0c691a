//! Rendering for the textinput component.

use super::model::Model;
use super::types::EchoMode;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Renders the prompt followed by the visible part of the value, or the
    /// placeholder when the value is empty.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let end = self.offset_right.min(self.value.len());
        let start = self.offset.min(end);
        let visible = self.echo_transform(&self.value[start..end]);
        let pos = self.pos.saturating_sub(start).min(visible.len());

        let mut v = String::new();
        let before: String = visible[..pos].iter().collect();
        if !before.is_empty() {
            v.push_str(&self.text_style.render(&before));
        }

        let mut cur = self.cursor.clone();
        if pos < visible.len() {
            cur.set_char(&visible[pos].to_string());
            v.push_str(&cur.view());
            let after: String = visible[pos + 1..].iter().collect();
            if !after.is_empty() {
                v.push_str(&self.text_style.render(&after));
            }
        } else {
            cur.set_char(" ");
            v.push_str(&cur.view());
        }

        let shown: String = visible.iter().collect();
        let used = UnicodeWidthStr::width(shown.as_str());
        if self.width > used {
            v.push_str(&self.text_style.render(&" ".repeat(self.width - used)));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    pub(super) fn placeholder_view(&self) -> String {
        let mut chars = self.placeholder.chars();
        let mut v = String::new();

        let mut cur = self.cursor.clone();
        if let Some(first) = chars.next() {
            cur.set_char(&first.to_string());
            v.push_str(&cur.view());
        }
        let rest: String = chars.collect();
        if !rest.is_empty() {
            v.push_str(&self.placeholder_style.render(&rest));
        }

        let used = UnicodeWidthStr::width(self.placeholder.as_str());
        if self.width > used {
            v.push_str(&self.placeholder_style.render(&" ".repeat(self.width - used)));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    pub(super) fn echo_transform(&self, v: &[char]) -> Vec<char> {
        match self.echo_mode {
            EchoMode::EchoNormal => v.to_vec(),
            EchoMode::EchoPassword => vec![self.echo_character; v.len()],
            EchoMode::EchoNone => Vec::new(),
        }
    }
}
