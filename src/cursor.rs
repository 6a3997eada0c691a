//! Blinking caret embedded in the text input.
//!
//! The caret owns no text. The input tells it which character sits underneath
//! via [`Model::set_char`] and forwards every message to [`Model::update`];
//! only ticks scheduled by this caret flip it.
//!
//! ```rust
//! use bubbletea_user_input::cursor;
//!
//! let mut cur = cursor::new();
//! let _cmd = cur.focus();
//! cur.set_char("a");
//! assert!(!cur.view().is_empty());
//! ```

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static NEXT_CARET: AtomicUsize = AtomicUsize::new(1);

const BLINK_INTERVAL: Duration = Duration::from_millis(530);

/// Tick addressed to one caret.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Caret the tick belongs to.
    pub id: usize,
    /// Generation of the tick chain; older generations are ignored.
    pub tag: usize,
}

/// Caret state for a single input.
#[derive(Debug, Clone)]
pub struct Model {
    /// Delay between blinks.
    pub blink_speed: Duration,
    /// Style of the caret block.
    pub style: Style,

    char: String,
    id: usize,
    generation: usize,
    focus: bool,
    shown: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            blink_speed: BLINK_INTERVAL,
            style: Style::new().reverse(true),
            char: " ".to_string(),
            id: NEXT_CARET.fetch_add(1, Ordering::Relaxed),
            generation: 0,
            focus: false,
            shown: false,
        }
    }
}

impl Model {
    /// Creates an unfocused caret.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the caret on its own ticks and schedules the next one.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let blink = msg.downcast_ref::<BlinkMsg>()?;
        if !self.focus || blink.id != self.id || blink.tag != self.generation {
            return None;
        }
        self.shown = !self.shown;
        Some(self.schedule())
    }

    // Starting a new generation orphans any tick still in flight.
    fn schedule(&mut self) -> Cmd {
        self.generation += 1;
        let (id, tag) = (self.id, self.generation);
        tick(self.blink_speed, move |_| Box::new(BlinkMsg { id, tag }) as Msg)
    }

    /// Shows the caret and starts blinking.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.shown = true;
        Some(self.schedule())
    }

    /// Hides the caret; pending ticks are ignored from now on.
    pub fn blur(&mut self) {
        self.focus = false;
        self.shown = false;
    }

    /// Whether the caret is focused.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Sets the character drawn under the caret.
    pub fn set_char(&mut self, s: &str) {
        self.char = s.to_string();
    }

    /// The character, drawn with [`Model::style`] while the caret is shown.
    pub fn view(&self) -> String {
        if self.shown {
            self.style.clone().inline(true).render(&self.char)
        } else {
            self.char.clone()
        }
    }
}

/// Creates a new caret.
pub fn new() -> Model {
    Model::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_for(m: &Model, tag: usize) -> Msg {
        Box::new(BlinkMsg { id: m.id, tag })
    }

    #[test]
    fn test_unfocused_caret_ignores_ticks() {
        let mut m = Model::new();
        let msg = tick_for(&m, m.generation);
        assert!(m.update(&msg).is_none());
        assert!(!m.shown);
    }

    #[test]
    fn test_current_tick_flips_and_reschedules() {
        let mut m = Model::new();
        let _ = m.focus();
        assert!(m.shown);

        let msg = tick_for(&m, m.generation);
        assert!(m.update(&msg).is_some());
        assert!(!m.shown);

        // the tick that was just handled is now stale
        assert!(m.update(&msg).is_none());
        assert!(!m.shown);
    }

    #[test]
    fn test_other_caret_ticks_are_ignored() {
        let mut a = Model::new();
        let mut b = Model::new();
        let _ = a.focus();
        let _ = b.focus();
        let msg = tick_for(&b, b.generation);
        assert!(a.update(&msg).is_none());
        assert!(a.shown);
    }

    #[test]
    fn test_blurred_caret_renders_plain_char() {
        let mut m = Model::new();
        let _ = m.focus();
        m.blur();
        m.set_char("z");
        assert_eq!(m.view(), "z");
    }
}
