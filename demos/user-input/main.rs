//! Four user inputs, one per variant.
//!
//! tab / shift+tab move between fields, ctrl+t toggles fuzzy search, esc quits.
//! Set `RUST_LOG=bubbletea_user_input=debug` to log refused edits to
//! `user-input-demo.log`.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use bubbletea_user_input::prelude::*;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

const ACCOUNTS_TOML: &str = include_str!("accounts.toml");
const EVENT_LINES: usize = 5;

type EventLog = Arc<Mutex<VecDeque<String>>>;

fn push_event(log: &EventLog, line: String) {
    if let Ok(mut log) = log.lock() {
        if log.len() == EVENT_LINES {
            log.pop_front();
        }
        log.push_back(line);
    }
}

struct App {
    inputs: Vec<UserBasicInput>,
    focused: usize,
    events: EventLog,
}

impl App {
    fn build_input(props: Props, events: &EventLog) -> UserBasicInput {
        let (changes, flips, refusals) = (events.clone(), events.clone(), events.clone());
        user_input_new(props)
            .on_change(move |e: &ChangeEvent| {
                let name = e.name.as_deref().unwrap_or("?");
                push_event(&changes, format!("{} = {:?}", name, e.value));
            })
            .on_fuzzy_change(move |e: &FuzzyChangeEvent| {
                let name = e.name.as_deref().unwrap_or("fuzzy");
                push_event(&flips, format!("{} = {}", name, e.checked));
            })
            .with_reporter(move |err: &BatchError| {
                TracingReporter.report(err);
                push_event(&refusals, format!("refused: {}", err));
            })
    }

    fn move_focus(&mut self, forward: bool) -> Option<Cmd> {
        self.inputs[self.focused].blur();
        let n = self.inputs.len();
        self.focused = if forward {
            (self.focused + 1) % n
        } else {
            (self.focused + n - 1) % n
        };
        self.inputs[self.focused].focus()
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let events: EventLog = Arc::default();

        let accounts = Props::from_toml_str(ACCOUNTS_TOML).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to built-in batch settings");
            Props::new().with_batch(5).with_name("accounts")
        });

        let inputs = vec![
            App::build_input(
                Props::new()
                    .with_name("username")
                    .with_label("Username")
                    .with_placeholder("Enter account")
                    .with_width(24),
                &events,
            ),
            App::build_input(
                Props::new()
                    .with_fuzzy(true)
                    .with_checkbox_name("fuzzy")
                    .with_name("search")
                    .with_label("Search")
                    .with_placeholder("Partial account")
                    .with_width(24),
                &events,
            ),
            App::build_input(accounts, &events),
            App::build_input(
                Props::new()
                    .with_fuzzy(true)
                    .with_no_form_style(true)
                    .with_disable_trim(true)
                    .with_name("display_name")
                    .with_label("Display name")
                    .with_value("Ada Lovelace"),
                &events,
            ),
        ];

        let mut app = App {
            inputs,
            focused: 0,
            events,
        };
        let cmd = app.inputs[0].focus();
        (app, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match key.key {
                KeyCode::Esc => return Some(quit()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Some(quit())
                }
                KeyCode::Tab => return self.move_focus(true),
                KeyCode::BackTab => return self.move_focus(false),
                _ => {}
            }
        }
        self.inputs[self.focused].update(msg)
    }

    fn view(&self) -> String {
        let title = Style::new().bold(true).render("User input variants");
        let help = Style::new()
            .foreground(Color::from("240"))
            .render("tab/shift+tab: move • ctrl+t: toggle fuzzy • esc: quit");

        let mut out = vec![title];
        for input in &self.inputs {
            out.push(format!("{}  ({})", input.view(), input.variant()));
        }
        out.push(help);
        if let Ok(events) = self.events.lock() {
            out.extend(events.iter().cloned());
        }
        out.join("\n\n")
    }
}

fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Ok(file) = std::fs::File::create("user-input-demo.log") else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
