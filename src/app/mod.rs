pub mod focus;

use crate::form::Field;
use crate::ui::{AppState, ToastLevel};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
pub use focus::Focus;

pub enum AppMsg {
    Edit { field: Field, value: String },
    ToggleHypothesisTest,
    Commit,
    Reset,
    CopySummary,
}

#[derive(Debug, PartialEq)]
pub enum Effect {
    ShowToast {
        text: String,
        level: ToastLevel,
        seconds: u64,
    },
    CopyToClipboard {
        text: String,
    },
    Quit,
}

fn toast(text: impl Into<String>, level: ToastLevel) -> Effect {
    Effect::ShowToast {
        text: text.into(),
        level,
        seconds: 3,
    }
}

pub fn update(state: &mut AppState, msg: AppMsg) -> Vec<Effect> {
    use AppMsg::*;
    let mut effects: Vec<Effect> = Vec::new();
    match msg {
        Edit { field, value } => {
            state.dbg(format!("edit {} = {value:?}", field.key()));
            state.form.set_field(field, value);
        }
        ToggleHypothesisTest => {
            state.form.toggle_hypothesis_test();
            state.dbg(format!(
                "hypothesis test {} (table {:?})",
                if state.form.hypothesis_test_enabled() {
                    "on"
                } else {
                    "off"
                },
                state.form.visibility()
            ));
        }
        Commit => {
            state.form.commit();
            for f in Field::ALL {
                let err = state.form.error(f);
                if !err.is_empty() {
                    let line = format!("  {}: {err}", f.key());
                    state.dbg(line);
                }
            }
            state.dbg(format!("commit -> table {:?}", state.form.visibility()));
            if state.form.table_visible() {
                effects.push(toast("All inputs valid", ToastLevel::Success));
            } else {
                effects.push(toast("Please fix the highlighted errors", ToastLevel::Error));
            }
        }
        Reset => {
            state.form.reset();
            state.focus = Focus::default();
            state.editing = false;
            state.dbg("reset");
            effects.push(toast("Reset to defaults", ToastLevel::Info));
        }
        CopySummary => {
            if state.form.table_visible() {
                state.dbg("copy summary");
                effects.push(Effect::CopyToClipboard {
                    text: state.form.summary_text(),
                });
            } else {
                effects.push(toast("Nothing to copy yet", ToastLevel::Info));
            }
        }
    }
    effects
}

/// Routes one key press to focus movement, inline editing or an [`AppMsg`].
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Effect> {
    if state.editing {
        return handle_edit_key(state, key);
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            update(state, AppMsg::CopySummary)
        }
        KeyCode::F(12) => {
            state.show_debug = !state.show_debug;
            Vec::new()
        }
        KeyCode::Char('q') | KeyCode::Esc => vec![Effect::Quit],
        KeyCode::Up | KeyCode::BackTab => {
            state.focus = state.focus.prev();
            Vec::new()
        }
        KeyCode::Down | KeyCode::Tab => {
            state.focus = state.focus.next();
            Vec::new()
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate(state, key.code),
        _ => Vec::new(),
    }
}

fn activate(state: &mut AppState, code: KeyCode) -> Vec<Effect> {
    match state.focus {
        Focus::Checkbox => update(state, AppMsg::ToggleHypothesisTest),
        Focus::Ok => update(state, AppMsg::Commit),
        Focus::Reset => update(state, AppMsg::Reset),
        other => {
            let Some(field) = other.field() else {
                return Vec::new();
            };
            if code != KeyCode::Enter {
                return Vec::new();
            }
            if state.form.is_applicable(field) {
                state.editing = true;
            } else {
                state.dbg(format!("{} is disabled", field.key()));
            }
            Vec::new()
        }
    }
}

fn handle_edit_key(state: &mut AppState, key: KeyEvent) -> Vec<Effect> {
    let Some(field) = state.focus.field() else {
        state.editing = false;
        return Vec::new();
    };
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            state.editing = false;
            Vec::new()
        }
        KeyCode::Backspace => {
            let mut value = state.form.temporary(field).to_string();
            if value.pop().is_none() {
                return Vec::new();
            }
            update(state, AppMsg::Edit { field, value })
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut value = state.form.temporary(field).to_string();
            value.push(c);
            update(state, AppMsg::Edit { field, value })
        }
        _ => Vec::new(),
    }
}
