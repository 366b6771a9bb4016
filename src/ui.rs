use crate::app::{handle_key, update, AppMsg, Effect, Focus};
use crate::form::FormState;
use crate::model::{validate_app_config, AppConfig};
use crate::services::script::{parse_script, ScriptStep};
use crate::theme::Theme;
use crate::widgets::form::draw_form;
use crate::widgets::status_bar::draw_footer;
use crate::widgets::summary::draw_summary;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const CONFIG_FILE: &str = "sample-summary.yaml";
const HELP_TEXT: &str =
    "↑/↓ Tab move • Enter edit/activate • Space toggle • Ctrl+C copy • F12 debug • q quit";

#[derive(Default)]
pub(crate) struct AppState {
    pub(crate) config: AppConfig,
    pub(crate) form: FormState,
    pub(crate) focus: Focus,
    pub(crate) editing: bool,
    pub(crate) tick: u64,
    pub(crate) toast: Option<Toast>,
    pub(crate) theme: Theme,
    pub(crate) show_debug: bool,
    pub(crate) should_quit: bool,
    // Debug log (rendered in bottom debug pane)
    pub(crate) debug_log: VecDeque<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            theme: Theme::from_mode(config.theme),
            show_debug: config.show_debug,
            config,
            ..Default::default()
        }
    }

    pub fn dbg(&mut self, msg: impl Into<String>) {
        const MAX_LOG_LINES: usize = 200;
        if self.debug_log.len() >= MAX_LOG_LINES {
            self.debug_log.pop_front();
        }
        self.debug_log.push_back(msg.into());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

pub struct Toast {
    pub text: String,
    pub level: ToastLevel,
    pub expires_at_tick: u64,
}

fn run_effects(state: &mut AppState, effects: Vec<Effect>) {
    for eff in effects {
        match eff {
            Effect::ShowToast {
                text,
                level,
                seconds,
            } => {
                let ticks = seconds.saturating_mul(5); // ~200ms tick
                let exp = state.tick.saturating_add(ticks);
                state.toast = Some(Toast {
                    text,
                    level,
                    expires_at_tick: exp,
                });
            }
            Effect::CopyToClipboard { text } => {
                let copied = arboard::Clipboard::new().and_then(|mut c| c.set_text(text));
                let (text, level) = match copied {
                    Ok(()) => ("Copied to clipboard!".to_string(), ToastLevel::Success),
                    Err(e) => {
                        state.dbg(format!("clipboard: {e}"));
                        (format!("Clipboard unavailable: {e}"), ToastLevel::Error)
                    }
                };
                run_effects(
                    state,
                    vec![Effect::ShowToast {
                        text,
                        level,
                        seconds: 3,
                    }],
                );
            }
            Effect::Quit => {
                state.dbg("quit");
                state.should_quit = true;
            }
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes"))
        .unwrap_or(false)
}

pub fn run() -> Result<()> {
    let cfg = load_config()?;
    let mut state = AppState::new(cfg);
    if env_flag("SAMPLE_SUMMARY_HEADLESS") {
        let script = std::env::var("SAMPLE_SUMMARY_SCRIPT").unwrap_or_default();
        let steps = parse_script(&script)?;
        let summary = run_headless(&mut state, &steps)?;
        println!("{summary}");
        return Ok(());
    }
    // Setup terminal (interactive)
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let res = event_loop(&mut terminal, &mut state);
    // Restore
    disable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, state: &mut AppState) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();
    while !state.should_quit {
        terminal.draw(|f| ui(f, state))?;
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_millis(0));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let effects = handle_key(state, key);
                    run_effects(state, effects);
                }
            }
        }
        if last_tick.elapsed() >= tick_rate {
            state.tick = state.tick.wrapping_add(1);
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Applies scripted steps against an in-memory terminal and returns the JSON
/// summary printed by headless mode.
pub(crate) fn run_headless(
    state: &mut AppState,
    steps: &[ScriptStep],
) -> Result<serde_json::Value> {
    let backend = ratatui::backend::TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|f| ui(f, state))?;
    for step in steps {
        let msg = match step {
            ScriptStep::Set(field, value) => AppMsg::Edit {
                field: *field,
                value: value.clone(),
            },
            ScriptStep::Toggle => AppMsg::ToggleHypothesisTest,
            ScriptStep::Commit => AppMsg::Commit,
            ScriptStep::Reset => AppMsg::Reset,
        };
        let effects = update(state, msg);
        run_effects(state, effects);
        terminal.draw(|f| ui(f, state))?;
        state.tick = state.tick.wrapping_add(1);
    }
    let errors: serde_json::Map<String, serde_json::Value> = crate::form::Field::ALL
        .into_iter()
        .map(|f| (f.key().to_string(), state.form.error(f).into()))
        .collect();
    let ok = errors
        .values()
        .all(|e| e.as_str().map(str::is_empty).unwrap_or(true));
    Ok(serde_json::json!({
        "ok": ok,
        "table_visible": state.form.table_visible(),
        "visibility": state.form.visibility(),
        "hypothesis_test_enabled": state.form.hypothesis_test_enabled(),
        "errors": errors,
        "summary": state.form.summary(),
    }))
}

pub(crate) fn parse_config(s: &str, origin: &Path) -> Result<AppConfig> {
    let cfg: AppConfig =
        serde_yaml::from_str(s).with_context(|| format!("parsing config: {origin:?}"))?;
    validate_app_config(&cfg)
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("invalid config: {origin:?}"))?;
    Ok(cfg)
}

fn load_config() -> Result<AppConfig> {
    // 1) If SAMPLE_SUMMARY_CONFIG_DIR is set, the config file must be inside it
    if let Ok(base) = std::env::var("SAMPLE_SUMMARY_CONFIG_DIR") {
        let entry = PathBuf::from(&base).join(CONFIG_FILE);
        let s = fs::read_to_string(&entry).with_context(|| format!("reading {entry:?}"))?;
        return parse_config(&s, &entry);
    }
    // 2) Current directory, then ~/.config/sample-summary
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut candidates = vec![cwd.join(CONFIG_FILE)];
    if let Some(home) = std::env::var("HOME")
        .ok()
        .or_else(|| std::env::var("USERPROFILE").ok())
        .map(PathBuf::from)
    {
        candidates.push(home.join(".config").join("sample-summary").join(CONFIG_FILE));
    }
    for p in &candidates {
        if p.exists() {
            let s = fs::read_to_string(p).with_context(|| format!("reading {p:?}"))?;
            return parse_config(&s, p);
        }
    }
    Ok(AppConfig::default())
}

fn ui(f: &mut Frame, state: &mut AppState) {
    // Clear expired toast
    if let Some(t) = &state.toast {
        if state.tick >= t.expires_at_tick {
            state.toast = None;
        }
    }

    let screen = f.area();
    let bg = Block::default().style(state.theme.base_style());
    f.render_widget(bg, screen);

    let mut constraints = vec![Constraint::Length(1), Constraint::Min(16)];
    if state.show_debug {
        constraints.push(Constraint::Length(8));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(screen);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", state.config.title),
        state.theme.text_active_bold(),
    )));
    f.render_widget(title, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    let cursor_on = state.tick % 2 == 0;
    draw_form(f, body[0], state, cursor_on);
    if state.form.table_visible() {
        draw_summary(f, body[1], &state.form, &state.theme);
    }

    if state.show_debug {
        draw_debug(f, rows[2], state);
    }
    let footer = rows[rows.len() - 1];
    draw_footer(f, footer, state, HELP_TEXT);
}

fn draw_debug(f: &mut Frame, area: Rect, state: &AppState) {
    let b = Block::default()
        .borders(Borders::TOP)
        .border_style(state.theme.text_muted())
        .title(Span::styled(
            "Debug",
            state.theme.text_muted().add_modifier(Modifier::BOLD),
        ));
    // Take last `area.height` lines
    let h = area.height as usize;
    let total = state.debug_log.len();
    let start = total.saturating_sub(h);
    let lines: Vec<Line> = state
        .debug_log
        .iter()
        .skip(start)
        .map(|s| Line::raw(s.clone()))
        .collect();
    let p = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .block(b)
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}
