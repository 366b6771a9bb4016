use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::*;

use crate::ui::{AppState, ToastLevel};

pub fn draw_footer(f: &mut Frame, area: Rect, state: &AppState, help_text: &str) {
    let mut spans: Vec<Span> = Vec::new();
    if let Some(t) = &state.toast {
        let color = state.theme.toast_color(t.level);
        let tag = match t.level {
            ToastLevel::Success => "[OK]",
            ToastLevel::Error => "[ERROR]",
            ToastLevel::Info => "[INFO]",
        };
        spans.push(Span::styled(
            format!(" {tag} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("{}  |  ", t.text),
            Style::default().fg(color),
        ));
    }
    if state.editing {
        spans.push(Span::styled(
            "editing  |  ",
            Style::default().fg(Color::Magenta),
        ));
    }
    spans.push(Span::styled(help_text.to_string(), state.theme.text_muted()));
    let p = Paragraph::new(Line::from(spans));
    f.render_widget(p, area);
}
