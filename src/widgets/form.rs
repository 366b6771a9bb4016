use crate::app::Focus;
use crate::ui::AppState;
use crate::widgets::chrome::panel_block;
use ratatui::prelude::*;
use ratatui::widgets::*;

pub fn draw_form(f: &mut Frame, area: Rect, state: &AppState, cursor_on: bool) {
    let theme = &state.theme;
    let form = &state.form;
    let mut lines: Vec<Line> = Vec::new();
    for item in Focus::ORDER {
        let focused = item == state.focus;
        let sel = if focused { '›' } else { ' ' };
        match item {
            Focus::Checkbox => {
                let chk = if form.hypothesis_test_enabled() {
                    "[x]"
                } else {
                    "[ ]"
                };
                let style = if focused {
                    theme.text_active_bold()
                } else {
                    Style::default()
                };
                lines.push(Line::from(vec![
                    Span::raw(format!("{sel} ")),
                    Span::styled(format!("{chk} Perform hypothesis test"), style),
                ]));
                lines.push(Line::from(""));
            }
            Focus::Ok | Focus::Reset => {}
            _ => {
                let Some(field) = item.field() else {
                    continue;
                };
                let enabled = form.is_applicable(field);
                let editing = state.editing && focused;
                let mut val = form.temporary(field).to_string();
                if editing && cursor_on {
                    val.push('▏');
                }
                let label_style = if enabled {
                    Style::default()
                } else {
                    theme.text_muted()
                };
                let value_style = if !enabled {
                    theme.text_muted()
                } else if editing {
                    theme.text_editing_bold()
                } else if focused {
                    theme.text_active_bold()
                } else {
                    Style::default()
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{sel} {}: ", field.label()), label_style),
                    Span::styled(val, value_style),
                ]));
                // Helper text line is always reserved so rows do not jump
                let err = form.error(field);
                lines.push(Line::from(Span::styled(
                    if err.is_empty() {
                        String::new()
                    } else {
                        format!("    {err}")
                    },
                    theme.text_error(),
                )));
            }
        }
    }
    lines.push(Line::from(""));
    let ok_style = if state.focus == Focus::Ok {
        theme.list_cursor_style()
    } else {
        theme.text_active_bold()
    };
    let reset_style = if state.focus == Focus::Reset {
        theme.list_cursor_style()
    } else {
        theme.text_muted()
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("[ OK ]", ok_style),
        Span::raw("  "),
        Span::styled("Reset", reset_style),
    ]));
    let title = if state.editing {
        "Inputs — editing"
    } else {
        "Inputs"
    };
    let block = panel_block(title, true, theme);
    let p = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}
