use crate::form::FormState;
use crate::theme::Theme;
use crate::widgets::chrome::panel_block;
use ratatui::prelude::*;
use ratatui::widgets::*;

/// Two-column table of the committed values. Callers only draw it while the
/// form reports the table as visible.
pub fn draw_summary(f: &mut Frame, area: Rect, form: &FormState, theme: &Theme) {
    let rows: Vec<Row> = form
        .summary()
        .into_iter()
        .map(|r| Row::new(vec![Cell::from(r.label), Cell::from(r.value)]))
        .collect();
    let table = Table::new(rows, [Constraint::Length(20), Constraint::Min(6)])
        .header(
            Row::new(vec!["Statistic", "Value"])
                .style(theme.text_active_bold())
                .bottom_margin(1),
        )
        .block(panel_block("Entered values", false, theme));
    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn renders_committed_values_and_not_applicable_mean() {
        let mut form = FormState::new();
        form.set_field(Field::SampleSize, "30");
        form.set_field(Field::SampleMean, "5");
        form.set_field(Field::StandardDev, "1.5");
        form.commit();
        // Edits after commit are not shown
        form.set_field(Field::SampleSize, "99");

        let backend = TestBackend::new(40, 9);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        let _ = terminal.draw(|f| {
            let area = f.area();
            draw_summary(f, area, &form, &theme);
        });
        let buf = terminal.backend().buffer().clone();
        let lines: Vec<String> = (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect();
        let text = lines.join("\n");
        assert!(lines[0].contains("Entered values"));
        assert!(lines[1].contains("Statistic"));
        assert!(lines[3].contains("Sample size") && lines[3].contains("30"));
        assert!(lines[5].contains("Standard deviation") && lines[5].contains("1.5"));
        assert!(lines[6].contains("Hypothesized mean") && lines[6].contains("N/A"));
        assert!(!text.contains("99"));
    }
}
