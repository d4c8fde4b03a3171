use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mode_str = match app.mode {
            Mode::Normal => "DEFAULT",
            Mode::Edit => "INPUT",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {msg}")
        } else {
            format!(" {} | ITEMS: {:02}", mode_str, app.tasks.len())
        };

        let help_hint = match app.mode {
            Mode::Normal => " j/k:move enter:toggle a:add d:delete q:quit ",
            Mode::Edit => " type title, enter:save esc:cancel ",
        };

        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg).bg(app.theme.bar),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(app.theme.bar)),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.dim).bg(app.theme.bar),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
