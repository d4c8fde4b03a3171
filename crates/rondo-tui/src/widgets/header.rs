use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};
use crate::widgets::carousel::MARGIN_X;

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let title = match app.mode {
            Mode::Normal => "::: RONDO :::",
            Mode::Edit => "::: NEW TASK :::",
        };
        let line = Line::from(vec![
            Span::raw(" ".repeat(MARGIN_X as usize)),
            Span::styled(title, Style::default().fg(app.theme.fg)),
        ]);
        let paragraph = Paragraph::new(line).style(Style::default().bg(app.theme.bg));
        frame.render_widget(paragraph, area);
    }
}
