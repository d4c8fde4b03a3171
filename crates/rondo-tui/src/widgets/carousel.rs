use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::{App, Mode};

/// Columns between the carousel edge and the done marker
pub const MARGIN_X: u16 = 2;
/// Columns occupied by the done marker and its trailing gap
pub const MARKER_WIDTH: u16 = 2;

const MARKER_DONE: &str = "●";
const MARKER_OPEN: &str = "○";

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        frame.render_widget(
            Block::default().style(Style::default().bg(app.theme.bg)),
            area,
        );
        if area.width <= 2 * MARGIN_X + MARKER_WIDTH || area.height < 3 {
            return;
        }

        let n = app.tasks.len();
        let center_row = area.y + area.height / 2;

        if n == 0 {
            let hint = Paragraph::new(Line::from(Span::styled(
                "no tasks. press 'a' to add one",
                Style::default().fg(app.theme.dim),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(hint, Rect::new(area.x, center_row, area.width, 1));
            return;
        }

        Self::render_focus_frame(frame, area, center_row, app);

        let spacing = app.config.ui.row_spacing.max(1);
        let pos = app.scroll.position();
        let focused_slot = app.scroll.focused_slot();

        // Scan every slot that could project into the viewport, with one
        // slot of margin above and below
        let range = area.height as f64 / spacing as f64 / 2.0 + 1.5;
        let start_j = (pos - range).floor() as i64;
        let end_j = (pos + range).ceil() as i64;

        for j in start_j..=end_j {
            let i = j.rem_euclid(n as i64) as usize;
            let y = center_row as i64 + ((j as f64 - pos) * spacing as f64).round() as i64;

            // Seam between the last and first item of each revolution
            if app.config.ui.show_seam && n > 1 && i == n - 1 && spacing > 1 {
                Self::render_seam(frame, area, center_row, y + 1, app);
            }

            if y < area.y as i64 || y >= (area.y + area.height) as i64 {
                continue;
            }
            let y = y as u16;

            let task = &app.tasks.tasks()[i];
            let focused = j == focused_slot;

            // Brightness falls off linearly with distance from the center
            let half = (area.height / 2).max(1) as f64;
            let ratio = (y as f64 - center_row as f64).abs() / half;
            let base = if task.done { app.theme.dim } else { app.theme.fg };
            let color = if focused {
                base
            } else {
                app.theme.fade(base, ratio)
            };

            let text_width = (area.width - 2 * MARGIN_X - MARKER_WIDTH) as usize;
            let mut title = truncate_to_width(&task.title, text_width.saturating_sub(1));
            if focused && app.mode == Mode::Edit && app.blink_on {
                title.push('_');
            }

            let marker = if task.done { MARKER_DONE } else { MARKER_OPEN };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(title, Style::default().fg(color)),
            ]);
            frame.render_widget(
                Paragraph::new(line),
                Rect::new(area.x + MARGIN_X, y, area.width - 2 * MARGIN_X, 1),
            );
        }
    }

    /// Stationary frame around the center slot; the list scrolls through it
    fn render_focus_frame(frame: &mut Frame, area: Rect, center_row: u16, app: &App) {
        if center_row == area.y || center_row + 1 >= area.y + area.height {
            return;
        }
        let color = match app.mode {
            Mode::Edit => app.theme.edit,
            Mode::Normal => app.theme.faint,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        frame.render_widget(block, Rect::new(area.x, center_row - 1, area.width, 3));
    }

    /// Dotted line marking where the ring wraps
    fn render_seam(frame: &mut Frame, area: Rect, center_row: u16, y: i64, app: &App) {
        if y < area.y as i64 || y >= (area.y + area.height) as i64 {
            return;
        }
        let y = y as u16;
        // Keep clear of the focus frame rows
        if y + 1 >= center_row && y <= center_row + 1 {
            return;
        }
        let width = (area.width - 2 * MARGIN_X) as usize;
        let dots: String = "· "
            .chars()
            .cycle()
            .take(width)
            .collect();
        frame.render_widget(
            Paragraph::new(Span::styled(dots, Style::default().fg(app.theme.faint))),
            Rect::new(area.x + MARGIN_X, y, area.width - 2 * MARGIN_X, 1),
        );
    }
}

/// Truncate to a display width, never splitting a wide character
fn truncate_to_width(text: &str, max: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_wide_characters() {
        assert_eq!(truncate_to_width("abcdef", 4), "abcd");
        // CJK characters are two columns wide
        assert_eq!(truncate_to_width("豆腐豆腐", 5), "豆腐");
        assert_eq!(truncate_to_width("a豆b", 3), "a豆");
    }
}
