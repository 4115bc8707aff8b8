use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// The landing card shown before a session starts
pub struct WelcomeView;

impl Widget for WelcomeView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                "ClearLoop",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "An AI thought companion for overthinkers",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled("I'm here.", Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                "What's looping in your mind?",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to talk to Clear  ·  Esc to leave",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let top = inner
            .y
            .saturating_add(inner.height.saturating_sub(lines.len() as u16) / 2);

        for (i, line) in lines.iter().enumerate() {
            let y = top + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let width = line.width() as u16;
            let x = inner.x + inner.width.saturating_sub(width) / 2;
            buf.set_line(x, y, line, inner.width);
        }
    }
}
