//! Transcript display for the Unload, Reflect, and Decide screens

use crate::events::{Annotation, DisplayMessage, MessageOrigin, Screen};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// Bottom-anchored view over the transcript, with a typing indicator while a
/// reply is pending
pub struct ChatView<'a> {
    pub screen: Screen,
    pub messages: &'a [DisplayMessage],
    pub typing: bool,
}

impl Widget for ChatView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " {} — {} ",
            self.screen.display_name(),
            self.screen.description()
        );
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut all_lines: Vec<Line> = Vec::new();
        for message in self.messages {
            all_lines.extend(render_message(message, inner.width));
            all_lines.push(Line::from(""));
        }

        if self.typing {
            all_lines.push(Line::from(Span::styled(
                "● ● ●",
                Style::default().fg(Color::DarkGray),
            )));
        }

        // Show the most recent lines that fit
        let height = inner.height as usize;
        let start = all_lines.len().saturating_sub(height);
        for (i, line) in all_lines[start..].iter().enumerate() {
            buf.set_line(inner.x, inner.y + i as u16, line, inner.width);
        }
    }
}

fn render_message(message: &DisplayMessage, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let label = match (message.origin, message.annotation) {
        (MessageOrigin::User, _) => "you",
        (MessageOrigin::Assistant, None) => "clear",
        (MessageOrigin::Assistant, Some(Annotation::Reflection)) => "clear · reflection",
        (MessageOrigin::Assistant, Some(Annotation::Decision)) => "clear · decision framework",
    };

    let timestamp = message.timestamp.format("%H:%M").to_string();
    lines.push(Line::from(Span::styled(
        format!("{label} {timestamp}"),
        Style::default().fg(Color::DarkGray),
    )));

    let style = content_style(message);
    for text_line in wrap_text(&message.text, width.saturating_sub(2) as usize) {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(text_line, style),
        ]));
    }

    lines
}

fn content_style(message: &DisplayMessage) -> Style {
    match (message.origin, message.annotation) {
        (MessageOrigin::User, _) => Style::default().fg(Color::Blue),
        (MessageOrigin::Assistant, None) => Style::default().fg(Color::Green),
        (MessageOrigin::Assistant, Some(_)) => Style::default().fg(Color::Cyan),
    }
}

/// Greedy word wrap to the given width
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.len() + word.len() + 1 > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
