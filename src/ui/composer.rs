//! Input box rendering plus the key-to-edit mapping onto the controller's
//! input buffer

use crate::controller::Controller;
use crate::events::Screen;
use crate::gateway::CompletionGateway;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// What an edit key produced
#[derive(Debug, PartialEq)]
pub enum ComposerEvent {
    /// Enter with non-empty trimmed content
    Submitted(String),
    None,
}

/// Route an editing key into the controller's input buffer. Action keys
/// (screen transitions, quit) are handled by the event loop before this.
pub fn handle_key<G: CompletionGateway>(
    controller: &mut Controller<G>,
    key: KeyEvent,
) -> ComposerEvent {
    if key.kind != KeyEventKind::Press {
        return ComposerEvent::None;
    }

    match key.code {
        KeyCode::Enter => {
            if controller.input().trim().is_empty() {
                ComposerEvent::None
            } else {
                ComposerEvent::Submitted(controller.take_input())
            }
        }
        KeyCode::Char(c) => {
            controller.input_insert(c);
            ComposerEvent::None
        }
        KeyCode::Backspace => {
            controller.input_backspace();
            ComposerEvent::None
        }
        KeyCode::Delete => {
            controller.input_delete();
            ComposerEvent::None
        }
        KeyCode::Left => {
            controller.input_left();
            ComposerEvent::None
        }
        KeyCode::Right => {
            controller.input_right();
            ComposerEvent::None
        }
        KeyCode::Home => {
            controller.input_home();
            ComposerEvent::None
        }
        KeyCode::End => {
            controller.input_end();
            ComposerEvent::None
        }
        _ => ComposerEvent::None,
    }
}

/// The input box at the bottom of the chat screens
pub struct ComposerView<'a> {
    pub input: &'a str,
    pub cursor: usize,
    /// True while a reply is pending; the box dims and the cursor hides
    pub locked: bool,
}

impl Widget for ComposerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default().borders(Borders::ALL).style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.input.is_empty() {
            let placeholder = if self.locked {
                "Clear is thinking..."
            } else {
                "Type your thoughts..."
            };
            let line = Line::from(Span::styled(
                placeholder,
                Style::default().fg(Color::DarkGray),
            ));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        let mut content: String = self.input.to_string();
        if !self.locked {
            let at = content
                .char_indices()
                .nth(self.cursor)
                .map(|(i, _)| i)
                .unwrap_or(content.len());
            content.insert(at, '▌');
        }

        let line = Line::from(Span::styled(content, Style::default().fg(Color::White)));
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}

/// One-line key legend under the composer, varying by screen
pub struct HintBar {
    pub screen: Screen,
    pub can_reflect: bool,
}

impl Widget for HintBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = match self.screen {
            Screen::Welcome => String::new(),
            Screen::Unload => {
                if self.can_reflect {
                    "Enter send · Ctrl+R I'm ready to reflect · Esc quit".to_string()
                } else {
                    "Enter send · Esc quit".to_string()
                }
            }
            Screen::Reflect => {
                "Enter send · Ctrl+U continue unloading · Ctrl+D I want help deciding · Esc quit"
                    .to_string()
            }
            Screen::Decide => "Enter send · Ctrl+N done for now · Esc quit".to_string(),
        };

        let line = Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
