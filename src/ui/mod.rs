//! Ratatui presentation layer. Rendering only: every piece of session state
//! lives in the controller, and these widgets borrow it per frame.

pub mod app;
pub mod chat;
pub mod composer;
pub mod welcome;

use crate::controller::Controller;
use crate::events::Screen;
use crate::gateway::CompletionGateway;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

/// Draw one frame. `pending` forces the typing indicator on for the frame
/// drawn immediately before a gateway round trip is awaited.
pub fn render<G: CompletionGateway>(f: &mut Frame, controller: &Controller<G>, pending: bool) {
    if controller.screen() == Screen::Welcome {
        f.render_widget(welcome::WelcomeView, f.size());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Transcript
            Constraint::Length(3), // Composer
            Constraint::Length(1), // Key hints
        ])
        .split(f.size());

    let typing = pending || controller.awaiting_reply();

    f.render_widget(
        chat::ChatView {
            screen: controller.screen(),
            messages: controller.messages(),
            typing,
        },
        chunks[0],
    );

    f.render_widget(
        composer::ComposerView {
            input: controller.input(),
            cursor: controller.cursor(),
            locked: typing,
        },
        chunks[1],
    );

    f.render_widget(
        composer::HintBar {
            screen: controller.screen(),
            can_reflect: controller.can_request_reflection(),
        },
        chunks[2],
    );
}
