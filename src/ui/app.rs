//! Terminal lifecycle and the session event loop

use crate::controller::Controller;
use crate::events::Screen;
use crate::gateway::CompletionGateway;
use crate::ui::composer::{self, ComposerEvent};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Run the session until the user leaves. Sets up the terminal, restores it
/// on the way out even when the loop errors.
pub async fn run<G: CompletionGateway>(controller: &mut Controller<G>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, controller).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<G: CompletionGateway>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut Controller<G>,
) -> Result<()> {
    loop {
        terminal.draw(|f| crate::ui::render(f, controller, false))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if is_quit(key) {
            return Ok(());
        }

        match controller.screen() {
            Screen::Welcome => {
                if key.code == KeyCode::Enter {
                    controller.begin_unload();
                }
            }
            Screen::Unload => {
                if is_ctrl(key, 'r') && controller.can_request_reflection() {
                    draw_pending(terminal, controller)?;
                    controller.request_reflection().await;
                } else {
                    dispatch_composer(terminal, controller, key).await?;
                }
            }
            Screen::Reflect => {
                if is_ctrl(key, 'u') {
                    controller.return_to_unload();
                } else if is_ctrl(key, 'd') {
                    draw_pending(terminal, controller)?;
                    controller.request_decision_framework().await;
                } else {
                    dispatch_composer(terminal, controller, key).await?;
                }
            }
            Screen::Decide => {
                if is_ctrl(key, 'n') {
                    controller.reset_session();
                } else {
                    dispatch_composer(terminal, controller, key).await?;
                }
            }
        }
    }
}

/// Feed a key through the composer; a submission draws the typing indicator
/// first and then awaits the round trip. The await is the sole suspension
/// point: no further input is processed until the call settles.
async fn dispatch_composer<G: CompletionGateway>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut Controller<G>,
    key: KeyEvent,
) -> Result<()> {
    if let ComposerEvent::Submitted(text) = composer::handle_key(controller, key) {
        draw_pending(terminal, controller)?;
        controller.submit_user_text(text).await;
    }
    Ok(())
}

fn draw_pending<G: CompletionGateway>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &Controller<G>,
) -> Result<()> {
    terminal.draw(|f| crate::ui::render(f, controller, true))?;
    Ok(())
}

fn is_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc || is_ctrl(key, 'c')
}

fn is_ctrl(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
