//! Terminal rendition of the SkillSwap landing page.
//!
//! [`App`] owns all UI state. [`run_tui`] drives it from a single channel of
//! [`AppEvent`]s fed by the [`EventReader`] thread and the testimonial
//! autoplay timer.

pub mod app;
pub mod error;
pub mod event;
pub mod layout;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod toast;
pub mod widgets;

use std::io;

pub use app::{App, Modal, Section};
pub use error::TuiError;
pub use event::{AppEvent, EventReader, EventSource};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
pub use toast::ToastQueue;
use tokio::sync::mpsc;

/// # Errors
///
/// Returns an error if terminal init/restore or rendering fails, or if the
/// event channel closes before the user quits.
pub async fn run_tui(mut app: App, mut event_rx: mpsc::Receiver<AppEvent>) -> Result<(), TuiError> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(info);
    }));

    let mut terminal = init_terminal()?;
    app.start();
    tracing::info!("landing page session started");

    let result = tui_loop(&mut app, &mut event_rx, &mut terminal).await;

    restore_terminal(&mut terminal)?;

    // Restore the default panic hook
    let _ = std::panic::take_hook();

    tracing::info!("landing page session ended");
    result
}

async fn tui_loop(
    app: &mut App,
    event_rx: &mut mpsc::Receiver<AppEvent>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), TuiError> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        let Some(event) = event_rx.recv().await else {
            return Err(TuiError::ChannelClosed);
        };
        app.handle_event(event);
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, TuiError> {
    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), TuiError> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen,
    )?;
    terminal.show_cursor()?;
    Ok(())
}
