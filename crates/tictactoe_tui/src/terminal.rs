//! Terminal setup and the event loop.

use crate::app::App;
use crate::config::TuiConfig;
use crate::input::{self, HitMap};
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before any error is returned.
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting terminal UI");

    let mut terminal = setup()?;
    let mut app = App::new(config);
    let res = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(moves = app.game().history().moves_played(), "Terminal UI closed");
    res
}

/// Enters raw mode and the alternate screen.
///
/// A failure after raw mode is on leaves the terminal as it was found.
fn setup() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let entered = enter_screen();
    undo_on_error(entered, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
    })
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Runs `undo` if `result` is an error, then passes `result` through.
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if let Err(err) = &result {
        error!(error = ?err, "Terminal setup failed, restoring");
        undo();
    }
    result
}

/// Draw, wait for one event, apply it. Repeat.
#[instrument(skip_all)]
fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while app.is_running() {
        let mut hit_map = HitMap::new();
        terminal
            .draw(|f| hit_map = ui::draw(f, app))
            .context("Failed to draw frame")?;
        app.set_hit_map(hit_map);

        let event = event::read().context("Failed to read terminal event")?;
        if let Some(app_event) = input::translate(&event, app.hit_map()) {
            app.handle_event(app_event);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_runs_undo() {
        let restored = Cell::new(false);
        let result: Result<()> = undo_on_error(Err(anyhow!("no tty")), || restored.set(true));
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_skips_undo() {
        let restored = Cell::new(false);
        let result = undo_on_error(Ok(7), || restored.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
