pub mod events;
pub mod theme;
pub mod ui;

use crate::app::App;
use crate::error::{Error, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Shows the two trend charts until the user quits. The numeric
/// prediction has already been produced by the time this runs, so a
/// failure here only costs the visualization.
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode().map_err(render_err)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(render_err)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(render_err)?;

    let event_handler = events::EventHandler::new(Duration::from_millis(250));

    let result = run_app(&mut terminal, &mut app, &event_handler);

    disable_raw_mode().map_err(render_err)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(render_err)?;
    terminal.show_cursor().map_err(render_err)?;

    result
}

fn render_err(e: io::Error) -> Error {
    Error::Render(e.to_string())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &events::EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app)).map_err(render_err)?;

        match event_handler.next()? {
            events::AppEvent::Key(key) => {
                if events::should_quit(&key) {
                    app.quit();
                } else if events::should_cycle_focus(&key) {
                    app.cycle_focus();
                }
            }
            events::AppEvent::Resize(_, _) => {}
            events::AppEvent::Tick => {}
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
