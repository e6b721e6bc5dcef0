mod app;
mod components;
mod text;
mod ui;

pub use app::{AppState, Tab};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fmtscope_types::DebugSnapshot;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the interactive inspector over a loaded snapshot.
///
/// The snapshot is read-only for the whole session; every key event is a
/// synchronous update of the view state followed by a redraw.
pub fn run(snapshot: &DebugSnapshot) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let _guard = TerminalGuard;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut app = AppState::new(snapshot);
    let result = event_loop(&mut terminal, &mut app);

    terminal.show_cursor()?;
    result
}

/// Restores the terminal on scope exit, including unwinds.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Tab => app.next_tab(),
            KeyCode::BackTab => app.previous_tab(),
            KeyCode::Char('1') => app.tab = Tab::Input,
            KeyCode::Char('2') => app.tab = Tab::Ops,
            KeyCode::Char('3') => app.tab = Tab::Doc,
            KeyCode::Char('4') => app.tab = Tab::Decisions,
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => app.toggle(),
            KeyCode::Char('a') => app.expand_all(),
            _ => {}
        }
    }
}
