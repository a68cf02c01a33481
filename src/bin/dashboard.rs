//! Interactive dashboard front end
//!
//! Terminal dashboard for the A/B test simulator: adjust the four
//! parameters with the keyboard and watch the summary, verdict and
//! sensitivity chart update live.
//!
//! Usage:
//!   cargo run --bin dashboard
//!   AB_SIM_SEED=42 cargo run --bin dashboard   # reproducible samples
//!
//! Terminal state is always restored on exit, including on panic.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use ab_simulator::config;
use ab_simulator::tui::app::App;
use ab_simulator::tui::events::{apply_event, poll_event, InputEvent};
use ab_simulator::tui::ui;

/// Input poll window per frame: 10 frames per second.
const TICK_RATE: Duration = Duration::from_millis(100);

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Restore the terminal before printing any panic message
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(config::resolve_seed());

    let result = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let event = poll_event(TICK_RATE);
        if event != InputEvent::None {
            apply_event(app, event);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
