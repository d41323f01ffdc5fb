mod app;
mod clock;
mod domain;
mod error;
mod input;
mod logging;
mod persistence;
mod report;
mod scheduler;
mod settings;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use clock::{Clock, SystemClock};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::SaveFile;
use ratatui::{backend::CrosstermBackend, Terminal};
use settings::Settings;
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "chronowork")]
#[command(about = "A small terminal multi-timer that remembers how long you worked on each project", long_about = None)]
struct Cli {
    /// Directory holding the save file and log. Defaults to the user data directory.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the saved timers and exit
    Show {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the save file location
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(cli.data_dir, cli.verbose)?;

    match cli.command {
        Some(Commands::Show { json }) => {
            logging::init_stderr_logging(settings.log_level);
            let store = SaveFile::new(settings.save_path()).load();
            let rows = report::summarize(&store, SystemClock.now());
            if json {
                println!("{}", report::render_json(&rows).context("Failed to serialize timers")?);
            } else {
                print!("{}", report::render_text(&rows));
            }
            Ok(())
        }
        Some(Commands::Path) => {
            println!("{}", settings.save_path().display());
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui(&settings)
        }
    }
}

fn run_tui(settings: &Settings) -> Result<()> {
    if let Err(e) = logging::init_file_logging(&settings.log_path(), settings.log_level) {
        eprintln!("Logging disabled ({}): {}", settings.log_path().display(), e);
    }
    info!(data_dir = %settings.data_dir.display(), "starting chronowork");

    let save_file = SaveFile::new(settings.save_path());
    let mut app = AppState::load(save_file, Box::new(SystemClock), settings.refresh_interval);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Fold running timers and save before anything else can fail
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "event loop failed");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Scheduled display refresh
        app.refresh_if_due(Instant::now());

        // Best-effort save after a stop
        app.flush_save();

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Wait for input until the next refresh; block when nothing is scheduled
        let ready = match app.poll_timeout(Instant::now()) {
            Some(timeout) => event::poll(timeout)?,
            None => true,
        };

        if ready {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }
    }
}
