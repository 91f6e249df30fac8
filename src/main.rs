mod app;
mod config;
mod domain;
mod format;
mod input;
mod logging;
mod metrics;
mod persistence;
mod seed;
mod store;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::App;
use chrono::Local;
use clap::{Parser, Subcommand};
use config::{config_path, load_config, save_config, Config};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_data_dir, init_local_data_dir, FileStorage};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use store::Store;

#[derive(Parser)]
#[command(name = "tokido")]
#[command(about = "A terminal task and time tracking client for small teams", long_about = None)]
struct Cli {
    /// Use this data directory instead of the discovered one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tokido directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = match &cli.data_dir {
                Some(dir) => ensure_data_dir(Some(dir.as_path()))?,
                None => init_local_data_dir()?,
            };
            if !config_path(&data_dir).exists() {
                save_config(&data_dir, &Config::default())?;
            }
            println!("Initialized tokido directory: {}", data_dir.display());
            println!();
            println!("Tokido will now use this local directory for its data.");
            println!("Run 'tokido' to sign in.");
            Ok(())
        }
        None => run_tui(cli.data_dir),
    }
}

fn run_tui(data_dir: Option<PathBuf>) -> Result<()> {
    let data_dir = ensure_data_dir(data_dir.as_deref())?;
    let config = load_config(&data_dir)?;
    let log_path = logging::init_logging(&data_dir, &config)?;
    tracing::info!(dir = %data_dir.display(), log = %log_path.display(), "starting tokido");

    let store = Store::rehydrate(Box::new(FileStorage::new(&data_dir)))
        .with_context(|| format!("Failed to load stored data from {}", data_dir.display()))?;
    let mut app = App::new(store, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    app.sync_ticker(Instant::now());

    loop {
        if app.ticker.fire(Instant::now()) {
            app.request_redraw();
        }
        if app.take_redraw() {
            let now = Local::now();
            terminal.draw(|f| ui::render(f, app, now))?;
        }

        if event::poll(app.ticker.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key, Local::now())? {
                    return Ok(());
                }
            } else {
                // Resize and focus changes
                app.request_redraw();
            }
        }

        app.sync_ticker(Instant::now());
    }
}
