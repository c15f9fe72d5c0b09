//! custable - a terminal demo of a configurable customer data table.

use std::io::{self, Stdout};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};

use custable::config::Config;
use custable::events::EventHandler;
use custable::storage::{FileStore, KeyValueStore};
use custable::table::ColumnRegistry;
use custable::visibility::load_visibility;
use custable::{logging, App, AppError};

/// Browse a table of customers and choose which columns to show.
#[derive(Debug, Parser)]
#[command(name = "custable", version, about)]
struct Cli {
    /// Path to the config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding saved preferences.
    #[arg(long, value_name = "PATH")]
    storage_dir: Option<PathBuf>,

    /// Number of customers to generate.
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Forget the saved column visibility before starting.
    #[arg(long)]
    reset_columns: bool,

    /// Print the saved column visibility as JSON and exit.
    #[arg(long)]
    print_columns: bool,

    /// Write the effective settings to the config file and exit.
    #[arg(long)]
    init_config: bool,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = run(cli);
    logging::shutdown();

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        match e.downcast_ref::<AppError>() {
            Some(app_error) => eprintln!("Error: {}", app_error.user_message()),
            None => eprintln!("Error: {:#}", e),
        }
        if let Some(dir) = logging::log_directory() {
            eprintln!("Logs are in {}", dir.display());
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) if cli.config.is_some() => return Err(AppError::from(e).into()),
        Err(e) => {
            warn!("Could not load config, using defaults: {}", e);
            Config::default()
        }
    };

    if let Some(dir) = cli.storage_dir {
        config.settings.storage_dir = Some(dir);
    }
    if let Some(rows) = cli.rows {
        config.settings.row_count = rows;
    }
    config.settings.validate().map_err(AppError::from)?;

    if cli.init_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::default_path().map_err(AppError::from)?,
        };
        config.save_to(&path).map_err(AppError::from)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let settings = &config.settings;

    let mut storage: Box<dyn KeyValueStore> = match &settings.storage_dir {
        Some(dir) => Box::new(FileStore::with_dir(dir)),
        None => Box::new(FileStore::new().map_err(AppError::from)?),
    };

    if cli.reset_columns {
        storage
            .remove(&settings.storage_key)
            .map_err(AppError::from)?;
        info!(key = %settings.storage_key, "Column visibility reset");
    }

    if cli.print_columns {
        let map = load_visibility(&storage, &settings.storage_key);
        let resolved = map.resolve(&ColumnRegistry::customers());
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    let app = App::new(settings, storage);

    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    let outcome = run_app(&mut terminal, app);
    restore_terminal(&mut terminal).context("failed to restore terminal")?;
    outcome
}

fn run_app<S: KeyValueStore>(terminal: &mut Tui, mut app: App<S>) -> anyhow::Result<()> {
    let events = EventHandler::new();

    while !app.should_quit() {
        terminal
            .draw(|frame| app.view(frame))
            .map_err(|e| AppError::terminal(e.to_string()))?;
        app.update(events.next()?);
    }

    Ok(())
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
