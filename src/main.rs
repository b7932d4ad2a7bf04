use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::{AppConfig, LoggingConfig};
use connect_four::game::PieceColor;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override the first player's name
    #[arg(long)]
    first: Option<String>,

    /// Override the second player's name
    #[arg(long)]
    second: Option<String>,

    /// Override the first player's colour
    #[arg(long)]
    first_color: Option<PieceColor>,

    /// Override the second player's colour
    #[arg(long)]
    second_color: Option<PieceColor>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let loaded = load_config(&cli)?;
    let config = loaded.config;

    // Nothing is logged before this point
    let _guard = init_logging(&config.logging)?;
    if let Some(path) = &loaded.missing {
        eprintln!("Warning: config file '{}' not found, using defaults", path.display());
        warn!(path = %path.display(), "config file not found, using defaults");
    }
    info!(
        width = config.board.width,
        height = config.board.height,
        "starting connect-four"
    );

    let (first, second) = config.players.players()?;
    let mut app = App::new(config.board, first, second)?;
    run(&mut app).context("terminal error")?;

    info!("exiting");
    Ok(())
}

/// Settings after the config file and CLI overrides are merged.
struct LoadedConfig {
    config: AppConfig,
    /// Config path that did not exist, so defaults were used
    missing: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<LoadedConfig> {
    let missing = (!cli.config.exists()).then(|| cli.config.clone());
    let mut config = match missing {
        Some(_) => AppConfig::default(),
        None => AppConfig::load(&cli.config)
            .with_context(|| format!("loading config from {}", cli.config.display()))?,
    };

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(name) = &cli.first {
        config.players.first.name = name.clone();
    }
    if let Some(name) = &cli.second {
        config.players.second.name = name.clone();
    }
    if let Some(color) = cli.first_color {
        config.players.first.color = color;
    }
    if let Some(color) = cli.second_color {
        config.players.second.color = color;
    }
    config.validate().context("invalid settings")?;

    Ok(LoadedConfig { config, missing })
}

/// Log to a daily rolling file; the terminal belongs to the UI.
fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.directory)
        .with_context(|| format!("creating log directory {}", config.directory.display()))?;
    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("parsing log level '{}'", config.level))?;

    let file_appender = tracing_appender::rolling::daily(&config.directory, "connect-four.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
