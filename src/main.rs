mod app;
mod chime;
mod config;
mod domain;
mod focus;
mod input;
mod logging;
mod persistence;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use chime::{BellChime, Chime, SilentChime};
use clap::{Parser, Subcommand};
use config::FocusConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{format_hours, SessionHistory, TimerConfig};
use focus::FocusTimer;
use persistence::{ensure_data_dir, get_data_dir, load_history, log_file, store_file, JsonFileStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use ticker::IntervalTicker;

type DashboardApp = AppState<IntervalTicker, JsonFileStore, Box<dyn Chime>>;

#[derive(Parser)]
#[command(name = "focustimer")]
#[command(about = "A terminal pomodoro focus timer with per-day work history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Work phase length in minutes (overrides config)
    #[arg(short, long)]
    work: Option<i64>,

    /// Break phase length in minutes (overrides config)
    #[arg(short = 'b', long = "break")]
    break_minutes: Option<i64>,

    /// Directory for history and logs. Defaults to ~/.focustimer
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Do not ring the bell when a work session completes
    #[arg(long)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the per-day work history
    History {
        /// Print the raw JSON mapping instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = FocusConfig::load()?;
    let data_dir_override = cli.data_dir.clone().or_else(|| config.data_dir.clone());

    match cli.command {
        Some(Commands::History { json }) => {
            logging::init_stderr_logging(config.log_level.as_deref());
            print!("{}", history_output(data_dir_override.as_deref(), json)?);
            Ok(())
        }
        None => {
            config.apply_overrides(cli.work, cli.break_minutes, cli.silent);
            let timer_config = config.timer_config()?;
            run_tui(&config, data_dir_override, timer_config)
        }
    }
}

/// Render the stored history without creating the data directory
fn history_output(data_dir_override: Option<&Path>, json: bool) -> Result<String> {
    let data_dir = get_data_dir(data_dir_override)?;
    let store = JsonFileStore::new(store_file(&data_dir));
    let history = load_history(&store);

    if json {
        Ok(format!("{}\n", history.to_json()?))
    } else {
        Ok(format_history_table(&history))
    }
}

/// History as a plain-text table, newest day first
fn format_history_table(history: &SessionHistory) -> String {
    if history.is_empty() {
        return "No completed work sessions yet.\n".to_string();
    }

    let mut out = String::new();
    for row in history.rows_newest_first() {
        out.push_str(&format!("{}  {}\n", row.date, row.hours_formatted()));
    }
    out.push_str(&format!("Total       {}\n", format_hours(history.total_minutes())));
    out
}

fn run_tui(
    config: &FocusConfig,
    data_dir_override: Option<PathBuf>,
    timer_config: TimerConfig,
) -> Result<()> {
    let data_dir = ensure_data_dir(data_dir_override.as_deref())?;
    logging::init_file_logging(&log_file(&data_dir), config.log_level.as_deref())?;
    eprintln!("Using data directory: {}", data_dir.display());
    tracing::info!(
        data_dir = %data_dir.display(),
        work_secs = timer_config.work_secs(),
        break_secs = timer_config.break_secs(),
        "starting focus timer"
    );

    let chime: Box<dyn Chime> = if config.chime {
        Box::new(BellChime)
    } else {
        Box::new(SilentChime)
    };
    let store = JsonFileStore::new(store_file(&data_dir));
    tracing::debug!(store = %store.path().display(), "using history store");
    let timer = FocusTimer::new(timer_config, IntervalTicker::new(), store, chime);
    let mut app = AppState::new(timer);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.timer.shutdown();
    tracing::info!(
        sessions = app.completed_work_sessions,
        uptime_secs = app.app_start_time.elapsed().as_secs(),
        "focus timer stopped"
    );

    if let Err(err) = &result {
        tracing::error!(error = %err, "dashboard exited with an error");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut DashboardApp) -> Result<()> {
    let frame_rate = ticker::frame_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout so the countdown keeps moving
        if event::poll(frame_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
