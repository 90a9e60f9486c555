use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod action;
mod app;
mod config_file;
mod input;
mod model;
mod theme;
mod tui_event;
mod view;

use app::App;
use lexiscope_core::Dimension;
use lexiscope_ingest::DataSource;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Lexiscope — exploratory word-frequency dashboards in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Dataset to load: a JSON file path or an http(s) URL
    data: Option<String>,

    /// Grouping dimension: title or agency
    #[arg(long)]
    dimension: Option<Dimension>,

    /// Color theme: hacker (default) or modern
    #[arg(long)]
    theme: Option<String>,

    /// Write logs to this file instead of the platform data directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let config = config_file::load_config();

    // Resolve settings from CLI flags > config file > defaults
    let source_raw = args
        .data
        .or_else(|| config.data.as_ref().and_then(|d| d.source.clone()));
    let Some(source_raw) = source_raw else {
        anyhow::bail!("no dataset given (pass a JSON file path or URL, or set data.source in config)");
    };
    let source = DataSource::parse(&source_raw);
    if let DataSource::File(path) = &source
        && !path.exists()
    {
        anyhow::bail!("dataset file not found: {}", path.display());
    }

    let dimension = args
        .dimension
        .or_else(|| {
            config
                .data
                .as_ref()
                .and_then(|d| d.dimension.as_deref().and_then(|s| s.parse().ok()))
        })
        .unwrap_or(Dimension::Title);

    let theme_name = args
        .theme
        .or_else(|| config.display.as_ref().and_then(|d| d.theme.clone()))
        .unwrap_or_else(|| "hacker".to_string());
    let theme = match theme_name.as_str() {
        "modern" => theme::Theme::modern(),
        _ => theme::Theme::hacker(),
    };

    let fps = config
        .display
        .as_ref()
        .and_then(|d| d.fps)
        .unwrap_or(10)
        .clamp(1, 60);
    let tick_rate = Duration::from_millis(1000 / fps as u64);

    // Logging goes to a file; stderr belongs to the TUI.
    let _log_guard = init_logging(args.log_file);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend_terminal = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_terminal)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(theme, dimension, source.label());

    // The single suspension point: one background task fetches the dataset
    // and reports back over the event channel. The local sender keeps the
    // channel open so recv() pends instead of returning None every loop.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let load_tx = event_tx.clone();
    let load_source = source.clone();
    tokio::spawn(async move {
        match lexiscope_ingest::load_records(&load_source).await {
            Ok(records) => {
                let _ = load_tx.send(tui_event::BackendEvent::DataLoaded(records));
            }
            Err(err) => {
                error!(error = %err, source = %load_source, "dataset load failed");
                let _ = load_tx.send(tui_event::BackendEvent::LoadFailed(err.to_string()));
            }
        }
    });

    // Main event loop
    loop {
        // Draw
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            // Backend events (the load result, at most once)
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                }
            }
            // Terminal input events
            _ = async {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let action = input::map_event(&evt, &app.input_mode);
                        app.update(action);
                    }
                }
            } => {}
        }

        // Process tick
        app.update(action::Action::Tick);

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    Ok(())
}

/// Append-mode file logging via tracing; returns the non-blocking writer
/// guard, which must stay alive for the process lifetime.
fn init_logging(
    path_override: Option<PathBuf>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let path = path_override
        .or_else(|| dirs::data_local_dir().map(|d| d.join("lexiscope").join("lexiscope.log")))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
