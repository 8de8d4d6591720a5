//! Sift binary entry point and terminal session management.
//!
//! Wires the derived event streams into a running TUI:
//!
//! ```text
//! main() -> TerminalSession::new() -> run_app() -> App + EventStreams
//! ```
//!
//! # Event Loop
//!
//! A fixed frame cadence drives the loop:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`sift_tui::InputPump`])
//! 3. Apply drained derived events to the app state
//! 4. Render frame
//!
//! Before the first frame, the current terminal width is fed to the
//! breakpoint watcher once, so the UI starts in a known layout mode instead
//! of waiting for the user to resize.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        size as terminal_size,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sift_config::SiftConfig;
use sift_tui::{App, EventStreams, InputPump, draw, handle_events};
use sift_types::{Breakpoint, Region};

const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Region watched by the pointer detector: the upper-left corner.
const POINTER_REGION: Region = Region {
    x: 0,
    y: 0,
    width: 20,
    height: 5,
};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.sift/logs/sift.log
    if let Some(config_path) = sift_config::config_path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("sift.log"));
    }

    candidates.push(std::env::temp_dir().join("sift.log"));
    candidates
}

/// RAII wrapper for terminal state.
///
/// Raw mode, the alternate screen, and mouse capture (the pointer-region
/// detector needs motion events) are set up on construction and restored in
/// `Drop`, so the terminal stays usable after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            let _ = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

fn breakpoint_from(config: &SiftConfig) -> Breakpoint {
    match config.breakpoint().map(Breakpoint::new) {
        Some(Ok(breakpoint)) => breakpoint,
        Some(Err(err)) => {
            tracing::warn!("Ignoring configured breakpoint: {err}");
            Breakpoint::default()
        }
        None => Breakpoint::default(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = SiftConfig::load().ok().flatten().unwrap_or_default();
    let breakpoint = breakpoint_from(&config);

    let mut app = App::new(breakpoint, POINTER_REGION, config.ascii_only());
    let mut streams = EventStreams::new(breakpoint, POINTER_REGION);

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app, &mut streams).await
    };

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    streams: &mut EventStreams,
) -> Result<()> {
    // Synthetic initial measurement so the first frame has a layout mode.
    match terminal_size() {
        Ok((columns, _)) => streams.observe_width(columns),
        Err(err) => tracing::warn!("Could not measure terminal at startup: {err}"),
    }

    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input, streams) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
