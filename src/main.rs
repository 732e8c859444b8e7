//! Terminal runner (default binary).
//!
//! Polls crossterm for keys until the next frame boundary, applies mapped
//! commands immediately, then advances the session clock and redraws.
//!
//! Logging is off unless `BLOCKFALL_LOG_PATH` names a file; the terminal owns
//! stdout and stderr while the game runs. `RUST_LOG` sets the filter.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use env_logger::{Env, Target};
use log::{debug, info, log_enabled, warn, Level};

use blockfall::core::{LockEvent, Session, SessionConfig, Snapshot};
use blockfall::input::{map_key, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    init_logging()?;

    let mut config = SessionConfig::from_env().context("invalid configuration")?;
    if config.seed.is_none() {
        config.seed = Some(clock_seed());
    }
    info!(
        "starting {}x{} session, drop interval {}ms, seed {:?}",
        config.cols, config.rows, config.drop_interval_ms, config.seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("BLOCKFALL_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("create log file {}", path.to_string_lossy()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: SessionConfig) -> Result<()> {
    let mut session = Session::new(config);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = Snapshot::default();

    let start = Instant::now();
    let frame = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = start;

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame boundary.
        loop {
            let timeout = frame.saturating_sub(last_frame.elapsed());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit with score {}", session.score());
                        return Ok(());
                    }
                    if let Some(command) = map_key(key) {
                        session.apply(command);
                        report_lock(&mut session);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        last_frame = Instant::now();
        session.frame(last_frame.duration_since(start).as_millis() as u64);
        report_lock(&mut session);
    }
}

/// Drain the last lock event, logging the session state after a board reset.
/// Runs after every command as well as every frame.
fn report_lock(session: &mut Session) -> Option<LockEvent> {
    let event = session.take_last_event()?;
    if event.board_reset && log_enabled!(Level::Debug) {
        match serde_json::to_string(&session.snapshot()) {
            Ok(json) => debug!("board reset, state after reset: {}", json),
            Err(err) => warn!("could not serialize snapshot: {}", err),
        }
    }
    Some(event)
}
