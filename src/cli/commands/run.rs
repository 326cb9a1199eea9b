//! Live countdown display.
//!
//! Ticks on a `tokio` interval, redraws the frame whenever the whole
//! second changes, and reports phase and alert changes as events.

use std::io::{IsTerminal, Write};

use tokio::time::MissedTickBehavior;

use crate::cli::args::RunArgs;
use crate::clock::{ContactClockEngine, Snapshot, SystemTimeSource, TimeSource};
use crate::config::resolve_config_path;
use crate::display::{DisplayOptions, render_frame};
use crate::error::{ClockError, ExitCode};
use crate::observability::{ClockEvent, EventEmitter, StopReason, diff_snapshots};

use super::{load_engine, local_offset_at};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Runs the clock until interrupted, or for one frame with `--once`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or stdout
/// cannot be written.
pub async fn run(args: &RunArgs) -> Result<i32, ClockError> {
    let source = SystemTimeSource;
    let path = resolve_config_path(args.config.as_deref());
    let engine = load_engine(&path, source.now(), true)?;
    let options = args.display_options();
    let emitter = EventEmitter::new();

    let first = engine.advance(source.now());
    emitter.emit(&ClockEvent::ClockStarted {
        timestamp: first.at,
        aos: engine.aos(),
        los: engine.los(),
    });

    if args.once {
        emitter.emit_all(&diff_snapshots(None, &first));
        draw(&engine, &first, &options, false)?;
        emitter.emit(&ClockEvent::ClockStopped {
            timestamp: first.at,
            reason: StopReason::Completed,
        });
        return Ok(ExitCode::SUCCESS);
    }

    let clear = std::io::stdout().is_terminal();
    let mut ticker = tokio::time::interval(args.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    let mut previous: Option<Snapshot> = None;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snapshot = engine.advance(source.now());
                emitter.emit_all(&diff_snapshots(previous.as_ref(), &snapshot));
                if previous.is_none_or(|p| p.at != snapshot.at) {
                    draw(&engine, &snapshot, &options, clear)?;
                }
                previous = Some(snapshot);
            }
            _ = &mut interrupt => {
                emitter.emit(&ClockEvent::ClockStopped {
                    timestamp: source.now(),
                    reason: StopReason::Interrupted,
                });
                return Ok(ExitCode::INTERRUPTED);
            }
        }
    }
}

fn draw(
    engine: &ContactClockEngine,
    snapshot: &Snapshot,
    options: &DisplayOptions,
    clear: bool,
) -> Result<(), ClockError> {
    let frame = render_frame(
        snapshot,
        engine.school_offset(),
        local_offset_at(snapshot.at),
        options,
    );

    let mut out = std::io::stdout().lock();
    if clear {
        out.write_all(CLEAR_SCREEN.as_bytes())?;
    }
    let colorize = colored::control::SHOULD_COLORIZE.should_colorize();
    out.write_all(frame.to_terminal(colorize, options.background).as_bytes())?;
    out.flush()?;
    Ok(())
}
