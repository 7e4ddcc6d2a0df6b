//! Game loop thread: advances the engine once per frame with the measured
//! wall-clock delta and publishes snapshots.
//!
//! The engine is built on the caller's thread so configuration errors are
//! reported before the loop starts, then moved into the loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use rio_core::events::RadioCall;
use rio_core::state::SimSnapshot;
use rio_sim::engine::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Nominal frame duration at `frame_rate` Hz.
pub fn frame_duration(frame_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(frame_rate.max(1)))
}

/// Shared outputs the loop writes to.
#[derive(Clone)]
pub struct LoopOutputs {
    pub latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
    pub radio_log: Arc<Mutex<Vec<RadioCall>>>,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    frame_rate: u32,
    outputs: LoopOutputs,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    let engine = SimulationEngine::new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("rio-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, frame_duration(frame_rate), &outputs);
        })?;

    info!(frame_rate, "Game loop started");
    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    frame: Duration,
    outputs: &LoopOutputs,
) {
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;

    loop {
        // 1. Drain all pending commands
        let mut pending = Vec::new();
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => pending.push(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(ticks = engine.time().tick, "Game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }
        engine.queue_commands(pending);

        // 2. Advance by the measured wall-clock delta (engine clamps long frames)
        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;
        let snapshot = engine.tick(delta);

        // 3. Publish radio calls and the snapshot
        if !snapshot.radio.is_empty() {
            if let Ok(mut log) = outputs.radio_log.lock() {
                log.extend(snapshot.radio.iter().cloned());
            }
        }
        if let Ok(mut lock) = outputs.latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_frame_time += frame;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame * 2 {
            debug!("Game loop behind schedule, resetting frame clock");
            next_frame_time = now;
        }
    }
}
