//! Control surface for a host UI: start/stop the loop, send commands, poll
//! snapshots, drain radio calls and run held slews.

use tracing::info;

use rio_core::commands::PlayerCommand;
use rio_core::events::RadioCall;
use rio_core::state::SimSnapshot;
use rio_sim::engine::SimConfig;

use crate::error::AppError;
use crate::game_loop::{self, LoopOutputs};
use crate::slew::{Slew, SlewTask};
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig, frame_rate: u32) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;
    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let outputs = LoopOutputs {
        latest_snapshot: state.latest_snapshot.clone(),
        radio_log: state.radio_log.clone(),
    };
    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, frame_rate, outputs)?;

    *state.command_tx.lock().map_err(|_| AppError::LockPoisoned)? = Some(cmd_tx);
    *state.loop_handle.lock().map_err(|_| AppError::LockPoisoned)? = Some(handle);
    *running = true;
    Ok(())
}

/// Stop the game loop and wait for it to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;
    if !*running {
        return Err(AppError::NotRunning);
    }

    if let Some(tx) = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?.take() {
        // A closed channel means the loop already exited.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    if let Some(handle) = state.loop_handle.lock().map_err(|_| AppError::LockPoisoned)?.take() {
        let _ = handle.join();
    }
    *running = false;
    info!("Simulation stopped");
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::NotRunning),
    }
}

/// Get the latest snapshot synchronously.
pub fn get_snapshot(state: &AppState) -> Result<Option<SimSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock().map_err(|_| AppError::LockPoisoned)?;
    Ok(lock.clone())
}

/// Take every radio call published since the last drain.
pub fn drain_radio(state: &AppState) -> Result<Vec<RadioCall>, AppError> {
    let mut log = state.radio_log.lock().map_err(|_| AppError::LockPoisoned)?;
    Ok(std::mem::take(&mut *log))
}

/// Begin a press-and-hold slew. Stop it with [`SlewTask::stop`] on release.
pub fn start_slew(state: &AppState, slew: Slew) -> Result<SlewTask, AppError> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|_| AppError::LockPoisoned)?
        .as_ref()
        .cloned()
        .ok_or(AppError::NotRunning)?;
    SlewTask::start(slew, tx)
}
