//! Press-and-hold antenna slewing.
//!
//! A press applies one increment immediately, then a background thread
//! repeats it at the axis interval until the task is stopped. Increments go
//! through the same command channel as every other operator action.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::debug;

use rio_core::commands::PlayerCommand;
use rio_core::constants::{
    AZIMUTH_SLEW_INTERVAL_MS, AZIMUTH_SLEW_STEP, ELEVATION_SLEW_INTERVAL_MS, ELEVATION_SLEW_STEP,
};

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Slew direction of a held control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slew {
    Left,
    Right,
    Up,
    Down,
}

impl Slew {
    /// One increment as a command.
    pub fn command(self) -> PlayerCommand {
        let (azimuth_deg, elevation_deg) = match self {
            Slew::Left => (-AZIMUTH_SLEW_STEP, 0.0),
            Slew::Right => (AZIMUTH_SLEW_STEP, 0.0),
            Slew::Up => (0.0, ELEVATION_SLEW_STEP),
            Slew::Down => (0.0, -ELEVATION_SLEW_STEP),
        };
        PlayerCommand::SlewAntenna {
            azimuth_deg,
            elevation_deg,
        }
    }

    /// Repeat interval while held.
    pub fn interval(self) -> Duration {
        match self {
            Slew::Left | Slew::Right => Duration::from_millis(AZIMUTH_SLEW_INTERVAL_MS),
            Slew::Up | Slew::Down => Duration::from_millis(ELEVATION_SLEW_INTERVAL_MS),
        }
    }
}

/// A running press-and-hold slew. Dropping it without [`SlewTask::stop`]
/// also ends the repeat but does not wait for the thread.
pub struct SlewTask {
    slew: Slew,
    cancel_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl SlewTask {
    /// Start slewing: one increment now, then one per interval.
    pub fn start(slew: Slew, command_tx: mpsc::Sender<GameLoopCommand>) -> Result<Self, AppError> {
        command_tx
            .send(GameLoopCommand::PlayerCommand(slew.command()))
            .map_err(|_| AppError::ChannelClosed)?;

        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let handle = std::thread::Builder::new()
            .name("rio-slew".into())
            .spawn(move || repeat(slew, &command_tx, &cancel_rx))?;

        debug!(?slew, "Slew started");
        Ok(Self {
            slew,
            cancel_tx,
            handle,
        })
    }

    pub fn slew(&self) -> Slew {
        self.slew
    }

    /// Release the control and wait for the repeat thread to finish.
    pub fn stop(self) {
        let _ = self.cancel_tx.send(());
        let _ = self.handle.join();
        debug!(slew = ?self.slew, "Slew stopped");
    }
}

fn repeat(slew: Slew, command_tx: &mpsc::Sender<GameLoopCommand>, cancel_rx: &mpsc::Receiver<()>) {
    loop {
        match cancel_rx.recv_timeout(slew.interval()) {
            Err(mpsc::RecvTimeoutError::Timeout) => {
                let sent = command_tx.send(GameLoopCommand::PlayerCommand(slew.command()));
                if sent.is_err() {
                    return;
                }
            }
            Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => return,
        }
    }
}
