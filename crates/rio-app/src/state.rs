//! Application state shared between the control layer and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use rio_core::commands::PlayerCommand;
use rio_core::events::RadioCall;
use rio_core::state::SimSnapshot;

/// Messages sent from the control layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for state that does not exist before `start_simulation`
/// - `Arc<Mutex<...>>` for data written by the game loop thread
pub struct AppState {
    /// Channel sender to the game loop thread. `None` when not running.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling. Updated after each frame.
    pub latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
    /// Radio calls accumulated since the last drain.
    pub radio_log: Arc<Mutex<Vec<RadioCall>>>,
    /// Game loop thread handle, joined on stop.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            radio_log: Arc::new(Mutex::new(Vec::new())),
            loop_handle: Mutex::new(None),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(state.radio_log.lock().unwrap().is_empty());
        assert!(state.loop_handle.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }
}
