//! Errors surfaced by the host layer.

use thiserror::Error;

use rio_core::error::SimError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotRunning,
    #[error("game loop channel closed")]
    ChannelClosed,
    #[error("shared state lock poisoned")]
    LockPoisoned,
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("failed to spawn thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("failed to read config {path}: {reason}")]
    Config { path: String, reason: String },
}
