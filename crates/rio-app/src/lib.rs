//! Host runner for the RIO trainer.
//!
//! Runs the simulation engine on its own thread, forwards operator commands
//! over a channel, publishes the latest snapshot for polling, and drives
//! press-and-hold antenna slewing with cancellable periodic tasks.

pub mod control;
pub mod error;
pub mod game_loop;
pub mod slew;
pub mod state;
pub mod status;

pub use rio_core as core;
