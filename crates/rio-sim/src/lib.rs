//! Simulation engine for the RIO trainer.
//!
//! Owns the own-ship aircraft, the hecs world of bogeys, the radar and the
//! active scenario. Advances them with a variable frame delta and produces
//! `SimSnapshot`s for the host.

pub mod components;
pub mod engine;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use rio_core as core;
pub use engine::{SimConfig, SimulationEngine};
