//! Per-frame systems.
//!
//! Systems are free functions over the world and the engine's singletons.
//! They run in a fixed order: movement, radar, scenario, snapshot.

pub mod movement;
pub mod radar;
pub mod scenario;
pub mod snapshot;
