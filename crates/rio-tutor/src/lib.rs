//! Tutorial checklists for the RIO trainer.
//!
//! Stages of task/check conditions are plain data. `ChecklistRun` walks them
//! against live intercept geometry with short-circuit and freeze semantics.
//! No ECS dependency; operates on BRAA reports and own-ship status.

pub mod checklist;
pub mod tutorials;

pub use rio_core as core;

pub use checklist::{Check, CheckInput, ChecklistRun, Condition, Evaluation, OwnShipStatus, Task};
pub use tutorials::Tutorial;

#[cfg(test)]
mod tests;
