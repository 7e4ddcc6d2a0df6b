//! Core types and definitions for the RIO intercept trainer.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vector and unit helpers, intercept geometry, radar scan volume,
//! commands, state snapshots, events, and constants.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod nav;
pub mod radar;
pub mod state;
pub mod types;
pub mod units;

#[cfg(test)]
mod tests;
