//! Error types shared across the simulation crates.

use thiserror::Error;

use crate::types::BogeyId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("{0} does not exist")]
    UnknownBogey(BogeyId),
    #[error("{0} is not inside the radar scan volume")]
    BogeyNotVisible(BogeyId),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
