//! Events emitted by the simulation for the message display.

use serde::{Deserialize, Serialize};

use crate::enums::Station;

/// A narrative radio message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioCall {
    pub station: Station,
    pub text: String,
    /// How long the message display should keep it visible (seconds).
    pub duration_secs: f64,
    /// Simulation time the call was made.
    pub sent_at_secs: f64,
}

impl RadioCall {
    /// Text prefixed with the speaker, as shown in the message log.
    pub fn display_text(&self) -> String {
        let speaker = match self.station {
            Station::Awacs => crate::constants::AWACS_CALLSIGN.to_uppercase(),
            Station::Rio => "RIO".to_string(),
        };
        format!("{speaker}: {}", self.text)
    }
}
