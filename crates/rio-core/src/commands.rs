//! Operator commands sent from the UI layer to the simulation.
//!
//! Commands are queued and applied at the start of the next frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::BogeyId;

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Flight ---
    /// Absolute target altitude (meters).
    SetAltitude { altitude_m: f64 },
    /// Target altitude relative to the current altitude.
    SetAltitudePreset { preset: AltitudePreset },
    /// Target airspeed (m/s).
    SetSpeed { speed_mps: f64 },
    /// Bank-angle preset.
    SetRollPreset { preset: RollPreset },
    /// Move along the ordered bank presets (negative = further left).
    StepRoll { steps: i32 },

    // --- Radar antenna ---
    /// Slew the antenna by signed increments (degrees).
    SlewAntenna {
        azimuth_deg: f64,
        elevation_deg: f64,
    },
    /// Return the antenna to boresight.
    CenterAntenna,
    SetAzimuthScan { scan: AzimuthScan },
    SetElevationBars { bars: ElevationBars },
    SetRadarRange { range: RadarRange },
    SetDisplayMode { mode: DisplayMode },

    // --- Contacts ---
    /// Hook (select) a visible contact.
    HookBogey { bogey: BogeyId },
    /// Clear the hook.
    Unhook,

    // --- Scenario ---
    /// Clean up any active scenario, then start the selected one.
    SelectScenario { scenario: ScenarioId },
    /// Clean up the active scenario.
    ClearScenario,
}
