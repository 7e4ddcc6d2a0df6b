//! Simulation snapshot: the complete visible state read by the UI each frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::RadioCall;
use crate::geometry::BraaReport;
use crate::radar::RadarState;
use crate::types::{BogeyId, SimTime, Vector3};

/// Complete simulation state published after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub own_ship: OwnShipView,
    pub radar: RadarView,
    pub bogeys: Vec<BogeyView>,
    pub scenario: Option<ScenarioView>,
    /// Radio calls made during this frame.
    pub radio: Vec<RadioCall>,
}

/// Own-ship kinematic and attitude state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwnShipView {
    pub position: Vector3,
    pub velocity: Vector3,
    pub heading_deg: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
    pub speed_mps: f64,
    pub throttle: f64,
    pub altitude_m: f64,
    pub roll_preset: RollPreset,
    pub latitude: f64,
    pub longitude: f64,
}

/// Radar settings plus derived display readouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RadarView {
    pub state: RadarState,
    pub hooked: Option<BogeyId>,
    /// Altitude band covered at display range, thousands of feet (high, low).
    pub coverage_kft: (i32, i32),
    pub hooked_readout: Option<HookedReadout>,
}

/// Detailed status of the hooked contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HookedReadout {
    /// Own-ship is right of the target's tail (TA > 0).
    pub ta_right: bool,
    pub ta_deg: f64,
    pub course_deg: f64,
    /// Bearing relative to the nose, `[0, 360)`.
    pub relative_bearing_deg: f64,
    pub range_nm: f64,
    pub airspeed_kts: f64,
    pub altitude_ft: f64,
    pub closure_kts: f64,
}

/// A simulated contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BogeyView {
    pub id: BogeyId,
    pub position: Vector3,
    pub velocity: Vector3,
    pub heading_deg: f64,
    pub speed_mps: f64,
    /// Inside the radar scan volume this frame.
    pub visible: bool,
    pub hooked: bool,
    pub braa: BraaReport,
}

/// Status of the active scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioView {
    pub id: ScenarioId,
    pub title: String,
    pub stage: usize,
    pub stage_count: usize,
    /// Holding on the just-completed stage.
    pub frozen: bool,
    pub conditions: Vec<ConditionView>,
}

/// One checklist line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionView {
    pub text: String,
    pub state: ConditionState,
}

impl ConditionView {
    pub fn satisfied(&self) -> bool {
        self.state == ConditionState::Satisfied
    }
}
