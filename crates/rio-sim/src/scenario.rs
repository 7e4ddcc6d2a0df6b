//! Scenario catalog and the active-scenario record.
//!
//! Every scenario places one bogey at a fixed range on a random bearing,
//! pointed roughly back at own-ship, and announces it over the radio.
//! Tutorials additionally carry a checklist.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rio_core::constants::{AWACS_CALLSIGN, LONG_CALL_SECS, PLAYER_CALLSIGN};
use rio_core::enums::{ScenarioId, Station};
use rio_core::events::RadioCall;
use rio_core::state::ScenarioView;
use rio_core::types::{BogeyId, Vector3};
use rio_core::units::{feet_to_m, knots_to_mps, nm_to_m, round_feet};
use rio_tutor::tutorials::{self, Tutorial};
use rio_tutor::ChecklistRun;

use crate::world_setup::{self, BogeySpawn};

/// Parameters of a catalog entry.
#[derive(Debug, Clone)]
pub struct ScenarioSpec {
    pub id: ScenarioId,
    pub title: String,
    pub range_nm: f64,
    /// Bogey heading = bearing + 180 + U(lo, hi).
    pub heading_offset_deg: (f64, f64),
    pub altitude_ft: (f64, f64),
    pub speed_kts: (f64, f64),
    /// Precision of the altitude quoted in the introduction.
    pub call_altitude_step_ft: f64,
    pub tutorial: Option<Tutorial>,
}

impl ScenarioSpec {
    pub fn for_id(id: ScenarioId) -> Self {
        match id {
            ScenarioId::Intercept100 => Self::intercept(id, 100.0),
            ScenarioId::Intercept80 => Self::intercept(id, 80.0),
            ScenarioId::Intercept60 => Self::intercept(id, 60.0),
            ScenarioId::Intercept40 => Self::intercept(id, 40.0),
            ScenarioId::Intercept20 => Self::intercept(id, 20.0),
            ScenarioId::ZeroCutTutorial => Self::tutorial(id, tutorials::zero_cut(), (-5.0, 5.0)),
            ScenarioId::KickAndBuildTutorial => {
                Self::tutorial(id, tutorials::kick_and_build(), (10.0, 20.0))
            }
        }
    }

    fn intercept(id: ScenarioId, range_nm: f64) -> Self {
        Self {
            id,
            title: format!("Interception {range_nm}nm"),
            range_nm,
            heading_offset_deg: (-45.0, 45.0),
            altitude_ft: (5_000.0, 40_000.0),
            speed_kts: (200.0, 600.0),
            call_altitude_step_ft: 10_000.0,
            tutorial: None,
        }
    }

    fn tutorial(id: ScenarioId, tutorial: Tutorial, heading_offset_deg: (f64, f64)) -> Self {
        Self {
            id,
            title: tutorial.title.clone(),
            range_nm: 100.0,
            heading_offset_deg,
            altitude_ft: (10_000.0, 40_000.0),
            speed_kts: (250.0, 600.0),
            call_altitude_step_ft: 1_000.0,
            tutorial: Some(tutorial),
        }
    }

    /// Draw the randomized bogey parameters.
    pub fn roll(&self, rng: &mut ChaCha8Rng) -> ScenarioRoll {
        let bearing_deg = rng.gen_range(0.0..360.0);
        let offset = rng.gen_range(self.heading_offset_deg.0..self.heading_offset_deg.1);
        let altitude_ft = rng.gen_range(self.altitude_ft.0..self.altitude_ft.1);
        let speed_kts = rng.gen_range(self.speed_kts.0..self.speed_kts.1);
        ScenarioRoll {
            bearing_deg,
            heading_deg: bearing_deg + 180.0 + offset,
            altitude_ft,
            speed_kts,
        }
    }

    /// AWACS introduction of the new group.
    pub fn intro_call(&self, roll: &ScenarioRoll, now_secs: f64) -> RadioCall {
        RadioCall {
            station: Station::Awacs,
            text: format!(
                "{PLAYER_CALLSIGN}, {AWACS_CALLSIGN}, new group, BRAA {}, {} miles, {} feet, hot.",
                roll.bearing_deg.round(),
                self.range_nm,
                round_feet(roll.altitude_ft, self.call_altitude_step_ft),
            ),
            duration_secs: LONG_CALL_SECS,
            sent_at_secs: now_secs,
        }
    }
}

/// One random draw of a scenario's bogey.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioRoll {
    pub bearing_deg: f64,
    pub heading_deg: f64,
    pub altitude_ft: f64,
    pub speed_kts: f64,
}

/// The running scenario.
#[derive(Debug)]
pub struct ActiveScenario {
    pub id: ScenarioId,
    pub title: String,
    /// Entity the checklist evaluates.
    pub tracked: Entity,
    pub tracked_id: BogeyId,
    pub checklist: Option<ChecklistRun>,
}

impl ActiveScenario {
    pub fn view(&self) -> ScenarioView {
        match &self.checklist {
            Some(run) => ScenarioView {
                id: self.id,
                title: self.title.clone(),
                stage: run.stage(),
                stage_count: run.stage_count(),
                frozen: run.is_frozen(),
                conditions: run.conditions().to_vec(),
            },
            None => ScenarioView {
                id: self.id,
                title: self.title.clone(),
                stage: 0,
                stage_count: 0,
                frozen: false,
                conditions: Vec::new(),
            },
        }
    }
}

/// Spawn the scenario's bogey and build its introduction.
pub fn start(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_bogey_id: &mut u32,
    own_position: Vector3,
    id: ScenarioId,
    now_secs: f64,
) -> (ActiveScenario, RadioCall) {
    let spec = ScenarioSpec::for_id(id);
    let roll = spec.roll(rng);

    let (tracked, tracked_id) = world_setup::spawn_bogey(
        world,
        next_bogey_id,
        own_position,
        &BogeySpawn {
            bearing_deg: roll.bearing_deg,
            distance_m: nm_to_m(spec.range_nm),
            altitude_m: feet_to_m(roll.altitude_ft),
            heading_deg: roll.heading_deg,
            speed_mps: knots_to_mps(roll.speed_kts),
        },
    );

    let call = spec.intro_call(&roll, now_secs);
    let active = ActiveScenario {
        id,
        title: spec.title,
        tracked,
        tracked_id,
        checklist: spec.tutorial.map(ChecklistRun::new),
    };
    (active, call)
}
