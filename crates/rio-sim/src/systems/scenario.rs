//! Scenario system: evaluates the active tutorial checklist.

use hecs::World;
use tracing::info;

use rio_core::geometry::braa;
use rio_core::types::Kinematics;
use rio_flight::Aircraft;
use rio_tutor::{CheckInput, Evaluation, OwnShipStatus};

use crate::scenario::ActiveScenario;

/// Run one frame of the checklist against the tracked bogey.
pub fn run(world: &World, scenario: &mut ActiveScenario, aircraft: &Aircraft, hooked: bool, dt: f64) {
    let Some(checklist) = scenario.checklist.as_mut() else {
        return;
    };
    let Ok(target) = world.get::<&Kinematics>(scenario.tracked) else {
        return;
    };

    let input = CheckInput {
        report: braa(aircraft.kinematics(), &target),
        own: OwnShipStatus {
            roll_deg: aircraft.roll_deg(),
            altitude_m: aircraft.altitude_m(),
            speed_mps: aircraft.speed_mps(),
            hooked,
        },
    };

    if let Evaluation::Evaluated { advanced: true } = checklist.evaluate(dt, &input) {
        info!(
            scenario = %scenario.title,
            stage = checklist.stage(),
            of = checklist.stage_count(),
            "Checklist stage complete"
        );
    }
}
