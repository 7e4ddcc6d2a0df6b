//! Snapshot system: reads the world and singletons into a `SimSnapshot`.
//!
//! Read-only; never modifies the world.

use hecs::{Entity, World};

use rio_core::constants::{ORIGIN_LATITUDE, ORIGIN_LONGITUDE};
use rio_core::events::RadioCall;
use rio_core::geometry::{wrap_heading, BraaReport};
use rio_core::nav::offset_lat_lon;
use rio_core::radar::RadarState;
use rio_core::state::*;
use rio_core::types::{Kinematics, SimTime};
use rio_core::units::{m_to_feet, m_to_nm, mps_to_knots};
use rio_flight::Aircraft;

use crate::components::{Bogey, RadarContact};
use crate::scenario::ActiveScenario;

/// Build a complete snapshot of the current frame.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    aircraft: &Aircraft,
    radar: &RadarState,
    hooked: Option<Entity>,
    scenario: Option<&ActiveScenario>,
    radio: Vec<RadioCall>,
) -> SimSnapshot {
    let bogeys = build_bogeys(world, hooked);
    let hooked_view =
        hooked.and_then(|entity| world.get::<&Bogey>(entity).ok().map(|bogey| bogey.id));
    let hooked_readout = hooked_view
        .and_then(|id| bogeys.iter().find(|b| b.id == id))
        .map(|b| build_hooked_readout(&b.braa));

    SimSnapshot {
        time: *time,
        own_ship: build_own_ship(aircraft),
        radar: RadarView {
            state: *radar,
            hooked: hooked_view,
            coverage_kft: radar.elevation_coverage(aircraft.altitude_m()),
            hooked_readout,
        },
        bogeys,
        scenario: scenario.map(ActiveScenario::view),
        radio,
    }
}

fn build_own_ship(aircraft: &Aircraft) -> OwnShipView {
    let position = aircraft.position();
    let (latitude, longitude) =
        offset_lat_lon(ORIGIN_LATITUDE, ORIGIN_LONGITUDE, position.x, position.y);
    OwnShipView {
        position,
        velocity: aircraft.velocity(),
        heading_deg: aircraft.heading_deg(),
        pitch_deg: aircraft.pitch_deg(),
        roll_deg: aircraft.roll_deg(),
        speed_mps: aircraft.speed_mps(),
        throttle: aircraft.throttle(),
        altitude_m: aircraft.altitude_m(),
        roll_preset: aircraft.roll_preset(),
        latitude,
        longitude,
    }
}

/// Bogeys sorted by id, with the BRAA report from the latest radar pass.
fn build_bogeys(world: &World, hooked: Option<Entity>) -> Vec<BogeyView> {
    let mut bogeys: Vec<BogeyView> = world
        .query::<(&Bogey, &Kinematics, &RadarContact)>()
        .iter()
        .map(|(entity, (bogey, kinematics, contact))| BogeyView {
            id: bogey.id,
            position: kinematics.position,
            velocity: kinematics.velocity,
            heading_deg: bogey.heading_deg,
            speed_mps: bogey.speed_mps,
            visible: contact.visible,
            hooked: hooked == Some(entity),
            braa: contact.braa,
        })
        .collect();
    bogeys.sort_by_key(|b| b.id);
    bogeys
}

/// Detailed status line for the hooked contact.
pub fn build_hooked_readout(report: &BraaReport) -> HookedReadout {
    HookedReadout {
        ta_right: report.ta_deg >= 0.0,
        ta_deg: report.ta_deg.abs(),
        course_deg: report.bogey_heading_deg,
        relative_bearing_deg: wrap_heading(report.ata_deg),
        range_nm: m_to_nm(report.slant_range_m),
        airspeed_kts: mps_to_knots(report.bogey_speed_mps),
        altitude_ft: m_to_feet(report.altitude_m),
        closure_kts: mps_to_knots(report.closure_mps),
    }
}
