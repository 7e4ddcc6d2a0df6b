//! Entity spawn factories for bogeys.

use hecs::{Entity, World};

use rio_core::geometry::{velocity_from_attitude, wrap_heading};
use rio_core::types::{BogeyId, Kinematics, Vector3};
use rio_core::units::deg_to_rad;

use crate::components::{Bogey, RadarContact};

/// Where and how to place a new bogey relative to own-ship.
#[derive(Debug, Clone, Copy)]
pub struct BogeySpawn {
    /// Bearing from own-ship (degrees).
    pub bearing_deg: f64,
    /// Planar distance from own-ship (m).
    pub distance_m: f64,
    pub altitude_m: f64,
    pub heading_deg: f64,
    pub speed_mps: f64,
}

/// Spawn a level-flying bogey at `spawn.distance_m` on `spawn.bearing_deg` from `own_position`.
pub fn spawn_bogey(
    world: &mut World,
    next_id: &mut u32,
    own_position: Vector3,
    spawn: &BogeySpawn,
) -> (Entity, BogeyId) {
    let id = BogeyId(*next_id);
    *next_id += 1;

    let (sin_b, cos_b) = deg_to_rad(spawn.bearing_deg).sin_cos();
    let position = Vector3::new(
        own_position.x + spawn.distance_m * sin_b,
        own_position.y + spawn.distance_m * cos_b,
        spawn.altitude_m,
    );
    let heading = wrap_heading(spawn.heading_deg);
    let velocity = velocity_from_attitude(heading, 0.0, spawn.speed_mps);

    let entity = world.spawn((
        Bogey {
            id,
            heading_deg: heading,
            pitch_deg: 0.0,
            speed_mps: spawn.speed_mps,
        },
        Kinematics::new(position, velocity),
        RadarContact::default(),
    ));
    (entity, id)
}

/// Look up the entity for a bogey id.
pub fn find_bogey(world: &World, id: BogeyId) -> Option<Entity> {
    world
        .query::<&Bogey>()
        .iter()
        .find(|(_, bogey)| bogey.id == id)
        .map(|(entity, _)| entity)
}

/// Despawn every bogey. Returns how many were removed.
pub fn clear_bogeys(world: &mut World) -> usize {
    let doomed: Vec<Entity> = world.query::<&Bogey>().iter().map(|(e, _)| e).collect();
    for entity in &doomed {
        let _ = world.despawn(*entity);
    }
    doomed.len()
}
