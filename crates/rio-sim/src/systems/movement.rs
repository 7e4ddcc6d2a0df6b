//! Kinematic integration: own-ship first, then every bogey.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use rio_core::geometry::velocity_from_attitude;
use rio_core::types::Kinematics;
use rio_flight::Aircraft;

use crate::components::Bogey;

/// Advance own-ship and all bogeys by `dt` seconds.
pub fn run(world: &mut World, aircraft: &mut Aircraft, rng: &mut ChaCha8Rng, dt: f64) {
    aircraft.update(dt, rng);

    for (_entity, (bogey, kinematics)) in world.query_mut::<(&Bogey, &mut Kinematics)>() {
        kinematics.velocity =
            velocity_from_attitude(bogey.heading_deg, bogey.pitch_deg, bogey.speed_mps);
        kinematics.integrate(dt);
    }
}
