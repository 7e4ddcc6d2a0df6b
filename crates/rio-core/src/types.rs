//! Fundamental geometric and simulation types.
//!
//! Simulation space is Cartesian meters: x = East, y = North, z = Up (altitude).

use serde::{Deserialize, Serialize};

use crate::units::deg_to_rad;

/// 2D value vector. `normalize` on a zero-length vector yields NaN components.
pub type Vector2 = glam::DVec2;

/// 3D value vector. `normalize` on a zero-length vector yields NaN components.
pub type Vector3 = glam::DVec3;

/// Planar helpers used by display transforms.
pub trait PlanarExt {
    /// Rotate by `deg` degrees into a display frame whose y axis points down.
    fn rotate_display(self, deg: f64) -> Vector2;
}

impl PlanarExt for Vector2 {
    fn rotate_display(self, deg: f64) -> Vector2 {
        let (sin, cos) = deg_to_rad(deg).sin_cos();
        Vector2::new(self.x * cos - self.y * sin, -self.y * cos - self.x * sin)
    }
}

impl PlanarExt for Vector3 {
    fn rotate_display(self, deg: f64) -> Vector2 {
        self.truncate().rotate_display(deg)
    }
}

/// Position and velocity of a body at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: Vector3,
    pub velocity: Vector3,
}

impl Kinematics {
    pub fn new(position: Vector3, velocity: Vector3) -> Self {
        Self { position, velocity }
    }

    /// Explicit forward-Euler step.
    pub fn integrate(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }
}

/// Stable identifier for a bogey, exposed to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BogeyId(pub u32);

impl std::fmt::Display for BogeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bogey-{}", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames advanced so far.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
    /// Delta applied on the most recent frame.
    pub last_delta_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
        self.last_delta_secs = dt;
    }
}
