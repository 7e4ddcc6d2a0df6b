//! Proportional-integral-derivative controller with output and rate limits.

use serde::{Deserialize, Serialize};

/// Gains and limits for one control loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidGains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    /// Output is clamped to `[-max_output, max_output]`.
    pub max_output: f64,
    /// Largest change between consecutive outputs.
    pub max_change: f64,
}

impl PidGains {
    pub const fn new(kp: f64, ki: f64, kd: f64, max_output: f64, max_change: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            max_output,
            max_change,
        }
    }
}

/// A single control loop.
///
/// The integral term is not limited; it keeps accumulating while the output
/// is saturated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PidController {
    gains: PidGains,
    target: f64,
    integral: f64,
    prev_error: f64,
    output: f64,
}

impl PidController {
    pub fn new(gains: PidGains) -> Self {
        Self {
            gains,
            target: 0.0,
            integral: 0.0,
            prev_error: 0.0,
            output: 0.0,
        }
    }

    pub fn with_target(gains: PidGains, target: f64) -> Self {
        let mut pid = Self::new(gains);
        pid.target = target;
        pid
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Most recent output.
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Advance the loop by `dt` seconds against the measured value.
    ///
    /// `dt` must be positive; the derivative term divides by it.
    pub fn update(&mut self, dt: f64, measured: f64) -> f64 {
        debug_assert!(dt > 0.0, "PID update requires a positive dt, got {dt}");

        let error = self.target - measured;
        self.integral += error * dt;
        let derivative = (error - self.prev_error) / dt;
        self.prev_error = error;

        let raw = self.gains.kp * error + self.gains.ki * self.integral + self.gains.kd * derivative;
        let bounded = raw.clamp(-self.gains.max_output, self.gains.max_output);
        let change = (bounded - self.output).clamp(-self.gains.max_change, self.gains.max_change);

        self.output += change;
        self.output
    }
}
