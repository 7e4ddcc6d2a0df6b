//! Own-ship aircraft: throttle, speed, attitude and position integration.
//!
//! Altitude, speed and roll are each held by a PID loop. The loops run at a
//! decimated rate: elapsed time accumulates until it exceeds
//! `control_decimation` times the current frame delta, then all three loops
//! update once with the accumulated time.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use rio_core::enums::RollPreset;
use rio_core::geometry::{velocity_from_attitude, wrap_heading};
use rio_core::types::{Kinematics, Vector3};
use rio_core::units::{deg_to_rad, feet_to_m, knots_to_mps, mps_to_knots};

use crate::flight_model::{FlightModelError, ThrottleTable};
use crate::pid::{PidController, PidGains};

/// Own-ship state at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialFlightState {
    pub heading_deg: f64,
    pub altitude_m: f64,
    pub speed_mps: f64,
    pub throttle: f64,
}

impl Default for InitialFlightState {
    fn default() -> Self {
        Self {
            heading_deg: 0.0,
            altitude_m: feet_to_m(25_000.0),
            speed_mps: knots_to_mps(350.0),
            throttle: 0.80,
        }
    }
}

/// Flight-model tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Altitude error (m) to pitch (deg).
    pub altitude_pid: PidGains,
    /// Speed error (m/s) to throttle change.
    pub speed_pid: PidGains,
    /// Roll error (deg) to roll change (deg).
    pub roll_pid: PidGains,
    pub throttle_min: f64,
    pub throttle_max: f64,
    pub throttle_table: ThrottleTable,
    /// Coordinated-turn constant: deg/s = K / knots * tan(roll).
    pub turn_constant: f64,
    /// Speed gained per frame per m/s of speed error.
    pub acceleration_gain: f64,
    /// Pitch (deg) divided by this is subtracted from acceleration.
    pub pitch_drag_divisor: f64,
    /// Width of the symmetric uniform noise band added to acceleration.
    pub acceleration_noise: f64,
    /// Control loops run once accumulated time exceeds this many frame deltas.
    pub control_decimation: f64,
    pub initial: InitialFlightState,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            altitude_pid: PidGains::new(1.0, 0.0, 0.15, 20.0, 1.0),
            speed_pid: PidGains::new(0.0001, 0.0, 0.0, 0.01, 0.001),
            roll_pid: PidGains::new(0.1, 0.0, 0.0, 5.0, 0.1),
            throttle_min: 0.6,
            throttle_max: 1.2,
            throttle_table: ThrottleTable::default(),
            turn_constant: 1091.0,
            acceleration_gain: 0.01,
            pitch_drag_divisor: 20.0,
            acceleration_noise: 0.1,
            control_decimation: 3.0,
            initial: InitialFlightState::default(),
        }
    }
}

impl FlightConfig {
    /// Check the throttle envelope. The table validates itself on construction.
    pub fn validate(&self) -> Result<(), FlightModelError> {
        if !(self.throttle_min < self.throttle_max) {
            return Err(FlightModelError::EmptyEnvelope {
                min: self.throttle_min,
                max: self.throttle_max,
            });
        }
        Ok(())
    }
}

/// The player's aircraft.
#[derive(Debug, Clone)]
pub struct Aircraft {
    config: FlightConfig,
    kinematics: Kinematics,
    heading_deg: f64,
    pitch_deg: f64,
    roll_deg: f64,
    speed_mps: f64,
    throttle: f64,
    roll_preset: RollPreset,
    altitude_pid: PidController,
    speed_pid: PidController,
    roll_pid: PidController,
    control_accumulator: f64,
}

impl Aircraft {
    pub fn new(config: FlightConfig) -> Result<Self, FlightModelError> {
        config.validate()?;

        let init = config.initial;
        let throttle = init.throttle.clamp(config.throttle_min, config.throttle_max);
        let velocity = velocity_from_attitude(init.heading_deg, 0.0, init.speed_mps);

        Ok(Self {
            altitude_pid: PidController::with_target(config.altitude_pid, init.altitude_m),
            speed_pid: PidController::with_target(config.speed_pid, init.speed_mps),
            roll_pid: PidController::with_target(config.roll_pid, 0.0),
            kinematics: Kinematics::new(Vector3::new(0.0, 0.0, init.altitude_m), velocity),
            heading_deg: wrap_heading(init.heading_deg),
            pitch_deg: 0.0,
            roll_deg: 0.0,
            speed_mps: init.speed_mps,
            throttle,
            roll_preset: RollPreset::Steady,
            control_accumulator: 0.0,
            config,
        })
    }

    // --- Setters (retarget the loops; effect appears at the next control update) ---

    pub fn set_altitude(&mut self, altitude_m: f64) {
        self.altitude_pid.set_target(altitude_m);
    }

    pub fn set_speed(&mut self, speed_mps: f64) {
        self.speed_pid.set_target(speed_mps);
    }

    pub fn set_roll(&mut self, roll_deg: f64) {
        self.roll_pid.set_target(roll_deg);
    }

    pub fn set_roll_preset(&mut self, preset: RollPreset) {
        self.roll_preset = preset;
        self.set_roll(preset.bank_deg());
    }

    // --- Accessors ---

    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    pub fn position(&self) -> Vector3 {
        self.kinematics.position
    }

    pub fn velocity(&self) -> Vector3 {
        self.kinematics.velocity
    }

    pub fn altitude_m(&self) -> f64 {
        self.kinematics.position.z
    }

    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    pub fn pitch_deg(&self) -> f64 {
        self.pitch_deg
    }

    pub fn roll_deg(&self) -> f64 {
        self.roll_deg
    }

    pub fn speed_mps(&self) -> f64 {
        self.speed_mps
    }

    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    pub fn roll_preset(&self) -> RollPreset {
        self.roll_preset
    }

    pub fn altitude_target(&self) -> f64 {
        self.altitude_pid.target()
    }

    pub fn speed_target(&self) -> f64 {
        self.speed_pid.target()
    }

    pub fn roll_target(&self) -> f64 {
        self.roll_pid.target()
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    /// Advance the aircraft by `delta` seconds.
    pub fn update<R: Rng + ?Sized>(&mut self, delta: f64, rng: &mut R) {
        if delta <= 0.0 {
            return;
        }

        self.control_accumulator += delta;
        if self.control_accumulator > self.config.control_decimation * delta {
            self.run_control_loops();
        }

        self.speed_mps += self.acceleration(rng);

        let turn_rate = self.config.turn_constant / mps_to_knots(self.speed_mps)
            * deg_to_rad(self.roll_deg).tan();
        self.heading_deg = wrap_heading(self.heading_deg + delta * turn_rate);

        self.kinematics.velocity =
            velocity_from_attitude(self.heading_deg, self.pitch_deg, self.speed_mps);
        self.kinematics.integrate(delta);
    }

    fn run_control_loops(&mut self) {
        let dt = self.control_accumulator;

        self.pitch_deg = self.altitude_pid.update(dt, self.kinematics.position.z);

        self.throttle += self.speed_pid.update(dt, self.speed_mps);
        self.throttle = self
            .throttle
            .clamp(self.config.throttle_min, self.config.throttle_max);

        self.roll_deg += self.roll_pid.update(dt, self.roll_deg);

        self.control_accumulator = 0.0;
        debug!(
            dt,
            pitch = self.pitch_deg,
            throttle = self.throttle,
            roll = self.roll_deg,
            "Control loop update"
        );
    }

    /// Per-frame speed change. Not limited.
    fn acceleration<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let target = self.config.throttle_table.target_speed_mps(self.throttle);
        let noise = (rng.gen::<f64>() - 0.5) * self.config.acceleration_noise;
        self.config.acceleration_gain * (target - self.speed_mps)
            - self.pitch_deg / self.config.pitch_drag_divisor
            + noise
    }
}
