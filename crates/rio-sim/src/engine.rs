//! Simulation engine.
//!
//! `SimulationEngine` owns the own-ship, the hecs world of bogeys, the radar
//! and the active scenario. It processes queued operator commands, runs the
//! systems in a fixed order and produces `SimSnapshot`s. Headless, so the
//! same seed and the same frame deltas reproduce the same run.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use rio_core::commands::PlayerCommand;
use rio_core::constants::{DEFAULT_MAX_FRAME_DELTA, LONG_CALL_SECS, SHORT_CALL_SECS};
use rio_core::enums::{AspectCall, RollPreset, ScenarioId, Station};
use rio_core::error::SimError;
use rio_core::events::RadioCall;
use rio_core::geometry::braa;
use rio_core::radar::RadarState;
use rio_core::state::SimSnapshot;
use rio_core::types::{BogeyId, Kinematics, SimTime};
use rio_core::units::{feet_to_m, m_to_feet, m_to_nm, mps_to_knots, round_feet};
use rio_flight::{Aircraft, FlightConfig};

use crate::components::{Bogey, RadarContact};
use crate::scenario::{self, ActiveScenario};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Longer frame deltas are clamped to this (seconds).
    pub max_frame_delta_secs: f64,
    pub flight: FlightConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_frame_delta_secs: DEFAULT_MAX_FRAME_DELTA,
            flight: FlightConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    aircraft: Aircraft,
    radar: RadarState,
    hooked: Option<Entity>,
    scenario: Option<ActiveScenario>,
    next_bogey_id: u32,
    max_frame_delta_secs: f64,
    command_queue: VecDeque<PlayerCommand>,
    radio: Vec<RadioCall>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        if !(config.max_frame_delta_secs > 0.0 && config.max_frame_delta_secs.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "max_frame_delta_secs must be positive, got {}",
                config.max_frame_delta_secs
            )));
        }
        let aircraft =
            Aircraft::new(config.flight).map_err(|e| SimError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            aircraft,
            radar: RadarState::default(),
            hooked: None,
            scenario: None,
            next_bogey_id: 0,
            max_frame_delta_secs: config.max_frame_delta_secs,
            command_queue: VecDeque::new(),
            radio: Vec::new(),
        })
    }

    /// Queue a player command for processing at the start of the next frame.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `delta_secs` of wall-clock time and return
    /// the resulting snapshot.
    ///
    /// Queued commands are applied first. Non-positive deltas advance nothing.
    pub fn tick(&mut self, delta_secs: f64) -> SimSnapshot {
        self.process_commands();

        let dt = self.frame_delta(delta_secs);
        if dt > 0.0 {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let radio = std::mem::take(&mut self.radio);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.aircraft,
            &self.radar,
            self.hooked,
            self.scenario.as_ref(),
            radio,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    pub fn radar(&self) -> &RadarState {
        &self.radar
    }

    pub fn scenario(&self) -> Option<&ActiveScenario> {
        self.scenario.as_ref()
    }

    /// Id of the hooked bogey, if any.
    pub fn hooked_bogey(&self) -> Option<BogeyId> {
        self.hooked
            .and_then(|entity| self.world.get::<&Bogey>(entity).ok().map(|b| b.id))
    }

    /// Number of live bogeys.
    pub fn bogey_count(&self) -> usize {
        self.world.query::<&Bogey>().iter().count()
    }

    /// Hook a bogey. It must exist and be inside the scan volume as of the
    /// last radar pass.
    pub fn hook_bogey(&mut self, id: BogeyId) -> Result<(), SimError> {
        let entity = world_setup::find_bogey(&self.world, id).ok_or(SimError::UnknownBogey(id))?;
        let report = {
            let contact = self
                .world
                .get::<&RadarContact>(entity)
                .map_err(|_| SimError::UnknownBogey(id))?;
            if !contact.visible {
                return Err(SimError::BogeyNotVisible(id));
            }
            let kinematics = self
                .world
                .get::<&Kinematics>(entity)
                .map_err(|_| SimError::UnknownBogey(id))?;
            braa(self.aircraft.kinematics(), &kinematics)
        };

        self.hooked = Some(entity);
        info!(bogey = %id, "Contact hooked");
        self.rio_call(
            format!(
                "New radar contact, BRAA {}, {} miles, {} feet, {}.",
                report.bearing_deg.round(),
                m_to_nm(report.slant_range_m).round(),
                round_feet(m_to_feet(report.altitude_m), 1000.0),
                AspectCall::from_ta(report.ta_deg).as_str()
            ),
            LONG_CALL_SECS,
        );
        Ok(())
    }

    /// Spawn a bogey dead ahead at own altitude (for tests needing a visible contact).
    #[cfg(test)]
    pub fn spawn_bogey_ahead(&mut self, distance_m: f64, heading_deg: f64, speed_mps: f64) -> BogeyId {
        let own = *self.aircraft.kinematics();
        let (_, id) = world_setup::spawn_bogey(
            &mut self.world,
            &mut self.next_bogey_id,
            own.position,
            &world_setup::BogeySpawn {
                bearing_deg: self.aircraft.heading_deg(),
                distance_m,
                altitude_m: own.position.z,
                heading_deg,
                speed_mps,
            },
        );
        id
    }

    /// Clamp a wall-clock delta to the configured maximum.
    fn frame_delta(&self, delta_secs: f64) -> f64 {
        if !(delta_secs > 0.0) {
            return 0.0;
        }
        if delta_secs > self.max_frame_delta_secs {
            warn!(
                delta_secs,
                max = self.max_frame_delta_secs,
                "Frame delta clamped"
            );
            return self.max_frame_delta_secs;
        }
        delta_secs
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetAltitude { altitude_m } => {
                self.aircraft.set_altitude(altitude_m);
                let feet = m_to_feet(altitude_m).round();
                self.rio_call(format!("make your altitude {feet} feet."), SHORT_CALL_SECS);
            }
            PlayerCommand::SetAltitudePreset { preset } => {
                let target = self.aircraft.altitude_m() + feet_to_m(preset.delta_feet());
                self.aircraft.set_altitude(target);
                self.rio_call(preset.call().to_string(), SHORT_CALL_SECS);
            }
            PlayerCommand::SetSpeed { speed_mps } => {
                self.aircraft.set_speed(speed_mps);
                let knots = mps_to_knots(speed_mps).round();
                self.rio_call(format!("make your speed {knots} knots."), SHORT_CALL_SECS);
            }
            PlayerCommand::SetRollPreset { preset } => self.set_roll_preset(preset),
            PlayerCommand::StepRoll { steps } => match self.aircraft.roll_preset().step(steps) {
                Some(preset) => self.set_roll_preset(preset),
                None => debug!(steps, "Roll step past the last preset ignored"),
            },
            PlayerCommand::SlewAntenna {
                azimuth_deg,
                elevation_deg,
            } => {
                self.radar.slew(azimuth_deg, elevation_deg);
                self.radar.clamp_antenna();
            }
            PlayerCommand::CenterAntenna => self.radar.center(),
            PlayerCommand::SetAzimuthScan { scan } => {
                self.radar.azimuth_scan = scan;
                self.radar.clamp_antenna();
            }
            PlayerCommand::SetElevationBars { bars } => self.radar.bars = bars,
            PlayerCommand::SetRadarRange { range } => self.radar.range = range,
            PlayerCommand::SetDisplayMode { mode } => self.radar.display_mode = mode,
            PlayerCommand::HookBogey { bogey } => {
                if let Err(e) = self.hook_bogey(bogey) {
                    warn!(error = %e, "Hook rejected");
                }
            }
            PlayerCommand::Unhook => self.hooked = None,
            PlayerCommand::SelectScenario { scenario } => self.select_scenario(scenario),
            PlayerCommand::ClearScenario => self.clear_scenario(),
        }
    }

    fn set_roll_preset(&mut self, preset: RollPreset) {
        self.aircraft.set_roll_preset(preset);
        self.rio_call(preset.call().to_string(), SHORT_CALL_SECS);
    }

    /// Clean up any active scenario, then start `id`.
    fn select_scenario(&mut self, id: ScenarioId) {
        self.clear_scenario();

        let (active, intro) = scenario::start(
            &mut self.world,
            &mut self.rng,
            &mut self.next_bogey_id,
            self.aircraft.position(),
            id,
            self.time.elapsed_secs,
        );
        info!(scenario = %active.title, bogey = %active.tracked_id, "Scenario started");
        self.radio.push(intro);
        self.scenario = Some(active);

        // Give the new contact a radar picture before the next movement step.
        systems::radar::run(
            &mut self.world,
            &mut self.radar,
            self.aircraft.kinematics(),
            &mut self.hooked,
        );
    }

    /// Remove the active scenario and every bogey it created.
    fn clear_scenario(&mut self) {
        let Some(active) = self.scenario.take() else {
            return;
        };
        let removed = world_setup::clear_bogeys(&mut self.world);
        if let Some(entity) = self.hooked {
            if !self.world.contains(entity) {
                self.hooked = None;
            }
        }
        info!(scenario = %active.title, removed, "Scenario cleared");
    }

    fn rio_call(&mut self, text: String, duration_secs: f64) {
        self.radio.push(RadioCall {
            station: Station::Rio,
            text,
            duration_secs,
            sent_at_secs: self.time.elapsed_secs,
        });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Own-ship and bogey kinematics
        systems::movement::run(&mut self.world, &mut self.aircraft, &mut self.rng, dt);
        // 2. Antenna limits, gating, hook upkeep
        systems::radar::run(
            &mut self.world,
            &mut self.radar,
            self.aircraft.kinematics(),
            &mut self.hooked,
        );
        // 3. Tutorial checklist
        if let Some(active) = self.scenario.as_mut() {
            systems::scenario::run(&self.world, active, &self.aircraft, self.hooked.is_some(), dt);
        }
    }
}
