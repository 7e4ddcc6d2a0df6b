//! Checklist state machine.
//!
//! A tutorial is an ordered list of stages; a stage is an ordered list of
//! conditions. Each condition pairs a task (display text) with a check
//! (pure predicate). Text is rendered separately from evaluation.

use serde::{Deserialize, Serialize};

use rio_core::constants::STAGE_FREEZE_SECS;
use rio_core::enums::ConditionState;
use rio_core::geometry::{normalize_aspect, wrap_heading, BraaReport};
use rio_core::state::ConditionView;
use rio_core::units::m_to_feet;

use crate::tutorials::Tutorial;

/// Own-ship values some checks consult besides the BRAA report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnShipStatus {
    pub roll_deg: f64,
    pub altitude_m: f64,
    pub speed_mps: f64,
    /// Some contact is hooked.
    pub hooked: bool,
}

/// Everything a check may read on one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckInput {
    /// Geometry of the tracked bogey.
    pub report: BraaReport,
    pub own: OwnShipStatus,
}

/// Display text of a condition. Some tasks quote live geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Task {
    TurnToBearing,
    RollOut,
    MatchAltitude,
    HookTarget,
    MatchReciprocalHeading,
    IncreaseSpeed { knots: f64 },
    MaintainTaAt { ta_deg: f64, range_nm: f64 },
    MaintainTa { ta_deg: f64 },
    AchieveTa { ta_deg: f64 },
    ApproachTo { range_nm: f64 },
    ApproachWithin { range_nm: f64 },
    PurePursuit,
    ReduceClosure { knots: f64 },
    MatchSpeed,
    TurnToGimbalLimit,
    CollisionCourse { ata_deg: f64 },
    Success,
}

impl Task {
    pub fn render(&self, report: &BraaReport) -> String {
        match *self {
            Task::TurnToBearing => format!("Turn to bogey bearing {}", report.bearing_deg.round()),
            Task::RollOut => "Roll out on bearing".to_string(),
            Task::MatchAltitude => {
                let feet = (m_to_feet(report.altitude_m) / 1000.0).round() * 1000.0;
                format!("Match bogey altitude {feet}")
            }
            Task::HookTarget => "Hook (select) the target".to_string(),
            Task::MatchReciprocalHeading => format!(
                "Match reciprocal bogey heading {}",
                wrap_heading(report.bogey_heading_deg - 180.0).round()
            ),
            Task::IncreaseSpeed { knots } => {
                format!("Increase speed to {knots}+ for high-speed intercept")
            }
            Task::MaintainTaAt { ta_deg, range_nm } => {
                format!("Maintain TA of {ta_deg}±2° at {range_nm} nm")
            }
            Task::MaintainTa { ta_deg } => format!("Maintain TA of {ta_deg}±2°"),
            Task::AchieveTa { ta_deg } => format!("Achieve TA of {ta_deg}±2°"),
            Task::ApproachTo { range_nm } => format!("Approach to {range_nm} nm"),
            Task::ApproachWithin { range_nm } => format!("Approach within {range_nm} nm"),
            Task::PurePursuit => "Go pure pursuit (point nose on target)".to_string(),
            Task::ReduceClosure { knots } => format!("Reduce closure to <{knots} kts"),
            Task::MatchSpeed => "Match bogey speed".to_string(),
            Task::TurnToGimbalLimit => "Turn right until bogey at radar gimbal limit".to_string(),
            Task::CollisionCourse { ata_deg } => {
                format!("Set collision course (ATA/bearing {ata_deg}±2°)")
            }
            Task::Success => "Success!".to_string(),
        }
    }
}

/// Pure predicate over a [`CheckInput`]. Comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Check {
    /// `|ATA| < max_deg`
    AtaWithin { max_deg: f64 },
    /// `||ATA| - ata_deg| < tolerance_deg`
    AtaMagnitude { ata_deg: f64, tolerance_deg: f64 },
    /// `|ATA - ata_deg| < tolerance_deg`
    AtaNear { ata_deg: f64, tolerance_deg: f64 },
    /// `||TA| - ta_deg| < tolerance_deg`
    TaMagnitude { ta_deg: f64, tolerance_deg: f64 },
    /// `|TA - ta_deg| < tolerance_deg`
    TaNear { ta_deg: f64, tolerance_deg: f64 },
    /// `|own roll| < max_deg`
    RollWithin { max_deg: f64 },
    /// `|bogey altitude - own altitude| < tolerance_m`
    AltitudeMatch { tolerance_m: f64 },
    Hooked,
    /// Own heading within `tolerance_deg` of the bogey's reciprocal.
    ReciprocalHeading { tolerance_deg: f64 },
    /// `own speed >= min_mps`
    SpeedAtLeast { min_mps: f64 },
    /// `|own speed - bogey speed| < tolerance_mps`
    SpeedMatch { tolerance_mps: f64 },
    /// `slant range < max_m`
    SlantRangeBelow { max_m: f64 },
    /// `|closure| < max_mps`, either closing or opening
    ClosureBelow { max_mps: f64 },
    Never,
}

impl Check {
    pub fn evaluate(&self, input: &CheckInput) -> bool {
        let r = &input.report;
        let own = &input.own;
        match *self {
            Check::AtaWithin { max_deg } => r.ata_deg.abs() < max_deg,
            Check::AtaMagnitude {
                ata_deg,
                tolerance_deg,
            } => (r.ata_deg.abs() - ata_deg).abs() < tolerance_deg,
            Check::AtaNear {
                ata_deg,
                tolerance_deg,
            } => (r.ata_deg - ata_deg).abs() < tolerance_deg,
            Check::TaMagnitude {
                ta_deg,
                tolerance_deg,
            } => (r.ta_deg.abs() - ta_deg).abs() < tolerance_deg,
            Check::TaNear {
                ta_deg,
                tolerance_deg,
            } => (r.ta_deg - ta_deg).abs() < tolerance_deg,
            Check::RollWithin { max_deg } => own.roll_deg.abs() < max_deg,
            Check::AltitudeMatch { tolerance_m } => {
                (r.altitude_m - own.altitude_m).abs() < tolerance_m
            }
            Check::Hooked => own.hooked,
            Check::ReciprocalHeading { tolerance_deg } => {
                normalize_aspect(r.own_heading_deg - (r.bogey_heading_deg - 180.0)).abs()
                    < tolerance_deg
            }
            Check::SpeedAtLeast { min_mps } => own.speed_mps >= min_mps,
            Check::SpeedMatch { tolerance_mps } => {
                (own.speed_mps - r.bogey_speed_mps).abs() < tolerance_mps
            }
            Check::SlantRangeBelow { max_m } => r.slant_range_m < max_m,
            Check::ClosureBelow { max_mps } => r.closure_mps.abs() < max_mps,
            Check::Never => false,
        }
    }
}

/// One checklist line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub task: Task,
    pub check: Check,
    /// Only evaluated when every earlier condition in the stage passed.
    pub conditional: bool,
}

impl Condition {
    pub const fn new(task: Task, check: Check) -> Self {
        Self {
            task,
            check,
            conditional: false,
        }
    }

    pub const fn conditional(task: Task, check: Check) -> Self {
        Self {
            task,
            check,
            conditional: true,
        }
    }
}

/// Evaluate one stage in order. Returns the per-condition states and whether
/// every reached condition passed.
///
/// A conditional entry reached after a failure stops the walk; it and every
/// later entry stay `NotReached`.
pub fn evaluate_stage(stage: &[Condition], input: &CheckInput) -> (Vec<ConditionState>, bool) {
    let mut states = vec![ConditionState::NotReached; stage.len()];
    let mut all_satisfied = true;

    for (state, condition) in states.iter_mut().zip(stage) {
        if condition.conditional && !all_satisfied {
            break;
        }
        let satisfied = condition.check.evaluate(input);
        all_satisfied &= satisfied;
        *state = if satisfied {
            ConditionState::Satisfied
        } else {
            ConditionState::Unsatisfied
        };
    }

    (states, all_satisfied)
}

/// Outcome of one frame of checklist evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Holding after an advance; no checks ran.
    Frozen,
    /// Checks ran. `advanced` is set when the stage completed.
    Evaluated { advanced: bool },
}

/// Progress through one tutorial.
#[derive(Debug, Clone)]
pub struct ChecklistRun {
    tutorial: Tutorial,
    stage: usize,
    freeze_remaining: f64,
    display: Vec<ConditionView>,
}

impl ChecklistRun {
    pub fn new(tutorial: Tutorial) -> Self {
        Self {
            tutorial,
            stage: 0,
            freeze_remaining: 0.0,
            display: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.tutorial.title
    }

    pub fn stage(&self) -> usize {
        self.stage
    }

    pub fn stage_count(&self) -> usize {
        self.tutorial.stages.len()
    }

    pub fn is_frozen(&self) -> bool {
        self.freeze_remaining > 0.0
    }

    pub fn is_final_stage(&self) -> bool {
        self.stage + 1 >= self.stage_count()
    }

    /// Lines from the most recent evaluation. While frozen these show the
    /// just-completed stage.
    pub fn conditions(&self) -> &[ConditionView] {
        &self.display
    }

    /// Run one frame. `delta` counts down an active freeze.
    pub fn evaluate(&mut self, delta: f64, input: &CheckInput) -> Evaluation {
        if self.freeze_remaining > 0.0 {
            self.freeze_remaining -= delta;
            return Evaluation::Frozen;
        }

        let Some(stage) = self.tutorial.stages.get(self.stage) else {
            return Evaluation::Evaluated { advanced: false };
        };

        let (states, all_satisfied) = evaluate_stage(stage, input);
        self.display = stage
            .iter()
            .zip(states)
            .map(|(condition, state)| ConditionView {
                text: condition.task.render(&input.report),
                state,
            })
            .collect();

        let advanced = all_satisfied && !self.is_final_stage();
        if advanced {
            self.stage += 1;
            self.freeze_remaining = STAGE_FREEZE_SECS;
        }
        Evaluation::Evaluated { advanced }
    }
}
