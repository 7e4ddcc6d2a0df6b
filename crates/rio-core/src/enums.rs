//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Bank-angle presets, ordered from hardest left to hardest right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollPreset {
    LeftBreak,
    LeftHard,
    LeftStandard,
    #[default]
    Steady,
    RightStandard,
    RightHard,
    RightBreak,
}

impl RollPreset {
    pub const ALL: [RollPreset; 7] = [
        RollPreset::LeftBreak,
        RollPreset::LeftHard,
        RollPreset::LeftStandard,
        RollPreset::Steady,
        RollPreset::RightStandard,
        RollPreset::RightHard,
        RollPreset::RightBreak,
    ];

    /// Commanded bank angle in degrees (negative = left wing down).
    pub fn bank_deg(self) -> f64 {
        match self {
            RollPreset::LeftBreak => -60.0,
            RollPreset::LeftHard => -45.0,
            RollPreset::LeftStandard => -30.0,
            RollPreset::Steady => 0.0,
            RollPreset::RightStandard => 30.0,
            RollPreset::RightHard => 45.0,
            RollPreset::RightBreak => 60.0,
        }
    }

    /// The preset `steps` positions away, or `None` past either end.
    pub fn step(self, steps: i32) -> Option<RollPreset> {
        let index = Self::ALL.iter().position(|p| *p == self)? as i32 + steps;
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// RIO call acknowledging the preset.
    pub fn call(self) -> &'static str {
        match self {
            RollPreset::LeftBreak => "break left!",
            RollPreset::LeftHard => "left hard.",
            RollPreset::LeftStandard => "left standard.",
            RollPreset::Steady => "steady.",
            RollPreset::RightStandard => "right standard.",
            RollPreset::RightHard => "right hard.",
            RollPreset::RightBreak => "break right!",
        }
    }
}

/// Altitude changes relative to the current altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AltitudePreset {
    Climb10k,
    Climb5k,
    Climb1k,
    Hold,
    Descend1k,
    Descend5k,
    Descend10k,
}

impl AltitudePreset {
    /// Altitude change in feet.
    pub fn delta_feet(self) -> f64 {
        match self {
            AltitudePreset::Climb10k => 10_000.0,
            AltitudePreset::Climb5k => 5_000.0,
            AltitudePreset::Climb1k => 1_000.0,
            AltitudePreset::Hold => 0.0,
            AltitudePreset::Descend1k => -1_000.0,
            AltitudePreset::Descend5k => -5_000.0,
            AltitudePreset::Descend10k => -10_000.0,
        }
    }

    pub fn call(self) -> &'static str {
        match self {
            AltitudePreset::Climb10k => "climb 10,000.",
            AltitudePreset::Climb5k => "climb 5,000.",
            AltitudePreset::Climb1k => "climb 1,000.",
            AltitudePreset::Hold => "hold current altitude.",
            AltitudePreset::Descend1k => "descend 1,000.",
            AltitudePreset::Descend5k => "descend 5,000.",
            AltitudePreset::Descend10k => "descend 10,000.",
        }
    }
}

/// Antenna azimuth half-width selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AzimuthScan {
    Ten,
    Twenty,
    #[default]
    Forty,
    SixtyFive,
}

impl AzimuthScan {
    pub fn half_width_deg(self) -> f64 {
        match self {
            AzimuthScan::Ten => 10.0,
            AzimuthScan::Twenty => 20.0,
            AzimuthScan::Forty => 40.0,
            AzimuthScan::SixtyFive => 65.0,
        }
    }
}

/// Elevation scan pattern (number of bars).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElevationBars {
    One,
    Two,
    #[default]
    Four,
    Eight,
}

impl ElevationBars {
    /// Total vertical coverage of the pattern in degrees.
    pub fn height_deg(self) -> f64 {
        match self {
            ElevationBars::One => 2.3,
            ElevationBars::Two => 3.6,
            ElevationBars::Four => 6.3,
            ElevationBars::Eight => 11.5,
        }
    }
}

/// Display range selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadarRange {
    Nm25,
    Nm50,
    #[default]
    Nm100,
    Nm200,
}

impl RadarRange {
    pub fn nm(self) -> f64 {
        match self {
            RadarRange::Nm25 => 25.0,
            RadarRange::Nm50 => 50.0,
            RadarRange::Nm100 => 100.0,
            RadarRange::Nm200 => 200.0,
        }
    }
}

/// Tactical display stabilization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Own-ship at bottom center, nose up.
    #[default]
    AircraftStabilized,
    /// North up, own-ship centered.
    GroundStabilized,
    /// Aircraft-stabilized with an artificial horizon.
    Attack,
}

/// Scenario catalog identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioId {
    Intercept100,
    Intercept80,
    Intercept60,
    Intercept40,
    Intercept20,
    ZeroCutTutorial,
    KickAndBuildTutorial,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 7] = [
        ScenarioId::Intercept100,
        ScenarioId::Intercept80,
        ScenarioId::Intercept60,
        ScenarioId::Intercept40,
        ScenarioId::Intercept20,
        ScenarioId::ZeroCutTutorial,
        ScenarioId::KickAndBuildTutorial,
    ];
}

/// Brevity call for target aspect, from true-aspect-angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectCall {
    Hot,
    Flanking,
    Beaming,
    Cold,
}

impl AspectCall {
    pub fn from_ta(ta_deg: f64) -> Self {
        let ta = ta_deg.abs();
        if ta < 30.0 {
            AspectCall::Hot
        } else if ta < 60.0 {
            AspectCall::Flanking
        } else if ta < 120.0 {
            AspectCall::Beaming
        } else {
            AspectCall::Cold
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AspectCall::Hot => "hot",
            AspectCall::Flanking => "flanking",
            AspectCall::Beaming => "beaming",
            AspectCall::Cold => "cold",
        }
    }
}

/// Evaluation result of one checklist condition on the latest frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionState {
    Satisfied,
    Unsatisfied,
    /// Evaluation stopped before this condition.
    #[default]
    NotReached,
}

/// Radio station originating a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Station {
    /// Airborne early-warning controller.
    Awacs,
    /// Radar intercept officer (the player's back-seater voice).
    Rio,
}
