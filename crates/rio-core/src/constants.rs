//! Simulation constants and tuning parameters.

// --- Frame timing ---

/// Default cap on a single frame delta (seconds).
pub const DEFAULT_MAX_FRAME_DELTA: f64 = 0.25;

/// Nominal host frame rate (Hz).
pub const DEFAULT_FRAME_RATE: u32 = 60;

// --- Antenna ---

/// Lowest antenna elevation (degrees).
pub const ANTENNA_MIN_ELEVATION: f64 = -80.0;

/// Highest antenna elevation (degrees).
pub const ANTENNA_MAX_ELEVATION: f64 = 60.0;

/// Mechanical azimuth gimbal limit, either side of the nose (degrees).
pub const ANTENNA_GIMBAL_LIMIT: f64 = 65.0;

/// Hard sensor range limit (nautical miles).
pub const RADAR_MAX_RANGE_NM: f64 = 200.0;

// --- Continuous slew ---

/// Azimuth increment per slew repeat (degrees).
pub const AZIMUTH_SLEW_STEP: f64 = 0.6;

/// Azimuth slew repeat interval (milliseconds).
pub const AZIMUTH_SLEW_INTERVAL_MS: u64 = 50;

/// Elevation increment per slew repeat (degrees).
pub const ELEVATION_SLEW_STEP: f64 = 0.2;

/// Elevation slew repeat interval (milliseconds).
pub const ELEVATION_SLEW_INTERVAL_MS: u64 = 100;

// --- Scenario ---

/// Time the checklist holds on a completed stage before evaluating the next (seconds).
pub const STAGE_FREEZE_SECS: f64 = 1.5;

// --- Radio ---

pub const AWACS_CALLSIGN: &str = "Overlord";
pub const PLAYER_CALLSIGN: &str = "Sundown 1-1";

/// Display duration for scenario introductions and contact calls (seconds).
pub const LONG_CALL_SECS: f64 = 5.0;

/// Display duration for acknowledgements (seconds).
pub const SHORT_CALL_SECS: f64 = 1.5;

// --- Navigation ---

/// Reference latitude of the simulation origin (Mariana Islands).
pub const ORIGIN_LATITUDE: f64 = 15.0979;

/// Reference longitude of the simulation origin.
pub const ORIGIN_LONGITUDE: f64 = 145.6739;

/// Meters per degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 40_075_017.0 / 360.0;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
