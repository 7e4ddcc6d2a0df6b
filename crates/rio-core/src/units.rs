//! Unit conversions between the SI units used internally and the
//! aviation units used in pilot-facing text.
//!
//! All helpers are exact linear scalings.

/// Meters per second in one knot.
pub const MPS_PER_KNOT: f64 = 0.514444;

/// Meters in one nautical mile.
pub const METERS_PER_NM: f64 = 1852.0;

/// Meters in one foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg / 180.0 * std::f64::consts::PI
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

pub fn knots_to_mps(knots: f64) -> f64 {
    knots * MPS_PER_KNOT
}

pub fn mps_to_knots(mps: f64) -> f64 {
    mps / MPS_PER_KNOT
}

pub fn nm_to_m(nm: f64) -> f64 {
    nm * METERS_PER_NM
}

pub fn m_to_nm(m: f64) -> f64 {
    m / METERS_PER_NM
}

pub fn feet_to_m(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

pub fn m_to_feet(m: f64) -> f64 {
    m / METERS_PER_FOOT
}

/// Round a value in feet to the nearest multiple of `step` feet.
pub fn round_feet(feet: f64, step: f64) -> f64 {
    (feet / step).round() * step
}
