//! Throttle to target-speed table.
//!
//! Breakpoints are interpolated linearly. Throttle settings outside the
//! table extrapolate along the first or last segment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rio_core::units::knots_to_mps;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlightModelError {
    #[error("throttle table needs at least two breakpoints, got {0}")]
    TooFewBreakpoints(usize),
    #[error("breakpoint {index} is not finite")]
    NonFinite { index: usize },
    #[error("throttle must strictly increase: breakpoint {index} has {throttle} after {previous}")]
    NonIncreasingThrottle {
        index: usize,
        throttle: f64,
        previous: f64,
    },
    #[error("throttle envelope [{min}, {max}] is empty")]
    EmptyEnvelope { min: f64, max: f64 },
}

/// One (throttle, speed) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub throttle: f64,
    pub speed_kts: f64,
}

impl Breakpoint {
    pub const fn new(throttle: f64, speed_kts: f64) -> Self {
        Self {
            throttle,
            speed_kts,
        }
    }
}

const REFERENCE_TABLE: [Breakpoint; 8] = [
    Breakpoint::new(0.55, 150.0),
    Breakpoint::new(0.60, 200.0),
    Breakpoint::new(0.70, 300.0),
    Breakpoint::new(0.80, 400.0),
    Breakpoint::new(0.90, 500.0),
    Breakpoint::new(1.00, 600.0),
    Breakpoint::new(1.10, 800.0),
    Breakpoint::new(1.20, 1100.0),
];

/// Validated, strictly increasing throttle table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")]
pub struct ThrottleTable {
    breakpoints: Vec<Breakpoint>,
}

impl ThrottleTable {
    pub fn new(breakpoints: Vec<Breakpoint>) -> Result<Self, FlightModelError> {
        if breakpoints.len() < 2 {
            return Err(FlightModelError::TooFewBreakpoints(breakpoints.len()));
        }
        for (index, bp) in breakpoints.iter().enumerate() {
            if !bp.throttle.is_finite() || !bp.speed_kts.is_finite() {
                return Err(FlightModelError::NonFinite { index });
            }
        }
        for (index, pair) in breakpoints.windows(2).enumerate() {
            if pair[1].throttle <= pair[0].throttle {
                return Err(FlightModelError::NonIncreasingThrottle {
                    index: index + 1,
                    throttle: pair[1].throttle,
                    previous: pair[0].throttle,
                });
            }
        }
        Ok(Self { breakpoints })
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Target speed in knots for a throttle setting.
    pub fn target_speed_kts(&self, throttle: f64) -> f64 {
        let last = self.breakpoints.len() - 1;
        let mut i = 1;
        while i < last && self.breakpoints[i].throttle < throttle {
            i += 1;
        }

        let lo = self.breakpoints[i - 1];
        let hi = self.breakpoints[i];
        let t = (throttle - lo.throttle) / (hi.throttle - lo.throttle);
        lo.speed_kts * (1.0 - t) + hi.speed_kts * t
    }

    /// Target speed in m/s for a throttle setting.
    pub fn target_speed_mps(&self, throttle: f64) -> f64 {
        knots_to_mps(self.target_speed_kts(throttle))
    }
}

impl Default for ThrottleTable {
    fn default() -> Self {
        Self {
            breakpoints: REFERENCE_TABLE.to_vec(),
        }
    }
}

impl TryFrom<Vec<Breakpoint>> for ThrottleTable {
    type Error = FlightModelError;

    fn try_from(breakpoints: Vec<Breakpoint>) -> Result<Self, Self::Error> {
        Self::new(breakpoints)
    }
}

impl From<ThrottleTable> for Vec<Breakpoint> {
    fn from(table: ThrottleTable) -> Self {
        table.breakpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table_is_valid() {
        assert!(ThrottleTable::new(REFERENCE_TABLE.to_vec()).is_ok());
    }

    #[test]
    fn test_exact_breakpoints() {
        let table = ThrottleTable::default();
        for bp in table.breakpoints() {
            let speed = table.target_speed_kts(bp.throttle);
            assert!(
                (speed - bp.speed_kts).abs() < 1e-9,
                "At throttle {} expected {} kt, got {}",
                bp.throttle,
                bp.speed_kts,
                speed
            );
        }
    }

    #[test]
    fn test_midpoint_is_mean() {
        let table = ThrottleTable::default();
        assert!((table.target_speed_kts(0.75) - 350.0).abs() < 1e-9);
        assert!((table.target_speed_kts(1.15) - 950.0).abs() < 1e-9);
    }

    #[test]
    fn test_extrapolates_past_ends() {
        let table = ThrottleTable::default();
        assert!((table.target_speed_kts(0.50) - 100.0).abs() < 1e-9);
        assert!((table.target_speed_kts(1.30) - 1400.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_malformed_tables() {
        assert_eq!(
            ThrottleTable::new(vec![Breakpoint::new(0.5, 100.0)]),
            Err(FlightModelError::TooFewBreakpoints(1))
        );
        assert!(matches!(
            ThrottleTable::new(vec![
                Breakpoint::new(0.5, 100.0),
                Breakpoint::new(0.7, 200.0),
                Breakpoint::new(0.7, 300.0),
            ]),
            Err(FlightModelError::NonIncreasingThrottle { index: 2, .. })
        ));
        assert!(matches!(
            ThrottleTable::new(vec![
                Breakpoint::new(0.5, f64::NAN),
                Breakpoint::new(0.7, 200.0),
            ]),
            Err(FlightModelError::NonFinite { index: 0 })
        ));
    }
}
