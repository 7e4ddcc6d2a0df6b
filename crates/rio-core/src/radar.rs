//! Mechanically scanned radar: antenna state, gimbal limits and the
//! scan-volume gate applied to BRAA reports.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{AzimuthScan, DisplayMode, ElevationBars, RadarRange};
use crate::geometry::BraaReport;
use crate::units::{deg_to_rad, m_to_feet, nm_to_m};

/// Antenna pointing and scan settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarState {
    /// Scan center relative to the nose (degrees, positive right).
    pub azimuth_deg: f64,
    /// Scan center above the horizon (degrees).
    pub elevation_deg: f64,
    pub azimuth_scan: AzimuthScan,
    pub bars: ElevationBars,
    /// Display range. Does not gate detection.
    pub range: RadarRange,
    pub display_mode: DisplayMode,
}

impl RadarState {
    /// Azimuth half-width in degrees.
    pub fn half_width_deg(&self) -> f64 {
        self.azimuth_scan.half_width_deg()
    }

    /// Vertical coverage of the selected bar pattern in degrees.
    pub fn scan_height_deg(&self) -> f64 {
        self.bars.height_deg()
    }

    /// Slew the antenna by signed increments. Limits are applied by [`Self::clamp_antenna`].
    pub fn slew(&mut self, azimuth_delta: f64, elevation_delta: f64) {
        self.azimuth_deg += azimuth_delta;
        self.elevation_deg += elevation_delta;
    }

    /// Return the antenna to boresight.
    pub fn center(&mut self) {
        self.azimuth_deg = 0.0;
        self.elevation_deg = 0.0;
    }

    /// Enforce mechanical limits: elevation within its stops and the whole
    /// azimuth scan within the gimbal limit.
    pub fn clamp_antenna(&mut self) {
        self.elevation_deg = self
            .elevation_deg
            .clamp(ANTENNA_MIN_ELEVATION, ANTENNA_MAX_ELEVATION);

        let half_width = self.half_width_deg();
        if self.azimuth_deg + half_width > ANTENNA_GIMBAL_LIMIT {
            self.azimuth_deg = ANTENNA_GIMBAL_LIMIT - half_width;
        }
        if self.azimuth_deg - half_width < -ANTENNA_GIMBAL_LIMIT {
            self.azimuth_deg = half_width - ANTENNA_GIMBAL_LIMIT;
        }
    }

    /// Whether a report lies inside the current scan volume. Bounds are inclusive.
    pub fn contains(&self, report: &BraaReport) -> bool {
        let half_width = self.half_width_deg();
        if report.ata_deg < self.azimuth_deg - half_width
            || report.ata_deg > self.azimuth_deg + half_width
        {
            return false;
        }

        let half_height = self.scan_height_deg() / 2.0;
        if report.vertical_aspect_deg < self.elevation_deg - half_height
            || report.vertical_aspect_deg > self.elevation_deg + half_height
        {
            return false;
        }

        report.slant_range_m <= nm_to_m(RADAR_MAX_RANGE_NM)
    }

    /// Altitude band covered at the display range, in thousands of feet
    /// `(high, low)`, for an antenna at `own_altitude_m`.
    pub fn elevation_coverage(&self, own_altitude_m: f64) -> (i32, i32) {
        let distance = nm_to_m(self.range.nm());
        let center = distance * deg_to_rad(self.elevation_deg).tan();
        let cone = distance * deg_to_rad(self.scan_height_deg() / 2.0).tan();
        let to_kft = |m: f64| (m_to_feet(m) / 1000.0).round() as i32;
        (
            to_kft(own_altitude_m + center + cone),
            to_kft(own_altitude_m + center - cone),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(ata: f64, va: f64, slant_nm: f64) -> BraaReport {
        BraaReport {
            ata_deg: ata,
            vertical_aspect_deg: va,
            slant_range_m: nm_to_m(slant_nm),
            ..Default::default()
        }
    }

    #[test]
    fn test_azimuth_boundary_inclusive() {
        let radar = RadarState {
            azimuth_deg: 10.0,
            ..Default::default()
        };
        let edge = radar.azimuth_deg + radar.half_width_deg();
        assert!(radar.contains(&report(edge, 0.0, 50.0)), "Edge should be inside");
        assert!(!radar.contains(&report(edge + 1.0, 0.0, 50.0)));

        let left_edge = radar.azimuth_deg - radar.half_width_deg();
        assert!(radar.contains(&report(left_edge, 0.0, 50.0)));
        assert!(!radar.contains(&report(left_edge - 1.0, 0.0, 50.0)));
    }

    #[test]
    fn test_elevation_gate_uses_bar_height() {
        let mut radar = RadarState::default();
        // Four bars: 6.3 degrees total.
        assert!(radar.contains(&report(0.0, 3.15, 50.0)));
        assert!(!radar.contains(&report(0.0, 3.2, 50.0)));

        radar.bars = ElevationBars::Eight;
        assert!(radar.contains(&report(0.0, 5.75, 50.0)));
        assert!(!radar.contains(&report(0.0, -5.8, 50.0)));

        radar.elevation_deg = -5.0;
        assert!(radar.contains(&report(0.0, -10.0, 50.0)));
    }

    #[test]
    fn test_sensor_range_limit() {
        let radar = RadarState {
            range: RadarRange::Nm25,
            ..Default::default()
        };
        // Display range does not gate; the 200 nm sensor limit does.
        assert!(radar.contains(&report(0.0, 0.0, 150.0)));
        assert!(radar.contains(&report(0.0, 0.0, 200.0)));
        assert!(!radar.contains(&report(0.0, 0.0, 200.5)));
    }

    #[test]
    fn test_clamp_antenna_limits() {
        let mut radar = RadarState {
            azimuth_deg: 50.0,
            elevation_deg: 75.0,
            ..Default::default()
        };
        radar.clamp_antenna();
        assert!((radar.azimuth_deg - 25.0).abs() < 1e-12);
        assert!((radar.elevation_deg - 60.0).abs() < 1e-12);

        radar.azimuth_deg = -70.0;
        radar.elevation_deg = -95.0;
        radar.clamp_antenna();
        assert!((radar.azimuth_deg + 25.0).abs() < 1e-12);
        assert!((radar.elevation_deg + 80.0).abs() < 1e-12);

        radar.azimuth_scan = AzimuthScan::SixtyFive;
        radar.azimuth_deg = 3.0;
        radar.clamp_antenna();
        assert!(radar.azimuth_deg.abs() < 1e-12, "65 degree scan pins azimuth to center");
    }

    #[test]
    fn test_elevation_coverage_symmetric_at_boresight() {
        let radar = RadarState::default();
        let (high, low) = radar.elevation_coverage(crate::units::feet_to_m(25_000.0));
        assert_eq!(high - 25, 25 - low);
        assert!(high > 25 && low < 25);
    }
}
