//! Intercept geometry: heading/aspect wrapping and the BRAA report.
//!
//! Angles are in degrees. Bearings and headings are compass angles
//! (0 = North, clockwise); aspects are signed, positive to the right.

use serde::{Deserialize, Serialize};

use crate::types::{Kinematics, Vector2, Vector3};
use crate::units::{deg_to_rad, rad_to_deg};

/// Wrap any angle into `[0, 360)`.
pub fn wrap_heading(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Normalize any angle into `(-180, 180]`.
pub fn normalize_aspect(deg: f64) -> f64 {
    let aspect = wrap_heading(deg);
    if aspect > 180.0 {
        aspect - 360.0
    } else {
        aspect
    }
}

/// Velocity vector for a body flying `heading_deg` at `pitch_deg` and `speed` m/s.
pub fn velocity_from_attitude(heading_deg: f64, pitch_deg: f64, speed: f64) -> Vector3 {
    let (sin_h, cos_h) = deg_to_rad(heading_deg).sin_cos();
    let (sin_p, cos_p) = deg_to_rad(pitch_deg).sin_cos();
    Vector3::new(speed * sin_h * cos_p, speed * cos_h * cos_p, speed * sin_p)
}

/// Compass heading of a velocity vector (radians, North = 0, clockwise).
fn heading_rad(velocity: &Vector3) -> f64 {
    velocity.x.atan2(velocity.y)
}

/// Bearing/range/altitude/aspect of a target as seen from own-ship.
///
/// Recomputed every tick; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BraaReport {
    /// Absolute bearing to the target, `[0, 360)`.
    pub bearing_deg: f64,
    /// Planar (map) distance in meters.
    pub range_m: f64,
    /// Full 3D distance in meters.
    pub slant_range_m: f64,
    /// Target altitude in meters.
    pub altitude_m: f64,
    /// Own heading derived from own velocity, `[0, 360)`.
    pub own_heading_deg: f64,
    /// Target-aspect-angle: bearing relative to own nose, positive right.
    pub ata_deg: f64,
    /// Target heading derived from its velocity, `[0, 360)`.
    pub bogey_heading_deg: f64,
    /// Target speed in m/s.
    pub bogey_speed_mps: f64,
    /// True-aspect-angle: own-ship as seen from the target's tail.
    pub ta_deg: f64,
    /// Rate of range decrease in m/s (positive = closing).
    pub closure_mps: f64,
    /// Elevation of the line of sight above own horizon.
    pub vertical_aspect_deg: f64,
    /// Offset from the target's reciprocal track in meters.
    pub lateral_separation_m: f64,
}

/// Compute the BRAA report of `target` relative to `own`.
///
/// Undefined (NaN bearing and aspects) when both positions coincide.
pub fn braa(own: &Kinematics, target: &Kinematics) -> BraaReport {
    let diff3 = target.position - own.position;
    let diff = Vector2::new(diff3.x, diff3.y);
    let range = diff.length();

    let bearing = diff.x.atan2(diff.y);
    let own_heading = heading_rad(&own.velocity);
    let bogey_heading = heading_rad(&target.velocity);
    let bogey_reciprocal = bogey_heading + std::f64::consts::PI;

    let own_closure = own.velocity.length() * (bearing - own_heading).cos();
    let bogey_closure = target.velocity.length() * (bearing - bogey_heading).cos();
    let vertical_aspect = diff3.z.atan2(range);

    BraaReport {
        bearing_deg: wrap_heading(rad_to_deg(bearing)),
        range_m: range,
        slant_range_m: diff3.length(),
        altitude_m: target.position.z,
        own_heading_deg: wrap_heading(rad_to_deg(own_heading)),
        ata_deg: normalize_aspect(rad_to_deg(bearing - own_heading)),
        bogey_heading_deg: wrap_heading(rad_to_deg(bogey_heading)),
        bogey_speed_mps: target.velocity.length(),
        ta_deg: normalize_aspect(rad_to_deg(bearing - bogey_reciprocal)),
        closure_mps: own_closure - bogey_closure,
        vertical_aspect_deg: normalize_aspect(rad_to_deg(vertical_aspect)),
        lateral_separation_m: range * (bearing - bogey_reciprocal).sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{knots_to_mps, nm_to_m};

    fn body(x: f64, y: f64, z: f64, heading: f64, speed: f64) -> Kinematics {
        Kinematics::new(
            Vector3::new(x, y, z),
            velocity_from_attitude(heading, 0.0, speed),
        )
    }

    #[test]
    fn test_wrap_heading_range() {
        for x in [-1e-17, -720.5, -360.0, -0.1, 0.0, 359.999, 360.0, 725.0, 1e9] {
            let h = wrap_heading(x);
            assert!((0.0..360.0).contains(&h), "wrap_heading({x}) = {h}");
        }
        assert!((wrap_heading(-90.0) - 270.0).abs() < 1e-10);
        assert!((wrap_heading(450.0) - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_normalize_aspect_range() {
        for x in [-1e-17, -540.0, -180.0, -179.9, 0.0, 180.0, 180.1, 359.0, 900.0] {
            let a = normalize_aspect(x);
            assert!(a > -180.0 && a <= 180.0, "normalize_aspect({x}) = {a}");
        }
        assert!((normalize_aspect(-180.0) - 180.0).abs() < 1e-10);
        assert!((normalize_aspect(270.0) + 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_velocity_from_attitude_axes() {
        let north = velocity_from_attitude(0.0, 0.0, 100.0);
        assert!(north.x.abs() < 1e-9 && (north.y - 100.0).abs() < 1e-9);

        let east = velocity_from_attitude(90.0, 0.0, 100.0);
        assert!((east.x - 100.0).abs() < 1e-9 && east.y.abs() < 1e-9);

        let climb = velocity_from_attitude(0.0, 30.0, 100.0);
        assert!((climb.z - 50.0).abs() < 1e-9);
        assert!((climb.length() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_braa_target_abeam_right() {
        let own = body(0.0, 0.0, 5000.0, 0.0, 200.0);
        let target = Kinematics::new(Vector3::new(1000.0, 0.0, 5000.0), Vector3::ZERO);
        let report = braa(&own, &target);

        assert!((report.bearing_deg - 90.0).abs() < 1e-9);
        assert!((report.ata_deg - 90.0).abs() < 1e-9, "ATA {}", report.ata_deg);
        assert!((report.range_m - 1000.0).abs() < 1e-9);
        assert!((report.slant_range_m - 1000.0).abs() < 1e-9);
        assert!(
            report.closure_mps.abs() < 1e-9,
            "Perpendicular motion should not close, got {}",
            report.closure_mps
        );
        assert!(report.vertical_aspect_deg.abs() < 1e-9);
    }

    #[test]
    fn test_braa_head_on_closure_sums_speeds() {
        let own_speed = knots_to_mps(400.0);
        let bogey_speed = knots_to_mps(350.0);
        let own = body(0.0, 0.0, 7000.0, 0.0, own_speed);
        let target = body(0.0, nm_to_m(30.0), 7000.0, 180.0, bogey_speed);
        let report = braa(&own, &target);

        assert!(
            (report.closure_mps - (own_speed + bogey_speed)).abs() < 1e-6,
            "Head-on closure should sum speeds, got {}",
            report.closure_mps
        );
        assert!(report.ata_deg.abs() < 1e-9);
        assert!(report.ta_deg.abs() < 1e-9, "Head-on TA should be 0");
        assert!((report.bogey_heading_deg - 180.0).abs() < 1e-9);
        assert!(report.lateral_separation_m.abs() < 1e-6);
    }

    #[test]
    fn test_braa_tail_chase_opens_when_target_faster() {
        let own = body(0.0, 0.0, 0.0, 0.0, 200.0);
        let target = body(0.0, 10_000.0, 0.0, 0.0, 250.0);
        let report = braa(&own, &target);
        assert!((report.closure_mps + 50.0).abs() < 1e-6);
        assert!((report.ta_deg.abs() - 180.0).abs() < 1e-9, "Tail aspect should be 180");
    }

    #[test]
    fn test_braa_signs_left_and_above() {
        // Target north-west of own-ship heading 000, 1 km higher.
        let own = body(0.0, 0.0, 1000.0, 0.0, 200.0);
        let target = body(-5000.0, 5000.0, 2000.0, 135.0, 200.0);
        let report = braa(&own, &target);

        assert!((report.bearing_deg - 315.0).abs() < 1e-9);
        assert!((report.ata_deg + 45.0).abs() < 1e-9, "Left of nose is negative");
        assert!(report.vertical_aspect_deg > 0.0, "Above is positive");
        assert!((report.altitude_m - 2000.0).abs() < 1e-9);
        // Target flying straight at own-ship: TA zero, no lateral offset.
        assert!(report.ta_deg.abs() < 1e-9);
        assert!(report.lateral_separation_m.abs() < 1e-6);
    }

    #[test]
    fn test_braa_lateral_separation_sign() {
        // Target heading south, offset 2 km east of own-ship's track.
        let own = body(0.0, 0.0, 0.0, 0.0, 200.0);
        let target = body(2000.0, 20_000.0, 0.0, 180.0, 200.0);
        let report = braa(&own, &target);
        let expected = report.range_m * deg_to_rad(report.ta_deg).sin();
        assert!((report.lateral_separation_m - expected).abs() < 1e-6);
        assert!(report.ta_deg > 0.0);
    }
}
