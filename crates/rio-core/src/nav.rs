//! Own-position readout: flat-earth lat/lon offset and DMS formatting.

use crate::constants::{EARTH_RADIUS_M, METERS_PER_DEGREE_LAT};
use crate::units::deg_to_rad;

/// Offset a reference latitude/longitude (degrees) by `east`/`north` meters.
///
/// Flat-earth approximation, adequate over a few hundred miles.
pub fn offset_lat_lon(lat: f64, lon: f64, east: f64, north: f64) -> (f64, f64) {
    let meters_per_degree_lon =
        2.0 * std::f64::consts::PI * EARTH_RADIUS_M * deg_to_rad(lat).cos() / 360.0;
    (lat + north / METERS_PER_DEGREE_LAT, lon + east / meters_per_degree_lon)
}

/// Degrees, minutes and tenths-of-minute text for one coordinate.
fn dms(coordinate: f64) -> String {
    let absolute = coordinate.abs();
    let degrees = absolute.floor();
    let minutes_exact = (absolute - degrees) * 60.0;
    let minutes = minutes_exact.floor();
    let tenths = ((minutes_exact - minutes) * 6.0).floor();
    format!("{}\u{00B0}{:02}'{}\"", degrees as i64, minutes as i64, tenths as i64)
}

/// Format a position the way the tactical display shows it, e.g.
/// `LN 15°05'5"           LE 145°40'2"`.
pub fn format_lat_lon(lat: f64, lon: f64) -> String {
    let lat_cardinal = if lat >= 0.0 { "LN" } else { "LS" };
    let lon_cardinal = if lon >= 0.0 { "LE" } else { "LW" };
    format!(
        "{lat_cardinal} {}           {lon_cardinal} {}",
        dms(lat),
        dms(lon)
    )
}
