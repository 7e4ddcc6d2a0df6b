//! Text readouts for a terminal host: own-ship flight line, the tactical
//! status line and the closure label.

use rio_core::nav::format_lat_lon;
use rio_core::state::{HookedReadout, OwnShipView, SimSnapshot};
use rio_core::units::{m_to_feet, mps_to_knots};

/// Signed attitude text: "steady" inside half a degree.
fn attitude(deg: f64, negative: &str, positive: &str) -> String {
    if deg.abs() < 0.5 {
        "steady".to_string()
    } else {
        let side = if deg < 0.0 { negative } else { positive };
        format!("{side} {}\u{00B0}", deg.abs().round() as i64)
    }
}

/// Heading, airspeed, altitude, roll, throttle and pitch of own-ship.
pub fn flight_line(own: &OwnShipView) -> String {
    format!(
        "HDG {:03} | IAS {} | ALT {} | Roll {} | Throttle {}% | Pitch {}",
        own.heading_deg.round() as i64 % 360,
        mps_to_knots(own.speed_mps).floor() as i64,
        m_to_feet(own.altitude_m).floor() as i64,
        attitude(own.roll_deg, "left", "right"),
        (own.throttle * 100.0).round() as i64,
        attitude(own.pitch_deg, "down", "up"),
    )
}

/// Hooked-contact line, e.g. `RT 12   MC 180   BR 3 / RA 48   AS 420   AL +25000`.
pub fn hooked_line(readout: &HookedReadout) -> String {
    format!(
        "{} {}   MC {}   BR {} / RA {}   AS {}   AL +{}",
        if readout.ta_right { "RT" } else { "LT" },
        readout.ta_deg.round() as i64,
        readout.course_deg.round() as i64,
        readout.relative_bearing_deg.round() as i64,
        readout.range_nm.round() as i64,
        readout.airspeed_kts.round() as i64,
        readout.altitude_ft.round() as i64,
    )
}

/// Closure label, `+` prefixed when closing.
pub fn closure_label(closure_kts: f64) -> String {
    let rounded = closure_kts.round() as i64;
    if rounded > 0 {
        format!("+{rounded}")
    } else {
        rounded.to_string()
    }
}

/// Status line and closure label for a snapshot. Falls back to the own
/// position when nothing is hooked.
pub fn status_line(snapshot: &SimSnapshot) -> (String, String) {
    match &snapshot.radar.hooked_readout {
        Some(readout) => (hooked_line(readout), closure_label(readout.closure_kts)),
        None => (
            format_lat_lon(snapshot.own_ship.latitude, snapshot.own_ship.longitude),
            "+0".to_string(),
        ),
    }
}
