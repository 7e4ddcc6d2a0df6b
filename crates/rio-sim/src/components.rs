//! ECS components attached to bogey entities.
//!
//! Each bogey carries `Bogey`, `Kinematics` (from rio-core) and `RadarContact`.

use rio_core::geometry::BraaReport;
use rio_core::types::BogeyId;

/// Flight parameters of a contact. Velocity is rebuilt from these each frame.
#[derive(Debug, Clone, Copy)]
pub struct Bogey {
    pub id: BogeyId,
    pub heading_deg: f64,
    pub pitch_deg: f64,
    pub speed_mps: f64,
}

/// Radar picture of a contact from the latest frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadarContact {
    /// Inside the scan volume.
    pub visible: bool,
    pub braa: BraaReport,
}
