#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::RadioCall;
    use crate::state::SimSnapshot;
    use crate::types::{BogeyId, Kinematics, PlanarExt, SimTime, Vector2, Vector3};
    use crate::units::*;

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SetAltitude { altitude_m: 7620.0 },
            PlayerCommand::SetAltitudePreset {
                preset: AltitudePreset::Descend5k,
            },
            PlayerCommand::SetSpeed { speed_mps: 250.0 },
            PlayerCommand::SetRollPreset {
                preset: RollPreset::RightHard,
            },
            PlayerCommand::StepRoll { steps: -1 },
            PlayerCommand::SlewAntenna {
                azimuth_deg: 0.6,
                elevation_deg: 0.0,
            },
            PlayerCommand::CenterAntenna,
            PlayerCommand::SetAzimuthScan {
                scan: AzimuthScan::Twenty,
            },
            PlayerCommand::SetElevationBars {
                bars: ElevationBars::Eight,
            },
            PlayerCommand::SetRadarRange {
                range: RadarRange::Nm50,
            },
            PlayerCommand::SetDisplayMode {
                mode: DisplayMode::GroundStabilized,
            },
            PlayerCommand::HookBogey { bogey: BogeyId(3) },
            PlayerCommand::Unhook,
            PlayerCommand::SelectScenario {
                scenario: ScenarioId::KickAndBuildTutorial,
            },
            PlayerCommand::ClearScenario,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, &back);
        }
    }

    #[test]
    fn test_command_json_is_tagged() {
        let json = serde_json::to_string(&PlayerCommand::Unhook).unwrap();
        assert_eq!(json, r#"{"type":"Unhook"}"#);
    }

    /// Verify SimSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = SimSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.radar.state, back.radar.state);
        assert!(
            json.len() < 2048,
            "Empty snapshot should be <2KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_radio_call_display_text() {
        let call = RadioCall {
            station: Station::Awacs,
            text: "Sundown 1-1, Overlord, picture clean.".to_string(),
            duration_secs: 5.0,
            sent_at_secs: 0.0,
        };
        assert!(call.display_text().starts_with("OVERLORD: "));
    }

    #[test]
    fn test_unit_conversions() {
        assert!((knots_to_mps(100.0) - 51.4444).abs() < 1e-9);
        assert!((mps_to_knots(knots_to_mps(437.0)) - 437.0).abs() < 1e-9);
        assert!((nm_to_m(40.0) - 74_080.0).abs() < 1e-9);
        assert!((m_to_nm(1852.0) - 1.0).abs() < 1e-12);
        assert!((feet_to_m(10_000.0) - 3048.0).abs() < 1e-9);
        assert!((m_to_feet(0.3048) - 1.0).abs() < 1e-12);
        assert!((rad_to_deg(deg_to_rad(123.0)) - 123.0).abs() < 1e-12);
        assert!((round_feet(23_499.0, 1000.0) - 23_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_roll_preset_stepping() {
        assert_eq!(RollPreset::Steady.step(1), Some(RollPreset::RightStandard));
        assert_eq!(RollPreset::Steady.step(-3), Some(RollPreset::LeftBreak));
        assert_eq!(RollPreset::LeftBreak.step(-1), None);
        assert_eq!(RollPreset::RightBreak.step(1), None);
        assert!((RollPreset::LeftHard.bank_deg() + 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_aspect_calls() {
        assert_eq!(AspectCall::from_ta(5.0), AspectCall::Hot);
        assert_eq!(AspectCall::from_ta(-45.0), AspectCall::Flanking);
        assert_eq!(AspectCall::from_ta(90.0), AspectCall::Beaming);
        assert_eq!(AspectCall::from_ta(-150.0), AspectCall::Cold);
        assert_eq!(AspectCall::from_ta(30.0), AspectCall::Flanking);
    }

    #[test]
    fn test_rotate_display_quarter_turn() {
        let v = Vector2::new(0.0, 1.0).rotate_display(90.0);
        assert!((v.x + 1.0).abs() < 1e-12 && v.y.abs() < 1e-12);

        let unrotated = Vector3::new(3.0, 4.0, 9.0).rotate_display(0.0);
        assert!((unrotated.x - 3.0).abs() < 1e-12);
        assert!((unrotated.y + 4.0).abs() < 1e-12, "Display y axis points down");
    }

    #[test]
    fn test_vector_basics() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
        assert!((v.normalize().length() - 1.0).abs() < 1e-12);
        assert_eq!(-v, Vector3::new(-3.0, -4.0, 0.0));
        assert_eq!(v * 2.0 + v, Vector3::new(9.0, 12.0, 0.0));
        assert!((Vector2::new(1.0, 2.0).dot(Vector2::new(3.0, 4.0)) - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_kinematics_integrate() {
        let mut body = Kinematics::new(Vector3::ZERO, Vector3::new(100.0, -50.0, 2.0));
        body.integrate(0.5);
        assert_eq!(body.position, Vector3::new(50.0, -25.0, 1.0));
    }

    /// Verify SimTime advancement with variable deltas.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);

        for dt in [0.016, 0.017, 0.1] {
            time.advance(dt);
        }
        assert_eq!(time.tick, 3);
        assert!((time.elapsed_secs - 0.133).abs() < 1e-12);
        assert!((time.last_delta_secs - 0.1).abs() < 1e-12);
    }
}
