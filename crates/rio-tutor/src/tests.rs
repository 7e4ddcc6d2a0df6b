#[cfg(test)]
mod tests {
    use rio_core::constants::STAGE_FREEZE_SECS;
    use rio_core::enums::ConditionState;
    use rio_core::geometry::BraaReport;
    use rio_core::units::{feet_to_m, knots_to_mps, nm_to_m};

    use crate::checklist::*;
    use crate::tutorials::{self, Tutorial};

    fn always(task: Task) -> Condition {
        Condition::new(task, Check::AtaWithin { max_deg: 1e9 })
    }

    fn never(task: Task) -> Condition {
        Condition::new(task, Check::Never)
    }

    fn input(report: BraaReport, own: OwnShipStatus) -> CheckInput {
        CheckInput { report, own }
    }

    /// A failed entry stops the walk at the next conditional one.
    #[test]
    fn test_conditional_short_circuit() {
        let stage = vec![
            never(Task::TurnToBearing),
            Condition {
                conditional: true,
                ..always(Task::RollOut)
            },
        ];
        let (states, all) = evaluate_stage(&stage, &CheckInput::default());
        assert!(!all);
        assert_eq!(states, vec![ConditionState::Unsatisfied, ConditionState::NotReached]);
    }

    /// Non-conditional entries keep being evaluated after a failure.
    #[test]
    fn test_unconditional_entries_all_evaluated() {
        let stage = vec![never(Task::HookTarget), always(Task::MatchSpeed)];
        let (states, all) = evaluate_stage(&stage, &CheckInput::default());
        assert!(!all);
        assert_eq!(states, vec![ConditionState::Unsatisfied, ConditionState::Satisfied]);
    }

    #[test]
    fn test_advance_then_freeze() {
        let tutorial = Tutorial {
            title: "Test".to_string(),
            stages: vec![
                vec![
                    always(Task::TurnToBearing),
                    Condition {
                        conditional: true,
                        ..always(Task::RollOut)
                    },
                ],
                vec![never(Task::Success)],
            ],
        };
        let mut run = ChecklistRun::new(tutorial);
        let frame = CheckInput::default();

        assert_eq!(run.evaluate(0.1, &frame), Evaluation::Evaluated { advanced: true });
        assert_eq!(run.stage(), 1);
        assert!(run.is_frozen());
        assert!(run.conditions().iter().all(|c| c.satisfied()));

        // Frozen for 1.5 s: no checks run and the completed stage stays displayed.
        let frames = (STAGE_FREEZE_SECS / 0.25) as usize;
        for _ in 0..frames {
            assert_eq!(run.evaluate(0.25, &frame), Evaluation::Frozen);
            assert_eq!(run.conditions().len(), 2);
        }
        assert!(!run.is_frozen());

        assert_eq!(run.evaluate(0.25, &frame), Evaluation::Evaluated { advanced: false });
        assert_eq!(run.conditions().len(), 1);
        assert_eq!(run.conditions()[0].text, "Success!");
    }

    #[test]
    fn test_final_stage_never_advances() {
        let tutorial = Tutorial {
            title: "Final".to_string(),
            stages: vec![vec![always(Task::Success)]],
        };
        let mut run = ChecklistRun::new(tutorial);
        for _ in 0..10 {
            let result = run.evaluate(0.1, &CheckInput::default());
            assert_eq!(result, Evaluation::Evaluated { advanced: false });
        }
        assert_eq!(run.stage(), 0);
        assert!(!run.is_frozen());
    }

    #[test]
    fn test_builtin_tutorials_end_on_success() {
        for tutorial in [tutorials::zero_cut(), tutorials::kick_and_build()] {
            let last = tutorial.stages.last().unwrap();
            assert_eq!(last.len(), 1);
            assert_eq!(last[0].task, Task::Success);
            assert_eq!(last[0].check, Check::Never);
            // The first entry of every stage is unconditional.
            assert!(tutorial.stages.iter().all(|s| !s[0].conditional));
        }
        assert_eq!(tutorials::zero_cut().stages.len(), 10);
        assert_eq!(tutorials::kick_and_build().stages.len(), 6);
    }

    #[test]
    fn test_task_text_quotes_live_geometry() {
        let report = BraaReport {
            bearing_deg: 123.4,
            altitude_m: feet_to_m(23_400.0),
            bogey_heading_deg: 10.0,
            ..Default::default()
        };
        assert_eq!(Task::TurnToBearing.render(&report), "Turn to bogey bearing 123");
        assert_eq!(Task::MatchAltitude.render(&report), "Match bogey altitude 23000");
        assert_eq!(
            Task::MatchReciprocalHeading.render(&report),
            "Match reciprocal bogey heading 190"
        );
        assert_eq!(
            Task::MaintainTaAt {
                ta_deg: 5.0,
                range_nm: 50.0
            }
            .render(&report),
            "Maintain TA of 5±2° at 50 nm"
        );
        assert_eq!(
            Task::ReduceClosure { knots: 50.0 }.render(&report),
            "Reduce closure to <50 kts"
        );
    }

    #[test]
    fn test_reciprocal_heading_wraps() {
        let check = Check::ReciprocalHeading {
            tolerance_deg: 10.0,
        };
        let report = BraaReport {
            own_heading_deg: 355.0,
            bogey_heading_deg: 178.0,
            ..Default::default()
        };
        assert!(check.evaluate(&input(report, OwnShipStatus::default())));

        let report = BraaReport {
            own_heading_deg: 2.0,
            bogey_heading_deg: 170.0,
            ..Default::default()
        };
        assert!(!check.evaluate(&input(report, OwnShipStatus::default())));
    }

    #[test]
    fn test_closure_check_holds_near_zero_from_either_side() {
        let check = Check::ClosureBelow {
            max_mps: knots_to_mps(50.0),
        };
        let with_closure = |knots: f64| {
            let report = BraaReport {
                closure_mps: knots_to_mps(knots),
                ..Default::default()
            };
            check.evaluate(&input(report, OwnShipStatus::default()))
        };
        assert!(with_closure(30.0));
        assert!(with_closure(-30.0));
        assert!(!with_closure(120.0), "Closing at 120 kt is too fast");
        assert!(!with_closure(-200.0), "Opening at 200 kt must not count as matched");
    }

    #[test]
    fn test_zero_cut_endgame_rejects_opening_contact() {
        let stage = &tutorials::zero_cut().stages[8];
        let report = BraaReport {
            closure_mps: knots_to_mps(-400.0),
            ..Default::default()
        };
        assert!(!stage[1].check.evaluate(&input(report, OwnShipStatus::default())));
    }

    /// Stage two of the zero-cut checklist against a matched head-on setup.
    #[test]
    fn test_zero_cut_second_stage() {
        let stage = &tutorials::zero_cut().stages[1];
        let report = BraaReport {
            altitude_m: 7000.0,
            own_heading_deg: 90.0,
            bogey_heading_deg: 270.0,
            slant_range_m: nm_to_m(80.0),
            ..Default::default()
        };
        let mut own = OwnShipStatus {
            roll_deg: 0.0,
            altitude_m: 7200.0,
            speed_mps: knots_to_mps(495.0),
            hooked: true,
        };
        let (states, all) = evaluate_stage(stage, &input(report, own));
        assert!(all, "States: {states:?}");

        own.hooked = false;
        let (states, all) = evaluate_stage(stage, &input(report, own));
        assert!(!all);
        assert_eq!(states[1], ConditionState::Unsatisfied);
        assert_eq!(states[3], ConditionState::Satisfied);
    }

    #[test]
    fn test_kick_and_build_collision_stage() {
        let stage = &tutorials::kick_and_build().stages[3];
        let report = BraaReport {
            ta_deg: -41.0,
            ata_deg: 39.5,
            slant_range_m: nm_to_m(9.0),
            ..Default::default()
        };
        let (_, all) = evaluate_stage(stage, &input(report, OwnShipStatus::default()));
        assert!(all);

        // Mirror-image geometry does not satisfy the signed checks.
        let mirrored = BraaReport {
            ta_deg: 41.0,
            ata_deg: -39.5,
            ..report
        };
        let (states, all) = evaluate_stage(stage, &input(mirrored, OwnShipStatus::default()));
        assert!(!all);
        assert_eq!(states[2], ConditionState::NotReached);
    }
}
