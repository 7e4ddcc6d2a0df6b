//! Built-in tutorial checklists.

use serde::{Deserialize, Serialize};

use rio_core::units::{knots_to_mps, nm_to_m};

use crate::checklist::{Check, Condition, Task};

/// A titled sequence of stages. The last stage is expected to hold a
/// [`Check::Never`] condition so the run rests on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    pub title: String,
    pub stages: Vec<Vec<Condition>>,
}

fn turn_and_roll_out() -> Vec<Condition> {
    vec![
        Condition::new(Task::TurnToBearing, Check::AtaWithin { max_deg: 10.0 }),
        Condition::conditional(Task::RollOut, Check::RollWithin { max_deg: 10.0 }),
    ]
}

fn match_altitude() -> Check {
    Check::AltitudeMatch { tolerance_m: 500.0 }
}

fn approach(range_nm: f64) -> Condition {
    Condition::conditional(
        Task::ApproachTo { range_nm },
        Check::SlantRangeBelow {
            max_m: nm_to_m(range_nm),
        },
    )
}

fn pure_pursuit_endgame() -> Vec<Condition> {
    vec![
        Condition::new(Task::PurePursuit, Check::AtaWithin { max_deg: 5.0 }),
        Condition::conditional(
            Task::ReduceClosure { knots: 50.0 },
            Check::ClosureBelow {
                max_mps: knots_to_mps(50.0),
            },
        ),
        Condition::conditional(
            Task::ApproachWithin { range_nm: 2.0 },
            Check::SlantRangeBelow {
                max_m: nm_to_m(2.0),
            },
        ),
    ]
}

fn success() -> Vec<Condition> {
    vec![Condition::new(Task::Success, Check::Never)]
}

/// Head-on approach with a slowly growing target aspect.
pub fn zero_cut() -> Tutorial {
    let mut stages = vec![
        turn_and_roll_out(),
        vec![
            Condition::new(Task::MatchAltitude, match_altitude()),
            Condition::new(Task::HookTarget, Check::Hooked),
            Condition::new(
                Task::MatchReciprocalHeading,
                Check::ReciprocalHeading {
                    tolerance_deg: 10.0,
                },
            ),
            Condition::new(
                Task::IncreaseSpeed { knots: 500.0 },
                Check::SpeedAtLeast {
                    min_mps: knots_to_mps(490.0),
                },
            ),
        ],
    ];

    let ladder = [
        (5.0, 50.0),
        (10.0, 40.0),
        (15.0, 30.0),
        (20.0, 20.0),
        (30.0, 15.0),
        (40.0, 10.0),
    ];
    for (ta_deg, range_nm) in ladder {
        stages.push(vec![
            Condition::new(
                Task::MaintainTaAt { ta_deg, range_nm },
                Check::TaMagnitude {
                    ta_deg,
                    tolerance_deg: 2.0,
                },
            ),
            approach(range_nm),
        ]);
    }

    stages.push(pure_pursuit_endgame());
    stages.push(success());

    Tutorial {
        title: "Tutorial: Zero Cut Intercept".to_string(),
        stages,
    }
}

/// Offset the target to the gimbal limit, then build aspect on a collision course.
pub fn kick_and_build() -> Tutorial {
    let stages = vec![
        turn_and_roll_out(),
        vec![
            Condition::new(Task::HookTarget, Check::Hooked),
            Condition::conditional(Task::MatchAltitude, match_altitude()),
            Condition::new(
                Task::MatchSpeed,
                Check::SpeedMatch {
                    tolerance_mps: knots_to_mps(50.0),
                },
            ),
        ],
        vec![
            Condition::new(
                Task::TurnToGimbalLimit,
                Check::AtaMagnitude {
                    ata_deg: 60.0,
                    tolerance_deg: 10.0,
                },
            ),
            Condition::conditional(
                Task::AchieveTa { ta_deg: 40.0 },
                Check::TaMagnitude {
                    ta_deg: 40.0,
                    tolerance_deg: 2.0,
                },
            ),
        ],
        vec![
            Condition::new(
                Task::MaintainTa { ta_deg: 40.0 },
                Check::TaNear {
                    ta_deg: -40.0,
                    tolerance_deg: 2.0,
                },
            ),
            Condition::new(
                Task::CollisionCourse { ata_deg: 40.0 },
                Check::AtaNear {
                    ata_deg: 40.0,
                    tolerance_deg: 2.0,
                },
            ),
            approach(10.0),
        ],
        pure_pursuit_endgame(),
        success(),
    ];

    Tutorial {
        title: "Tutorial: Kick-and-Build Intercept".to_string(),
        stages,
    }
}
