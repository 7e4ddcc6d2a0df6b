//! Headless RIO trainer: runs a scenario for a fixed time, printing radio
//! calls and a once-per-second status readout.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use tracing::info;

use rio_app::control;
use rio_app::error::AppError;
use rio_app::state::AppState;
use rio_app::status;
use rio_core::commands::PlayerCommand;
use rio_core::constants::DEFAULT_FRAME_RATE;
use rio_core::enums::ScenarioId;
use rio_sim::engine::SimConfig;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scenario {
    Intercept100,
    Intercept80,
    Intercept60,
    Intercept40,
    Intercept20,
    ZeroCut,
    KickAndBuild,
}

impl From<Scenario> for ScenarioId {
    fn from(value: Scenario) -> Self {
        match value {
            Scenario::Intercept100 => ScenarioId::Intercept100,
            Scenario::Intercept80 => ScenarioId::Intercept80,
            Scenario::Intercept60 => ScenarioId::Intercept60,
            Scenario::Intercept40 => ScenarioId::Intercept40,
            Scenario::Intercept20 => ScenarioId::Intercept20,
            Scenario::ZeroCut => ScenarioId::ZeroCutTutorial,
            Scenario::KickAndBuild => ScenarioId::KickAndBuildTutorial,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The scenario to fly.
    #[arg(long, value_enum, default_value_t = Scenario::ZeroCut)]
    scenario: Scenario,

    /// The seed to use for the random number generator. Overrides the config file.
    #[arg(short, long)]
    seed: Option<u64>,

    /// How long to run, in wall-clock seconds.
    #[arg(long, default_value_t = 30)]
    seconds: u64,

    /// Frames per second.
    #[arg(short, long, default_value_t = DEFAULT_FRAME_RATE)]
    rate: u32,

    /// A JSON simulation config. Missing fields take their defaults.
    #[arg(short, long, default_value = None)]
    config: Option<PathBuf>,
}

fn load_config(path: &Path) -> Result<SimConfig, AppError> {
    let error = |reason: String| AppError::Config {
        path: path.display().to_string(),
        reason,
    };
    let text = std::fs::read_to_string(path).map_err(|e| error(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| error(e.to_string()))
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    info!(seed = config.seed, scenario = ?cli.scenario, "Starting trainer");

    let state = AppState::new();
    control::start_simulation(&state, config, cli.rate)?;
    control::send_command(
        &state,
        PlayerCommand::SelectScenario {
            scenario: cli.scenario.into(),
        },
    )?;

    let deadline = Instant::now() + Duration::from_secs(cli.seconds);
    let mut next_status = Instant::now();
    let mut hooked_once = false;
    while Instant::now() < deadline {
        for call in control::drain_radio(&state)? {
            println!("{}", call.display_text());
        }

        if let Some(snapshot) = control::get_snapshot(&state)? {
            // Hook the first contact the radar sees.
            if !hooked_once && snapshot.radar.hooked.is_none() {
                if let Some(bogey) = snapshot.bogeys.iter().find(|b| b.visible) {
                    control::send_command(&state, PlayerCommand::HookBogey { bogey: bogey.id })?;
                    hooked_once = true;
                }
            }

            if Instant::now() >= next_status {
                next_status += Duration::from_secs(1);
                let (line, closure) = status::status_line(&snapshot);
                println!("{}", status::flight_line(&snapshot.own_ship));
                println!("{line}   {closure}");
                if let Some(scenario) = &snapshot.scenario {
                    for condition in &scenario.conditions {
                        let mark = if condition.satisfied() { "x" } else { " " };
                        println!("  [{mark}] {}", condition.text);
                    }
                }
            }
        }

        std::thread::sleep(Duration::from_millis(50));
    }

    control::stop_simulation(&state)?;
    Ok(())
}
