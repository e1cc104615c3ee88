use solsim::{build_from_config, run_2d, run_headless, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Log a headless run every this many frames
const HEADLESS_LOG_EVERY: u64 = 30;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Run without a window, logging positions instead of drawing them
    #[arg(long)]
    headless: bool,

    /// Number of frames (simulated days) to run in headless mode
    #[arg(long, default_value_t = 365)]
    steps: u64,
}

// load here to keep main clean
fn load_scenario_from_yaml(config_path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Bevy installs its own log subscriber; only the headless path needs one
    if args.headless {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let scenario_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    let scenario_cfg = load_scenario_from_yaml(&scenario_dir.join(&args.file_name))?;
    let view = scenario_cfg.view.clone();

    let mut session = build_from_config(scenario_cfg, &scenario_dir)
        .context("failed to set up simulation")?;

    if args.headless {
        run_headless(&mut session, args.steps, HEADLESS_LOG_EVERY)?;
    } else {
        run_2d(session, &view);
    }

    Ok(())
}
