use fieldsim::{FrameClock, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(about = "Headless runner for the ball / satellite force playground")]
struct Args {
    /// Scenario file, relative paths are looked up under `scenarios/`
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Frames to run, overrides the scenario
    #[arg(short = 'n', long)]
    frames: Option<u64>,

    /// Fixed step in seconds, overrides the scenario
    #[arg(long)]
    dt: Option<f64>,

    /// Step with wall-clock time at roughly 60 frames per second
    #[arg(long)]
    realtime: bool,

    /// Print the final frame snapshot as YAML
    #[arg(long)]
    dump: bool,

    /// Log diagnostics every this many frames
    #[arg(long, default_value_t = 60)]
    every: u64,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let Some(file) = &args.file else {
        return Ok(Scenario::classroom()?);
    };

    let path = if file.is_absolute() || file.exists() {
        file.clone()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file)
    };
    let cfg = ScenarioConfig::from_path(&path).with_context(|| format!("loading {}", path.display()))?;
    Ok(Scenario::build_scenario(cfg)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut scenario = load_scenario(&args)?;

    let frames = args.frames.unwrap_or(scenario.engine.frames);
    let dt = args.dt.unwrap_or(scenario.engine.dt);
    let every = args.every.max(1);

    let mut clock = FrameClock::start();
    for _ in 0..frames {
        let report = if args.realtime {
            thread::sleep(Duration::from_millis(16));
            scenario.tick(&mut clock)?
        } else {
            scenario.step(dt)?
        };

        let sys = &scenario.system;
        if sys.frame % every == 0 {
            let p = sys.momentum();
            info!(
                "frame {:5} t = {:8.3} KE = {:12.6} p = ({:10.4}, {:10.4}) contacts = {} wall hits = {}",
                sys.frame,
                sys.t,
                sys.kinetic_energy(),
                p.x,
                p.y,
                report.contacts,
                report.wall_hits
            );
        }
    }

    if args.dump {
        let snapshot = scenario.system.snapshot();
        print!("{}", serde_yaml::to_string(&snapshot)?);
    }

    Ok(())
}
