//! stigmergy-run: drive the allocation loop from the command line.
//!
//! Usage:
//!   stigmergy-run run --feed input_data_3d.csv --preset fuel-aware --seed 7
//!   stigmergy-run generate --output input_data_3d.csv --seed 7

use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use stigmergy_core::config::PipelineConfig;
use stigmergy_core::events::EventSink;
use stigmergy_core::feed::EntityFeed;
use stigmergy_sim::scenario::{generate_feed, GeneratorParams};
use stigmergy_sim::sink::TracingSink;
use stigmergy_sim::{SimConfig, SimulationEngine};

const DEFAULT_MAX_TICKS: u64 = 10_000;
const DEFAULT_SEED: u64 = 42;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "generate" => cmd_generate(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "stigmergy-run: sensor and weapon allocation loop\n\
         \n\
         Commands:\n\
         \n\
         run       Run an entity feed through the allocation pipeline\n\
         \n\
           --feed <path>       Entity feed (.csv sectioned format, or .json)\n\
           --config <path>     Pipeline config JSON (overrides --preset)\n\
           --preset <name>     basic | moving | fuel-aware | full (default: full)\n\
           --seed <N>          RNG seed (default: 42)\n\
           --max-ticks <N>     Stop after N ticks (default: 10000)\n\
           --pace-ms <N>       Wall clock delay between ticks (default: from config)\n\
         \n\
         generate  Write a synthetic entity feed\n\
         \n\
           --output <path>     Output file path\n\
           --seed <N>          RNG seed (default: 42)\n\
           --platforms <N>     Platform count (default: 10)\n\
           --targets <N>       Target count (default: 50)\n\
           --json              Write JSON instead of CSV\n\
         \n\
         Set RUST_LOG=debug to see every PG calculation.\n"
    );
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == name && i + 1 < args.len() {
            return Some(args[i + 1].as_str());
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], name: &str, default: T) -> T {
    match flag_value(args, name) {
        Some(raw) => match raw.parse::<T>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {name} expects a number, got {raw:?}");
                process::exit(1);
            }
        },
        None => default,
    }
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

// --- Run command ---

fn cmd_run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let feed_path = match flag_value(args, "--feed") {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("Error: --feed <path> is required");
            process::exit(1);
        }
    };

    let mut pipeline = match flag_value(args, "--config") {
        Some(path) => PipelineConfig::from_file(&PathBuf::from(path))?,
        None => {
            let name = flag_value(args, "--preset").unwrap_or("full");
            match PipelineConfig::preset(name) {
                Some(config) => config,
                None => {
                    eprintln!("Error: unknown preset {name:?}");
                    print_usage();
                    process::exit(1);
                }
            }
        }
    };
    pipeline.pacing_ms = parse_number(args, "--pace-ms", pipeline.pacing_ms);

    let seed = parse_number(args, "--seed", DEFAULT_SEED);
    let max_ticks = parse_number(args, "--max-ticks", DEFAULT_MAX_TICKS);
    let pacing = Duration::from_millis(pipeline.pacing_ms);

    let feed = EntityFeed::load(&feed_path)?;
    let mut engine = SimulationEngine::new(SimConfig { seed, pipeline })?;
    engine.load_feed(&feed)?;

    // A feed can be finished at load; its first snapshot still carries the
    // setup and grounding events.
    let mut sink = TracingSink;
    for _ in 0..max_ticks {
        let snapshot = engine.tick();
        for event in snapshot.events {
            sink.emit(event);
        }
        if snapshot.finished {
            break;
        }
        if !pacing.is_zero() {
            thread::sleep(pacing);
        }
    }

    let score = engine.score().view();
    tracing::info!(
        target: "stigmergy::run",
        ticks = engine.time().tick,
        finished = engine.is_finished(),
        targets_destroyed = score.targets_destroyed,
        targets_total = score.targets_total,
        weapons_fired = score.weapons_fired,
        platforms_grounded = score.platforms_grounded,
        failed_engagements = score.failed_engagements,
        "run.complete"
    );
    println!("{}", serde_json::to_string_pretty(&score)?);
    Ok(())
}

// --- Generate command ---

fn cmd_generate(args: &[String]) -> Result<(), Box<dyn Error>> {
    let output = match flag_value(args, "--output") {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("Error: --output <path> is required");
            process::exit(1);
        }
    };

    let defaults = GeneratorParams::default();
    let params = GeneratorParams {
        platforms: parse_number(args, "--platforms", defaults.platforms),
        targets: parse_number(args, "--targets", defaults.targets),
        ..defaults
    };
    let seed = parse_number(args, "--seed", DEFAULT_SEED);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let feed = generate_feed(&mut rng, &params);
    let contents = if has_flag(args, "--json") {
        feed.to_json_string()?
    } else {
        feed.to_csv()
    };
    std::fs::write(&output, contents)?;

    tracing::info!(
        target: "stigmergy::run",
        path = %output.display(),
        platforms = feed.platforms.len(),
        targets = feed.targets.len(),
        seed,
        "feed.written"
    );
    Ok(())
}
