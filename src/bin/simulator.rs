//! Keycard Arena headless simulator
//!
//! Runs gacha draws and scripted combat through the same `Session` the game
//! uses, then prints a summary for balance checks.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --draws N       Gacha draws before fighting (default: 30)
//!   --runs N        Combat runs after drawing (default: 5)
//!   --seed N        RNG seed (default: 42)
//!   --config FILE   JSON game config (default: config.json in the save
//!                   directory if present, else built-in constants)
//!   --save-dir DIR  Persist to DIR instead of memory
//!   --home          Persist to ~/.kca/
//!   --quiet         Only the final summary line
//!   --version, -v   Show build information

use keycard_arena::catalog::Catalog;
use keycard_arena::combat::{CombatEvent, EncounterOutcome};
use keycard_arena::core::config::GameConfig;
use keycard_arena::core::constants::CONFIG_FILE_NAME;
use keycard_arena::save::{KeyValueStore, MemoryStore};
use keycard_arena::session::{Session, SessionEvent, SessionInput};
use keycard_arena::utils::{default_save_dir, init_logging, version_string, FileStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Safety valve for encounters the party cannot finish.
const MAX_TICKS_PER_RUN: u64 = 10_000;

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    draws: u32,
    runs: u32,
    seed: u64,
    config_path: Option<PathBuf>,
    save_dir: Option<PathBuf>,
    home: bool,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            draws: 30,
            runs: 5,
            seed: 42,
            config_path: None,
            save_dir: None,
            home: false,
            quiet: false,
        }
    }
}

fn print_usage() {
    eprintln!(
        "Keycard Arena Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --draws N       Gacha draws before fighting (default: 30)\n\
         \x20 --runs N        Combat runs after drawing (default: 5)\n\
         \x20 --seed N        RNG seed (default: 42)\n\
         \x20 --config FILE   JSON game config\n\
         \x20 --save-dir DIR  Persist to DIR instead of memory\n\
         \x20 --home          Persist to ~/.kca/\n\
         \x20 --quiet         Only the final summary line\n\
         \x20 --version, -v   Show build information\n\
         \x20 --help, -h      Show this help"
    );
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    value
        .ok_or_else(|| format!("{flag} requires a value"))?
        .parse()
        .map_err(|_| format!("{flag} requires a number"))
}

fn parse_args() -> Result<SimConfig, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--draws" => {
                i += 1;
                config.draws = parse_number(flag, args.get(i))?;
            }
            "--runs" => {
                i += 1;
                config.runs = parse_number(flag, args.get(i))?;
            }
            "--seed" => {
                i += 1;
                config.seed = parse_number(flag, args.get(i))?;
            }
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a path")?;
                config.config_path = Some(PathBuf::from(path));
            }
            "--save-dir" => {
                i += 1;
                let path = args.get(i).ok_or("--save-dir requires a path")?;
                config.save_dir = Some(PathBuf::from(path));
            }
            "--home" => config.home = true,
            "--quiet" => config.quiet = true,
            "--version" | "-v" => {
                println!("keycard-arena simulator {}", version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(config)
}

// ── Simulation ───────────────────────────────────────────────────────

#[derive(Default)]
struct SimStats {
    new_unlocks: u32,
    level_ups: u32,
    failed_saves: u32,
    victories: u32,
    timeouts: u32,
    total_ticks: u64,
    ultimates: u32,
}

fn run<S: KeyValueStore>(sim: &SimConfig, mut session: Session<S, StdRng>) -> SimStats {
    let mut stats = SimStats::default();

    for _ in 0..sim.draws {
        for event in session.handle_input(SessionInput::Draw) {
            if let SessionEvent::Drew(result) = event {
                if result.is_new {
                    stats.new_unlocks += 1;
                } else {
                    stats.level_ups += 1;
                }
                if !result.saved {
                    stats.failed_saves += 1;
                }
                if !sim.quiet {
                    println!(
                        "draw: {:<16} lv {:>3}{}",
                        result.template.name,
                        result.new_level,
                        if result.is_new { "  NEW" } else { "" }
                    );
                }
            }
        }
    }
    session.handle_input(SessionInput::Dismiss);

    for run_index in 0..sim.runs {
        session.handle_input(SessionInput::StartRun);
        let keys: Vec<char> = session
            .combat()
            .map(|c| c.party().iter().map(|h| h.key()).collect())
            .unwrap_or_default();

        let mut ticks = 0u64;
        let mut outcome = None;
        while outcome.is_none() && ticks < MAX_TICKS_PER_RUN {
            let ready: Vec<char> = session
                .combat()
                .map(|c| {
                    c.party()
                        .iter()
                        .filter(|h| h.ultimate_ready())
                        .map(|h| h.key())
                        .collect()
                })
                .unwrap_or_default();
            for key in &keys {
                session.handle_input(SessionInput::KeyPressed(*key));
            }
            for key in ready {
                session.handle_input(SessionInput::Ultimate {
                    key,
                    charge_fraction: 1.0,
                });
            }
            for event in session.tick() {
                match event {
                    SessionEvent::Combat(CombatEvent::HeroUltimate { .. }) => stats.ultimates += 1,
                    SessionEvent::RunEnded(o) => outcome = Some(o),
                    _ => {}
                }
            }
            ticks += 1;
        }

        stats.total_ticks += ticks;
        match outcome {
            Some(EncounterOutcome::Victory) => stats.victories += 1,
            Some(EncounterOutcome::Defeat) => {}
            None => {
                stats.timeouts += 1;
                session.handle_input(SessionInput::Dismiss);
            }
        }
        if !sim.quiet {
            println!("run {}: {:?} after {} ticks", run_index + 1, outcome, ticks);
        }
    }

    if !sim.quiet {
        println!("\nlevels:");
        for id in &session.record().unlocked {
            println!("  {:<16} {}", id, session.record().level_of(id).unwrap_or(0));
        }
    }

    stats
}

fn main() {
    init_logging(Some("keycard_arena=warn"));

    let sim = match parse_args() {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            std::process::exit(1);
        }
    };

    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Invalid content catalog: {e}");
            std::process::exit(1);
        }
    };

    let file_store = if let Some(dir) = &sim.save_dir {
        Some(FileStore::new(dir.clone()))
    } else if sim.home {
        match FileStore::in_home() {
            Ok(store) => Some(store),
            Err(e) => {
                eprintln!("Failed to locate save directory: {e}");
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let game_config = match &sim.config_path {
        Some(path) => match GameConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => {
            let dir = match &file_store {
                Some(store) => Some(store.dir().to_path_buf()),
                None => default_save_dir().ok(),
            };
            dir.map(|d| GameConfig::load_or_default(&d.join(CONFIG_FILE_NAME)))
                .unwrap_or_default()
        }
    };

    let rng = StdRng::seed_from_u64(sim.seed);
    let stats = match file_store {
        Some(store) => run(&sim, Session::new(catalog, store, game_config, rng)),
        None => run(
            &sim,
            Session::new(catalog, MemoryStore::new(), game_config, rng),
        ),
    };

    let avg_ticks = if sim.runs > 0 {
        stats.total_ticks as f64 / sim.runs as f64
    } else {
        0.0
    };
    println!(
        "seed={} draws={} new={} level_ups={} failed_saves={} runs={} wins={} timeouts={} avg_ticks={:.1} ultimates={}",
        sim.seed,
        sim.draws,
        stats.new_unlocks,
        stats.level_ups,
        stats.failed_saves,
        sim.runs,
        stats.victories,
        stats.timeouts,
        avg_ticks,
        stats.ultimates
    );
}
