//! Arena demo CLI.
//!
//! Recruits four heroes and plays a fixed fight script, printing one line
//! per combat event.
//!
//! Usage:
//!   cargo run -- [OPTIONS]
//!
//! Examples:
//!   cargo run                        # Random crit rolls
//!   cargo run -- --seed 42           # Reproducible run
//!   cargo run -- --json              # Also save arena_log_<timestamp>.json

use anyhow::{Context, Result};
use arena::build_info;
use arena::combat::Tee;
use arena::{
    Arena, ArenaAction, ArenaConfig, CombatLog, ConsoleSink, EventSink, Hero, HeroId, JsonOutput,
};
use clap::Parser;
use rand::Rng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(about = "Play the scripted hero arena fight")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Seed for crit rolls (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the event log as JSON (to PATH, or a timestamped file)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    json: Option<Option<PathBuf>>,

    /// Do not print combat lines
    #[arg(short, long)]
    quiet: bool,

    /// Log filter when RUST_LOG is unset (e.g. "debug", "arena=trace")
    #[arg(long, default_value = "warn")]
    log: String,

    /// Print version information
    #[arg(short = 'v', long)]
    version: bool,
}

impl From<Cli> for ArenaConfig {
    fn from(cli: Cli) -> Self {
        let json = match cli.json {
            None => JsonOutput::Off,
            Some(None) => JsonOutput::Auto,
            Some(Some(path)) => JsonOutput::Path(path),
        };
        ArenaConfig {
            seed: cli.seed,
            json,
            quiet: cli.quiet,
            log_filter: cli.log,
        }
    }
}

/// Console output that can be switched off.
struct MaybeConsole(Option<ConsoleSink>);

impl EventSink for MaybeConsole {
    fn record(&mut self, event: arena::CombatEvent) {
        if let Some(console) = &mut self.0 {
            console.record(event);
        }
    }
}

struct Roster {
    garen: HeroId,
    ryze: HeroId,
    talon: HeroId,
    sarante: HeroId,
}

fn recruit_demo_roster<R: Rng, S: EventSink>(arena: &mut Arena<R, S>) -> Roster {
    Roster {
        garen: arena.recruit(Hero::tank("Garen", 150, 50, 1.5)),
        ryze: arena.recruit(Hero::mage("Ryze", 100, 70, 200, 2)),
        // Crit chance above 1.0: every attack crits
        talon: arena.recruit(Hero::assassin("Talon", 80, 90, 2.0)),
        sarante: arena.recruit(Hero::cleric("Sarante", 120, 40, 1.2)),
    }
}

fn demo_script(r: &Roster) -> Vec<ArenaAction> {
    vec![
        ArenaAction::Display(r.garen),
        ArenaAction::Display(r.ryze),
        ArenaAction::Display(r.talon),
        ArenaAction::Display(r.sarante),
        ArenaAction::attack(r.garen, r.ryze),
        ArenaAction::attack(r.ryze, r.garen),
        ArenaAction::attack(r.talon, r.garen),
        ArenaAction::attack(r.talon, r.ryze),
        ArenaAction::heal(r.sarante, r.garen),
        ArenaAction::heal(r.sarante, r.ryze),
        ArenaAction::attack(r.garen, r.talon),
        ArenaAction::attack(r.garen, r.talon),
        ArenaAction::attack(r.talon, r.garen),
        ArenaAction::heal(r.sarante, r.talon),
    ]
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    let config = ArenaConfig::from(cli);
    init_tracing(&config.log_filter);
    tracing::info!(seed = ?config.seed, "starting arena");

    let console = MaybeConsole((!config.quiet).then_some(ConsoleSink));
    let sink = Tee {
        first: console,
        second: CombatLog::new(),
    };
    let mut arena = Arena::new(config.rng(), sink);

    let roster = recruit_demo_roster(&mut arena);
    arena
        .run(&demo_script(&roster))
        .context("demo script referenced a missing hero")?;

    if let Some(path) = config.json_path(chrono::Utc::now()) {
        let log = arena.into_sink().second;
        let json = log.to_json().context("failed to serialize combat log")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Combat log saved to: {}", path.display());
    }

    Ok(())
}
