mod bot;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use arena::{ArenaSimulation, Combatant, GameEvent, MatchConfig, MatchPhase, StartOptions};
use clap::Parser;

use bot::Bot;
use config::{RunConfig, load_match_config};

#[derive(Parser)]
#[command(name = "arena-sim")]
#[command(about = "Headless arena match runner")]
struct Args {
    #[arg(short, long, help = "RNG seed; overrides the config file")]
    seed: Option<u64>,

    #[arg(short, long, default_value_t = RunConfig::default().ticks)]
    ticks: u64,

    #[arg(short, long, default_value_t = 60)]
    fps: u32,

    #[arg(long)]
    infinite_lives: bool,

    #[arg(short, long, help = "JSON match config")]
    config: Option<PathBuf>,

    #[arg(long, default_value = "bot")]
    player_name: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut match_config = match &args.config {
        Some(path) => load_match_config(path)?,
        None => MatchConfig::default(),
    };
    if let Some(seed) = args.seed {
        match_config.seed = seed;
    }

    let run = RunConfig {
        ticks: args.ticks,
        fps: args.fps,
        infinite_lives: args.infinite_lives,
        player_name: args.player_name,
    };

    log::info!(
        "Running {} ticks at {} fps (seed {:#x})",
        run.ticks,
        run.fps,
        match_config.seed
    );

    let mut sim = ArenaSimulation::new(match_config);
    sim.start(StartOptions {
        infinite_lives: run.infinite_lives,
        ..Default::default()
    })?;

    run_match(&mut sim, &run)?;
    report_leaderboard(&sim);
    Ok(())
}

fn run_match(sim: &mut ArenaSimulation, run: &RunConfig) -> Result<()> {
    let bot = Bot::default();
    let dt = run.frame_delta();

    for _ in 0..run.ticks {
        let input = bot.decide(sim);
        let summary = sim.tick(&input, dt);

        for pending in sim.drain_events() {
            log_event(pending.frame, &pending.event);
        }

        match summary.phase {
            MatchPhase::Victory => {
                report_match(sim, MatchPhase::Victory);
                let rank = sim.save_score(&run.player_name)?;
                log::info!("Victory at {:.1}s, leaderboard rank {:?}", sim.now(), rank);
                return Ok(());
            }
            MatchPhase::GameOver => {
                log::info!("Game over at {:.1}s", sim.now());
                report_match(sim, MatchPhase::GameOver);
                return Ok(());
            }
            MatchPhase::Menu | MatchPhase::Playing => {}
        }
    }

    log::warn!("Tick budget exhausted with the match still running");
    report_match(sim, sim.phase());
    Ok(())
}

fn log_event(frame: u64, event: &GameEvent) {
    match event {
        GameEvent::EnemyKilled { enemy } => log::info!("[{}] Enemy {:?} killed", frame, enemy),
        GameEvent::PlayerHit { damage, remaining } => {
            log::info!("[{}] Player hit for {} ({} left)", frame, damage, remaining)
        }
        GameEvent::PhaseChanged { from, to } => {
            log::info!("[{}] Phase {:?} -> {:?}", frame, from, to)
        }
        other => log::debug!("[{}] {:?}", frame, other),
    }
}

fn report_match(sim: &ArenaSimulation, phase: MatchPhase) {
    let ctx = sim.context();
    log::info!(
        "Finished in {:?}: {} kills, {} shots, {:.0}% accuracy, {} hp left",
        phase,
        ctx.kills(),
        ctx.shots_fired(),
        ctx.accuracy(),
        sim.player().health().current()
    );
}

fn report_leaderboard(sim: &ArenaSimulation) {
    for (rank, entry) in sim.leaderboard().entries().iter().enumerate() {
        log::info!(
            "#{} {} - {} kills, {:.0}% accuracy, {:.1}s",
            rank + 1,
            entry.name,
            entry.kills,
            entry.accuracy,
            entry.elapsed_secs
        );
    }
}
