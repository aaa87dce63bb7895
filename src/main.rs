//! Disc Drop entry point
//!
//! Runs a headless match at 60 Hz with a simulated player on each side and
//! prints the result. Rendering and real input live outside this crate.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use disc_drop::consts::FRAME_MS;
use disc_drop::sim::Lane;
use disc_drop::{Engine, ManualClock, MatchPhase, Tuning};

/// Play area height used by the headless run
const AREA_HEIGHT: f32 = 600.0;

#[derive(Parser, Debug)]
#[command(name = "disc-drop")]
#[command(about = "Run a headless Disc Drop match between simulated players")]
struct Cli {
    /// Number of players
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    players: u8,

    /// Seed for disc lanes and the simulated players
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// JSON file overriding the default tuning
    #[arg(long, env = "DISC_DROP_TUNING")]
    tuning: Option<PathBuf>,

    /// Chance the simulated player catches a disc, 0..=1
    #[arg(long, default_value_t = 0.9)]
    accuracy: f64,

    /// Stop after this many simulated seconds
    #[arg(long, default_value_t = 600.0)]
    max_secs: f32,
}

fn load_tuning(path: Option<&Path>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    match Tuning::load(path) {
        Ok(tuning) => tuning,
        Err(err) => {
            log::warn!("{err}; using default tuning");
            Tuning::default()
        }
    }
}

/// Simulated player: decides once per disc, as it enters the hit zone,
/// whether it will catch it.
struct Autoplayer {
    rng: Pcg32,
    accuracy: f64,
    decided: HashSet<u32>,
}

impl Autoplayer {
    fn new(seed: u64, accuracy: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            accuracy,
            decided: HashSet::new(),
        }
    }

    fn play(&mut self, engine: &mut Engine<ManualClock>, player: usize) {
        let Some(state) = engine.state() else {
            return;
        };
        let zone = engine.tuning().hit_zone(AREA_HEIGHT);

        let mut taps = Vec::new();
        for disc in state.player(player).discs.iter().filter(|d| zone.contains(d.progress)) {
            if self.decided.insert(disc.id) && self.rng.random_bool(self.accuracy) {
                taps.push(disc.lane);
            }
        }

        for lane in taps {
            // Tap the middle of the lane's half of the screen
            let relative_x = match lane {
                Lane::Left => 0.25,
                Lane::Right => 0.75,
            };
            engine.tap_lane(player, relative_x, AREA_HEIGHT);
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    log::info!("Disc Drop (headless) starting...");
    let tuning = load_tuning(cli.tuning.as_deref());
    let players = usize::from(cli.players);
    let accuracy = cli.accuracy.clamp(0.0, 1.0);

    let clock = ManualClock::new(0.0);
    let mut engine = Engine::new(tuning, cli.seed, clock.clone());
    engine.start(players);

    let mut bots: Vec<Autoplayer> = (0..players)
        .map(|i| Autoplayer::new(engine.seed().wrapping_add(i as u64 + 1), accuracy))
        .collect();

    let max_frames = (cli.max_secs * 1000.0 / FRAME_MS) as u64;
    let mut frames = 0;
    while engine.phase() == MatchPhase::Running && frames < max_frames {
        clock.advance(f64::from(FRAME_MS));
        engine.frame(FRAME_MS, AREA_HEIGHT);
        for (player, bot) in bots.iter_mut().enumerate() {
            bot.play(&mut engine, player);
        }
        frames += 1;
    }

    let secs = frames as f32 * FRAME_MS / 1000.0;
    match engine.summary() {
        Some(summary) => {
            println!("Match over after {secs:.1}s (seed {})", engine.seed());
            for (player, score) in summary.scores.iter().enumerate() {
                println!("  player {}: {} caught", player + 1, score);
            }
            if let Some(winner) = summary.winner {
                println!("  winner: player {}", winner + 1);
            }
        }
        None => {
            let scores = engine.state().map(|s| s.scores()).unwrap_or_default();
            println!("Stopped after {secs:.1}s with the match still running, scores {scores:?}");
        }
    }

    ExitCode::SUCCESS
}
