//! Clock-driven match driver
//!
//! Holds everything the pure simulation deliberately does not: a time source,
//! the seeded RNG, and when each player last received a disc. One `Engine`
//! is driven by a single caller, one frame or input event at a time.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::input::{lane_for_x, rotate_half_turn};
use crate::sim::{Action, HitOutcome, Lane, MatchState, reduce};
use crate::tuning::Tuning;

/// Monotonic millisecond time source
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock measured from when it was created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-advanced clock. Clones share the same time, so a test can keep a
/// handle while the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Where the engine is in its match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// No match started yet
    NotStarted,
    /// Ticks, spawns and hits are applied
    Running,
    /// Terminal; every input is ignored until the next start
    Over,
}

/// Final result of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub scores: Vec<u32>,
    /// Two-player matches only
    pub winner: Option<usize>,
}

/// Match driver: owns the state, clock, RNG and per-player spawn timers
pub struct Engine<C: Clock = SystemClock> {
    tuning: Tuning,
    clock: C,
    seed: u64,
    rng: Pcg32,
    state: Option<MatchState>,
    /// Time each player last received a disc (ms)
    last_spawn_ms: Vec<f64>,
}

impl<C: Clock> Engine<C> {
    /// # Panics
    /// If `tuning` fails [`Tuning::validate`].
    pub fn new(tuning: Tuning, seed: u64, clock: C) -> Self {
        if let Err(err) = tuning.validate() {
            panic!("{err}");
        }
        Self {
            tuning,
            clock,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            state: None,
            last_spawn_ms: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Current match, if one was started
    pub fn state(&self) -> Option<&MatchState> {
        self.state.as_ref()
    }

    pub fn phase(&self) -> MatchPhase {
        match &self.state {
            None => MatchPhase::NotStarted,
            Some(state) if state.is_over => MatchPhase::Over,
            Some(_) => MatchPhase::Running,
        }
    }

    /// Begin a fresh match for 1 or 2 players
    ///
    /// # Panics
    /// If `player_count` is not 1 or 2.
    pub fn start(&mut self, player_count: usize) {
        let now = self.clock.now_ms();
        self.state = Some(MatchState::start(player_count, self.tuning, now));
        self.last_spawn_ms = vec![now; player_count];
        log::info!("Engine started {}-player match (seed {})", player_count, self.seed);
    }

    /// Start again with the same number of players
    pub fn restart(&mut self) {
        let players = self.state.as_ref().map_or(1, |s| s.player_count());
        self.start(players);
    }

    /// Advance one frame: tick the match, then give each player a disc if
    /// their spawn interval has passed.
    ///
    /// The interval compared against is the one in force before this frame's
    /// tick, so the first disc arrives just after `spawn_interval_initial_ms`.
    pub fn frame(&mut self, delta_ms: f32, area_height: f32) {
        let now = self.clock.now_ms();
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if state.is_over {
            return;
        }

        let interval = f64::from(state.spawn_interval_ms);
        state.apply_tick(delta_ms, area_height, now);
        if state.is_over {
            return;
        }

        for (player, last) in self.last_spawn_ms.iter_mut().enumerate() {
            if now - *last > interval {
                state.apply_spawn(player, &mut self.rng, now);
                *last = now;
            }
        }
    }

    /// Apply one action through the reducer
    pub fn dispatch(&mut self, action: &Action) {
        if let Action::Start { player_count } = *action {
            self.start(player_count);
            return;
        }
        let Some(state) = self.state.as_ref() else {
            log::debug!("Ignoring {:?} before the match started", action);
            return;
        };
        let next = reduce(state, action, self.clock.now_ms(), &mut self.rng);
        self.state = Some(next);
    }

    /// Lane tap resolved against the hit zone for an area `area_height` tall
    pub fn hit(&mut self, player: usize, lane: Lane, area_height: f32) -> HitOutcome {
        let zone = self.tuning.hit_zone(area_height);
        match self.state.as_mut() {
            Some(state) => state.apply_hit(player, lane, zone),
            None => HitOutcome::Miss,
        }
    }

    /// Tap at a fraction `relative_x` of the area width, mapped to a lane
    pub fn tap_lane(&mut self, player: usize, relative_x: f32, area_height: f32) -> HitOutcome {
        self.hit(player, lane_for_x(relative_x), area_height)
    }

    /// Precise tap in screen coordinates of an area of size `area`.
    ///
    /// Player 1's area is drawn upside down, so its taps are rotated first.
    pub fn tap_point(&mut self, player: usize, tap: Vec2, area: Vec2) -> HitOutcome {
        let tap = if player == 1 { rotate_half_turn(tap, area) } else { tap };
        match self.state.as_mut() {
            Some(state) => state.apply_tap(player, tap, area.x),
            None => HitOutcome::Miss,
        }
    }

    /// Scores and winner, once the match is over
    pub fn summary(&self) -> Option<MatchSummary> {
        let state = self.state.as_ref().filter(|s| s.is_over)?;
        Some(MatchSummary {
            scores: state.scores(),
            winner: state.winner,
        })
    }
}
