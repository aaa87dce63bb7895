//! Match state machine transitions
//!
//! Every operation comes in two forms: an `apply_*` method that updates a
//! state the caller owns, and a pure `tick`/`request_*` method that leaves the
//! receiver alone and returns the next state. `reduce` dispatches an `Action`
//! to the pure form.
//!
//! Once `is_over` is set every tick, spawn and hit is a no-op.

use glam::Vec2;

use super::difficulty::{spawn_interval_at, speed_at};
use super::hit::{HitOutcome, HitZone, resolve_point, resolve_zone};
use super::motion::{advance, partition_missed};
use super::spawn::{LaneSource, spawn};
use super::state::{Lane, MatchState};

/// One input to the match, as a single dispatchable value
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Reset to a fresh match (keeps the current tuning)
    Start { player_count: usize },
    /// Advance time by `delta_ms`; discs past `area_height` are misses
    Tick { delta_ms: f32, area_height: f32 },
    /// Drop a new disc for one player
    Spawn { player: usize },
    /// Lane tap resolved against the hit zone
    Hit { player: usize, lane: Lane, zone: HitZone },
    /// Precise tap resolved against rendered disc bounds
    Tap { player: usize, tap: Vec2, area_width: f32 },
}

/// Apply `action` to `state`, returning the next state
pub fn reduce(state: &MatchState, action: &Action, now_ms: f64, lanes: &mut impl LaneSource) -> MatchState {
    match *action {
        Action::Start { player_count } => MatchState::start(player_count, state.tuning, now_ms),
        Action::Tick { delta_ms, area_height } => state.tick(delta_ms, area_height, now_ms),
        Action::Spawn { player } => state.request_spawn(player, lanes, now_ms),
        Action::Hit { player, lane, zone } => state.request_hit(player, lane, zone),
        Action::Tap { player, tap, area_width } => state.request_tap(player, tap, area_width).0,
    }
}

/// Negative or non-finite deltas count as no time passing
fn sanitize_delta(delta_ms: f32) -> f32 {
    if delta_ms.is_finite() && delta_ms >= 0.0 {
        delta_ms
    } else {
        log::warn!("Ignoring invalid tick delta {delta_ms}ms");
        0.0
    }
}

impl MatchState {
    /// Advance every player's discs, charge misses, and end the match if someone is out of lives
    pub fn apply_tick(&mut self, delta_ms: f32, area_height: f32, now_ms: f64) {
        if self.is_over {
            return;
        }

        let delta_ms = sanitize_delta(delta_ms);
        let elapsed = self.elapsed_secs(now_ms);
        self.speed = speed_at(elapsed, &self.tuning);
        self.spawn_interval_ms = spawn_interval_at(elapsed, &self.tuning);

        let speed = self.speed;
        for player in &mut self.players {
            let moved = advance(&player.discs, delta_ms, speed);
            let (remaining, missed) = partition_missed(moved, area_height);
            player.discs = remaining;
            if missed > 0 {
                player.lose_lives(missed);
                log::debug!("Missed {} disc(s), {} lives left", missed, player.lives);
            }
        }

        if self.players.iter().any(|p| p.is_defeated()) {
            self.is_over = true;
            self.winner = self.decide_winner();
            log::info!(
                "Match over after {:.1}s: scores {:?}, winner {:?}",
                elapsed,
                self.scores(),
                self.winner
            );
        }
    }

    /// Append a new disc to `player`'s lane set. Returns its id, or `None` once over.
    ///
    /// # Panics
    /// If `player` is out of range.
    pub fn apply_spawn(&mut self, player: usize, lanes: &mut impl LaneSource, now_ms: f64) -> Option<u32> {
        self.check_player(player);
        if self.is_over {
            return None;
        }

        let id = self.next_disc_id();
        let disc = spawn(id, lanes, now_ms);
        log::debug!("Player {} spawn: disc {} in {:?}", player, id, disc.lane);
        self.player_mut(player).discs.push(disc);
        Some(id)
    }

    /// Resolve a lane tap with the zone policy and score it
    ///
    /// # Panics
    /// If `player` is out of range.
    pub fn apply_hit(&mut self, player: usize, lane: Lane, zone: HitZone) -> HitOutcome {
        if self.is_over {
            self.check_player(player);
            return HitOutcome::Miss;
        }
        let outcome = resolve_zone(&self.player(player).discs, lane, zone);
        self.consume(player, outcome);
        outcome
    }

    /// Resolve a precise tap with the point policy and score it
    ///
    /// # Panics
    /// If `player` is out of range.
    pub fn apply_tap(&mut self, player: usize, tap: Vec2, area_width: f32) -> HitOutcome {
        if self.is_over {
            self.check_player(player);
            return HitOutcome::Miss;
        }
        let outcome = resolve_point(&self.player(player).discs, tap, area_width, &self.tuning);
        self.consume(player, outcome);
        outcome
    }

    fn consume(&mut self, player: usize, outcome: HitOutcome) {
        let Some(disc_id) = outcome.disc_id() else {
            return;
        };
        let state = self.player_mut(player);
        if state.take_disc(disc_id).is_some() {
            state.score += 1;
            log::debug!("Player {} hit disc {}, score {}", player, disc_id, state.score);
        }
    }

    /// Next state after `delta_ms` of play in an area `area_height` tall
    pub fn tick(&self, delta_ms: f32, area_height: f32, now_ms: f64) -> MatchState {
        let mut next = self.clone();
        next.apply_tick(delta_ms, area_height, now_ms);
        next
    }

    /// Next state with one more disc for `player`
    pub fn request_spawn(&self, player: usize, lanes: &mut impl LaneSource, now_ms: f64) -> MatchState {
        let mut next = self.clone();
        next.apply_spawn(player, lanes, now_ms);
        next
    }

    /// Next state after `player` taps `lane`
    pub fn request_hit(&self, player: usize, lane: Lane, zone: HitZone) -> MatchState {
        self.request_hit_with_outcome(player, lane, zone).0
    }

    pub fn request_hit_with_outcome(&self, player: usize, lane: Lane, zone: HitZone) -> (MatchState, HitOutcome) {
        let mut next = self.clone();
        let outcome = next.apply_hit(player, lane, zone);
        (next, outcome)
    }

    /// Next state after `player` taps at `tap` in an area `area_width` wide
    pub fn request_tap(&self, player: usize, tap: Vec2, area_width: f32) -> (MatchState, HitOutcome) {
        let mut next = self.clone();
        let outcome = next.apply_tap(player, tap, area_width);
        (next, outcome)
    }
}
