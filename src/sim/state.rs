//! Match state and core simulation types
//!
//! A `MatchState` owns every player and every disc. Transitions in `tick.rs`
//! derive a new state from the previous one; nothing here is shared across players.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// One of the two tracks discs fall through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Lane {
    Left,
    Right,
}

impl Lane {
    pub const ALL: [Lane; LANE_COUNT as usize] = [Lane::Left, Lane::Right];

    /// Lane for an index in {0, 1}
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Lane::Left),
            1 => Some(Lane::Right),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Right => 1,
        }
    }
}

/// A single falling target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    /// Unique for the whole match
    pub id: u32,
    pub lane: Lane,
    /// Distance travelled since spawn; only ever grows while live
    pub progress: f32,
    /// Creation timestamp (ms). Informational only.
    pub spawned_at_ms: f64,
}

impl Disc {
    pub fn new(id: u32, lane: Lane, spawned_at_ms: f64) -> Self {
        Self {
            id,
            lane,
            progress: 0.0,
            spawned_at_ms,
        }
    }
}

/// One competitor's live state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub score: u32,
    /// Never below zero; zero means defeated
    pub lives: u8,
    /// Live discs owned by this player only
    pub discs: Vec<Disc>,
}

impl PlayerState {
    pub fn new(lives: u8) -> Self {
        Self {
            score: 0,
            lives,
            discs: Vec::new(),
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.lives == 0
    }

    /// Lose `missed` lives, floored at zero
    pub fn lose_lives(&mut self, missed: usize) {
        let missed = u8::try_from(missed).unwrap_or(u8::MAX);
        self.lives = self.lives.saturating_sub(missed);
    }

    /// Remove a disc by id, returning it if it was live
    pub fn take_disc(&mut self, id: u32) -> Option<Disc> {
        let index = self.discs.iter().position(|d| d.id == id)?;
        Some(self.discs.remove(index))
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// One or two players, fixed for the match
    pub players: Vec<PlayerState>,
    /// Current fall speed (progress units per second)
    pub speed: f32,
    /// Current minimum time between spawns per player (ms)
    pub spawn_interval_ms: f32,
    /// Timestamp the match began (ms), only used for the difficulty curve
    pub start_time_ms: f64,
    /// Terminal once set
    pub is_over: bool,
    /// Winning player index, two-player matches only
    pub winner: Option<usize>,
    /// Balance the match was started with
    pub tuning: Tuning,
    /// Next disc ID
    next_id: u32,
}

impl MatchState {
    /// Fresh match for `player_count` players (1 or 2) starting at `now_ms`
    ///
    /// # Panics
    /// If `player_count` is not 1 or 2, or `tuning` fails validation.
    pub fn start(player_count: usize, tuning: Tuning, now_ms: f64) -> Self {
        assert!(
            (1..=MAX_PLAYERS).contains(&player_count),
            "player count must be 1 or 2, got {player_count}"
        );
        if let Err(err) = tuning.validate() {
            panic!("{err}");
        }

        log::info!("Match started: {} player(s)", player_count);

        Self {
            players: (0..player_count)
                .map(|_| PlayerState::new(STARTING_LIVES))
                .collect(),
            speed: tuning.base_speed,
            spawn_interval_ms: tuning.spawn_interval_initial_ms,
            start_time_ms: now_ms,
            is_over: false,
            winner: None,
            tuning,
            next_id: 1,
        }
    }

    /// Allocate a new disc ID. Wraps after `u32::MAX`; ids only need to be
    /// unique among the discs live at the same time.
    pub fn next_disc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Seconds since the match began; follows the formula even if `now_ms` is earlier
    pub fn elapsed_secs(&self, now_ms: f64) -> f32 {
        ((now_ms - self.start_time_ms) / 1000.0) as f32
    }

    pub fn scores(&self) -> Vec<u32> {
        self.players.iter().map(|p| p.score).collect()
    }

    /// Borrow a player, failing fast on an index the caller never handed out
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn player(&self, index: usize) -> &PlayerState {
        self.check_player(index);
        &self.players[index]
    }

    pub(crate) fn player_mut(&mut self, index: usize) -> &mut PlayerState {
        self.check_player(index);
        &mut self.players[index]
    }

    pub(crate) fn check_player(&self, index: usize) {
        assert!(
            index < self.players.len(),
            "player index {index} out of range for a {}-player match",
            self.players.len()
        );
    }

    /// Decide the winner once somebody is out of lives.
    ///
    /// Survivor wins; if both fell in the same tick the higher score wins,
    /// and an exact tie goes to player 0.
    pub(crate) fn decide_winner(&self) -> Option<usize> {
        let [p0, p1] = self.players.as_slice() else {
            return None;
        };
        match (p0.is_defeated(), p1.is_defeated()) {
            (true, false) => Some(1),
            (false, true) => Some(0),
            _ => Some(if p0.score >= p1.score { 0 } else { 1 }),
        }
    }
}
