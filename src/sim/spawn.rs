//! Disc spawning
//!
//! The lane comes from an injected `LaneSource` so tests can script it; any
//! `rand::Rng` is a lane source picking uniformly from both lanes.

use rand::Rng;

use super::state::{Disc, Lane};

/// Chooses the lane for each new disc
pub trait LaneSource {
    fn next_lane(&mut self) -> Lane;
}

impl<R: Rng + ?Sized> LaneSource for R {
    fn next_lane(&mut self) -> Lane {
        if self.random_bool(0.5) {
            Lane::Left
        } else {
            Lane::Right
        }
    }
}

/// Scripted lanes, cycling through the given sequence
#[derive(Debug, Clone)]
pub struct FixedLanes {
    lanes: Vec<Lane>,
    cursor: usize,
}

impl FixedLanes {
    /// # Panics
    /// If `lanes` is empty.
    pub fn new(lanes: impl Into<Vec<Lane>>) -> Self {
        let lanes = lanes.into();
        assert!(!lanes.is_empty(), "FixedLanes needs at least one lane");
        Self { lanes, cursor: 0 }
    }

    pub fn always(lane: Lane) -> Self {
        Self::new(vec![lane])
    }
}

impl LaneSource for FixedLanes {
    fn next_lane(&mut self) -> Lane {
        let lane = self.lanes[self.cursor % self.lanes.len()];
        self.cursor += 1;
        lane
    }
}

/// Create a fresh disc at progress 0 in a lane chosen by `lanes`
pub fn spawn(id: u32, lanes: &mut impl LaneSource, now_ms: f64) -> Disc {
    Disc::new(id, lanes.next_lane(), now_ms)
}
