//! Disc Drop - A two-lane reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (difficulty, spawning, motion, hits, match state)
//! - `tuning`: Data-driven game balance
//! - `input`: Lane mapping and hit-zone sizing for the input layer
//! - `engine`: Clock-driven match driver with per-player spawn timers

pub mod engine;
pub mod input;
pub mod sim;
pub mod tuning;

pub use engine::{Clock, Engine, ManualClock, MatchPhase, MatchSummary, SystemClock};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Number of lanes discs fall through
    pub const LANE_COUNT: u8 = 2;
    /// Lives each player starts a match with
    pub const STARTING_LIVES: u8 = 3;
    /// Most players a match supports
    pub const MAX_PLAYERS: usize = 2;

    /// Fall speed at match start (progress units per second)
    pub const BASE_SPEED: f32 = 200.0;
    /// Fall speed gained per elapsed second
    pub const SPEED_INCREMENT: f32 = 5.0;

    /// Spawn interval at match start (ms)
    pub const SPAWN_INTERVAL_INITIAL_MS: f32 = 1500.0;
    /// Spawn interval floor (ms)
    pub const SPAWN_INTERVAL_MIN_MS: f32 = 500.0;
    /// Spawn interval lost per elapsed second (ms)
    pub const SPAWN_INTERVAL_DECREASE_MS: f32 = 20.0;

    /// Horizontal lane centers as a fraction of the play-area width
    pub const LANE_CENTERS: [f32; 2] = [0.25, 0.75];
    /// Rendered disc diameter (progress units / pixels)
    pub const DISC_SIZE: f32 = 80.0;
    /// Share of the play-area height, measured up from the bottom, that is catchable
    pub const HIT_ZONE_FRACTION: f32 = 0.2;

    /// Frame step used by the headless driver (60 Hz)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
}

/// Convert a millisecond delta to seconds
#[inline]
pub fn ms_to_secs(ms: f32) -> f32 {
    ms / 1000.0
}
