//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through explicit deltas and timestamps
//! - Injected RNG only
//! - Disc ids handed out by the match, never a global counter
//! - No rendering or platform dependencies

pub mod difficulty;
pub mod hit;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use difficulty::{spawn_interval_at, speed_at};
pub use hit::{HitOutcome, HitZone, resolve_point, resolve_zone};
pub use motion::{advance, partition_missed};
pub use spawn::{FixedLanes, LaneSource, spawn};
pub use state::{Disc, Lane, MatchState, PlayerState};
pub use tick::{Action, reduce};
