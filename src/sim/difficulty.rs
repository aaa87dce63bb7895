//! Difficulty curve
//!
//! Pure functions of elapsed match time. Speed grows without bound; the spawn
//! interval shrinks linearly until it hits the configured floor.

use crate::tuning::Tuning;

/// Fall speed (progress units per second) after `elapsed_secs`
pub fn speed_at(elapsed_secs: f32, tuning: &Tuning) -> f32 {
    tuning.base_speed + elapsed_secs * tuning.speed_increment
}

/// Minimum time between spawns (ms) after `elapsed_secs`, never below the floor
pub fn spawn_interval_at(elapsed_secs: f32, tuning: &Tuning) -> f32 {
    let interval = tuning.spawn_interval_initial_ms - elapsed_secs * tuning.spawn_interval_decrease_ms;
    interval.max(tuning.spawn_interval_min_ms)
}
