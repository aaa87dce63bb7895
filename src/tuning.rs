//! Data-driven game balance
//!
//! Every constant the simulation reads comes through `Tuning`. Defaults match
//! `crate::consts`; a JSON file may override any subset of fields.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::HitZone;

/// Errors loading a tuning file
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read tuning file: {err}"),
            Self::Parse(err) => write!(f, "malformed tuning JSON: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning value `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Balance knobs for one match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Fall speed at match start (units/s)
    pub base_speed: f32,
    /// Speed gained per elapsed second
    pub speed_increment: f32,
    pub spawn_interval_initial_ms: f32,
    pub spawn_interval_min_ms: f32,
    /// Interval lost per elapsed second (ms)
    pub spawn_interval_decrease_ms: f32,
    /// Catchable share of the play-area height, from the bottom
    pub hit_zone_fraction: f32,
    /// Rendered disc diameter, used by point hits
    pub disc_size: f32,
    /// Lane centers as fractions of the play-area width
    pub lane_centers: [f32; 2],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            speed_increment: SPEED_INCREMENT,
            spawn_interval_initial_ms: SPAWN_INTERVAL_INITIAL_MS,
            spawn_interval_min_ms: SPAWN_INTERVAL_MIN_MS,
            spawn_interval_decrease_ms: SPAWN_INTERVAL_DECREASE_MS,
            hit_zone_fraction: HIT_ZONE_FRACTION,
            disc_size: DISC_SIZE,
            lane_centers: LANE_CENTERS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let non_negative = [
            ("base_speed", self.base_speed),
            ("speed_increment", self.speed_increment),
            ("spawn_interval_initial_ms", self.spawn_interval_initial_ms),
            ("spawn_interval_min_ms", self.spawn_interval_min_ms),
            ("spawn_interval_decrease_ms", self.spawn_interval_decrease_ms),
            ("disc_size", self.disc_size),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a finite, non-negative number",
                });
            }
        }

        if self.spawn_interval_min_ms == 0.0 {
            return Err(TuningError::Invalid {
                field: "spawn_interval_min_ms",
                reason: "spawns can't be instantaneous",
            });
        }
        if !(0.0..=1.0).contains(&self.hit_zone_fraction) {
            return Err(TuningError::Invalid {
                field: "hit_zone_fraction",
                reason: "must be within 0..=1",
            });
        }
        if self.lane_centers.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(TuningError::Invalid {
                field: "lane_centers",
                reason: "must be fractions of the area width",
            });
        }

        Ok(())
    }

    /// Hit zone for a play area `area_height` tall
    pub fn hit_zone(&self, area_height: f32) -> HitZone {
        HitZone::for_area(area_height, self.hit_zone_fraction)
    }
}
