//! Hit resolution
//!
//! Two resolvers, both picking at most one disc:
//! - `resolve_zone`: lane index only. A disc is catchable while its progress is
//!   inside the hit zone; the one furthest along wins.
//! - `resolve_point`: precise tap position against each disc's rendered square.
//!   The disc whose vertical center is closest to the tap wins.
//!
//! Ties always go to the lowest disc id. A disc at progress 0 is already hittable.

use std::cmp::Ordering;

use glam::Vec2;

use super::state::{Disc, Lane};
use crate::tuning::Tuning;

/// Result of a hit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// This disc gets consumed
    Hit { disc_id: u32 },
    /// Nothing catchable; the state stays as it was
    Miss,
}

impl HitOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, HitOutcome::Hit { .. })
    }

    pub fn disc_id(&self) -> Option<u32> {
        match self {
            HitOutcome::Hit { disc_id } => Some(*disc_id),
            HitOutcome::Miss => None,
        }
    }
}

/// Catchable progress window, inclusive at both ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitZone {
    pub top: f32,
    pub bottom: f32,
}

impl HitZone {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Bottom `fraction` of a play area `area_height` tall. A NaN fraction
    /// gives a zero-height zone at the bottom edge.
    pub fn for_area(area_height: f32, fraction: f32) -> Self {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        Self {
            top: area_height - area_height * fraction,
            bottom: area_height,
        }
    }

    #[inline]
    pub fn contains(&self, progress: f32) -> bool {
        progress >= self.top && progress <= self.bottom
    }
}

/// Pick the disc a lane tap consumes: furthest along inside the zone, lowest id on ties
pub fn resolve_zone(discs: &[Disc], lane: Lane, zone: HitZone) -> HitOutcome {
    discs
        .iter()
        .filter(|d| d.lane == lane && zone.contains(d.progress))
        .min_by(|a, b| {
            b.progress
                .total_cmp(&a.progress)
                .then_with(|| a.id.cmp(&b.id))
        })
        .map_or(HitOutcome::Miss, |d| HitOutcome::Hit { disc_id: d.id })
}

/// Pick the disc a precise tap consumes.
///
/// A disc covers `[progress, progress + disc_size]` vertically and
/// `disc_size / 2` either side of its lane center horizontally.
pub fn resolve_point(discs: &[Disc], tap: Vec2, area_width: f32, tuning: &Tuning) -> HitOutcome {
    let size = tuning.disc_size;
    let half = size / 2.0;

    let distance = |disc: &Disc| (tap.y - (disc.progress + half)).abs();

    discs
        .iter()
        .filter(|disc| {
            let center_x = tuning.lane_centers[disc.lane.index()] * area_width;
            let within_x = (tap.x - center_x).abs() <= half;
            let within_y = tap.y >= disc.progress && tap.y <= disc.progress + size;
            within_x && within_y
        })
        .min_by(|a, b| match distance(a).total_cmp(&distance(b)) {
            Ordering::Equal => a.id.cmp(&b.id),
            other => other,
        })
        .map_or(HitOutcome::Miss, |d| HitOutcome::Hit { disc_id: d.id })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc(id: u32, lane: Lane, progress: f32) -> Disc {
        Disc {
            progress,
            ..Disc::new(id, lane, 0.0)
        }
    }

    const ZONE: HitZone = HitZone { top: 400.0, bottom: 500.0 };

    #[test]
    fn test_zone_empty_lane_misses() {
        let discs = vec![disc(1, Lane::Right, 450.0)];
        assert_eq!(resolve_zone(&discs, Lane::Left, ZONE), HitOutcome::Miss);
        assert_eq!(resolve_zone(&[], Lane::Left, ZONE), HitOutcome::Miss);
    }

    #[test]
    fn test_zone_edges_inclusive() {
        let discs = vec![disc(1, Lane::Left, 400.0)];
        assert_eq!(resolve_zone(&discs, Lane::Left, ZONE).disc_id(), Some(1));
        let discs = vec![disc(2, Lane::Left, 500.0)];
        assert_eq!(resolve_zone(&discs, Lane::Left, ZONE).disc_id(), Some(2));
        let discs = vec![disc(3, Lane::Left, 399.9), disc(4, Lane::Left, 500.1)];
        assert_eq!(resolve_zone(&discs, Lane::Left, ZONE), HitOutcome::Miss);
    }

    #[test]
    fn test_zone_prefers_furthest_disc() {
        let discs = vec![
            disc(1, Lane::Left, 410.0),
            disc(2, Lane::Left, 490.0),
            disc(3, Lane::Left, 450.0),
            disc(4, Lane::Right, 499.0),
        ];
        assert_eq!(resolve_zone(&discs, Lane::Left, ZONE).disc_id(), Some(2));
    }

    #[test]
    fn test_zone_tie_goes_to_lowest_id() {
        let discs = vec![disc(8, Lane::Right, 450.0), disc(3, Lane::Right, 450.0)];
        assert_eq!(resolve_zone(&discs, Lane::Right, ZONE).disc_id(), Some(3));
    }

    #[test]
    fn test_zone_fresh_disc_is_hittable() {
        let zone = HitZone::new(0.0, 100.0);
        let discs = vec![disc(1, Lane::Left, 0.0)];
        assert!(resolve_zone(&discs, Lane::Left, zone).is_hit());
    }

    #[test]
    fn test_zone_for_area() {
        let zone = HitZone::for_area(600.0, 0.2);
        assert_eq!(zone.top, 480.0);
        assert_eq!(zone.bottom, 600.0);
    }

    #[test]
    fn test_zone_for_area_out_of_range_fraction() {
        let zone = HitZone::for_area(600.0, f32::NAN);
        assert_eq!(zone, HitZone::new(600.0, 600.0));
        assert!(zone.contains(600.0));
        assert!(!zone.contains(599.0));

        assert_eq!(HitZone::for_area(600.0, 3.0), HitZone::new(0.0, 600.0));
        assert_eq!(HitZone::for_area(600.0, -1.0), HitZone::new(600.0, 600.0));
    }

    #[test]
    fn test_point_hits_disc_under_tap() {
        let tuning = Tuning::default();
        // Lane 0 center at 100 for a 400-wide area, disc spans y 200..280
        let discs = vec![disc(1, Lane::Left, 200.0), disc(2, Lane::Right, 200.0)];
        let outcome = resolve_point(&discs, Vec2::new(110.0, 240.0), 400.0, &tuning);
        assert_eq!(outcome.disc_id(), Some(1));
    }

    #[test]
    fn test_point_outside_bounds_misses() {
        let tuning = Tuning::default();
        let discs = vec![disc(1, Lane::Left, 200.0)];
        // Too far right of the lane center
        assert_eq!(resolve_point(&discs, Vec2::new(141.0, 240.0), 400.0, &tuning), HitOutcome::Miss);
        // Above the disc
        assert_eq!(resolve_point(&discs, Vec2::new(100.0, 199.0), 400.0, &tuning), HitOutcome::Miss);
        // Below the disc
        assert_eq!(resolve_point(&discs, Vec2::new(100.0, 281.0), 400.0, &tuning), HitOutcome::Miss);
    }

    #[test]
    fn test_point_overlap_prefers_closest_center() {
        let tuning = Tuning::default();
        // Centers at 240 and 270; tap at 265 is closer to the second
        let discs = vec![disc(1, Lane::Left, 200.0), disc(2, Lane::Left, 230.0)];
        let outcome = resolve_point(&discs, Vec2::new(100.0, 265.0), 400.0, &tuning);
        assert_eq!(outcome.disc_id(), Some(2));
    }

    #[test]
    fn test_point_equal_distance_goes_to_lowest_id() {
        let tuning = Tuning::default();
        // Centers at 240 and 260; tap at 250 is equidistant
        let discs = vec![disc(5, Lane::Left, 220.0), disc(2, Lane::Left, 200.0)];
        let outcome = resolve_point(&discs, Vec2::new(100.0, 250.0), 400.0, &tuning);
        assert_eq!(outcome.disc_id(), Some(2));
    }
}
