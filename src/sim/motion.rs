//! Disc motion and miss detection

use super::state::Disc;
use crate::ms_to_secs;

/// Move every disc down by `speed * delta`, returning the moved discs.
///
/// `delta_ms` is in milliseconds; speed is calibrated per second.
pub fn advance(discs: &[Disc], delta_ms: f32, speed: f32) -> Vec<Disc> {
    let step = speed * ms_to_secs(delta_ms);
    discs
        .iter()
        .map(|disc| Disc {
            progress: disc.progress + step,
            ..disc.clone()
        })
        .collect()
}

/// Split discs into those still on screen (order kept) and a count of those past `boundary`.
///
/// A disc exactly on the boundary is still live.
pub fn partition_missed(discs: Vec<Disc>, boundary: f32) -> (Vec<Disc>, usize) {
    let (remaining, missed): (Vec<Disc>, Vec<Disc>) =
        discs.into_iter().partition(|disc| disc.progress <= boundary);
    (remaining, missed.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Lane;

    fn disc_at(id: u32, progress: f32) -> Disc {
        Disc {
            progress,
            ..Disc::new(id, Lane::Left, 0.0)
        }
    }

    #[test]
    fn test_advance_converts_ms() {
        let discs = vec![disc_at(1, 0.0), disc_at(2, 50.0)];
        let moved = advance(&discs, 500.0, 200.0);
        assert_eq!(moved[0].progress, 100.0);
        assert_eq!(moved[1].progress, 150.0);
        // Input untouched
        assert_eq!(discs[0].progress, 0.0);
    }

    #[test]
    fn test_advance_zero_delta() {
        let discs = vec![disc_at(1, 12.5)];
        assert_eq!(advance(&discs, 0.0, 999.0), discs);
    }

    #[test]
    fn test_partition_boundary_is_inclusive() {
        let discs = vec![disc_at(1, 149.9), disc_at(2, 150.0), disc_at(3, 150.1)];
        let (remaining, missed) = partition_missed(discs, 150.0);
        assert_eq!(missed, 1);
        assert_eq!(remaining.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_partition_keeps_order() {
        let discs = vec![disc_at(5, 300.0), disc_at(3, 10.0), disc_at(9, 400.0), disc_at(1, 20.0)];
        let (remaining, missed) = partition_missed(discs, 100.0);
        assert_eq!(missed, 2);
        assert_eq!(remaining.iter().map(|d| d.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn test_one_second_at_200_passes_150() {
        let moved = advance(&[disc_at(1, 0.0)], 1000.0, 200.0);
        assert_eq!(moved[0].progress, 200.0);
        let (remaining, missed) = partition_missed(moved, 150.0);
        assert!(remaining.is_empty());
        assert_eq!(missed, 1);
    }
}
