//! Input-layer helpers
//!
//! The simulation only ever sees a lane or a tap position in play-area
//! coordinates. These helpers turn pointer positions into those.

use glam::Vec2;

use crate::sim::Lane;

/// Lane under a horizontal position given as a fraction of the area width.
/// The left half is lane 0.
pub fn lane_for_x(relative_x: f32) -> Lane {
    if relative_x < 0.5 { Lane::Left } else { Lane::Right }
}

/// Lane under a pointer at `x` within an area `area_width` wide
pub fn lane_for_point(x: f32, area_width: f32) -> Lane {
    if area_width <= 0.0 {
        return Lane::Left;
    }
    lane_for_x(x / area_width)
}

/// Map a tap on the far player's area, which is drawn rotated 180°, into that
/// player's own coordinates.
pub fn rotate_half_turn(tap: Vec2, area: Vec2) -> Vec2 {
    area - tap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_for_x_split() {
        assert_eq!(lane_for_x(0.0), Lane::Left);
        assert_eq!(lane_for_x(0.49), Lane::Left);
        assert_eq!(lane_for_x(0.5), Lane::Right);
        assert_eq!(lane_for_x(1.0), Lane::Right);
    }

    #[test]
    fn test_lane_for_point() {
        assert_eq!(lane_for_point(100.0, 400.0), Lane::Left);
        assert_eq!(lane_for_point(300.0, 400.0), Lane::Right);
        assert_eq!(lane_for_point(10.0, 0.0), Lane::Left);
    }

    #[test]
    fn test_rotate_half_turn() {
        let area = Vec2::new(400.0, 600.0);
        assert_eq!(rotate_half_turn(Vec2::new(100.0, 50.0), area), Vec2::new(300.0, 550.0));
        // Left lane for the far player is on the right of the screen
        let mapped = rotate_half_turn(Vec2::new(350.0, 10.0), area);
        assert_eq!(lane_for_point(mapped.x, area.x), Lane::Left);
    }
}
