//! Point/box collision primitives
//!
//! Everything in the game collides via axis-aligned boxes given as a center
//! plus half-extents. All containment checks are inclusive on the edges.

use glam::Vec2;

/// True if `p` lies within the box centered at `center` with the given
/// half-extents, edges inclusive.
#[inline]
pub fn point_in_box(p: Vec2, center: Vec2, half_w: f32, half_h: f32) -> bool {
    p.x >= center.x - half_w
        && p.x <= center.x + half_w
        && p.y >= center.y - half_h
        && p.y <= center.y + half_h
}

/// True if two axis-aligned boxes overlap, edges inclusive.
#[inline]
pub fn box_overlap(c1: Vec2, hw1: f32, hh1: f32, c2: Vec2, hw2: f32, hh2: f32) -> bool {
    (c1.x - c2.x).abs() <= hw1 + hw2 && (c1.y - c2.y).abs() <= hh1 + hh2
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_on_box_edge_counts_as_inside() {
        let center = Vec2::new(10.0, 10.0);
        // All four edges, inclusive
        assert!(point_in_box(Vec2::new(5.0, 10.0), center, 5.0, 5.0));
        assert!(point_in_box(Vec2::new(15.0, 10.0), center, 5.0, 5.0));
        assert!(point_in_box(Vec2::new(10.0, 5.0), center, 5.0, 5.0));
        assert!(point_in_box(Vec2::new(10.0, 15.0), center, 5.0, 5.0));
        // Corners
        assert!(point_in_box(Vec2::new(5.0, 5.0), center, 5.0, 5.0));
        assert!(point_in_box(Vec2::new(15.0, 15.0), center, 5.0, 5.0));
    }

    #[test]
    fn point_just_outside_box_is_outside() {
        let center = Vec2::new(10.0, 10.0);
        assert!(!point_in_box(Vec2::new(4.99, 10.0), center, 5.0, 5.0));
        assert!(!point_in_box(Vec2::new(10.0, 15.01), center, 5.0, 5.0));
    }

    #[test]
    fn touching_boxes_overlap() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(box_overlap(a, 5.0, 5.0, b, 5.0, 5.0));
        assert!(!box_overlap(a, 4.9, 5.0, b, 5.0, 5.0));
    }

    #[test]
    fn distance_matches_pythagoras() {
        let d = distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }
}
