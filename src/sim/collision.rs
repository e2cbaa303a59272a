//! Axis-aligned box overlap tests
//!
//! Every gameplay entity is a rectangle anchored at its top-centre, so a
//! single strict overlap test covers player/obstacle and player/fish.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in playfield pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of `size` whose top edge is centred on `anchor`
    pub fn from_top_center(anchor: Vec2, size: Vec2) -> Self {
        let half_w = size.x / 2.0;
        Self {
            min: Vec2::new(anchor.x - half_w, anchor.y),
            max: Vec2::new(anchor.x + half_w, anchor.y + size.y),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Anything with a box
pub trait Bounded {
    fn bounds(&self) -> Aabb;
}

/// Whether two entities overlap. Symmetric in its arguments.
#[inline]
pub fn collides(a: &impl Bounded, b: &impl Bounded) -> bool {
    a.bounds().overlaps(&b.bounds())
}

impl Bounded for Aabb {
    fn bounds(&self) -> Aabb {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_top_center(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_from_top_center() {
        let b = boxed(400.0, 450.0, 50.0, 40.0);
        assert_eq!(b.min, Vec2::new(375.0, 450.0));
        assert_eq!(b.max, Vec2::new(425.0, 490.0));
        assert_eq!(b.width(), 50.0);
        assert_eq!(b.height(), 40.0);
    }

    #[test]
    fn test_overlap() {
        let player = boxed(400.0, 450.0, 50.0, 40.0);
        let block = boxed(400.0, 420.0, 60.0, 50.0);
        assert!(collides(&player, &block));
    }

    #[test]
    fn test_edge_touching_is_not_a_hit() {
        // Vertical edges touch: block bottom at 450 == player top
        let player = boxed(400.0, 450.0, 50.0, 40.0);
        let above = boxed(400.0, 400.0, 60.0, 50.0);
        assert!(!collides(&player, &above));

        // Horizontal edges touch
        let beside = boxed(450.0, 450.0, 50.0, 40.0);
        assert!(!collides(&player, &beside));
    }

    #[test]
    fn test_adjacent_lanes_never_touch() {
        // Widest obstacle one lane over
        let player = boxed(400.0, 450.0, 50.0, 40.0);
        let iceberg = boxed(600.0, 450.0, 80.0, 60.0);
        assert!(!collides(&player, &iceberg));
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(
            ax in -100.0f32..900.0, ay in -100.0f32..700.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bx in -100.0f32..900.0, by in -100.0f32..700.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = boxed(ax, ay, aw, ah);
            let b = boxed(bx, by, bw, bh);
            prop_assert_eq!(collides(&a, &b), collides(&b, &a));
        }

        #[test]
        fn prop_box_overlaps_itself(
            x in -100.0f32..900.0, y in -100.0f32..700.0,
            w in 1.0f32..100.0, h in 1.0f32..100.0,
        ) {
            let a = boxed(x, y, w, h);
            prop_assert!(collides(&a, &a));
        }
    }
}
