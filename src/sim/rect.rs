//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: x grows right, y grows down. Every entity in the
//! simulation (player body, track segments) is composed from this one type.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.max_x(), self.max_y())
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }

    /// Inclusive point test: a point lying exactly on an edge is contained
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.max_x()
            && point.y >= self.y
            && point.y <= self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // a.max_x == b.x
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!right.intersects(&a));

        // a.max_y == below.y
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&below));

        // Nudged by a hair they do
        let nudged = Rect::new(9.9, 0.0, 10.0, 10.0);
        assert!(a.intersects(&nudged));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(5.0, 5.0)));
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(10.0, 3.0)));
        assert!(!r.contains(Vec2::new(10.1, 3.0)));
        assert!(!r.contains(Vec2::new(-0.1, 3.0)));
    }

    #[test]
    fn test_edge_point_contained_but_edge_rect_not_intersecting() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 5.0, 5.0);
        assert!(a.contains(b.min()));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_corners() {
        let r = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert_eq!(r.max_x(), 6.0);
        assert_eq!(r.max_y(), 8.0);
        assert_eq!(r.min(), Vec2::new(2.0, 3.0));
        assert_eq!(r.max(), Vec2::new(6.0, 8.0));
    }
}
