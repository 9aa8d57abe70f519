//! Axis-aligned rectangle geometry
//!
//! Everything in the arena is a rectangle: ships, bullets, the border and the
//! clickable button regions. Collision is plain AABB overlap.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle of the given size centered on `center`
    pub fn from_center(center: IVec2, size: IVec2) -> Self {
        Self::new(center.x - size.x / 2, center.y - size.y / 2, size.x, size.y)
    }

    /// Exclusive right edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Copy of this rectangle moved by `(dx, dy)`
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// AABB overlap. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Point hit-test (left/top edges inclusive, right/bottom exclusive)
    pub fn contains_point(&self, p: IVec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// True if `inner` lies entirely inside this rectangle (edges inclusive)
    pub fn contains_rect(&self, inner: &Rect) -> bool {
        inner.x >= self.x
            && inner.right() <= self.right()
            && inner.y >= self.y
            && inner.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_on_both_axes() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.overlaps(&Rect::new(5, 5, 10, 10)));
        assert!(Rect::new(5, 5, 10, 10).overlaps(&a));

        // Overlaps on x only
        assert!(!a.overlaps(&Rect::new(5, 20, 10, 10)));
        // Overlaps on y only
        assert!(!a.overlaps(&Rect::new(20, 5, 10, 10)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let ship = Rect::new(700, 300, 115, 110);
        let bullet = Rect::new(750, 350, 10, 5);
        assert!(ship.overlaps(&bullet));
        assert!(ship.contains_rect(&bullet));
    }

    #[test]
    fn test_from_center_and_hit_test() {
        let button = Rect::from_center(IVec2::new(450, 300), IVec2::new(300, 70));
        assert_eq!(button, Rect::new(300, 265, 300, 70));
        assert_eq!(button.center(), IVec2::new(450, 300));

        assert!(button.contains_point(IVec2::new(300, 265)));
        assert!(button.contains_point(IVec2::new(450, 300)));
        assert!(!button.contains_point(IVec2::new(600, 300)));
        assert!(!button.contains_point(IVec2::new(450, 335)));
    }
}
