//! Geometric primitives for layout analysis.
//!
//! Coordinates follow the top-down convention used throughout this crate:
//! y grows toward the bottom of the page, so `top <= bottom` for a
//! normalized rectangle. Bead rectangles supplied by a glyph source may
//! arrive either-handed and are normalized on entry.

use serde::{Deserialize, Serialize};

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use textweave::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An edge-based rectangle in page space.
///
/// Stored as its four edges rather than position plus size, because bead
/// rectangles and block bounds are naturally expressed and compared that way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge x-coordinate
    pub left: f32,
    /// Top edge y-coordinate
    pub top: f32,
    /// Right edge x-coordinate
    pub right: f32,
    /// Bottom edge y-coordinate
    pub bottom: f32,
}

impl Rect {
    /// Create a new rectangle from its four edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use textweave::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Return an equivalent rectangle with `left <= right` and
    /// `top <= bottom`, swapping edges as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use textweave::geometry::Rect;
    ///
    /// let flipped = Rect::new(100.0, 50.0, 0.0, 0.0);
    /// let rect = flipped.normalized();
    /// assert_eq!(rect.left, 0.0);
    /// assert_eq!(rect.top, 0.0);
    /// ```
    pub fn normalized(&self) -> Rect {
        Rect {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }

    /// Check if this rectangle contains a point (edges inclusive).
    ///
    /// # Examples
    ///
    /// ```
    /// use textweave::geometry::{Point, Rect};
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    /// assert!(rect.contains_point(&Point::new(50.0, 50.0)));
    /// assert!(!rect.contains_point(&Point::new(150.0, 150.0)));
    /// ```
    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Compute the union of this rectangle with another.
    ///
    /// Returns the smallest rectangle that contains both rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn test_rect_dimensions() {
        let r = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
    }

    #[test]
    fn test_rect_normalized() {
        let r = Rect::new(110.0, 70.0, 10.0, 20.0).normalized();
        assert_eq!(r.left, 10.0);
        assert_eq!(r.top, 20.0);
        assert_eq!(r.right, 110.0);
        assert_eq!(r.bottom, 70.0);

        // Already normalized rectangles are unchanged
        let r2 = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r2.normalized(), r2);
    }

    #[test]
    fn test_rect_contains_point() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains_point(&Point::new(50.0, 50.0)));
        assert!(!r.contains_point(&Point::new(150.0, 150.0)));
        // Edges are inclusive
        assert!(r.contains_point(&Point::new(0.0, 0.0)));
        assert!(r.contains_point(&Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_rect_union() {
        let r1 = Rect::new(0.0, 0.0, 50.0, 50.0);
        let r2 = Rect::new(25.0, 25.0, 75.0, 75.0);
        let union = r1.union(&r2);

        assert_eq!(union.left, 0.0);
        assert_eq!(union.top, 0.0);
        assert_eq!(union.right, 75.0);
        assert_eq!(union.bottom, 75.0);
    }
}
