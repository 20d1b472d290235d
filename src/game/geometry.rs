//! Axis-aligned bounding shapes used for collision and drawing.

use serde::{Deserialize, Serialize};

/// Width/height pair in play-space units (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle. `y` grows downward, like screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle of `size` centered on `(cx, cy)`.
    pub fn centered(cx: f64, cy: f64, size: Size) -> Self {
        Self::new(
            cx - size.width / 2.0,
            cy - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Closed intersection: rectangles that share only an edge or a corner
    /// still count as intersecting.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left <= other.right()
            && other.left <= self.right()
            && self.top <= other.bottom()
            && other.top <= self.bottom()
    }

    /// Whether the point lies inside (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_bounds() {
        let b = Bounds::centered(100.0, 300.0, Size::new(34.0, 24.0));
        assert_eq!(b.left, 83.0);
        assert_eq!(b.top, 288.0);
        assert_eq!(b.right(), 117.0);
        assert_eq!(b.bottom(), 312.0);
        assert_eq!(b.center_x(), 100.0);
        assert_eq!(b.center_y(), 300.0);
    }

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let right = Bounds::new(10.0, 0.0, 5.0, 10.0);
        let below = Bounds::new(0.0, 10.0, 10.0, 5.0);
        let corner = Bounds::new(10.0, 10.0, 1.0, 1.0);
        assert!(a.intersects(&right));
        assert!(a.intersects(&below));
        assert!(a.intersects(&corner));
    }

    #[test]
    fn test_separated_rects_do_not_intersect() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(10.01, 0.0, 5.0, 10.0);
        let c = Bounds::new(0.0, -5.01, 10.0, 5.0);
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_contains_point() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.contains(0.0, 0.0));
        assert!(a.contains(5.0, 10.0));
        assert!(!a.contains(10.5, 5.0));
    }
}
