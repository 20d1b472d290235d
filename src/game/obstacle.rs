//! A single scrolling pipe pair.

use super::geometry::Bounds;

/// Geometry shared by every obstacle in a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleGeometry {
    /// Visual width of a pipe piece.
    pub width: f64,
    /// Visual height of a single pipe piece.
    pub piece_height: f64,
    /// Vertical opening between the two pieces.
    pub gap_size: f64,
}

/// Top and bottom pipe around a gap. Passive data: the manager moves and scores it.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge.
    pub x: f64,
    gap_y: f64,
    geometry: ObstacleGeometry,
    /// Set once the flyer has gone past; never cleared.
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap_y: f64, geometry: ObstacleGeometry) -> Self {
        Self {
            x,
            gap_y,
            geometry,
            passed: false,
        }
    }

    /// Vertical center of the gap.
    pub fn gap_y(&self) -> f64 {
        self.gap_y
    }

    pub fn right(&self) -> f64 {
        self.x + self.geometry.width
    }

    pub fn update(&mut self, scroll_speed: f64) {
        self.x -= scroll_speed;
    }

    /// Entirely past the left edge.
    pub fn off_screen(&self) -> bool {
        self.right() < 0.0
    }

    /// Piece hanging down from above, ending at the top of the gap.
    pub fn top_bounds(&self) -> Bounds {
        let bottom = self.gap_y - self.geometry.gap_size / 2.0;
        Bounds::new(
            self.x,
            bottom - self.geometry.piece_height,
            self.geometry.width,
            self.geometry.piece_height,
        )
    }

    /// Piece standing up from below, starting at the bottom of the gap.
    pub fn bottom_bounds(&self) -> Bounds {
        Bounds::new(
            self.x,
            self.gap_y + self.geometry.gap_size / 2.0,
            self.geometry.width,
            self.geometry.piece_height,
        )
    }
}
