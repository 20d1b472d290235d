//! The player-controlled flyer.

use super::geometry::{Bounds, Size};

/// The bird. Its column is fixed for the whole run; only `y` and `velocity` move.
#[derive(Debug, Clone, PartialEq)]
pub struct Flyer {
    x: f64,
    /// Vertical center in play-space pixels (0 = top edge).
    pub y: f64,
    /// Vertical velocity in pixels/tick (positive = downward).
    pub velocity: f64,
    size: Size,
    bounds: Bounds,
    alive: bool,
    gravity: f64,
    flap_strength: f64,
}

impl Flyer {
    pub fn new(x: f64, y: f64, size: Size, gravity: f64, flap_strength: f64) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            size,
            bounds: Bounds::centered(x, y, size),
            alive: true,
            gravity,
            flap_strength,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Bounding shape as of the last update.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Overwrite the velocity with the flap impulse.
    ///
    /// Does nothing once the flyer is dead.
    pub fn flap(&mut self) {
        if self.alive {
            self.velocity = self.flap_strength;
        }
    }

    /// One physics step: accumulate gravity, move, re-center the bounds.
    pub fn update(&mut self) {
        self.velocity += self.gravity;
        self.y += self.velocity;
        self.bounds = Bounds::centered(self.x, self.y, self.size);
    }

    /// Permanent until the whole game is reset.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Sprite tilt in degrees for rendering (nose down while falling).
    pub fn tilt_degrees(&self) -> f64 {
        -self.velocity * 3.0
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, y: f64) {
        self.y = y;
        self.bounds = Bounds::centered(self.x, self.y, self.size);
    }
}
