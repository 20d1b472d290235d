//! Core simulation: the flyer, the scrolling obstacles, and the run state machine.
//!
//! Nothing in here touches the terminal, the clock, or the filesystem. Time
//! arrives as a millisecond timestamp and randomness as an injected `Rng`.

pub mod flyer;
pub mod geometry;
pub mod obstacle;
pub mod obstacles;
pub mod state;

pub use flyer::Flyer;
pub use geometry::{Bounds, Size};
pub use obstacle::{Obstacle, ObstacleGeometry};
pub use obstacles::ObstacleManager;
pub use state::{
    Control, DrawCommand, GamePhase, GameState, SpriteDimensions, SpriteId, TickReport,
};
