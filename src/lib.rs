//! Floppy Fish - a terminal Flappy Bird clone.
//!
//! The `game` module is the pure simulation; `clock`, `input` and `ui` are
//! the frame driver, input source and renderer it is wired to by `game_loop`.

pub mod assets;
pub mod build_info;
pub mod clock;
pub mod config;
pub mod game;
pub mod game_loop;
pub mod input;
pub mod ui;

pub use assets::{AssetError, SpriteSet};
pub use config::{ConfigError, GameConfig};
pub use game::{GamePhase, GameState};
pub use game_loop::GameLoop;
pub use input::InputEvent;
