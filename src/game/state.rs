//! Game state machine: NotStarted -> Playing -> Dead -> (reset) NotStarted.

use super::flyer::Flyer;
use super::geometry::{Bounds, Size};
use super::obstacles::ObstacleManager;
use crate::config::{ConfigError, GameConfig};
use crate::input::InputEvent;
use rand::Rng;

/// Sizes of the sprites the core needs for bounding shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDimensions {
    pub flyer: Size,
    pub pipe: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Frozen until the first flap.
    NotStarted,
    Playing,
    /// Flyer crashed; waits for a flap or reset.
    Dead,
}

/// Whether the loop should keep going after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// What happened during one `tick`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Whether the simulation actually stepped (only while playing).
    pub simulated: bool,
    /// Obstacles passed this tick.
    pub scored: u32,
    /// The flyer died this tick.
    pub died: bool,
}

/// Opaque sprite handle the renderer resolves to real art.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Flyer,
    PipeTop,
    PipeBottom,
    Ground,
}

/// One thing to draw, back to front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteId,
    pub bounds: Bounds,
    /// Rotation in degrees; only meaningful for the flyer.
    pub tilt_degrees: f64,
}

/// One run of the game: the flyer, the obstacles, and the score.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    sprites: SpriteDimensions,
    pub flyer: Flyer,
    pub obstacles: ObstacleManager,
    score: u32,
    phase: GamePhase,
}

impl GameState {
    /// Build a fresh run. Rejects a configuration whose gap cannot fit.
    pub fn new(
        config: GameConfig,
        sprites: SpriteDimensions,
        now_ms: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let flyer = Self::spawn_flyer(&config, sprites);
        let obstacles =
            ObstacleManager::new(&config, sprites.pipe.width, sprites.pipe.height, now_ms);
        Ok(Self {
            config,
            sprites,
            flyer,
            obstacles,
            score: 0,
            phase: GamePhase::NotStarted,
        })
    }

    fn spawn_flyer(config: &GameConfig, sprites: SpriteDimensions) -> Flyer {
        let (x, y) = config.flyer_start();
        Flyer::new(x, y, sprites.flyer, config.gravity, config.flap_strength)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// True from the first flap until the next reset.
    pub fn started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::Dead
    }

    /// Throw the run away: new flyer at the start position, no obstacles, score 0.
    pub fn reset(&mut self, now_ms: u64) {
        log::info!("reset (previous score {})", self.score);
        self.flyer = Self::spawn_flyer(&self.config, self.sprites);
        self.obstacles = ObstacleManager::new(
            &self.config,
            self.sprites.pipe.width,
            self.sprites.pipe.height,
            now_ms,
        );
        self.score = 0;
        self.phase = GamePhase::NotStarted;
    }

    /// Apply one input event.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: u64) -> Control {
        match event {
            InputEvent::Quit => return Control::Quit,
            InputEvent::ResetRequested => self.reset(now_ms),
            InputEvent::FlapOrClick => match self.phase {
                GamePhase::NotStarted => {
                    self.phase = GamePhase::Playing;
                    self.obstacles
                        .arm_spawn_timer(now_ms, self.config.spawn_head_start_ms);
                    self.flyer.flap();
                    log::info!("run started");
                }
                GamePhase::Playing => self.flyer.flap(),
                GamePhase::Dead => self.reset(now_ms),
            },
        }
        Control::Continue
    }

    /// One simulation step. Does nothing unless playing.
    ///
    /// Order: flyer physics, obstacle spawn/scroll/retire, scoring, then the
    /// death check against post-update positions.
    pub fn tick<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> TickReport {
        if self.phase != GamePhase::Playing {
            return TickReport::default();
        }

        self.flyer.update();
        self.obstacles.update(now_ms, self.flyer.is_alive(), rng);

        let scored = self.obstacles.score_delta(self.flyer.x());
        self.score += scored;

        let died = self.check_collisions();
        if died {
            self.flyer.kill();
            self.phase = GamePhase::Dead;
            log::info!("flyer crashed at y={:.1} with score {}", self.flyer.y, self.score);
        }

        TickReport {
            simulated: true,
            scored,
            died,
        }
    }

    /// Ground, ceiling, or any pipe piece.
    pub fn check_collisions(&self) -> bool {
        self.out_of_bounds() || self.obstacles.collides_with(&self.flyer.bounds())
    }

    /// Flyer center at or beyond the ceiling or the top of the ground band.
    pub fn out_of_bounds(&self) -> bool {
        self.flyer.y >= self.config.ground_y() || self.flyer.y <= 0.0
    }

    /// Everything to draw this frame, back to front: pipes, ground, flyer.
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(self.obstacles.len() * 2 + 2);
        for obstacle in self.obstacles.iter() {
            commands.push(DrawCommand {
                sprite: SpriteId::PipeTop,
                bounds: obstacle.top_bounds(),
                tilt_degrees: 0.0,
            });
            commands.push(DrawCommand {
                sprite: SpriteId::PipeBottom,
                bounds: obstacle.bottom_bounds(),
                tilt_degrees: 0.0,
            });
        }
        commands.push(DrawCommand {
            sprite: SpriteId::Ground,
            bounds: Bounds::new(
                0.0,
                self.config.ground_y(),
                self.config.play_width,
                self.config.ground_band_height,
            ),
            tilt_degrees: 0.0,
        });
        commands.push(DrawCommand {
            sprite: SpriteId::Flyer,
            bounds: self.flyer.bounds(),
            tilt_degrees: self.flyer.tilt_degrees(),
        });
        commands
    }
}
