//! Obstacle manager: spawns, scrolls, retires, scores and collides pipes.
//!
//! Obstacles live in a FIFO in spawn order. They all scroll at the same speed,
//! so spawn order is also left-to-right order and the oldest obstacle is always
//! the first to leave the screen. Retiring therefore only ever pops the front.

use super::geometry::Bounds;
use super::obstacle::{Obstacle, ObstacleGeometry};
use crate::config::GameConfig;
use rand::Rng;
use std::collections::VecDeque;
use std::ops::RangeInclusive;

#[derive(Debug, Clone)]
pub struct ObstacleManager {
    obstacles: VecDeque<Obstacle>,
    /// Signed so a head start can reach back before the clock's origin.
    last_spawn_ms: i64,
    spawn_period_ms: u64,
    spawn_x: f64,
    scroll_speed: f64,
    gap_range: RangeInclusive<f64>,
    geometry: ObstacleGeometry,
}

impl ObstacleManager {
    /// Empty manager whose spawn timer counts from `now_ms`.
    ///
    /// `geometry.gap_size` is taken from `config`; callers only supply the
    /// pipe sprite's width and height.
    pub fn new(config: &GameConfig, pipe_width: f64, pipe_height: f64, now_ms: u64) -> Self {
        Self {
            obstacles: VecDeque::new(),
            last_spawn_ms: now_ms as i64,
            spawn_period_ms: config.spawn_period_ms,
            spawn_x: config.spawn_x(),
            scroll_speed: config.scroll_speed,
            gap_range: config.gap_center_range(),
            geometry: ObstacleGeometry {
                width: pipe_width,
                piece_height: pipe_height,
                gap_size: config.gap_size,
            },
        }
    }

    /// Restart the spawn timer so the next spawn happens `spawn_period`
    /// after `now_ms`, minus `head_start_ms` already counted as elapsed.
    pub fn arm_spawn_timer(&mut self, now_ms: u64, head_start_ms: u64) {
        self.last_spawn_ms = now_ms as i64 - head_start_ms as i64;
    }

    /// Spawn one obstacle at the right edge if the flyer is alive and more
    /// than one spawn period has passed since the last spawn.
    ///
    /// Returns whether an obstacle was spawned.
    pub fn maybe_spawn<R: Rng>(&mut self, now_ms: u64, flyer_alive: bool, rng: &mut R) -> bool {
        if !flyer_alive || now_ms as i64 - self.last_spawn_ms <= self.spawn_period_ms as i64 {
            return false;
        }
        let gap_y = rng.gen_range(self.gap_range.clone());
        self.push(Obstacle::new(self.spawn_x, gap_y, self.geometry));
        self.last_spawn_ms = now_ms as i64;
        log::debug!("spawned obstacle at t={}ms with gap center {:.1}", now_ms, gap_y);
        true
    }

    /// Scroll every obstacle left, then retire the ones fully off screen.
    ///
    /// Returns the number of retired obstacles.
    pub fn advance(&mut self) -> usize {
        for obstacle in &mut self.obstacles {
            obstacle.update(self.scroll_speed);
        }

        let mut retired = 0;
        while self.obstacles.front().is_some_and(Obstacle::off_screen) {
            self.obstacles.pop_front();
            retired += 1;
        }
        if retired > 0 {
            log::debug!("retired {} obstacle(s), {} remaining", retired, self.obstacles.len());
        }
        retired
    }

    /// Spawn (if due) and then advance, as one per-tick step.
    pub fn update<R: Rng>(&mut self, now_ms: u64, flyer_alive: bool, rng: &mut R) {
        self.maybe_spawn(now_ms, flyer_alive, rng);
        self.advance();
    }

    /// Mark obstacles whose right edge is left of `flyer_x` as passed and
    /// return how many were newly passed. Each obstacle counts at most once.
    pub fn score_delta(&mut self, flyer_x: f64) -> u32 {
        let mut newly_passed = 0;
        for obstacle in self.obstacles.iter_mut().filter(|o| !o.passed) {
            if obstacle.right() < flyer_x {
                obstacle.passed = true;
                newly_passed += 1;
            }
        }
        newly_passed
    }

    /// Whether `flyer` touches or overlaps any top or bottom piece.
    pub fn collides_with(&self, flyer: &Bounds) -> bool {
        self.obstacles
            .iter()
            .any(|o| flyer.intersects(&o.top_bounds()) || flyer.intersects(&o.bottom_bounds()))
    }

    /// Enqueue an obstacle at the back. It must not be left of the current back.
    pub fn push(&mut self, obstacle: Obstacle) {
        debug_assert!(
            self.obstacles.back().map_or(true, |b| b.x <= obstacle.x),
            "obstacles must be enqueued in left-to-right order"
        );
        self.obstacles.push_back(obstacle);
    }

    /// Obstacles oldest (leftmost) first.
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn geometry(&self) -> ObstacleGeometry {
        self.geometry
    }

    pub fn last_spawn_ms(&self) -> i64 {
        self.last_spawn_ms
    }
}
