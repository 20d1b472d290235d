//! Game tuning and play-area configuration.
//!
//! Every value has a built-in default matching the classic feel; a JSON file
//! may override any subset of them. Configuration is validated once, before a
//! `GameState` is ever built.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name inside the `~/.floppy-fish/` directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Rejected or unreadable configuration. Always fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("`{field}` must be a finite number")]
    NotFinite { field: &'static str },
    #[error("`{field}` must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("`{field}` must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("`flap_strength` must be negative (upward), got {0}")]
    FlapNotUpward(f64),
    #[error("`flyer_start_x_ratio` must lie in (0, 1), got {0}")]
    StartOutsidePlayArea(f64),
    #[error(
        "gap of {gap_size} does not fit: play height minus ground band and margins leaves only {available}"
    )]
    GapTooLarge { gap_size: f64, available: f64 },
}

/// All tunables consumed by the simulation and the frame driver.
///
/// Distances are play-space pixels, speeds are pixels per tick, times are
/// milliseconds of the frame driver's monotonic clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Downward acceleration added to the flyer's velocity each tick.
    pub gravity: f64,
    /// Velocity the flyer is set to on a flap (negative = upward).
    pub flap_strength: f64,
    /// Leftward obstacle movement per tick.
    pub scroll_speed: f64,
    /// Vertical opening between the top and bottom pipe pieces.
    pub gap_size: f64,
    /// Minimum time between two obstacle spawns.
    pub spawn_period_ms: u64,
    /// Portion of the spawn period counted as already elapsed when a run starts.
    pub spawn_head_start_ms: u64,
    /// How far past the right edge new obstacles appear.
    pub spawn_overshoot: f64,
    /// Slack kept between a gap and the top edge / ground band.
    pub spawn_margin: f64,
    pub play_width: f64,
    pub play_height: f64,
    /// Solid strip at the bottom of the play area.
    pub ground_band_height: f64,
    /// Flyer column as a fraction of the play width.
    pub flyer_start_x_ratio: f64,
    /// Target frame rate of the frame driver.
    pub fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            flap_strength: -8.0,
            scroll_speed: 3.0,
            gap_size: 150.0,
            spawn_period_ms: 1500,
            spawn_head_start_ms: 800,
            spawn_overshoot: 50.0,
            spawn_margin: 80.0,
            play_width: 400.0,
            play_height: 600.0,
            ground_band_height: 100.0,
            flyer_start_x_ratio: 0.25,
            fps: 60,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file. Fields absent from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// `~/.floppy-fish/config.json`, if a home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".floppy-fish").join(CONFIG_FILE_NAME))
    }

    /// Check every option, including the gap-fits-the-play-area invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("gravity", self.gravity),
            ("flap_strength", self.flap_strength),
            ("scroll_speed", self.scroll_speed),
            ("gap_size", self.gap_size),
            ("spawn_overshoot", self.spawn_overshoot),
            ("spawn_margin", self.spawn_margin),
            ("play_width", self.play_width),
            ("play_height", self.play_height),
            ("ground_band_height", self.ground_band_height),
            ("flyer_start_x_ratio", self.flyer_start_x_ratio),
        ];
        if let Some(&(field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite { field });
        }

        let positive = [
            ("gravity", self.gravity),
            ("scroll_speed", self.scroll_speed),
            ("gap_size", self.gap_size),
            ("play_width", self.play_width),
            ("play_height", self.play_height),
            ("spawn_period_ms", self.spawn_period_ms as f64),
            ("fps", self.fps as f64),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::NotPositive { field, value });
        }

        let non_negative = [
            ("spawn_overshoot", self.spawn_overshoot),
            ("spawn_margin", self.spawn_margin),
            ("ground_band_height", self.ground_band_height),
        ];
        if let Some(&(field, value)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::Negative { field, value });
        }

        if self.flap_strength >= 0.0 {
            return Err(ConfigError::FlapNotUpward(self.flap_strength));
        }
        if self.flyer_start_x_ratio <= 0.0 || self.flyer_start_x_ratio >= 1.0 {
            return Err(ConfigError::StartOutsidePlayArea(self.flyer_start_x_ratio));
        }

        // Checked on the range itself so rounding can never leave it empty
        let available = self.play_height - self.ground_band_height - 2.0 * self.spawn_margin;
        let gap_range = self.gap_center_range();
        if available < self.gap_size || gap_range.start() > gap_range.end() {
            return Err(ConfigError::GapTooLarge {
                gap_size: self.gap_size,
                available,
            });
        }

        Ok(())
    }

    /// Lowest y of the lethal band: the top edge of the ground.
    pub fn ground_y(&self) -> f64 {
        self.play_height - self.ground_band_height
    }

    /// Inclusive range a gap center is drawn from. Non-empty for a valid config.
    pub fn gap_center_range(&self) -> RangeInclusive<f64> {
        let half_gap = self.gap_size / 2.0;
        let low = self.spawn_margin + half_gap;
        let high = self.ground_y() - self.spawn_margin - half_gap;
        low..=high
    }

    /// Fixed start position of the flyer: its column and the vertical middle.
    pub fn flyer_start(&self) -> (f64, f64) {
        (
            self.play_width * self.flyer_start_x_ratio,
            (self.play_height / 2.0).floor(),
        )
    }

    /// X coordinate where obstacles are spawned.
    pub fn spawn_x(&self) -> f64 {
        self.play_width + self.spawn_overshoot
    }
}
