//! Sprite provider.
//!
//! Sprites are terminal glyphs, but they keep real dimensions: the simulation
//! derives every bounding shape from them. The set is loaded once at startup
//! and is read-only afterwards.

use crate::game::{Size, SpriteDimensions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A sprite manifest could not be used. Fatal before the game starts.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("could not read sprite manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed sprite manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("sprite `{name}` has an invalid size {width}x{height}")]
    InvalidSize {
        name: &'static str,
        width: f64,
        height: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteInfo {
    pub width: f64,
    pub height: f64,
    /// Character used to fill the sprite's cells.
    pub glyph: char,
}

impl SpriteInfo {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSet {
    pub flyer: SpriteInfo,
    pub pipe: SpriteInfo,
    pub ground: SpriteInfo,
}

impl Default for SpriteSet {
    fn default() -> Self {
        Self {
            flyer: SpriteInfo {
                width: 34.0,
                height: 24.0,
                glyph: '►',
            },
            pipe: SpriteInfo {
                width: 52.0,
                height: 320.0,
                glyph: '█',
            },
            ground: SpriteInfo {
                width: 1.0,
                height: 1.0,
                glyph: '▒',
            },
        }
    }
}

impl SpriteSet {
    /// Load a JSON manifest. Sprites missing from it keep the built-in art.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let json = fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sprites: SpriteSet =
            serde_json::from_str(&json).map_err(|source| AssetError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        sprites.validate()?;
        log::info!(
            "loaded sprites from {} (flyer {}x{}, pipe {}x{})",
            path.display(),
            sprites.flyer.width,
            sprites.flyer.height,
            sprites.pipe.width,
            sprites.pipe.height
        );
        Ok(sprites)
    }

    pub fn validate(&self) -> Result<(), AssetError> {
        for (name, info) in [
            ("flyer", &self.flyer),
            ("pipe", &self.pipe),
            ("ground", &self.ground),
        ] {
            let valid = |v: f64| v.is_finite() && v > 0.0;
            if !valid(info.width) || !valid(info.height) {
                return Err(AssetError::InvalidSize {
                    name,
                    width: info.width,
                    height: info.height,
                });
            }
        }
        Ok(())
    }

    /// The read-only sizes the simulation needs.
    pub fn dimensions(&self) -> SpriteDimensions {
        SpriteDimensions {
            flyer: self.flyer.size(),
            pipe: self.pipe.size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sprites_valid() {
        let sprites = SpriteSet::default();
        assert!(sprites.validate().is_ok());
        let dims = sprites.dimensions();
        assert_eq!(dims.flyer, Size::new(34.0, 24.0));
        assert_eq!(dims.pipe, Size::new(52.0, 320.0));
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut sprites = SpriteSet::default();
        sprites.pipe.width = 0.0;
        assert!(matches!(
            sprites.validate(),
            Err(AssetError::InvalidSize { name: "pipe", .. })
        ));
    }

    #[test]
    fn test_missing_manifest_is_fatal() {
        let path = std::env::temp_dir().join("floppy-fish-no-such-sprites.json");
        assert!(matches!(
            SpriteSet::load(&path),
            Err(AssetError::Io { .. })
        ));
    }

    #[test]
    fn test_partial_manifest_keeps_defaults() {
        let path = std::env::temp_dir().join(format!(
            "floppy-fish-sprites-{}.json",
            std::process::id()
        ));
        fs::write(
            &path,
            r#"{ "flyer": { "width": 20, "height": 20, "glyph": "@" } }"#,
        )
        .unwrap();
        let sprites = SpriteSet::load(&path);
        fs::remove_file(&path).ok();
        let sprites = sprites.unwrap();
        assert_eq!(sprites.flyer.glyph, '@');
        assert_eq!(sprites.flyer.width, 20.0);
        assert_eq!(sprites.pipe, SpriteSet::default().pipe);
    }
}
