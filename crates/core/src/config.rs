//! Game configuration - every tuning value as a named, validated field
//!
//! Defaults reproduce the reference constants from `tui_flappy_types`.
//! A JSON file (`FLAPPY_CONFIG`) can override any subset of fields, and
//! `FLAPPY_SEED` pins the RNG seed. Validation runs once at startup; a config
//! whose spawn range cannot keep both pipe pieces on screen is rejected.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::*;

/// Environment variable naming an optional JSON config file
pub const CONFIG_PATH_ENV: &str = "FLAPPY_CONFIG";

/// Environment variable pinning the RNG seed
pub const SEED_ENV: &str = "FLAPPY_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {name} value: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("empty pipe spawn range: min {min} > max {max}")]
    EmptySpawnRange { min: i32, max: i32 },
    #[error("top pipe hidden: center {center} - gap/2 ({half_gap}) must be strictly greater than 0")]
    TopPieceHidden { center: i32, half_gap: f32 },
    #[error("bottom pipe hidden: center {center} + gap/2 ({half_gap}) must be strictly less than world height {world_height}")]
    BottomPieceHidden {
        center: i32,
        half_gap: f32,
        world_height: f32,
    },
    #[error("pipe sprite height {pipe_height} cannot reach the world edge ({needed} needed)")]
    PipeTooShort { pipe_height: f32, needed: f32 },
    #[error("spawn margin {margin} must place pipes fully right of the world (half pipe width {half_width})")]
    SpawnInsideWorld { margin: f32, half_width: f32 },
}

/// All simulation and presentation tuning values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub pipe_center_min: i32,
    pub pipe_center_max: i32,
    pub spawn_interval_ticks: u32,
    pub spawn_margin: f32,
    pub bird_x: f32,
    pub bird_size: f32,
    pub frames_per_sprite: u32,
    pub cloud_speed: f32,
    pub mountain_speed: f32,
    pub mountain_y: f32,
    pub ground_height: f32,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u32>,
    /// Ring the terminal bell on collision
    pub bell: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_center_min: PIPE_CENTER_MIN,
            pipe_center_max: PIPE_CENTER_MAX,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            spawn_margin: SPAWN_MARGIN,
            bird_x: BIRD_X,
            bird_size: BIRD_SIZE,
            frames_per_sprite: FRAMES_PER_SPRITE,
            cloud_speed: CLOUD_SPEED,
            mountain_speed: MOUNTAIN_SPEED,
            mountain_y: MOUNTAIN_Y,
            ground_height: GROUND_HEIGHT,
            seed: None,
            bell: false,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from the environment: defaults, then `FLAPPY_CONFIG`, then `FLAPPY_SEED`.
    ///
    /// The result is validated before it is returned.
    pub fn from_env() -> Result<Self, ConfigError> {
        use std::env;

        let mut config = match env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path))?,
            _ => Self::default(),
        };

        if let Ok(raw) = env::var(SEED_ENV) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                let seed = trimmed.parse::<u32>().map_err(|_| ConfigError::InvalidEnv {
                    name: SEED_ENV,
                    value: raw.clone(),
                })?;
                config.seed = Some(seed);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the startup invariants. Never called per spawn.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("bird_x", self.bird_x),
            ("bird_size", self.bird_size),
            ("spawn_interval_ticks", self.spawn_interval_ticks as f32),
            ("frames_per_sprite", self.frames_per_sprite as f32),
            ("ground_height", self.ground_height),
            ("cloud_speed", self.cloud_speed),
            ("mountain_speed", self.mountain_speed),
        ];
        for (field, value) in positive {
            // `!(v > 0)` also rejects NaN.
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        // Zero gravity is allowed; NaN or infinity would never reach a bound.
        for (field, value) in [
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        if self.pipe_center_min > self.pipe_center_max {
            return Err(ConfigError::EmptySpawnRange {
                min: self.pipe_center_min,
                max: self.pipe_center_max,
            });
        }

        let half_gap = self.pipe_gap / 2.0;
        if self.pipe_center_min as f32 - half_gap <= 0.0 {
            return Err(ConfigError::TopPieceHidden {
                center: self.pipe_center_min,
                half_gap,
            });
        }
        if self.pipe_center_max as f32 + half_gap >= self.world_height {
            return Err(ConfigError::BottomPieceHidden {
                center: self.pipe_center_max,
                half_gap,
                world_height: self.world_height,
            });
        }

        // The tallest piece either way must still reach its world edge.
        let needed_top = self.pipe_center_max as f32 - half_gap;
        let needed_bottom = self.world_height - (self.pipe_center_min as f32 + half_gap);
        let needed = needed_top.max(needed_bottom);
        if self.pipe_height < needed {
            return Err(ConfigError::PipeTooShort {
                pipe_height: self.pipe_height,
                needed,
            });
        }

        let half_width = self.pipe_width / 2.0;
        if self.spawn_margin < half_width {
            return Err(ConfigError::SpawnInsideWorld {
                margin: self.spawn_margin,
                half_width,
            });
        }

        Ok(())
    }

    /// Horizontal centre at which new pipes appear
    pub fn spawn_x(&self) -> f32 {
        self.world_width + self.spawn_margin
    }

    /// Ticks one full flap animation cycle takes
    pub fn animation_period(&self) -> u32 {
        FRAME_COUNT as u32 * self.frames_per_sprite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spawn_x(), 850.0);
        assert_eq!(config.animation_period(), 20);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "gravity": 0.3, "seed": 7 }"#).unwrap();
        assert_eq!(config.gravity, 0.3);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.pipe_gap, PIPE_GAP);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = GameConfig::from_json_str(r#"{ "gravty": 0.3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_gap_too_large_rejected() {
        let config = GameConfig {
            pipe_gap: 320.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TopPieceHidden { center: 150, .. })
        ));
    }

    #[test]
    fn test_bottom_piece_hidden_rejected() {
        let config = GameConfig {
            pipe_center_max: 480,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::BottomPieceHidden { center: 480, .. }
        ));
        assert!(err
            .to_string()
            .contains("must be strictly less than world height 600"));
    }

    #[test]
    fn test_empty_spawn_range_rejected() {
        let config = GameConfig {
            pipe_center_min: 400,
            pipe_center_max: 300,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptySpawnRange { min: 400, max: 300 })
        ));
    }

    #[test]
    fn test_single_point_spawn_range_allowed() {
        let config = GameConfig {
            pipe_center_min: 300,
            pipe_center_max: 300,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_short_pipe_rejected() {
        let config = GameConfig {
            pipe_height: 200.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PipeTooShort { .. })
        ));
    }

    #[test]
    fn test_non_positive_values_rejected() {
        let config = GameConfig {
            pipe_speed: 0.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "pipe_speed",
                ..
            })
        ));

        let config = GameConfig {
            world_height: f32::NAN,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_scroll_speed_rejected() {
        let config = GameConfig::from_json_str(r#"{ "cloud_speed": -1.0 }"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "cloud_speed",
                ..
            })
        ));

        let config = GameConfig {
            mountain_speed: 0.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "mountain_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_physics_rejected() {
        let config = GameConfig {
            gravity: f32::NAN,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "gravity",
                ..
            })
        ));

        let config = GameConfig {
            jump_velocity: f32::NEG_INFINITY,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "jump_velocity",
                ..
            })
        ));

        // A floating bird is a valid setup.
        let config = GameConfig {
            gravity: 0.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_spawn_margin_must_clear_world() {
        let config = GameConfig {
            spawn_margin: 10.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnInsideWorld { .. })
        ));
    }
}
