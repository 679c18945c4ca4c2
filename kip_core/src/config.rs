//! Game configuration and the default constants it is built from.

use crate::types::Rgb;
use glam::Vec2;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const SCREEN_WIDTH: i32 = 1280;
pub const SCREEN_HEIGHT: i32 = 720;
pub const PADDLE_WIDTH: i32 = 20;
pub const PADDLE_HEIGHT: i32 = 90;
pub const BALL_WIDTH: i32 = 20;
/// Pixels per frame contributed by one held paddle key
pub const PADDLE_VELOCITY: i32 = 8;
/// Pixels per frame along the ball direction (before truncation)
pub const BALL_SPEED: f32 = 8.0;
/// Radius of the virtual circle behind each paddle face
pub const PADDLE_CIRCLE_RADIUS: i32 = 3 * BALL_WIDTH;
pub const TARGET_FPS: u32 = 60;
/// Distance from each side edge to the paddle center
pub const PADDLE_INSET: i32 = 40;
pub const DRAW_COLOR: Rgb = Rgb(0, 0, 255);
pub const BACKGROUND_COLOR: Rgb = Rgb(0, 0, 0);
/// Largest accepted screen dimension
pub const MAX_SCREEN_SIZE: i32 = 1 << 15;
/// Allowed deviation of `serve_direction` from unit length
const UNIT_TOLERANCE: f32 = 1e-3;

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A size, speed or rate that must be strictly positive is not
    NotPositive { field: &'static str, value: f64 },
    /// A size or speed exceeds what the playfield can hold
    TooLarge {
        field: &'static str,
        value: f64,
        max: f64,
    },
    /// Serve direction is not a finite unit vector
    InvalidServeDirection,
    /// JSON could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPositive { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            ConfigError::TooLarge { field, value, max } => {
                write!(f, "{} must be at most {}, got {}", field, max, value)
            }
            ConfigError::InvalidServeDirection => {
                write!(f, "serve_direction must be a finite unit vector")
            }
            ConfigError::Parse(msg) => write!(f, "Invalid configuration JSON: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Game configuration
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub screen_width: i32,
    pub screen_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub ball_width: i32,
    pub paddle_velocity: i32,
    pub ball_speed: f32,
    pub paddle_circle_radius: i32,
    pub target_fps: u32,
    pub paddle_inset: i32,
    pub draw_color: Rgb,
    pub background_color: Rgb,
    /// Ball direction on the first frame
    pub serve_direction: Vec2,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_width: BALL_WIDTH,
            paddle_velocity: PADDLE_VELOCITY,
            ball_speed: BALL_SPEED,
            paddle_circle_radius: PADDLE_CIRCLE_RADIUS,
            target_fps: TARGET_FPS,
            paddle_inset: PADDLE_INSET,
            draw_color: DRAW_COLOR,
            background_color: BACKGROUND_COLOR,
            serve_direction: Vec2::new(-0.8, 0.6),
        }
    }
}

impl Config {
    /// Check every size and speed is usable.
    ///
    /// Speeds are capped by the screen size so one frame never carries an
    /// entity further than the playfield is wide.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width as f64),
            ("screen_height", self.screen_height as f64),
            ("paddle_width", self.paddle_width as f64),
            ("paddle_height", self.paddle_height as f64),
            ("ball_width", self.ball_width as f64),
            ("paddle_velocity", self.paddle_velocity as f64),
            ("ball_speed", self.ball_speed as f64),
            ("paddle_circle_radius", self.paddle_circle_radius as f64),
            ("target_fps", self.target_fps as f64),
        ];

        for (field, value) in positive {
            // NaN fails this comparison too
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let bounded = [
            ("screen_width", self.screen_width as f64, MAX_SCREEN_SIZE as f64),
            ("screen_height", self.screen_height as f64, MAX_SCREEN_SIZE as f64),
            (
                "ball_speed",
                self.ball_speed as f64,
                self.screen_width.min(self.screen_height) as f64,
            ),
            (
                "paddle_velocity",
                self.paddle_velocity as f64,
                self.screen_height as f64,
            ),
        ];

        for (field, value, max) in bounded {
            if value > max {
                return Err(ConfigError::TooLarge { field, value, max });
            }
        }

        let direction = self.serve_direction;
        if !direction.is_finite() || (direction.length() - 1.0).abs() > UNIT_TOLERANCE {
            return Err(ConfigError::InvalidServeDirection);
        }

        Ok(())
    }

    /// Parse a JSON document, filling missing fields from the defaults.
    /// Any finite non-zero `serve_direction` is scaled to unit length.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Config, ConfigError> {
        let mut config: Config =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.serve_direction = config
            .serve_direction
            .try_normalize()
            .ok_or(ConfigError::InvalidServeDirection)?;
        config.validate()?;
        Ok(config)
    }

    /// Duration of one frame at the target rate
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = Config::default();

        assert_eq!(config.screen_width, 1280);
        assert_eq!(config.screen_height, 720);
        assert_eq!(config.paddle_height, 90);
        assert_eq!(config.paddle_circle_radius, 60);
        assert_eq!(config.paddle_circle_radius, 3 * config.ball_width);
        assert_eq!(config.target_fps, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_serve_direction_is_unit() {
        let config = Config::default();
        assert!((config.serve_direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let config = Config {
            ball_width: 0,
            ..Config::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "ball_width",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan_speed() {
        let config = Config {
            ball_speed: f32::NAN,
            ..Config::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "ball_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_serve_direction() {
        let config = Config {
            serve_direction: Vec2::ZERO,
            ..Config::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::InvalidServeDirection));
    }

    #[test]
    fn test_validate_rejects_non_unit_serve_direction() {
        let config = Config {
            serve_direction: Vec2::new(3.0, 4.0),
            ..Config::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::InvalidServeDirection));
    }

    #[test]
    fn test_validate_caps_speeds_at_screen_size() {
        let config = Config {
            ball_speed: 1e12,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooLarge {
                field: "ball_speed",
                ..
            })
        ));

        let config = Config {
            paddle_velocity: SCREEN_HEIGHT + 1,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooLarge {
                field: "paddle_velocity",
                ..
            })
        ));

        let config = Config {
            ball_speed: SCREEN_HEIGHT as f32,
            paddle_velocity: SCREEN_HEIGHT,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_screen() {
        let config = Config {
            screen_width: i32::MAX,
            ..Config::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooLarge {
                field: "screen_width",
                ..
            })
        ));
    }

    #[test]
    fn test_frame_duration() {
        let config = Config::default();
        let frame = config.frame_duration();
        assert!(frame.as_micros() >= 16_666 && frame.as_micros() <= 16_667);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_partial_override() {
        let config = Config::from_json(r#"{ "ball_speed": 12.0, "paddle_height": 80 }"#).unwrap();

        assert_eq!(config.ball_speed, 12.0);
        assert_eq!(config.paddle_height, 80);
        assert_eq!(config.screen_width, SCREEN_WIDTH);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            Config::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "screen_width": -5 }"#),
            Err(ConfigError::NotPositive { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_normalizes_serve_direction() {
        let config = Config::from_json(r#"{ "serve_direction": [3.0, 4.0] }"#).unwrap();

        assert!((config.serve_direction.length() - 1.0).abs() < 1e-6);
        assert!((config.serve_direction.x - 0.6).abs() < 1e-6);
        assert!((config.serve_direction.y - 0.8).abs() < 1e-6);

        assert_eq!(
            Config::from_json(r#"{ "serve_direction": [0.0, 0.0] }"#),
            Err(ConfigError::InvalidServeDirection)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_runaway_speeds() {
        assert!(matches!(
            Config::from_json(r#"{ "ball_speed": 1e12 }"#),
            Err(ConfigError::TooLarge {
                field: "ball_speed",
                ..
            })
        ));
        assert!(matches!(
            Config::from_json(r#"{ "paddle_velocity": 2000000000 }"#),
            Err(ConfigError::TooLarge {
                field: "paddle_velocity",
                ..
            })
        ));
    }
}
