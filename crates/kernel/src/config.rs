use glam::Vec2;
use movesquare_common::{Bounds, Color, MoveParams};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("window dimensions must be non-zero, got {width}x{height}")]
    EmptyWindow { width: u32, height: u32 },
    #[error("move speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),
    #[error("square size must be finite and positive, got {0}")]
    InvalidSize(f32),
    #[error("square of size {size} does not fit in {width}x{height} bounds")]
    SquareTooLarge { size: f32, width: f32, height: f32 },
    #[error("initial position must be finite, got ({x}, {y})")]
    InvalidPosition { x: f32, y: f32 },
}

/// Frame loop settings. `Default` is the classic 800x600 red-square demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Target frames per second; `0` disables pacing.
    pub target_fps: u32,
    pub motion: MoveParams,
    pub initial_position: Vec2,
    pub background: Color,
    pub square_color: Color,
    /// Bind the arrow keys in addition to W/A/S/D.
    pub arrow_keys: bool,
    /// Frames between frame-time statistics log lines; `0` disables them.
    pub stats_interval: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            title: "Simple Game Loop".to_string(),
            width: 800,
            height: 600,
            target_fps: 60,
            motion: MoveParams::default(),
            initial_position: Vec2::new(100.0, 100.0),
            background: Color::BLACK,
            square_color: Color::RED,
            arrow_keys: false,
            stats_interval: 300,
        }
    }
}

impl LoopConfig {
    /// Check the settings against the requested window size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: self.width,
                height: self.height,
            });
        }
        self.validate_for(Bounds::from_size(self.width, self.height))
    }

    /// Check the motion parameters against the bounds actually obtained.
    pub fn validate_for(&self, bounds: Bounds) -> Result<(), ConfigError> {
        let MoveParams { speed, size } = self.motion;
        if !speed.is_finite() || speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(speed));
        }
        if !size.is_finite() || size <= 0.0 {
            return Err(ConfigError::InvalidSize(size));
        }
        let Vec2 { x, y } = self.initial_position;
        if !x.is_finite() || !y.is_finite() {
            return Err(ConfigError::InvalidPosition { x, y });
        }
        if size > bounds.max_square() {
            return Err(ConfigError::SquareTooLarge {
                size,
                width: bounds.width,
                height: bounds.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_demo() {
        let c = LoopConfig::default();
        assert_eq!(c.title, "Simple Game Loop");
        assert_eq!((c.width, c.height), (800, 600));
        assert_eq!(c.target_fps, 60);
        assert_eq!(c.initial_position, Vec2::new(100.0, 100.0));
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn initial_square_fits_default_window() {
        let c = LoopConfig::default();
        let bounds = Bounds::from_size(c.width, c.height);
        assert!(bounds.contains_square(c.initial_position, c.motion.size));
    }

    #[test]
    fn rejects_bad_motion() {
        let mut c = LoopConfig::default();
        c.motion.speed = -1.0;
        assert_eq!(c.validate(), Err(ConfigError::InvalidSpeed(-1.0)));

        let mut c = LoopConfig::default();
        c.motion.size = 0.0;
        assert_eq!(c.validate(), Err(ConfigError::InvalidSize(0.0)));

        let mut c = LoopConfig::default();
        c.motion.speed = f32::NAN;
        assert!(matches!(c.validate(), Err(ConfigError::InvalidSpeed(_))));
    }

    #[test]
    fn rejects_square_larger_than_window() {
        let mut c = LoopConfig::default();
        c.motion.size = 601.0;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::SquareTooLarge { .. })
        ));
        assert_eq!(c.validate_for(Bounds::new(1000.0, 1000.0)), Ok(()));
    }

    #[test]
    fn rejects_empty_window() {
        let c = LoopConfig {
            width: 0,
            ..LoopConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::EmptyWindow {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn rejects_non_finite_initial_position() {
        let c = LoopConfig {
            initial_position: Vec2::new(f32::NAN, 10.0),
            ..LoopConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidPosition { y, .. }) if y == 10.0
        ));

        let c = LoopConfig {
            initial_position: Vec2::new(0.0, f32::NEG_INFINITY),
            ..LoopConfig::default()
        };
        assert!(matches!(
            c.validate_for(Bounds::new(800.0, 600.0)),
            Err(ConfigError::InvalidPosition { .. })
        ));

        let outside = LoopConfig {
            initial_position: Vec2::new(-500.0, 9000.0),
            ..LoopConfig::default()
        };
        assert_eq!(outside.validate(), Ok(()));
    }
}
