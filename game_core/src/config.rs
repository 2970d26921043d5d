use serde::Deserialize;

use crate::components::Side;
use crate::error::ConfigError;
use crate::params::Params;

/// Game configuration
///
/// Every field defaults to the matching [`Params`] constant. When loaded from
/// JSON, only the fields present in the document are overridden.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_padding: f32,
    pub player_speed: f32,
    pub computer_speed: f32,
    pub opponent_dead_zone: f32,
    pub ball_radius: f32,
    pub ball_speed_serve: f32,
    pub ball_speed_max: f32,
    pub ball_speed_step: f32,
    pub max_bounce_angle: f32,
    pub max_serve_angle: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_padding: Params::PADDLE_PADDING,
            player_speed: Params::PLAYER_SPEED,
            computer_speed: Params::COMPUTER_SPEED,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_serve: Params::BALL_SPEED_SERVE,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_step: Params::BALL_SPEED_STEP,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            max_serve_angle: Params::MAX_SERVE_ANGLE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration for a surface of the given logical size
    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            surface_width: width,
            surface_height: height,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON object and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = Self::parse(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse without validating, for callers that adjust fields first
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that the values describe a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_padding", self.paddle_padding),
            ("player_speed", self.player_speed),
            ("computer_speed", self.computer_speed),
            ("opponent_dead_zone", self.opponent_dead_zone),
            ("ball_radius", self.ball_radius),
            ("ball_speed_serve", self.ball_speed_serve),
            ("ball_speed_max", self.ball_speed_max),
            ("ball_speed_step", self.ball_speed_step),
            ("max_bounce_angle", self.max_bounce_angle),
            ("max_serve_angle", self.max_serve_angle),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(invalid(field, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(invalid(field, "must not be negative"));
            }
        }

        let positive = [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed_serve", self.ball_speed_serve),
        ];
        for (field, value) in positive {
            if value == 0.0 {
                return Err(invalid(field, "must be positive"));
            }
        }

        if self.paddle_height > self.surface_height {
            return Err(invalid("paddle_height", "must fit inside the surface"));
        }
        if 2.0 * (self.paddle_padding + self.paddle_width) >= self.surface_width {
            return Err(invalid("paddle_width", "paddles overlap horizontally"));
        }
        if 2.0 * self.ball_radius >= self.surface_height {
            return Err(invalid("ball_radius", "ball must fit between the walls"));
        }
        if self.ball_speed_max < self.ball_speed_serve {
            return Err(invalid(
                "ball_speed_max",
                "must be at least the serve speed",
            ));
        }
        if self.max_serve_angle >= std::f32::consts::FRAC_PI_2 {
            return Err(invalid("max_serve_angle", "must be below 90 degrees"));
        }
        Ok(())
    }

    /// Get the fixed X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_padding,
            Side::Computer => self.surface_width - self.paddle_width - self.paddle_padding,
        }
    }

    /// Clamp paddle top edge so the whole paddle stays on the surface
    pub fn clamp_paddle_y(&self, y: f32, height: f32) -> f32 {
        crate::geometry::clamp(y, 0.0, self.surface_height - height)
    }

    /// Top edge that vertically centres a paddle
    pub fn paddle_start_y(&self) -> f32 {
        (self.surface_height - self.paddle_height) / 2.0
    }

    /// Centre of the surface, where every serve starts
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.surface_width / 2.0, self.surface_height / 2.0)
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 10.0, "Left paddle X position");
        assert_eq!(
            config.paddle_x(Side::Computer),
            778.0,
            "Right paddle X position"
        );
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let h = config.paddle_height;
        assert_eq!(config.clamp_paddle_y(-40.0, h), 0.0);
        assert_eq!(config.clamp_paddle_y(1000.0, h), config.surface_height - h);
        assert_eq!(config.clamp_paddle_y(250.0, h), 250.0);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = Config::from_json(r#"{ "computer_speed": 3.5, "ball_radius": 6 }"#).unwrap();
        assert_eq!(config.computer_speed, 3.5);
        assert_eq!(config.ball_radius, 6.0);
        assert_eq!(config.surface_width, Params::SURFACE_WIDTH);
        assert_eq!(config.player_speed, Params::PLAYER_SPEED);
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_field() {
        let err = Config::from_json(r#"{ "paddle_colour": "red" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        let err = Config::from_json(r#"{ "ball_speed_max": 2 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "ball_speed_max",
                ..
            }
        ));

        let err = Config::from_json(r#"{ "paddle_height": 900 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "paddle_height",
                ..
            }
        ));

        let err = Config::from_json(r#"{ "player_speed": -1 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "player_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_defers_validation() {
        // Too tall for 800x600, fine once the surface grows
        let mut config = Config::parse(r#"{ "paddle_height": 700 }"#).unwrap();
        assert!(config.validate().is_err());
        config.surface_height = 900.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_surface_keeps_other_defaults() {
        let config = Config::for_surface(640.0, 480.0);
        assert_eq!(config.center(), glam::Vec2::new(320.0, 240.0));
        assert_eq!(config.paddle_start_y(), 190.0);
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
    }
}
