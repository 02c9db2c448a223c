//! Game tunables
//!
//! Every physics, spawning and layout constant lives in one serializable struct
//! so a host can override the shipped tuning with a JSON blob. All values are
//! fixed for the lifetime of a session and validated once at construction.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game tunables (pixels, seconds, pixels/s, pixels/s²)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Layout ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_height: f32,
    /// Fixed horizontal position of the actor
    pub actor_x: f32,
    pub actor_radius: f32,

    // === Actor physics ===
    pub gravity: f32,
    /// Assigned (not added) on every flap; must be negative
    pub flap_velocity: f32,
    pub max_fall_speed: f32,

    // === Obstacles ===
    pub gap_size: f32,
    pub obstacle_width: f32,
    pub obstacle_speed: f32,
    /// Scroll distance between consecutive spawns
    pub obstacle_spacing: f32,
    /// Seconds of Playing before the first obstacle appears
    pub first_spawn_delay: f32,
    /// Minimum distance from the ceiling to the top of a gap
    pub top_margin: f32,
    /// Minimum distance from the bottom of a gap to the ground
    pub bottom_margin: f32,

    // === Timing ===
    /// Upper bound on a single frame's delta-time
    pub max_frame_dt: f32,

    // === Cosmetic ===
    pub cap_height: f32,
    pub cap_overhang: f32,
    pub ground_texture_period: f32,
    pub bob_amplitude: f32,
    /// Idle hover cycles per second
    pub bob_frequency: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
            actor_x: ACTOR_X,
            actor_radius: ACTOR_RADIUS,

            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            max_fall_speed: MAX_FALL_SPEED,

            gap_size: GAP_SIZE,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_spacing: OBSTACLE_SPACING,
            first_spawn_delay: FIRST_SPAWN_DELAY,
            top_margin: TOP_MARGIN,
            bottom_margin: BOTTOM_MARGIN,

            max_frame_dt: MAX_FRAME_DT,

            cap_height: CAP_HEIGHT,
            cap_overhang: CAP_OVERHANG,
            ground_texture_period: GROUND_TEXTURE_PERIOD,
            bob_amplitude: BOB_AMPLITUDE,
            bob_frequency: BOB_FREQUENCY,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    /// Fields missing from the JSON keep their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON (for dumping the active tuning)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Y coordinate of the ground surface
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Height of the flyable area above the ground
    #[inline]
    pub fn play_height(&self) -> f32 {
        self.ground_y()
    }

    /// Smallest allowed `gap_top`
    #[inline]
    pub fn min_gap_top(&self) -> f32 {
        self.top_margin
    }

    /// Largest allowed `gap_top`
    #[inline]
    pub fn max_gap_top(&self) -> f32 {
        self.screen_height - self.ground_height - self.gap_size - self.bottom_margin
    }

    /// Actor rest height in Idle (vertical middle of the play area)
    #[inline]
    pub fn actor_start_y(&self) -> f32 {
        self.play_height() / 2.0
    }

    /// Check every tunable, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ground_height", self.ground_height),
            ("actor_x", self.actor_x),
            ("actor_radius", self.actor_radius),
            ("gravity", self.gravity),
            ("flap_velocity", self.flap_velocity),
            ("max_fall_speed", self.max_fall_speed),
            ("gap_size", self.gap_size),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_spacing", self.obstacle_spacing),
            ("first_spawn_delay", self.first_spawn_delay),
            ("top_margin", self.top_margin),
            ("bottom_margin", self.bottom_margin),
            ("max_frame_dt", self.max_frame_dt),
            ("cap_height", self.cap_height),
            ("cap_overhang", self.cap_overhang),
            ("ground_texture_period", self.ground_texture_period),
            ("bob_amplitude", self.bob_amplitude),
            ("bob_frequency", self.bob_frequency),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        for (field, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ground_height", self.ground_height),
            ("actor_radius", self.actor_radius),
            ("max_fall_speed", self.max_fall_speed),
            ("gap_size", self.gap_size),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_spacing", self.obstacle_spacing),
            ("max_frame_dt", self.max_frame_dt),
            ("ground_texture_period", self.ground_texture_period),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("gravity", self.gravity),
            ("obstacle_speed", self.obstacle_speed),
            ("first_spawn_delay", self.first_spawn_delay),
            ("top_margin", self.top_margin),
            ("bottom_margin", self.bottom_margin),
            ("cap_height", self.cap_height),
            ("cap_overhang", self.cap_overhang),
            ("bob_amplitude", self.bob_amplitude),
            ("bob_frequency", self.bob_frequency),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.flap_velocity >= 0.0 {
            return Err(ConfigError::FlapNotUpward(self.flap_velocity));
        }

        if self.ground_height >= self.screen_height {
            return Err(ConfigError::GroundTooTall {
                ground_height: self.ground_height,
                screen_height: self.screen_height,
            });
        }

        if self.obstacle_spacing <= self.obstacle_width {
            return Err(ConfigError::SpacingTooTight {
                spacing: self.obstacle_spacing,
                width: self.obstacle_width,
            });
        }

        let fits_horizontally = self.actor_x - self.actor_radius >= 0.0
            && self.actor_x + self.actor_radius <= self.screen_width;
        let fits_vertically = 2.0 * self.actor_radius < self.play_height();
        if !fits_horizontally || !fits_vertically {
            return Err(ConfigError::ActorOffScreen {
                x: self.actor_x,
                radius: self.actor_radius,
            });
        }

        let start_y = self.actor_start_y();
        if start_y - self.bob_amplitude - self.actor_radius < 0.0
            || start_y + self.bob_amplitude + self.actor_radius >= self.ground_y()
        {
            return Err(ConfigError::BobOutOfBounds {
                amplitude: self.bob_amplitude,
                start_y,
                radius: self.actor_radius,
            });
        }

        if self.gap_size <= 2.0 * self.actor_radius {
            return Err(ConfigError::GapNarrowerThanActor {
                gap_size: self.gap_size,
                radius: self.actor_radius,
            });
        }

        if self.min_gap_top() > self.max_gap_top() {
            return Err(ConfigError::GapDoesNotFit {
                gap_size: self.gap_size,
                min_top: self.min_gap_top(),
                max_top: self.max_gap_top(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_derived_layout() {
        let config = GameConfig::default();
        assert_eq!(config.ground_y(), SCREEN_HEIGHT - GROUND_HEIGHT);
        assert_eq!(config.min_gap_top(), TOP_MARGIN);
        assert_eq!(
            config.max_gap_top(),
            SCREEN_HEIGHT - GROUND_HEIGHT - GAP_SIZE - BOTTOM_MARGIN
        );
        assert_eq!(config.actor_start_y(), (SCREEN_HEIGHT - GROUND_HEIGHT) / 2.0);
    }

    #[test]
    fn test_rejects_negative_gap() {
        let config = GameConfig {
            gap_size: -10.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "gap_size",
                value: -10.0
            })
        );
    }

    #[test]
    fn test_rejects_downward_flap() {
        let config = GameConfig {
            flap_velocity: 300.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FlapNotUpward(300.0)));
    }

    #[test]
    fn test_rejects_nan() {
        let config = GameConfig {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "gravity", .. })
        ));
    }

    #[test]
    fn test_rejects_gap_that_does_not_fit() {
        let config = GameConfig {
            gap_size: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_rejects_gap_narrower_than_actor() {
        let config = GameConfig {
            gap_size: 20.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GapNarrowerThanActor {
                gap_size: 20.0,
                radius: ACTOR_RADIUS
            })
        );

        // Exactly the diameter leaves no clearance either
        let config = GameConfig {
            gap_size: 2.0 * ACTOR_RADIUS,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapNarrowerThanActor { .. })
        ));
    }

    #[test]
    fn test_rejects_bob_leaving_play_area() {
        let config = GameConfig {
            bob_amplitude: 400.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BobOutOfBounds { amplitude, .. }) if amplitude == 400.0
        ));

        // Largest swing that still keeps the actor clear of ceiling and ground
        let config = GameConfig::default();
        let headroom = config.actor_start_y() - config.actor_radius;
        let widest = GameConfig {
            bob_amplitude: headroom - 1.0,
            ..config.clone()
        };
        assert_eq!(widest.validate(), Ok(()));
        let touching = GameConfig {
            bob_amplitude: headroom,
            ..config
        };
        assert!(matches!(
            touching.validate(),
            Err(ConfigError::BobOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_zero_gravity_and_speed_are_allowed() {
        let config = GameConfig {
            gravity: 0.0,
            obstacle_speed: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = GameConfig::from_json(r#"{ "gravity": 900.0, "gap_size": 180.0 }"#)
            .expect("valid override");
        assert_eq!(config.gravity, 900.0);
        assert_eq!(config.gap_size, 180.0);
        assert_eq!(config.obstacle_speed, OBSTACLE_SPEED);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        let err = GameConfig::from_json(r#"{ "obstacle_spacing": 10.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::SpacingTooTight { .. }));

        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::default();
        let json = config.to_json().expect("serializable");
        assert_eq!(GameConfig::from_json(&json), Ok(config));
    }
}
