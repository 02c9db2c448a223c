//! Gapwing - a one-button side-scrolling gap-flying arcade game
//!
//! Core modules:
//! - `sim`: Simulation (clock, actor physics, obstacles, collisions, scoring, state machine)
//! - `renderer`: Canvas-style draw contract and frame drawing
//! - `platform`: Browser/native platform abstraction (input gating, 2D context)
//! - `config`: Validated game tunables

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;
pub use sim::{GameEvent, GameState, Session, activate, tick};

/// Game configuration constants (the shipped tuning)
pub mod consts {
    /// Largest delta-time a single frame may feed the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;
    /// Nominal display refresh step, used by the headless demo and tests
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 480.0;
    pub const SCREEN_HEIGHT: f32 = 640.0;
    pub const GROUND_HEIGHT: f32 = 80.0;

    /// Actor defaults
    pub const ACTOR_X: f32 = 120.0;
    pub const ACTOR_RADIUS: f32 = 14.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 1500.0;
    /// Velocity assigned on every flap (pixels/s, negative is up)
    pub const FLAP_VELOCITY: f32 = -420.0;
    /// Terminal fall speed (pixels/s)
    pub const MAX_FALL_SPEED: f32 = 600.0;

    /// Obstacle defaults
    pub const GAP_SIZE: f32 = 160.0;
    pub const OBSTACLE_WIDTH: f32 = 70.0;
    pub const OBSTACLE_SPEED: f32 = 150.0;
    pub const OBSTACLE_SPACING: f32 = 240.0;
    /// Clear-flight window before the first obstacle (seconds)
    pub const FIRST_SPAWN_DELAY: f32 = 1.2;
    pub const TOP_MARGIN: f32 = 60.0;
    pub const BOTTOM_MARGIN: f32 = 60.0;

    /// Obstacle cap (the lip drawn at the gap edge)
    pub const CAP_HEIGHT: f32 = 24.0;
    pub const CAP_OVERHANG: f32 = 4.0;

    /// Ground stripe texture repeats every this many pixels
    pub const GROUND_TEXTURE_PERIOD: f32 = 24.0;

    /// Idle hover animation
    pub const BOB_AMPLITUDE: f32 = 8.0;
    pub const BOB_FREQUENCY: f32 = 2.0;

    /// Display rotation limits (radians)
    pub const MAX_NOSE_UP: f32 = 0.4;
    pub const MAX_NOSE_DOWN: f32 = 1.3;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
