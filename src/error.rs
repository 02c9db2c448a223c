//! Configuration errors
//!
//! The simulation itself has no error channel: collisions are game events and
//! out-of-range frame deltas are clamped. Only bad tunables are rejected.

/// A tunable that cannot produce meaningful gameplay.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("`{field}` must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("`{field}` must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("`flap_velocity` must be negative (upward), got {0}")]
    FlapNotUpward(f32),
    #[error("ground height {ground_height} leaves no room on a {screen_height}px tall screen")]
    GroundTooTall { ground_height: f32, screen_height: f32 },
    #[error("obstacle spacing {spacing} must exceed obstacle width {width}")]
    SpacingTooTight { spacing: f32, width: f32 },
    #[error("actor at x={x} with radius {radius} does not fit on screen")]
    ActorOffScreen { x: f32, radius: f32 },
    #[error("gap of {gap_size}px is too narrow for an actor of radius {radius}")]
    GapNarrowerThanActor { gap_size: f32, radius: f32 },
    #[error("idle bob of {amplitude}px around y={start_y} carries an actor of radius {radius} out of the play area")]
    BobOutOfBounds {
        amplitude: f32,
        start_y: f32,
        radius: f32,
    },
    #[error("gap of {gap_size}px does not fit: top range [{min_top}, {max_top}] is empty")]
    GapDoesNotFit {
        gap_size: f32,
        min_top: f32,
        max_top: f32,
    },
    #[error("invalid config JSON: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
