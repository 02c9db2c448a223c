//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform code:
//! - Variable timestep, clamped to the configured cap
//! - Seeded RNG only
//! - All mutable state owned by one `Session`

pub mod actor;
pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod obstacles;
pub mod score;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use autopilot::Autopilot;
pub use clock::FrameClock;
pub use collision::{CollisionKind, Rect, circle_rect_overlap};
pub use obstacles::{Obstacle, ObstacleField};
pub use state::{
    DEFAULT_SEED, Effect, GameEvent, GameState, Input, Session, Timers, Transition, transition,
};
pub use tick::{activate, tick};
