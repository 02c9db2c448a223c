//! The player-controlled actor
//!
//! Screen coordinates: +y points down, so a positive velocity is falling.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::{MAX_NOSE_DOWN, MAX_NOSE_UP};
use crate::lerp;

/// The controlled entity. `x` never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub x: f32,
    pub y: f32,
    /// Vertical speed (pixels/s, positive = downward)
    pub velocity: f32,
    pub radius: f32,
}

impl Actor {
    /// Actor at its Idle rest position
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.actor_x,
            y: config.actor_start_y(),
            velocity: 0.0,
            radius: config.actor_radius,
        }
    }

    /// Restore Idle defaults in place
    pub fn reset(&mut self, config: &GameConfig) {
        self.y = config.actor_start_y();
        self.velocity = 0.0;
    }

    /// Upward impulse: assigns the flap velocity, never adds to it
    #[inline]
    pub fn flap(&mut self, config: &GameConfig) {
        self.velocity = config.flap_velocity;
    }

    /// One Playing step: gravity, terminal speed, motion, ceiling clamp
    pub fn integrate(&mut self, dt: f32, config: &GameConfig) {
        self.velocity = (self.velocity + config.gravity * dt).min(config.max_fall_speed);
        self.y += self.velocity * dt;

        // Ceiling discards upward momentum instead of bouncing
        if self.y - self.radius < 0.0 {
            self.y = self.radius;
            self.velocity = 0.0;
        }
    }

    /// Idle hover: sine bob around the rest height
    pub fn bob(&mut self, phase: f32, config: &GameConfig) {
        let wave = (phase * config.bob_frequency * std::f32::consts::TAU).sin();
        self.y = config.actor_start_y() + wave * config.bob_amplitude;
        self.velocity = 0.0;
    }

    /// Display tilt in radians (negative = nose up), derived from velocity.
    ///
    /// Rising maps onto `[-MAX_NOSE_UP, 0]` over the flap speed, falling onto
    /// `[0, MAX_NOSE_DOWN]` over the terminal speed. Always bounded.
    pub fn rotation(&self, config: &GameConfig) -> f32 {
        if self.velocity < 0.0 {
            let t = (self.velocity / config.flap_velocity).clamp(0.0, 1.0);
            lerp(0.0, -MAX_NOSE_UP, t)
        } else {
            let t = (self.velocity / config.max_fall_speed).clamp(0.0, 1.0);
            lerp(0.0, MAX_NOSE_DOWN, t)
        }
    }

    /// Lowest point of the actor
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.radius
    }
}
