//! Demo pilot
//!
//! Plays the game by deciding, once per frame, whether to press the single
//! button. Used by the attract/demo mode and as a long-running soak test.

use super::state::{GameState, Session};

/// Pause on the game-over screen before restarting (seconds)
pub const RESTART_DELAY: f32 = 1.5;

/// Frame-by-frame button presser
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Time spent on the game-over screen so far
    waited: f32,
}

impl Autopilot {
    /// True when the host should call `activate` this frame
    pub fn decide(&mut self, session: &Session, dt: f32) -> bool {
        match session.state {
            GameState::Idle => {
                self.waited = 0.0;
                true
            }
            GameState::Playing => session.actor.y > target_y(session),
            GameState::GameOver => {
                self.waited += dt;
                if self.waited >= RESTART_DELAY {
                    self.waited = 0.0;
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Height the pilot steers toward: a little below the middle of the next gap
/// the actor has not yet cleared, or the rest height when no column is ahead.
///
/// Flapping whenever the actor sinks below the target makes it oscillate
/// between the target and one flap-apex above it, so the target is offset
/// downward by half the apex height (bounded by a quarter of the gap).
pub fn target_y(session: &Session) -> f32 {
    let config = &session.config;
    let actor = &session.actor;

    let apex = if config.gravity > 0.0 {
        config.flap_velocity * config.flap_velocity / (2.0 * config.gravity)
    } else {
        f32::INFINITY
    };
    let aim_below = (apex / 2.0).min(config.gap_size / 4.0);

    session
        .obstacles
        .iter()
        .find(|o| o.trailing_edge(config) + actor.radius >= actor.x)
        .map(|o| o.gap_top + config.gap_size / 2.0 + aim_below)
        .unwrap_or_else(|| config.actor_start_y())
}
