//! Game state machine and the per-game session aggregate
//!
//! Everything one game needs is owned by a single `Session`, so several
//! sessions can run side by side and tests can build one from scratch.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::clock::FrameClock;
use super::collision::CollisionKind;
use super::obstacles::ObstacleField;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Default seed when the host has no entropy source to offer
pub const DEFAULT_SEED: u64 = 0x5EED_F1A9;

/// Top-level game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Attract screen: actor hovers, no obstacles, waiting for input
    #[default]
    Idle,
    /// Active flight
    Playing,
    /// Crashed; frozen until the next activation
    GameOver,
}

/// Things that can drive a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// The single abstract player action (key, click, tap)
    Activate,
    /// The detector found a hit this tick
    Collide(CollisionKind),
}

/// Side effect attached to a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Assign the upward impulse to the actor
    Flap,
    /// Restore actor, obstacles, score and timers to Idle defaults
    Reset,
    /// End the round
    Crash(CollisionKind),
    /// Nothing happens
    Ignore,
}

/// Result of feeding one input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: GameState,
    pub effect: Effect,
}

/// The full (state, input) -> (state, effect) table
pub fn transition(state: GameState, input: Input) -> Transition {
    use GameState::*;

    let (next, effect) = match (state, input) {
        (Idle, Input::Activate) => (Playing, Effect::Flap),
        (Playing, Input::Activate) => (Playing, Effect::Flap),
        (GameOver, Input::Activate) => (Idle, Effect::Reset),
        (Playing, Input::Collide(cause)) => (GameOver, Effect::Crash(cause)),
        (Idle | GameOver, Input::Collide(_)) => (state, Effect::Ignore),
    };
    Transition { next, effect }
}

/// Notable things that happened, drained by the host each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Idle -> Playing
    Started,
    /// Impulse applied
    Flapped,
    ObstacleSpawned { gap_top: f32 },
    Scored { score: u32 },
    Crashed { cause: CollisionKind, score: u32 },
    /// GameOver -> Idle
    Reset,
}

/// Animation and pacing accumulators, all zeroed on reset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timers {
    /// Idle hover phase (seconds, only read through `sin`)
    pub bob_phase: f32,
    /// Ground texture scroll, wrapped to the texture period
    pub ground_offset: f32,
    /// Seconds spent in the current round's Playing state
    pub flight_time: f32,
}

/// One game: configuration plus all mutable state
#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub state: GameState,
    pub actor: Actor,
    pub obstacles: ObstacleField,
    pub score: u32,
    /// Highest score of any round in this session
    pub best_score: u32,
    pub timers: Timers,
    /// Simulation tick counter
    pub ticks: u64,
    /// Seed the gap sequence was drawn from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) clock: FrameClock,
    pub(crate) events: Vec<GameEvent>,
}

impl Session {
    /// Validate `config` and build a fresh Idle session
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Session with the shipped tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        log::debug!("New session (seed {seed})");
        Self {
            state: GameState::Idle,
            actor: Actor::new(&config),
            obstacles: ObstacleField::new(),
            score: 0,
            best_score: 0,
            timers: Timers::default(),
            ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            clock: FrameClock::new(config.max_frame_dt),
            events: Vec::new(),
            config,
        }
    }

    /// Restore Idle defaults in place. The RNG keeps its position so the next
    /// round gets fresh gaps; `best_score` survives.
    pub fn reset(&mut self) {
        self.actor.reset(&self.config);
        self.obstacles.reset();
        self.score = 0;
        self.timers = Timers::default();
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events recorded since the last drain
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use GameState::*;

        let t = transition(Idle, Input::Activate);
        assert_eq!((t.next, t.effect), (Playing, Effect::Flap));

        let t = transition(Playing, Input::Activate);
        assert_eq!((t.next, t.effect), (Playing, Effect::Flap));

        let t = transition(GameOver, Input::Activate);
        assert_eq!((t.next, t.effect), (Idle, Effect::Reset));

        let t = transition(Playing, Input::Collide(CollisionKind::Ground));
        assert_eq!(
            (t.next, t.effect),
            (GameOver, Effect::Crash(CollisionKind::Ground))
        );
    }

    #[test]
    fn test_collisions_outside_play_are_ignored() {
        for state in [GameState::Idle, GameState::GameOver] {
            let t = transition(state, Input::Collide(CollisionKind::ObstacleTop));
            assert_eq!(t.next, state);
            assert_eq!(t.effect, Effect::Ignore);
        }
    }

    #[test]
    fn test_new_session_defaults() {
        let session = Session::with_seed(1);
        assert_eq!(session.state, GameState::Idle);
        assert_eq!(session.score, 0);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.actor, Actor::new(&session.config));
        assert_eq!(session.timers, Timers::default());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = GameConfig {
            max_fall_speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            Session::new(config, 1),
            Err(ConfigError::NotPositive {
                field: "max_fall_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_drain_events_empties_buffer() {
        let mut session = Session::default();
        session.emit(GameEvent::Started);
        assert_eq!(session.pending_events(), &[GameEvent::Started]);
        assert_eq!(session.drain_events(), vec![GameEvent::Started]);
        assert!(session.pending_events().is_empty());
    }
}
