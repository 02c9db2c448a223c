//! Per-frame simulation step
//!
//! Core game loop that advances a session by one variable-length tick.

use super::clock::clamp_dt;
use super::collision;
use super::score::award_passed;
use super::state::{Effect, GameEvent, GameState, Input, Session, Transition, transition};

/// The single player action. Safe to call between ticks from any input source.
pub fn activate(session: &mut Session) {
    dispatch(session, Input::Activate);
}

/// Run one input through the transition table and apply its side effect
fn dispatch(session: &mut Session, input: Input) {
    let from = session.state;
    let Transition { next, effect } = transition(from, input);
    session.state = next;

    match effect {
        Effect::Flap => {
            session.actor.flap(&session.config);
            if from == GameState::Idle {
                log::info!("Round started");
                session.emit(GameEvent::Started);
            }
            session.emit(GameEvent::Flapped);
        }
        Effect::Reset => {
            session.reset();
            log::info!("Back to idle");
            session.emit(GameEvent::Reset);
        }
        Effect::Crash(cause) => {
            session.best_score = session.best_score.max(session.score);
            log::info!(
                "Game over: hit {:?} with score {} (best {})",
                cause,
                session.score,
                session.best_score
            );
            session.emit(GameEvent::Crashed {
                cause,
                score: session.score,
            });
        }
        Effect::Ignore => {}
    }

    if from != next {
        log::debug!("{:?} -> {:?}", from, next);
    }
}

/// Advance the session by `dt` seconds (clamped to the configured cap)
pub fn tick(session: &mut Session, dt: f32) {
    let dt = clamp_dt(dt, session.config.max_frame_dt);
    session.ticks += 1;

    match session.state {
        GameState::Idle => {
            session.timers.bob_phase += dt;
            session.actor.bob(session.timers.bob_phase, &session.config);
            scroll_ground(session, dt);
        }
        GameState::Playing => step_playing(session, dt),
        GameState::GameOver => {}
    }
}

fn step_playing(session: &mut Session, dt: f32) {
    session.timers.flight_time += dt;

    // Physics
    session.actor.integrate(dt, &session.config);

    // Obstacles: scroll, spawn, recycle
    let update = session
        .obstacles
        .update(dt, &session.config, &mut session.rng);
    if let Some(gap_top) = update.spawned {
        log::debug!(
            "Spawned obstacle (gap top {:.1}, {} on screen)",
            gap_top,
            session.obstacles.len()
        );
        session.emit(GameEvent::ObstacleSpawned { gap_top });
    }
    scroll_ground(session, dt);

    // A hit ends the tick before any scoring
    if let Some(cause) =
        collision::detect(&mut session.actor, session.obstacles.iter(), &session.config)
    {
        dispatch(session, Input::Collide(cause));
        return;
    }

    let earned = award_passed(&mut session.obstacles, session.actor.x, &session.config);
    if earned > 0 {
        session.score += earned;
        session.emit(GameEvent::Scored {
            score: session.score,
        });
    }
}

fn scroll_ground(session: &mut Session, dt: f32) {
    let period = session.config.ground_texture_period;
    let offset = session.timers.ground_offset + session.config.obstacle_speed * dt;
    session.timers.ground_offset = offset.rem_euclid(period);
}

impl Session {
    /// Host entry point for one display refresh: timestamp (ms) -> clamped
    /// dt -> tick. The very first frame only primes the clock.
    pub fn frame(&mut self, now_ms: f64) {
        let primed = self.clock.is_primed();
        let dt = self.clock.advance(now_ms);
        if primed {
            tick(self, dt);
        }
    }

    /// Forget the previous frame timestamp (host stopped delivering frames)
    pub fn pause_clock(&mut self) {
        self.clock.restart();
    }
}
