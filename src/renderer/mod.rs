//! Rendering
//!
//! The simulation never draws. Each frame the host hands a read-only
//! `Session` and a `Canvas` to `draw_frame`, which paints the layers for the
//! current game state. Any 2D surface that implements the handful of
//! canvas-style calls below can host the game.

pub mod layout;
pub mod mesh;
pub mod vertex;

use glam::Vec2;

use crate::sim::collision::Rect;
use crate::sim::state::{GameState, Session};
use vertex::colors;

pub use mesh::MeshCanvas;
pub use vertex::Vertex;

/// RGBA, 0-1 per channel
pub type Color = [f32; 4];

/// The draw calls the renderer needs from a 2D surface
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Push the current transform
    fn save(&mut self);
    /// Pop the transform pushed by the matching `save`
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    /// Centered text at `pos`, `size` in pixels
    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}

/// Paint one frame of `session`
pub fn draw_frame<C: Canvas>(session: &Session, canvas: &mut C) {
    canvas.clear(colors::SKY);
    draw_columns(session, canvas);
    draw_ground(session, canvas);
    draw_actor(session, canvas);

    match session.state {
        GameState::Idle => draw_idle_hud(session, canvas),
        GameState::Playing => draw_score(session, canvas),
        GameState::GameOver => draw_game_over(session, canvas),
    }
}

fn draw_columns<C: Canvas>(session: &Session, canvas: &mut C) {
    for obstacle in session.obstacles.iter() {
        let rects = layout::column_rects(obstacle, &session.config);
        canvas.fill_rect(rects.top, colors::COLUMN);
        canvas.fill_rect(rects.bottom, colors::COLUMN);
        canvas.fill_rect(rects.top_cap, colors::COLUMN_CAP);
        canvas.fill_rect(rects.bottom_cap, colors::COLUMN_CAP);
    }
}

fn draw_ground<C: Canvas>(session: &Session, canvas: &mut C) {
    let config = &session.config;
    canvas.fill_rect(layout::ground_rect(config), colors::GROUND);
    for stripe in layout::ground_stripes(config, session.timers.ground_offset) {
        canvas.fill_rect(stripe, colors::GROUND_STRIPE);
    }
    canvas.fill_rect(layout::grass_rect(config), colors::GRASS);
}

fn draw_actor<C: Canvas>(session: &Session, canvas: &mut C) {
    let actor = &session.actor;
    let r = actor.radius;

    canvas.save();
    canvas.translate(Vec2::new(actor.x, actor.y));
    canvas.rotate(actor.rotation(&session.config));

    canvas.fill_circle(Vec2::ZERO, r, colors::ACTOR);
    canvas.fill_circle(Vec2::new(-r * 0.35, r * 0.15), r * 0.45, colors::ACTOR_WING);
    canvas.fill_circle(Vec2::new(r * 0.4, -r * 0.3), r * 0.32, colors::EYE);
    canvas.fill_circle(Vec2::new(r * 0.5, -r * 0.3), r * 0.14, colors::PUPIL);
    canvas.fill_rect(
        Rect::new(r * 0.7, -r * 0.05, r * 0.6, r * 0.35),
        colors::BEAK,
    );

    canvas.restore();
}

fn draw_score<C: Canvas>(session: &Session, canvas: &mut C) {
    let pos = Vec2::new(session.config.screen_width / 2.0, 60.0);
    canvas.fill_text(&session.score.to_string(), pos, 48.0, colors::TEXT);
}

fn draw_idle_hud<C: Canvas>(session: &Session, canvas: &mut C) {
    let cx = session.config.screen_width / 2.0;
    let y = session.config.play_height() * 0.25;
    canvas.fill_text("GAPWING", Vec2::new(cx, y), 48.0, colors::TEXT);
    canvas.fill_text(
        "Tap or press Space to fly",
        Vec2::new(cx, session.config.play_height() * 0.7),
        20.0,
        colors::TEXT,
    );
    if session.best_score > 0 {
        canvas.fill_text(
            &format!("Best {}", session.best_score),
            Vec2::new(cx, y + 44.0),
            20.0,
            colors::TEXT,
        );
    }
}

fn draw_game_over<C: Canvas>(session: &Session, canvas: &mut C) {
    let config = &session.config;
    let cx = config.screen_width / 2.0;
    let cy = config.play_height() / 2.0;

    canvas.fill_rect(
        Rect::new(0.0, 0.0, config.screen_width, config.screen_height),
        colors::SHADE,
    );
    canvas.fill_text("Game Over", Vec2::new(cx, cy - 60.0), 44.0, colors::TEXT);
    canvas.fill_text(
        &format!("Score {}", session.score),
        Vec2::new(cx, cy),
        24.0,
        colors::TEXT,
    );
    canvas.fill_text(
        &format!("Best {}", session.best_score),
        Vec2::new(cx, cy + 32.0),
        24.0,
        colors::TEXT,
    );
    canvas.fill_text(
        "Tap to continue",
        Vec2::new(cx, cy + 90.0),
        18.0,
        colors::TEXT,
    );
}
