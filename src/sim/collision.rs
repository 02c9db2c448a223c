//! Collision detection
//!
//! The actor is a circle; obstacle columns are pairs of axis-aligned
//! rectangles above and below the gap. Overlap uses the nearest point on the
//! rectangle to the circle center, compared in squared distance. Exact
//! tangency (`distance == radius`) is not a collision.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacles::Obstacle;
use crate::config::GameConfig;

/// Axis-aligned rectangle (origin at top-left, +y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    /// Point inside the rectangle closest to `p`
    #[inline]
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }
}

/// What the actor hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Ground,
    /// Column above the gap
    ObstacleTop,
    /// Column below the gap
    ObstacleBottom,
}

/// Strict circle/rectangle overlap (`d² < r²`)
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let nearest = rect.nearest_point(center);
    center.distance_squared(nearest) < radius * radius
}

/// Rectangle of the column above the gap
pub fn top_rect(obstacle: &Obstacle, config: &GameConfig) -> Rect {
    Rect::new(obstacle.x, 0.0, config.obstacle_width, obstacle.gap_top)
}

/// Rectangle of the column below the gap, down to the ground surface
pub fn bottom_rect(obstacle: &Obstacle, config: &GameConfig) -> Rect {
    let top = obstacle.gap_bottom(config);
    Rect::new(obstacle.x, top, config.obstacle_width, config.ground_y() - top)
}

/// Ground contact: touching the surface counts
#[inline]
pub fn touches_ground(actor: &Actor, config: &GameConfig) -> bool {
    actor.bottom() >= config.ground_y()
}

/// Ground check; on contact the actor is set to rest on the surface
pub fn check_ground(actor: &mut Actor, config: &GameConfig) -> Option<CollisionKind> {
    if touches_ground(actor, config) {
        actor.y = config.ground_y() - actor.radius;
        return Some(CollisionKind::Ground);
    }
    None
}

/// Circle vs every column that could reach the actor
pub fn check_obstacles<'a>(
    actor: &Actor,
    obstacles: impl IntoIterator<Item = &'a Obstacle>,
    config: &GameConfig,
) -> Option<CollisionKind> {
    let center = Vec2::new(actor.x, actor.y);
    let reach_left = actor.x - actor.radius;
    let reach_right = actor.x + actor.radius;

    for obstacle in obstacles {
        // Horizontal prefilter
        if obstacle.x > reach_right || obstacle.trailing_edge(config) < reach_left {
            continue;
        }
        if circle_rect_overlap(center, actor.radius, &top_rect(obstacle, config)) {
            return Some(CollisionKind::ObstacleTop);
        }
        if circle_rect_overlap(center, actor.radius, &bottom_rect(obstacle, config)) {
            return Some(CollisionKind::ObstacleBottom);
        }
    }
    None
}

/// Full check for one tick: ground first, then columns, first hit wins
pub fn detect<'a>(
    actor: &mut Actor,
    obstacles: impl IntoIterator<Item = &'a Obstacle>,
    config: &GameConfig,
) -> Option<CollisionKind> {
    if let Some(kind) = check_ground(actor, config) {
        return Some(kind);
    }
    check_obstacles(actor, obstacles, config)
}
