//! Obstacle columns: spawning, scrolling and recycling
//!
//! Obstacles live in a ring buffer ordered by spawn time. The front is the
//! oldest (leftmost) column; new columns always enter at the right edge.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// One obstacle column with a passable gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Y of the top of the gap, fixed at spawn
    pub gap_top: f32,
    /// Set the one time the actor passes this column
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            scored: false,
        }
    }

    /// Y of the bottom of the gap
    #[inline]
    pub fn gap_bottom(&self, config: &GameConfig) -> f32 {
        self.gap_top + config.gap_size
    }

    /// Horizontal center, the scoring threshold
    #[inline]
    pub fn center_x(&self, config: &GameConfig) -> f32 {
        self.x + config.obstacle_width / 2.0
    }

    /// Right edge
    #[inline]
    pub fn trailing_edge(&self, config: &GameConfig) -> f32 {
        self.x + config.obstacle_width
    }
}

/// Outcome of one obstacle update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldUpdate {
    /// Gap top of the column spawned this tick, if any
    pub spawned: Option<f32>,
    /// Columns recycled off the left edge this tick
    pub removed: usize,
}

/// The scrolling obstacle queue plus its spawn bookkeeping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: VecDeque<Obstacle>,
    /// Seconds of Playing so far, until the first spawn
    warmup: f32,
    /// Scroll distance since the most recent spawn
    distance_since_spawn: f32,
    /// Whether the first column has appeared this round
    started: bool,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every column and restart the spawn schedule
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.warmup = 0.0;
        self.distance_since_spawn = 0.0;
        self.started = false;
    }

    /// Columns in spawn order (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Most recently spawned column
    pub fn newest(&self) -> Option<&Obstacle> {
        self.obstacles.back()
    }

    /// Insert a column directly (scenario setup and tests)
    pub fn push(&mut self, obstacle: Obstacle) {
        self.started = true;
        self.obstacles.push_back(obstacle);
    }

    /// Advance one Playing tick: scroll, maybe spawn, then recycle.
    pub fn update<R: Rng>(&mut self, dt: f32, config: &GameConfig, rng: &mut R) -> FieldUpdate {
        let step = config.obstacle_speed * dt;
        for obstacle in &mut self.obstacles {
            obstacle.x -= step;
        }

        let mut result = FieldUpdate::default();

        let due = if self.started {
            self.distance_since_spawn += step;
            self.distance_since_spawn >= config.obstacle_spacing
        } else {
            self.warmup += dt;
            self.warmup >= config.first_spawn_delay
        };
        if due {
            let gap_top = sample_gap_top(config, rng);
            self.obstacles
                .push_back(Obstacle::new(config.screen_width, gap_top));
            self.distance_since_spawn = 0.0;
            self.started = true;
            result.spawned = Some(gap_top);
        }

        while self
            .obstacles
            .front()
            .is_some_and(|o| o.trailing_edge(config) < 0.0)
        {
            self.obstacles.pop_front();
            result.removed += 1;
        }

        result
    }
}

/// Draw a gap top uniformly from `[min_gap_top, max_gap_top]`
pub fn sample_gap_top<R: Rng>(config: &GameConfig, rng: &mut R) -> f32 {
    let min_top = config.min_gap_top();
    let max_top = config.max_gap_top();
    if max_top <= min_top {
        return min_top;
    }
    rng.random_range(min_top..=max_top)
}
