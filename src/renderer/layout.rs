//! Draw rectangles derived from read-only simulation data

use crate::config::GameConfig;
use crate::sim::collision::{Rect, bottom_rect, top_rect};
use crate::sim::obstacles::Obstacle;

/// Everything drawn for one obstacle column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnRects {
    pub top: Rect,
    /// Lip at the bottom of the top column
    pub top_cap: Rect,
    pub bottom: Rect,
    /// Lip at the top of the bottom column
    pub bottom_cap: Rect,
}

/// Body rectangles match the collision shapes exactly; caps overhang them
/// on both sides and are purely cosmetic.
pub fn column_rects(obstacle: &Obstacle, config: &GameConfig) -> ColumnRects {
    let cap_x = obstacle.x - config.cap_overhang;
    let cap_w = config.obstacle_width + 2.0 * config.cap_overhang;

    ColumnRects {
        top: top_rect(obstacle, config),
        top_cap: Rect::new(
            cap_x,
            obstacle.gap_top - config.cap_height,
            cap_w,
            config.cap_height,
        ),
        bottom: bottom_rect(obstacle, config),
        bottom_cap: Rect::new(
            cap_x,
            obstacle.gap_bottom(config),
            cap_w,
            config.cap_height,
        ),
    }
}

/// The ground band below the play area
pub fn ground_rect(config: &GameConfig) -> Rect {
    Rect::new(
        0.0,
        config.ground_y(),
        config.screen_width,
        config.ground_height,
    )
}

/// Thin grass strip along the top of the ground
pub fn grass_rect(config: &GameConfig) -> Rect {
    Rect::new(0.0, config.ground_y(), config.screen_width, 6.0)
}

/// Diagonal-looking ground stripes, shifted left by the scroll offset.
/// Each stripe is half a texture period wide.
pub fn ground_stripes(config: &GameConfig, offset: f32) -> Vec<Rect> {
    let period = config.ground_texture_period;
    let top = config.ground_y() + 6.0;
    let height = config.ground_height - 6.0;
    let count = (config.screen_width / period).ceil() as usize + 1;

    (0..count)
        .map(|i| Rect::new(i as f32 * period - offset, top, period / 2.0, height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_rects_frame_the_gap() {
        let config = GameConfig::default();
        let obstacle = Obstacle::new(200.0, 150.0);
        let rects = column_rects(&obstacle, &config);

        assert_eq!(rects.top.y + rects.top.h, 150.0);
        assert_eq!(rects.bottom.y, 150.0 + config.gap_size);
        assert_eq!(rects.bottom.y + rects.bottom.h, config.ground_y());
        assert_eq!(rects.top_cap.y + rects.top_cap.h, 150.0);
        assert_eq!(rects.bottom_cap.y, rects.bottom.y);
        assert!(rects.top_cap.x < rects.top.x);
        assert!(rects.top_cap.w > rects.top.w);
    }

    #[test]
    fn test_stripes_cover_screen_width() {
        let config = GameConfig::default();
        for offset in [0.0, 5.0, config.ground_texture_period - 0.1] {
            let stripes = ground_stripes(&config, offset);
            let first = stripes.first().map(|r| r.x).unwrap_or(f32::MAX);
            let last = stripes.last().map(|r| r.x + r.w).unwrap_or(f32::MIN);
            assert!(first <= 0.0);
            assert!(last >= config.screen_width - config.ground_texture_period / 2.0);
        }
    }
}
