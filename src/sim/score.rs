//! Score tracking: one point per column, awarded once its center passes the actor

use super::obstacles::ObstacleField;
use crate::config::GameConfig;

/// Mark every newly passed column and return how many points were earned.
///
/// Each unscored column is checked independently, so out-of-order passes are
/// still counted. Already-scored columns are skipped, which makes repeated
/// calls without movement a no-op.
pub fn award_passed(field: &mut ObstacleField, actor_x: f32, config: &GameConfig) -> u32 {
    let mut earned = 0;
    for obstacle in field.iter_mut() {
        if !obstacle.scored && obstacle.center_x(config) <= actor_x {
            obstacle.scored = true;
            earned += 1;
        }
    }
    earned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacles::Obstacle;
    use proptest::prelude::*;

    fn column_centered_at(config: &GameConfig, center: f32) -> Obstacle {
        Obstacle::new(center - config.obstacle_width / 2.0, 150.0)
    }

    #[test]
    fn test_awards_once_at_center() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new();
        field.push(column_centered_at(&config, config.actor_x + 1.0));
        assert_eq!(award_passed(&mut field, config.actor_x, &config), 0);

        for obstacle in field.iter_mut() {
            obstacle.x -= 1.0;
        }
        assert_eq!(award_passed(&mut field, config.actor_x, &config), 1);
        assert_eq!(award_passed(&mut field, config.actor_x, &config), 0);
        assert!(field.iter().all(|o| o.scored));
    }

    #[test]
    fn test_checks_every_unscored_column() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new();
        // Out-of-spawn-order: the newer column is already behind the actor
        field.push(column_centered_at(&config, config.actor_x + 200.0));
        field.push(column_centered_at(&config, config.actor_x - 50.0));
        field.push(column_centered_at(&config, config.actor_x - 10.0));

        assert_eq!(award_passed(&mut field, config.actor_x, &config), 2);
        let scored: Vec<bool> = field.iter().map(|o| o.scored).collect();
        assert_eq!(scored, vec![false, true, true]);
    }

    proptest! {
        #[test]
        fn prop_each_column_scores_at_most_once(
            centers in proptest::collection::vec(-200.0f32..600.0, 0..8),
            repeats in 1usize..5,
        ) {
            let config = GameConfig::default();
            let mut field = ObstacleField::new();
            for center in &centers {
                field.push(column_centered_at(&config, *center));
            }
            let mut total = 0;
            for _ in 0..repeats {
                total += award_passed(&mut field, config.actor_x, &config);
            }
            let passed = centers
                .iter()
                .filter(|c| {
                    column_centered_at(&config, **c).center_x(&config) <= config.actor_x
                })
                .count() as u32;
            prop_assert_eq!(total, passed);
        }
    }
}
