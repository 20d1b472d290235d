//! Property tests for the flyer physics and obstacle bookkeeping.

use floppy_fish::game::{Flyer, Obstacle, ObstacleManager, Size};
use floppy_fish::GameConfig;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FLYER: Size = Size::new(34.0, 24.0);

proptest! {
    #[test]
    fn gravity_step_is_exact(
        y in 0.0f64..600.0,
        gravity in 0.01f64..5.0,
        flap in -20.0f64..-0.1,
        ticks in 0usize..50,
    ) {
        let mut flyer = Flyer::new(100.0, y, FLYER, gravity, flap);
        for _ in 0..ticks {
            flyer.update();
        }
        let (v_before, y_before) = (flyer.velocity, flyer.y);
        flyer.update();
        prop_assert_eq!(flyer.velocity, v_before + gravity);
        prop_assert_eq!(flyer.y, y_before + (v_before + gravity));
        prop_assert!((flyer.bounds().center_y() - flyer.y).abs() < 1e-9);
    }

    #[test]
    fn flap_overwrites_velocity(
        gravity in 0.01f64..5.0,
        flap in -20.0f64..-0.1,
        ticks in 0usize..100,
    ) {
        let mut flyer = Flyer::new(100.0, 300.0, FLYER, gravity, flap);
        for _ in 0..ticks {
            flyer.update();
        }
        flyer.flap();
        prop_assert_eq!(flyer.velocity, flap);
        flyer.flap();
        prop_assert_eq!(flyer.velocity, flap);
    }

    #[test]
    fn score_delta_is_idempotent(
        xs in prop::collection::vec(-60.0f64..500.0, 0..12),
        flyer_x in 0.0f64..400.0,
    ) {
        let config = GameConfig::default();
        let mut m = ObstacleManager::new(&config, 52.0, 320.0, 0);
        let g = m.geometry();
        let mut sorted = xs.clone();
        sorted.sort_by(f64::total_cmp);
        for x in &sorted {
            m.push(Obstacle::new(*x, 300.0, g));
        }

        let expected = sorted.iter().filter(|x| **x + 52.0 < flyer_x).count() as u32;
        prop_assert_eq!(m.score_delta(flyer_x), expected);
        prop_assert_eq!(m.score_delta(flyer_x), 0);
    }

    #[test]
    fn dead_flyer_never_spawns(
        seed in any::<u64>(),
        times in prop::collection::vec(0u64..1_000_000, 1..40),
    ) {
        let config = GameConfig::default();
        let mut m = ObstacleManager::new(&config, 52.0, 320.0, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut sorted = times.clone();
        sorted.sort_unstable();
        for now in sorted {
            prop_assert!(!m.maybe_spawn(now, false, &mut rng));
            m.advance();
        }
        prop_assert!(m.is_empty());
    }

    #[test]
    fn spawned_gaps_stay_inside_margins(seed in any::<u64>(), spawns in 1u64..30) {
        let config = GameConfig::default();
        let range = config.gap_center_range();
        let mut m = ObstacleManager::new(&config, 52.0, 320.0, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for i in 1..=spawns {
            m.maybe_spawn(i * (config.spawn_period_ms + 1), true, &mut rng);
        }
        prop_assert_eq!(m.len() as u64, spawns);
        for o in m.iter() {
            prop_assert!(range.contains(&o.gap_y()));
        }
    }
}
