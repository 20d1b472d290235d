//! Integration test: full runs through the game state machine.
//!
//! Start -> play -> crash -> reset, driven tick by tick with injected time and
//! a seeded RNG.

use floppy_fish::game::{GamePhase, GameState, Obstacle, Size, SpriteDimensions};
use floppy_fish::{GameConfig, InputEvent};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SPRITES: SpriteDimensions = SpriteDimensions {
    flyer: Size::new(34.0, 24.0),
    pipe: Size::new(52.0, 320.0),
};

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2024)
}

fn new_game(config: GameConfig) -> GameState {
    GameState::new(config, SPRITES, 0).expect("valid config")
}

/// Drop the flyer into the ground and return the tick time of the crash.
fn crash(game: &mut GameState, rng: &mut ChaCha8Rng) -> u64 {
    game.handle_input(InputEvent::FlapOrClick, 0);
    for now in 1..=1_000 {
        if game.tick(now, rng).died {
            return now;
        }
    }
    panic!("flyer never crashed");
}

// =============================================================================
// Scenario A: flap once, then 100 ticks of pure physics
// =============================================================================

#[test]
fn test_single_flap_follows_closed_form_for_100_ticks() {
    let config = GameConfig {
        gravity: 0.5,
        scroll_speed: 3.0,
        spawn_period_ms: 60,
        spawn_head_start_ms: 0,
        // tall enough that 100 ticks of falling never reach the ground
        play_height: 5_000.0,
        ..GameConfig::default()
    };
    let mut game = new_game(config);
    let mut rng = rng();
    let y0 = game.flyer.y;

    game.handle_input(InputEvent::FlapOrClick, 0);
    assert!(game.started());
    assert_eq!(game.flyer.velocity, -8.0);

    let mut expected_velocity = -8.0;
    let mut expected_y = y0;
    for now in 1..=100u64 {
        let report = game.tick(now, &mut rng);
        assert!(report.simulated);
        assert!(!report.died, "crashed at tick {}", now);

        expected_velocity += 0.5;
        expected_y += expected_velocity;
        assert_eq!(game.flyer.velocity, expected_velocity);
        assert_eq!(game.flyer.y, expected_y);
    }

    // y0 + sum_{k=1..100} (-8 + 0.5k)
    let n = 100.0;
    assert_eq!(game.flyer.y, y0 - 8.0 * n + 0.25 * n * (n + 1.0));

    // spawned once at t=61; the next would be due after t=121
    assert_eq!(game.obstacles.len(), 1);
    assert_eq!(game.phase(), GamePhase::Playing);
}

// =============================================================================
// Scenario C: hitting the ground ends the run and freezes physics
// =============================================================================

#[test]
fn test_ground_crash_transitions_to_dead_and_freezes() {
    let config = GameConfig::default();
    let ground = config.ground_y();
    let mut game = new_game(config);
    let mut rng = rng();

    crash(&mut game, &mut rng);

    assert!(game.flyer.y >= ground);
    assert_eq!(game.phase(), GamePhase::Dead);
    assert!(game.game_over());
    assert!(!game.flyer.is_alive());

    let frozen_y = game.flyer.y;
    let frozen_velocity = game.flyer.velocity;
    let frozen_score = game.score();
    for now in 2_000..2_100 {
        let report = game.tick(now, &mut rng);
        assert!(!report.simulated);
    }
    assert_eq!(game.flyer.y, frozen_y);
    assert_eq!(game.flyer.velocity, frozen_velocity);
    assert_eq!(game.score(), frozen_score);
}

#[test]
fn test_flap_after_death_does_not_move_flyer_before_reset() {
    let mut game = new_game(GameConfig::default());
    let mut rng = rng();
    crash(&mut game, &mut rng);

    // the flap resets instead of flapping the dead flyer
    game.handle_input(InputEvent::FlapOrClick, 5_000);
    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert_eq!(game.flyer.velocity, 0.0);
}

#[test]
fn test_no_spawning_after_death() {
    let config = GameConfig {
        spawn_period_ms: 10,
        spawn_head_start_ms: 0,
        ..GameConfig::default()
    };
    let mut game = new_game(config);
    let mut rng = rng();
    crash(&mut game, &mut rng);

    let count = game.obstacles.len();
    for now in 10_000..10_500 {
        game.tick(now, &mut rng);
    }
    assert_eq!(game.obstacles.len(), count);
}

// =============================================================================
// Scenario D: reset after death restores a fresh run
// =============================================================================

#[test]
fn test_reset_after_death_restores_initial_state() {
    let config = GameConfig {
        spawn_period_ms: 5,
        spawn_head_start_ms: 0,
        ..GameConfig::default()
    };
    let (start_x, start_y) = config.flyer_start();
    let mut game = new_game(config);
    let mut rng = rng();

    // a pipe already behind the flyer scores on the first tick
    let geometry = game.obstacles.geometry();
    game.obstacles.push(Obstacle::new(0.0, 300.0, geometry));
    crash(&mut game, &mut rng);
    assert!(game.score() >= 1);
    assert!(!game.obstacles.is_empty());

    game.handle_input(InputEvent::ResetRequested, 9_000);

    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert!(!game.started());
    assert!(!game.game_over());
    assert_eq!(game.score(), 0);
    assert!(game.obstacles.is_empty());
    assert_eq!(game.flyer.x(), start_x);
    assert_eq!(game.flyer.y, start_y);
    assert_eq!(game.flyer.velocity, 0.0);
    assert!(game.flyer.is_alive());
}

#[test]
fn test_new_run_after_reset_plays_normally() {
    let mut game = new_game(GameConfig::default());
    let mut rng = rng();
    crash(&mut game, &mut rng);
    game.handle_input(InputEvent::ResetRequested, 10_000);

    game.handle_input(InputEvent::FlapOrClick, 10_000);
    assert_eq!(game.phase(), GamePhase::Playing);
    let report = game.tick(10_016, &mut rng);
    assert!(report.simulated);
    assert_eq!(game.flyer.velocity, -7.5);
}

// =============================================================================
// Input handling across phases
// =============================================================================

#[test]
fn test_subsequent_flaps_reset_velocity_not_accumulate() {
    let mut game = new_game(GameConfig::default());
    let mut rng = rng();
    game.handle_input(InputEvent::FlapOrClick, 0);
    for now in 1..=5 {
        game.tick(now, &mut rng);
    }
    game.handle_input(InputEvent::FlapOrClick, 6);
    game.handle_input(InputEvent::FlapOrClick, 6);
    assert_eq!(game.flyer.velocity, -8.0);
    assert_eq!(game.phase(), GamePhase::Playing);
}

#[test]
fn test_frozen_until_first_flap() {
    let mut game = new_game(GameConfig::default());
    let mut rng = rng();
    for now in 0..10_000u64 {
        game.tick(now * 16, &mut rng);
    }
    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert!(game.obstacles.is_empty());
    assert_eq!(game.flyer.y, 300.0);
}

#[test]
fn test_score_is_monotonic_within_a_run() {
    let config = GameConfig {
        spawn_period_ms: 400,
        spawn_head_start_ms: 0,
        ..GameConfig::default()
    };
    let mut game = new_game(config);
    let mut rng = rng();
    game.handle_input(InputEvent::FlapOrClick, 0);

    let mut last_score = 0;
    for now in 1..=2_000u64 {
        // keep the flyer hovering around the middle
        if game.flyer.y > 300.0 {
            game.handle_input(InputEvent::FlapOrClick, now * 16);
        }
        let report = game.tick(now * 16, &mut rng);
        assert!(game.score() >= last_score);
        assert_eq!(game.score(), last_score + report.scored);
        last_score = game.score();
        if report.died {
            break;
        }
    }
}
