use side_runner::compute::{init_state, new_obstacle, new_player};
use side_runner::config::GameConfig;
use side_runner::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn status_clone_and_eq() {
    assert_eq!(GameStatus::Running, GameStatus::Running);
    assert_ne!(GameStatus::Running, GameStatus::GameOver);

    let status = GameStatus::GameOver;
    assert_eq!(status.clone(), GameStatus::GameOver);
}

#[test]
fn actor_bounds_match_fields() {
    let c = GameConfig::default();
    let p = new_player(&c);
    assert_eq!(p.bounds(), (0.0, 520.0, 200.0, 200.0));
    assert_eq!(p.animation(), &p.animation);

    let o = new_obstacle(&c);
    assert_eq!(o.bounds(), (800.0, 601.0, 160.0, 119.0));
    assert_eq!(o.animation().max_frame, 5);
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(GameConfig::default(), &mut StdRng::seed_from_u64(7));
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.spawner.obstacles.push(new_obstacle(&cloned.config));
    cloned.config.gravity = 2.0;

    assert_eq!(original.player.x, 0.0);
    assert_eq!(original.score, 0);
    assert!(original.spawner.obstacles.is_empty());
    assert_eq!(original.config.gravity, 0.9);
}
