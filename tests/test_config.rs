use side_runner::config::*;

#[test]
fn default_config_is_valid() {
    assert_eq!(GameConfig::default().validate(), Ok(()));
}

#[test]
fn frame_interval_at_twenty_fps() {
    assert_eq!(GameConfig::default().frame_interval(), 50.0);
}

#[test]
fn ground_lines() {
    let c = GameConfig::default();
    assert_eq!(c.player_ground_y(), 520.0); // 720 - 200
    assert_eq!(c.obstacle_ground_y(), 601.0); // 720 - 119
}

// ── validate ──────────────────────────────────────────────────────────────────

#[test]
fn rejects_zero_fps() {
    let c = GameConfig { animation_fps: 0.0, ..GameConfig::default() };
    assert_eq!(c.validate(), Err(ConfigError::InvalidAnimationFps(0.0)));
}

#[test]
fn rejects_nan_fps() {
    let c = GameConfig { animation_fps: f64::NAN, ..GameConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::InvalidAnimationFps(_))));
}

#[test]
fn rejects_player_wider_than_field() {
    let c = GameConfig { player_width: 900.0, ..GameConfig::default() };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::SpriteTooLarge { what: "player width", .. })
    ));
}

#[test]
fn rejects_obstacle_taller_than_field() {
    let c = GameConfig { obstacle_height: 721.0, ..GameConfig::default() };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::SpriteTooLarge { what: "obstacle height", .. })
    ));
}

#[test]
fn rejects_zero_spawn_interval() {
    let c = GameConfig { spawn_interval: 0.0, ..GameConfig::default() };
    assert_eq!(c.validate(), Err(ConfigError::InvalidSpawnInterval(0.0)));
}

#[test]
fn rejects_jitter_not_below_interval() {
    let c = GameConfig { spawn_jitter: 2000.0, ..GameConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::InvalidSpawnJitter { .. })));
}

#[test]
fn accepts_zero_jitter() {
    let c = GameConfig { spawn_jitter: 0.0, ..GameConfig::default() };
    assert_eq!(c.validate(), Ok(()));
}

#[test]
fn rejects_negative_scroll_speed() {
    let c = GameConfig { scroll_speed: -1.0, ..GameConfig::default() };
    assert_eq!(
        c.validate(),
        Err(ConfigError::NegativeSpeed { what: "scroll speed", value: -1.0 })
    );
}

#[test]
fn error_messages_name_the_problem() {
    let err = ConfigError::InvalidSpawnJitter { jitter: 600.0, interval: 500.0 };
    assert_eq!(
        err.to_string(),
        "spawn jitter 600ms must be non-negative and below the 500ms interval"
    );
}
