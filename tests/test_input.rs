use side_runner::input::*;

use crossterm::event::KeyCode;

#[test]
fn starts_with_nothing_pressed() {
    let input = InputState::new();
    for dir in Direction::ALL {
        assert!(!input.is_pressed(dir));
    }
}

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(Direction::from_key_code(KeyCode::Up), Some(Direction::Up));
    assert_eq!(Direction::from_key_code(KeyCode::Down), Some(Direction::Down));
    assert_eq!(Direction::from_key_code(KeyCode::Left), Some(Direction::Left));
    assert_eq!(Direction::from_key_code(KeyCode::Right), Some(Direction::Right));
    assert_eq!(Direction::from_key_code(KeyCode::Char('w')), None);
    assert_eq!(Direction::from_key_code(KeyCode::Enter), None);
}

#[test]
fn press_then_release() {
    let mut input = InputState::new();
    assert_eq!(input.press(KeyCode::Left), Some(Direction::Left));
    assert!(input.is_pressed(Direction::Left));
    assert!(!input.is_pressed(Direction::Right));

    assert_eq!(input.release(KeyCode::Left), Some(Direction::Left));
    assert!(!input.is_pressed(Direction::Left));
}

#[test]
fn repeated_press_is_still_one_key() {
    let mut input = InputState::new();
    input.press(KeyCode::Up);
    input.press(KeyCode::Up);
    input.release(KeyCode::Up);
    assert!(!input.is_pressed(Direction::Up));
}

#[test]
fn release_without_press_is_harmless() {
    let mut input = InputState::new();
    input.release(KeyCode::Down);
    assert!(!input.is_pressed(Direction::Down));
}

#[test]
fn unrecognised_keys_are_ignored() {
    let mut input = InputState::new();
    input.press(KeyCode::Right);
    assert_eq!(input.press(KeyCode::Char(' ')), None);
    assert_eq!(input.release(KeyCode::Char('d')), None);

    assert!(input.is_pressed(Direction::Right));
    for dir in [Direction::Up, Direction::Down, Direction::Left] {
        assert!(!input.is_pressed(dir));
    }
}

#[test]
fn several_keys_held_at_once() {
    let mut input = InputState::new();
    input.press(KeyCode::Up);
    input.press(KeyCode::Right);
    assert!(input.is_pressed(Direction::Up));
    assert!(input.is_pressed(Direction::Right));
    input.release(KeyCode::Up);
    assert!(input.is_pressed(Direction::Right));
}

#[test]
fn clear_drops_everything() {
    let mut input = InputState::new();
    for code in [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right] {
        input.press(code);
    }
    input.clear();
    for dir in Direction::ALL {
        assert!(!input.is_pressed(dir));
    }
}
