//! Keyboard input handling

use game_core::{InputEvent, Key, PointerSample};

/// Map a `KeyboardEvent.key` value onto a game key. Letters match in either
/// case; the bare `Up`/`Down` names are what older browsers report.
pub fn key_from_str(key: &str) -> Option<Key> {
    match key {
        "ArrowUp" | "Up" => Some(Key::Up),
        "ArrowDown" | "Down" => Some(Key::Down),
        "p" | "P" => Some(Key::Pause),
        "r" | "R" => Some(Key::Reset),
        _ => None,
    }
}

/// Handle key down event
///
/// Auto-repeat is dropped for pause and reset so holding the key toggles once.
pub fn handle_key_down(key: &str, repeat: bool) -> Option<InputEvent> {
    match key_from_str(key)? {
        Key::Pause | Key::Reset if repeat => None,
        key => Some(InputEvent::KeyDown(key)),
    }
}

/// Handle key up event
pub fn handle_key_up(key: &str) -> Option<InputEvent> {
    key_from_str(key).map(InputEvent::KeyUp)
}

/// Build a pointer event from viewport coordinates and the canvas's
/// on-screen bounding box
pub fn handle_pointer_move(client_y: f64, rect_top: f64, rect_height: f64) -> InputEvent {
    InputEvent::PointerMove(PointerSample::new(
        client_y as f32,
        rect_top as f32,
        rect_height as f32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_and_aliases() {
        assert_eq!(key_from_str("ArrowUp"), Some(Key::Up));
        assert_eq!(key_from_str("Up"), Some(Key::Up));
        assert_eq!(key_from_str("ArrowDown"), Some(Key::Down));
        assert_eq!(key_from_str("Down"), Some(Key::Down));
    }

    #[test]
    fn test_letters_case_insensitive() {
        assert_eq!(key_from_str("p"), Some(Key::Pause));
        assert_eq!(key_from_str("P"), Some(Key::Pause));
        assert_eq!(key_from_str("r"), Some(Key::Reset));
        assert_eq!(key_from_str("R"), Some(Key::Reset));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        for key in ["x", "Enter", "", "ArrowLeft", "pp", "Escape"] {
            assert_eq!(key_from_str(key), None, "{key:?}");
            assert_eq!(handle_key_down(key, false), None);
            assert_eq!(handle_key_up(key), None);
        }
    }

    #[test]
    fn test_repeat_only_filtered_for_toggles() {
        assert_eq!(handle_key_down("p", true), None);
        assert_eq!(handle_key_down("R", true), None);
        assert_eq!(
            handle_key_down("ArrowUp", true),
            Some(InputEvent::KeyDown(Key::Up))
        );
        assert_eq!(
            handle_key_down("p", false),
            Some(InputEvent::KeyDown(Key::Pause))
        );
    }

    #[test]
    fn test_pointer_move() {
        let event = handle_pointer_move(250.0, 100.0, 300.0);
        match event {
            InputEvent::PointerMove(sample) => assert_eq!(sample.surface_y(600.0), Some(300.0)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_key_up() {
        assert_eq!(handle_key_up("Down"), Some(InputEvent::KeyUp(Key::Down)));
    }
}
