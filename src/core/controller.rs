use std::collections::HashSet;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    Space,
    Shift,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Equal,
    Minus,
    NumpadAdd,
    NumpadSubtract,
    Escape,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Vertical scroll accumulated this frame (positive = away from the user)
    fn scroll_delta(&self) -> f32;
}

/// Frozen per-frame view of the input devices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pressed: Vec<Button>,
    scroll_delta: f32,
}

impl InputSnapshot {
    pub fn new(pressed: impl IntoIterator<Item = Button>, scroll_delta: f32) -> Self {
        let mut seen = HashSet::new();
        let pressed = pressed.into_iter().filter(|b| seen.insert(*b)).collect();
        Self { pressed, scroll_delta }
    }

    /// Nothing held, no scroll
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn pressed_set(&self) -> HashSet<Button> {
        self.pressed.iter().copied().collect()
    }
}

impl Controller for InputSnapshot {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_equality() {
        assert_eq!(Button::KeyW, Button::KeyW);
        assert_ne!(Button::Equal, Button::NumpadAdd);
    }

    #[test]
    fn test_button_debug() {
        assert_eq!(format!("{:?}", Button::ArrowLeft), "ArrowLeft");
        assert_eq!(format!("{:?}", Button::NumpadSubtract), "NumpadSubtract");
    }

    #[test]
    fn test_snapshot_dedups_buttons() {
        let snapshot = InputSnapshot::new([Button::KeyW, Button::KeyW, Button::Space], 0.0);
        assert_eq!(snapshot.get_down_keys(), &[Button::KeyW, Button::Space]);
        assert_eq!(snapshot.pressed_set().len(), 2);
    }

    #[test]
    fn test_snapshot_is_down() {
        let snapshot = InputSnapshot::new([Button::KeyQ], 1.5);
        assert!(snapshot.is_down(Button::KeyQ));
        assert!(!snapshot.is_down(Button::KeyE));
        assert_eq!(snapshot.scroll_delta(), 1.5);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = InputSnapshot::empty();
        assert!(snapshot.get_down_keys().is_empty());
        assert_eq!(snapshot.scroll_delta(), 0.0);
    }

    // Test mock controller implementation
    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }

        fn scroll_delta(&self) -> f32 {
            0.0
        }
    }

    #[test]
    fn test_controller_trait_object() {
        let controller = MockController {
            pressed: vec![Button::KeyW, Button::ArrowUp],
        };
        let dynamic: &dyn Controller = &controller;
        assert!(dynamic.is_down(Button::ArrowUp));
        assert_eq!(dynamic.get_down_keys().len(), 2);
    }
}
