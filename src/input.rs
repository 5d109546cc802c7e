use std::collections::HashSet;

use crate::camera::Camera;
use crate::config::ControlsConfig;
use crate::core::{Button, Controller};

/// Applies one frame of input to the camera.
///
/// Held keys move and rotate at a fixed rate scaled by the frame time. The
/// scroll wheel zooms directly, and the zoom keys step once per press. Key
/// edges are detected against the pressed set remembered from the previous
/// processed frame.
#[derive(Debug, Clone)]
pub struct CameraInputMapper {
    movement_speed: f32,
    rotation_speed: f32,
    zoom_step: f32,
    previous: HashSet<Button>,
}

impl CameraInputMapper {
    pub fn new(controls: &ControlsConfig) -> Self {
        Self {
            movement_speed: controls.movement_speed,
            rotation_speed: controls.rotation_speed,
            zoom_step: controls.zoom_step,
            previous: HashSet::new(),
        }
    }

    /// Run one update; does nothing while the overlay owns the keyboard
    pub fn update(
        &mut self,
        camera: &mut Camera,
        input: &dyn Controller,
        delta_time: f32,
        ui_wants_keyboard: bool,
    ) {
        if ui_wants_keyboard {
            return;
        }

        self.apply_movement(camera, input, delta_time);
        self.apply_rotation(camera, input, delta_time);
        self.apply_zoom(camera, input);

        self.previous = input.get_down_keys().iter().copied().collect();
    }

    fn apply_movement(&self, camera: &mut Camera, input: &dyn Controller, delta_time: f32) {
        let step = self.movement_speed * delta_time;
        let front = camera.front();
        let up = camera.up();
        let right = front.cross(up).normalize();

        // Each held key contributes its own full-speed step; diagonals add up
        let moves = [
            (Button::KeyW, front),
            (Button::KeyS, -front),
            (Button::KeyD, right),
            (Button::KeyA, -right),
            (Button::Space, up),
            (Button::Shift, -up),
        ];

        for (button, direction) in moves {
            if input.is_down(button) {
                camera.move_by(direction * step);
            }
        }
    }

    fn apply_rotation(&self, camera: &mut Camera, input: &dyn Controller, delta_time: f32) {
        let step = self.rotation_speed * delta_time;

        if input.is_down(Button::ArrowLeft) {
            camera.add_yaw(-step);
        }
        if input.is_down(Button::ArrowRight) {
            camera.add_yaw(step);
        }
        if input.is_down(Button::ArrowUp) {
            camera.add_pitch(step);
        }
        if input.is_down(Button::ArrowDown) {
            camera.add_pitch(-step);
        }
        if input.is_down(Button::KeyQ) {
            camera.add_roll(step);
        }
        if input.is_down(Button::KeyE) {
            camera.add_roll(-step);
        }
    }

    fn apply_zoom(&self, camera: &mut Camera, input: &dyn Controller) {
        // Wheel zoom is per event, not per second
        camera.zoom(-input.scroll_delta());

        if self.just_pressed(input, Button::Equal) || self.just_pressed(input, Button::NumpadAdd) {
            camera.zoom(-self.zoom_step);
        }
        if self.just_pressed(input, Button::Minus)
            || self.just_pressed(input, Button::NumpadSubtract)
        {
            camera.zoom(self.zoom_step);
        }
    }

    fn just_pressed(&self, input: &dyn Controller, button: Button) -> bool {
        input.is_down(button) && !self.previous.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputSnapshot;
    use glam::Vec3;

    fn mapper() -> CameraInputMapper {
        CameraInputMapper::new(&ControlsConfig::default())
    }

    #[test]
    fn test_forward_moves_along_front() {
        let mut camera = Camera::default();
        let mut mapper = mapper();
        let input = InputSnapshot::new([Button::KeyW], 0.0);

        mapper.update(&mut camera, &input, 1.0, false);

        assert!((camera.position() - Vec3::new(2.5, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut camera = Camera::default();
        let mut mapper = mapper();
        let input = InputSnapshot::new([Button::KeyA, Button::KeyD], 0.0);

        mapper.update(&mut camera, &input, 0.5, false);

        assert!(camera.position().length() < 1e-5);
    }
}
