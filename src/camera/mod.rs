pub mod orientation;

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

pub use orientation::{normalize_angle, Orientation, PITCH_LIMIT};

pub const FOV_MIN: f32 = 15.0;
pub const FOV_MAX: f32 = 90.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Free-flying camera: position, orientation and field of view (degrees)
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    orientation: Orientation,
    field_of_view: f32,
    defaults: CameraConfig,
}

impl Camera {
    pub fn new(defaults: &CameraConfig) -> Self {
        Self {
            position: Vec3::from_array(defaults.position),
            orientation: Orientation::new(defaults.yaw, defaults.pitch, defaults.roll),
            field_of_view: defaults.field_of_view.clamp(FOV_MIN, FOV_MAX),
            defaults: defaults.clone(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.orientation.yaw()
    }

    pub fn pitch(&self) -> f32 {
        self.orientation.pitch()
    }

    pub fn roll(&self) -> f32 {
        self.orientation.roll()
    }

    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn front(&self) -> Vec3 {
        self.orientation.front()
    }

    pub fn up(&self) -> Vec3 {
        self.orientation.up()
    }

    pub fn right(&self) -> Vec3 {
        self.orientation.right()
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Translate by an already scaled world-space delta
    pub fn move_by(&mut self, delta: Vec3) {
        self.position += delta;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn add_yaw(&mut self, degrees: f32) {
        self.orientation.add_yaw(degrees);
    }

    pub fn add_pitch(&mut self, degrees: f32) {
        self.orientation.add_pitch(degrees);
    }

    pub fn add_roll(&mut self, degrees: f32) {
        self.orientation.add_roll(degrees);
    }

    pub fn set_yaw(&mut self, degrees: f32) {
        self.orientation.set_yaw(degrees);
    }

    pub fn set_pitch(&mut self, degrees: f32) {
        self.orientation.set_pitch(degrees);
    }

    pub fn set_roll(&mut self, degrees: f32) {
        self.orientation.set_roll(degrees);
    }

    pub fn set_field_of_view(&mut self, degrees: f32) {
        self.field_of_view = degrees.clamp(FOV_MIN, FOV_MAX);
    }

    /// Widen (positive) or narrow (negative) the field of view
    pub fn zoom(&mut self, delta: f32) {
        self.set_field_of_view(self.field_of_view + delta);
    }

    /// Look-at from `position` toward `position + front`
    pub fn view_matrix(&self) -> Mat4 {
        let front = self.orientation.front();
        Mat4::look_at_rh(self.position, self.position + front, self.orientation.up())
    }

    /// Perspective projection; `aspect_ratio` must be positive
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.field_of_view.to_radians(), aspect_ratio, Z_NEAR, Z_FAR)
    }

    /// Restore position, angles and field of view to the configured defaults
    pub fn reset(&mut self) {
        let defaults = &self.defaults;
        self.position = Vec3::from_array(defaults.position);
        self.orientation = Orientation::new(defaults.yaw, defaults.pitch, defaults.roll);
        self.field_of_view = defaults.field_of_view.clamp(FOV_MIN, FOV_MAX);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}
