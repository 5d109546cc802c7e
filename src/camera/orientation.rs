use glam::{Quat, Vec3};

pub const PITCH_LIMIT: f32 = 89.0;

/// Wrap an angle in degrees into `(-180, 180]`
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Yaw/pitch/roll in degrees plus the directions derived from them.
///
/// `front` and `up` are recomputed on every mutation and cannot be set
/// directly. Yaw and roll wrap, pitch clamps to +/-89 so the forward vector
/// never reaches the poles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    yaw: f32,
    pitch: f32,
    roll: f32,
    front: Vec3,
    up: Vec3,
}

impl Orientation {
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        let mut orientation = Self {
            yaw: normalize_angle(yaw),
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            roll: normalize_angle(roll),
            front: Vec3::X,
            up: Vec3::Y,
        };
        orientation.recompute();
        orientation
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn roll(&self) -> f32 {
        self.roll
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Camera-space right axis, follows roll
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    pub fn add_yaw(&mut self, degrees: f32) {
        self.set_yaw(self.yaw + degrees);
    }

    pub fn add_pitch(&mut self, degrees: f32) {
        self.set_pitch(self.pitch + degrees);
    }

    pub fn add_roll(&mut self, degrees: f32) {
        self.set_roll(self.roll + degrees);
    }

    pub fn set_yaw(&mut self, degrees: f32) {
        self.yaw = normalize_angle(degrees);
        self.recompute();
    }

    pub fn set_pitch(&mut self, degrees: f32) {
        self.pitch = degrees.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.recompute();
    }

    pub fn set_roll(&mut self, degrees: f32) {
        self.roll = normalize_angle(degrees);
        self.recompute();
    }

    /// Rebuild `front` from yaw/pitch, then spin the up reference about
    /// `front` by roll so roll always stays relative to the view direction.
    fn recompute(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();

        // World up projected onto the plane perpendicular to front.
        // Never degenerate: |pitch| <= 89 keeps front off the Y axis.
        let right = self.front.cross(Vec3::Y).normalize();
        let level_up = right.cross(self.front).normalize();

        let roll = Quat::from_axis_angle(self.front, self.roll.to_radians());
        self.up = (roll * level_up).normalize();
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_normalize_angle_identity_inside_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(45.0), 45.0);
        assert_eq!(normalize_angle(-179.5), -179.5);
        assert_eq!(normalize_angle(180.0), 180.0);
    }

    #[test]
    fn test_normalize_angle_wraps() {
        assert_eq!(normalize_angle(190.0), -170.0);
        assert_eq!(normalize_angle(-190.0), 170.0);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(720.0 + 30.0), 30.0);
        assert_eq!(normalize_angle(-3600.0 - 90.0), -90.0);
    }

    #[test]
    fn test_normalize_angle_lower_bound_is_exclusive() {
        assert_eq!(normalize_angle(-180.0), 180.0);
        assert_eq!(normalize_angle(-540.0), 180.0);
    }

    #[test]
    fn test_default_basis() {
        let o = Orientation::default();
        assert!(approx(o.front(), Vec3::X));
        assert!(approx(o.up(), Vec3::Y));
        assert!(approx(o.right(), Vec3::Z));
    }

    #[test]
    fn test_pitch_clamps_instead_of_wrapping() {
        let mut o = Orientation::default();
        o.add_pitch(1000.0);
        assert_eq!(o.pitch(), 89.0);
        o.add_pitch(1000.0);
        assert_eq!(o.pitch(), 89.0);
        o.add_pitch(-5000.0);
        assert_eq!(o.pitch(), -89.0);
    }

    #[test]
    fn test_roll_leaves_front_alone() {
        let mut o = Orientation::new(30.0, 20.0, 0.0);
        let front = o.front();
        o.add_roll(73.0);
        assert!(approx(o.front(), front));
    }

    #[test]
    fn test_roll_90_turns_up_toward_right() {
        let mut o = Orientation::default();
        o.add_roll(90.0);
        // Rotating +Y about +X by +90 degrees gives +Z
        assert!(approx(o.up(), Vec3::Z));
    }
}
