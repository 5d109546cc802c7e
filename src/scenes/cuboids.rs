use glam::{Mat4, Vec3};

use super::common::{push_wire_box, BOX_VERTEX_COUNT};
use super::{DrawCall, SceneGeometry};

const CENTER: Vec3 = Vec3::new(4.0, 0.0, 0.0);
const FOOTPRINT: f32 = 0.8;
const HEIGHTS: [f32; 4] = [1.0, 2.0, 1.5, 0.75];
const COLORS: [[f32; 3]; 4] = [
    [1.0, 0.2, 0.2], // red
    [0.2, 1.0, 0.2], // green
    [0.2, 0.2, 1.0], // blue
    [1.0, 0.7, 0.2], // amber
];
const OFFSETS: [Vec3; 4] = [
    Vec3::new(-1.0, 0.0, -1.0),
    Vec3::new(1.0, 0.0, -1.0),
    Vec3::new(-1.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, 1.0),
];

/// Four cuboids of different heights, each modelled at the origin and
/// placed with its own translation
pub fn build() -> SceneGeometry {
    let mut vertices = Vec::with_capacity(HEIGHTS.len() * BOX_VERTEX_COUNT as usize);
    for (height, color) in HEIGHTS.iter().zip(COLORS) {
        push_wire_box(
            &mut vertices,
            Vec3::ZERO,
            Vec3::new(FOOTPRINT, *height, FOOTPRINT),
            color,
        );
    }

    let draws = OFFSETS
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            let start = i as u32 * BOX_VERTEX_COUNT;
            DrawCall {
                model: Mat4::from_translation(CENTER + *offset),
                vertices: start..start + BOX_VERTEX_COUNT,
            }
        })
        .collect();

    SceneGeometry { vertices, draws }
}
