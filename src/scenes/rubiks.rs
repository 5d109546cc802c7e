use glam::{Mat4, Vec3};

use super::common::push_wire_box;
use super::{DrawCall, SceneGeometry};

const CENTER: Vec3 = Vec3::new(2.0, 0.0, 0.0);
const CUBIE_SIZE: f32 = 0.2;
const SPACING: f32 = 0.4;
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// 3x3x3 lattice of small cubes, baked in world space and drawn in one call
pub fn build() -> SceneGeometry {
    let mut vertices = Vec::new();
    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                let center = CENTER + Vec3::new(x as f32, y as f32, z as f32) * SPACING;
                push_wire_box(&mut vertices, center, Vec3::splat(CUBIE_SIZE), WHITE);
            }
        }
    }

    let draws = vec![DrawCall {
        model: Mat4::IDENTITY,
        vertices: 0..vertices.len() as u32,
    }];

    SceneGeometry { vertices, draws }
}
