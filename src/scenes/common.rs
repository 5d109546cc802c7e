use glam::Vec3;

use crate::types::Vertex;

/// Corner pairs of a box's 12 edges: back face, front face, connecting edges
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Vertices emitted per wireframe box (two per edge)
pub const BOX_VERTEX_COUNT: u32 = 24;

/// Append a line-list wireframe of an axis-aligned box
pub fn push_wire_box(vertices: &mut Vec<Vertex>, center: Vec3, size: Vec3, color: [f32; 3]) {
    let h = size * 0.5;
    let corners = [
        center + Vec3::new(-h.x, -h.y, -h.z),
        center + Vec3::new(-h.x, h.y, -h.z),
        center + Vec3::new(h.x, h.y, -h.z),
        center + Vec3::new(h.x, -h.y, -h.z),
        center + Vec3::new(-h.x, -h.y, h.z),
        center + Vec3::new(-h.x, h.y, h.z),
        center + Vec3::new(h.x, h.y, h.z),
        center + Vec3::new(h.x, -h.y, h.z),
    ];

    vertices.extend(BOX_EDGES.iter().flat_map(|&(a, b)| {
        [
            Vertex::new(corners[a].to_array(), color),
            Vertex::new(corners[b].to_array(), color),
        ]
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_box_vertex_count() {
        let mut vertices = Vec::new();
        push_wire_box(&mut vertices, Vec3::ZERO, Vec3::ONE, [1.0, 1.0, 1.0]);
        assert_eq!(vertices.len() as u32, BOX_VERTEX_COUNT);
    }

    #[test]
    fn test_wire_box_stays_in_bounds() {
        let mut vertices = Vec::new();
        let center = Vec3::new(2.0, -1.0, 0.5);
        push_wire_box(&mut vertices, center, Vec3::new(0.8, 2.0, 0.8), [0.0, 0.0, 0.0]);
        for v in &vertices {
            let offset = (Vec3::from_array(v.position) - center).abs();
            assert!(offset.x <= 0.4 + 1e-6);
            assert!(offset.y <= 1.0 + 1e-6);
            assert!(offset.z <= 0.4 + 1e-6);
        }
    }

    #[test]
    fn test_every_edge_is_axis_aligned() {
        let mut vertices = Vec::new();
        push_wire_box(&mut vertices, Vec3::ZERO, Vec3::splat(2.0), [1.0, 0.0, 0.0]);
        for pair in vertices.chunks(2) {
            let d = (Vec3::from_array(pair[1].position) - Vec3::from_array(pair[0].position)).abs();
            let moving_axes = [d.x, d.y, d.z].iter().filter(|c| **c > 1e-6).count();
            assert_eq!(moving_axes, 1);
        }
    }
}
