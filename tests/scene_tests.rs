use glam::{Mat4, Vec3};
use virtual_cam::scenes::{SceneKind, BOX_VERTEX_COUNT};

#[cfg(test)]
mod scene_tests {
    use super::*;

    #[test]
    fn test_cuboids_layout() {
        let geometry = SceneKind::Cuboids.build();

        assert_eq!(geometry.vertex_count(), 4 * BOX_VERTEX_COUNT);
        assert_eq!(geometry.draws.len(), 4);
        for (i, draw) in geometry.draws.iter().enumerate() {
            let start = i as u32 * BOX_VERTEX_COUNT;
            assert_eq!(draw.vertices, start..start + BOX_VERTEX_COUNT);
        }
    }

    #[test]
    fn test_cuboids_surround_their_center() {
        let geometry = SceneKind::Cuboids.build();

        let mean = geometry
            .draws
            .iter()
            .map(|draw| draw.model.transform_point3(Vec3::ZERO))
            .sum::<Vec3>()
            / geometry.draws.len() as f32;

        assert!((mean - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_cuboids_have_distinct_heights() {
        let geometry = SceneKind::Cuboids.build();

        let heights: Vec<f32> = geometry
            .draws
            .iter()
            .map(|draw| {
                let range = draw.vertices.start as usize..draw.vertices.end as usize;
                let ys = geometry.vertices[range].iter().map(|v| v.position[1]);
                let (min, max) = ys.fold((f32::MAX, f32::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));
                max - min
            })
            .collect();

        assert_eq!(heights, vec![1.0, 2.0, 1.5, 0.75]);
    }

    #[test]
    fn test_rubiks_is_single_draw_of_27_cubes() {
        let geometry = SceneKind::Rubiks.build();

        assert_eq!(geometry.vertex_count(), 27 * BOX_VERTEX_COUNT);
        assert_eq!(geometry.draws.len(), 1);
        assert_eq!(geometry.draws[0].model, Mat4::IDENTITY);
        assert_eq!(geometry.draws[0].vertices, 0..27 * BOX_VERTEX_COUNT);
    }

    #[test]
    fn test_rubiks_is_centered() {
        let geometry = SceneKind::Rubiks.build();

        let sum: Vec3 = geometry
            .vertices
            .iter()
            .map(|v| Vec3::from_array(v.position))
            .sum();
        let mean = sum / geometry.vertices.len() as f32;

        assert!((mean - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_scene_names() {
        assert_eq!(SceneKind::Cuboids.name(), "Cuboids");
        assert_eq!(SceneKind::Rubiks.name(), "Rubik's Cube");
        assert_eq!(SceneKind::Rubiks.to_string(), "Rubik's Cube");
        assert_eq!(SceneKind::ALL.len(), 2);
    }
}
