use glam::Mat4;

/// Line vertex: world or model-space position plus RGB color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-frame camera matrices for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl FrameUniform {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
        }
    }
}

/// Stride between model matrices in the dynamic-offset uniform buffer
pub const MODEL_UNIFORM_STRIDE: wgpu::BufferAddress = 256;

/// Per-draw model matrix, padded to the dynamic offset alignment
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub _pad: [[f32; 4]; 12],
}

impl ModelUniform {
    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            _pad: [[0.0; 4]; 12],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_matches_size() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::layout().array_stride, 24);
    }

    #[test]
    fn test_model_uniform_fills_one_stride() {
        assert_eq!(std::mem::size_of::<ModelUniform>() as u64, MODEL_UNIFORM_STRIDE);
    }

    #[test]
    fn test_frame_uniform_column_major() {
        let uniform = FrameUniform::new(Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0)), Mat4::IDENTITY);
        assert_eq!(uniform.view[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(uniform.projection[0], [1.0, 0.0, 0.0, 0.0]);
    }
}
