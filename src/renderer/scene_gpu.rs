use std::num::NonZeroU64;
use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::scenes::SceneKind;
use crate::types::{ModelUniform, MODEL_UNIFORM_STRIDE};

/// Bytes of a model matrix visible through each dynamic offset
const MODEL_BINDING_SIZE: u64 = std::mem::size_of::<[[f32; 4]; 4]>() as u64;

/// Layout for the per-draw model matrix (group 1)
pub fn model_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("model_bind_group_layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: NonZeroU64::new(MODEL_BINDING_SIZE),
            },
            count: None,
        }],
    })
}

/// A scene uploaded to the GPU.
///
/// Built by `initialize`, drawn by `render`; dropping the handle releases its
/// buffers.
pub struct GpuScene {
    kind: SceneKind,
    vertex_buffer: wgpu::Buffer,
    _model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
    draws: Vec<Range<u32>>,
}

impl GpuScene {
    pub fn initialize(
        device: &wgpu::Device,
        model_layout: &wgpu::BindGroupLayout,
        kind: SceneKind,
    ) -> Self {
        let geometry = kind.build();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Vertex Buffer"),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let models: Vec<ModelUniform> = geometry
            .draws
            .iter()
            .map(|draw| ModelUniform::new(draw.model))
            .collect();

        let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Model Buffer"),
            contents: bytemuck::cast_slice(&models),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let model_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("model_bind_group"),
            layout: model_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &model_buffer,
                    offset: 0,
                    size: NonZeroU64::new(MODEL_BINDING_SIZE),
                }),
            }],
        });

        log::info!(
            "Scene '{}' uploaded: {} vertices, {} draws",
            kind.name(),
            geometry.vertex_count(),
            geometry.draws.len()
        );

        Self {
            kind,
            vertex_buffer,
            _model_buffer: model_buffer,
            model_bind_group,
            draws: geometry.draws.into_iter().map(|draw| draw.vertices).collect(),
        }
    }

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    /// Issue one draw per model transform; the pipeline and frame bind group
    /// (group 0) must already be set
    pub fn render(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        for (i, vertices) in self.draws.iter().enumerate() {
            let offset = (i as wgpu::BufferAddress * MODEL_UNIFORM_STRIDE) as wgpu::DynamicOffset;
            render_pass.set_bind_group(1, &self.model_bind_group, &[offset]);
            render_pass.draw(vertices.clone(), 0..1);
        }
    }
}

impl Drop for GpuScene {
    fn drop(&mut self) {
        log::debug!("Scene '{}' disposed", self.kind.name());
    }
}
