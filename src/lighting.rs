//! Two-directional-light rig shared by the lit shaders.

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::gpu::RenderContext;

/// Lighting configuration shared across the lit pipelines.
/// NOTE: Must match the WGSL struct layout (48 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Primary light direction (normalized, pointing toward the light).
    pub light1_dir: [f32; 3],
    /// Primary light intensity.
    pub light1_intensity: f32,
    /// Secondary light direction (normalized).
    pub light2_dir: [f32; 3],
    /// Secondary light intensity.
    pub light2_intensity: f32,
    /// Ambient light intensity.
    pub ambient: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 3],
}

impl Default for LightingUniform {
    fn default() -> Self {
        Self {
            // Key light high over the right shoulder.
            light1_dir: Vec3::new(5.0, 4.0, 7.0).normalize().to_array(),
            light1_intensity: 0.6,
            // Fill light nearly camera-aligned.
            light2_dir: Vec3::new(1.0, 5.0, 10.0).normalize().to_array(),
            light2_intensity: 0.3,
            ambient: 0.15,
            _pad: [0.0; 3],
        }
    }
}

/// Owns the lighting uniform buffer and its bind group.
pub struct Lighting {
    /// CPU copy of the lighting parameters.
    pub uniform: LightingUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (fragment visibility).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over `buffer`.
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Create the default light rig and upload it.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let uniform = LightingUniform::default();

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Lighting Bind Group"),
                });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Push the current lighting parameters to the GPU.
    pub fn update_gpu(&self, queue: &wgpu::Queue) {
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
    }
}
