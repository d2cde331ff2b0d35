//! Mesh upload and the three scene pipelines (wireframe, lit, textured).

use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::geometry::{MeshData, Vertex};
use crate::gpu::{DepthTexture, RenderContext};

/// Per-object uniform: model matrix plus solid color.
/// NOTE: Must match the WGSL struct layout (80 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    /// Object-to-world transform.
    pub model: [[f32; 4]; 4],
    /// RGBA color (alpha kept at 1).
    pub color: [f32; 4],
}

impl ObjectUniform {
    /// Pack a model matrix and RGB color.
    #[must_use]
    pub fn new(model: Mat4, color: [f32; 3]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
        }
    }
}

/// A mesh uploaded to the GPU, with triangle and wireframe index buffers.
pub struct GpuMesh {
    /// Vertex buffer.
    pub vertices: wgpu::Buffer,
    /// Triangle-list index buffer.
    pub triangles: wgpu::Buffer,
    /// Number of triangle indices.
    pub triangle_count: u32,
    /// Line-list index buffer of unique edges.
    pub lines: wgpu::Buffer,
    /// Number of line indices.
    pub line_count: u32,
}

impl GpuMesh {
    /// Upload a generated mesh, deriving its wireframe edge list.
    #[must_use]
    pub fn upload(device: &wgpu::Device, mesh: &MeshData) -> Self {
        let edges = mesh.wireframe_edges();
        let vertices =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Vertex Buffer"),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let triangles =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Triangle Index Buffer"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        let lines =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Line Index Buffer"),
                contents: bytemuck::cast_slice(&edges),
                usage: wgpu::BufferUsages::INDEX,
            });
        Self {
            vertices,
            triangles,
            triangle_count: mesh.index_count(),
            lines,
            line_count: edges.len() as u32,
        }
    }
}

/// One object's uniform buffer and bind group.
pub struct ObjectBinding {
    /// GPU uniform buffer sized for [`ObjectUniform`].
    pub buffer: wgpu::Buffer,
    /// Bind group over `buffer`.
    pub bind_group: wgpu::BindGroup,
}

impl ObjectBinding {
    /// Update the uniform contents for this frame.
    pub fn update(
        &self,
        queue: &wgpu::Queue,
        model: Mat4,
        color: [f32; 3],
    ) {
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[ObjectUniform::new(model, color)]),
        );
    }
}

/// The three scene pipelines sharing one shader module.
pub struct MeshPipelines {
    /// Bind group layout for per-object uniforms.
    pub object_layout: wgpu::BindGroupLayout,
    /// Unlit line-list pipeline for the pickable wireframes.
    pub wireframe: wgpu::RenderPipeline,
    /// Lit solid-color pipeline for the torus knot.
    pub lit: wgpu::RenderPipeline,
    /// Lit textured pipeline for the paper sphere.
    pub textured: wgpu::RenderPipeline,
}

impl MeshPipelines {
    /// Build the pipelines against the given shared bind group layouts.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
        texture_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let device = &context.device;
        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Scene Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("shaders/scene.wgsl").into(),
                ),
            });

        let object_layout = device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Object Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let build = |label: &str,
                     layouts: &[&wgpu::BindGroupLayout],
                     topology: wgpu::PrimitiveTopology,
                     fs_entry: &str| {
            let layout = device.create_pipeline_layout(
                &wgpu::PipelineLayoutDescriptor {
                    label: Some(label),
                    bind_group_layouts: layouts,
                    immediate_size: 0,
                },
            );
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                            1 => Float32x3,
                            2 => Float32x2,
                        ],
                    }],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(fs_entry),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DepthTexture::FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        let wireframe = build(
            "Wireframe Pipeline",
            &[camera_layout, &object_layout],
            wgpu::PrimitiveTopology::LineList,
            "fs_unlit",
        );
        let lit = build(
            "Lit Pipeline",
            &[camera_layout, &object_layout, lighting_layout],
            wgpu::PrimitiveTopology::TriangleList,
            "fs_lit",
        );
        let textured = build(
            "Textured Pipeline",
            &[
                camera_layout,
                &object_layout,
                lighting_layout,
                texture_layout,
            ],
            wgpu::PrimitiveTopology::TriangleList,
            "fs_textured",
        );

        Self {
            object_layout,
            wireframe,
            lit,
            textured,
        }
    }

    /// Allocate a zeroed per-object uniform buffer and bind group.
    #[must_use]
    pub fn bind_object(&self, device: &wgpu::Device) -> ObjectBinding {
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Object Uniform Buffer"),
                contents: bytemuck::cast_slice(&[ObjectUniform::new(
                    Mat4::IDENTITY,
                    [1.0; 3],
                )]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Object Bind Group"),
                layout: &self.object_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });
        ObjectBinding { buffer, bind_group }
    }
}
