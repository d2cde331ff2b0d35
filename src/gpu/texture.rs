//! Texture helpers: the depth attachment and the procedural paper texture.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::render_context::RenderContext;

/// Side length of the generated paper texture in texels.
const PAPER_SIZE: u32 = 256;

/// Fixed seed so the paper grain is identical across runs.
const PAPER_SEED: u64 = 0x5eed_9a9e;

/// Coarse noise lattice resolution (texels per lattice cell: SIZE / CELLS).
const PAPER_CELLS: u32 = 16;

/// Depth attachment texture, recreated on every resize.
pub struct DepthTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl DepthTexture {
    /// The depth format used by all scene pipelines.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Create a depth texture matching the given surface dimensions.
    #[must_use]
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// Procedurally generated wrinkled-paper texture for the fixture sphere,
/// with its sampler and fragment bind group.
pub struct PaperTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
    /// Repeat-wrap linear sampler.
    pub sampler: wgpu::Sampler,
    /// Bind group layout (texture + sampler, fragment visibility).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over `view` and `sampler`.
    pub bind_group: wgpu::BindGroup,
}

impl PaperTexture {
    /// Generate the paper texture and upload it to the GPU.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let pixels = generate_paper_pixels(PAPER_SIZE, PAPER_SEED);

        let texture = context.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Paper Texture"),
            size: wgpu::Extent3d {
                width: PAPER_SIZE,
                height: PAPER_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        context.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(PAPER_SIZE * 4),
                rows_per_image: Some(PAPER_SIZE),
            },
            wgpu::Extent3d {
                width: PAPER_SIZE,
                height: PAPER_SIZE,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = context.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Paper Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            ..Default::default()
        });

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Paper Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float {
                                filterable: true,
                            },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(
                            wgpu::SamplerBindingType::Filtering,
                        ),
                        count: None,
                    },
                ],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Paper Bind Group"),
                    layout: &layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::TextureView(&view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::Sampler(&sampler),
                        },
                    ],
                });

        Self {
            texture,
            view,
            sampler,
            layout,
            bind_group,
        }
    }
}

/// Generate RGBA8 pixels for a wrinkled-paper look: two octaves of value
/// noise modulating a warm base tint. Deterministic for a given seed.
#[must_use]
pub fn generate_paper_pixels(size: u32, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let cells = PAPER_CELLS as usize;
    let lattice: Vec<f32> =
        (0..cells * cells).map(|_| rng.random::<f32>()).collect();

    let sample = |x: f32, y: f32| -> f32 {
        let gx = x * cells as f32;
        let gy = y * cells as f32;
        let x0 = gx.floor() as usize % cells;
        let y0 = gy.floor() as usize % cells;
        let x1 = (x0 + 1) % cells;
        let y1 = (y0 + 1) % cells;
        let fx = gx.fract();
        let fy = gy.fract();
        let top = lattice[y0 * cells + x0] * (1.0 - fx)
            + lattice[y0 * cells + x1] * fx;
        let bottom = lattice[y1 * cells + x0] * (1.0 - fx)
            + lattice[y1 * cells + x1] * fx;
        top * (1.0 - fy) + bottom * fy
    };

    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for py in 0..size {
        for px in 0..size {
            let u = px as f32 / size as f32;
            let v = py as f32 / size as f32;
            // Two octaves: coarse wrinkles plus fine grain.
            let n = 0.7 * sample(u, v) + 0.3 * sample(u * 4.0 % 1.0, v * 4.0 % 1.0);
            let shade = 0.75 + 0.25 * n;
            let base = [0.93_f32, 0.90, 0.84];
            for channel in base {
                pixels.push((channel * shade * 255.0) as u8);
            }
            pixels.push(255);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_pixels_have_expected_size_and_opaque_alpha() {
        let pixels = generate_paper_pixels(32, 1);
        assert_eq!(pixels.len(), 32 * 32 * 4);
        assert!(pixels.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn paper_pixels_are_deterministic_per_seed() {
        assert_eq!(generate_paper_pixels(16, 7), generate_paper_pixels(16, 7));
        assert_ne!(generate_paper_pixels(16, 7), generate_paper_pixels(16, 8));
    }
}
