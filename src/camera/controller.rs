//! Quaternion orbit controller owning the camera GPU uniform.

use glam::{Quat, Vec2, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::RenderContext;
use crate::options::CameraOptions;

/// Orbit-style camera controller: rotate around a focus point, pan the
/// focus point, zoom the distance.
pub struct CameraController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,
    limits: CameraOptions,

    /// The camera state driven by this controller.
    pub camera: Camera,
    /// CPU copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout for the camera uniform.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over `buffer`.
    pub bind_group: wgpu::BindGroup,
}

impl CameraController {
    /// Create the controller looking at the origin from the configured
    /// distance along +Z.
    #[must_use]
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let focus_point = Vec3::ZERO;
        let distance = options.distance;
        let orientation = Quat::IDENTITY;

        let camera = Camera {
            eye: focus_point + Vec3::new(0.0, 0.0, distance),
            target: focus_point,
            up: Vec3::Y,
            aspect: context.config.width as f32 / context.config.height as f32,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
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

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            orientation,
            distance,
            focus_point,
            limits: options.clone(),
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;
        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Push the current camera state to the GPU uniform buffer.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
    }

    /// Update the projection aspect ratio for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Orbit by a mouse drag delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        // Horizontal rotation around the camera's up vector.
        let up = self.orientation * Vec3::Y;
        let horizontal =
            Quat::from_axis_angle(up, -delta.x * self.limits.rotate_speed);
        self.orientation = horizontal * self.orientation;

        // Vertical rotation around the camera's right vector.
        let right = self.orientation * Vec3::X;
        let vertical =
            Quat::from_axis_angle(right, -delta.y * self.limits.rotate_speed);
        self.orientation = vertical * self.orientation;

        self.update_camera_pos();
    }

    /// Pan the focus point by a mouse drag delta in pixels.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        self.focus_point += right * (-delta.x * self.limits.pan_speed)
            + up * (delta.y * self.limits.pan_speed);
        self.update_camera_pos();
    }

    /// Zoom by a scroll delta (positive = closer), clamped to the
    /// configured distance range.
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.limits.zoom_speed;
        self.distance = self
            .distance
            .clamp(self.limits.min_distance, self.limits.max_distance);
        self.update_camera_pos();
    }

    /// Restore the initial orbit (origin focus, +Z eye, default distance).
    pub fn reset(&mut self) {
        self.orientation = Quat::IDENTITY;
        self.distance = self.limits.distance;
        self.focus_point = Vec3::ZERO;
        self.update_camera_pos();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // GPU-free stand-in covering the orbit math only.
    struct Orbit {
        orientation: Quat,
        distance: f32,
        focus: Vec3,
    }

    impl Orbit {
        fn eye(&self) -> Vec3 {
            self.focus + self.orientation * Vec3::Z * self.distance
        }
    }

    #[test]
    fn zoom_scaling_clamps_to_range() {
        let limits = CameraOptions::default();
        let mut distance = limits.distance;
        for _ in 0..200 {
            distance *= 1.0 - 1.0 * limits.zoom_speed;
            distance = distance.clamp(limits.min_distance, limits.max_distance);
        }
        assert_eq!(distance, limits.min_distance);
    }

    #[test]
    fn identity_orbit_looks_down_negative_z() {
        let orbit = Orbit {
            orientation: Quat::IDENTITY,
            distance: 7.0,
            focus: Vec3::ZERO,
        };
        assert!((orbit.eye() - Vec3::new(0.0, 0.0, 7.0)).length() < 1e-6);
    }
}
