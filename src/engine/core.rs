//! The render engine: GPU resources, per-frame update, and command
//! execution.

use rand::rngs::ThreadRng;
use web_time::Instant;

use super::command::CurioCommand;
use crate::animation::TweenTimeline;
use crate::camera::CameraController;
use crate::error::CurioError;
use crate::geometry::primitives;
use crate::gpu::{DepthTexture, PaperTexture, RenderContext};
use crate::input::{InputEvent, InputProcessor};
use crate::lighting::Lighting;
use crate::options::Options;
use crate::picking::{PickController, Tooltip};
use crate::renderer::{GpuMesh, MeshPipelines, ObjectBinding, TextOverlay};
use crate::scene::{Scene, ShapeKind};
use crate::util::FrameTiming;

/// Rotation speed of the active selection around X, radians per second.
const ACTIVE_SPIN: f32 = 0.5;

/// Surface size after applying the pixel-ratio clamp.
///
/// Window sizes arrive in physical pixels, so a ratio beyond the clamp is
/// folded back by scaling the surface down by `max_ratio / scale_factor`.
#[must_use]
pub fn scaled_surface_size(
    physical: (u32, u32),
    scale_factor: f64,
    max_ratio: f64,
) -> (u32, u32) {
    if scale_factor <= max_ratio {
        return (physical.0.max(1), physical.1.max(1));
    }
    let scale = max_ratio / scale_factor;
    (
        ((f64::from(physical.0) * scale) as u32).max(1),
        ((f64::from(physical.1) * scale) as u32).max(1),
    )
}

/// The engine owns every piece of scene and GPU state and runs the
/// per-frame update/render cycle.
pub struct GalleryEngine {
    context: RenderContext,
    camera: CameraController,
    lighting: Lighting,
    pipelines: MeshPipelines,
    paper_texture: PaperTexture,
    depth: DepthTexture,

    shape_meshes: Vec<GpuMesh>,
    sphere_mesh: GpuMesh,
    knot_mesh: GpuMesh,
    pickable_bindings: Vec<ObjectBinding>,
    sphere_binding: ObjectBinding,
    knot_binding: ObjectBinding,

    scene: Scene,
    picker: PickController,
    timeline: TweenTimeline,
    input: InputProcessor,
    overlay: TextOverlay,
    /// Frame timing and the smoothed FPS counter.
    pub frame_timing: FrameTiming,
    options: Options,
    tooltip: Option<Tooltip>,
    window_size: (u32, u32),
    scale_factor: f64,
    rng: ThreadRng,
}

impl GalleryEngine {
    /// Initialize the engine against a window surface.
    ///
    /// `size` is the window's physical size and `scale_factor` its device
    /// pixel ratio (clamped per the display options).
    ///
    /// # Errors
    ///
    /// Returns [`CurioError::Gpu`] if GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        scale_factor: f64,
        options: Options,
    ) -> Result<Self, CurioError> {
        let surface_size = scaled_surface_size(
            size,
            scale_factor,
            f64::from(options.display.max_pixel_ratio),
        );
        let context = RenderContext::new(window, surface_size).await?;

        let mut camera = CameraController::new(&context, &options.camera);
        camera.resize(size.0, size.1);
        let lighting = Lighting::new(&context);
        let paper_texture = PaperTexture::new(&context);
        let pipelines = MeshPipelines::new(
            &context,
            &camera.layout,
            &lighting.layout,
            &paper_texture.layout,
        );
        let depth = DepthTexture::new(
            &context.device,
            context.config.width,
            context.config.height,
        );

        let shape_meshes = ShapeKind::ALL
            .iter()
            .map(|kind| GpuMesh::upload(&context.device, &kind.mesh()))
            .collect();
        let sphere_mesh = GpuMesh::upload(
            &context.device,
            &primitives::uv_sphere(1.8, 32, 32),
        );
        let knot_mesh = GpuMesh::upload(
            &context.device,
            &primitives::torus_knot(1.3, 0.1, 200, 5, 12, 3),
        );

        let scene = Scene::new(&options);
        let pickable_bindings = (0..scene.registry.len())
            .map(|_| pipelines.bind_object(&context.device))
            .collect();
        let sphere_binding = pipelines.bind_object(&context.device);
        let knot_binding = pipelines.bind_object(&context.device);

        let picker = PickController::new(options.colors.clone());
        let overlay = TextOverlay::new(&context);

        log::info!(
            "engine initialized: {} pickables, {}x{} surface",
            scene.registry.len(),
            context.config.width,
            context.config.height
        );

        Ok(Self {
            context,
            camera,
            lighting,
            pipelines,
            paper_texture,
            depth,
            shape_meshes,
            sphere_mesh,
            knot_mesh,
            pickable_bindings,
            sphere_binding,
            knot_binding,
            scene,
            picker,
            timeline: TweenTimeline::new(),
            input: InputProcessor::new(),
            overlay,
            frame_timing: FrameTiming::new(),
            options,
            tooltip: None,
            window_size: size,
            scale_factor,
            rng: rand::rng(),
        })
    }

    /// The engine's runtime options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The scene state (registry and fixtures).
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The currently active selection, if any.
    #[must_use]
    pub fn active_selection(&self) -> Option<usize> {
        self.picker.active()
    }

    /// The tooltip created by the last hitting click, if any.
    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Smoothed frames-per-second figure.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Record a new device pixel ratio. Callers should follow up with
    /// [`resize`](Self::resize).
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Apply a new physical window size: camera aspect follows the window,
    /// the surface follows the clamped pixel ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
        let (w, h) = scaled_surface_size(
            (width, height),
            self.scale_factor,
            f64::from(self.options.display.max_pixel_ratio),
        );
        self.context.resize(w, h);
        self.camera.resize(width, height);
        self.depth = DepthTexture::new(&self.context.device, w, h);
    }

    /// Feed a normalized input event through the processor, executing any
    /// resulting command.
    ///
    /// Returns the command when it must be handled by the embedder
    /// (currently only [`CurioCommand::ToggleFullscreen`]).
    pub fn handle_input(&mut self, event: InputEvent) -> Option<CurioCommand> {
        let command = self.input.handle_event(event, Instant::now())?;
        if command == CurioCommand::ToggleFullscreen {
            return Some(command);
        }
        self.execute(command);
        None
    }

    /// Look up a pressed key in the bindings and execute its action.
    pub fn handle_key(&mut self, key: &str) {
        if let Some(action) = self.options.keybindings.lookup(key) {
            self.execute(action.to_command());
        }
    }

    /// Execute a command.
    pub fn execute(&mut self, command: CurioCommand) {
        match command {
            CurioCommand::RotateCamera { delta } => self.camera.rotate(delta),
            CurioCommand::PanCamera { delta } => self.camera.pan(delta),
            CurioCommand::Zoom { delta } => self.camera.zoom(delta),
            CurioCommand::ResetCamera => self.camera.reset(),
            CurioCommand::SelectAt { x, y } => self.select_at(x, y),
            CurioCommand::ClearSelection => {
                self.picker.clear(&mut self.scene.registry);
                self.tooltip = None;
            }
            CurioCommand::ToggleGroupVisible => {
                self.scene.registry.toggle_visible();
            }
            CurioCommand::AdjustKnotScaleX { delta } => {
                self.scene.fixtures.adjust_knot_scale_x(delta);
            }
            CurioCommand::ToggleFullscreen => {
                log::debug!("fullscreen toggling belongs to the window");
            }
        }
    }

    fn select_at(&mut self, x: f32, y: f32) {
        let viewport =
            (self.window_size.0 as f32, self.window_size.1 as f32);
        let outcome = self.picker.handle_click(
            x,
            y,
            viewport,
            &self.camera.camera,
            &mut self.scene.registry,
            &mut self.timeline,
            &mut self.rng,
            Instant::now(),
        );
        // The previous tooltip is dropped on every click; a miss leaves
        // nothing behind.
        self.tooltip = outcome.tooltip;
    }

    /// Advance animations and continuous spins by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let now = Instant::now();
        self.timeline.advance(now, &mut self.scene.registry);
        if let Some(id) = self.picker.active() {
            if let Some(object) = self.scene.registry.get_mut(id) {
                object.rotation.x += ACTIVE_SPIN * dt;
            }
        }
        self.scene.fixtures.spin(dt);
    }

    /// Draw the scene and overlay, then present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain needs
    /// reconfiguration; the caller resizes and retries next frame.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let queue = &self.context.queue;
        self.camera.update_gpu(queue);

        for (object, binding) in
            self.scene.registry.iter().zip(&self.pickable_bindings)
        {
            binding.update(queue, object.model_matrix(), object.current_color);
        }
        let sphere = &self.scene.fixtures.paper_sphere;
        self.sphere_binding
            .update(queue, sphere.model_matrix(), sphere.color);
        let knot = &self.scene.fixtures.torus_knot;
        self.knot_binding
            .update(queue, knot.model_matrix(), knot.color);

        if let Err(e) = self.overlay.prepare(
            &self.context,
            self.frame_timing.fps(),
            self.tooltip.as_ref(),
        ) {
            log::error!("text overlay prepare failed: {e}");
        }

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();
        {
            let [r, g, b] = self.options.display.background;
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: f64::from(r),
                                    g: f64::from(g),
                                    b: f64::from(b),
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });

            // Paper sphere (textured, lit).
            pass.set_pipeline(&self.pipelines.textured);
            pass.set_bind_group(0, &self.camera.bind_group, &[]);
            pass.set_bind_group(1, &self.sphere_binding.bind_group, &[]);
            pass.set_bind_group(2, &self.lighting.bind_group, &[]);
            pass.set_bind_group(3, &self.paper_texture.bind_group, &[]);
            pass.set_vertex_buffer(0, self.sphere_mesh.vertices.slice(..));
            pass.set_index_buffer(
                self.sphere_mesh.triangles.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            pass.draw_indexed(0..self.sphere_mesh.triangle_count, 0, 0..1);

            // Torus knot (solid, lit).
            pass.set_pipeline(&self.pipelines.lit);
            pass.set_bind_group(1, &self.knot_binding.bind_group, &[]);
            pass.set_vertex_buffer(0, self.knot_mesh.vertices.slice(..));
            pass.set_index_buffer(
                self.knot_mesh.triangles.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            pass.draw_indexed(0..self.knot_mesh.triangle_count, 0, 0..1);

            // Pickable grid (wireframe), hidden with the group flag.
            if self.scene.registry.group_visible {
                pass.set_pipeline(&self.pipelines.wireframe);
                for (object, binding) in
                    self.scene.registry.iter().zip(&self.pickable_bindings)
                {
                    let mesh =
                        &self.shape_meshes[object.id % self.shape_meshes.len()];
                    pass.set_bind_group(1, &binding.bind_group, &[]);
                    pass.set_vertex_buffer(0, mesh.vertices.slice(..));
                    pass.set_index_buffer(
                        mesh.lines.slice(..),
                        wgpu::IndexFormat::Uint32,
                    );
                    pass.draw_indexed(0..mesh.line_count, 0, 0..1);
                }
            }

            if let Err(e) = self.overlay.render(&mut pass) {
                log::error!("text overlay render failed: {e}");
            }
        }
        self.context.submit(encoder);
        frame.present();

        self.frame_timing.end_frame();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_size_passes_through_under_the_clamp() {
        assert_eq!(scaled_surface_size((1920, 1080), 2.0, 6.0), (1920, 1080));
        assert_eq!(scaled_surface_size((800, 600), 6.0, 6.0), (800, 600));
    }

    #[test]
    fn surface_size_scales_down_past_the_clamp() {
        // Ratio 8 with a clamp of 6 keeps 6/8 of the pixels per axis.
        assert_eq!(scaled_surface_size((800, 400), 8.0, 6.0), (600, 300));
    }

    #[test]
    fn surface_size_never_reaches_zero() {
        assert_eq!(scaled_surface_size((0, 0), 1.0, 6.0), (1, 1));
        assert_eq!(scaled_surface_size((1, 1), 100.0, 6.0), (1, 1));
    }
}
