//! Glyphon text overlay: FPS counter and the pick tooltip.

use glyphon::{
    Attrs, Buffer, Cache, Color, Family, FontSystem, Metrics, Resolution,
    Shaping, SwashCache, TextArea, TextAtlas, TextBounds,
    TextRenderer as GlyphonRenderer, Viewport,
};
use wgpu::MultisampleState;

use crate::gpu::RenderContext;
use crate::picking::Tooltip;

/// Ink color that reads on the warm background.
const TEXT_COLOR: Color = Color::rgb(60, 60, 60);

/// Renders the FPS counter (top-left) and, when present, the tooltip
/// next to the stored cursor position.
pub struct TextOverlay {
    font_system: FontSystem,
    swash_cache: SwashCache,
    atlas: TextAtlas,
    text_renderer: GlyphonRenderer,
    viewport: Viewport,
    fps_buffer: Buffer,
    tooltip_buffer: Buffer,
}

impl TextOverlay {
    /// Create the overlay resources against the surface format.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let mut font_system = FontSystem::new();
        let swash_cache = SwashCache::new();
        let cache = Cache::new(&context.device);
        let mut atlas = TextAtlas::new(
            &context.device,
            &context.queue,
            &cache,
            context.format(),
        );
        let text_renderer = GlyphonRenderer::new(
            &mut atlas,
            &context.device,
            MultisampleState::default(),
            None,
        );
        let viewport = Viewport::new(&context.device, &cache);

        let mut fps_buffer =
            Buffer::new(&mut font_system, Metrics::new(24.0, 30.0));
        fps_buffer.set_size(&mut font_system, Some(200.0), Some(40.0));

        let mut tooltip_buffer =
            Buffer::new(&mut font_system, Metrics::new(16.0, 20.0));
        tooltip_buffer.set_size(&mut font_system, Some(200.0), Some(60.0));

        Self {
            font_system,
            swash_cache,
            atlas,
            text_renderer,
            viewport,
            fps_buffer,
            tooltip_buffer,
        }
    }

    /// Shape this frame's text and stage it for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`glyphon::PrepareError`] if the glyph atlas runs out of
    /// room.
    pub fn prepare(
        &mut self,
        context: &RenderContext,
        fps: f32,
        tooltip: Option<&Tooltip>,
    ) -> Result<(), glyphon::PrepareError> {
        let attrs = Attrs::new().family(Family::Monospace).color(TEXT_COLOR);

        self.fps_buffer.set_text(
            &mut self.font_system,
            &format!("FPS: {fps:.0}"),
            &attrs,
            Shaping::Basic,
            None,
        );
        self.fps_buffer
            .shape_until_scroll(&mut self.font_system, false);

        if let Some(tooltip) = tooltip {
            self.tooltip_buffer.set_text(
                &mut self.font_system,
                &tooltip.text,
                &attrs,
                Shaping::Basic,
                None,
            );
            self.tooltip_buffer
                .shape_until_scroll(&mut self.font_system, false);
        }

        self.viewport.update(
            &context.queue,
            Resolution {
                width: context.config.width,
                height: context.config.height,
            },
        );

        let bounds = TextBounds {
            left: 0,
            top: 0,
            right: context.config.width as i32,
            bottom: context.config.height as i32,
        };
        let mut areas = vec![TextArea {
            buffer: &self.fps_buffer,
            left: 10.0,
            top: 10.0,
            scale: 1.0,
            bounds,
            default_color: TEXT_COLOR,
            custom_glyphs: &[],
        }];
        if let Some(tooltip) = tooltip {
            areas.push(TextArea {
                buffer: &self.tooltip_buffer,
                left: tooltip.x,
                top: tooltip.y,
                scale: 1.0,
                bounds,
                default_color: TEXT_COLOR,
                custom_glyphs: &[],
            });
        }

        self.text_renderer.prepare(
            &context.device,
            &context.queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            areas,
            &mut self.swash_cache,
        )
    }

    /// Draw the staged text into the current render pass.
    ///
    /// # Errors
    ///
    /// Returns [`glyphon::RenderError`] if staged glyphs are missing
    /// from the atlas.
    pub fn render(
        &self,
        render_pass: &mut wgpu::RenderPass<'_>,
    ) -> Result<(), glyphon::RenderError> {
        self.text_renderer
            .render(&self.atlas, &self.viewport, render_pass)
    }
}
