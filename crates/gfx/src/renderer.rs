use std::sync::Arc;

use egui::{ClippedPrimitive, Context as EguiContext, TexturesDelta, viewport::ViewportId};
use egui_wgpu::{
    Renderer as EguiWgpuRenderer, ScreenDescriptor,
    wgpu::{
        self, CompositeAlphaMode, Device, Queue, Surface, SurfaceConfiguration, SurfaceError,
        SurfaceTexture, TextureFormat,
    },
};
use egui_winit::State as EguiWinitState;
use winit::{dpi::PhysicalSize, event::WindowEvent, window::Window};

const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.08,
    g: 0.08,
    b: 0.09,
    a: 1.0,
};

/// Prefer an sRGB format so egui's colours come out as designed.
pub(crate) fn preferred_format(formats: &[TextureFormat]) -> Option<TextureFormat> {
    formats
        .iter()
        .copied()
        .find(TextureFormat::is_srgb)
        .or_else(|| formats.first().copied())
}

/// Surface configuration for a window of `size`. A minimized window reports
/// zero, which wgpu refuses, so each side is at least one pixel.
pub(crate) fn surface_config(
    size: PhysicalSize<u32>,
    format: TextureFormat,
    alpha_mode: CompositeAlphaMode,
) -> SurfaceConfiguration {
    SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode,
        view_formats: Vec::new(),
        desired_maximum_frame_latency: 2,
    }
}

/// egui on top of a wgpu surface for one winit window.
pub struct Renderer {
    egui_context: EguiContext,
    egui_state: EguiWinitState,
    egui_renderer: EguiWgpuRenderer,
    surface: Surface<'static>,
    device: Device,
    queue: Queue,
    surface_config: SurfaceConfiguration,
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Self {
        let egui_context = EguiContext::default();
        let egui_state = EguiWinitState::new(
            egui_context.clone(),
            ViewportId::ROOT,
            &*window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(Arc::clone(&window))
            .expect("surface");
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .expect("no suitable adapter");
        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("typed-input device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: wgpu::MemoryHints::MemoryUsage,
            trace: wgpu::Trace::default(),
        }))
        .expect("device");

        let caps = surface.get_capabilities(&adapter);
        let format = preferred_format(&caps.formats).expect("surface supports no formats");
        log::debug!(target: "gfx.typed_input", "surface format {format:?}");
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(CompositeAlphaMode::Auto);

        let surface_config = surface_config(window.inner_size(), format, alpha_mode);
        surface.configure(&device, &surface_config);

        Self {
            egui_renderer: EguiWgpuRenderer::new(&device, format, None, 1, true),
            egui_context,
            egui_state,
            surface,
            device,
            queue,
            surface_config,
        }
    }

    pub fn context(&self) -> &EguiContext {
        &self.egui_context
    }

    /// Feed a window event to egui. Returns true when egui wants a repaint.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).repaint
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.surface_config.width = new_size.width.max(1);
        self.surface_config.height = new_size.height.max(1);
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Build one egui frame with `build_ui` and present it.
    pub fn render<F: FnOnce(&EguiContext)>(&mut self, window: &Window, build_ui: F) {
        let Some(frame) = self.acquire() else {
            return;
        };
        let (primitives, textures) = self.run_ui(window, build_ui);
        self.paint(&frame, &primitives, textures);
        frame.present();
    }

    fn acquire(&mut self) -> Option<SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(frame) => Some(frame),
            Err(SurfaceError::Lost) => {
                self.surface.configure(&self.device, &self.surface_config);
                None
            }
            // minimized or moved between displays
            Err(SurfaceError::Outdated) => None,
            Err(err) => {
                log::warn!(target: "platform", "surface error: {err:?}");
                None
            }
        }
    }

    fn run_ui<F: FnOnce(&EguiContext)>(
        &mut self,
        window: &Window,
        build_ui: F,
    ) -> (Vec<ClippedPrimitive>, TexturesDelta) {
        let raw_input = self.egui_state.take_egui_input(window);
        self.egui_context.begin_pass(raw_input);
        build_ui(&self.egui_context);
        let output = self.egui_context.end_pass();

        self.egui_state
            .handle_platform_output(window, output.platform_output);
        let primitives = self
            .egui_context
            .tessellate(output.shapes, self.egui_context.pixels_per_point());
        (primitives, output.textures_delta)
    }

    fn paint(&mut self, frame: &SurfaceTexture, primitives: &[ClippedPrimitive], textures: TexturesDelta) {
        for (id, delta) in &textures.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        let screen = ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: self.egui_context.pixels_per_point(),
        };
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("typed-input frame"),
            });
        self.egui_renderer
            .update_buffers(&self.device, &self.queue, &mut encoder, primitives, &screen);

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("egui"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(BACKGROUND),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        self.egui_renderer
            .render(&mut pass.forget_lifetime(), primitives, &screen);

        for id in &textures.free {
            self.egui_renderer.free_texture(id);
        }
        self.queue.submit(Some(encoder.finish()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_formats_win() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(preferred_format(&formats), Some(TextureFormat::Bgra8UnormSrgb));
        assert_eq!(
            preferred_format(&[TextureFormat::Rgba16Float]),
            Some(TextureFormat::Rgba16Float)
        );
        assert_eq!(preferred_format(&[]), None);
    }

    #[test]
    fn minimized_windows_get_a_one_pixel_surface() {
        let config = surface_config(
            PhysicalSize::new(0, 0),
            TextureFormat::Bgra8UnormSrgb,
            CompositeAlphaMode::Opaque,
        );
        assert_eq!((config.width, config.height), (1, 1));

        let config = surface_config(
            PhysicalSize::new(800, 600),
            TextureFormat::Bgra8UnormSrgb,
            CompositeAlphaMode::Opaque,
        );
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.usage, wgpu::TextureUsages::RENDER_ATTACHMENT);
    }
}
