use std::sync::Arc;
use wgpu::{Surface, SurfaceConfiguration};
use winit::window::Window;

use crate::blit::BlitPipeline;
use crate::buffer::PixelBuffer;
use crate::gpu::GpuContext;
use crate::session::PresentTarget;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Presents a [`PixelBuffer`] onto a window surface.
///
/// Owns every piece of GPU state: the surface, the device/queue, and the blit
/// pipeline with its texture mirror of the buffer. Setup runs once and every
/// step is fatal on failure; the error message names the failing stage so the
/// process can exit with a usable diagnostic.
pub struct SurfacePresenter {
    gpu: GpuContext,
    surface: Surface<'static>,
    blit: BlitPipeline,
}

impl SurfacePresenter {
    /// Build the full presentation stack for `window`.
    ///
    /// `buffer_width`/`buffer_height` size the texture mirror; the surface
    /// itself is configured to the window's physical size, which may differ
    /// under DPI scaling. The fullscreen triangle covers the viewport either
    /// way, so the two sizes are independent.
    pub fn new(window: Arc<Window>, buffer_width: u32, buffer_height: u32) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .map_err(|e| format!("surface creation failed: {e}"))?;

        let adapter = pollster::block_on(GpuContext::request_adapter(&instance, Some(&surface)))?;
        let gpu = pollster::block_on(GpuContext::from_adapter(&adapter))?;

        // Prefer a non-srgb surface format: the buffer holds display-referred
        // bytes already, and an srgb target would re-encode them.
        let caps = surface.get_capabilities(&adapter);
        let surface_format = caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .copied()
            .unwrap_or(caps.formats[0]);

        let surface_config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(gpu.device(), &surface_config);

        let blit = BlitPipeline::new(gpu.device(), buffer_width, buffer_height, surface_format);

        log::info!(
            "presenter ready: {}x{} buffer on {}x{} surface, format {:?}",
            buffer_width,
            buffer_height,
            size.width,
            size.height,
            surface_format
        );

        Ok(Self { gpu, surface, blit })
    }

    /// Upload the buffer, draw the fullscreen triangle, and present.
    pub fn present(&mut self, frame: &PixelBuffer) -> Result<()> {
        self.blit.upload(self.gpu.queue(), frame)?;

        let surface_texture = self
            .surface
            .get_current_texture()
            .map_err(|e| format!("surface acquire failed: {e}"))?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Present Encoder"),
            });
        self.blit.draw(&mut encoder, &view);

        self.gpu.queue().submit(Some(encoder.finish()));
        surface_texture.present();

        Ok(())
    }
}

impl PresentTarget for SurfacePresenter {
    fn dimensions(&self) -> (u32, u32) {
        self.blit.dimensions()
    }

    fn present(&mut self, frame: &PixelBuffer) -> Result<()> {
        SurfacePresenter::present(self, frame)
    }
}
