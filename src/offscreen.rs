use wgpu::{Buffer, Texture, TextureView};

use crate::blit::BlitPipeline;
use crate::buffer::PixelBuffer;
use crate::gpu::GpuContext;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// The presentation path aimed at an offscreen target instead of a window.
///
/// Runs the exact same blit pipeline as [`crate::presenter::SurfacePresenter`]
/// but renders into an `Rgba8Unorm` texture and reads the result back through
/// a staging buffer. This is what makes the upload-draw-sample path testable
/// without a display.
pub struct OffscreenBlit {
    gpu: GpuContext,
    blit: BlitPipeline,
    target: Texture,
    target_view: TextureView,
    staging: Buffer,
    width: u32,
    height: u32,
    padded_bytes_per_row: u32,
}

impl OffscreenBlit {
    pub fn new(gpu: GpuContext, width: u32, height: u32) -> Self {
        let blit = BlitPipeline::new(gpu.device(), width, height, wgpu::TextureFormat::Rgba8Unorm);

        let target = gpu.device().create_texture(&wgpu::TextureDescriptor {
            label: Some("Offscreen Target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let target_view = target.create_view(&wgpu::TextureViewDescriptor::default());

        // Texture-to-buffer copies need 256-byte-aligned rows; the padding is
        // stripped again after readback.
        let unpadded_bytes_per_row = 4 * width;
        let padded_bytes_per_row = unpadded_bytes_per_row
            .div_ceil(wgpu::COPY_BYTES_PER_ROW_ALIGNMENT)
            * wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;

        let staging = gpu.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("Readback Staging Buffer"),
            size: (padded_bytes_per_row * height) as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        Self {
            gpu,
            blit,
            target,
            target_view,
            staging,
            width,
            height,
            padded_bytes_per_row,
        }
    }

    /// Upload the buffer, draw it, and read the rendered texels back.
    ///
    /// Returns tightly packed `r, g, b, a` bytes, row-major, one row per
    /// buffer row. Blocks until the GPU finishes.
    pub fn render(&self, frame: &PixelBuffer) -> Result<Vec<u8>> {
        self.blit.upload(self.gpu.queue(), frame)?;

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Offscreen Encoder"),
            });
        self.blit.draw(&mut encoder, &self.target_view);

        encoder.copy_texture_to_buffer(
            self.target.as_image_copy(),
            wgpu::TexelCopyBufferInfo {
                buffer: &self.staging,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(self.padded_bytes_per_row),
                    rows_per_image: Some(self.height),
                },
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );

        self.gpu.queue().submit(Some(encoder.finish()));

        let padded = self.gpu.read_buffer_sync(&self.staging)?;

        let row_bytes = (4 * self.width) as usize;
        let mut pixels = Vec::with_capacity(row_bytes * self.height as usize);
        for row in 0..self.height as usize {
            let start = row * self.padded_bytes_per_row as usize;
            pixels.extend_from_slice(&padded[start..start + row_bytes]);
        }

        Ok(pixels)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
