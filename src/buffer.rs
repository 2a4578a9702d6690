use crate::color::PackedColor;

/// CPU-side framebuffer: a row-major grid of packed RGBA pixels.
///
/// Dimensions are fixed at construction; the only mutation is a full-buffer
/// clear. `pixels.len() == width * height` holds for the buffer's entire
/// lifetime.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a buffer with every cell set to `color`.
    ///
    /// Panics if either dimension is zero or the cell count overflows; a
    /// buffer with silently truncated dimensions is worse than no buffer.
    pub fn new(width: u32, height: u32, color: PackedColor) -> Self {
        assert!(width > 0 && height > 0, "pixel buffer dimensions must be positive");
        let len = (width as usize)
            .checked_mul(height as usize)
            .expect("pixel buffer dimensions overflow");

        Self {
            width,
            height,
            pixels: vec![color; len],
        }
    }

    /// Overwrite every cell with `color`.
    pub fn clear(&mut self, color: PackedColor) {
        self.pixels.fill(color);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only view of the packed pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable view for callers that draw their own content between clears.
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// The pixels as raw `r, g, b, a` bytes, ready for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Upload size in bytes (4 per pixel).
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{pack_rgb, pack_rgba};

    #[test]
    fn test_new_fills_with_initial_color() {
        let c = pack_rgb(12, 34, 56);
        let buffer = PixelBuffer::new(8, 4, c);

        assert_eq!(buffer.width(), 8);
        assert_eq!(buffer.height(), 4);
        assert_eq!(buffer.pixels().len(), 32);
        assert!(buffer.pixels().iter().all(|&p| p == c));
    }

    #[test]
    fn test_clear_overwrites_every_cell() {
        let mut buffer = PixelBuffer::new(16, 16, pack_rgb(0, 0, 0));
        let c = pack_rgb(0, 128, 0);

        buffer.clear(c);
        assert!(buffer.pixels().iter().all(|&p| p == c));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut once = PixelBuffer::new(5, 7, pack_rgb(1, 2, 3));
        let mut twice = PixelBuffer::new(5, 7, pack_rgb(1, 2, 3));
        let c = pack_rgba(9, 8, 7, 6);

        once.clear(c);
        twice.clear(c);
        twice.clear(c);
        assert_eq!(once.pixels(), twice.pixels());
    }

    #[test]
    fn test_clear_independent_of_prior_state() {
        let mut buffer = PixelBuffer::new(4, 4, pack_rgb(255, 255, 255));
        buffer.pixels_mut()[5] = pack_rgb(1, 1, 1);

        let c = pack_rgb(40, 50, 60);
        buffer.clear(c);
        assert!(buffer.pixels().iter().all(|&p| p == c));
    }

    #[test]
    fn test_single_pixel_buffer() {
        let mut buffer = PixelBuffer::new(1, 1, pack_rgb(0, 0, 0));
        buffer.clear(pack_rgb(200, 100, 50));

        assert_eq!(buffer.pixels().len(), 1);
        assert_eq!(buffer.byte_len(), 4);
        assert_eq!(buffer.as_bytes(), &[200, 100, 50, 255]);
    }

    #[test]
    fn test_as_bytes_is_rgba_order() {
        let buffer = PixelBuffer::new(2, 1, pack_rgba(1, 2, 3, 4));
        assert_eq!(buffer.as_bytes(), &[1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_zero_width_panics() {
        let _ = PixelBuffer::new(0, 10, 0);
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_zero_height_panics() {
        let _ = PixelBuffer::new(10, 0, 0);
    }
}
