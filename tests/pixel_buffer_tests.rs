use pixelblit::buffer::PixelBuffer;
use pixelblit::color::{channels, pack_rgb, pack_rgba};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_create_fills_every_cell() {
    let c = pack_rgb(7, 77, 177);
    let buffer = PixelBuffer::new(224, 256, c);

    assert_eq!(buffer.pixels().len(), 224 * 256);
    assert!(buffer.pixels().iter().all(|&p| p == c));
}

#[test]
fn test_create_various_dimensions() {
    for (w, h) in [(1, 1), (1, 256), (224, 1), (224, 256), (640, 480)] {
        let buffer = PixelBuffer::new(w, h, 0);
        assert_eq!(buffer.width(), w);
        assert_eq!(buffer.height(), h);
        assert_eq!(buffer.pixels().len(), (w * h) as usize);
        assert_eq!(buffer.byte_len(), (w * h * 4) as usize);
    }
}

// ============================================================================
// Clear semantics
// ============================================================================

#[test]
fn test_clear_overwrites_regardless_of_prior_state() {
    let mut buffer = PixelBuffer::new(32, 32, pack_rgb(255, 255, 255));

    // Scribble over the buffer, then clear; no cell may survive.
    for (i, p) in buffer.pixels_mut().iter_mut().enumerate() {
        *p = i as u32;
    }

    let c = pack_rgb(0, 128, 0);
    buffer.clear(c);
    assert!(buffer.pixels().iter().all(|&p| p == c));
}

#[test]
fn test_clear_twice_equals_clear_once() {
    let c = pack_rgba(10, 20, 30, 40);
    let mut once = PixelBuffer::new(16, 8, 0);
    let mut twice = PixelBuffer::new(16, 8, 0);

    once.clear(c);
    twice.clear(c);
    twice.clear(c);
    assert_eq!(once.pixels(), twice.pixels());
}

#[test]
fn test_single_cell_buffer_clear_stays_in_bounds() {
    let mut buffer = PixelBuffer::new(1, 1, 0);
    buffer.clear(pack_rgb(9, 9, 9));

    assert_eq!(buffer.pixels(), &[pack_rgb(9, 9, 9)]);
    assert_eq!(buffer.as_bytes().len(), 4);
}

// ============================================================================
// Byte layout for texture upload
// ============================================================================

#[test]
fn test_byte_view_is_rgba_per_pixel() {
    let buffer = PixelBuffer::new(3, 1, pack_rgba(1, 2, 3, 4));
    assert_eq!(buffer.as_bytes(), &[1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4]);
}

#[test]
fn test_reference_scenario_bytes() {
    // 224x256 cleared to RGB (0, 128, 0): the upload stream must carry
    // exactly those channel bytes with full opacity.
    let mut buffer = PixelBuffer::new(224, 256, 0);
    buffer.clear(pack_rgb(0, 128, 0));

    let bytes = buffer.as_bytes();
    assert_eq!(bytes.len(), 224 * 256 * 4);
    for pixel in bytes.chunks_exact(4) {
        assert_eq!(pixel, &[0, 128, 0, 255]);
    }
}

#[test]
fn test_pack_and_channels_agree() {
    let c = pack_rgb(0, 128, 0);
    assert_eq!(channels(c), [0, 128, 0, 255]);
}
