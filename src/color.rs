//! Packed 32-bit RGBA colors.
//!
//! Channel order: red lives in the least significant byte, alpha in the most
//! significant one. On a little-endian host the in-memory byte sequence of a
//! packed pixel is therefore `r, g, b, a`, which is exactly the texel layout
//! of `wgpu::TextureFormat::Rgba8Unorm`. Buffer fill and texture upload must
//! agree on this order; the round-trip test in `tests/present_roundtrip.rs`
//! pins it.

/// A packed RGBA color, red in the low byte.
pub type PackedColor = u32;

/// Pack four 8-bit channels into one color value.
pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> PackedColor {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24)
}

/// Pack an opaque color (alpha fixed at 255).
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> PackedColor {
    pack_rgba(r, g, b, 255)
}

/// Unpack a color into `[r, g, b, a]` channel bytes.
pub const fn channels(color: PackedColor) -> [u8; 4] {
    color.to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_rgb_is_opaque() {
        let c = pack_rgb(0, 128, 0);
        assert_eq!(channels(c), [0, 128, 0, 255]);
    }

    #[test]
    fn test_pack_unpack_round_trip() {
        let cases = [
            (0u8, 0u8, 0u8, 0u8),
            (255, 255, 255, 255),
            (1, 2, 3, 4),
            (0, 128, 0, 255),
            (255, 0, 0, 128),
        ];

        for (r, g, b, a) in cases {
            assert_eq!(channels(pack_rgba(r, g, b, a)), [r, g, b, a]);
        }
    }

    #[test]
    fn test_channel_positions() {
        assert_eq!(pack_rgba(0xff, 0, 0, 0), 0x0000_00ff);
        assert_eq!(pack_rgba(0, 0xff, 0, 0), 0x0000_ff00);
        assert_eq!(pack_rgba(0, 0, 0xff, 0), 0x00ff_0000);
        assert_eq!(pack_rgba(0, 0, 0, 0xff), 0xff00_0000);
    }

    #[test]
    fn test_byte_layout_matches_rgba8() {
        // The little-endian byte view of a packed pixel must read r, g, b, a.
        let c = pack_rgba(10, 20, 30, 40);
        assert_eq!(c.to_le_bytes(), [10, 20, 30, 40]);
    }
}
