// cli.rs - Command-line interface configuration
use anyhow::{ensure, Context, Result};
use clap::Parser;

use crate::color::{pack_rgb, PackedColor};

#[derive(Parser, Debug, Clone)]
#[command(name = "pixelblit")]
#[command(about = "Presents a CPU pixel buffer through a fullscreen-triangle blit", long_about = None)]
pub struct Cli {
    /// Pixel buffer and window width
    #[arg(long, default_value_t = 224)]
    pub width: u32,

    /// Pixel buffer and window height
    #[arg(long, default_value_t = 256)]
    pub height: u32,

    /// Window title
    #[arg(long, default_value = "pixelblit")]
    pub title: String,

    /// Per-frame clear color as RRGGBB hex
    #[arg(long, default_value = "008000")]
    pub color: String,
}

impl Cli {
    pub fn clear_color(&self) -> Result<PackedColor> {
        parse_hex_color(&self.color)
    }
}

/// Parse an `RRGGBB` hex string (leading `#` allowed) into a packed color.
pub fn parse_hex_color(input: &str) -> Result<PackedColor> {
    let hex = input.trim_start_matches('#');
    ensure!(
        hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        "expected RRGGBB hex color, got {input:?}"
    );

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).with_context(|| format!("invalid hex color {input:?}"))
    };

    Ok(pack_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
