pub mod app;
pub mod blit;
pub mod buffer;
pub mod cli;
pub mod color;
pub mod frame;
pub mod gpu;
pub mod offscreen;
pub mod presenter;
pub mod session;

// Re-export the types most callers touch
pub use buffer::PixelBuffer;
pub use color::{channels, pack_rgb, pack_rgba, PackedColor};
pub use session::{PresentTarget, Session, SessionState};
