use crate::buffer::PixelBuffer;
use crate::color::PackedColor;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Something a frame can be presented to.
///
/// The one seam between the frame loop and the GPU: `SurfacePresenter` is the
/// real implementation, tests drive the loop against a mock.
pub trait PresentTarget {
    /// Pixel dimensions the target expects frames in.
    fn dimensions(&self) -> (u32, u32);

    /// Display the buffer's current contents.
    fn present(&mut self, frame: &PixelBuffer) -> Result<()>;
}

/// Lifecycle of the presentation loop.
///
/// Two states only: a session starts `Open` and ends `Closed`. There is no
/// pause and no reopen; `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Closed,
}

/// Owns the pixel buffer and runs the per-frame step: clear, then present.
///
/// The clear-to-constant is the placeholder frame mutation; anything drawing
/// real content writes into [`Session::buffer_mut`] between `advance` calls
/// without the presenter noticing a difference.
pub struct Session {
    buffer: PixelBuffer,
    clear_color: PackedColor,
    state: SessionState,
    frames_presented: u64,
}

impl Session {
    pub fn new(width: u32, height: u32, clear_color: PackedColor) -> Self {
        Self {
            buffer: PixelBuffer::new(width, height, clear_color),
            clear_color,
            state: SessionState::Open,
            frames_presented: 0,
        }
    }

    /// Run one loop iteration: clear the buffer and present it.
    ///
    /// Returns `Ok(true)` if a frame was presented, `Ok(false)` if the
    /// session is closed and nothing happened. A present error is returned
    /// as-is; the caller decides whether it is fatal (it isn't, per frame).
    pub fn advance(&mut self, target: &mut dyn PresentTarget) -> Result<bool> {
        if self.state == SessionState::Closed {
            return Ok(false);
        }

        self.buffer.clear(self.clear_color);
        target.present(&self.buffer)?;
        self.frames_presented += 1;
        Ok(true)
    }

    /// Observe a close request. Idempotent; the state machine only moves
    /// forward.
    pub fn close(&mut self) {
        self.state = SessionState::Closed;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }
}
