use std::time::Instant;

const FPS_LOG_INTERVAL: f32 = 1.0;

/// Timing for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameTick {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

/// Frame bookkeeping: numbers each frame, measures deltas, and keeps a
/// once-per-second FPS average for the log.
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
    fps_timer: f32,
    fps_frames: u32,
    fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
            fps_timer: 0.0,
            fps_frames: 0,
            fps: 0.0,
        }
    }

    /// Advance to the next frame. Returns true when a fresh FPS average is
    /// available (once a second).
    pub fn tick(&mut self) -> (FrameTick, bool) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let tick = FrameTick {
            number: self.frame_number,
            time,
            delta,
        };

        self.frame_number += 1;
        self.last_frame_time = now;

        self.fps_frames += 1;
        self.fps_timer += delta;
        let fps_updated = if self.fps_timer >= FPS_LOG_INTERVAL {
            self.fps = self.fps_frames as f32 / self.fps_timer;
            self.fps_frames = 0;
            self.fps_timer = 0.0;
            true
        } else {
            false
        };

        (tick, fps_updated)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_are_numbered_from_zero() {
        let mut clock = FrameClock::new();
        let (first, _) = clock.tick();
        let (second, _) = clock.tick();

        assert_eq!(first.number, 0);
        assert_eq!(second.number, 1);
        assert_eq!(clock.frame_number(), 2);
    }

    #[test]
    fn test_time_and_delta_are_non_negative() {
        let mut clock = FrameClock::new();
        for _ in 0..3 {
            let (tick, _) = clock.tick();
            assert!(tick.time >= 0.0);
            assert!(tick.delta >= 0.0);
        }
    }

    #[test]
    fn test_time_is_monotonic() {
        let mut clock = FrameClock::new();
        let (a, _) = clock.tick();
        let (b, _) = clock.tick();
        assert!(b.time >= a.time);
    }
}
