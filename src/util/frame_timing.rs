use web_time::{Duration, Instant};

/// Frame timing: per-frame delta seconds with FPS smoothing and an
/// optional frame limiter.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Delta of the most recent frame, in seconds
    delta_seconds: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            delta_seconds: 0.0,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Returns true if enough time has passed to render another frame.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Call once at the start of each frame. Returns the delta since the
    /// previous call in seconds, suitable for
    /// [`PlayerController::update`](crate::player::PlayerController::update).
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.delta_seconds = elapsed.as_secs_f32();

        if self.delta_seconds > 0.0 {
            let instant_fps = 1.0 / self.delta_seconds;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.delta_seconds
    }

    /// Delta of the most recent frame, in seconds.
    #[must_use]
    pub fn delta_seconds(&self) -> f32 {
        self.delta_seconds
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
