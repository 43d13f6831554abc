use std::time::{Duration, Instant};

/// Frame-rate statistics emitted by [`FpsCounter`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FpsSample {
    /// Frames per second over the sampling window.
    pub fps: f64,

    /// Average milliseconds per frame over the sampling window.
    pub ms_per_frame: f64,
}

/// Accumulates frame ticks and periodically yields an [`FpsSample`].
///
/// Samples are emitted at most once per `window` (default 250 ms, i.e. four
/// title updates per second). `tick` takes `now` as a parameter so callers
/// can feed it the frame timestamp and tests do not need to sleep.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: Duration,
    window_start: Option<Instant>,
    frames: u32,
}

impl FpsCounter {
    /// Creates a counter sampling four times per second.
    pub fn new() -> Self {
        Self::with_window(Duration::from_millis(250))
    }

    /// Creates a counter with a custom sampling window.
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            window_start: None,
            frames: 0,
        }
    }

    /// Records one frame at `now`.
    ///
    /// Returns a sample once at least one sampling window has elapsed since
    /// the previous sample (or since the first tick), then restarts the
    /// accumulation.
    pub fn tick(&mut self, now: Instant) -> Option<FpsSample> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.window {
            return None;
        }

        let fps = f64::from(self.frames) / elapsed.as_secs_f64();
        let sample = FpsSample {
            fps,
            ms_per_frame: 1000.0 / fps,
        };

        self.window_start = Some(now);
        self.frames = 0;

        Some(sample)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sample_before_the_window_elapses() {
        let mut counter = FpsCounter::new();
        let t0 = Instant::now();

        assert_eq!(counter.tick(t0), None);
        assert_eq!(counter.tick(t0 + Duration::from_millis(100)), None);
        assert_eq!(counter.tick(t0 + Duration::from_millis(200)), None);
    }

    #[test]
    fn sample_reflects_tick_count_over_elapsed_time() {
        let mut counter = FpsCounter::new();
        let t0 = Instant::now();

        // 30 frames spread over exactly half a second.
        let mut sample = None;
        for i in 1..=30u64 {
            let now = t0 + Duration::from_millis(i * 500 / 30);
            if let Some(s) = counter.tick(now) {
                sample = Some(s);
            }
        }

        // 30 frames over 500 ms is 60 fps regardless of where the window
        // boundaries fall.
        let s = sample.expect("window elapsed, sample expected");
        assert!((s.fps - 60.0).abs() < 1.0, "fps = {}", s.fps);
        assert!((s.ms_per_frame - 1000.0 / s.fps).abs() < 1e-9);
    }

    #[test]
    fn accumulation_restarts_after_a_sample() {
        let mut counter = FpsCounter::with_window(Duration::from_millis(250));
        let t0 = Instant::now();

        counter.tick(t0);
        let first = counter.tick(t0 + Duration::from_millis(250));
        assert!(first.is_some());

        // Immediately after a sample, a new window begins.
        assert_eq!(counter.tick(t0 + Duration::from_millis(300)), None);
    }
}
