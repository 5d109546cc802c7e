use std::time::{Duration, Instant};

/// Longest step handed to the frame update, in seconds
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Frame clock - measures the time between consecutive ticks
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the previous tick, capped at `MAX_FRAME_DELTA`
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = Self::clamp_delta(now.duration_since(self.last_tick));
        self.last_tick = now;
        delta
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    fn clamp_delta(elapsed: Duration) -> f32 {
        elapsed.as_secs_f32().min(MAX_FRAME_DELTA)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009);
        assert!(delta <= MAX_FRAME_DELTA);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        let delta = clock.tick();
        assert!(delta < 0.009);
    }

    #[test]
    fn long_stalls_are_capped() {
        assert_eq!(Clock::clamp_delta(Duration::from_secs(3)), MAX_FRAME_DELTA);
        assert!((Clock::clamp_delta(Duration::from_millis(16)) - 0.016).abs() < 1e-6);
    }
}
