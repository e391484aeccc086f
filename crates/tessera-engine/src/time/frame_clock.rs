use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f64,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// A snapshot taken now with a chosen delta, for stepping a program at a
    /// fixed rate.
    pub fn fixed(dt: f64, frame_index: u64) -> Self {
        Self { dt, now: Instant::now(), frame_index }
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so a stall (debugger, suspended host) does not hand
/// the program a huge step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps of 0.1 ms and 250 ms.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self { last: Instant::now(), frame_index: 0, dt_min, dt_max }
    }

    /// Resets the clock baseline.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime { dt: dt.as_secs_f64(), now, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
