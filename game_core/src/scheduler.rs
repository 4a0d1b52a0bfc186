//! Frame pacing
//!
//! Hosts hand frame timestamps to [`FixedTimestep`], which turns them into a whole
//! number of fixed simulation ticks. How the next frame gets scheduled is up to the
//! host's [`FrameRequester`].

/// Something that can schedule another frame callback
pub trait FrameRequester {
    type Error;

    fn request_next_frame(&self) -> Result<(), Self::Error>;
}

/// Fixed-timestep accumulator. Works in whole microseconds so tick counts don't drift.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick_us: u64,
    max_frame_us: u64,
    accumulator_us: u64,
    last_us: Option<u64>,
}

impl FixedTimestep {
    pub fn new(tick_us: u64, max_frame_us: u64) -> Self {
        Self {
            tick_us: tick_us.max(1),
            max_frame_us,
            accumulator_us: 0,
            last_us: None,
        }
    }

    pub fn from_config(config: &crate::Config) -> Self {
        Self::new(
            config.tick_micros(),
            (config.max_frame_ms as f64 * 1000.0) as u64,
        )
    }

    pub fn tick_us(&self) -> u64 {
        self.tick_us
    }

    /// Feed the timestamp of a new frame (milliseconds, any monotonic origin) and get
    /// the number of ticks to run. The first frame always runs one tick. Gaps longer
    /// than the max frame time are cut short; clocks that step backward count as zero.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let now_us = if now_ms.is_finite() && now_ms > 0.0 {
            (now_ms * 1000.0) as u64
        } else {
            0
        };

        let Some(last_us) = self.last_us.replace(now_us) else {
            return 1;
        };

        let elapsed = now_us.saturating_sub(last_us).min(self.max_frame_us);
        self.accumulator_us += elapsed;

        let ticks = self.accumulator_us / self.tick_us;
        self.accumulator_us -= ticks * self.tick_us;
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }
}
