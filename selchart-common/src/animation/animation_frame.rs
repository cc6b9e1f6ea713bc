use std::time::{Duration, Instant};

/// The clock an animated value is sampled against.
///
/// Callers produce one per rendered frame and hand the same frame to every update and
/// paint call of that frame, so all values are sampled at one consistent instant.
#[derive(PartialEq, Debug, Clone)]
pub struct AnimationFrame {
    pub time: Instant,
    pub frame_count: u64,
}

impl AnimationFrame {
    pub fn now(frame_count: u64) -> Self {
        Self {
            time: Instant::now(),
            frame_count,
        }
    }

    /// The frame that follows this one after `elapsed`.
    pub fn advance(&self, elapsed: Duration) -> Self {
        Self {
            time: self.time + elapsed,
            frame_count: self.frame_count + 1,
        }
    }
}
