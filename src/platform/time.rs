//! Frame pacing

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 10;

/// Paces the loop to a maximum frame rate and measures frame times
#[derive(Debug)]
pub struct FrameClock {
    frame_budget: Duration,
    last: Option<Instant>,
    recent: VecDeque<Duration>,
}

impl FrameClock {
    pub fn new(max_fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs(1) / max_fps.max(1),
            last: None,
            recent: VecDeque::with_capacity(FPS_WINDOW),
        }
    }

    /// Sleep until the next frame boundary and return the seconds since the
    /// previous call (0 on the first call)
    pub fn tick(&mut self) -> f32 {
        let Some(last) = self.last else {
            self.last = Some(Instant::now());
            return 0.0;
        };

        let since = last.elapsed();
        if since < self.frame_budget {
            std::thread::sleep(self.frame_budget - since);
        }

        let now = Instant::now();
        let frame_time = now - last;
        self.last = Some(now);
        self.record(frame_time);
        frame_time.as_secs_f32()
    }

    fn record(&mut self, frame_time: Duration) {
        if self.recent.len() == FPS_WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(frame_time);
    }

    /// Average frame rate over the last few frames
    pub fn fps(&self) -> Option<f32> {
        let total: Duration = self.recent.iter().sum();
        if total.is_zero() {
            return None;
        }
        Some(self.recent.len() as f32 / total.as_secs_f32())
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }
}
