//! Platform abstraction layer
//!
//! Frame pacing for the main loop. The loop calls [`Pacer::wait`] once at
//! the top of every tick and gets back the milliseconds since the last call.

use std::thread;
use std::time::{Duration, Instant};

/// Tick-rate limiter
pub trait Pacer {
    /// Block until the next tick is due; returns elapsed milliseconds since
    /// the previous call
    fn wait(&mut self) -> u32;
}

/// Sleeps so the loop runs no faster than the target rate
#[derive(Debug)]
pub struct FrameGovernor {
    frame: Duration,
    last: Option<Instant>,
}

impl FrameGovernor {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last: None,
        }
    }
}

impl Pacer for FrameGovernor {
    fn wait(&mut self) -> u32 {
        let Some(last) = self.last else {
            self.last = Some(Instant::now());
            return 0;
        };

        let spent = last.elapsed();
        if spent < self.frame {
            thread::sleep(self.frame - spent);
        }

        let now = Instant::now();
        self.last = Some(now);
        u32::try_from(now.duration_since(last).as_millis()).unwrap_or(u32::MAX)
    }
}

/// Reports a constant frame time without sleeping (headless runs and tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    pub frame_ms: u32,
}

impl FixedStep {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_ms: 1000 / fps.max(1),
        }
    }
}

impl Pacer for FixedStep {
    fn wait(&mut self) -> u32 {
        self.frame_ms
    }
}
