//! Animated background frame cycling

use crate::consts::FRAME_DELAY_MS;

/// Steps through a looping frame sequence using accumulated elapsed time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundCycler {
    frame_count: usize,
    index: usize,
    accumulator_ms: u32,
    delay_ms: u32,
}

impl BackgroundCycler {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count,
            index: 0,
            accumulator_ms: 0,
            delay_ms: FRAME_DELAY_MS,
        }
    }

    /// Start over on a (possibly different) sequence
    pub fn reset(&mut self, frame_count: usize) {
        self.frame_count = frame_count;
        self.index = 0;
        self.accumulator_ms = 0;
    }

    /// Add elapsed time and return the frame to show.
    ///
    /// Moves at most one frame per call, once more than the delay has built
    /// up, then starts accumulating from zero again.
    pub fn advance(&mut self, elapsed_ms: u32) -> usize {
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        if self.accumulator_ms > self.delay_ms && self.frame_count > 0 {
            self.index = (self.index + 1) % self.frame_count;
            self.accumulator_ms = 0;
        }
        self.index
    }

    pub fn current(&self) -> usize {
        self.index
    }
}
