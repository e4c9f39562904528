//! Fixed-rate tick source
//!
//! Turns host frame times into whole simulation ticks. The host timer stays
//! outside the core; this only does the accounting.

use crate::consts::MAX_SUBSTEPS;

#[derive(Debug, Clone)]
pub struct FixedStep {
    step_ms: f64,
    accumulator: f64,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(step_ms: f64) -> Self {
        Self {
            step_ms,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Add elapsed host time and return how many ticks are due.
    ///
    /// Backlog beyond `max_substeps` is discarded rather than replayed.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.accumulator += elapsed_ms;
        }

        let mut due = 0;
        while self.accumulator >= self.step_ms && due < self.max_substeps {
            self.accumulator -= self.step_ms;
            due += 1;
        }
        if due == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step_ms);
        }
        due
    }

    /// Drop any partial or pending time (used on resume)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
