//! Nullable random: scripted draws.

use idkit_verification::RandomSource;

/// A deterministic random source for testing.
///
/// Returns pre-configured values in order, cycling when exhausted.
pub struct NullRandom {
    outputs: Vec<f64>,
    index: usize,
}

impl NullRandom {
    /// Create with a sequence of draws. An empty sequence always yields `0.0`.
    pub fn new(outputs: Vec<f64>) -> Self {
        Self { outputs, index: 0 }
    }

    /// Create with a single value that will be returned for every draw.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for NullRandom {
    fn next_f64(&mut self) -> f64 {
        let value = if self.outputs.is_empty() {
            0.0
        } else {
            self.outputs[self.index % self.outputs.len()]
        };
        self.index += 1;
        value
    }
}
