//! Evenly spaced evaluation times.

use osc_core::{Real, linspace};

#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    t_max: Real,
    times: Vec<Real>,
}

impl TimeGrid {
    pub const DEFAULT_SAMPLES: usize = 600;

    /// `samples` points covering `[0, t_max]`, both ends included.
    pub fn new(t_max: Real, samples: usize) -> Self {
        Self {
            t_max,
            times: linspace(0.0, t_max, samples),
        }
    }

    pub fn with_default_samples(t_max: Real) -> Self {
        Self::new(t_max, Self::DEFAULT_SAMPLES)
    }

    pub fn t_max(&self) -> Real {
        self.t_max
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[Real] {
        &self.times
    }

    /// Grid for a new duration at the same resolution.
    pub fn resized(&self, t_max: Real) -> Self {
        Self::new(t_max, self.len())
    }
}
