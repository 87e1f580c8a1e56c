//! Bounded pointer sample history

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Number of samples retained for the velocity estimate
pub const HISTORY_CAPACITY: usize = 4;

/// One observed window position during a drag
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    pub position: Vec2,
    /// Observation time (ms)
    pub timestamp_ms: f64,
}

impl MotionSample {
    pub fn new(position: Vec2, timestamp_ms: f64) -> Self {
        Self {
            position,
            timestamp_ms,
        }
    }
}

/// Sliding window over the most recent [`HISTORY_CAPACITY`] samples
#[derive(Clone, Debug)]
pub struct SampleHistory {
    samples: VecDeque<MotionSample>,
}

impl Default for SampleHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append a sample, evicting the oldest when full
    pub fn push(&mut self, sample: MotionSample) {
        if self.samples.len() == HISTORY_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest retained sample
    pub fn oldest(&self) -> Option<&MotionSample> {
        self.samples.front()
    }

    /// Most recent sample
    pub fn newest(&self) -> Option<&MotionSample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MotionSample> {
        self.samples.iter()
    }
}
