//! Sleep policy
//!
//! Picks how long the poller waits between status calls. The random source
//! is passed in so the choice can be reproduced in tests.

use rand::Rng;
use std::time::Duration;

/// Uniform choice over `min, min + step, ...` strictly below `max`, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepPolicy {
    min_secs: u64,
    max_secs: u64,
    step_secs: u64,
}

impl SleepPolicy {
    /// Creates a policy over the half-open range `[min_secs, max_secs)`
    #[allow(dead_code)]
    pub fn new(min_secs: u64, max_secs: u64, step_secs: u64) -> anyhow::Result<Self> {
        if step_secs == 0 {
            anyhow::bail!("sleep step must be greater than 0");
        }

        if min_secs >= max_secs {
            anyhow::bail!(
                "sleep range is empty: [{}, {}) seconds",
                min_secs,
                max_secs
            );
        }

        Ok(Self {
            min_secs,
            max_secs,
            step_secs,
        })
    }

    /// Number of distinct delays this policy can produce
    pub fn choices(&self) -> u64 {
        (self.max_secs - self.min_secs).div_ceil(self.step_secs)
    }

    /// Draws the next delay
    pub fn next_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let index = rng.gen_range(0..self.choices());
        Duration::from_secs(self.min_secs + index * self.step_secs)
    }
}

impl Default for SleepPolicy {
    /// Even seconds from 4 up to 28
    fn default() -> Self {
        Self {
            min_secs: 4,
            max_secs: 30,
            step_secs: 2,
        }
    }
}
