//! Constant animations

use crate::animation::Animation;
use crate::duration::Duration;
use crate::error::Result;
use crate::strategy::TimeStrategy;

/// An animation that holds one value forever
#[derive(Clone, Debug)]
pub struct Constant<T> {
    value: T,
    duration: Duration,
    strategy: TimeStrategy,
}

impl<T: Clone> Constant<T> {
    /// A zero-length constant
    pub fn new(value: T) -> Self {
        Self {
            value,
            duration: Duration::ZERO,
            strategy: TimeStrategy::Clamp,
        }
    }

    /// Give the constant a length, e.g. to hold a pose inside a sequence
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn time_strategy(mut self, strategy: TimeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Animation for Constant<T> {
    type Output = T;

    fn duration(&self) -> Duration {
        self.duration
    }

    fn strategy(&self) -> TimeStrategy {
        self.strategy
    }

    fn sample(&self, _local: Duration) -> Result<T> {
        Ok(self.value.clone())
    }

    fn same_between(&self, _a: Duration, _b: Duration) -> bool {
        true
    }
}
