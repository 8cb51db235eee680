//! Parallel composition
//!
//! All children share one timeline and are sampled at the same instant. The
//! value is every child's value, in the order the children were given.

use crate::animation::Animation;
use crate::duration::Duration;
use crate::error::{AnimationError, Result};
use crate::strategy::TimeStrategy;

/// Children played at the same time
#[derive(Clone, Debug)]
pub struct Parallel<A> {
    children: Vec<A>,
    duration: Duration,
    strategy: TimeStrategy,
}

impl<A: Animation> Parallel<A> {
    pub fn new(children: Vec<A>) -> Result<Self> {
        if let Some(child) = children
            .iter()
            .find(|child| child.duration().is_less_than(Duration::ZERO))
        {
            return Err(AnimationError::NegativeDuration {
                what: "parallel child duration",
                duration: child.duration(),
            });
        }

        let duration = Duration::max_of(children.iter().map(Animation::duration));
        tracing::debug!(children = children.len(), duration = %duration, "built parallel");

        Ok(Self {
            children,
            duration,
            strategy: TimeStrategy::Clamp,
        })
    }

    pub fn time_strategy(mut self, strategy: TimeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn children(&self) -> &[A] {
        &self.children
    }
}

impl<A: Animation> Animation for Parallel<A> {
    type Output = Vec<A::Output>;

    fn duration(&self) -> Duration {
        self.duration
    }

    fn strategy(&self) -> TimeStrategy {
        self.strategy
    }

    fn sample(&self, local: Duration) -> Result<Self::Output> {
        self.children.iter().map(|child| child.try_at(local)).collect()
    }

    fn same_between(&self, a: Duration, b: Duration) -> bool {
        self.children.iter().all(|child| child.is_same_at(a, b))
    }
}
