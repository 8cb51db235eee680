//! Sequential composition
//!
//! Children play back-to-back. Each child owns the half-open window
//! `[start, start + duration)` on the sequence timeline; the last child also
//! owns the end instant, and any instant past the end shows the last child's
//! final frame.

use crate::animation::Animation;
use crate::duration::Duration;
use crate::error::{AnimationError, Result};
use crate::strategy::TimeStrategy;

/// Children played one after another
#[derive(Clone, Debug)]
pub struct Sequence<A> {
    children: Vec<A>,
    /// Cumulative end offset of each child
    ends: Vec<Duration>,
    strategy: TimeStrategy,
}

impl<A: Animation> Sequence<A> {
    /// Build a sequence; at least one child is required
    pub fn new(children: Vec<A>) -> Result<Self> {
        if children.is_empty() {
            return Err(AnimationError::EmptyChildren {
                combinator: "sequence",
            });
        }

        let mut ends = Vec::with_capacity(children.len());
        let mut offset = Duration::ZERO;
        for child in &children {
            let duration = child.duration();
            if duration.is_less_than(Duration::ZERO) {
                return Err(AnimationError::NegativeDuration {
                    what: "sequence child duration",
                    duration,
                });
            }
            offset += duration;
            ends.push(offset);
        }

        tracing::debug!(children = children.len(), duration = %offset, "built sequence");

        Ok(Self {
            children,
            ends,
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

    /// Start offset of child `index`
    pub fn start_of(&self, index: usize) -> Duration {
        match index {
            0 => Duration::ZERO,
            i => self.ends[i - 1],
        }
    }

    /// Active child and its local instant
    fn locate(&self, local: Duration) -> (usize, Duration) {
        let index = self.ends.partition_point(|end| !end.is_greater_than(local));
        if index < self.children.len() {
            (index, local - self.start_of(index))
        } else {
            let last = self.children.len() - 1;
            (last, self.children[last].duration())
        }
    }
}

impl<A: Animation> Animation for Sequence<A> {
    type Output = A::Output;

    fn duration(&self) -> Duration {
        self.ends.last().copied().unwrap_or(Duration::ZERO)
    }

    fn strategy(&self) -> TimeStrategy {
        self.strategy
    }

    fn sample(&self, local: Duration) -> Result<A::Output> {
        let (index, child_time) = self.locate(local);
        self.children[index].try_at(child_time)
    }

    fn same_between(&self, a: Duration, b: Duration) -> bool {
        let (index_a, time_a) = self.locate(a);
        let (index_b, time_b) = self.locate(b);
        index_a == index_b && self.children[index_a].is_same_at(time_a, time_b)
    }
}
