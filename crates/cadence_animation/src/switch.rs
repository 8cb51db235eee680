//! Switch composition
//!
//! A switch holds a table of `(start, child)` entries sorted by start. At
//! any instant exactly one child is active: the last one whose start is at
//! or before the instant. It is sampled at the instant minus its start.

use crate::animation::Animation;
use crate::duration::Duration;
use crate::error::{AnimationError, Result};
use crate::strategy::TimeStrategy;

/// Exactly one child active at a time, chosen by start instant
#[derive(Clone, Debug)]
pub struct Switch<A> {
    starts: Vec<Duration>,
    children: Vec<A>,
    duration: Duration,
    strategy: TimeStrategy,
}

impl<A: Animation> Switch<A> {
    /// Build from `(start, child)` entries sorted by start
    ///
    /// The switch lasts until the last child finishes.
    pub fn new(entries: Vec<(Duration, A)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(AnimationError::EmptyChildren {
                combinator: "switch",
            });
        }
        for (_, child) in &entries {
            let duration = child.duration();
            if duration.is_less_than(Duration::ZERO) {
                return Err(AnimationError::NegativeDuration {
                    what: "switch child duration",
                    duration,
                });
            }
        }
        for pair in entries.windows(2) {
            let (previous, next) = (pair[0].0, pair[1].0);
            if next.is_less_than(previous) {
                return Err(AnimationError::UnsortedStarts { previous, next });
            }
        }

        let (starts, children): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
        let last = children.len() - 1;
        let duration = starts[last] + children[last].duration();

        tracing::debug!(children = children.len(), duration = %duration, "built switch");
        if starts[0].is_greater_than(Duration::ZERO) {
            tracing::warn!(
                first_start = %starts[0],
                "switch starts after zero; earlier instants sample the first child early"
            );
        }

        Ok(Self {
            starts,
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

    /// Index of the child active at `local`
    pub fn active_index(&self, local: Duration) -> usize {
        self.starts
            .partition_point(|start| !start.is_greater_than(local))
            .saturating_sub(1)
    }

    fn locate(&self, local: Duration) -> (usize, Duration) {
        let index = self.active_index(local);
        (index, local - self.starts[index])
    }
}

impl<A: Animation> Animation for Switch<A> {
    type Output = A::Output;

    fn duration(&self) -> Duration {
        self.duration
    }

    fn strategy(&self) -> TimeStrategy {
        self.strategy
    }

    fn sample(&self, local: Duration) -> Result<A::Output> {
        if local.is_less_than(self.starts[0]) {
            tracing::trace!(
                time = %local,
                first_start = %self.starts[0],
                "switch queried before its first start"
            );
        }
        let (index, child_time) = self.locate(local);
        self.children[index].try_at(child_time)
    }

    fn same_between(&self, a: Duration, b: Duration) -> bool {
        let (index_a, time_a) = self.locate(a);
        let (index_b, time_b) = self.locate(b);
        index_a == index_b && self.children[index_a].is_same_at(time_a, time_b)
    }
}
