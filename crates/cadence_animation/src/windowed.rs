//! Windowed composition
//!
//! Every child owns a window `[start, start + duration]` on the shared
//! timeline and every child is evaluated on every query. Before its window
//! a child shows its first frame; after it, its last. Windows may leave gaps
//! or overlap.

use crate::animation::Animation;
use crate::duration::Duration;
use crate::error::{AnimationError, Result};
use crate::strategy::TimeStrategy;

/// Children evaluated together, each inside its own time window
#[derive(Clone, Debug)]
pub struct Windowed<A> {
    children: Vec<A>,
    starts: Vec<Duration>,
    duration: Duration,
    strategy: TimeStrategy,
}

impl<A: Animation> Windowed<A> {
    /// Build from `(start, child)` pairs
    ///
    /// Starts must not be negative; order is free and is kept as given.
    pub fn new(windows: Vec<(Duration, A)>) -> Result<Self> {
        for (start, child) in &windows {
            if start.is_less_than(Duration::ZERO) {
                return Err(AnimationError::NegativeStart { start: *start });
            }
            if child.duration().is_less_than(Duration::ZERO) {
                return Err(AnimationError::NegativeDuration {
                    what: "windowed child duration",
                    duration: child.duration(),
                });
            }
        }

        let (starts, children): (Vec<_>, Vec<_>) = windows.into_iter().unzip();
        let duration = Duration::max_of(
            starts
                .iter()
                .zip(&children)
                .map(|(start, child)| *start + child.duration()),
        );

        tracing::debug!(children = children.len(), duration = %duration, "built windowed");

        Ok(Self {
            children,
            starts,
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

    pub fn starts(&self) -> &[Duration] {
        &self.starts
    }

    /// Per-child instants for one timeline instant
    fn child_times(&self, local: Duration) -> impl Iterator<Item = (&A, Duration)> + '_ {
        self.children.iter().zip(&self.starts).map(move |(child, start)| {
            let time = local.window_between(*start, *start + child.duration());
            (child, time)
        })
    }
}

impl<A: Animation> Animation for Windowed<A> {
    type Output = Vec<A::Output>;

    fn duration(&self) -> Duration {
        self.duration
    }

    fn strategy(&self) -> TimeStrategy {
        self.strategy
    }

    fn sample(&self, local: Duration) -> Result<Self::Output> {
        self.child_times(local)
            .map(|(child, time)| child.try_at(time))
            .collect()
    }

    fn same_between(&self, a: Duration, b: Duration) -> bool {
        self.child_times(a)
            .zip(self.child_times(b))
            .all(|((child, time_a), (_, time_b))| child.is_same_at(time_a, time_b))
    }
}
