//! Generic adapters available on every animation
//!
//! - [`Derived`] maps values through a pure function
//! - [`Extended`] pads a node with idle time on either side
//! - [`WithStrategy`] puts another time strategy in front of a node

use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::duration::Duration;
use crate::error::{AnimationError, Result};
use crate::strategy::TimeStrategy;

/// An animation whose values are a pure function of another's
#[derive(Clone, Debug)]
pub struct Derived<A, F> {
    source: A,
    map: F,
}

impl<A, F> Derived<A, F> {
    pub fn new(source: A, map: F) -> Self {
        Self { source, map }
    }

    pub fn source(&self) -> &A {
        &self.source
    }
}

impl<A, F, U> Animation for Derived<A, F>
where
    A: Animation,
    F: Fn(A::Output) -> U,
{
    type Output = U;

    fn duration(&self) -> Duration {
        self.source.duration()
    }

    fn strategy(&self) -> TimeStrategy {
        self.source.strategy()
    }

    fn sample(&self, local: Duration) -> Result<U> {
        self.source.sample(local).map(&self.map)
    }

    fn same_between(&self, a: Duration, b: Duration) -> bool {
        self.source.same_between(a, b)
    }
}

/// Padding amounts for [`Extended`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendSettings {
    pub before: Duration,
    pub after: Duration,
}

/// An animation padded with idle time before and after
#[derive(Clone, Debug)]
pub struct Extended<A> {
    inner: A,
    before: Duration,
    duration: Duration,
}

impl<A: Animation> Extended<A> {
    pub fn new(inner: A, before: Duration, after: Duration) -> Result<Self> {
        for (what, padding) in [("padding before", before), ("padding after", after)] {
            if padding.is_less_than(Duration::ZERO) {
                return Err(AnimationError::NegativeDuration {
                    what,
                    duration: padding,
                });
            }
        }
        let duration = inner.duration() + before + after;
        Ok(Self {
            inner,
            before,
            duration,
        })
    }

    pub fn from_settings(inner: A, settings: ExtendSettings) -> Result<Self> {
        Self::new(inner, settings.before, settings.after)
    }
}

impl<A: Animation> Animation for Extended<A> {
    type Output = A::Output;

    fn duration(&self) -> Duration {
        self.duration
    }

    fn sample(&self, local: Duration) -> Result<A::Output> {
        self.inner.try_at(local - self.before)
    }

    fn same_between(&self, a: Duration, b: Duration) -> bool {
        self.inner.is_same_at(a - self.before, b - self.before)
    }
}

/// An animation behind an extra time strategy
///
/// The outer strategy runs first, then the inner node's own strategy.
#[derive(Clone, Debug)]
pub struct WithStrategy<A> {
    inner: A,
    strategy: TimeStrategy,
}

impl<A> WithStrategy<A> {
    pub fn new(inner: A, strategy: TimeStrategy) -> Self {
        Self { inner, strategy }
    }
}

impl<A: Animation> Animation for WithStrategy<A> {
    type Output = A::Output;

    fn duration(&self) -> Duration {
        self.inner.duration()
    }

    fn strategy(&self) -> TimeStrategy {
        self.strategy
    }

    fn sample(&self, local: Duration) -> Result<A::Output> {
        self.inner.try_at(local)
    }

    fn same_between(&self, a: Duration, b: Duration) -> bool {
        self.inner.is_same_at(a, b)
    }
}
