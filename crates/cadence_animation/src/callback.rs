//! Animations backed by a plain function of time
//!
//! [`Callback`] is the escape hatch for anything the built-in nodes don't
//! cover: physics curves, noise, procedural paths. The function receives
//! the strategy-remapped instant and must be pure.

use std::fmt;
use std::sync::Arc;

use crate::animation::Animation;
use crate::duration::Duration;
use crate::error::Result;
use crate::strategy::TimeStrategy;

/// Same-value predicate over two remapped instants
pub type SamePredicate = Arc<dyn Fn(Duration, Duration) -> bool + Send + Sync>;

/// An animation computed by a pure function of time
pub struct Callback<F> {
    eval: F,
    duration: Duration,
    strategy: TimeStrategy,
    same: Option<SamePredicate>,
}

/// Wrap a pure function of time as an animation
pub fn callback<F, T>(duration: Duration, eval: F) -> Callback<F>
where
    F: Fn(Duration) -> T,
{
    Callback::new(duration, eval)
}

impl<F> Callback<F> {
    pub fn new(duration: Duration, eval: F) -> Self {
        Self {
            eval,
            duration,
            strategy: TimeStrategy::Clamp,
            same: None,
        }
    }

    pub fn time_strategy(mut self, strategy: TimeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Declare extra instant pairs that produce equal values
    ///
    /// Without a predicate only literally equal instants count as same.
    pub fn same_when<P>(mut self, predicate: P) -> Self
    where
        P: Fn(Duration, Duration) -> bool + Send + Sync + 'static,
    {
        self.same = Some(Arc::new(predicate));
        self
    }
}

impl<F, T> Animation for Callback<F>
where
    F: Fn(Duration) -> T,
{
    type Output = T;

    fn duration(&self) -> Duration {
        self.duration
    }

    fn strategy(&self) -> TimeStrategy {
        self.strategy
    }

    fn sample(&self, local: Duration) -> Result<T> {
        Ok((self.eval)(local))
    }

    fn same_between(&self, a: Duration, b: Duration) -> bool {
        self.same.as_ref().is_some_and(|same| same(a, b))
    }
}

impl<F: Clone> Clone for Callback<F> {
    fn clone(&self) -> Self {
        Self {
            eval: self.eval.clone(),
            duration: self.duration,
            strategy: self.strategy,
            same: self.same.clone(),
        }
    }
}

impl<F> fmt::Debug for Callback<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("duration", &self.duration)
            .field("strategy", &self.strategy)
            .field("has_same_predicate", &self.same.is_some())
            .finish_non_exhaustive()
    }
}
