//! The `Animation` trait
//!
//! An animation is a pure function from an instant to a value, with a
//! declared duration and a time-transform strategy. Every node factors
//! evaluation the same way: remap the instant with its strategy, then run
//! its own logic on the remapped instant.
//!
//! Trees are built once and queried any number of times, in any order.
//! Nothing here holds interior mutability, so a finished tree can be shared
//! across threads and sampled concurrently.
//!
//! # Example
//!
//! ```rust
//! use cadence_animation::{Animation, Duration, Tween};
//!
//! let fade = Tween::new(0.0_f32, 1.0, Duration::frames(60));
//! let percent = fade.derive(|v| (v * 100.0).round() as i32);
//!
//! assert_eq!(percent.at(Duration::frames(30)), 50);
//! assert_eq!(percent.at(Duration::frames(600)), 100);
//! ```

use std::sync::Arc;

use crate::derived::{Derived, Extended, WithStrategy};
use crate::duration::Duration;
use crate::error::Result;
use crate::strategy::TimeStrategy;

/// A seekable, time-indexed value
pub trait Animation {
    /// The value produced at each instant
    type Output;

    /// Declared length of this animation
    fn duration(&self) -> Duration;

    /// How incoming instants are remapped before `sample`
    fn strategy(&self) -> TimeStrategy {
        TimeStrategy::Clamp
    }

    /// Evaluate at an instant already remapped by [`Animation::strategy`]
    fn sample(&self, local: Duration) -> Result<Self::Output>;

    /// Node-specific same-value cases, on remapped instants
    ///
    /// Must only return `true` when the two instants certainly produce equal
    /// values. The literal-equality case is handled by
    /// [`Animation::is_same_at`] and need not be repeated here.
    fn same_between(&self, _a: Duration, _b: Duration) -> bool {
        false
    }

    /// Remap an instant with this node's strategy
    fn local_time(&self, time: Duration) -> Result<Duration> {
        self.strategy().apply(time, self.duration())
    }

    /// Evaluate at `time`, propagating strategy failures from any node
    fn try_at(&self, time: Duration) -> Result<Self::Output> {
        self.sample(self.local_time(time)?)
    }

    /// Evaluate at `time`
    ///
    /// # Panics
    ///
    /// Panics if a node with the `Assert` strategy is queried out of bounds.
    /// Use [`Animation::try_at`] to receive the error instead.
    fn at(&self, time: Duration) -> Self::Output {
        match self.try_at(time) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Whether `a` and `b` certainly evaluate to equal values
    ///
    /// `false` is always a safe answer. Instants the strategy rejects are
    /// never reported as same.
    fn is_same_at(&self, a: Duration, b: Duration) -> bool {
        let (Ok(a), Ok(b)) = (self.local_time(a), self.local_time(b)) else {
            return false;
        };
        a == b || self.same_between(a, b)
    }

    /// Map every value through a pure function
    ///
    /// The result keeps this node's duration and strategy, and its
    /// same-value answers are this node's answers.
    fn derive<U, F>(self, f: F) -> Derived<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Derived::new(self, f)
    }

    /// Pad with idle time before and after
    ///
    /// Fails if either padding is negative.
    fn extend(self, before: Duration, after: Duration) -> Result<Extended<Self>>
    where
        Self: Sized,
    {
        Extended::new(self, before, after)
    }

    /// Apply another strategy in front of this node's own
    fn with_strategy(self, strategy: TimeStrategy) -> WithStrategy<Self>
    where
        Self: Sized,
    {
        WithStrategy::new(self, strategy)
    }

    /// Erase the node type so it can sit next to different node types
    fn boxed(self) -> BoxedAnimation<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

/// A type-erased animation
pub type BoxedAnimation<T> = Box<dyn Animation<Output = T> + Send + Sync>;

/// A type-erased animation that can be read from several parents
pub type SharedAnimation<T> = Arc<dyn Animation<Output = T> + Send + Sync>;

macro_rules! forward_animation {
    ($($ptr:ty),*) => {$(
        impl<A: Animation + ?Sized> Animation for $ptr {
            type Output = A::Output;

            fn duration(&self) -> Duration {
                (**self).duration()
            }

            fn strategy(&self) -> TimeStrategy {
                (**self).strategy()
            }

            fn sample(&self, local: Duration) -> Result<Self::Output> {
                (**self).sample(local)
            }

            fn same_between(&self, a: Duration, b: Duration) -> bool {
                (**self).same_between(a, b)
            }
        }
    )*};
}

forward_animation!(Box<A>, Arc<A>, &A);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::Constant;
    use crate::error::AnimationError;
    use crate::tween::Tween;

    fn f(n: i64) -> Duration {
        Duration::frames(n)
    }

    #[test]
    fn test_at_applies_strategy_first() {
        let tween = Tween::new(0.0_f32, 10.0, f(10));
        assert_eq!(tween.at(f(-5)), 0.0);
        assert_eq!(tween.at(f(50)), 10.0);

        let looped = Tween::new(0.0_f32, 10.0, f(10)).time_strategy(TimeStrategy::Wrap);
        assert_eq!(looped.at(f(13)), 3.0);
    }

    #[test]
    fn test_try_at_reports_out_of_bounds() {
        let strict = Tween::new(0.0_f32, 1.0, f(10)).time_strategy(TimeStrategy::Assert);
        assert_eq!(
            strict.try_at(f(11)),
            Err(AnimationError::OutOfBounds {
                time: f(11),
                duration: f(10)
            })
        );
        assert!(strict.try_at(f(10)).is_ok());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_at_panics_out_of_bounds() {
        let strict = Tween::new(0.0_f32, 1.0, f(10)).time_strategy(TimeStrategy::Assert);
        strict.at(f(-1));
    }

    #[test]
    fn test_is_same_at_base_rule() {
        let tween = Tween::new(0.0_f32, 10.0, f(10));
        // Both clamp to the end
        assert!(tween.is_same_at(f(10), f(99)));
        // Both clamp to the start
        assert!(tween.is_same_at(f(-3), f(-8)));
        assert!(!tween.is_same_at(f(2), f(3)));
    }

    #[test]
    fn test_is_same_at_rejected_instants_are_not_same() {
        let strict = Constant::new(1).time_strategy(TimeStrategy::Assert);
        assert!(!strict.is_same_at(f(0), f(5)));
        assert!(strict.is_same_at(f(0), f(0)));
    }

    #[test]
    fn test_boxed_trees_mix_node_types() {
        let nodes: Vec<BoxedAnimation<f32>> = vec![
            Constant::new(1.0_f32).boxed(),
            Tween::new(0.0_f32, 2.0, f(4)).boxed(),
            Tween::new(0.0_f32, 2.0, f(4)).derive(|v| v * 10.0).boxed(),
        ];
        let values: Vec<f32> = nodes.iter().map(|n| n.at(f(2))).collect();
        assert_eq!(values, vec![1.0, 1.0, 10.0]);
    }

    #[test]
    fn test_shared_subtree_is_read_only() {
        let shared: SharedAnimation<f32> = Arc::new(Tween::new(0.0_f32, 8.0, f(8)));
        let a = Arc::clone(&shared).derive(|v| v + 1.0);
        let b = Arc::clone(&shared).derive(|v| v * 2.0);
        assert_eq!(a.at(f(4)), 5.0);
        assert_eq!(b.at(f(4)), 8.0);
        assert_eq!(shared.at(f(4)), 4.0);
    }

    #[test]
    fn test_repeated_queries_are_stable() {
        let tween = Tween::new(0.0_f32, 100.0, f(100));
        let forward: Vec<f32> = (0..=100).map(|t| tween.at(f(t))).collect();
        let backward: Vec<f32> = (0..=100).rev().map(|t| tween.at(f(t))).collect();
        let reversed: Vec<f32> = backward.into_iter().rev().collect();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_trees_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let tween = Tween::new(0.0_f32, 1.0, f(10)).boxed();
        assert_send_sync(&tween);

        let shared: SharedAnimation<f32> = Arc::new(Tween::new(0.0_f32, 10.0, f(10)));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let anim = Arc::clone(&shared);
                std::thread::spawn(move || anim.at(f(i)))
            })
            .collect();
        let values: Vec<f32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0]);
    }
}
