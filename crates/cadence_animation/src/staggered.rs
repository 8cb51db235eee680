//! Staggered composition
//!
//! Like a sequence, each child gets a back-to-back window equal to its own
//! duration. Unlike a sequence, every child is evaluated on every query, so
//! all children are visible at once: finished ones hold their last frame,
//! pending ones their first.

use crate::animation::Animation;
use crate::duration::Duration;
use crate::error::{AnimationError, Result};
use crate::strategy::TimeStrategy;
use crate::windowed::Windowed;

/// Children laid out back-to-back but always evaluated together
#[derive(Clone, Debug)]
pub struct Staggered<A> {
    windows: Windowed<A>,
}

impl<A: Animation> Staggered<A> {
    pub fn new(children: Vec<A>) -> Result<Self> {
        let mut start = Duration::ZERO;
        let mut windows = Vec::with_capacity(children.len());
        for child in children {
            let duration = child.duration();
            if duration.is_less_than(Duration::ZERO) {
                return Err(AnimationError::NegativeDuration {
                    what: "staggered child duration",
                    duration,
                });
            }
            windows.push((start, child));
            start += duration;
        }
        Ok(Self {
            windows: Windowed::new(windows)?,
        })
    }

    pub fn time_strategy(mut self, strategy: TimeStrategy) -> Self {
        self.windows = self.windows.time_strategy(strategy);
        self
    }

    pub fn children(&self) -> &[A] {
        self.windows.children()
    }

    /// Window start of every child
    pub fn starts(&self) -> &[Duration] {
        self.windows.starts()
    }
}

impl<A: Animation> Animation for Staggered<A> {
    type Output = Vec<A::Output>;

    fn duration(&self) -> Duration {
        self.windows.duration()
    }

    fn strategy(&self) -> TimeStrategy {
        self.windows.strategy()
    }

    fn sample(&self, local: Duration) -> Result<Self::Output> {
        self.windows.sample(local)
    }

    fn same_between(&self, a: Duration, b: Duration) -> bool {
        self.windows.same_between(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::Tween;

    fn f(n: i64) -> Duration {
        Duration::frames(n)
    }

    #[test]
    fn test_back_to_back_windows() {
        let a = Tween::new(0.0_f32, 60.0, f(60));
        let b = Tween::new(0.0_f32, 160.0, f(80));
        let staggered = Staggered::new(vec![a.clone(), b.clone()]).unwrap();

        assert_eq!(staggered.duration(), f(140));
        assert_eq!(staggered.starts(), &[f(0), f(60)]);
        assert_eq!(staggered.at(f(36)), vec![a.at(f(36)), b.at(f(0))]);
        assert_eq!(staggered.at(f(100)), vec![a.at(f(60)), b.at(f(40))]);
        assert_eq!(staggered.at(f(140)), vec![60.0, 160.0]);
    }

    #[test]
    fn test_frozen_before_and_after_window() {
        let children: Vec<_> = (0..3)
            .map(|i| Tween::new(0.0_f32, 1.0 + i as f32, f(10)))
            .collect();
        let staggered = Staggered::new(children.clone()).unwrap();
        for t in 0..=30 {
            let values = staggered.at(f(t));
            for (i, child) in children.iter().enumerate() {
                let start = 10 * i as i64;
                if t < start {
                    assert_eq!(values[i], child.at(Duration::ZERO));
                } else if t > start + 10 {
                    assert_eq!(values[i], child.at(child.duration()));
                }
            }
        }
    }

    #[test]
    fn test_same_value_across_other_windows() {
        let staggered = Staggered::new(vec![
            Tween::new(0.0_f32, 1.0, f(10)),
            Tween::new(0.0_f32, 1.0, f(10)),
        ])
        .unwrap();
        assert!(!staggered.is_same_at(f(2), f(4)));
        assert!(!staggered.is_same_at(f(12), f(14)));
        assert!(staggered.is_same_at(f(20), f(30)));
    }

    #[test]
    fn test_rejects_negative_child() {
        let err = Staggered::new(vec![
            Tween::new(0.0_f32, 1.0, f(10)),
            Tween::new(0.0_f32, 1.0, f(-3)),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            AnimationError::NegativeDuration {
                what: "staggered child duration",
                duration: f(-3)
            }
        );
    }
}
