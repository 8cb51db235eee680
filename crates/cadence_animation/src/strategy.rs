//! Time-transform strategies
//!
//! Every animation node carries exactly one strategy. Before a node runs its
//! own logic, the incoming instant is remapped by the strategy against the
//! node's duration. All strategies except `Assert` are total.

use serde::{Deserialize, Serialize};

use crate::duration::Duration;
use crate::error::{AnimationError, Result};

/// Policy for remapping a query instant into an animation's domain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeStrategy {
    /// Leave the instant untouched
    Passthrough,
    /// Freeze at the boundary values outside `[0, duration]`
    #[default]
    Clamp,
    /// Loop over `[0, duration)`
    Wrap,
    /// Reject instants outside `[0, duration]`
    Assert,
    /// Play once; negative instants and `t >= duration` show frame zero
    ResetToZero,
    /// Play once; negative instants and `t > duration` show frame zero
    ResetToZeroInclusive,
}

impl TimeStrategy {
    /// Remap `time` for a node of length `duration`
    pub fn apply(self, time: Duration, duration: Duration) -> Result<Duration> {
        match self {
            TimeStrategy::Passthrough => Ok(time),
            TimeStrategy::Clamp => Ok(time.clamp(Duration::ZERO, duration)),
            TimeStrategy::Wrap => Ok(time.wrap(duration)),
            TimeStrategy::Assert => {
                if time.is_less_than(Duration::ZERO) || time.is_greater_than(duration) {
                    tracing::trace!(%time, %duration, "assert strategy rejected instant");
                    Err(AnimationError::OutOfBounds { time, duration })
                } else {
                    Ok(time)
                }
            }
            TimeStrategy::ResetToZero => {
                if time.is_less_than(Duration::ZERO) || !time.is_less_than(duration) {
                    Ok(Duration::ZERO)
                } else {
                    Ok(time)
                }
            }
            TimeStrategy::ResetToZeroInclusive => {
                if time.is_less_than(Duration::ZERO) || time.is_greater_than(duration) {
                    Ok(Duration::ZERO)
                } else {
                    Ok(time)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(n: i64) -> Duration {
        Duration::frames(n)
    }

    fn apply(strategy: TimeStrategy, t: i64) -> Result<Duration> {
        strategy.apply(f(t), f(10))
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(apply(TimeStrategy::Passthrough, -4), Ok(f(-4)));
        assert_eq!(apply(TimeStrategy::Passthrough, 40), Ok(f(40)));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(apply(TimeStrategy::Clamp, -4), Ok(f(0)));
        assert_eq!(apply(TimeStrategy::Clamp, 4), Ok(f(4)));
        assert_eq!(apply(TimeStrategy::Clamp, 40), Ok(f(10)));
    }

    #[test]
    fn test_wrap() {
        assert_eq!(apply(TimeStrategy::Wrap, -1), Ok(f(9)));
        assert_eq!(apply(TimeStrategy::Wrap, 10), Ok(f(0)));
        assert_eq!(apply(TimeStrategy::Wrap, 23), Ok(f(3)));
    }

    #[test]
    fn test_assert() {
        assert_eq!(apply(TimeStrategy::Assert, 0), Ok(f(0)));
        assert_eq!(apply(TimeStrategy::Assert, 10), Ok(f(10)));
        assert_eq!(
            apply(TimeStrategy::Assert, 11),
            Err(AnimationError::OutOfBounds {
                time: f(11),
                duration: f(10)
            })
        );
        assert!(apply(TimeStrategy::Assert, -1).is_err());
    }

    #[test]
    fn test_reset_variants_differ_only_at_end() {
        for t in -3..15 {
            let exclusive = apply(TimeStrategy::ResetToZero, t).unwrap();
            let inclusive = apply(TimeStrategy::ResetToZeroInclusive, t).unwrap();
            if t == 10 {
                assert_eq!(exclusive, f(0));
                assert_eq!(inclusive, f(10));
            } else {
                assert_eq!(exclusive, inclusive, "t = {t}");
            }
        }
        assert_eq!(apply(TimeStrategy::ResetToZero, 5), Ok(f(5)));
        assert_eq!(apply(TimeStrategy::ResetToZero, 12), Ok(f(0)));
        assert_eq!(apply(TimeStrategy::ResetToZero, -2), Ok(f(0)));
    }

    #[test]
    fn test_strategy_from_toml() {
        #[derive(Deserialize)]
        struct Holder {
            strategy: TimeStrategy,
        }
        let holder: Holder = toml::from_str(r#"strategy = "reset_to_zero_inclusive""#).unwrap();
        assert_eq!(holder.strategy, TimeStrategy::ResetToZeroInclusive);
        assert_eq!(TimeStrategy::default(), TimeStrategy::Clamp);
    }
}
