//! Tween animations
//!
//! A tween interpolates between two values over its duration. Progress is
//! `t / duration`, eased, then handed to a lerp function. A zero-length
//! tween is complete immediately and always yields its end value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::animation::Animation;
use crate::duration::Duration;
use crate::easing::Easing;
use crate::error::Result;
use crate::strategy::TimeStrategy;
use crate::values::Interpolate;

/// Interpolation function `(from, to, progress) -> value`
pub type LerpFn<T> = Arc<dyn Fn(&T, &T, f32) -> T + Send + Sync>;

/// Tween settings that can be loaded from configuration
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenSettings {
    pub duration: Duration,
    pub easing: Easing,
    pub strategy: TimeStrategy,
}

/// Interpolation between two values
pub struct Tween<T> {
    from: T,
    to: T,
    duration: Duration,
    easing: Easing,
    strategy: TimeStrategy,
    lerp: LerpFn<T>,
}

impl<T: Interpolate + 'static> Tween<T> {
    /// Linear tween using the value type's [`Interpolate`] impl
    pub fn new(from: T, to: T, duration: Duration) -> Self {
        Self::with_lerp(from, to, duration, |a: &T, b: &T, t| a.lerp(b, t))
    }

    pub fn from_settings(from: T, to: T, settings: TweenSettings) -> Self {
        Self::new(from, to, settings.duration)
            .easing(settings.easing)
            .time_strategy(settings.strategy)
    }
}

impl<T> Tween<T> {
    /// Tween with a custom interpolation function
    pub fn with_lerp<L>(from: T, to: T, duration: Duration, lerp: L) -> Self
    where
        L: Fn(&T, &T, f32) -> T + Send + Sync + 'static,
    {
        Self {
            from,
            to,
            duration,
            easing: Easing::Linear,
            strategy: TimeStrategy::Clamp,
            lerp: Arc::new(lerp),
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn time_strategy(mut self, strategy: TimeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn start_value(&self) -> &T {
        &self.from
    }

    pub fn end_value(&self) -> &T {
        &self.to
    }

    /// Eased progress at a local instant
    pub fn progress(&self, local: Duration) -> f32 {
        self.easing.apply(local.divide_by(self.duration))
    }
}

impl<T> Animation for Tween<T> {
    type Output = T;

    fn duration(&self) -> Duration {
        self.duration
    }

    fn strategy(&self) -> TimeStrategy {
        self.strategy
    }

    fn sample(&self, local: Duration) -> Result<T> {
        Ok((self.lerp)(&self.from, &self.to, self.progress(local)))
    }

    fn same_between(&self, _a: Duration, _b: Duration) -> bool {
        // Zero-length tweens sit at progress 1 everywhere
        self.duration == Duration::ZERO
    }
}

impl<T: Clone> Clone for Tween<T> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            duration: self.duration,
            easing: self.easing,
            strategy: self.strategy,
            lerp: Arc::clone(&self.lerp),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tween<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::Point;

    fn f(n: i64) -> Duration {
        Duration::frames(n)
    }

    #[test]
    fn test_linear_tween_scenario() {
        let tween = Tween::new(50.0_f32, 250.0, f(60)).easing(Easing::Linear);
        assert_eq!(tween.at(f(0)), 50.0);
        assert_eq!(tween.at(f(30)), 150.0);
        assert_eq!(tween.at(f(60)), 250.0);
        assert_eq!(tween.at(f(90)), 250.0);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let tween = Tween::new(1.0_f32, 9.0, Duration::ZERO);
        for t in [-10, 0, 1, 10] {
            assert_eq!(tween.at(f(t)), 9.0);
        }
        let passthrough = Tween::new(1.0_f32, 9.0, Duration::ZERO)
            .time_strategy(TimeStrategy::Passthrough);
        assert_eq!(passthrough.at(f(-10)), 9.0);
        assert!(passthrough.is_same_at(f(-10), f(10)));
    }

    #[test]
    fn test_mid_progress_is_never_same() {
        let tween = Tween::new(0.0_f32, 1.0, f(10));
        assert!(!tween.is_same_at(f(3), f(4)));
        assert!(!tween.is_same_at(f(0), f(10)));
    }

    #[test]
    fn test_easing_is_applied_before_lerp() {
        let tween = Tween::new(0.0_f32, 100.0, f(10)).easing(Easing::EaseInQuad);
        assert!((tween.at(f(5)) - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_points_tween() {
        let tween = Tween::new(Point::new(0.0, 0.0), Point::new(10.0, -10.0), f(4));
        assert_eq!(tween.at(f(2)), Point::new(5.0, -5.0));
    }

    #[test]
    fn test_custom_lerp() {
        let snap = Tween::with_lerp(0_i32, 10, f(10), |a: &i32, b: &i32, t| {
            if t < 1.0 {
                *a
            } else {
                *b
            }
        });
        assert_eq!(snap.at(f(9)), 0);
        assert_eq!(snap.at(f(10)), 10);
    }

    #[test]
    fn test_wrap_strategy_loops() {
        let tween = Tween::new(0.0_f32, 10.0, f(10)).time_strategy(TimeStrategy::Wrap);
        assert_eq!(tween.at(f(25)), 5.0);
        assert_eq!(tween.at(f(-2)), 8.0);
    }

    #[test]
    fn test_reset_strategy_shows_first_frame() {
        let tween = Tween::new(0.0_f32, 10.0, f(10)).time_strategy(TimeStrategy::ResetToZero);
        assert_eq!(tween.at(f(5)), 5.0);
        assert_eq!(tween.at(f(10)), 0.0);

        let inclusive =
            Tween::new(0.0_f32, 10.0, f(10)).time_strategy(TimeStrategy::ResetToZeroInclusive);
        assert_eq!(inclusive.at(f(10)), 10.0);
        assert_eq!(inclusive.at(f(11)), 0.0);
    }

    #[test]
    fn test_from_settings() {
        let settings: TweenSettings = toml::from_str(
            r#"
            duration = 20
            easing = "ease_in_quad"
            strategy = "wrap"
            "#,
        )
        .unwrap();
        let tween = Tween::from_settings(0.0_f32, 100.0, settings);
        assert_eq!(tween.duration(), f(20));
        assert_eq!(tween.strategy(), TimeStrategy::Wrap);
        assert!((tween.at(f(30)) - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_settings_defaults() {
        let settings: TweenSettings = toml::from_str("duration = 5").unwrap();
        assert!(matches!(settings.easing, Easing::Linear));
        assert_eq!(settings.strategy, TimeStrategy::Clamp);
    }
}
