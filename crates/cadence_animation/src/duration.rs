//! Frame-quantized time
//!
//! `Duration` is used both as an instant on a timeline and as the length of
//! an interval. It is a plain integral frame count, so every query is exact
//! and repeatable. Arithmetic saturates at the `i64` bounds, so even extreme
//! passthrough instants never overflow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// An integral number of frames
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration {
    frame: i64,
}

impl Duration {
    pub const ZERO: Duration = Duration { frame: 0 };

    pub const fn frames(frame: i64) -> Self {
        Self { frame }
    }

    pub const fn frame(self) -> i64 {
        self.frame
    }

    /// Convert seconds at a frame rate, rounding to the nearest frame
    pub fn from_seconds(seconds: f64, fps: u32) -> Self {
        Self::frames((seconds * fps as f64).round() as i64)
    }

    pub fn to_seconds(self, fps: u32) -> f64 {
        if fps == 0 {
            return 0.0;
        }
        self.frame as f64 / fps as f64
    }

    /// Ratio of two durations, used to turn an instant into progress
    ///
    /// Dividing by a zero-length duration yields `1.0`: a zero-length
    /// interval is complete the moment it starts.
    pub fn divide_by(self, other: Duration) -> f32 {
        if other.frame == 0 {
            return 1.0;
        }
        self.frame as f32 / other.frame as f32
    }

    pub fn is_less_than(self, other: Duration) -> bool {
        self.frame < other.frame
    }

    pub fn is_greater_than(self, other: Duration) -> bool {
        self.frame > other.frame
    }

    pub fn is_equal_to(self, other: Duration) -> bool {
        self.frame == other.frame
    }

    /// Clamp into `[min, max]`; if `max < min` the result is `min`
    pub fn clamp(self, min: Duration, max: Duration) -> Duration {
        Self::frames(self.frame.min(max.frame).max(min.frame))
    }

    /// Wrap into `[0, max)`, mapping negative instants forward
    ///
    /// A non-positive `max` wraps everything to zero.
    pub fn wrap(self, max: Duration) -> Duration {
        if max.frame <= 0 {
            return Self::ZERO;
        }
        Self::frames(self.frame.rem_euclid(max.frame))
    }

    /// Shift into the window `[start, end]` and clamp to its length
    ///
    /// Before the window this is zero; after it, the window length.
    pub fn window_between(self, start: Duration, end: Duration) -> Duration {
        (self - start).clamp(Self::ZERO, end - start)
    }

    /// Smallest of a set of durations, or zero when empty
    pub fn min_of<I: IntoIterator<Item = Duration>>(durations: I) -> Duration {
        durations.into_iter().min().unwrap_or(Self::ZERO)
    }

    /// Largest of a set of durations, or zero when empty
    pub fn max_of<I: IntoIterator<Item = Duration>>(durations: I) -> Duration {
        durations.into_iter().max().unwrap_or(Self::ZERO)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Self::frames(self.frame.saturating_add(rhs.frame))
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        self.frame = self.frame.saturating_add(rhs.frame);
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Self::frames(self.frame.saturating_sub(rhs.frame))
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        self.frame = self.frame.saturating_sub(rhs.frame);
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Self::frames(self.frame.saturating_neg())
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Self::ZERO, |acc, d| acc + d)
    }
}

impl From<i64> for Duration {
    fn from(frame: i64) -> Self {
        Self::frames(frame)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}f", self.frame)
    }
}
