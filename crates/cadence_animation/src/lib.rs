//! Cadence Animation Engine
//!
//! Declarative, seekable animations. An animation is a pure function from a
//! frame-quantized instant to a value; trees of them are built once and
//! sampled at any instant, in any order, with repeatable results.
//!
//! # Features
//!
//! - **Duration**: Integral frame time with clamp, wrap and window math
//! - **Time Strategies**: Clamp, wrap, assert, passthrough and reset policies
//! - **Tweens**: Eased interpolation for any `Interpolate` type or custom lerp
//! - **Combinators**: Sequence, parallel, staggered, switch and windowed trees
//! - **Property Records**: One animation per named field, sampled together
//! - **Same-Value Queries**: `is_same_at` lets render loops skip redundant work
//! - **Painters**: Animated drawing callbacks folded into one per frame
//!
//! # Example
//!
//! ```rust
//! use cadence_animation::{Animation, Duration, Easing, Sequence, Tween};
//!
//! let rise = Tween::new(0.0_f32, 100.0, Duration::frames(30)).easing(Easing::EaseOut);
//! let fall = Tween::new(100.0_f32, 0.0, Duration::frames(30));
//! let bounce = Sequence::new(vec![rise, fall]).unwrap();
//!
//! assert_eq!(bounce.duration(), Duration::frames(60));
//! assert_eq!(bounce.at(Duration::frames(30)), 100.0);
//! assert!(bounce.is_same_at(Duration::frames(60), Duration::frames(90)));
//! ```

pub mod animation;
pub mod callback;
pub mod constant;
pub mod derived;
pub mod duration;
pub mod easing;
pub mod error;
pub mod paint;
pub mod parallel;
pub mod properties;
pub mod sequence;
pub mod staggered;
pub mod strategy;
pub mod switch;
pub mod tween;
pub mod values;
pub mod windowed;

pub use animation::{Animation, BoxedAnimation, SharedAnimation};
pub use callback::{callback, Callback, SamePredicate};
pub use constant::Constant;
pub use derived::{Derived, ExtendSettings, Extended, WithStrategy};
pub use duration::Duration;
pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use paint::{combine_painters, painter, parallel_paint, Painter, ParallelPaint};
pub use parallel::Parallel;
pub use properties::Properties;
pub use sequence::Sequence;
pub use staggered::Staggered;
pub use strategy::TimeStrategy;
pub use switch::Switch;
pub use tween::{LerpFn, Tween, TweenSettings};
pub use values::Interpolate;
pub use windowed::Windowed;
