//! Cadence Core Types
//!
//! Plain value types shared by the animation engine and the painters that
//! consume its output:
//!
//! - **Geometry**: `Point` and `Vec2`
//! - **Color**: RGBA colors with hex-string parsing
//!
//! None of these types know anything about time. The animation crate adds
//! interpolation for them.

pub mod color;
pub mod error;
pub mod geometry;

pub use color::Color;
pub use error::{CoreError, Result};
pub use geometry::{Point, Vec2};
