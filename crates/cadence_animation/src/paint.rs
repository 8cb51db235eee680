//! Painter values
//!
//! The engine never draws. Animations whose values are painters let a host
//! render loop sample a frame and then run the painters against its own
//! drawing surface. [`parallel_paint`] folds a list of painters into one
//! that runs each in order, which is how layered scenes are assembled from
//! parallel, staggered or windowed children.

use std::sync::Arc;

use crate::animation::Animation;
use crate::derived::Derived;

/// A drawing callback over a surface of type `C`
pub type Painter<C> = Arc<dyn Fn(&mut C) + Send + Sync>;

/// Wrap a closure as a [`Painter`]
pub fn painter<C, F>(paint: F) -> Painter<C>
where
    F: Fn(&mut C) + Send + Sync + 'static,
{
    Arc::new(paint)
}

/// A single painter that runs `painters` in order
pub fn combine_painters<C: 'static>(painters: Vec<Painter<C>>) -> Painter<C> {
    Arc::new(move |surface: &mut C| {
        for paint in &painters {
            paint(surface);
        }
    })
}

/// Animation produced by [`parallel_paint`]
pub type ParallelPaint<A, C> = Derived<A, fn(Vec<Painter<C>>) -> Painter<C>>;

/// Collapse an animation of painter lists into an animation of one painter
pub fn parallel_paint<A, C>(source: A) -> ParallelPaint<A, C>
where
    A: Animation<Output = Vec<Painter<C>>>,
    C: 'static,
{
    source.derive(combine_painters::<C> as fn(Vec<Painter<C>>) -> Painter<C>)
}
