//! Property records
//!
//! Combines one animation per named field into a single animation of the
//! whole record. Fields are declared up front as `(key, child)` pairs and the
//! value keeps that declaration order, so painters can read fields by key
//! or iterate them in a stable order.

use indexmap::IndexMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::animation::Animation;
use crate::duration::Duration;
use crate::error::{AnimationError, Result};
use crate::strategy::TimeStrategy;

/// One animation per field, evaluated together
#[derive(Clone, Debug)]
pub struct Properties<K, A> {
    fields: IndexMap<K, A>,
    duration: Duration,
    strategy: TimeStrategy,
}

impl<K, A> Properties<K, A>
where
    K: Hash + Eq + Clone + Debug,
    A: Animation,
{
    /// Build from `(key, child)` pairs; keys must be unique
    pub fn new(fields: Vec<(K, A)>) -> Result<Self> {
        let mut map = IndexMap::with_capacity(fields.len());
        for (key, child) in fields {
            if child.duration().is_less_than(Duration::ZERO) {
                return Err(AnimationError::NegativeDuration {
                    what: "property duration",
                    duration: child.duration(),
                });
            }
            if map.contains_key(&key) {
                return Err(AnimationError::DuplicateKey {
                    key: format!("{key:?}"),
                });
            }
            map.insert(key, child);
        }

        let duration = Duration::max_of(map.values().map(Animation::duration));
        tracing::debug!(fields = map.len(), duration = %duration, "built property record");

        Ok(Self {
            fields: map,
            duration,
            strategy: TimeStrategy::Clamp,
        })
    }

    pub fn time_strategy(mut self, strategy: TimeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn field(&self, key: &K) -> Option<&A> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.fields.keys()
    }
}

impl<K, A> Animation for Properties<K, A>
where
    K: Hash + Eq + Clone + Debug,
    A: Animation,
{
    type Output = IndexMap<K, A::Output>;

    fn duration(&self) -> Duration {
        self.duration
    }

    fn strategy(&self) -> TimeStrategy {
        self.strategy
    }

    fn sample(&self, local: Duration) -> Result<Self::Output> {
        self.fields
            .iter()
            .map(|(key, child)| Ok((key.clone(), child.try_at(local)?)))
            .collect()
    }

    fn same_between(&self, a: Duration, b: Duration) -> bool {
        self.fields.values().all(|child| child.is_same_at(a, b))
    }
}
