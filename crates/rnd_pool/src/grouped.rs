//! Keyed collection of pools with per-key consumption state.
//!
//! Keys are any `Ord` value (string, number, enum-like token); entries
//! are stored in a `BTreeMap` so iteration and mapped transforms are
//! deterministic. Every value inside is a real [`Pool`] — raw
//! sequences are normalized on insertion — and each keyed pool tracks
//! its own working set: exhausting key A never affects key B, and
//! regeneration is scoped to the exhausted key only.

use alloc::collections::BTreeMap;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use rnd_core::{CanonicalKey, DrawError, DrawPolicy, DrawRng};

use crate::pool::Pool;

/// Mapping from category key to [`Pool`].
#[derive(Clone, Debug)]
pub struct GroupedPool<K, T> {
    lists: BTreeMap<K, Pool<T>>,
}

impl<K: Ord, T> GroupedPool<K, T> {
    pub fn new() -> Self {
        Self {
            lists: BTreeMap::new(),
        }
    }

    /// Register (or replace) the pool under `key`. Raw sequences are
    /// normalized to a fresh pool.
    pub fn insert(&mut self, key: K, pool: impl Into<Pool<T>>) {
        self.lists.insert(key, pool.into());
    }

    /// Unregister and return the pool under `key`, if any.
    pub fn remove(&mut self, key: &K) -> Option<Pool<T>> {
        self.lists.remove(key)
    }

    pub fn get(&self, key: &K) -> Option<&Pool<T>> {
        self.lists.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut Pool<T>> {
        self.lists.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.lists.contains_key(key)
    }

    /// Registered keys, in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.lists.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Pool<T>)> {
        self.lists.iter()
    }

    /// Number of keyed pools (not candidates).
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl<K: Ord, T> Default for GroupedPool<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> GroupedPool<K, T>
where
    K: Ord + fmt::Display,
    T: Clone,
{
    /// Draw one value from the pool registered under `key`.
    ///
    /// Fails with `UnknownKey` when no pool is registered; pool-level
    /// failures (`EmptyPool`, `Depleted`) propagate scoped to that one
    /// key — other keys' pools are unaffected.
    pub fn draw_from(
        &mut self,
        key: &K,
        policy: DrawPolicy,
        rng: &mut DrawRng,
    ) -> Result<T, DrawError> {
        let pool = self
            .lists
            .get_mut(key)
            .ok_or_else(|| DrawError::UnknownKey(key.to_string()))?;
        pool.draw(policy, rng)
    }
}

impl<K, T> GroupedPool<K, T>
where
    K: Ord + Clone,
    T: Clone,
{
    /// Map [`Pool::filter`] over every keyed pool; same key set.
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Self {
        self.map_pools(|p| p.filter(&mut pred))
    }

    /// Map [`Pool::sorted`] over every keyed pool; same key set.
    pub fn sorted(&self) -> Self
    where
        T: Ord,
    {
        self.map_pools(|p| p.sorted())
    }

    /// Map [`Pool::sorted_by`] over every keyed pool; same key set.
    pub fn sorted_by(&self, mut cmp: impl FnMut(&T, &T) -> Ordering) -> Self {
        self.map_pools(|p| p.sorted_by(&mut cmp))
    }

    /// Map [`Pool::shuffled`] over every keyed pool; same key set.
    /// Pools are shuffled in ascending key order, so the rng stream is
    /// consumed deterministically.
    pub fn shuffled(&self, rng: &mut DrawRng) -> Self {
        self.map_pools(|p| p.shuffled(rng))
    }

    /// Map [`Pool::deduplicated`] over every keyed pool; same key set.
    pub fn deduplicated(&self) -> Self
    where
        T: CanonicalKey,
    {
        self.map_pools(|p| p.deduplicated())
    }

    fn map_pools(&self, mut f: impl FnMut(&Pool<T>) -> Pool<T>) -> Self {
        let lists = self
            .lists
            .iter()
            .map(|(k, p)| (k.clone(), f(p)))
            .collect();
        Self { lists }
    }
}

impl<K: Ord, T> FromIterator<(K, Pool<T>)> for GroupedPool<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, Pool<T>)>>(iter: I) -> Self {
        Self {
            lists: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord, T> FromIterator<(K, Vec<T>)> for GroupedPool<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, Vec<T>)>>(iter: I) -> Self {
        Self {
            lists: iter
                .into_iter()
                .map(|(k, items)| (k, Pool::new(items)))
                .collect(),
        }
    }
}
