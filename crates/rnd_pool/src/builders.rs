//! Grouping and extraction builders: flat collections → pools.
//!
//! Accessors are closures returning `Option`; an item whose accessor
//! yields `None` is skipped rather than failing the whole build. This
//! is the statically-typed rendition of the dynamic
//! name-or-callable getter: name-based helpers for JSON records live
//! in the driver crate and compile down to exactly these closures.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::grouped::GroupedPool;
use crate::pool::Pool;

/// Build a pool by extracting one candidate value per item.
///
/// Items where `extract` yields `None` are skipped; iteration order of
/// the survivors is preserved.
pub fn pool_from_items<T, V>(items: &[T], mut extract: impl FnMut(&T) -> Option<V>) -> Pool<V> {
    let values: Vec<V> = items.iter().filter_map(|item| extract(item)).collect();
    Pool::new(values)
}

/// Group whole items into keyed buckets.
///
/// `key_of` receives each item with its index; items with a `None` key
/// are skipped. Buckets preserve iteration order and become pools.
pub fn grouped_by_key<K, T>(
    items: &[T],
    mut key_of: impl FnMut(&T, usize) -> Option<K>,
) -> GroupedPool<K, T>
where
    K: Ord,
    T: Clone,
{
    let mut buckets: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for (ix, item) in items.iter().enumerate() {
        if let Some(key) = key_of(item, ix) {
            buckets.entry(key).or_default().push(item.clone());
        }
    }
    buckets.into_iter().collect()
}

/// Like [`grouped_by_key`], but each bucket holds the value extracted
/// by `value_of` instead of the whole item.
///
/// Entries where either the key or the value comes back `None` are
/// skipped. To retain whole items, use [`grouped_by_key`].
pub fn grouped_from_items<K, T, V>(
    items: &[T],
    mut key_of: impl FnMut(&T, usize) -> Option<K>,
    mut value_of: impl FnMut(&T, &K) -> Option<V>,
) -> GroupedPool<K, V>
where
    K: Ord,
{
    let mut buckets: BTreeMap<K, Vec<V>> = BTreeMap::new();
    for (ix, item) in items.iter().enumerate() {
        let Some(key) = key_of(item, ix) else { continue };
        let Some(value) = value_of(item, &key) else { continue };
        buckets.entry(key).or_default().push(value);
    }
    buckets.into_iter().collect()
}
