//! Order-preserving deduplication over canonical keys.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use crate::key::CanonicalKey;

/// Remove duplicates from `items`, keeping the first occurrence of each
/// canonical key and the relative order of the survivors.
pub fn dedupe<T>(items: &[T]) -> Vec<T>
where
    T: CanonicalKey + Clone,
{
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.canonical_key()) {
            out.push(item.clone());
        }
    }
    out
}
