//! Single pool: an ordered candidate snapshot plus consumption state.
//!
//! A pool owns an immutable snapshot of its candidates (`original`)
//! and, once a consumable draw happens, a lazily created working set
//! that shrinks as values are consumed. Transform operations return
//! new pools built from the snapshot; the receiver keeps its draw
//! state untouched.
//!
//! State machine per pool under a consumable policy:
//! fresh → draws → depleted → (regenerate) fresh, or (no regenerate)
//! every further draw fails until [`Pool::reset`]. Non-consumable
//! draws are stateless.

use alloc::vec::Vec;
use core::cmp::Ordering;

use rnd_core::{dedupe, CanonicalKey, DrawCrumb, DrawError, DrawPolicy, DrawRng};

/// Ordered collection of candidate values plus consumption state.
#[derive(Clone, Debug)]
pub struct Pool<T> {
    original: Vec<T>,
    working: Option<Vec<T>>,
}

impl<T> Pool<T> {
    /// Snapshot `items` as the candidate set. The working set stays
    /// unset until the first consumable draw.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            original: items,
            working: None,
        }
    }

    /// Number of candidates in the snapshot.
    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Candidates still drawable under a consumable policy. Equals
    /// `len()` while the working set is fresh.
    pub fn remaining(&self) -> usize {
        self.working.as_ref().map_or(self.original.len(), Vec::len)
    }

    /// True once a consumable run has drained the working set (and no
    /// regeneration has happened since).
    pub fn is_depleted(&self) -> bool {
        matches!(&self.working, Some(w) if w.is_empty())
    }

    /// Drop consumption state, returning the pool to fresh.
    pub fn reset(&mut self) {
        self.working = None;
    }

    /// Read-only view of the snapshot, in construction order.
    pub fn items(&self) -> &[T] {
        &self.original
    }
}

impl<T: Clone> Pool<T> {
    /// Copy of the snapshot in its original order.
    pub fn to_vec(&self) -> Vec<T> {
        self.original.clone()
    }

    /// Draw one value under `policy`.
    ///
    /// Non-consumable: uniform pick from the snapshot, no mutation;
    /// `EmptyPool` when the snapshot is empty. Consumable: remove and
    /// return a uniform pick from the working set (initialized from
    /// the snapshot on first use); an exhausted working set either
    /// refills (`policy.regenerate`) or fails with `Depleted`. The
    /// order of elements remaining after a removal is unspecified.
    pub fn draw(&mut self, policy: DrawPolicy, rng: &mut DrawRng) -> Result<T, DrawError> {
        self.pick(policy, rng).map(|(value, _, _)| value)
    }

    /// Like [`draw`](Self::draw), but also returns an audit crumb
    /// bound to the RNG word that decided the pick.
    pub fn draw_with_crumb(
        &mut self,
        ctx: &str,
        policy: DrawPolicy,
        rng: &mut DrawRng,
    ) -> Result<(T, DrawCrumb), DrawError> {
        let (value, pick, word_index) = self.pick(policy, rng)?;
        Ok((value, DrawCrumb::new(ctx, pick, word_index)))
    }

    fn pick(
        &mut self,
        policy: DrawPolicy,
        rng: &mut DrawRng,
    ) -> Result<(T, usize, u128), DrawError> {
        if self.original.is_empty() {
            // Covers both the stateless path and a consumable draw from
            // a snapshot that was empty from the start.
            return Err(DrawError::EmptyPool);
        }

        if !policy.consumable {
            let (ix, word) = match rng.gen_range_with_index(self.original.len() as u64) {
                Some((v, w)) => (v as usize, w),
                None => unreachable!("snapshot checked non-empty"),
            };
            return Ok((self.original[ix].clone(), ix, word));
        }

        if self.working.is_none() {
            // Lazy: the working set only exists once consumable draws start.
            self.working = Some(self.original.clone());
        } else if self.is_depleted() {
            if policy.regenerate {
                self.working = Some(self.original.clone());
            } else {
                return Err(DrawError::Depleted);
            }
        }

        let working = match self.working.as_mut() {
            Some(w) => w,
            None => unreachable!("working set initialized above"),
        };
        let (ix, word) = match rng.gen_range_with_index(working.len() as u64) {
            Some((v, w)) => (v as usize, w),
            None => unreachable!("working set non-empty after init/refill"),
        };
        Ok((working.swap_remove(ix), ix, word))
    }

    /// New pool holding the snapshot elements matching `pred`.
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Pool<T> {
        Pool::new(self.original.iter().filter(|t| pred(t)).cloned().collect())
    }

    /// New pool with the snapshot in ascending order.
    pub fn sorted(&self) -> Pool<T>
    where
        T: Ord,
    {
        let mut items = self.original.clone();
        items.sort();
        Pool::new(items)
    }

    /// New pool with the snapshot ordered by `cmp`.
    pub fn sorted_by(&self, mut cmp: impl FnMut(&T, &T) -> Ordering) -> Pool<T> {
        let mut items = self.original.clone();
        items.sort_by(|a, b| cmp(a, b));
        Pool::new(items)
    }

    /// New pool with the snapshot shuffled (deterministic under the
    /// rng's seed).
    pub fn shuffled(&self, rng: &mut DrawRng) -> Pool<T> {
        let mut items = self.original.clone();
        rng.shuffle_in_place(&mut items);
        Pool::new(items)
    }

    /// New pool with duplicates removed, first occurrence kept.
    pub fn deduplicated(&self) -> Pool<T>
    where
        T: CanonicalKey,
    {
        Pool::new(dedupe(&self.original))
    }
}

impl<T> From<Vec<T>> for Pool<T> {
    fn from(items: Vec<T>) -> Self {
        Pool::new(items)
    }
}

impl<T: Clone> From<&[T]> for Pool<T> {
    fn from(items: &[T]) -> Self {
        Pool::new(items.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Pool<T> {
    fn from(items: [T; N]) -> Self {
        Pool::new(Vec::from(items))
    }
}

impl<T> FromIterator<T> for Pool<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Pool::new(iter.into_iter().collect())
    }
}
