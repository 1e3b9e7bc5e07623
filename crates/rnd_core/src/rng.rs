//! Deterministic, integer-only RNG for pool draws.
//!
//! All randomness in the toolkit flows through [`DrawRng`]: a ChaCha20
//! stream seeded explicitly from a caller-supplied `u64`. The
//! reproducibility contract is that a fixed seed plus a fixed sequence
//! of draw calls yields the same picks on every platform. No floating
//! point; unbiased range generation via rejection sampling; every
//! consumed 64-bit word is counted so audit crumbs can point at the
//! word that decided a pick.

use smol_str::SmolStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

/// Audit record for a single randomized pick.
///
/// `word_index` is **1-based**: the first 64-bit word consumed by a
/// `DrawRng` has index 1. For range generation using rejection
/// sampling, `word_index` refers to the **accepted** word that decided
/// the pick; rejected draws are counted but not logged here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawCrumb {
    /// Stable, human-readable context (e.g. "pool/draw", "grouped:melee").
    pub ctx: SmolStr,
    /// Chosen index in the candidate set (0-based).
    pub pick: usize,
    /// 1-based index of the deciding RNG 64-bit word (saturates at u128::MAX).
    pub word_index: u128,
}

impl DrawCrumb {
    pub fn new(ctx: &str, pick: usize, word_index: u128) -> Self {
        Self {
            ctx: SmolStr::new(ctx),
            pick,
            word_index,
        }
    }
}

/// Seedable uniform source for every draw in the toolkit.
///
/// Internally ChaCha20 with an explicit 32-byte seed derived from the
/// 64-bit caller seed (little-endian bytes in the first 8 positions,
/// the rest zero). The mapping is spelled out to avoid endianness
/// ambiguity and keep streams stable across platforms.
#[derive(Debug, Clone)]
pub struct DrawRng {
    rng: ChaCha20Rng,
    words_consumed: u128,
}

impl DrawRng {
    /// Construct from a 64-bit seed. Reseeding is done by constructing
    /// a fresh handle; there is no hidden global state.
    #[inline]
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut seed32 = [0u8; 32];
        seed32[..8].copy_from_slice(&seed.to_le_bytes());
        Self {
            rng: ChaCha20Rng::from_seed(seed32),
            words_consumed: 0,
        }
    }

    /// Total number of 64-bit words consumed so far (saturating).
    /// A draw counter, not a byte counter.
    #[inline]
    pub fn words_consumed(&self) -> u128 {
        self.words_consumed
    }

    /// Draw the next u64 from the stream and advance the word counter.
    /// This is the only place the counter moves.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.words_consumed = self.words_consumed.saturating_add(1);
        self.rng.next_u64()
    }

    /// Unbiased integer in `[0, n)` using rejection sampling with the
    /// threshold trick. Returns `None` if `n == 0`.
    ///
    /// Let `threshold = 2^64 mod n` (computed via `wrapping_neg() % n`).
    /// Accept `x` if `x >= threshold`; then `x % n` is uniform.
    #[inline]
    pub fn gen_range(&mut self, n: u64) -> Option<u64> {
        self.gen_range_with_index(n).map(|(v, _idx)| v)
    }

    /// Same as [`gen_range`](Self::gen_range), but also returns the
    /// **1-based** index of the deciding RNG word.
    #[inline]
    pub fn gen_range_with_index(&mut self, n: u64) -> Option<(u64, u128)> {
        if n == 0 {
            return None;
        }
        let threshold = n.wrapping_neg() % n; // == (2^64 % n)
        loop {
            let x = self.next_u64(); // increments words_consumed
            if x >= threshold {
                // words_consumed now points at the accepted word → 1-based
                return Some((x % n, self.words_consumed));
            }
        }
    }

    /// Choose a single index in `[0, n)`; returns `None` if `n == 0`.
    #[inline]
    pub fn choose_index(&mut self, n: usize) -> Option<usize> {
        self.gen_range(n as u64).map(|v| v as usize)
    }

    /// Pick an index in `[0, n)` and return an attached [`DrawCrumb`]
    /// bound to the deciding RNG word. Returns `None` if `n == 0`.
    #[inline]
    pub fn pick_index_with_crumb(&mut self, ctx: &str, n: usize) -> Option<(usize, DrawCrumb)> {
        let (v, word_index) = self.gen_range_with_index(n as u64)?;
        let pick = v as usize;
        Some((pick, DrawCrumb::new(ctx, pick, word_index)))
    }

    /// Deterministic in-place Fisher–Yates shuffle.
    ///
    /// Unbiased scheme: for i in (1..len).rev() { j ~ U{0..i}; swap(i, j) }
    #[inline]
    pub fn shuffle_in_place<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        if len <= 1 {
            return;
        }
        let mut i = len - 1;
        loop {
            // gen_range(i+1) is guaranteed non-empty here
            let j = match self.gen_range((i as u64) + 1) {
                Some(v) => v as usize,
                None => unreachable!("gen_range(>0) must return Some"),
            };
            slice.swap(i, j);
            if i == 1 {
                break;
            }
            i -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gen_range_zero_none() {
        let mut rng = DrawRng::from_seed_u64(0xDEAD_BEEF_CAFE_BABE);
        assert_eq!(rng.gen_range(0), None);
        assert_eq!(rng.words_consumed(), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = DrawRng::from_seed_u64(123_456_789);
        let mut b = DrawRng::from_seed_u64(123_456_789);
        let mut seq_a = [0u64; 16];
        let mut seq_b = [0u64; 16];
        for i in 0..16 {
            seq_a[i] = a.gen_range(10).unwrap();
            seq_b[i] = b.gen_range(10).unwrap();
        }
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn crumb_word_indices_are_monotonic() {
        let mut rng = DrawRng::from_seed_u64(0x0123_4567_89AB_CDEF);
        let (_, c1) = rng.pick_index_with_crumb("pool/first", 5).unwrap();
        let (_, c2) = rng.pick_index_with_crumb("pool/second", 5).unwrap();
        assert!(c1.word_index >= 1);
        assert!(c2.word_index > c1.word_index);
        // Counter reflects total accepted draws
        assert!(rng.words_consumed() >= c2.word_index);
    }

    #[test]
    fn shuffle_is_deterministic() {
        let seed = 42u64;
        let mut a = DrawRng::from_seed_u64(seed);
        let mut b = DrawRng::from_seed_u64(seed);
        let mut xs = (0..16).collect::<alloc::vec::Vec<_>>();
        let mut ys = (0..16).collect::<alloc::vec::Vec<_>>();

        a.shuffle_in_place(&mut xs);
        b.shuffle_in_place(&mut ys);
        assert_eq!(xs, ys);

        // Same multiset either way.
        xs.sort_unstable();
        assert_eq!(xs, (0..16).collect::<alloc::vec::Vec<_>>());
    }

    #[test]
    fn choose_index_stays_in_bounds() {
        let mut rng = DrawRng::from_seed_u64(7);
        assert!(rng.choose_index(0).is_none());
        for _ in 0..32 {
            let ix = rng.choose_index(3).unwrap();
            assert!(ix < 3);
        }
    }
}
