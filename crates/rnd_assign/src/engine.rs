//! Draw-and-write loop over a target sequence.
//!
//! For each target element the engine draws one value from the source
//! under the active policy and applies the setter. Any failure aborts
//! at the failing index: elements before it keep their new values (no
//! rollback), elements after it are untouched, and the error names the
//! index.

use std::fmt;

use thiserror::Error;

use rnd_core::{DrawError, DrawPolicy, DrawRng};
use rnd_pool::{GroupedPool, Pool};

/// Assignment failure, carrying the index of the target element that
/// was being processed.
#[derive(Debug, Error)]
pub enum AssignError {
    /// The draw itself failed (empty or depleted pool, unknown key).
    #[error("draw failed at target index {index}: {source}")]
    Draw {
        index: usize,
        #[source]
        source: DrawError,
    },

    /// The key selector produced no key for this element.
    #[error("no selection key for target index {index}")]
    Key { index: usize },

    /// The setter rejected the target element.
    #[error("setter failed at target index {index}: {source}")]
    Set {
        index: usize,
        #[source]
        source: DrawError,
    },
}

pub type AssignResult = Result<(), AssignError>;

/// Replace every element of `target` wholesale with a value drawn from
/// `pool`. The no-setter form: only valid when target elements are
/// meant to be replaced outright.
pub fn assign_replace<T: Clone>(
    target: &mut [T],
    pool: &mut Pool<T>,
    policy: DrawPolicy,
    rng: &mut DrawRng,
) -> AssignResult {
    for (index, slot) in target.iter_mut().enumerate() {
        *slot = pool
            .draw(policy, rng)
            .map_err(|source| AssignError::Draw { index, source })?;
    }
    Ok(())
}

/// [`assign_replace`] over a raw sequence: the slice is wrapped into a
/// transient pool whose consumption state lives and dies with this
/// call.
pub fn assign_replace_from_slice<T: Clone>(
    target: &mut [T],
    source: &[T],
    policy: DrawPolicy,
    rng: &mut DrawRng,
) -> AssignResult {
    let mut pool = Pool::from(source);
    assign_replace(target, &mut pool, policy, rng)
}

/// Draw one value per element and hand it to `apply` together with the
/// element and its index. `apply` may mutate the element arbitrarily —
/// e.g. derive several dependent fields from one drawn value — and may
/// reject the element with a `DrawError`.
pub fn assign_with<T, V: Clone>(
    target: &mut [T],
    pool: &mut Pool<V>,
    policy: DrawPolicy,
    rng: &mut DrawRng,
    mut apply: impl FnMut(&mut T, V, usize) -> Result<(), DrawError>,
) -> AssignResult {
    for (index, slot) in target.iter_mut().enumerate() {
        let value = pool
            .draw(policy, rng)
            .map_err(|source| AssignError::Draw { index, source })?;
        apply(slot, value, index).map_err(|source| AssignError::Set { index, source })?;
    }
    Ok(())
}

/// Grouped form of [`assign_replace`]: `key_of` selects the keyed pool
/// per element; a `None` key fails the run at that index.
pub fn assign_grouped_replace<K, T>(
    target: &mut [T],
    pools: &mut GroupedPool<K, T>,
    policy: DrawPolicy,
    rng: &mut DrawRng,
    mut key_of: impl FnMut(&T, usize) -> Option<K>,
) -> AssignResult
where
    K: Ord + fmt::Display,
    T: Clone,
{
    for (index, slot) in target.iter_mut().enumerate() {
        let key = key_of(slot, index).ok_or(AssignError::Key { index })?;
        *slot = pools
            .draw_from(&key, policy, rng)
            .map_err(|source| AssignError::Draw { index, source })?;
    }
    Ok(())
}

/// Grouped form of [`assign_with`].
pub fn assign_grouped_with<K, T, V>(
    target: &mut [T],
    pools: &mut GroupedPool<K, V>,
    policy: DrawPolicy,
    rng: &mut DrawRng,
    mut key_of: impl FnMut(&T, usize) -> Option<K>,
    mut apply: impl FnMut(&mut T, V, usize) -> Result<(), DrawError>,
) -> AssignResult
where
    K: Ord + fmt::Display,
    V: Clone,
{
    for (index, slot) in target.iter_mut().enumerate() {
        let key = key_of(slot, index).ok_or(AssignError::Key { index })?;
        let value = pools
            .draw_from(&key, policy, rng)
            .map_err(|source| AssignError::Draw { index, source })?;
        apply(slot, value, index).map_err(|source| AssignError::Set { index, source })?;
    }
    Ok(())
}
