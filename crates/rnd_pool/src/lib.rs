// crates/rnd_pool/src/lib.rs
//! Selection layer: pools with consumption state, keyed pool groups,
//! and the builders that produce them from flat collections.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod builders;
pub mod grouped;
pub mod pool;

pub use builders::{grouped_by_key, grouped_from_items, pool_from_items};
pub use grouped::GroupedPool;
pub use pool::Pool;

// Re-export the core vocabulary so downstream callers can depend on a
// single crate for the common path.
pub use rnd_core::{dedupe, CanonicalKey, DrawCrumb, DrawError, DrawPolicy, DrawRng};
