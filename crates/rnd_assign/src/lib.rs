// crates/rnd_assign/src/lib.rs
//! Assignment layer: applies randomized draws onto target sequences.
//!
//! The engine borrows a pool (or grouped pool), walks a caller-owned
//! target slice, and writes one drawn value per element through a
//! setter closure. Name-based accessors for JSON records live in
//! [`record`] (gated behind the `json` feature) and compile down to
//! the same closures.

#![forbid(unsafe_code)]

pub mod engine;
#[cfg(feature = "json")]
pub mod record;

pub use engine::{
    assign_grouped_replace, assign_grouped_with, assign_replace, assign_replace_from_slice,
    assign_with, AssignError, AssignResult,
};

// Re-export the vocabulary callers need alongside the engine.
pub use rnd_core::{DrawError, DrawPolicy, DrawRng};
pub use rnd_pool::{GroupedPool, Pool};
