//! rnd_core — Core types, draw policy, canonical keys, and deterministic RNG.
//!
//! This crate is **I/O-free**. It defines the stable foundation used across
//! the toolkit (`rnd_pool`, `rnd_assign`):
//!
//! - Error taxonomy: `DrawError`
//! - Draw policy: `DrawPolicy` (consumable / regenerate)
//! - Canonical comparison keys and order-preserving dedup
//! - Seedable RNG (ChaCha20) with per-pick audit crumbs
//!
//! Serialization derives are gated behind the `serde` feature; dynamic
//! JSON record values behind `json`.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod dedup;
pub mod errors;
pub mod key;
pub mod policy;
pub mod rng;

pub use dedup::dedupe;
pub use errors::DrawError;
pub use key::CanonicalKey;
pub use policy::DrawPolicy;
pub use rng::{DrawCrumb, DrawRng};
