//! Stateless, splittable pseudorandom bit generation
//!
//! This crate provides explicit-key randomness: there is no global or
//! hidden generator state. A generator is a [`Key`], an immutable pair of
//! 32-bit words. Randomness is derived from a key by a counter-based keyed
//! permutation, and new keys are derived from old ones functionally.
//!
//! The result is reproducible (same key, same bits, on every platform) and
//! parallel-safe (any number of threads may derive from or generate with
//! any keys, with no coordination).
//!
//! # Module overview
//!
//! - `permutation`
//!   The Threefry-2x32-20 block function, its inverse, and a batched form.
//!   Every other component is built on it.
//!
//! - `key`
//!   The [`Key`] type, the canonical seeding rule ([`seed_to_key`]) and the
//!   [`Counter`] encoding used to address a key's output stream.
//!
//! - `derivation`
//!   [`split`] and [`fold_in`], which derive new keys from a key.
//!
//! - `bits`
//!   [`random_bits`] and its variants: flat streams of raw 32-bit words,
//!   addressable by position and optionally filled in parallel.
//!
//! # Usage discipline
//!
//! A key must be consumed exactly once. Either generate bits from it, or
//! derive children from it, but not both and not twice: two consumers
//! given the same key receive correlated randomness. This is not checked
//! at runtime.
//!
//! ```
//! use splitrand::{fold_in, random_bits, seed_to_key, split};
//!
//! let root = seed_to_key(42);
//! let keys = split(root, 3).unwrap();
//!
//! let noise = random_bits(keys[0], 16).unwrap();
//! assert_eq!(noise.len(), 16);
//!
//! for step in 0..4u32 {
//!     let _step_key = fold_in(keys[1], step);
//! }
//! ```
//!
//! # Design goals
//!
//! - Pure functions over `Copy` values, no interior state
//! - Bit-exact output fixed by the published Threefry-2x32-20 constants
//! - Minimal and explicit APIs
//!
//! Threefry is not a cryptographic primitive. Do not use these keys or
//! bits for secrets.

pub mod bits;
pub mod derivation;
mod error;
pub mod key;
pub mod permutation;

pub use bits::{
    BitsParams, Shape, fill_random_bits, random_bits, random_bits_at, random_bits_shaped,
    random_bits_u64, random_bits_with, random_bytes,
};
pub use derivation::{fold_in, split, split_pair};
pub use error::{Error, Result};
pub use key::{Counter, Key, Seed, seed_to_key};
pub use permutation::{permute, permute_batch, unpermute};
