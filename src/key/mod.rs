//! Generator keys and stream counters
//!
//! A [`Key`] is the whole state of a generator: two 32-bit words, immutable
//! and freely copyable. Every operation that needs randomness receives a
//! key explicitly and returns new keys instead of mutating it.
//!
//! A [`Counter`] addresses one block of a key's output stream. Counters are
//! never stored in a key; they exist only while bits are being generated.
//!
//! ## Seeding
//!
//! [`seed_to_key`] is the only way to create a root key from outside data.
//! The rule is fixed so that the same seed yields the same root key in
//! every implementation:
//!
//! - high word: bits 32..64 of the seed (zero for any 32-bit seed)
//! - low word: bits 0..32 of the seed

mod core;
mod counter;

pub use self::core::{Key, Seed, seed_to_key};
pub use counter::Counter;
pub(crate) use counter::word_span;
