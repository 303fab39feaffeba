//! Bit generation
//!
//! Turns a key into an arbitrarily long stream of pseudorandom 32-bit
//! words. The stream is indexed, not iterated: word `w` is the half
//! `w % 2` of the permutation of counter `w / 2` under the key. There is no
//! cursor, so any window of the stream can be computed directly and any set
//! of positions can be computed in any order.
//!
//! With the `parallel` feature, large requests are split into chunks and
//! evaluated on the rayon thread pool. The output is bit-identical to the
//! sequential path.
//!
//! The stream is addressable for word indices `0..u64::MAX`; a request
//! beyond that fails with [`Error::CounterExhausted`](crate::Error).
//!
//! Only raw words (and byte/u64 views of them) are produced here. Turning
//! them into floats or samples from a distribution is left to callers.

mod core;
#[cfg(feature = "parallel")]
mod parallel;
mod params;
mod shape;

pub use self::core::{
    fill_random_bits, random_bits, random_bits_at, random_bits_shaped, random_bits_u64,
    random_bits_with, random_bytes,
};
pub use params::{BitsParams, MAX_WORDS};
pub use shape::Shape;
