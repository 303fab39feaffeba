//! Keyed permutation primitive
//!
//! This module provides the Threefry-2x32 block function with 20 rounds,
//! the counter-mode permutation every other part of the crate is built on.
//!
//! Threefry was introduced in "Parallel Random Numbers: As Easy as 1, 2, 3"
//! (Salmon et al., 2011). It is a reduced Threefish: a key schedule of three
//! words and rounds of addition, rotation and XOR over a pair of 32-bit words.
//!
//! Properties relied upon by the rest of the crate:
//! - for a fixed key the function is a bijection over all 2^64 inputs
//! - fixed-width wrapping arithmetic only, so output is identical on every
//!   platform and under any evaluation order
//! - no state: each call depends only on its key and input
//!
//! Threefry is **not** a cryptographic primitive. It is a statistically
//! strong, fast mixing function for simulation and machine learning.

mod threefry;

pub use threefry::{KS_PARITY, ROTATIONS, ROUNDS, permute, permute_batch, unpermute};
