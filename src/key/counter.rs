use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::key::Key;
use crate::permutation::permute;

/// Position of one block in a key's output stream.
///
/// A block is one application of the permutation and yields two words, so
/// word `w` of the stream lives in counter `w / 2`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Counter(u64);

impl Counter {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// The counter as the `(high, low)` input pair of the permutation.
    pub const fn words(self) -> (u32, u32) {
        ((self.0 >> 32) as u32, self.0 as u32)
    }

    /// Locates a stream word: its block counter and which half of the block.
    pub const fn for_word(word: u64) -> (Self, usize) {
        (Self(word / 2), (word % 2) as usize)
    }

    /// Evaluates this block of `key`'s stream.
    #[inline]
    pub fn block(self, key: Key) -> (u32, u32) {
        permute(key.words(), self.words())
    }
}

/// Checks that words `offset..offset + len` are addressable and returns the end.
pub(crate) fn word_span(offset: u64, len: u64) -> Result<u64> {
    offset
        .checked_add(len)
        .ok_or(Error::CounterExhausted { offset, len })
}
