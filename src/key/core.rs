use std::fmt::{Display, Formatter};

use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Immutable generator key.
///
/// A key is two 32-bit words, `(high, low)`. It carries no position and no
/// hidden state: every bit derived from it is a pure function of the key
/// and a counter.
///
/// Keys are only independent when they come from distinct derivations
/// (see [`split`](crate::split) and [`fold_in`](crate::fold_in)). Feeding
/// the same key to two consumers that expect unrelated randomness is a
/// caller error which is not detected.
///
/// The wire form is the two words in `(high, low)` order; with the `serde`
/// feature a key serializes as `[high, low]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[u32; 2]", into = "[u32; 2]"))]
#[repr(C)]
pub struct Key {
    hi: u32,
    lo: u32,
}

impl Key {
    /// Builds a key from its raw words.
    pub const fn from_words(hi: u32, lo: u32) -> Self {
        Self { hi, lo }
    }

    /// Builds a root key from an integer seed.
    ///
    /// Equivalent to [`seed_to_key`].
    pub fn from_seed(seed: impl Into<Seed>) -> Self {
        seed_to_key(seed)
    }

    /// The key words as `(high, low)`, the form the permutation consumes.
    pub const fn words(&self) -> (u32, u32) {
        (self.hi, self.lo)
    }

    pub const fn to_words(&self) -> [u32; 2] {
        [self.hi, self.lo]
    }

    pub const fn high(&self) -> u32 {
        self.hi
    }

    pub const fn low(&self) -> u32 {
        self.lo
    }

    /// Serializes the key as 8 bytes: high word then low word, each big-endian.
    pub fn to_be_bytes(&self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[..4].copy_from_slice(&self.hi.to_be_bytes());
        out[4..].copy_from_slice(&self.lo.to_be_bytes());

        out
    }

    /// Inverse of [`Key::to_be_bytes`].
    pub fn from_be_bytes(bytes: [u8; 8]) -> Self {
        let [a, b, c, d, e, f, g, h] = bytes;

        Self {
            hi: u32::from_be_bytes([a, b, c, d]),
            lo: u32::from_be_bytes([e, f, g, h]),
        }
    }
}

impl From<[u32; 2]> for Key {
    fn from(words: [u32; 2]) -> Self {
        Self::from_words(words[0], words[1])
    }
}

impl From<Key> for [u32; 2] {
    fn from(key: Key) -> Self {
        key.to_words()
    }
}

impl TryFrom<&[u32]> for Key {
    type Error = Error;

    /// Wraps raw key data produced elsewhere, e.g. read back from storage.
    fn try_from(words: &[u32]) -> Result<Self, Self::Error> {
        match words {
            [hi, lo] => Ok(Self::from_words(*hi, *lo)),
            _ => Err(Error::InvalidKeyData { len: words.len() }),
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08x}:{:08x}", self.hi, self.lo)
    }
}

/// Integer seed accepted by [`seed_to_key`].
///
/// Signed seeds are reinterpreted bit for bit. A 32-bit seed keeps its
/// 32-bit pattern and is zero-extended, so `-1i32` and `u32::MAX` seed the
/// same key while `-1i64` sets both words.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Seed(u64);

impl Seed {
    pub const fn bits(self) -> u64 {
        self.0
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        Self(seed)
    }
}

impl From<i64> for Seed {
    fn from(seed: i64) -> Self {
        Self(seed as u64)
    }
}

impl From<u32> for Seed {
    fn from(seed: u32) -> Self {
        Self(u64::from(seed))
    }
}

impl From<i32> for Seed {
    fn from(seed: i32) -> Self {
        Self(u64::from(seed as u32))
    }
}

/// Creates the root key for an integer seed.
///
/// The high word holds bits 32..64 of the seed and the low word bits 0..32,
/// so any seed below 2^32 produces `(0, seed)`.
pub fn seed_to_key(seed: impl Into<Seed>) -> Key {
    let bits = seed.into().bits();

    Key::from_words((bits >> 32) as u32, bits as u32)
}
