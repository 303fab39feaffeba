//! Error type shared by every fallible operation of the crate.
//!
//! All failures are input-validation failures or requests that fall outside
//! the addressable counter range. None of them is transient: retrying the
//! same call with the same arguments always fails the same way.

/// Errors returned by key derivation and bit generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Requested word count is larger than the configured or addressable maximum.
    #[error("invalid count: {count} words requested, at most {max} allowed")]
    InvalidCount {
        /// Number of words requested.
        count: u64,
        /// Largest count accepted for this request.
        max: u64,
    },

    /// Shape has a negative dimension or its element count overflows.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// `split` was asked for zero keys.
    #[error("split count must be at least 1")]
    InvalidSplitCount,

    /// Raw key data did not contain exactly two words.
    #[error("invalid key data: expected 2 words, got {len}")]
    InvalidKeyData {
        /// Number of words provided.
        len: usize,
    },

    /// Parallel word slices passed to a batched permutation differ in length.
    #[error("length mismatch: {left} high words vs {right} low words")]
    LengthMismatch {
        /// Length of the first slice.
        left: usize,
        /// Length of the second slice.
        right: usize,
    },

    /// Generation parameters failed validation.
    #[error("invalid parameters: {0}")]
    InvalidParams(&'static str),

    /// Request reaches past the last addressable word of the stream.
    #[error("counter range exhausted: {len} words at offset {offset}")]
    CounterExhausted {
        /// First word index requested.
        offset: u64,
        /// Number of words requested.
        len: u64,
    },
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
