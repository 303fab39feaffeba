//! Parameters for bit generation.
//!
//! These control how large a single request may be and when generation is
//! spread across threads. They never change the generated values: the same
//! key and count produce the same words under any valid parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest word count a single request can address in memory.
pub const MAX_WORDS: u64 = (isize::MAX as u64) / (size_of::<u32>() as u64);

/// Configuration for [`random_bits_with`](crate::random_bits_with).
///
/// # Defaults
///
/// - `max_words`: [`MAX_WORDS`]
/// - `parallel_threshold`: 65536 words
/// - `chunk_words`: 4096 words
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BitsParams {
    /// Upper bound on the number of words in one request (1..=`MAX_WORDS`).
    pub max_words: u64,
    /// Requests of at least this many words are filled in parallel when the
    /// `parallel` feature is enabled (minimum 1).
    pub parallel_threshold: usize,
    /// Words per parallel work item (non-zero, even).
    pub chunk_words: usize,
}

impl BitsParams {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_words < 1 {
            return Err(Error::InvalidParams("max_words must be at least 1"));
        }

        if self.max_words > MAX_WORDS {
            return Err(Error::InvalidParams("max_words exceeds addressable memory"));
        }

        if self.parallel_threshold < 1 {
            return Err(Error::InvalidParams("parallel_threshold must be at least 1"));
        }

        // Even chunks keep every chunk aligned on a block boundary
        if self.chunk_words == 0 || self.chunk_words % 2 != 0 {
            return Err(Error::InvalidParams("chunk_words must be a non-zero even number"));
        }

        Ok(())
    }
}

impl Default for BitsParams {
    fn default() -> Self {
        Self {
            max_words: MAX_WORDS,
            parallel_threshold: 1 << 16,
            chunk_words: 1 << 12,
        }
    }
}
