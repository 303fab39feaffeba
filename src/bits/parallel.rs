//! Data-parallel bit generation on the rayon thread pool.

use rayon::prelude::*;

use super::core::fill_words;
use crate::key::Key;

/// Fills `out` in chunks of `chunk_words`, one rayon task per chunk.
///
/// Each chunk computes its own counters from its position in `out`, so
/// the result is identical to [`fill_words`] over the whole slice.
pub(crate) fn fill_words_par(key: Key, offset: u64, out: &mut [u32], chunk_words: usize) {
    out.par_chunks_mut(chunk_words)
        .enumerate()
        .for_each(|(index, chunk)| {
            let start = offset + (index * chunk_words) as u64;
            fill_words(key, start, chunk);
        });
}
