use tracing::debug;

use super::params::BitsParams;
use super::shape::Shape;
use crate::error::{Error, Result};
use crate::key::{Counter, Key, word_span};

/// Generates `count` pseudorandom words from `key`.
///
/// Word `2c` and `2c + 1` of the output are the two halves of the
/// permutation of counter `c` under `key`. The result depends only on
/// `(key, count)`: shaping it, or computing it in another order or on
/// several threads, never changes it.
///
/// # Errors
/// [`Error::InvalidCount`] if `count` exceeds [`BitsParams::max_words`] of
/// the default parameters.
pub fn random_bits(key: Key, count: u64) -> Result<Vec<u32>> {
    generate(key, 0, count, &BitsParams::default())
}

/// Same as [`random_bits`] with explicit parameters.
///
/// # Errors
/// [`Error::InvalidParams`] if `params` is invalid, otherwise as
/// [`random_bits`] against `params.max_words`.
pub fn random_bits_with(key: Key, count: u64, params: &BitsParams) -> Result<Vec<u32>> {
    params.validate()?;

    generate(key, 0, count, params)
}

/// Generates stream words `offset..offset + count` of `key`.
///
/// The result equals the matching window of
/// `random_bits(key, offset + count)` without computing the words before
/// `offset`.
///
/// # Errors
/// [`Error::CounterExhausted`] if the window runs past the end of the
/// stream, [`Error::InvalidCount`] if `count` is too large.
pub fn random_bits_at(key: Key, offset: u64, count: u64) -> Result<Vec<u32>> {
    generate(key, offset, count, &BitsParams::default())
}

/// Generates one word per element of `shape`, flattened in row-major order.
///
/// # Errors
/// [`Error::InvalidShape`] if the element count of `shape` overflows,
/// [`Error::InvalidCount`] if it exceeds [`BitsParams::max_words`] of the
/// default parameters.
pub fn random_bits_shaped(key: Key, shape: &Shape) -> Result<Vec<u32>> {
    random_bits(key, shape.count()?)
}

/// Fills `out` with stream words `offset..offset + out.len()` of `key`.
///
/// This is the allocation-free form of [`random_bits_at`].
///
/// # Errors
/// [`Error::CounterExhausted`] if the window runs past the end of the
/// stream. `out` is left untouched in that case.
pub fn fill_random_bits(key: Key, offset: u64, out: &mut [u32]) -> Result<()> {
    word_span(offset, out.len() as u64)?;

    fill(key, offset, out, &BitsParams::default());

    Ok(())
}

/// Generates `count` 64-bit values.
///
/// Value `i` is built from stream words `2i` (high half) and `2i + 1`
/// (low half), i.e. from one whole permutation block.
///
/// # Errors
/// [`Error::InvalidCount`] if `count` exceeds half of
/// [`BitsParams::max_words`] of the default parameters. Both `count` and
/// `max` in the error are in 64-bit values.
pub fn random_bits_u64(key: Key, count: u64) -> Result<Vec<u64>> {
    let params = BitsParams::default();
    let max = params.max_words / 2;

    if count > max {
        return Err(Error::InvalidCount { count, max });
    }

    let bits = generate(key, 0, count * 2, &params)?;

    Ok(bits
        .chunks_exact(2)
        .map(|pair| (u64::from(pair[0]) << 32) | u64::from(pair[1]))
        .collect())
}

/// Generates `len` pseudorandom bytes.
///
/// The bytes are the stream words in little-endian order, truncated to
/// `len`.
pub fn random_bytes(key: Key, len: usize) -> Result<Vec<u8>> {
    let words = len.div_ceil(size_of::<u32>()) as u64;
    let bits = random_bits(key, words)?;

    let mut out: Vec<u8> = bits.iter().flat_map(|word| word.to_le_bytes()).collect();
    out.truncate(len);

    Ok(out)
}

fn generate(key: Key, offset: u64, count: u64, params: &BitsParams) -> Result<Vec<u32>> {
    if count > params.max_words {
        return Err(Error::InvalidCount {
            count,
            max: params.max_words,
        });
    }

    word_span(offset, count)?;

    let len = usize::try_from(count).map_err(|_| Error::InvalidCount {
        count,
        max: usize::MAX as u64,
    })?;

    let mut out = vec![0u32; len];
    fill(key, offset, &mut out, params);

    Ok(out)
}

#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
fn fill(key: Key, offset: u64, out: &mut [u32], params: &BitsParams) {
    #[cfg(feature = "parallel")]
    {
        if out.len() >= params.parallel_threshold {
            debug!(%key, offset, len = out.len(), "generating random bits in parallel");
            super::parallel::fill_words_par(key, offset, out, params.chunk_words);

            return;
        }
    }

    debug!(%key, offset, len = out.len(), "generating random bits");
    fill_words(key, offset, out);
}

/// Sequential fill of stream words `offset..offset + out.len()`.
///
/// The caller has already checked the window with [`word_span`].
pub(crate) fn fill_words(key: Key, offset: u64, out: &mut [u32]) {
    let (counter, half) = Counter::for_word(offset);

    // An odd offset starts in the second half of a block
    let skip = half.min(out.len());
    let (head, body) = out.split_at_mut(skip);

    if let Some(first) = head.first_mut() {
        *first = counter.block(key).1;
    }

    let start = counter.value() + skip as u64;

    for (chunk, value) in body.chunks_mut(2).zip(start..) {
        let (x0, x1) = Counter::new(value).block(key);

        chunk[0] = x0;
        if let Some(slot) = chunk.get_mut(1) {
            *slot = x1;
        }
    }
}
