use tracing::trace;

use crate::error::{Error, Result};
use crate::key::{Counter, Key};

/// Derives `n` keys from `key`.
///
/// Key `i` is the permutation of counter `i` under `key`, so the result is
/// fully determined by `(key, n)` and always in the same order.
///
/// Callers must not assume that `split(key, n)[..m]` equals
/// `split(key, m)`; prefix compatibility between counts is not guaranteed.
///
/// # Errors
/// [`Error::InvalidSplitCount`] if `n` is zero.
pub fn split(key: Key, n: u32) -> Result<Vec<Key>> {
    if n == 0 {
        return Err(Error::InvalidSplitCount);
    }

    trace!(%key, n, "splitting key");

    let keys = (0..u64::from(n))
        .map(|i| {
            let (hi, lo) = Counter::new(i).block(key);
            Key::from_words(hi, lo)
        })
        .collect();

    Ok(keys)
}

/// Derives two keys from `key`.
///
/// Same as `split(key, 2)`, returned as a pair.
pub fn split_pair(key: Key) -> (Key, Key) {
    trace!(%key, "splitting key in two");

    let (a0, a1) = Counter::new(0).block(key);
    let (b0, b1) = Counter::new(1).block(key);

    (Key::from_words(a0, a1), Key::from_words(b0, b1))
}
