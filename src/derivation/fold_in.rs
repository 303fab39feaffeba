use tracing::trace;

use crate::key::{Key, seed_to_key};
use crate::permutation::permute;

/// Mixes `data` into `key`, producing a new key.
///
/// `data` is packed the same way a 32-bit seed is, `(0, data)`, and
/// permuted under `key`. For a fixed `key` distinct `data` values always
/// give distinct keys, and `fold_in(key, 0)` differs from `key`.
///
/// The packing shares its counter range with [`split`](crate::split):
/// `fold_in(key, i)` equals `split(key, n)[i]`. Use one or the other on a
/// given key.
pub fn fold_in(key: Key, data: u32) -> Key {
    trace!(%key, data, "folding data into key");

    let (hi, lo) = permute(key.words(), seed_to_key(data).words());

    Key::from_words(hi, lo)
}
