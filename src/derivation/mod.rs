//! Key derivation
//!
//! New keys are produced from existing ones in two ways:
//!
//! - [`split`]
//!   Derive `n` keys at once. Key `i` is the permutation of counter `i`
//!   under the parent key.
//!
//! - [`fold_in`]
//!   Derive one key by mixing an integer (a loop index, a worker id, a step
//!   number) into the parent key. Cheaper than a split when only one child
//!   per datum is needed.
//!
//! Both are specializations of bit generation over a small counter range.
//! They read the parent key and never modify it; the parent stays a valid
//! value, but using it again for bits or for another derivation over the
//! same counters gives correlated results. Avoiding that is the caller's
//! job.

mod fold_in;
mod split;

pub use fold_in::fold_in;
pub use split::{split, split_pair};
