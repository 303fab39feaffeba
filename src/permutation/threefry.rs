//! Threefry-2x32-20 block function.
//!
//! Constants follow the Random123 reference implementation. Changing any of
//! them changes every key and every bit the crate produces.

use crate::error::{Error, Result};

/// Number of mixing rounds.
pub const ROUNDS: usize = 20;

/// Rotation amounts, alternating per group of four rounds.
pub const ROTATIONS: [[u32; 4]; 2] = [[13, 15, 26, 6], [17, 29, 16, 24]];

/// Parity constant folded into the third key-schedule word.
///
/// This is the Skein/Threefish `C240` constant truncated to 32 bits.
pub const KS_PARITY: u32 = 0x1BD1_1BDA;

/// A key word is injected after every group of four rounds.
const GROUPS: usize = ROUNDS / 4;

/// Expands a two-word key into the three-word injection schedule.
#[inline(always)]
fn schedule(key: (u32, u32)) -> [u32; 3] {
    [key.0, key.1, key.0 ^ key.1 ^ KS_PARITY]
}

/// One Threefry round: add, rotate, XOR.
#[inline(always)]
fn mix(x0: &mut u32, x1: &mut u32, rotation: u32) {
    *x0 = x0.wrapping_add(*x1);
    *x1 = x1.rotate_left(rotation);
    *x1 ^= *x0;
}

/// Inverse of [`mix`].
#[inline(always)]
fn unmix(x0: &mut u32, x1: &mut u32, rotation: u32) {
    *x1 ^= *x0;
    *x1 = x1.rotate_right(rotation);
    *x0 = x0.wrapping_sub(*x1);
}

/// Applies the Threefry-2x32-20 permutation.
///
/// # Parameters
/// - `key`: the two key words `(high, low)` of a [`Key`](crate::Key)
/// - `input`: the two counter words `(high, low)`
///
/// # Returns
/// The permuted pair. For a fixed `key` distinct inputs always give
/// distinct outputs.
///
/// The function is branchless and total over all inputs.
#[inline]
pub fn permute(key: (u32, u32), input: (u32, u32)) -> (u32, u32) {
    let ks = schedule(key);

    let mut x0 = input.0.wrapping_add(ks[0]);
    let mut x1 = input.1.wrapping_add(ks[1]);

    for group in 0..GROUPS {
        for &rotation in &ROTATIONS[group % 2] {
            mix(&mut x0, &mut x1, rotation);
        }

        // Key injection, with the group number breaking symmetry
        x0 = x0.wrapping_add(ks[(group + 1) % 3]);
        x1 = x1
            .wrapping_add(ks[(group + 2) % 3])
            .wrapping_add(group as u32 + 1);
    }

    (x0, x1)
}

/// Inverts [`permute`] for the same key.
///
/// `unpermute(key, permute(key, x)) == x` for every `key` and `x`.
pub fn unpermute(key: (u32, u32), output: (u32, u32)) -> (u32, u32) {
    let ks = schedule(key);

    let (mut x0, mut x1) = output;

    for group in (0..GROUPS).rev() {
        x0 = x0.wrapping_sub(ks[(group + 1) % 3]);
        x1 = x1
            .wrapping_sub(ks[(group + 2) % 3])
            .wrapping_sub(group as u32 + 1);

        for &rotation in ROTATIONS[group % 2].iter().rev() {
            unmix(&mut x0, &mut x1, rotation);
        }
    }

    (x0.wrapping_sub(ks[0]), x1.wrapping_sub(ks[1]))
}

/// Permutes many input pairs in place.
///
/// Inputs are laid out as two parallel slices: `x0[i]` and `x1[i]` form the
/// `i`-th pair. Each pair is replaced by its image under `key`.
///
/// # Errors
/// [`Error::LengthMismatch`] if the slices differ in length. Nothing is
/// written in that case.
pub fn permute_batch(key: (u32, u32), x0: &mut [u32], x1: &mut [u32]) -> Result<()> {
    if x0.len() != x1.len() {
        return Err(Error::LengthMismatch {
            left: x0.len(),
            right: x1.len(),
        });
    }

    x0.iter_mut().zip(x1.iter_mut()).for_each(|(hi, lo)| {
        (*hi, *lo) = permute(key, (*hi, *lo));
    });

    Ok(())
}
