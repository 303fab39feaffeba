#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dimensions of a requested output.
///
/// Generation itself is always flat; a shape only determines how many words
/// to produce. Laying the words out along the dimensions is left to the
/// caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    pub fn new(dims: impl IntoIterator<Item = usize>) -> Self {
        Self {
            dims: dims.into_iter().collect(),
        }
    }

    /// A rank-0 shape holding a single element.
    pub fn scalar() -> Self {
        Self::default()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Number of elements, the product of all dimensions.
    ///
    /// # Errors
    /// [`Error::InvalidShape`] if the product does not fit in a `u64`.
    pub fn count(&self) -> Result<u64> {
        self.dims.iter().try_fold(1u64, |acc, &dim| {
            u64::try_from(dim)
                .ok()
                .and_then(|dim| acc.checked_mul(dim))
                .ok_or_else(|| {
                    Error::InvalidShape(format!("element count of {:?} overflows", self.dims))
                })
        })
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self { dims }
    }
}

impl TryFrom<&[i64]> for Shape {
    type Error = Error;

    /// Accepts signed dimensions as produced by array front ends.
    fn try_from(dims: &[i64]) -> std::result::Result<Self, Self::Error> {
        let dims = dims
            .iter()
            .enumerate()
            .map(|(axis, &dim)| {
                usize::try_from(dim).map_err(|_| {
                    Error::InvalidShape(format!("dimension {dim} at axis {axis} is not a valid size"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { dims })
    }
}
