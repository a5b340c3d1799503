//! This module defines [OrderedBlock].

use std::array;

use crate::datatypes::BlockElement;

use super::Block;

/// A block of comparable scalars supporting lane-wise selection and
/// horizontal min/max reductions.
///
/// Float types do not implement `Ord` because of NaN values; the
/// operations here compare and select instead, which simply ignores the
/// NaN ordering problem. A NaN lane is only selected when the comparison
/// with it fails.
pub trait OrderedBlock: Sized {
    /// The scalar type of the block's lanes.
    type Scalar;

    /// Selects the smaller scalar of each lane pair.
    fn lanewise_min(self, other: Self) -> Self;

    /// Selects the greater scalar of each lane pair.
    fn lanewise_max(self, other: Self) -> Self;

    /// Folds all lanes of the block into their minimum.
    ///
    /// # Panics
    /// Panics if the block has zero lanes.
    fn reduce_min(self) -> Self::Scalar;

    /// Folds all lanes of the block into their maximum.
    ///
    /// # Panics
    /// Panics if the block has zero lanes.
    fn reduce_max(self) -> Self::Scalar;
}

impl<T, const LANES: usize> OrderedBlock for Block<T, LANES>
where
    T: BlockElement + PartialOrd,
{
    type Scalar = T;

    fn lanewise_min(self, other: Self) -> Self {
        Self(array::from_fn(|lane| {
            if other.0[lane] < self.0[lane] {
                other.0[lane]
            } else {
                self.0[lane]
            }
        }))
    }

    fn lanewise_max(self, other: Self) -> Self {
        Self(array::from_fn(|lane| {
            if other.0[lane] > self.0[lane] {
                other.0[lane]
            } else {
                self.0[lane]
            }
        }))
    }

    fn reduce_min(self) -> T {
        let mut minimum = self.0[0];
        for &lane in &self.0[1..] {
            if lane < minimum {
                minimum = lane;
            }
        }

        minimum
    }

    fn reduce_max(self) -> T {
        let mut maximum = self.0[0];
        for &lane in &self.0[1..] {
            if lane > maximum {
                maximum = lane;
            }
        }

        maximum
    }
}
