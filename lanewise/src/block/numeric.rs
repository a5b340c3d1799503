//! This module defines [NumericBlock].

use std::ops::{Add, Mul};

use num::Num;

use crate::datatypes::BlockElement;

use super::Block;

/// A block of numeric scalars supporting horizontal sum and product.
pub trait NumericBlock: Add<Output = Self> + Mul<Output = Self> + Sized {
    /// The scalar type of the block's lanes.
    type Scalar;

    /// Folds all lanes of the block into their sum.
    fn reduce_sum(self) -> Self::Scalar;

    /// Folds all lanes of the block into their product.
    fn reduce_product(self) -> Self::Scalar;
}

impl<T, const LANES: usize> NumericBlock for Block<T, LANES>
where
    T: BlockElement + Num,
{
    type Scalar = T;

    fn reduce_sum(self) -> T {
        self.0.into_iter().fold(T::zero(), |sum, lane| sum + lane)
    }

    fn reduce_product(self) -> T {
        self.0
            .into_iter()
            .fold(T::one(), |product, lane| product * lane)
    }
}
