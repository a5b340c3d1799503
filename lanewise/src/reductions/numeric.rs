//! This module defines [NumericReductions].

use std::ops::{Add, Mul};

use num::Num;

use crate::block::{Block, NumericBlock};
use crate::datatypes::BlockElement;

/// An extension trait for iterators over blocks of numeric scalars.
pub trait NumericReductions {
    /// The scalar type of the iterated blocks.
    type Scalar;

    /// Returns the sum of all the scalars in the iterator.
    ///
    /// ```
    /// use lanewise::{BlockIterable, NumericReductions};
    /// assert_eq!(15., [1., 2., 3., 4., 5.].blocks().padded_with(0.).scalar_sum());
    /// ```
    fn scalar_sum(self) -> Self::Scalar;

    /// Returns the product of all the scalars in the iterator.
    ///
    /// ```
    /// use lanewise::{BlockIterable, NumericReductions};
    /// assert_eq!(120., [1., 2., 3., 4., 5.].blocks().padded_with(1.).scalar_product());
    /// ```
    fn scalar_product(self) -> Self::Scalar;
}

impl<I, T, const LANES: usize> NumericReductions for I
where
    I: Iterator<Item = Block<T, LANES>>,
    T: BlockElement + Num,
{
    type Scalar = T;

    fn scalar_sum(self) -> T {
        self.reduce(Add::add)
            .map(NumericBlock::reduce_sum)
            .unwrap_or_else(T::zero)
    }

    fn scalar_product(self) -> T {
        self.reduce(Mul::mul)
            .map(NumericBlock::reduce_product)
            .unwrap_or_else(T::one)
    }
}
