//! This module defines [OrderedReductions].

use crate::block::{Block, OrderedBlock};
use crate::datatypes::BlockElement;

/// An extension trait for iterators over blocks of comparable scalars.
pub trait OrderedReductions {
    /// The scalar type of the iterated blocks.
    type Scalar;

    /// Returns the min of all the scalars in the iterator.
    ///
    /// ```
    /// use lanewise::{BlockIterable, OrderedReductions};
    /// let blocks = [-1, 1, -2, 3, -7, 5].blocks().padded_with(i32::MAX);
    /// assert_eq!(Some(-7), blocks.scalar_min());
    /// ```
    fn scalar_min(self) -> Option<Self::Scalar>;

    /// Returns the max of all the scalars in the iterator.
    ///
    /// ```
    /// use lanewise::{BlockIterable, OrderedReductions};
    /// let blocks = [-1, 1, -2, 3, -7, 5].blocks().padded_with(i32::MIN);
    /// assert_eq!(Some(5), blocks.scalar_max());
    /// ```
    fn scalar_max(self) -> Option<Self::Scalar>;
}

impl<I, T, const LANES: usize> OrderedReductions for I
where
    I: Iterator<Item = Block<T, LANES>>,
    T: BlockElement + PartialOrd,
{
    type Scalar = T;

    fn scalar_min(self) -> Option<T> {
        self.reduce(OrderedBlock::lanewise_min)
            .map(OrderedBlock::reduce_min)
    }

    fn scalar_max(self) -> Option<T> {
        self.reduce(OrderedBlock::lanewise_max)
            .map(OrderedBlock::reduce_max)
    }
}
