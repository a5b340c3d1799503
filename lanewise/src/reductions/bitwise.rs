//! This module defines [BitwiseReductions].

use std::ops::{BitAnd, BitOr, BitXor};

use num::PrimInt;

use crate::block::{BitwiseBlock, Block};
use crate::datatypes::BlockElement;

/// An extension trait for iterators over blocks of integer scalars.
pub trait BitwiseReductions {
    /// The scalar type of the iterated blocks.
    type Scalar;

    /// Returns the bit-wise AND (`&`) reduction of all the scalars in the iterator.
    ///
    /// ```
    /// use lanewise::{BitwiseReductions, BlockIterable};
    /// let blocks = [0b111, 0b110, 0b101].blocks().padded_with(!0);
    /// assert_eq!(Some(0b100), blocks.scalar_reduce_and());
    /// ```
    fn scalar_reduce_and(self) -> Option<Self::Scalar>;

    /// Returns the bit-wise OR (`|`) reduction of all the scalars in the iterator.
    ///
    /// ```
    /// use lanewise::{BitwiseReductions, BlockIterable};
    /// let blocks = [0b000, 0b110, 0b100].blocks().padded_with(0);
    /// assert_eq!(Some(0b110), blocks.scalar_reduce_or());
    /// ```
    fn scalar_reduce_or(self) -> Option<Self::Scalar>;

    /// Returns the bit-wise XOR (`^`) reduction of all the scalars in the iterator.
    ///
    /// ```
    /// use lanewise::{BitwiseReductions, BlockIterable};
    /// let blocks = [0b111, 0b110, 0b101].blocks().padded_with(0);
    /// assert_eq!(Some(0b100), blocks.scalar_reduce_xor());
    /// ```
    fn scalar_reduce_xor(self) -> Option<Self::Scalar>;
}

impl<I, T, const LANES: usize> BitwiseReductions for I
where
    I: Iterator<Item = Block<T, LANES>>,
    T: BlockElement + PrimInt,
{
    type Scalar = T;

    fn scalar_reduce_and(self) -> Option<T> {
        self.reduce(BitAnd::bitand).map(BitwiseBlock::reduce_and)
    }

    fn scalar_reduce_or(self) -> Option<T> {
        self.reduce(BitOr::bitor).map(BitwiseBlock::reduce_or)
    }

    fn scalar_reduce_xor(self) -> Option<T> {
        self.reduce(BitXor::bitxor).map(BitwiseBlock::reduce_xor)
    }
}
