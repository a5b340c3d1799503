//! This module defines [BitwiseBlock].

use std::ops::{BitAnd, BitOr, BitXor};

use num::PrimInt;

use crate::datatypes::BlockElement;

use super::Block;

/// A block of integer scalars supporting horizontal bit-wise reductions.
pub trait BitwiseBlock:
    BitAnd<Output = Self> + BitOr<Output = Self> + BitXor<Output = Self> + Sized
{
    /// The scalar type of the block's lanes.
    type Scalar;

    /// Folds all lanes of the block into their bit-wise AND (`&`).
    fn reduce_and(self) -> Self::Scalar;

    /// Folds all lanes of the block into their bit-wise OR (`|`).
    fn reduce_or(self) -> Self::Scalar;

    /// Folds all lanes of the block into their bit-wise XOR (`^`).
    fn reduce_xor(self) -> Self::Scalar;
}

impl<T, const LANES: usize> BitwiseBlock for Block<T, LANES>
where
    T: BlockElement + PrimInt,
{
    type Scalar = T;

    fn reduce_and(self) -> T {
        self.0.into_iter().fold(!T::zero(), |bits, lane| bits & lane)
    }

    fn reduce_or(self) -> T {
        self.0.into_iter().fold(T::zero(), |bits, lane| bits | lane)
    }

    fn reduce_xor(self) -> T {
        self.0.into_iter().fold(T::zero(), |bits, lane| bits ^ lane)
    }
}
