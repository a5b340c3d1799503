//! This module defines [Block] along with its lane-wise operators and
//! horizontal reductions.

use std::ops::Index;

use crate::datatypes::BlockElement;
use crate::error::Error;

mod arithmetic;
pub mod bitwise;
pub mod numeric;
pub mod ordered;

pub use bitwise::BitwiseBlock;
pub use numeric::NumericBlock;
pub use ordered::OrderedBlock;

/// A fixed-width vector of `LANES` scalars.
///
/// Operators apply lane-wise and reductions fold all lanes into a single
/// scalar; both are written as simple loops over the underlying array so
/// that the optimizer can vectorize them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<T, const LANES: usize>([T; LANES]);

impl<T: BlockElement, const LANES: usize> Block<T, LANES> {
    /// Constructs a block with `value` in every lane.
    pub fn splat(value: T) -> Self {
        Self([value; LANES])
    }

    /// Constructs a block from a slice of exactly `LANES` scalars.
    ///
    /// # Panics
    /// Panics if the length of `values` differs from `LANES`.
    pub fn from_slice(values: &[T]) -> Self {
        let lanes = <&[T; LANES]>::try_from(values)
            .expect("the slice must contain exactly `LANES` scalars");
        Self(*lanes)
    }

    /// Constructs a block from at most `LANES` scalars, filling the
    /// missing lanes at the end with `pad_value`.
    ///
    /// # Panics
    /// Panics if the slice contains more than `LANES` scalars.
    pub fn from_slice_padded(values: &[T], pad_value: T) -> Self {
        assert!(
            values.len() <= LANES,
            "cannot pad a slice of more than `LANES` scalars"
        );

        let mut lanes = [pad_value; LANES];
        lanes[..values.len()].copy_from_slice(values);
        Self(lanes)
    }

    /// Returns a reference to the underlying array of lanes.
    pub fn as_array(&self) -> &[T; LANES] {
        &self.0
    }

    /// Returns the underlying array of lanes.
    pub fn to_array(self) -> [T; LANES] {
        self.0
    }
}

impl<T, const LANES: usize> From<[T; LANES]> for Block<T, LANES> {
    fn from(lanes: [T; LANES]) -> Self {
        Self(lanes)
    }
}

impl<T: BlockElement, const LANES: usize> TryFrom<&[T]> for Block<T, LANES> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        match <&[T; LANES]>::try_from(values) {
            Ok(lanes) => Ok(Self(*lanes)),
            Err(_) => Err(Error::BlockSizeMismatch {
                expected: LANES,
                actual: values.len(),
            }),
        }
    }
}

impl<T: BlockElement, const LANES: usize> Default for Block<T, LANES> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T, const LANES: usize> Index<usize> for Block<T, LANES> {
    type Output = T;

    fn index(&self, lane: usize) -> &Self::Output {
        &self.0[lane]
    }
}

#[cfg(test)]
mod test {
    use super::{BitwiseBlock, Block, NumericBlock, OrderedBlock};
    use crate::error::Error;
    use test_log::test;

    #[test]
    fn splat_fills_every_lane() {
        let block = Block::<u32, 4>::splat(7);
        assert_eq!(block.to_array(), [7, 7, 7, 7]);
    }

    #[test]
    fn from_slice_padded_fills_missing_lanes() {
        let block = Block::<i32, 4>::from_slice_padded(&[1, 2], -1);
        assert_eq!(block.to_array(), [1, 2, -1, -1]);
    }

    #[test]
    #[should_panic(expected = "cannot pad a slice")]
    fn from_slice_padded_rejects_oversized_slices() {
        let _ = Block::<i32, 2>::from_slice_padded(&[1, 2, 3], 0);
    }

    #[test]
    #[should_panic(expected = "must contain exactly")]
    fn from_slice_rejects_a_different_width() {
        let _ = Block::<i32, 4>::from_slice(&[1, 2]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn ordered_reductions_reject_zero_lanes() {
        let _ = Block::<i32, 0>::from([]).reduce_min();
    }

    #[test]
    fn try_from_checks_the_width() {
        let values = [1, 2, 3];
        assert_eq!(
            Block::<i32, 2>::try_from(&values[..2]),
            Ok(Block::from([1, 2]))
        );
        assert_eq!(
            Block::<i32, 2>::try_from(&values[..]),
            Err(Error::BlockSizeMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn lanewise_arithmetic_operators() {
        let a = Block::from([1, 2, 3, 4]);
        let b = Block::from([10, 20, 30, 40]);
        assert_eq!((a + b).to_array(), [11, 22, 33, 44]);
        assert_eq!((b - a).to_array(), [9, 18, 27, 36]);
        assert_eq!((a * b).to_array(), [10, 40, 90, 160]);
    }

    #[test]
    fn lanewise_bit_operators() {
        let a = Block::from([0b1100u8, 0b1010]);
        let b = Block::from([0b1010u8, 0b0110]);
        assert_eq!((a & b).to_array(), [0b1000, 0b0010]);
        assert_eq!((a | b).to_array(), [0b1110, 0b1110]);
        assert_eq!((a ^ b).to_array(), [0b0110, 0b1100]);
    }

    #[test]
    fn horizontal_numeric_reductions() {
        let block = Block::from([1.5, 2.0, -3.0, 4.0]);
        assert_eq!(block.reduce_sum(), 4.5);
        assert_eq!(block.reduce_product(), -36.0);
    }

    #[test]
    fn horizontal_ordered_reductions() {
        let block = Block::from([3, -7, 12, 0]);
        assert_eq!(block.reduce_min(), -7);
        assert_eq!(block.reduce_max(), 12);
    }

    #[test]
    fn horizontal_bitwise_reductions() {
        let block = Block::from([0b111u8, 0b110, 0b101, 0b111]);
        assert_eq!(block.reduce_and(), 0b100);
        assert_eq!(block.reduce_or(), 0b111);
        assert_eq!(block.reduce_xor(), 0b011);
    }

    #[test]
    fn lanewise_min_max_select_per_lane() {
        let a = Block::from([1, 5, 3, -2]);
        let b = Block::from([2, 4, 3, -7]);
        assert_eq!(a.lanewise_min(b).to_array(), [1, 4, 3, -7]);
        assert_eq!(a.lanewise_max(b).to_array(), [2, 5, 3, -2]);
    }
}
