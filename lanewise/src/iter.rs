//! This module defines [BlockIterable] and [BlockIter].

use std::slice::ChunksExact;

use delegate::delegate;
use num::{Num, PrimInt};

use crate::block::Block;
use crate::datatypes::{BlockElement, ReductionIdentities};
use crate::reductions::{BitwiseReductions, NumericReductions, OrderedReductions};

pub mod padded;

pub use padded::PaddedBlockIter;

/// The block width used by [BlockIterable::blocks].
pub const DEFAULT_LANES: usize = 32;

/// Types whose contents can be traversed as a sequence of [Block]s.
///
/// Implemented for everything that dereferences to a slice of scalars,
/// in particular arrays, slices and vectors.
pub trait BlockIterable<T: BlockElement> {
    /// Returns a [BlockIter] of width [DEFAULT_LANES] over the contents.
    fn blocks(&self) -> BlockIter<'_, T, DEFAULT_LANES> {
        self.blocks_with_width::<DEFAULT_LANES>()
    }

    /// Returns a [BlockIter] of the given width over the contents.
    ///
    /// # Panics
    /// Panics if `LANES` is zero.
    fn blocks_with_width<const LANES: usize>(&self) -> BlockIter<'_, T, LANES>;
}

impl<T: BlockElement, S: AsRef<[T]> + ?Sized> BlockIterable<T> for S {
    fn blocks_with_width<const LANES: usize>(&self) -> BlockIter<'_, T, LANES> {
        BlockIter::new(self.as_ref())
    }
}

/// Iterator over the full blocks of a slice.
///
/// Scalars at the end of the slice that do not fill a whole block are not
/// yielded; they are available through [BlockIter::remainder] or, padded
/// with a fixed value, through [BlockIter::padded_with]. The `scalar_*`
/// reductions on this type always include the remainder.
#[derive(Debug, Clone)]
pub struct BlockIter<'a, T, const LANES: usize> {
    chunks: ChunksExact<'a, T>,
}

impl<'a, T: BlockElement, const LANES: usize> BlockIter<'a, T, LANES> {
    pub(crate) fn new(values: &'a [T]) -> Self {
        let chunks = values.chunks_exact(LANES);
        log::trace!(
            "split {} scalars into {} blocks of {} lanes each ({} scalars in the remainder)",
            values.len(),
            chunks.len(),
            LANES,
            chunks.remainder().len()
        );

        Self { chunks }
    }

    delegate! {
        to self.chunks {
            /// Returns the scalars at the end of the underlying slice that
            /// do not fill a whole block.
            pub fn remainder(&self) -> &'a [T];
        }
    }

    /// Wraps this iterator into a [PaddedBlockIter] that also yields the
    /// remainder, as a single block padded with `pad_value`.
    pub fn padded_with(self, pad_value: T) -> PaddedBlockIter<'a, T, LANES> {
        PaddedBlockIter::new(self, pad_value)
    }

    /// Returns the sum of all the scalars in the iterator, including the remainder.
    ///
    /// ```
    /// use lanewise::BlockIterable;
    /// assert_eq!(15., [1., 2., 3., 4., 5.].blocks().scalar_sum());
    /// ```
    pub fn scalar_sum(self) -> T
    where
        T: Num,
    {
        self.padded_with(T::zero()).scalar_sum()
    }

    /// Returns the product of all the scalars in the iterator, including the remainder.
    ///
    /// ```
    /// use lanewise::BlockIterable;
    /// assert_eq!(120., [1., 2., 3., 4., 5.].blocks().scalar_product());
    /// ```
    pub fn scalar_product(self) -> T
    where
        T: Num,
    {
        self.padded_with(T::one()).scalar_product()
    }

    /// Returns the min of all the scalars in the iterator, including the remainder.
    ///
    /// ```
    /// use lanewise::BlockIterable;
    /// assert_eq!(Some(-7), [-1, 1, -2, 3, -7, 5].blocks().scalar_min());
    /// ```
    pub fn scalar_min(self) -> Option<T>
    where
        T: PartialOrd + ReductionIdentities,
    {
        self.padded_with(T::min_identity()).scalar_min()
    }

    /// Returns the max of all the scalars in the iterator, including the remainder.
    ///
    /// ```
    /// use lanewise::BlockIterable;
    /// assert_eq!(Some(5), [-1, 1, -2, 3, -7, 5].blocks().scalar_max());
    /// ```
    pub fn scalar_max(self) -> Option<T>
    where
        T: PartialOrd + ReductionIdentities,
    {
        self.padded_with(T::max_identity()).scalar_max()
    }

    /// Returns the bit-wise AND (`&`) reduction of all the scalars in the
    /// iterator, including the remainder.
    ///
    /// ```
    /// use lanewise::BlockIterable;
    /// assert_eq!(Some(0b100), [0b111, 0b110, 0b101].blocks().scalar_reduce_and());
    /// ```
    pub fn scalar_reduce_and(self) -> Option<T>
    where
        T: PrimInt,
    {
        self.padded_with(!T::zero()).scalar_reduce_and()
    }

    /// Returns the bit-wise OR (`|`) reduction of all the scalars in the
    /// iterator, including the remainder.
    ///
    /// ```
    /// use lanewise::BlockIterable;
    /// assert_eq!(Some(0b110), [0b000, 0b110, 0b100].blocks().scalar_reduce_or());
    /// ```
    pub fn scalar_reduce_or(self) -> Option<T>
    where
        T: PrimInt,
    {
        self.padded_with(T::zero()).scalar_reduce_or()
    }

    /// Returns the bit-wise XOR (`^`) reduction of all the scalars in the
    /// iterator, including the remainder.
    ///
    /// ```
    /// use lanewise::BlockIterable;
    /// assert_eq!(Some(0b100), [0b111, 0b110, 0b101].blocks().scalar_reduce_xor());
    /// ```
    pub fn scalar_reduce_xor(self) -> Option<T>
    where
        T: PrimInt,
    {
        self.padded_with(T::zero()).scalar_reduce_xor()
    }
}

impl<T: BlockElement, const LANES: usize> Iterator for BlockIter<'_, T, LANES> {
    type Item = Block<T, LANES>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(Block::from_slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }

    fn count(self) -> usize {
        self.chunks.count()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.chunks.nth(n).map(Block::from_slice)
    }
}

impl<T: BlockElement, const LANES: usize> DoubleEndedIterator for BlockIter<'_, T, LANES> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chunks.next_back().map(Block::from_slice)
    }
}

impl<T: BlockElement, const LANES: usize> ExactSizeIterator for BlockIter<'_, T, LANES> {}
