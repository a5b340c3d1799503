//! This module defines [PaddedBlockIter].

use delegate::delegate;

use crate::block::Block;
use crate::datatypes::BlockElement;

use super::BlockIter;

/// Iterator over all blocks of a slice.
///
/// Yields the full blocks of the underlying [BlockIter] followed by a
/// single block assembled from the remainder, with the missing lanes
/// filled by a fixed padding value. No final block is yielded when the
/// remainder is empty, so an iterator over an empty slice yields nothing.
#[derive(Debug, Clone)]
pub struct PaddedBlockIter<'a, T, const LANES: usize> {
    inner: BlockIter<'a, T, LANES>,
    pad_value: T,
    remainder_exhausted: bool,
}

impl<'a, T: BlockElement, const LANES: usize> PaddedBlockIter<'a, T, LANES> {
    pub(crate) fn new(inner: BlockIter<'a, T, LANES>, pad_value: T) -> Self {
        Self {
            inner,
            pad_value,
            remainder_exhausted: false,
        }
    }

    /// Returns the value the final partial block is padded with.
    pub fn pad_value(&self) -> T {
        self.pad_value
    }

    delegate! {
        to self.inner {
            /// Returns the scalars at the end of the underlying slice that
            /// do not fill a whole block.
            pub fn remainder(&self) -> &'a [T];
        }
    }
}

impl<T: BlockElement, const LANES: usize> Iterator for PaddedBlockIter<'_, T, LANES> {
    type Item = Block<T, LANES>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(block) = self.inner.next() {
            return Some(block);
        }

        if self.remainder_exhausted {
            return None;
        }
        self.remainder_exhausted = true;

        let remainder = self.inner.remainder();
        (!remainder.is_empty()).then(|| Block::from_slice_padded(remainder, self.pad_value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner.len()
            + (!self.remainder_exhausted && !self.inner.remainder().is_empty()) as usize;
        (remaining, Some(remaining))
    }
}

impl<T: BlockElement, const LANES: usize> ExactSizeIterator for PaddedBlockIter<'_, T, LANES> {}

#[cfg(test)]
mod test {
    use crate::block::Block;
    use crate::iter::BlockIterable;
    use test_log::test;

    #[test]
    fn padded_iteration_appends_one_padded_block() {
        let values = [1u32, 2, 3, 4, 5, 6];
        let mut iter = values.blocks_with_width::<4>().padded_with(0);
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(Block::from([1, 2, 3, 4])));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(Block::from([5, 6, 0, 0])));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn padded_iteration_without_remainder() {
        let values = [1u32, 2, 3, 4];
        let mut iter = values.blocks_with_width::<4>().padded_with(9);
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(Block::from([1, 2, 3, 4])));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn padded_iteration_over_an_empty_slice() {
        let values: [i32; 0] = [];
        let mut iter = values.blocks_with_width::<4>().padded_with(1);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn pad_value_and_remainder_accessors() {
        let values = [1u32, 2, 3];
        let iter = values.blocks_with_width::<2>().padded_with(7);
        assert_eq!(iter.pad_value(), 7);
        assert_eq!(iter.remainder(), &[3]);
    }
}
