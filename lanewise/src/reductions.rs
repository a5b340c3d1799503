//! This module defines the horizontal reduction traits for iterators
//! over [Block][crate::block::Block]s.
//!
//! The traits are implemented for every iterator yielding blocks, which
//! includes `zip`/`map` pipelines over several slices. Reductions fold
//! exactly the blocks the iterator yields; padding a remainder is the
//! concern of [BlockIter][crate::iter::BlockIter].

pub mod bitwise;
pub mod numeric;
pub mod ordered;

pub use bitwise::BitwiseReductions;
pub use numeric::NumericReductions;
pub use ordered::OrderedReductions;
