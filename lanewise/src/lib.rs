//! This crate implements block-wise traversal of slices of primitive
//! numeric types. A slice is split into fixed-width blocks of scalars,
//! represented as plain arrays that the optimizer can vectorize, plus a
//! remainder of scalars that do not fill a whole block. Iterators over
//! blocks support horizontal reductions that fold every scalar of the
//! underlying slice, including the remainder, into a single value.
//!
//! ```
//! use lanewise::BlockIterable;
//!
//! assert_eq!(15., [1., 2., 3., 4., 5.].blocks().scalar_sum());
//! assert_eq!(Some(-7), [-1, 1, -2, 3, -7, 5].blocks().scalar_min());
//! ```

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

pub mod block;
pub mod datatypes;
pub mod error;
pub mod iter;
pub mod reductions;

pub use crate::block::{BitwiseBlock, Block, NumericBlock, OrderedBlock};
pub use crate::datatypes::{BlockElement, ReductionIdentities};
pub use crate::error::Error;
pub use crate::iter::{BlockIter, BlockIterable, PaddedBlockIter, DEFAULT_LANES};
pub use crate::reductions::{BitwiseReductions, NumericReductions, OrderedReductions};
