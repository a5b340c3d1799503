//! Error-handling module for the crate

use thiserror::Error;

/// Error-collection for all the possible errors occurring in this crate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A slice was converted into a block of a different width
    #[error("cannot build a block of {expected} lanes from a slice of {actual} scalars")]
    BlockSizeMismatch {
        /// Width of the target block
        expected: usize,
        /// Length of the provided slice
        actual: usize,
    },
}

#[cfg(test)]
mod test {
    use super::Error;
    use test_log::test;

    #[test]
    fn block_size_mismatch_message() {
        let error = Error::BlockSizeMismatch {
            expected: 4,
            actual: 7,
        };
        assert_eq!(
            "cannot build a block of 4 lanes from a slice of 7 scalars",
            error.to_string()
        );
    }
}
