//! This module collects the scalar-level traits of the crate.

pub mod element;
pub mod identities;

pub use element::BlockElement;
pub use identities::ReductionIdentities;
