//! This module defines [BlockElement].

use std::fmt::Debug;

/// A combination of traits that is required for a scalar type to be used
/// as the lane type of a [Block][crate::block::Block]
pub trait BlockElement: Debug + Copy + Default + PartialEq + 'static {}

impl<T> BlockElement for T where T: Debug + Copy + Default + PartialEq + 'static {}
