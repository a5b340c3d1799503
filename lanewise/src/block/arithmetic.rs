//! This module implements the lane-wise operators of [Block].

use std::array;
use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Sub};

use crate::datatypes::BlockElement;

use super::Block;

macro_rules! impl_lanewise_op {
    ($op_trait:ident, $op_fn:ident) => {
        impl<T, const LANES: usize> $op_trait for Block<T, LANES>
        where
            T: BlockElement + $op_trait<Output = T>,
        {
            type Output = Self;

            fn $op_fn(self, rhs: Self) -> Self::Output {
                Self(array::from_fn(|lane| {
                    $op_trait::$op_fn(self.0[lane], rhs.0[lane])
                }))
            }
        }
    };
}

impl_lanewise_op!(Add, add);
impl_lanewise_op!(Sub, sub);
impl_lanewise_op!(Mul, mul);
impl_lanewise_op!(BitAnd, bitand);
impl_lanewise_op!(BitOr, bitor);
impl_lanewise_op!(BitXor, bitxor);
