//! This module defines [ReductionIdentities].

/// Neutral elements of the min and max operations for a scalar type.
///
/// Padding a partial block with these values makes the padded lanes
/// invisible to the corresponding reduction.
pub trait ReductionIdentities {
    /// Returns the neutral element of the min operation, i.e. the value
    /// that every other value of the type compares less than or equal to.
    fn min_identity() -> Self;

    /// Returns the neutral element of the max operation, i.e. the value
    /// that every other value of the type compares greater than or equal to.
    fn max_identity() -> Self;
}

macro_rules! impl_integer_identities {
    ($int:ty) => {
        impl ReductionIdentities for $int {
            fn min_identity() -> $int {
                <$int>::MAX
            }

            fn max_identity() -> $int {
                <$int>::MIN
            }
        }
    };
}

impl_integer_identities!(i8);
impl_integer_identities!(i16);
impl_integer_identities!(i32);
impl_integer_identities!(i64);
impl_integer_identities!(isize);
impl_integer_identities!(u8);
impl_integer_identities!(u16);
impl_integer_identities!(u32);
impl_integer_identities!(u64);
impl_integer_identities!(usize);

macro_rules! impl_float_identities {
    ($float:ty) => {
        impl ReductionIdentities for $float {
            fn min_identity() -> $float {
                <$float>::INFINITY
            }

            fn max_identity() -> $float {
                <$float>::NEG_INFINITY
            }
        }
    };
}

impl_float_identities!(f32);
impl_float_identities!(f64);

#[cfg(test)]
mod test {
    use super::ReductionIdentities;
    use test_log::test;

    #[test]
    fn integer_identities_are_the_type_bounds() {
        assert_eq!(u8::MAX, u8::min_identity());
        assert_eq!(u8::MIN, u8::max_identity());
        assert_eq!(i64::MAX, i64::min_identity());
        assert_eq!(i64::MIN, i64::max_identity());
    }

    #[test]
    fn float_identities_are_infinite() {
        assert_eq!(f32::INFINITY, f32::min_identity());
        assert_eq!(f32::NEG_INFINITY, f32::max_identity());
        assert_eq!(f64::INFINITY, f64::min_identity());
        assert_eq!(f64::NEG_INFINITY, f64::max_identity());
    }
}
