use crate::approx_eq::{approximately_equal, DEFAULT_MAX_ULPS};
use core::fmt::{Debug, Display};
use num_traits::{Num, NumAssign, NumCast, ToPrimitive};

mod private {
    pub trait Sealed {}
}

/// How values of an element type are compared for equality.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// Any primitive integer; compared exactly.
    Integral,
    /// `f32`; compared approximately in single precision.
    Single,
    /// `f64`; compared approximately in double precision.
    Double,
}

/// Numeric types that can be stored in a [`Vector`](crate::Vector) or
/// [`Matrix`](crate::Matrix).
///
/// Implemented for every primitive integer and floating point type and sealed
/// against anything else.
pub trait Element:
    private::Sealed + Num + NumAssign + NumCast + Copy + PartialOrd + Debug + Display + 'static
{
    const KIND: ElementKind;

    fn as_f64(self) -> f64;
    fn as_f32(self) -> f32;
    /// Saturating conversion back from floating point, truncating toward
    /// zero for integers.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_element {
    ($kind:ident => $($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Element for $t {
                const KIND: ElementKind = ElementKind::$kind;

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn as_f32(self) -> f32 {
                    self as f32
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_element!(Integral => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_element!(Single => f32);
impl_element!(Double => f64);

/// Compares two elements of possibly different types: exactly when both are
/// integral, approximately otherwise. Single precision on either side means
/// the comparison happens in f32, since widening an f32 never lands within a
/// few f64 ULPs of the matching f64.
pub(crate) fn elements_equal<T: Element, U: Element>(lhs: T, rhs: U) -> bool {
    match (T::KIND, U::KIND) {
        (ElementKind::Integral, ElementKind::Integral) => match (lhs.to_i128(), rhs.to_i128()) {
            (Some(a), Some(b)) => a == b,
            // only values above i128::MAX land here
            (None, None) => lhs.to_u128() == rhs.to_u128(),
            _ => false,
        },
        (ElementKind::Single, _) | (_, ElementKind::Single) => {
            approximately_equal(lhs.as_f32(), rhs.as_f32(), DEFAULT_MAX_ULPS)
        }
        _ => approximately_equal(lhs.as_f64(), rhs.as_f64(), DEFAULT_MAX_ULPS),
    }
}
