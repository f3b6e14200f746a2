//! Floating point comparison with a tolerance expressed in units in the last
//! place (ULPs).
use approx::UlpsEq;

/// Tolerance used by vector and matrix equality and by the zero-length checks.
pub const DEFAULT_MAX_ULPS: u32 = 4;

/// Returns true when `a` and `b` are within machine epsilon of each other, or
/// no more than `max_ulps` representable values apart.
///
/// The epsilon check means values straddling zero (which have no useful ULP
/// distance) still compare equal when they are close enough.
///
/// ```
/// use vecmat::approx_eq::approximately_equal;
///
/// assert!(approximately_equal(0.1 + 0.2, 0.3, 4));
/// assert!(!approximately_equal(1.0, 1.0001, 4));
/// ```
#[inline]
pub fn approximately_equal<F: UlpsEq>(a: F, b: F, max_ulps: u32) -> bool {
    a.ulps_eq(&b, F::default_epsilon(), max_ulps)
}
