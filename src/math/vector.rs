use super::{element::elements_equal, sum_of_products, Element, ElementKind};
use crate::approx_eq::{approximately_equal, DEFAULT_MAX_ULPS};
use num_traits::NumCast;
use core::{
    f64::consts::FRAC_PI_2,
    fmt,
    iter::FromIterator,
    ops::{Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

/// A Euclidean vector of `N` components of type `T`.
///
/// The component count is fixed at compile time and the storage is a plain
/// array, so copies are cheap and fully independent. The vector derefs to
/// `[T; N]`, which provides indexing, `len()` and iteration.
#[derive(Copy, Clone, Debug)]
pub struct Vector<T = f64, const N: usize = 3>(pub(crate) [T; N]);

impl<T: Element, const N: usize> Vector<T, N> {
    #[inline]
    pub fn zero() -> Self {
        Self([T::zero(); N])
    }

    /// Copies up to `N` values in order. Missing trailing components are zero
    /// and excess values are ignored.
    pub fn from_slice(values: &[T]) -> Self {
        values.iter().copied().collect()
    }

    /// Scales the vector to unit length.
    ///
    /// A vector whose magnitude is approximately zero is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let mag = magnitude(self);
        if approximately_equal(mag, 0.0, DEFAULT_MAX_ULPS) {
            log::trace!("normalize: zero length vector left unchanged");
            return self;
        }
        let inv_mag = 1.0 / mag;
        for n in 0..N {
            self[n] = T::from_f64(self[n].as_f64() * inv_mag);
        }
        self
    }
}

impl<T: Element, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(a: [T; N]) -> Self {
        Self(a)
    }
}

/// Takes at most `N` items from the iterator, leaving any remaining
/// components zero.
impl<T: Element, const N: usize> FromIterator<T> for Vector<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tmp = Self::zero();
        for (slot, value) in tmp.0.iter_mut().zip(iter) {
            *slot = value;
        }
        tmp
    }
}

impl<T, const N: usize> Deref for Vector<T, N> {
    type Target = [T; N];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T, const N: usize> DerefMut for Vector<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Element, const N: usize> AddAssign<Vector<T, N>> for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        for n in 0..N {
            self[n] += rhs[n];
        }
    }
}

impl<T: Element, const N: usize> SubAssign<Vector<T, N>> for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        for n in 0..N {
            self[n] -= rhs[n];
        }
    }
}

impl<T: Element, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for n in 0..N {
            self[n] *= rhs;
        }
    }
}

impl<T: Element, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        for n in 0..N {
            self[n] /= rhs;
        }
    }
}

impl<T: Element, const N: usize> Add<Vector<T, N>> for Vector<T, N> {
    type Output = Vector<T, N>;
    #[inline]
    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        let mut tmp = self;
        tmp += rhs;
        tmp
    }
}

impl<T: Element, const N: usize> Sub<Vector<T, N>> for Vector<T, N> {
    type Output = Vector<T, N>;
    #[inline]
    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        let mut tmp = self;
        tmp -= rhs;
        tmp
    }
}

impl<T: Element, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T, N>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        let mut tmp = self;
        tmp *= rhs;
        tmp
    }
}

impl<T: Element, const N: usize> Div<T> for Vector<T, N> {
    type Output = Vector<T, N>;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        let mut tmp = self;
        tmp /= rhs;
        tmp
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;
                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// Integer vectors also scale by an f64 factor. Each product is truncated
// toward zero and saturates at the bounds of the element type.
macro_rules! impl_f64_scaling {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> MulAssign<f64> for Vector<$t, N> {
                #[inline]
                fn mul_assign(&mut self, rhs: f64) {
                    for n in 0..N {
                        self[n] = <$t>::from_f64(self[n].as_f64() * rhs);
                    }
                }
            }

            impl<const N: usize> DivAssign<f64> for Vector<$t, N> {
                #[inline]
                fn div_assign(&mut self, rhs: f64) {
                    for n in 0..N {
                        self[n] = <$t>::from_f64(self[n].as_f64() / rhs);
                    }
                }
            }

            impl<const N: usize> Mul<f64> for Vector<$t, N> {
                type Output = Vector<$t, N>;
                #[inline]
                fn mul(self, rhs: f64) -> Self::Output {
                    let mut tmp = self;
                    tmp *= rhs;
                    tmp
                }
            }

            impl<const N: usize> Div<f64> for Vector<$t, N> {
                type Output = Vector<$t, N>;
                #[inline]
                fn div(self, rhs: f64) -> Self::Output {
                    let mut tmp = self;
                    tmp /= rhs;
                    tmp
                }
            }

            impl<const N: usize> Mul<Vector<$t, N>> for f64 {
                type Output = Vector<$t, N>;
                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_f64_scaling!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Vectors of different lengths are never equal. Otherwise components are
/// compared exactly when both element types are integral and approximately
/// when either is floating point.
impl<T: Element, U: Element, const N: usize, const M: usize> PartialEq<Vector<U, M>>
    for Vector<T, N>
{
    fn eq(&self, other: &Vector<U, M>) -> bool {
        N == M
            && self
                .iter()
                .zip(other.iter())
                .all(|(&lhs, &rhs)| elements_equal(lhs, rhs))
    }
}

impl<T: Element, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}

/// Sum of the squared components, accumulated in `T`.
///
/// Integer element types can overflow here; no widening is done.
pub fn magnitude_squared<T: Element, const N: usize>(v: &Vector<T, N>) -> T {
    v.iter().fold(T::zero(), |mag2, &x| mag2 + x * x)
}

pub fn magnitude<T: Element, const N: usize>(v: &Vector<T, N>) -> f64 {
    magnitude_squared(v).as_f64().sqrt()
}

pub fn dot<T: Element, U: Element, const N: usize>(lhs: &Vector<T, N>, rhs: &Vector<U, N>) -> f64 {
    sum_of_products(&lhs[..], &rhs[..])
}

struct AssertCrossOperands<const N: usize, const M: usize>;

impl<const N: usize, const M: usize> AssertCrossOperands<N, M> {
    const ASSERTION: () = assert!(
        (N == 2 || N == 3) && (M == 2 || M == 3),
        "cross product operands must have 2 or 3 components"
    );
}

/// Cross product of two 2D or 3D vectors. A 2D operand has an implicit zero
/// z component.
///
/// Two integral operands are multiplied in `T`, as is a pair of the same
/// floating point type. Any other mix is evaluated in f64 and each result
/// component converted to `T` once.
///
/// ```
/// use vecmat::{cross, Vector};
///
/// let x = Vector::<f64, 3>::from([1., 0., 0.]);
/// let y = Vector::<f64, 2>::from([0., 1.]);
/// assert_eq!(cross(&x, &y), Vector::<f64, 3>::from([0., 0., 1.]));
/// ```
///
/// Operands of any other length are rejected at compile time:
///
/// ```compile_fail
/// use vecmat::{cross, Vector};
///
/// let _ = cross(&Vector::<f64, 4>::zero(), &Vector::<f64, 3>::zero());
/// ```
pub fn cross<T: Element, U: Element, const N: usize, const M: usize>(
    lhs: &Vector<T, N>,
    rhs: &Vector<U, M>,
) -> Vector<T, 3> {
    let () = AssertCrossOperands::<N, M>::ASSERTION;

    let a = xyz(lhs, |x| x);
    match (T::KIND, U::KIND) {
        (ElementKind::Integral, ElementKind::Integral) => {
            // falls back to a saturating cast when the value does not fit in T
            let b = xyz(rhs, |x| {
                <T as NumCast>::from(x).unwrap_or_else(|| T::from_f64(x.as_f64()))
            });
            Vector(determinant(a, b))
        }
        (lhs_kind, rhs_kind) if lhs_kind == rhs_kind => {
            // same float type, so the conversion is exact
            let b = xyz(rhs, |x| T::from_f64(x.as_f64()));
            Vector(determinant(a, b))
        }
        _ => {
            let c = determinant(xyz(lhs, T::as_f64), xyz(rhs, U::as_f64));
            Vector([T::from_f64(c[0]), T::from_f64(c[1]), T::from_f64(c[2])])
        }
    }
}

/// Pads a 2D or 3D vector to three components, converting each with `f`.
fn xyz<S, D, const N: usize>(v: &Vector<S, N>, f: impl Fn(S) -> D) -> [D; 3]
where
    S: Element,
    D: Copy + num_traits::Zero,
{
    let mut out = [D::zero(); 3];
    for (dst, &src) in out.iter_mut().zip(v.iter()) {
        *dst = f(src);
    }
    out
}

fn determinant<S>(a: [S; 3], b: [S; 3]) -> [S; 3]
where
    S: Copy + Mul<Output = S> + Sub<Output = S>,
{
    let [x1, y1, z1] = a;
    let [x2, y2, z2] = b;
    [y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - y1 * x2]
}

/// Angle in radians between two vectors, which may differ in length and
/// element type. Missing trailing components count as zero.
///
/// If either vector has approximately zero magnitude the result is a right
/// angle.
pub fn angle<T: Element, U: Element, const N: usize, const M: usize>(
    lhs: &Vector<T, N>,
    rhs: &Vector<U, M>,
) -> f64 {
    let lhs_mag = magnitude(lhs);
    let rhs_mag = magnitude(rhs);
    if approximately_equal(lhs_mag, 0.0, DEFAULT_MAX_ULPS)
        || approximately_equal(rhs_mag, 0.0, DEFAULT_MAX_ULPS)
    {
        log::trace!("angle: zero length operand, returning a right angle");
        return FRAC_PI_2;
    }
    // rounding can push the cosine just outside [-1, 1] for parallel vectors
    let cos = sum_of_products(&lhs[..], &rhs[..]) / (lhs_mag * rhs_mag);
    cos.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::PI;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_construction() {
        assert_eq!(Vector::<f64, 3>::default(), Vector::from([0., 0., 0.]));
        assert!(Vector::<i32, 0>::zero().is_empty());

        let short = Vector::<i32, 3>::from_slice(&[1, 2]);
        assert_eq!(*short, [1, 2, 0]);
        let long = Vector::<i32, 2>::from_slice(&[1, 2, 3, 4]);
        assert_eq!(*long, [1, 2]);

        let source = vec![7];
        let from_range: Vector<i32, 3> = source.iter().copied().collect();
        assert_eq!(*from_range, [7, 0, 0]);
        let empty: Vector<i32, 3> = core::iter::empty().collect();
        assert_eq!(*empty, [0, 0, 0]);
    }

    #[test]
    fn test_copies_are_independent() {
        let a = Vector::<i32, 2>::from([1, 2]);
        let mut b = a;
        b[0] = 10;
        assert_eq!(a[0], 1);
        assert_eq!(b[0], 10);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_arithmetic() {
        let mut a = Vector::<i32, 3>::from([1, 2, 3]);
        let b = Vector::<i32, 3>::from([4, 5, 6]);
        assert_eq!(a + b, Vector::<i32, 3>::from([5, 7, 9]));
        assert_eq!(b - a, Vector::<i32, 3>::from([3, 3, 3]));

        a += b;
        assert_eq!(*a, [5, 7, 9]);
        a -= b;
        assert_eq!(*a, [1, 2, 3]);
        a *= 3;
        assert_eq!(*a, [3, 6, 9]);
        a /= 3;
        assert_eq!(*a, [1, 2, 3]);
    }

    #[test]
    fn test_scalar_ops() {
        let v = Vector::<f64, 3>::from([1., 2., 3.]);
        assert_eq!(2.0 * v, Vector::<f64, 3>::from([2., 4., 6.]));
        assert_eq!(v * 2.0, Vector::<f64, 3>::from([2., 4., 6.]));
        assert_eq!(v / 2.0, Vector::<f64, 3>::from([0.5, 1., 1.5]));

        let i = Vector::<i32, 2>::from([5, 7]);
        assert_eq!(*(i / 2), [2, 3]);
        assert_eq!(*(-1 * i), [-5, -7]);

        let inf = v / 0.0;
        assert!(inf.iter().all(|x| x.is_infinite()));
    }

    #[test]
    fn test_magnitude() {
        let v = Vector::<i32, 3>::from([1, 2, 3]);
        assert_eq!(magnitude_squared(&v), 14);
        assert_relative_eq!(magnitude(&v), 3.7417, epsilon = 1e-4);
        assert_eq!(magnitude(&Vector::<f32, 0>::zero()), 0.0);
    }

    #[test]
    fn test_dot() {
        let a = Vector::<i32, 3>::from([1, 2, 3]);
        let b = Vector::<f64, 3>::from([0.5, 0.5, 0.5]);
        assert_eq!(dot(&a, &b), 3.0);
        assert_eq!(dot(&a, &a), 14.0);
    }

    #[test]
    fn test_cross() {
        let a = Vector::<i32, 3>::from_slice(&[1, 2]);
        let b = Vector::<i32, 2>::from([1, 5]);
        assert_eq!(cross(&a, &b), Vector::<i32, 3>::from([0, 0, 3]));

        let x = Vector::<f64, 3>::from([1., 0., 0.]);
        let y = Vector::<f64, 3>::from([0., 1., 0.]);
        let z = Vector::<f64, 3>::from([0., 0., 1.]);
        assert_eq!(cross(&x, &y), z);
        assert_eq!(cross(&y, &z), x);
        assert_eq!(cross(&z, &x), y);
        assert_eq!(cross(&y, &x), -1.0 * z);

        let mixed = cross(&Vector::<f64, 2>::from([2., 0.]), &Vector::<i32, 2>::from([0, 3]));
        assert_eq!(mixed, Vector::<f64, 3>::from([0., 0., 6.]));
    }

    #[test]
    fn test_cross_mixed_types() {
        // fractional components survive until the result is converted
        let a = Vector::<i32, 3>::from([2, 0, 0]);
        let b = Vector::<f64, 3>::from([0., 0.5, 0.]);
        assert_eq!(*cross(&a, &b), [0, 0, 1]);
        assert_eq!(*cross(&a, &Vector::<f32, 2>::from([0., 1.75])), [0, 0, 3]);

        let half_x = Vector::<f32, 3>::from([0.5, 0., 0.]);
        let f = cross(&half_x, &Vector::<f64, 3>::from([0., 0.5, 0.]));
        assert_eq!(f, Vector::<f32, 3>::from([0., 0., 0.25]));

        // wide integers stay exact
        let big = (1_i64 << 53) + 1;
        let x = Vector::<i64, 3>::from([1, 0, 0]);
        assert_eq!(cross(&x, &Vector::<i64, 3>::from([0, big, 0]))[2], big);
        assert_eq!(cross(&x, &Vector::<i32, 2>::from([0, 7]))[2], 7);
        let huge = u64::MAX - 1;
        let c = cross(&Vector::<u64, 2>::from([1, 0]), &Vector::<u64, 2>::from([0, huge]));
        assert_eq!(c[2], huge);
    }

    #[test]
    fn test_f64_scaling_of_integers() {
        let v = Vector::<i32, 3>::from([1, 2, 3]);
        assert_eq!(*(v * 0.5), [0, 1, 1]);
        assert_eq!(*(0.5 * v), [0, 1, 1]);
        assert_eq!(*(Vector::<i32, 3>::from([5, 7, -5]) / 2.5), [2, 2, -2]);

        let mut w = Vector::<u8, 2>::from([100, 200]);
        w *= 1.5;
        assert_eq!(*w, [150, 255]);
        w /= 0.5;
        assert_eq!(*w, [255, 255]);

        // integer literals still pick the element-typed operators
        assert_eq!(*(v * 2), [2, 4, 6]);
    }

    #[test]
    fn test_normalize() {
        init_logger();

        let mut v = Vector::<f64, 3>::from([1., 1., 1.]);
        v.normalize();
        assert_relative_eq!(magnitude(&v), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v[0], 1.0 / 3.0_f64.sqrt(), epsilon = 1e-12);

        // already unit length
        v.normalize().normalize();
        assert_relative_eq!(magnitude(&v), 1.0, epsilon = 1e-12);

        let mut zero = Vector::<f64, 3>::zero();
        zero.normalize();
        assert_eq!(*zero, [0., 0., 0.]);

        let mut tiny = Vector::<f64, 2>::from([1e-300, 0.]);
        tiny.normalize();
        assert_eq!(*tiny, [1e-300, 0.]);
    }

    #[test]
    fn test_angle() {
        init_logger();

        let x = Vector::<f64, 3>::from([1., 0., 0.]);
        let y = Vector::<f64, 3>::from([0., 2., 0.]);
        assert_relative_eq!(angle(&x, &y), FRAC_PI_2);
        assert_relative_eq!(angle(&x, &x), 0.0);
        assert_relative_eq!(angle(&x, &(-1.0 * x)), PI);

        let diag = Vector::<f64, 3>::from([1., 1., 1.]);
        assert_relative_eq!(angle(&diag, &diag), 0.0, epsilon = 1e-7);

        // lengths and element types may differ
        let x2 = Vector::<i32, 2>::from([3, 0]);
        assert_relative_eq!(angle(&x2, &x), 0.0);
        assert_relative_eq!(angle(&Vector::<i32, 2>::from([1, 1]), &x), PI / 4.0, epsilon = 1e-12);

        assert_eq!(angle(&Vector::<f64, 3>::zero(), &x), FRAC_PI_2);
        assert_eq!(angle(&x, &Vector::<i32, 2>::zero()), FRAC_PI_2);
    }

    #[test]
    fn test_equality() {
        let a = Vector::<i32, 3>::from([1, 2, 3]);
        assert_eq!(a, Vector::<i64, 3>::from([1, 2, 3]));
        assert_ne!(a, Vector::<i32, 3>::from([1, 2, 4]));
        assert_ne!(a, Vector::<i32, 2>::from([1, 2]));
        assert_ne!(Vector::<i32, 0>::zero(), Vector::<i32, 1>::zero());
        assert_eq!(Vector::<i32, 0>::zero(), Vector::<f32, 0>::zero());

        assert_eq!(a, Vector::<f64, 3>::from([1., 2., 3.]));
        assert_ne!(a, Vector::<f64, 3>::from([1., 2., 3.5]));

        let sum = Vector::<f64, 2>::from([0.1, 1.]) + Vector::<f64, 2>::from([0.2, 0.]);
        assert_eq!(sum, Vector::<f64, 2>::from([0.3, 1.]));
        assert_ne!(sum, Vector::<f64, 2>::from([0.3001, 1.]));
    }

    #[test]
    fn test_mixed_precision_equality() {
        let single = Vector::<f32, 3>::from([0.1, 0.2, 1.0 / 3.0]);
        let double = Vector::<f64, 3>::from([0.1, 0.2, 1.0 / 3.0]);
        assert_eq!(single, double);
        assert_eq!(double, single);
        assert_ne!(single, Vector::<f64, 3>::from([0.1, 0.2, 0.3334]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector::<i32, 3>::from([1, 2, 3]).to_string(), "1 2 3 ");
        assert_eq!(Vector::<f64, 2>::from([1.5, -2.]).to_string(), "1.5 -2 ");
        assert_eq!(Vector::<f64, 0>::zero().to_string(), "");
    }

    #[cfg(feature = "rand")]
    mod property {
        use super::super::*;
        use rand::{Rng, SeedableRng};
        use rand_pcg::Pcg64Mcg;

        fn rng() -> Pcg64Mcg {
            Pcg64Mcg::seed_from_u64(0x5eed)
        }

        #[test]
        fn test_add_negated_is_zero() {
            let mut rng = rng();
            for _ in 0..100 {
                let v: Vector<f64, 5> = rng.gen();
                let v = v * 200.0 - Vector::from([100.0; 5]);
                assert_eq!(v + (-1.0 * v), Vector::<f64, 5>::zero());

                let i: Vector<i32, 4> = (0..4).map(|_| rng.gen_range(-1000..1000)).collect();
                assert_eq!(i + (-1 * i), Vector::<i32, 4>::zero());
            }
        }

        #[test]
        fn test_integral_equality_is_exact() {
            let mut rng = rng();
            for _ in 0..200 {
                let a: Vector<i32, 3> = (0..3).map(|_| rng.gen_range(-2..=2)).collect();
                let b: Vector<i32, 3> = (0..3).map(|_| rng.gen_range(-2..=2)).collect();
                assert_eq!(a == b, *a == *b);
            }
        }

        #[test]
        fn test_float_equality_tolerance() {
            let mut rng = rng();
            for _ in 0..100 {
                let a: Vector<f64, 3> = rng.gen();
                let mut b = a;
                b[1] = f64::from_bits(b[1].to_bits() + 2);
                assert_eq!(a, b);
                b[2] += 1e-6;
                assert_ne!(a, b);
            }
        }

        #[test]
        fn test_normalize_random() {
            let mut rng = rng();
            for _ in 0..100 {
                let mut v: Vector<f64, 4> = rng.gen();
                v.normalize();
                assert!((magnitude(&v) - 1.0).abs() < 1e-12);
            }
        }

        #[test]
        fn test_cross_anticommutative() {
            let mut rng = rng();
            for _ in 0..100 {
                let a: Vector<f64, 3> = rng.gen();
                let b: Vector<f64, 3> = rng.gen();
                let c: Vector<f64, 2> = rng.gen();
                assert_eq!(cross(&a, &b), -1.0 * cross(&b, &a));
                assert_eq!(cross(&a, &c), -1.0 * cross(&c, &a));

                let i: Vector<i64, 2> = (0..2).map(|_| rng.gen_range(-50..50)).collect();
                let j: Vector<i64, 3> = (0..3).map(|_| rng.gen_range(-50..50)).collect();
                assert_eq!(cross(&i, &j), -1 * cross(&j, &i));
            }
        }

        #[cfg(feature = "glam")]
        #[test]
        fn test_against_glam() {
            use glam::{DVec3, Vec3};

            let mut rng = rng();
            for _ in 0..100 {
                let a: Vector<f32, 3> = rng.gen();
                let b: Vector<f32, 3> = rng.gen();
                let expected = Vec3::from(a).cross(Vec3::from(b));
                assert_eq!(cross(&a, &b), Vector::<f32, 3>::from(expected));
                let glam_dot = Vec3::from(a).dot(Vec3::from(b)) as f64;
                assert!((dot(&a, &b) - glam_dot).abs() < 1e-5);

                let c: Vector<f64, 3> = rng.gen();
                let d: Vector<f64, 3> = rng.gen();
                let glam_angle = DVec3::from(c).angle_between(DVec3::from(d));
                assert!((angle(&c, &d) - glam_angle).abs() < 1e-6);
            }
        }
    }
}
