use super::{element::elements_equal, Element};
use core::{
    fmt,
    iter::FromIterator,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign},
};

/// An `R` x `C` matrix of `T`, stored row-major with a lazy transpose flag.
///
/// The physical buffer never changes layout. When the matrix is transposed,
/// indexing, [`rows`](Self::rows), [`cols`](Self::cols), equality and
/// `Display` swap their interpretation of rows and columns. The element-wise
/// arithmetic operators and [`iter`](Self::iter) work on physical order
/// instead. Adding a matrix to a transposed copy of itself therefore
/// combines mismatched logical positions.
#[derive(Copy, Clone, Debug)]
pub struct Matrix<T = f64, const R: usize = 3, const C: usize = R> {
    data: [[T; C]; R],
    transposed: bool,
}

impl<T: Element, const R: usize, const C: usize> Matrix<T, R, C> {
    #[inline]
    pub fn zero() -> Self {
        Self {
            data: [[T::zero(); C]; R],
            transposed: false,
        }
    }

    /// Fills the matrix in row-major order from up to `R * C` values. Missing
    /// trailing values are zero and excess values are ignored.
    pub fn from_slice(values: &[T]) -> Self {
        values.iter().copied().collect()
    }

    /// Logical row count.
    #[inline]
    pub fn rows(&self) -> usize {
        if self.transposed {
            C
        } else {
            R
        }
    }

    /// Logical column count.
    #[inline]
    pub fn cols(&self) -> usize {
        if self.transposed {
            R
        } else {
            C
        }
    }

    /// Whether the declared dimensions are equal, independent of the current
    /// orientation.
    #[inline]
    pub const fn is_square(&self) -> bool {
        R == C
    }

    /// Number of stored elements, `R * C`.
    #[inline]
    pub const fn size(&self) -> usize {
        R * C
    }

    /// True when either declared dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        R * C == 0
    }

    /// Whether the lazy transpose flag is currently set.
    #[inline]
    pub fn is_transposed(&self) -> bool {
        self.transposed
    }

    /// Iterates the elements in physical row-major order, ignoring the
    /// transpose flag.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.data.iter_mut().flatten()
    }

    #[inline]
    fn physical(&self, row: usize, col: usize) -> (usize, usize) {
        if self.transposed {
            (col, row)
        } else {
            (row, col)
        }
    }

    /// Flips the orientation flag. No data moves.
    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        self.transposed = !self.transposed;
        self
    }

    /// Returns a copy with the physical buffer transposed. The orientation
    /// flag carries over, so the result is always the logical transpose of
    /// `self`.
    pub fn transposed(&self) -> Matrix<T, C, R> {
        let mut mat = Matrix::zero();
        for r in 0..R {
            for c in 0..C {
                mat.data[c][r] = self.data[r][c];
            }
        }
        mat.transposed = self.transposed;
        mat
    }

    pub fn to_diagonal(&mut self) -> &mut Self {
        self.retain(|row, col| row == col)
    }

    /// Zeroes every logical element below the diagonal.
    pub fn to_upper_triangular(&mut self) -> &mut Self {
        self.retain(|row, col| row <= col)
    }

    /// Zeroes every logical element above the diagonal.
    pub fn to_lower_triangular(&mut self) -> &mut Self {
        self.retain(|row, col| row >= col)
    }

    fn retain(&mut self, keep: impl Fn(usize, usize) -> bool) -> &mut Self {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if !keep(row, col) {
                    self[(row, col)] = T::zero();
                }
            }
        }
        self
    }
}

struct AssertNonEmpty<const N: usize>;

impl<const N: usize> AssertNonEmpty<N> {
    const ASSERTION: () = assert!(N > 0, "matrix factories require a non-empty matrix");
}

/// Factories for square matrices of ones and zeros. Only square matrices have
/// these functions, and a zero-sized matrix fails to build:
///
/// ```compile_fail
/// use vecmat::Matrix;
///
/// let _ = Matrix::<f64, 0>::identity();
/// ```
///
/// ```compile_fail
/// use vecmat::Matrix;
///
/// let _ = Matrix::<f64, 2, 3>::identity();
/// ```
impl<T: Element, const N: usize> Matrix<T, N, N> {
    /// ```
    /// use vecmat::Matrix;
    ///
    /// let id = Matrix::<i32, 2>::identity();
    /// assert_eq!(id, Matrix::<i32, 2>::from_slice(&[1, 0, 0, 1]));
    /// ```
    pub fn identity() -> Self {
        Self::ones_where(|row, col| row == col)
    }

    pub fn upper_triangular() -> Self {
        Self::ones_where(|row, col| row <= col)
    }

    pub fn lower_triangular() -> Self {
        Self::ones_where(|row, col| row >= col)
    }

    fn ones_where(pattern: impl Fn(usize, usize) -> bool) -> Self {
        let () = AssertNonEmpty::<N>::ASSERTION;

        let mut mat = Self::zero();
        for i in 0..N {
            for j in 0..N {
                if pattern(i, j) {
                    mat.data[i][j] = T::one();
                }
            }
        }
        mat
    }
}

impl<T: Element, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self {
            data: rows,
            transposed: false,
        }
    }
}

impl<T: Element, const R: usize, const C: usize> FromIterator<T> for Matrix<T, R, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut mat = Self::zero();
        for (slot, value) in mat.iter_mut().zip(iter) {
            *slot = value;
        }
        mat
    }
}

/// Logical `(row, col)` indexing.
impl<T: Element, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        let (r, c) = self.physical(row, col);
        &self.data[r][c]
    }
}

impl<T: Element, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let (r, c) = self.physical(row, col);
        &mut self.data[r][c]
    }
}

// Element-wise in physical order; the transpose flags are not consulted.
impl<T: Element, const R: usize, const C: usize> AddAssign<Matrix<T, R, C>> for Matrix<T, R, C> {
    #[inline]
    fn add_assign(&mut self, rhs: Matrix<T, R, C>) {
        for (lhs, &rhs) in self.iter_mut().zip(rhs.iter()) {
            *lhs += rhs;
        }
    }
}

impl<T: Element, const R: usize, const C: usize> SubAssign<Matrix<T, R, C>> for Matrix<T, R, C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Matrix<T, R, C>) {
        for (lhs, &rhs) in self.iter_mut().zip(rhs.iter()) {
            *lhs -= rhs;
        }
    }
}

impl<T: Element, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for value in self.iter_mut() {
            *value *= rhs;
        }
    }
}

impl<T: Element, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        for value in self.iter_mut() {
            *value /= rhs;
        }
    }
}

impl<T: Element, const R: usize, const C: usize> Add<Matrix<T, R, C>> for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    #[inline]
    fn add(self, rhs: Matrix<T, R, C>) -> Self::Output {
        let mut tmp = self;
        tmp += rhs;
        tmp
    }
}

impl<T: Element, const R: usize, const C: usize> Sub<Matrix<T, R, C>> for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    #[inline]
    fn sub(self, rhs: Matrix<T, R, C>) -> Self::Output {
        let mut tmp = self;
        tmp -= rhs;
        tmp
    }
}

impl<T: Element, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        let mut tmp = self;
        tmp *= rhs;
        tmp
    }
}

impl<T: Element, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
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
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;
                #[inline]
                fn mul(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// f64 factors for integer matrices, truncating toward zero per element.
macro_rules! impl_f64_scaling {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> MulAssign<f64> for Matrix<$t, R, C> {
                #[inline]
                fn mul_assign(&mut self, rhs: f64) {
                    for value in self.iter_mut() {
                        *value = <$t>::from_f64(value.as_f64() * rhs);
                    }
                }
            }

            impl<const R: usize, const C: usize> DivAssign<f64> for Matrix<$t, R, C> {
                #[inline]
                fn div_assign(&mut self, rhs: f64) {
                    for value in self.iter_mut() {
                        *value = <$t>::from_f64(value.as_f64() / rhs);
                    }
                }
            }

            impl<const R: usize, const C: usize> Mul<f64> for Matrix<$t, R, C> {
                type Output = Matrix<$t, R, C>;
                #[inline]
                fn mul(self, rhs: f64) -> Self::Output {
                    let mut tmp = self;
                    tmp *= rhs;
                    tmp
                }
            }

            impl<const R: usize, const C: usize> Div<f64> for Matrix<$t, R, C> {
                type Output = Matrix<$t, R, C>;
                #[inline]
                fn div(self, rhs: f64) -> Self::Output {
                    let mut tmp = self;
                    tmp /= rhs;
                    tmp
                }
            }

            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for f64 {
                type Output = Matrix<$t, R, C>;
                #[inline]
                fn mul(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_f64_scaling!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Compares logical shape first, then every logical position. Declared
/// dimensions and orientation may differ, so a `1x3` matrix equals a
/// transposed `3x1` matrix holding the same values.
impl<T, U, const R: usize, const C: usize, const R2: usize, const C2: usize>
    PartialEq<Matrix<U, R2, C2>> for Matrix<T, R, C>
where
    T: Element,
    U: Element,
{
    fn eq(&self, other: &Matrix<U, R2, C2>) -> bool {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return false;
        }
        (0..self.rows()).all(|row| {
            (0..self.cols()).all(|col| elements_equal(self[(row, col)], other[(row, col)]))
        })
    }
}

impl<T: Element, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                write!(f, "{} ", self[(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
