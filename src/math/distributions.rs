use super::{Element, Matrix, Vector};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// Samples every component independently from `Standard`.
impl<T: Element, const N: usize> Distribution<Vector<T, N>> for Standard
where
    Standard: Distribution<T>,
{
    fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> Vector<T, N> {
        (0..N).map(|_| rng.gen()).collect()
    }
}

/// Samples an untransposed matrix, filling the buffer in row-major order.
impl<T: Element, const R: usize, const C: usize> Distribution<Matrix<T, R, C>> for Standard
where
    Standard: Distribution<T>,
{
    fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> Matrix<T, R, C> {
        (0..R * C).map(|_| rng.gen()).collect()
    }
}
