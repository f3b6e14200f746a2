#[cfg(feature = "rand")]
mod distributions;
mod element;
#[cfg(feature = "glam")]
mod glam_ext;
mod matrix;
mod vector;

pub use element::{Element, ElementKind};
pub use matrix::Matrix;
pub use vector::{angle, cross, dot, magnitude, magnitude_squared, Vector};

/// Sum of pairwise products over the common prefix of `a` and `b`, in f64.
pub(crate) fn sum_of_products<T: Element, U: Element>(a: &[T], b: &[U]) -> f64 {
    a.iter()
        .zip(b.iter())
        .fold(0.0, |dot, (&lhs, &rhs)| dot + lhs.as_f64() * rhs.as_f64())
}
