//! Small, fixed-size numeric containers for 2D/3D style vector math.
//!
//! [`Vector`] and [`Matrix`] are dimensioned at compile time through const
//! generics and own their storage by value. Geometric queries are free
//! functions ([`magnitude`], [`dot`], [`cross`], [`angle`]) while in-place
//! modifiers are methods returning `&mut Self`.
//!
//! ```
//! use vecmat::{cross, magnitude_squared, Matrix, Vector};
//!
//! let v = Vector::<i32, 3>::from([1, 2, 3]);
//! assert_eq!(magnitude_squared(&v), 14);
//!
//! let c = cross(&Vector::<i32, 3>::from([1, 2, 0]), &Vector::<i32, 2>::from([1, 5]));
//! assert_eq!(c, Vector::<i32, 3>::from([0, 0, 3]));
//!
//! let m = Matrix::<f64, 2, 3>::from_slice(&[1., 3., 5., 2., 4., 6.]);
//! assert_eq!(m.to_string(), "1 3 5 \n2 4 6 \n");
//! ```
pub mod approx_eq;
mod math;

pub use math::*;
