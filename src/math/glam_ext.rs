use super::{Matrix, Vector};
use glam::{DMat2, DMat3, DMat4, DVec2, DVec3, DVec4, Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

macro_rules! impl_vector_conversion {
    ($($t:ty, $n:literal => $glam:ty);* $(;)?) => {
        $(
            impl From<$glam> for Vector<$t, $n> {
                #[inline]
                fn from(v: $glam) -> Self {
                    Vector(v.to_array())
                }
            }

            impl From<Vector<$t, $n>> for $glam {
                #[inline]
                fn from(v: Vector<$t, $n>) -> Self {
                    <$glam>::from_array(v.0)
                }
            }
        )*
    };
}

impl_vector_conversion! {
    f32, 2 => Vec2;
    f32, 3 => Vec3;
    f32, 4 => Vec4;
    f64, 2 => DVec2;
    f64, 3 => DVec3;
    f64, 4 => DVec4;
}

// glam matrices are column-major; conversions go through logical coordinates
// so a lazily transposed matrix converts to the transposed glam matrix.
macro_rules! impl_matrix_conversion {
    ($($t:ty, $n:literal => $glam:ty);* $(;)?) => {
        $(
            impl From<$glam> for Matrix<$t, $n, $n> {
                fn from(m: $glam) -> Self {
                    let cols = m.to_cols_array_2d();
                    let mut mat = Matrix::zero();
                    for row in 0..$n {
                        for col in 0..$n {
                            mat[(row, col)] = cols[col][row];
                        }
                    }
                    mat
                }
            }

            impl From<Matrix<$t, $n, $n>> for $glam {
                fn from(m: Matrix<$t, $n, $n>) -> Self {
                    let mut cols = [[0.0; $n]; $n];
                    for row in 0..$n {
                        for col in 0..$n {
                            cols[col][row] = m[(row, col)];
                        }
                    }
                    <$glam>::from_cols_array_2d(&cols)
                }
            }
        )*
    };
}

impl_matrix_conversion! {
    f32, 2 => Mat2;
    f32, 3 => Mat3;
    f32, 4 => Mat4;
    f64, 2 => DMat2;
    f64, 3 => DMat3;
    f64, 4 => DMat4;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_vector_round_trip() {
        let v = Vector::<f32, 3>::from([1., 2., 3.]);
        let g = Vec3::from(v);
        assert_eq!(g, Vec3::new(1., 2., 3.));
        assert_eq!(Vector::from(g), v);

        let d = Vector::<f64, 2>::from(DVec2::new(-1., 0.5));
        assert_eq!(*d, [-1., 0.5]);
    }

    #[test]
    fn test_matrix_orientation() {
        let mat = Matrix::<f32>::from_slice(&[1., 2., 3., 4., 5., 6., 7., 8., 9.]);
        let g = Mat3::from(mat);
        assert_eq!(g.row(0), Vec3::new(1., 2., 3.));
        assert_eq!(g.col(0), Vec3::new(1., 4., 7.));
        assert_eq!(Matrix::from(g), mat);

        let mut lazy = mat;
        lazy.transpose();
        assert_eq!(Mat3::from(lazy), g.transpose());
        assert_eq!(Mat3::from(mat.transposed()), g.transpose());
    }

    #[test]
    fn test_identity_matches() {
        assert_eq!(Mat4::from(Matrix::<f32, 4>::identity()), Mat4::IDENTITY);
        assert_eq!(DMat2::from(Matrix::<f64, 2>::identity()), DMat2::IDENTITY);
        assert_eq!(Matrix::<f64, 3>::from(DMat3::IDENTITY), Matrix::<f64, 3>::identity());
    }
}
