use crate::error::check_element;
use crate::{lu, Error, Mat3, Scalar, Vec3, Vec4};
use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// 4x4 matrix, row-major storage.
///
/// Used for homogeneous transforms. Element `(row, col)` sits at offset
/// `row * 4 + col` of [`data()`](Self::data).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<S> {
    m: [[S; 4]; 4],
}

impl<S: Scalar> Mat4<S> {
    /// Construct from elements in row-major argument order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: S, m01: S, m02: S, m03: S,
        m10: S, m11: S, m12: S, m13: S,
        m20: S, m21: S, m22: S, m23: S,
        m30: S, m31: S, m32: S, m33: S,
    ) -> Self {
        Self::from_rows([
            [m00, m01, m02, m03],
            [m10, m11, m12, m13],
            [m20, m21, m22, m23],
            [m30, m31, m32, m33],
        ])
    }

    #[inline]
    pub fn from_rows(m: [[S; 4]; 4]) -> Self {
        Self { m }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_rows([[S::ZERO; 4]; 4])
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_rows(lu::identity())
    }

    /// Embed `m` in the upper-left block of an identity matrix.
    pub fn from_mat3(m: &Mat3<S>) -> Self {
        let mut out = Self::identity();
        for r in 0..3 {
            for c in 0..3 {
                out.m[r][c] = m.get(r, c);
            }
        }
        out
    }

    /// Translation matrix
    pub fn translation(dx: S, dy: S, dz: S) -> Self {
        Self::new(
            S::ONE,  S::ZERO, S::ZERO, dx,
            S::ZERO, S::ONE,  S::ZERO, dy,
            S::ZERO, S::ZERO, S::ONE,  dz,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Element `(row, col)`. Panics when either index is outside `0..4`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self[(row, col)]
    }

    /// Overwrite element `(row, col)`. Panics when either index is outside `0..4`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: S) {
        self[(row, col)] = value;
    }

    #[inline]
    pub fn try_get(&self, row: usize, col: usize) -> Result<S, Error> {
        check_element(row, col, 4).map(|(r, c)| self.m[r][c])
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vec4<S> {
        Vec4::from(self.m[i])
    }

    #[inline]
    pub fn col(&self, i: usize) -> Vec4<S> {
        Vec4::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
    }

    /// Row-major view of all sixteen elements.
    #[inline]
    pub fn data(&self) -> &[S] {
        self.m.as_flattened()
    }

    /// Extract the upper-left 3x3 submatrix
    pub fn extract_mat3(&self) -> Mat3<S> {
        let r = |i: usize| [self.m[i][0], self.m[i][1], self.m[i][2]];
        Mat3::from_rows([r(0), r(1), r(2)])
    }

    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        lu::transpose(&mut self.m);
        self
    }

    #[inline]
    pub fn transposed(&self) -> Self {
        let mut t = *self;
        t.transpose();
        t
    }

    /// Doolittle LU decomposition without pivoting, as `(lower, upper)`.
    pub fn decompose(&self) -> (Mat4<S>, Mat4<S>) {
        let (l, u) = lu::decompose(&self.m);
        (Mat4::from_rows(l), Mat4::from_rows(u))
    }

    /// Replace `self` with its inverse (LU plus substitution); returns the receiver.
    pub fn invert(&mut self) -> &mut Self {
        self.m = lu::invert(&self.m);
        self
    }

    pub fn inverted(&self) -> Self {
        Self::from_rows(lu::invert(&self.m))
    }

    /// Forward substitution; reads only the lower triangle.
    pub fn solve_l(&self, b: Vec4<S>) -> Vec4<S> {
        Vec4::from(lu::solve_lower(&self.m, b.into()))
    }

    /// Backward substitution; reads only the upper triangle.
    pub fn solve_u(&self, b: Vec4<S>) -> Vec4<S> {
        Vec4::from(lu::solve_upper(&self.m, b.into()))
    }

    pub fn determinant(&self) -> S {
        let (_, u) = lu::decompose(&self.m);
        u[0][0] * u[1][1] * u[2][2] * u[3][3]
    }

    /// Matrix-Vec4 product
    #[inline]
    pub fn mul_vec4(&self, v: Vec4<S>) -> Vec4<S> {
        Vec4::from(lu::mul_vec(&self.m, v.into()))
    }

    /// Transform a point (w=1, includes translation)
    #[inline]
    pub fn transform_point(&self, p: Vec3<S>) -> Vec3<S> {
        self.mul_vec4(p.extend(S::ONE)).extract_vec3()
    }

    /// Transform a vector (w=0, ignores translation)
    #[inline]
    pub fn transform_vec(&self, v: Vec3<S>) -> Vec3<S> {
        self.mul_vec4(v.extend(S::ZERO)).extract_vec3()
    }

    /// Matrix-matrix product
    #[inline]
    pub fn mul_mat(&self, rhs: &Mat4<S>) -> Mat4<S> {
        Mat4::from_rows(lu::mul(&self.m, &rhs.m))
    }
}

impl<S: Scalar> Index<(usize, usize)> for Mat4<S> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        match check_element(row, col, 4) {
            Ok((r, c)) => &self.m[r][c],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<S: Scalar> IndexMut<(usize, usize)> for Mat4<S> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut S {
        match check_element(row, col, 4) {
            Ok((r, c)) => &mut self.m[r][c],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<S: Scalar> Default for Mat4<S> {
    fn default() -> Self { Self::identity() }
}

impl<S: Scalar> Add for Mat4<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::from_rows(lu::zip_with(&self.m, &rhs.m, |a, b| a + b))
    }
}

impl<S: Scalar> Sub for Mat4<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::from_rows(lu::zip_with(&self.m, &rhs.m, |a, b| a - b))
    }
}

impl<S: Scalar> Neg for Mat4<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self {
        Self::from_rows(lu::map(&self.m, |a| -a))
    }
}

impl<S: Scalar> Mul<S> for Mat4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self {
        Self::from_rows(lu::map(&self.m, |a| a * rhs))
    }
}

// Mat4 * Vec4
impl<S: Scalar> Mul<Vec4<S>> for Mat4<S> {
    type Output = Vec4<S>;
    #[inline] fn mul(self, rhs: Vec4<S>) -> Vec4<S> { self.mul_vec4(rhs) }
}

// Mat4 * Mat4
impl<S: Scalar> Mul for Mat4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { self.mul_mat(&rhs) }
}

impl<S: Scalar> core::fmt::Display for Mat4<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for (i, r) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "| {} {} {} {} |", r[0], r[1], r[2], r[3])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mat4<f64> {
        Mat4::new(
            5.0, 1.0, 0.0, 2.0,
            1.0, 6.0, 1.0, 0.0,
            0.0, 2.0, 7.0, 1.0,
            1.0, 0.0, 1.0, 8.0,
        )
    }

    fn assert_close(a: &Mat4<f64>, b: &Mat4<f64>, eps: f64) {
        for r in 0..4 {
            for c in 0..4 {
                assert!((a.get(r, c) - b.get(r, c)).abs() < eps,
                    "mismatch at ({}, {}): {} vs {}", r, c, a.get(r, c), b.get(r, c));
            }
        }
    }

    #[test]
    fn identity_transform() {
        let m = Mat4::<f64>::default();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(m.transform_point(p), p);
        assert_eq!(sample() * m, sample());
        assert_eq!(m * sample(), sample());
    }

    #[test]
    fn translation() {
        let m = Mat4::translation(10.0, 20.0, 30.0);
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(m.transform_point(p), Vec3::new(11.0, 22.0, 33.0));
        assert_eq!(m.transform_vec(p), p);
        assert_eq!(m.data()[3], 10.0);
    }

    #[test]
    fn transpose_involution() {
        let m = sample();
        let mut t = m;
        assert_eq!(t.transpose().get(0, 3), 1.0);
        assert_eq!(*t.transpose(), m);
    }

    #[test]
    fn decompose_reconstructs() {
        let (l, u) = sample().decompose();
        assert_close(&(l * u), &sample(), 1e-12);
        for i in 0..4 {
            assert_eq!(l.get(i, i), 1.0);
            for j in (i + 1)..4 {
                assert_eq!(l.get(i, j), 0.0);
                assert_eq!(u.get(j, i), 0.0);
            }
        }
    }

    #[test]
    fn inverse_roundtrip() {
        let m = sample();
        let mi = m.inverted();
        assert_close(&(m * mi), &Mat4::identity(), 1e-12);
        let mut back = mi;
        back.invert();
        assert_close(&back, &m, 1e-12);
    }

    #[test]
    fn inverse_of_translation() {
        let mut m = Mat4::translation(1.0, -2.0, 3.0);
        m.invert();
        assert_close(&m, &Mat4::translation(-1.0, 2.0, -3.0), 1e-15);
    }

    #[test]
    fn extract_and_embed_mat3() {
        let m = sample();
        let m3 = m.extract_mat3();
        assert_eq!(m3, Mat3::new(5.0, 1.0, 0.0, 1.0, 6.0, 1.0, 0.0, 2.0, 7.0));
        let back = Mat4::from_mat3(&m3);
        assert_eq!(back.extract_mat3(), m3);
        assert_eq!(back.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(back.col(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn add_sub_neg_scale() {
        let a = Mat4::<f64>::identity();
        assert_eq!((a + a).get(0, 0), 2.0);
        assert_eq!(a - a, Mat4::zero());
        assert_eq!((-a).get(3, 3), -1.0);
        assert_eq!((a * 3.0).get(1, 1), 3.0);
    }

    #[test]
    fn determinant_matches_triangular_product() {
        let m = Mat4::new(
            2.0, 1.0, 0.0, 3.0,
            0.0, 3.0, 4.0, 1.0,
            0.0, 0.0, 1.0, 5.0,
            0.0, 0.0, 0.0, 0.5,
        );
        assert!((m.determinant() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn checked_access() {
        let m = Mat4::<f64>::identity();
        assert_eq!(m.try_get(3, 3), Ok(1.0));
        assert!(m.try_get(4, 0).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range for a 4x4 matrix")]
    fn set_out_of_range_panics() {
        let mut m = Mat4::<f64>::identity();
        m.set(4, 0, 1.0);
    }

    #[test]
    #[cfg(feature = "std")]
    fn display_prints_rows() {
        use std::string::ToString;
        let m = Mat4::<f64>::translation(1.0, 2.0, 3.0);
        assert_eq!(
            m.to_string(),
            "| 1 0 0 1 |\n| 0 1 0 2 |\n| 0 0 1 3 |\n| 0 0 0 1 |"
        );
    }
}
