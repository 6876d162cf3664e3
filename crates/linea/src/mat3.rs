use crate::error::check_element;
use crate::{lu, Error, Scalar, Vec3};
use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// 3x3 matrix, row-major storage.
///
/// `get(row, col)` addresses element `(row, col)`, which [`data()`](Self::data)
/// exposes at offset `row * 3 + col`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<S> {
    m: [[S; 3]; 3],
}

impl<S: Scalar> Mat3<S> {
    /// Construct from individual elements in row-major order.
    /// ```text
    /// | m00 m01 m02 |
    /// | m10 m11 m12 |
    /// | m20 m21 m22 |
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(m00: S, m01: S, m02: S, m10: S, m11: S, m12: S, m20: S, m21: S, m22: S) -> Self {
        Self::from_rows([[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]])
    }

    #[inline]
    pub fn from_rows(m: [[S; 3]; 3]) -> Self {
        Self { m }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_rows([[S::ZERO; 3]; 3])
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_rows(lu::identity())
    }

    /// Element `(row, col)`. Panics when either index is outside `0..3`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self[(row, col)]
    }

    /// Overwrite element `(row, col)`. Panics when either index is outside `0..3`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: S) {
        self[(row, col)] = value;
    }

    #[inline]
    pub fn try_get(&self, row: usize, col: usize) -> Result<S, Error> {
        check_element(row, col, 3).map(|(r, c)| self.m[r][c])
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vec3<S> {
        Vec3::from(self.m[i])
    }

    #[inline]
    pub fn col(&self, i: usize) -> Vec3<S> {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Row-major view of all nine elements.
    #[inline]
    pub fn data(&self) -> &[S] {
        self.m.as_flattened()
    }

    /// Transpose in place; returns the receiver for chaining.
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

    /// Doolittle LU decomposition, returned as `(lower, upper)`.
    ///
    /// `lower` has a unit diagonal and `self == lower * upper`. No pivoting is
    /// performed, so a zero leading minor yields infinities or NaN.
    pub fn decompose(&self) -> (Mat3<S>, Mat3<S>) {
        let (l, u) = lu::decompose(&self.m);
        (Mat3::from_rows(l), Mat3::from_rows(u))
    }

    /// Replace `self` with its inverse, computed from [`decompose`](Self::decompose)
    /// by forward then backward substitution against each identity column.
    ///
    /// Singular input is not detected.
    pub fn invert(&mut self) -> &mut Self {
        self.m = lu::invert(&self.m);
        self
    }

    pub fn inverted(&self) -> Self {
        Self::from_rows(lu::invert(&self.m))
    }

    /// Solve `self * x = b` treating `self` as lower triangular (forward substitution).
    ///
    /// Only the diagonal and the elements below it are read.
    pub fn solve_l(&self, b: Vec3<S>) -> Vec3<S> {
        Vec3::from(lu::solve_lower(&self.m, b.into()))
    }

    /// Solve `self * x = b` treating `self` as upper triangular (backward substitution).
    ///
    /// Only the diagonal and the elements above it are read.
    pub fn solve_u(&self, b: Vec3<S>) -> Vec3<S> {
        Vec3::from(lu::solve_upper(&self.m, b.into()))
    }

    /// Product of the pivots of the LU decomposition.
    pub fn determinant(&self) -> S {
        let (_, u) = lu::decompose(&self.m);
        u[0][0] * u[1][1] * u[2][2]
    }

    #[inline]
    pub fn mul_vec(&self, v: Vec3<S>) -> Vec3<S> {
        Vec3::from(lu::mul_vec(&self.m, v.into()))
    }

    #[inline]
    pub fn mul_mat(&self, rhs: &Mat3<S>) -> Mat3<S> {
        Mat3::from_rows(lu::mul(&self.m, &rhs.m))
    }
}

impl<S: Scalar> Index<(usize, usize)> for Mat3<S> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        match check_element(row, col, 3) {
            Ok((r, c)) => &self.m[r][c],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<S: Scalar> IndexMut<(usize, usize)> for Mat3<S> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut S {
        match check_element(row, col, 3) {
            Ok((r, c)) => &mut self.m[r][c],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<S: Scalar> Default for Mat3<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Add for Mat3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_rows(lu::zip_with(&self.m, &rhs.m, |a, b| a + b))
    }
}

impl<S: Scalar> Sub for Mat3<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_rows(lu::zip_with(&self.m, &rhs.m, |a, b| a - b))
    }
}

impl<S: Scalar> Neg for Mat3<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_rows(lu::map(&self.m, |a| -a))
    }
}

impl<S: Scalar> Mul<S> for Mat3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_rows(lu::map(&self.m, |a| a * rhs))
    }
}

// Mat3 * Vec3
impl<S: Scalar> Mul<Vec3<S>> for Mat3<S> {
    type Output = Vec3<S>;
    #[inline]
    fn mul(self, rhs: Vec3<S>) -> Vec3<S> {
        self.mul_vec(rhs)
    }
}

// Mat3 * Mat3
impl<S: Scalar> Mul for Mat3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl<S: Scalar> core::fmt::Display for Mat3<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for (i, r) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "| {} {} {} |", r[0], r[1], r[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &Mat3<f64>, b: &Mat3<f64>, eps: f64) {
        for r in 0..3 {
            for c in 0..3 {
                assert!((a.get(r, c) - b.get(r, c)).abs() < eps,
                    "mismatch at ({}, {}): {} vs {}", r, c, a.get(r, c), b.get(r, c));
            }
        }
    }

    #[test]
    fn default_is_identity() {
        let m = Mat3::<f64>::default();
        assert_eq!(m, Mat3::identity());
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(m * v, v);
    }

    #[test]
    fn product_with_identity() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m * Mat3::identity(), m);
        assert_eq!(Mat3::identity() * m, m);
    }

    #[test]
    fn product_by_hand() {
        let a = Mat3::new(1.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0);
        let b = Mat3::new(1.0, 0.0, 0.0, 3.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(a * b, Mat3::new(7.0, 2.0, 0.0, 3.0, 1.0, 0.0, 0.0, 0.0, 2.0));
        assert_eq!(a * Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 1.0, 2.0));
    }

    #[test]
    fn transpose() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let mut mt = m;
        mt.transpose();
        assert_eq!(mt.get(0, 1), 4.0);
        assert_eq!(mt.get(1, 0), 2.0);
        assert_eq!(*mt.transpose(), m);
        assert_eq!(m.transposed().transposed(), m);
    }

    #[test]
    fn row_major_data() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.data()[1 * 3 + 2], m.get(1, 2));
        assert_eq!(m.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m.row(2), Vec3::new(7.0, 8.0, 9.0));
        assert_eq!(m.col(2), Vec3::new(3.0, 6.0, 9.0));
    }

    #[test]
    fn decompose_reconstructs() {
        let m = Mat3::new(4.0, 3.0, 2.0, 2.0, 1.0, 3.0, 3.0, 2.0, 1.0);
        let (l, u) = m.decompose();
        for i in 0..3 {
            assert_eq!(l.get(i, i), 1.0);
        }
        assert_eq!(l.get(0, 1), 0.0);
        assert_eq!(u.get(2, 0), 0.0);
        assert_close(&(l * u), &m, 1e-12);
    }

    #[test]
    fn identity_inverts_to_itself() {
        let mut m = Mat3::<f64>::identity();
        assert_eq!(*m.invert(), Mat3::identity());
    }

    #[test]
    fn inverse() {
        let m = Mat3::new(4.0, 1.0, 2.0, 1.0, 5.0, 1.0, 2.0, 1.0, 6.0);
        let mi = m.inverted();
        assert_close(&(m * mi), &Mat3::identity(), 1e-12);

        let mut twice = m;
        twice.invert().invert();
        assert_close(&twice, &m, 1e-12);
    }

    #[test]
    fn solve_against_factors() {
        let m = Mat3::new(2.0, 1.0, 1.0, 4.0, -6.0, 0.0, -2.0, 7.0, 2.0);
        let b = Vec3::new(5.0, -2.0, 9.0);
        let (l, u) = m.decompose();
        let x = u.solve_u(l.solve_l(b));
        let r = m * x - b;
        assert!(r.length() < 1e-12);
    }

    #[test]
    fn determinant() {
        let id = Mat3::<f64>::identity();
        assert!((id.determinant() - 1.0).abs() < 1e-10);
        let m: Mat3<f64> = Mat3::new(2.0, 0.0, 0.0, 1.0, 3.0, 0.0, 5.0, 6.0, 4.0);
        assert!((m.determinant() - 24.0).abs() < 1e-10);
    }

    #[test]
    fn difference_with_self_is_zero() {
        let m = Mat3::new(1.5, -2.0, 3.0, 4.0, 0.5, 6.0, -7.0, 8.0, 9.25);
        assert_eq!(m - m, Mat3::zero());
        assert_eq!(m + (-m), Mat3::zero());
        assert_eq!((m * 2.0).get(2, 2), 18.5);
    }

    #[test]
    fn checked_access() {
        let m = Mat3::<f32>::identity();
        assert_eq!(m.try_get(2, 2), Ok(1.0));
        assert_eq!(
            m.try_get(3, 0),
            Err(Error::ElementOutOfRange { row: 3, col: 0, dim: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "out of range for a 3x3 matrix")]
    fn get_out_of_range_panics() {
        Mat3::<f64>::identity().get(0, 3);
    }
}
