//! Doolittle LU decomposition and triangular solves over square row-major
//! arrays. Mat3 and Mat4 wrap these with their own vector types.
//!
//! No pivoting: a zero pivot divides by zero and the non-finite values flow
//! into the factors. Callers own the conditioning of their matrices.

use crate::Scalar;

pub(crate) type Grid<S, const N: usize> = [[S; N]; N];

pub(crate) fn identity<S: Scalar, const N: usize>() -> Grid<S, N> {
    let mut m = [[S::ZERO; N]; N];
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = S::ONE;
    }
    m
}

/// Factor `a` into unit-lower `L` and upper `U` with `a = L * U`.
pub(crate) fn decompose<S: Scalar, const N: usize>(a: &Grid<S, N>) -> (Grid<S, N>, Grid<S, N>) {
    let mut lower = identity::<S, N>();
    let mut upper = [[S::ZERO; N]; N];

    for i in 0..N {
        for j in i..N {
            let mut sum = a[i][j];
            for k in 0..i {
                sum -= lower[i][k] * upper[k][j];
            }
            upper[i][j] = sum / lower[i][i];
        }

        check_pivot(upper[i][i], i, N);

        for j in (i + 1)..N {
            let mut sum = a[j][i];
            for k in 0..i {
                sum -= lower[j][k] * upper[k][i];
            }
            lower[j][i] = sum / upper[i][i];
        }
    }

    (lower, upper)
}

#[cfg(feature = "tracing")]
#[inline]
fn check_pivot<S: Scalar>(pivot: S, index: usize, dim: usize) {
    if pivot == S::ZERO {
        tracing::warn!(row = index, pivot = ?pivot, dim, "zero pivot in LU decomposition");
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn check_pivot<S: Scalar>(_pivot: S, _index: usize, _dim: usize) {}

/// Forward substitution for `L x = b`. Only the lower triangle of `l` is read.
pub(crate) fn solve_lower<S: Scalar, const N: usize>(l: &Grid<S, N>, b: [S; N]) -> [S; N] {
    let mut x = [S::ZERO; N];
    for i in 0..N {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[i][j] * x[j];
        }
        x[i] = sum / l[i][i];
    }
    x
}

/// Back substitution for `U x = b`. Only the upper triangle of `u` is read.
pub(crate) fn solve_upper<S: Scalar, const N: usize>(u: &Grid<S, N>, b: [S; N]) -> [S; N] {
    let mut x = [S::ZERO; N];
    for i in (0..N).rev() {
        let mut sum = b[i];
        for j in ((i + 1)..N).rev() {
            sum -= u[i][j] * x[j];
        }
        x[i] = sum / u[i][i];
    }
    x
}

/// Inverse via `L z = e_i`, `U x = z` for each identity column `e_i`.
pub(crate) fn invert<S: Scalar, const N: usize>(a: &Grid<S, N>) -> Grid<S, N> {
    let (lower, upper) = decompose(a);
    let basis = identity::<S, N>();
    let mut inv = [[S::ZERO; N]; N];

    for (i, e) in basis.iter().enumerate() {
        let z = solve_lower(&lower, *e);
        let x = solve_upper(&upper, z);
        for (row, value) in inv.iter_mut().zip(x) {
            row[i] = value;
        }
    }

    inv
}

pub(crate) fn transpose<S: Scalar, const N: usize>(m: &mut Grid<S, N>) {
    for i in 0..N {
        for j in (i + 1)..N {
            let t = m[i][j];
            m[i][j] = m[j][i];
            m[j][i] = t;
        }
    }
}

pub(crate) fn mul<S: Scalar, const N: usize>(a: &Grid<S, N>, b: &Grid<S, N>) -> Grid<S, N> {
    let mut out = [[S::ZERO; N]; N];
    for i in 0..N {
        for j in 0..N {
            let mut sum = S::ZERO;
            for k in 0..N {
                sum += a[i][k] * b[k][j];
            }
            out[i][j] = sum;
        }
    }
    out
}

pub(crate) fn mul_vec<S: Scalar, const N: usize>(a: &Grid<S, N>, v: [S; N]) -> [S; N] {
    let mut out = [S::ZERO; N];
    for (o, row) in out.iter_mut().zip(a) {
        let mut sum = S::ZERO;
        for (m, x) in row.iter().zip(&v) {
            sum += *m * *x;
        }
        *o = sum;
    }
    out
}

/// Elementwise combine of two grids.
pub(crate) fn zip_with<S: Scalar, const N: usize>(
    a: &Grid<S, N>,
    b: &Grid<S, N>,
    f: impl Fn(S, S) -> S,
) -> Grid<S, N> {
    let mut out = *a;
    for (orow, brow) in out.iter_mut().zip(b) {
        for (o, x) in orow.iter_mut().zip(brow) {
            *o = f(*o, *x);
        }
    }
    out
}

pub(crate) fn map<S: Scalar, const N: usize>(a: &Grid<S, N>, f: impl Fn(S) -> S) -> Grid<S, N> {
    let mut out = *a;
    for o in out.iter_mut().flatten() {
        *o = f(*o);
    }
    out
}
