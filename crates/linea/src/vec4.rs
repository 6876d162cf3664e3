use crate::error::check_component;
use crate::{Axis, Error, Scalar, Vec3};
use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// Four-component vector in homogeneous coordinates.
///
/// The default value is the origin point `(0, 0, 0, 1)`, not the zero
/// vector; use [`Vec4::ZERO`] for that.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: Scalar> Vec4<S> {
    pub const ZERO: Self = Self { x: S::ZERO, y: S::ZERO, z: S::ZERO, w: S::ZERO };

    #[inline]
    pub fn new(x: S, y: S, z: S, w: S) -> Self { Self { x, y, z, w } }

    /// Copies x, y, z from `v` and takes `w` as given.
    #[inline]
    pub fn from_vec3(v: Vec3<S>, w: S) -> Self { Self::new(v.x, v.y, v.z, w) }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[inline]
    pub fn square_length(self) -> S { self.dot(self) }

    #[inline]
    pub fn length(self) -> S { self.square_length().sqrt() }

    /// Scales all four components by `1 / length()` in place. No zero guard.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let n = self.length();
        self.x /= n;
        self.y /= n;
        self.z /= n;
        self.w /= n;
        self
    }

    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Drop w
    #[inline]
    pub fn extract_vec3(self) -> Vec3<S> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Component by index (`0..4`). Panics when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> S { self[index] }

    /// Overwrite a component by index (`0..4`). Panics when out of range.
    #[inline]
    pub fn set(&mut self, index: usize, value: S) { self[index] = value; }

    #[inline]
    pub fn try_get(&self, index: usize) -> Result<S, Error> {
        check_component(index, 4).map(|i| self[i])
    }

    /// Components as a contiguous slice: `[x, y, z, w]`.
    #[inline]
    pub fn data(&self) -> &[S] {
        // SAFETY: #[repr(C)] with four fields of the same type, no padding
        unsafe { core::slice::from_raw_parts(self as *const Self as *const S, 4) }
    }
}

impl<S: Scalar> Default for Vec4<S> {
    fn default() -> Self { Self::new(S::ZERO, S::ZERO, S::ZERO, S::ONE) }
}

impl<S: Scalar> From<[S; 4]> for Vec4<S> {
    fn from(a: [S; 4]) -> Self { Self::new(a[0], a[1], a[2], a[3]) }
}

impl<S: Scalar> From<Vec4<S>> for [S; 4] {
    fn from(v: Vec4<S>) -> Self { [v.x, v.y, v.z, v.w] }
}

impl<S: Scalar> Index<usize> for Vec4<S> {
    type Output = S;
    #[inline]
    fn index(&self, index: usize) -> &S {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("{}", Error::ComponentOutOfRange { index, len: 4 }),
        }
    }
}

impl<S: Scalar> IndexMut<usize> for Vec4<S> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut S {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("{}", Error::ComponentOutOfRange { index, len: 4 }),
        }
    }
}

impl<S: Scalar> Index<Axis> for Vec4<S> {
    type Output = S;
    #[inline]
    fn index(&self, axis: Axis) -> &S { &self[axis.index()] }
}

impl<S: Scalar> IndexMut<Axis> for Vec4<S> {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut S { &mut self[axis.index()] }
}

impl<S: Scalar> Add for Vec4<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl<S: Scalar> Sub for Vec4<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl<S: Scalar> Neg for Vec4<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z, -self.w) }
}

impl<S: Scalar> Mul<S> for Vec4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl<S: Scalar> Div<S> for Vec4<S> {
    type Output = Self;
    #[inline] fn div(self, rhs: S) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl<S: Scalar> AddAssign for Vec4<S> {
    #[inline] fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x; self.y += rhs.y; self.z += rhs.z; self.w += rhs.w;
    }
}

impl<S: Scalar> SubAssign for Vec4<S> {
    #[inline] fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x; self.y -= rhs.y; self.z -= rhs.z; self.w -= rhs.w;
    }
}

impl<S: Scalar> MulAssign<S> for Vec4<S> {
    #[inline] fn mul_assign(&mut self, rhs: S) {
        self.x *= rhs; self.y *= rhs; self.z *= rhs; self.w *= rhs;
    }
}

impl Mul<Vec4<f64>> for f64 {
    type Output = Vec4<f64>;
    #[inline] fn mul(self, rhs: Vec4<f64>) -> Vec4<f64> { rhs * self }
}

impl Mul<Vec4<f32>> for f32 {
    type Output = Vec4<f32>;
    #[inline] fn mul(self, rhs: Vec4<f32>) -> Vec4<f32> { rhs * self }
}

impl<S: Scalar> core::fmt::Display for Vec4<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_homogeneous_origin() {
        assert_eq!(Vec4::<f64>::default(), Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_ne!(Vec4::<f64>::default(), Vec4::ZERO);
    }

    #[test]
    fn dot_product() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.dot(b), 70.0); // 5+12+21+32
    }

    #[test]
    fn normalize() {
        let mut v = Vec4::<f64>::new(1.0, 2.0, 2.0, 0.0);
        assert!((v.normalize().length() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn add_assign() {
        let mut a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        a += Vec4::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a, Vec4::new(11.0, 22.0, 33.0, 44.0));
    }

    #[test]
    fn extract_and_rebuild() {
        let v4 = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let v3 = v4.extract_vec3();
        assert_eq!(v3, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec4::from_vec3(v3, 4.0), v4);
        assert_eq!(v3.extend(4.0), v4);
    }

    #[test]
    fn neg() {
        let v = Vec4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-v, Vec4::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(v + (-v), Vec4::ZERO);
    }

    #[test]
    fn indexed_access() {
        let mut v = Vec4::<f32>::default();
        v.set(Axis::Z.index(), 5.0);
        v[1] = 6.0;
        assert_eq!(v[Axis::W], 1.0);
        assert_eq!(v.data(), &[0.0, 6.0, 5.0, 1.0]);
        assert!(v.try_get(4).is_err());
    }

    #[test]
    #[should_panic]
    fn out_of_range_panics() {
        let v = Vec4::<f64>::ZERO;
        v.get(4);
    }
}
