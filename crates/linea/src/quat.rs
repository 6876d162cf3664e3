use crate::error::check_component;
use crate::{Axis, Error, Mat4, Scalar, Vec3};
use core::ops::{Index, IndexMut, Mul};

/// Quaternion `xi + yj + zk + w`.
///
/// Stored as vector part `(x, y, z)` followed by scalar part `w`, so
/// component indices match [`Vec4`](crate::Vec4). Represents a rotation when
/// unit length; nothing here enforces that.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: Scalar> Quat<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO, S::ONE)
    }

    /// Rotation of `angle` radians about `axis`. The axis should be unit length.
    pub fn from_axis_angle(axis: Vec3<S>, angle: S) -> Self {
        let (s, c) = (angle * S::HALF).sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    #[inline]
    fn vector(&self) -> Vec3<S> {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    fn from_parts(v: Vec3<S>, w: S) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    #[inline]
    pub fn length(&self) -> S {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Scale to unit length in place; a zero quaternion becomes NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let n = self.length();
        self.x /= n;
        self.y /= n;
        self.z /= n;
        self.w /= n;
        self
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Rotate a vector by this quaternion: q * v * q^-1
    pub fn rotate(&self, v: Vec3<S>) -> Vec3<S> {
        (*self * Self::from_parts(v, S::ZERO) * self.conjugate()).vector()
    }

    /// Homogeneous rotation matrix for a unit quaternion, acting on column
    /// vectors. The last row and column are `(0, 0, 0, 1)`.
    pub fn extract_mat4(&self) -> Mat4<S> {
        let two = S::TWO;
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);

        Mat4::new(
            S::ONE - two * (y * y + z * z), two * (x * y - w * z),          two * (x * z + w * y),          S::ZERO,
            two * (x * y + w * z),          S::ONE - two * (x * x + z * z), two * (y * z - w * x),          S::ZERO,
            two * (x * z - w * y),          two * (y * z + w * x),          S::ONE - two * (x * x + y * y), S::ZERO,
            S::ZERO,                        S::ZERO,                        S::ZERO,                        S::ONE,
        )
    }

    /// Euler angles `(about X, about Y, about Z)` in radians, Z-Y-X order
    /// (yaw, then pitch, then roll).
    ///
    /// Near ±90° pitch the `asin` argument is clamped to `[-1, 1]`, so
    /// rounding cannot turn gimbal lock into NaN.
    pub fn extract_euler_angles(&self) -> Vec3<S> {
        let two = S::TWO;
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);

        let roll = (two * (w * x + y * z)).atan2(S::ONE - two * (x * x + y * y));
        let pitch = (two * (w * y - z * x)).clamp(-S::ONE, S::ONE).asin();
        let yaw = (two * (w * z + x * y)).atan2(S::ONE - two * (y * y + z * z));

        Vec3::new(roll, pitch, yaw)
    }

    /// Component by index (`0..4`, vector part first). Panics when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> S { self[index] }

    #[inline]
    pub fn set(&mut self, index: usize, value: S) { self[index] = value; }

    #[inline]
    pub fn try_get(&self, index: usize) -> Result<S, Error> {
        check_component(index, 4).map(|i| self[i])
    }
}

impl<S: Scalar> Default for Quat<S> {
    fn default() -> Self { Self::identity() }
}

/// Hamilton product. `a * b` applies `b` first, then `a`.
impl<S: Scalar> Mul for Quat<S> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.vector(), rhs.vector());
        Self::from_parts(
            b * self.w + a * rhs.w + a.cross(b),
            self.w * rhs.w - a.dot(b),
        )
    }
}

impl<S: Scalar> Index<usize> for Quat<S> {
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

impl<S: Scalar> IndexMut<usize> for Quat<S> {
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

impl<S: Scalar> Index<Axis> for Quat<S> {
    type Output = S;
    #[inline]
    fn index(&self, axis: Axis) -> &S { &self[axis.index()] }
}

impl<S: Scalar> IndexMut<Axis> for Quat<S> {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut S { &mut self[axis.index()] }
}

impl<S: Scalar> core::fmt::Display for Quat<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {}; {})", self.x, self.y, self.z, self.w)
    }
}
