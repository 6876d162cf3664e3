use crate::error::check_component;
use crate::{Axis, Error, Scalar, Vec4};
use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// Three-component vector: a point or direction in 3-space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Vec3<S> {
    pub const ZERO: Self = Self { x: S::ZERO, y: S::ZERO, z: S::ZERO };
    pub const UNIT_X: Self = Self { x: S::ONE, y: S::ZERO, z: S::ZERO };
    pub const UNIT_Y: Self = Self { x: S::ZERO, y: S::ONE, z: S::ZERO };
    pub const UNIT_Z: Self = Self { x: S::ZERO, y: S::ZERO, z: S::ONE };

    #[inline]
    pub fn new(x: S, y: S, z: S) -> Self { Self { x, y, z } }

    #[inline]
    pub fn splat(v: S) -> Self { Self::new(v, v, v) }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn square_length(self) -> S { self.dot(self) }

    #[inline]
    pub fn length(self) -> S { self.square_length().sqrt() }

    /// Scales the vector to unit length in place and returns it for chaining.
    ///
    /// A zero vector divides by zero and comes back as NaN.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let n = self.length();
        self.x /= n;
        self.y /= n;
        self.z /= n;
        self
    }

    /// Unit-length copy; see [`normalize`](Self::normalize).
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Extend to Vec4 with a given w component
    #[inline]
    pub fn extend(self, w: S) -> Vec4<S> {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Component by index (`0..3`). Panics when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> S { self[index] }

    /// Overwrite a component by index (`0..3`). Panics when out of range.
    #[inline]
    pub fn set(&mut self, index: usize, value: S) { self[index] = value; }

    #[inline]
    pub fn try_get(&self, index: usize) -> Result<S, Error> {
        check_component(index, 3).map(|i| self[i])
    }

    /// Components as a contiguous slice: `[x, y, z]`.
    #[inline]
    pub fn data(&self) -> &[S] {
        // SAFETY: #[repr(C)] with three fields of the same type, no padding
        unsafe { core::slice::from_raw_parts(self as *const Self as *const S, 3) }
    }
}

impl<S: Scalar> Default for Vec3<S> {
    fn default() -> Self { Self::ZERO }
}

impl<S: Scalar> From<[S; 3]> for Vec3<S> {
    fn from(a: [S; 3]) -> Self { Self::new(a[0], a[1], a[2]) }
}

impl<S: Scalar> From<Vec3<S>> for [S; 3] {
    fn from(v: Vec3<S>) -> Self { [v.x, v.y, v.z] }
}

impl<S: Scalar> Index<usize> for Vec3<S> {
    type Output = S;
    #[inline]
    fn index(&self, index: usize) -> &S {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", Error::ComponentOutOfRange { index, len: 3 }),
        }
    }
}

impl<S: Scalar> IndexMut<usize> for Vec3<S> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut S {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("{}", Error::ComponentOutOfRange { index, len: 3 }),
        }
    }
}

impl<S: Scalar> Index<Axis> for Vec3<S> {
    type Output = S;
    #[inline]
    fn index(&self, axis: Axis) -> &S { &self[axis.index()] }
}

impl<S: Scalar> IndexMut<Axis> for Vec3<S> {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut S { &mut self[axis.index()] }
}

impl<S: Scalar> Add for Vec3<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<S: Scalar> Sub for Vec3<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<S: Scalar> Neg for Vec3<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}

impl<S: Scalar> Mul<S> for Vec3<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<S: Scalar> Div<S> for Vec3<S> {
    type Output = Self;
    #[inline] fn div(self, rhs: S) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<S: Scalar> AddAssign for Vec3<S> {
    #[inline] fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x; self.y += rhs.y; self.z += rhs.z;
    }
}

impl<S: Scalar> SubAssign for Vec3<S> {
    #[inline] fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x; self.y -= rhs.y; self.z -= rhs.z;
    }
}

impl<S: Scalar> MulAssign<S> for Vec3<S> {
    #[inline] fn mul_assign(&mut self, rhs: S) {
        self.x *= rhs; self.y *= rhs; self.z *= rhs;
    }
}

// Scalar * Vec3 (commutative)
impl Mul<Vec3<f64>> for f64 {
    type Output = Vec3<f64>;
    #[inline] fn mul(self, rhs: Vec3<f64>) -> Vec3<f64> { rhs * self }
}

impl Mul<Vec3<f32>> for f32 {
    type Output = Vec3<f32>;
    #[inline] fn mul(self, rhs: Vec3<f32>) -> Vec3<f32> { rhs * self }
}

impl<S: Scalar> core::fmt::Display for Vec3<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
