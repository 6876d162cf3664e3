use crate::Error;

/// Named component index for vectors and quaternions.
///
/// `X`, `Y`, `Z` address every type; `W` only exists on 4-component values.
/// Indexing a `Vec3` with `W` is out of range and panics like any other
/// bad index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
}

impl Axis {
    /// The three spatial axes, in storage order.
    pub const XYZ: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
    /// All four axes, in storage order.
    pub const XYZW: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<Axis> for usize {
    #[inline]
    fn from(axis: Axis) -> usize {
        axis.index()
    }
}

impl TryFrom<usize> for Axis {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Error> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            3 => Ok(Axis::W),
            _ => Err(Error::ComponentOutOfRange { index, len: 4 }),
        }
    }
}
