//! Error type for checked element access.

/// Errors reported by the checked (`try_*`) accessors.
///
/// The unchecked accessors (`get`, `set`, indexing) panic with the same
/// message instead of returning it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A vector or quaternion component index past the last component.
    #[error("component index {index} out of range for a {len}-component value")]
    ComponentOutOfRange { index: usize, len: usize },
    /// A matrix row or column past the last one.
    #[error("element ({row}, {col}) out of range for a {dim}x{dim} matrix")]
    ElementOutOfRange { row: usize, col: usize, dim: usize },
}

/// Checks a component index against `len`, returning it unchanged when valid.
#[inline]
pub(crate) fn check_component(index: usize, len: usize) -> Result<usize, Error> {
    if index < len {
        Ok(index)
    } else {
        Err(Error::ComponentOutOfRange { index, len })
    }
}

/// Checks a `(row, col)` pair against a `dim`x`dim` matrix.
#[inline]
pub(crate) fn check_element(row: usize, col: usize, dim: usize) -> Result<(usize, usize), Error> {
    if row < dim && col < dim {
        Ok((row, col))
    } else {
        Err(Error::ElementOutOfRange { row, col, dim })
    }
}
