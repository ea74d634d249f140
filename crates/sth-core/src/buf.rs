//! Fallible output buffers.
//!
//! Output lengths are driven by caller input (interval width, spread), so a
//! buffer that cannot be allocated is reported as an invalid argument rather
//! than aborting the process.

use crate::{SthError, SthResult};

/// An empty `Vec` with room for exactly `len` elements.
///
/// # Errors
/// [`SthError::InvalidArgument`] if the allocation fails or its size
/// overflows.
pub fn try_with_capacity<T>(len: usize, what: &str) -> SthResult<Vec<T>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len).map_err(|e| {
        SthError::InvalidArgument(format!("{what}: cannot allocate {len} elements: {e}"))
    })?;
    Ok(out)
}
