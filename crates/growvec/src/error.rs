//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
///
/// Out-of-bounds indexed access is deliberately not represented here: it
/// is a caller precondition violation and panics via checked slice
/// indexing rather than returning a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrowVecError {
    /// The backing store could not grow to the required capacity.
    ///
    /// The failed operation has no observable effect — length, capacity,
    /// and contents are exactly as they were before the call.
    OutOfMemory {
        /// The capacity (in elements) that the growth policy requested.
        requested: usize,
    },
}

impl fmt::Display for GrowVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: could not grow to {requested} elements")
            }
        }
    }
}

impl Error for GrowVecError {}
