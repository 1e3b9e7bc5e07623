//! Minimal error set for draws, grouped lookups, and argument faults.

use alloc::string::String;
use core::fmt;

/// Draw-time and argument errors shared across the toolkit.
///
/// Every failure is raised at the point it occurs and propagates out of
/// the calling operation; there is no retry and no partial result.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DrawError {
    /// Wrong shape of input to a public operation (e.g. a named-field
    /// write onto a value that is not a record).
    InvalidArgument(&'static str),
    /// Draw from a pool whose candidate snapshot is empty.
    EmptyPool,
    /// Consumable draw with the working set exhausted and regeneration off.
    Depleted,
    /// Grouped draw for a key with no registered pool.
    UnknownKey(String),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            DrawError::EmptyPool => write!(f, "empty pool"),
            DrawError::Depleted => write!(f, "pool depleted"),
            DrawError::UnknownKey(k) => write!(f, "unknown key: {k}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DrawError {}
