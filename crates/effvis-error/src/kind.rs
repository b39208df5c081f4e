//! Error kinds for effvis operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help embedders write clear error handling
/// logic. Users can match on ErrorKind to decide how to handle specific cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid argument passed to a store or resolver API
    InvalidArgument,

    /// A descriptor handle does not refer to anything in the store
    UnknownHandle,

    /// A class participates in an inheritance cycle
    CyclicInheritance,

    /// A supertype entry is not backed by a class constructor
    MalformedSupertype,

    /// A structural invariant of the descriptor graph was violated
    InvariantViolation,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::CyclicInheritance.to_string(), "CyclicInheritance");
        assert_eq!(ErrorKind::UnknownHandle.to_string(), "UnknownHandle");
    }
}
