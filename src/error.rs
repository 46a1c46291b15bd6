//! Error types for medir
//!
//! The measurement loop is deterministic and performs no I/O, so the only
//! recognized failure is a kernel precondition violation: the two SAXPY
//! operands must have equal length. That error is raised before any element
//! access and is never retried: a length mismatch is a programming error,
//! not a transient condition.

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, MedirError>;

/// Errors raised by the kernel and the execution loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MedirError {
    /// Kernel operands violate a precondition (e.g. mismatched lengths)
    InvalidArgument {
        /// Human-readable description of the violated precondition
        reason: String,
    },
}

impl std::fmt::Display for MedirError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MedirError::InvalidArgument { reason } => {
                write!(f, "Invalid argument: {reason}")
            },
        }
    }
}

impl std::error::Error for MedirError {}
