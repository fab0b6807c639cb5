//! Error types for grammar expansion and turtle interpretation.

use thiserror::Error;

/// Failures raised while expanding or interpreting an L-System.
///
/// Every variant aborts the call that produced it; no partial geometry is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LSystemError {
    /// A caller-supplied parameter is out of range (e.g. zero iterations, empty axiom).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A scale instruction (`@`) was not followed by a numeric literal.
    #[error("scale instruction at position {position} is missing its numeric argument")]
    MissingArgument {
        /// Char index of the offending `@` in the translated stream.
        position: usize,
    },

    /// A restore instruction (`]`) had no matching open save (`[`).
    #[error("restore instruction at position {position} has no matching save")]
    StackUnderflow {
        /// Char index of the offending `]` in the translated stream.
        position: usize,
    },

    /// Geometry was requested but the stream holds no draw instruction.
    #[error("symbol stream contains no draw instructions")]
    EmptyGeometry,
}

/// Result type alias for L-System operations.
pub type Result<T> = std::result::Result<T, LSystemError>;
