//! Error types for GF(2) sparse matrix operations

/// Errors that can occur during matrix and vector operations
///
/// Every variant describes a violated calling contract. Operations check
/// their arguments before touching any storage, so a returned error never
/// leaves the destination half-updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BsmatError {
    /// A row, column or vector index outside `[0, extent)`
    IndexOutOfRange { index: usize, extent: usize },
    /// Operand dimensions do not line up
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Malformed constructor input or a degenerate extent
    InvalidArgument(&'static str),
    /// The destination shares storage with one of the operands
    SelfAliasViolation,
    /// A decoded payload breaks the coordinate-form invariants
    CorruptedData(&'static str),
    /// The payload could not be encoded or decoded
    Serialization(&'static str),
}

/// Coarse classification of [`BsmatError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Bounds,
    Shape,
    Argument,
    Aliasing,
    Encoding,
}

impl BsmatError {
    /// Get the category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            BsmatError::IndexOutOfRange { .. } => ErrorCategory::Bounds,
            BsmatError::ShapeMismatch { .. } => ErrorCategory::Shape,
            BsmatError::InvalidArgument(_) => ErrorCategory::Argument,
            BsmatError::SelfAliasViolation => ErrorCategory::Aliasing,
            BsmatError::CorruptedData(_) | BsmatError::Serialization(_) => ErrorCategory::Encoding,
        }
    }
}

impl core::fmt::Display for BsmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BsmatError::IndexOutOfRange { index, extent } => {
                if *extent == 0 {
                    write!(f, "{index} out of range: extent is empty")
                } else {
                    write!(f, "{index} out of range: [0-{}]", extent - 1)
                }
            }
            BsmatError::ShapeMismatch { expected, found } => write!(
                f,
                "shape mismatch: expected ({},{}) found ({},{})",
                expected.0, expected.1, found.0, found.1
            ),
            BsmatError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            BsmatError::SelfAliasViolation => {
                write!(f, "destination aliases an operand, self assignment not allowed")
            }
            BsmatError::CorruptedData(msg) => write!(f, "corrupted data: {msg}"),
            BsmatError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BsmatError {}

/// Result type for matrix and vector operations
pub type Result<T> = core::result::Result<T, BsmatError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        let err = BsmatError::IndexOutOfRange {
            index: 7,
            extent: 5,
        };
        assert_eq!(err.to_string(), "7 out of range: [0-4]");

        let err = BsmatError::ShapeMismatch {
            expected: (2, 3),
            found: (3, 2),
        };
        assert_eq!(err.to_string(), "shape mismatch: expected (2,3) found (3,2)");
    }

    #[test]
    fn test_category() {
        assert_eq!(
            BsmatError::IndexOutOfRange { index: 0, extent: 0 }.category(),
            ErrorCategory::Bounds
        );
        assert_eq!(BsmatError::SelfAliasViolation.category(), ErrorCategory::Aliasing);
        assert_eq!(
            BsmatError::CorruptedData("unsorted").category(),
            ErrorCategory::Encoding
        );
    }
}
