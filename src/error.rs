//! Error types for field, table and encoder operations

use thiserror::Error;

/// Errors that can occur while building fields, dividing or encoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GfError {
    /// Defining polynomial bit string was rejected
    #[error("Invalid defining polynomial {bits:?}: {reason}")]
    InvalidDefiningPolynomial { bits: String, reason: &'static str },

    /// Binary field degree beyond what tables are built for
    #[error("Field degree {degree} exceeds the supported maximum of {max}")]
    FieldTooLarge { degree: u32, max: u32 },

    /// Prime order below 2
    #[error("Prime must be at least 2, got {0}")]
    InputTooSmall(u32),

    /// Order is not prime
    #[error("{0} is not prime")]
    NotPrime(u32),

    /// No candidate in [2, order) generates the multiplicative group
    #[error("Could not find a primitive element for {0}")]
    PrimitiveElementNotFound(u32),

    /// Supplied element does not generate the multiplicative group
    #[error("{element} is not a primitive element for a field of order {order}")]
    NotPrimitiveElement { element: u32, order: u32 },

    /// Field element division by zero
    #[error("Division by zero in Galois field")]
    DivisionByZero,

    /// Polynomial division by a polynomial with no nonzero coefficient
    #[error("Polynomial division by the zero polynomial")]
    ZeroDivisorPolynomial,

    /// More parity symbols than distinct consecutive roots
    #[error("Cannot build {requested} parity symbols: field supports at most {max}")]
    TooManyParitySymbols { requested: usize, max: usize },
}

/// Type alias for Result with GfError
pub type Result<T> = std::result::Result<T, GfError>;
