//! Error types for DFI economics operations

use thiserror::Error;

/// Result type alias for economics operations
pub type Result<T> = std::result::Result<T, EconomicsError>;

/// Errors that can occur at the boundary of the supply calculator.
///
/// The subsidy and supply computations themselves are total; only untrusted
/// input has to be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomicsError {
    /// Height is not a plain decimal integer
    #[error("Invalid height: {0:?}")]
    InvalidHeight(String),

    /// Height does not fit a 64-bit block index
    #[error("Height out of range: {0}")]
    HeightOutOfRange(String),
}
