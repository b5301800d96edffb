#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use apiswag_core::AppError;
use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Conversion or encoding failure reported by the core crate.
    #[display("{}", _0)]
    Core(AppError),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// `General(String)` holds a `String`, which is not an error source, so the
/// trait is implemented by hand rather than derived.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_passes_display_through() {
        let err: CliError = AppError::General("bad ir".into()).into();
        assert_eq!(err.to_string(), "General Error: bad ir");
    }

    #[test]
    fn test_string_is_general() {
        let err: CliError = String::from("nope").into();
        assert!(matches!(err, CliError::General(_)));
    }
}
