use thiserror::Error;

/// Errors produced by identifier operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    /// The input is not a well-formed `scheme:/domain:name` URN.
    #[error("invalid URN {input:?}: {reason}")]
    InvalidUrn { input: String, reason: String },
}
