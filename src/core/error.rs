use thiserror::Error;

/// Internal failures of a validator.
///
/// These never reach the caller of
/// [`Verifier::verify_business`](crate::core::Verifier::verify_business);
/// the dispatcher converts them into results tagged `Error`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VerifyError {
    /// An identifier pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// A validator panicked.
    #[error("internal error: {0}")]
    Internal(String),
}
