//! Authentication error types

/// Errors that can occur while obtaining an access token.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The provider could not produce a token.
    #[error("Token acquisition failed: {0}")]
    Acquisition(String),

    /// The token has expired and cannot be refreshed.
    #[error("Token expired")]
    Expired,
}
