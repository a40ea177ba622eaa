//! Error types

mod api;
mod auth;

pub use api::*;
pub use auth::*;

/// Top-level error type for the back-office client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error during an API call.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Error while obtaining an access token.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl Error {
    /// Returns `true` if retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(err) => err.is_retryable(),
            Self::Auth(_) => false,
        }
    }
}
