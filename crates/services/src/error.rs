//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::QuizError;

/// Errors emitted by question providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("invalid provider url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("provider request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("provider rejected the request (code {code}): {reason}")]
    Api { code: u8, reason: &'static str },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ProviderError {
    pub(crate) fn api(code: u8) -> Self {
        ProviderError::Api {
            code,
            reason: describe_response_code(code),
        }
    }

    /// The provider ran out of unseen questions for the current token.
    #[must_use]
    pub fn is_token_exhausted(&self) -> bool {
        matches!(self, ProviderError::Api { code: 4, .. })
    }
}

/// Human-readable meaning of the provider's `response_code` field.
#[must_use]
pub fn describe_response_code(code: u8) -> &'static str {
    match code {
        0 => "success",
        1 => "not enough questions for the query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token has returned every available question",
        5 => "rate limit exceeded",
        _ => "unknown response code",
    }
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
