use thiserror::Error;
use tracing::debug;

use super::body::{BodyError, ErrorResponse};

/// A failed API call, as handed to [`reject`]
#[derive(Debug)]
pub enum Failure<R, E> {
    /// The server answered; its body explains the failure
    Response(R),
    /// Anything without a response to read (transport error, timeout, ...)
    Other(E),
}

impl<R> From<reqwest::Error> for Failure<R, reqwest::Error> {
    fn from(err: reqwest::Error) -> Self {
        Self::Other(err)
    }
}

/// Rejection reason produced by [`reject`]
#[derive(Debug, Error)]
pub enum ApiError<E> {
    /// Message taken from the server's error body
    #[error("{message}")]
    Api { message: String },

    /// The error body itself could not be read or decoded
    #[error(transparent)]
    Body(#[from] BodyError),

    /// The original failure, untouched
    #[error("{0}")]
    Other(E),
}

impl<E> ApiError<E> {
    /// Message of a normalized API error, `None` for the other variants
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message } => Some(message),
            _ => None,
        }
    }

    /// Hand back the original failure if it was passed through
    pub fn into_other(self) -> Option<E> {
        match self {
            Self::Other(err) => Some(err),
            _ => None,
        }
    }
}

/// Turn a failed call into a rejected result
///
/// A failure carrying a response has its body parsed and is replaced by an
/// [`ApiError::Api`] holding only the body's `message`. Any other failure is
/// returned unchanged inside [`ApiError::Other`]. A body that cannot be parsed
/// surfaces as [`ApiError::Body`] instead of being wrapped.
///
/// The result is always `Err`.
pub async fn reject<T, R, E>(failure: Failure<R, E>) -> Result<T, ApiError<E>>
where
    R: ErrorResponse,
{
    let error = match failure {
        Failure::Response(response) => {
            let body = response.error_body().await?;
            debug!(
                reason = body.reason.as_deref().unwrap_or(""),
                code = body.code.unwrap_or_default(),
                "Normalized API error: {}",
                body.message
            );
            ApiError::Api {
                message: body.message,
            }
        }
        Failure::Other(err) => ApiError::Other(err),
    };

    Err(error)
}
