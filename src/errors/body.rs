use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Body of a failed API response
///
/// The Kubernetes API answers failures with a `Status` object; only
/// `message` is required to build the normalized error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message (empty when the server omits it)
    #[serde(default)]
    pub message: String,
    /// Machine-readable reason, e.g. `NotFound`
    #[serde(default, deserialize_with = "lenient")]
    pub reason: Option<String>,
    /// HTTP status code echoed in the body
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<u16>,
}

// Diagnostic fields only: a value of the wrong shape is dropped, never a parse failure.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Failure while reading or decoding an error body
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("failed to read error response body")]
    Read(#[source] reqwest::Error),

    #[error("malformed error response body")]
    Decode(#[from] serde_json::Error),
}

/// A response whose body can be parsed into an [`ErrorBody`]
#[async_trait]
pub trait ErrorResponse: Send {
    /// Consume the response and parse its body
    async fn error_body(self) -> Result<ErrorBody, BodyError>;
}

#[async_trait]
impl ErrorResponse for reqwest::Response {
    async fn error_body(self) -> Result<ErrorBody, BodyError> {
        let bytes = self.bytes().await.map_err(BodyError::Read)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
