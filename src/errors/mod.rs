//! Normalization of failed API calls into plain, message-only errors

pub mod body;
pub mod normalize;

pub use body::{BodyError, ErrorBody, ErrorResponse};
pub use normalize::{reject, ApiError, Failure};
