pub mod client;

pub use client::{check_response, ApiClient};
