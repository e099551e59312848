// Library exports for testing
pub mod config;
pub mod errors;
pub mod kube;
pub mod logger;
