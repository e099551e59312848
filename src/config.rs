use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub request_timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://kubernetes.default.svc".to_string(),
            token: None,
            request_timeout_seconds: 30,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("k8s-client-kit/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let defaults = ApiConfig::default();

        Ok(Config {
            api: ApiConfig {
                base_url: env::var("KUBE_API_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.base_url),
                token: env::var("KUBE_TOKEN").ok().filter(|t| !t.is_empty()),
                request_timeout_seconds: match env::var("KUBE_REQUEST_TIMEOUT_SECONDS") {
                    Ok(value) => value
                        .parse()
                        .context("KUBE_REQUEST_TIMEOUT_SECONDS must be a valid number")?,
                    Err(_) => defaults.request_timeout_seconds,
                },
                user_agent: env::var("KUBE_USER_AGENT").unwrap_or(defaults.user_agent),
            },
        })
    }
}
