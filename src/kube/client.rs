use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::errors::{reject, ApiError, Failure};

/// Kubernetes API client whose failures all go through [`reject`]
#[derive(Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        // Build HTTP client with required headers
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        if let Some(token) = &config.token {
            let mut value = reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token))
                .context("KUBE_TOKEN is not a valid header value")?;
            value.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }

        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        info!(
            base_url = %config.base_url,
            authenticated = config.token.is_some(),
            "Initialized Kubernetes API client"
        );

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError<reqwest::Error>> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!("GET {}", url);

        let response = match self.http_client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return reject(Failure::<reqwest::Response, _>::from(e)).await;
            }
        };

        let response = check_response(response).await?;
        response.json().await.map_err(ApiError::Other)
    }
}

/// Pass successful responses through, reject the rest
pub async fn check_response(
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError<reqwest::Error>> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    warn!(
        status = status.as_u16(),
        url = %response.url(),
        "Kubernetes API returned an error"
    );
    reject(Failure::<_, reqwest::Error>::Response(response)).await
}
