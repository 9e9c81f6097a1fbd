//! Request executor - performs the HTTP call and decodes the JSON body

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Request, StatusCode};
use serde::de::DeserializeOwned;

/// Password BambooHR expects alongside the API key
const API_KEY_PASSWORD: &str = "x";

/// Sends a prepared request and decodes the response body into `T`
///
/// Implementations fail on transport errors, non-success statuses and bodies
/// that do not decode. They must tolerate concurrent calls.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute<T: DeserializeOwned>(&self, request: Request) -> ClientResult<T>;
}

/// Network executor backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: Client,
    api_key: Option<String>,
}

impl ReqwestExecutor {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
        })
    }

    /// Wrap an existing `reqwest::Client` (shares its connection pool)
    pub fn with_client(client: Client, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                _ => Err(ClientError::Status {
                    status: status.as_u16(),
                    body: text,
                }),
            };
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl RequestExecutor for ReqwestExecutor {
    async fn execute<T: DeserializeOwned>(&self, mut request: Request) -> ClientResult<T> {
        request
            .headers_mut()
            .insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut req = reqwest::RequestBuilder::from_parts(self.client.clone(), request);
        if let Some(key) = &self.api_key {
            req = req.basic_auth(key, Some(API_KEY_PASSWORD));
        }

        let request = req.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.client.execute(request).await?;
        tracing::debug!(status = %response.status(), url = %response.url(), "Received response");

        self.handle_response(response).await
    }
}
