//! # Native Transport
//!
//! [`ContactTransport`] over `reqwest`, for submitting outside the browser.

use crate::submission::{ContactTransport, JsonRequest, TransportError, TransportResponse};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl ContactTransport for ReqwestTransport {
    async fn send(&self, request: JsonRequest) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(&request.url)
            .header(CONTENT_TYPE, request.content_type)
            .body(request.body)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let body = if status.is_success() {
            String::new()
        } else {
            response.text().await.map_err(|e| TransportError(e.to_string()))?
        };

        Ok(TransportResponse {
            status: status.as_u16(),
            body,
        })
    }
}
