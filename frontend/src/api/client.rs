use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::types::{non_empty, ApiError, ErrorBody},
    config,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(ApiError::transport)?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        {
            if let Some(responder) = mock_for(request.url().as_str()) {
                return responder.respond(&request).map(MockResponse::into_response);
            }
        }

        self.client
            .execute(request)
            .await
            .map_err(ApiError::transport)
    }

    /// POSTs `body` as JSON and decodes an ok response as `T`.
    ///
    /// Non-ok statuses are turned into an [`ApiError`] carrying the server's
    /// `message`, or `fallback` when the body has none or is not JSON.
    pub(super) async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, path);
        log::debug!("POST {}", url);

        let response = self
            .send(self.http_client().post(&url).json(body))
            .await?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;

        if status.is_success() {
            serde_json::from_str(&text)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| non_empty(body.message))
                .unwrap_or_else(|| fallback.to_string());
            Err(ApiError::http_status(status.as_u16(), message))
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};
#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_transport::mock_for;
