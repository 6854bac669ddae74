//! # Studio API
//!
//! The HTTP boundary of the client.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Method  Path              Auth    Success        Body                  │
//! │  ──────  ────              ────    ───────        ────                  │
//! │  GET     /api/products     -       2xx            [Product]             │
//! │  POST    /api/inquiries    -       200 / 201      InquiryRecord (echo)  │
//! │  GET     /api/inquiries    Basic   2xx            [InquiryRecord]       │
//! │                                                                         │
//! │  401 / 403 ──► ApiError::Unauthorized                                   │
//! │  other     ──► ApiError::Status                                         │
//! │  bad JSON  ──► ApiError::Malformed                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;

use heshima_core::{InquiryPayload, InquiryRecord, Product};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::{AdminCredentials, ClientConfig};
use crate::error::{ApiError, ApiResult};

const PRODUCTS_PATH: &str = "api/products";
const INQUIRIES_PATH: &str = "api/inquiries";

/// Longest error body kept in `ApiError::Status`.
const MAX_ERROR_BODY: usize = 512;

/// Operations the client needs from the studio backend.
///
/// Every future is `Send` so operations can run on any tokio runtime.
pub trait StudioApi: Send + Sync {
    /// `GET /api/products`
    fn fetch_products(&self) -> impl Future<Output = ApiResult<Vec<Product>>> + Send;

    /// `POST /api/inquiries`
    fn submit_inquiry(
        &self,
        payload: &InquiryPayload,
    ) -> impl Future<Output = ApiResult<InquiryRecord>> + Send;

    /// `GET /api/inquiries` with admin credentials
    fn fetch_inquiries(&self) -> impl Future<Output = ApiResult<Vec<InquiryRecord>>> + Send;
}

/// reqwest-backed [`StudioApi`].
#[derive(Debug, Clone)]
pub struct HttpStudioApi {
    client: Client,
    base_url: Url,
    admin: Option<AdminCredentials>,
}

impl HttpStudioApi {
    /// Builds the HTTP client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the TLS backend cannot be initialised.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("heshima-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(HttpStudioApi {
            client,
            base_url: config.base_url.clone(),
            admin: config.admin.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Network(format!("invalid endpoint {path}: {e}")))
    }
}

impl StudioApi for HttpStudioApi {
    async fn fetch_products(&self) -> ApiResult<Vec<Product>> {
        let url = self.endpoint(PRODUCTS_PATH)?;
        debug!(%url, "Fetching products");

        let response = self.client.get(url).send().await?;
        let response = expect_success(response, |status| status.is_success()).await?;
        decode(response).await
    }

    async fn submit_inquiry(&self, payload: &InquiryPayload) -> ApiResult<InquiryRecord> {
        let url = self.endpoint(INQUIRIES_PATH)?;
        debug!(%url, product_id = %payload.product_id, "Posting inquiry");

        let response = self.client.post(url).json(payload).send().await?;
        let response = expect_success(response, |status| {
            status == StatusCode::OK || status == StatusCode::CREATED
        })
        .await?;
        decode(response).await
    }

    async fn fetch_inquiries(&self) -> ApiResult<Vec<InquiryRecord>> {
        let credentials = self.admin.as_ref().ok_or(ApiError::MissingCredentials)?;
        let url = self.endpoint(INQUIRIES_PATH)?;
        debug!(%url, "Fetching inquiries");

        let response = self
            .client
            .get(url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .await?;
        let response = expect_success(response, |status| status.is_success()).await?;
        decode(response).await
    }
}

/// Maps unaccepted statuses to errors, keeping a bounded slice of the body.
async fn expect_success<F>(response: Response, accepted: F) -> ApiResult<Response>
where
    F: Fn(StatusCode) -> bool,
{
    let status = response.status();
    if accepted(status) {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        warn!(status = status.as_u16(), "Studio API rejected credentials");
        return Err(ApiError::Unauthorized {
            status: status.as_u16(),
        });
    }

    let mut body = response.text().await.unwrap_or_default();
    if body.len() > MAX_ERROR_BODY {
        let cut = (0..=MAX_ERROR_BODY)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        body.truncate(cut);
    }

    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Reads the whole body and parses it; any shape mismatch is `Malformed`.
async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
