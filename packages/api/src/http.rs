//! Thin wrapper over [`reqwest::Client`].
//!
//! Centralises the three things every endpoint call shares: resolving paths
//! against the configured base URL, attaching the bearer token, and mapping
//! responses into [`ApiError`]. Endpoint modules ([`crate::academy`],
//! [`crate::shop`]) stay free of transport concerns.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Fallback when the server gives no usable error payload.
const GENERIC_FAILURE: &str = "Request failed";

/// Shape of the error payload endpoints return on rejection. Servers are
/// inconsistent about the field name, so both are accepted.
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// HTTP client for the Skillforge REST API.
#[derive(Clone, Debug)]
pub struct HttpClient {
    config: ApiConfig,
    inner: Client,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            inner: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Every request goes through here so the bearer token is attached in
    /// exactly one place.
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let mut builder = self.inner.request(method, url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = self
            .request(Method::GET, path, token)
            .send()
            .await
            .map_err(into_network)?;
        decode_json(response, token.is_some()).await
    }

    pub(crate) async fn post_json<B, T>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::POST, path, token)
            .json(body)
            .send()
            .await
            .map_err(into_network)?;
        decode_json(response, token.is_some()).await
    }

    /// POST where only the status matters; any response body is discarded.
    pub(crate) async fn post_unit<B>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::POST, path, token)
            .json(body)
            .send()
            .await
            .map_err(into_network)?;
        check_status(response, token.is_some()).await.map(drop)
    }

    pub(crate) async fn put_unit<B>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::PUT, path, token)
            .json(body)
            .send()
            .await
            .map_err(into_network)?;
        check_status(response, token.is_some()).await.map(drop)
    }

    pub(crate) async fn delete_unit(&self, path: &str, token: Option<&str>) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, path, token)
            .send()
            .await
            .map_err(into_network)?;
        check_status(response, token.is_some()).await.map(drop)
    }
}

fn into_network(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Map a non-success response into an [`ApiError`].
///
/// A 401 on a token-bearing request means the session is dead; a 401 on an
/// anonymous request (e.g. wrong login credentials) is an ordinary
/// rejection and keeps the server's message.
async fn check_status(response: Response, authenticated: bool) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED && authenticated {
        return Err(ApiError::InvalidSession);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body
            .error
            .or(body.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        Err(_) => GENERIC_FAILURE.to_string(),
    };
    tracing::debug!(status = status.as_u16(), %message, "request rejected");
    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}

async fn decode_json<T: DeserializeOwned>(
    response: Response,
    authenticated: bool,
) -> Result<T, ApiError> {
    let response = check_status(response, authenticated).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
