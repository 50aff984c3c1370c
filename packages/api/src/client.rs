//! # HTTP client for the blog API
//!
//! [`ApiClient`] sends every request to one preconfigured origin and returns the
//! decoded body, or an [`ApiError`] that carries the status code for non-2xx
//! answers. It does not retry, cache, or rate-limit; interpreting failures is the
//! caller's job (see [`ApiError::kind`]).
//!
//! Authenticated calls pass the session token, which is sent verbatim as the
//! `Authorization` header value.

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{ApiConfig, ApiError};

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Client bound to a fixed base origin. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url,
        })
    }

    /// Build a client from `BLOG_API_URL` / `BLOG_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| ApiError::Config(format!("{joined}: {e}")))
    }

    /// Send one request and return the raw 2xx response.
    pub async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        tracing::debug!(%method, %url, authenticated = token.is_some(), "api request");

        let mut request = self.http.request(method.clone(), url);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, path, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        if !status.is_success() {
            tracing::warn!("{} {} returned {}", method, path, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }

    /// Send a request and decode the JSON response body.
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body, token).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, path, None, token).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body), token).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body), token).await
    }

    /// DELETE; any response body is ignored.
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), ApiError> {
        self.send::<()>(Method::DELETE, path, None, token).await?;
        Ok(())
    }
}
