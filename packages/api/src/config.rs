//! API client configuration from environment variables or `blog.toml`.

use std::time::Duration;

use reqwest::Url;
use store::config::DEFAULT_BASE_URL;
use store::BlogConfig;

use crate::ApiError;

/// Where and how the client talks to the blog API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create config from environment variables.
    ///
    /// `BLOG_API_URL` overrides the default origin; `BLOG_API_TIMEOUT_SECS`
    /// sets a request timeout (unset means none).
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("BLOG_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = match std::env::var("BLOG_API_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(raw.trim().parse().map_err(|_| {
                ApiError::Config(format!("BLOG_API_TIMEOUT_SECS is not a number: {raw}"))
            })?)),
            Err(_) => None,
        };

        Ok(Self {
            base_url: parse_base_url(&base_url)?,
            timeout,
        })
    }
}

impl TryFrom<&BlogConfig> for ApiConfig {
    type Error = ApiError;

    fn try_from(config: &BlogConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            base_url: parse_base_url(&config.api.base_url)?,
            timeout: config.api.timeout_secs.map(Duration::from_secs),
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim()).map_err(|e| ApiError::Config(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::Config(format!("{raw}: not an http(s) origin")));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_blog_config() {
        let config = ApiConfig::try_from(&BlogConfig::new("http://localhost:8080").with_timeout(3))
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_default_blog_config_has_no_timeout() {
        let config = ApiConfig::try_from(&BlogConfig::default()).unwrap();
        assert_eq!(config.base_url.host_str(), Some("blog-render-back.onrender.com"));
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_rejects_non_http_origin() {
        assert!(matches!(
            ApiConfig::new("mailto:someone@example.com"),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(ApiConfig::new("not a url"), Err(ApiError::Config(_))));
    }
}
