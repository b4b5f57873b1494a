//! HTTP transport wrapper
//!
//! One configured `reqwest::Client` per [`ApiClient`]: base URL, JSON content
//! type, optional cookie store, timeouts. Every call goes through the
//! [`AuthInterceptor`] on the way out and on the way back. No retries.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ApiConfig;
use crate::endpoints::{
    AdminApi, AuthApi, ContactApi, ContentApi, PortfolioApi, PricingApi, UploadApi,
};
use crate::error::{ApiError, extract_message};
use crate::interceptor::AuthInterceptor;
use crate::session::{MemorySessionStore, Navigator, NoopNavigator, Session, SessionStore};

const JSON_CONTENT_TYPE: &str = "application/json";

struct Inner {
    http: Client,
    config: ApiConfig,
    interceptor: AuthInterceptor,
}

/// Client for the Trivesha REST backend
///
/// Cheap to clone; clones share the connection pool, session, and navigator.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.config.base_url)
            .field("authenticated", &self.session().is_authenticated())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client with the given session store and navigator
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(
        config: ApiConfig,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        config.validate().map_err(ApiError::ConnectionFailed)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(&config.user_agent)
            .cookie_store(config.with_credentials)
            .build()
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;

        let interceptor = AuthInterceptor::new(Session::new(store), navigator, &config);

        debug!(base_url = %config.base_url, "API client initialized");

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                config,
                interceptor,
            }),
        })
    }

    /// Create a client with an in-memory session and no navigation
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn in_memory(config: ApiConfig) -> Result<Self, ApiError> {
        Self::new(
            config,
            Arc::new(MemorySessionStore::new()),
            Arc::new(NoopNavigator),
        )
    }

    /// Client configuration
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Session shared with the auth interceptor
    pub fn session(&self) -> &Session {
        self.inner.interceptor.session()
    }

    /// `/auth` endpoints
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// `/pricing` endpoints
    pub const fn pricing(&self) -> PricingApi<'_> {
        PricingApi::new(self)
    }

    /// `/admin` endpoints
    pub const fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    /// `/portfolio` endpoints
    pub const fn portfolio(&self) -> PortfolioApi<'_> {
        PortfolioApi::new(self)
    }

    /// `/content` endpoints
    pub const fn content(&self) -> ContentApi<'_> {
        ContentApi::new(self)
    }

    /// `/upload` endpoints
    pub const fn upload(&self) -> UploadApi<'_> {
        UploadApi::new(self)
    }

    /// `/contact` endpoints
    pub const fn contact(&self) -> ContactApi<'_> {
        ContactApi::new(self)
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.config.normalized_base_url())
    }

    /// `GET path`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a non-JSON body.
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::GET, path, self.json_request(Method::GET, path))
            .await
    }

    /// `GET path?query`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a non-JSON body.
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Value, ApiError> {
        let request = self.json_request(Method::GET, path).query(query);
        self.execute(Method::GET, path, request).await
    }

    /// `POST path` with a JSON body
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a non-JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.json_request(Method::POST, path).json(body);
        self.execute(Method::POST, path, request).await
    }

    /// `POST path` without a body
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a non-JSON body.
    pub async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::POST, path, self.json_request(Method::POST, path))
            .await
    }

    /// `PUT path` with a JSON body
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a non-JSON body.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.json_request(Method::PUT, path).json(body);
        self.execute(Method::PUT, path, request).await
    }

    /// `PATCH path` with a JSON body
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a non-JSON body.
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.json_request(Method::PATCH, path).json(body);
        self.execute(Method::PATCH, path, request).await
    }

    /// `PATCH path` without a body
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a non-JSON body.
    pub async fn patch_empty(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::PATCH, path, self.json_request(Method::PATCH, path))
            .await
    }

    /// `DELETE path`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a non-JSON body.
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::DELETE, path, self.json_request(Method::DELETE, path))
            .await
    }

    /// `POST path` with a `multipart/form-data` body
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a non-JSON body.
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Value, ApiError> {
        let request = self.base_request(Method::POST, path).multipart(form);
        self.execute(Method::POST, path, request).await
    }

    fn base_request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.inner.http.request(method, self.url(path));
        self.inner.interceptor.authorize(request)
    }

    fn json_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.base_request(method, path)
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
    }

    #[instrument(skip(self, request))]
    async fn execute(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(url = %url, "Sending request");

        let response = request.send().await.map_err(|e| {
            warn!(method = %method, url = %url, error = %e, "Request failed");
            ApiError::RequestFailed(e.to_string())
        })?;

        self.handle_response(&method, path, &url, response).await
    }

    async fn handle_response(
        &self,
        method: &Method,
        path: &str,
        url: &str,
        response: Response,
    ) -> Result<Value, ApiError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!(method = %method, url = %url, status = status.as_u16(), "Unauthorized response");
            self.inner.interceptor.on_unauthorized(path);
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_message(&body);
            warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                message = %message,
                "Request returned error status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            warn!(method = %method, url = %url, error = %e, "Failed to read response body");
            ApiError::RequestFailed(e.to_string())
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

/// Percent-encode a caller-supplied path segment
///
/// Keeps unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `_`, `.`, `~`) and
/// encodes everything else, including `/` and space. Empty, `.` and `..`
/// segments are rejected: URL normalization would collapse them (even in
/// `%2E` form) and the request would land on a different route.
pub(crate) fn encode_segment(input: &str) -> Result<String, ApiError> {
    if matches!(input, "" | "." | "..") {
        return Err(ApiError::InvalidRequest(format!(
            "invalid path segment {input:?}"
        )));
    }

    let mut result = String::with_capacity(input.len() * 3);
    for b in input.bytes() {
        match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(char::from(b));
            },
            _ => result.push_str(&format!("%{b:02X}")),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client =
            ApiClient::in_memory(ApiConfig::with_base_url("http://localhost:5000/api/")).unwrap();
        assert_eq!(client.url("/pricing"), "http://localhost:5000/api/pricing");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = ApiClient::in_memory(ApiConfig::with_base_url("")).unwrap_err();
        assert!(matches!(err, ApiError::ConnectionFailed(_)));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let client = ApiClient::new(
            ApiConfig::default(),
            Arc::new(MemorySessionStore::with_token("very-secret")),
            Arc::new(NoopNavigator),
        )
        .unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("authenticated: true"));
        assert!(!debug.contains("very-secret"));
    }

    #[test]
    fn encode_segment_keeps_unreserved() {
        assert_eq!(
            encode_segment("spice-route_v2.0~x").unwrap(),
            "spice-route_v2.0~x"
        );
    }

    #[test]
    fn encode_segment_escapes_separators() {
        assert_eq!(encode_segment("a/b c").unwrap(), "a%2Fb%20c");
        assert_eq!(encode_segment("../etc").unwrap(), "..%2Fetc");
    }

    #[test]
    fn encode_segment_unicode() {
        assert_eq!(encode_segment("café").unwrap(), "caf%C3%A9");
    }

    #[test]
    fn encode_segment_rejects_dot_and_empty_segments() {
        for input in ["", ".", ".."] {
            assert!(
                matches!(encode_segment(input), Err(ApiError::InvalidRequest(_))),
                "{input:?} should be rejected"
            );
        }
        assert_eq!(encode_segment("...").unwrap(), "...");
        assert_eq!(encode_segment(".env").unwrap(), ".env");
    }
}
