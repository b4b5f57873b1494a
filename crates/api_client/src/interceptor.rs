//! Auth interceptor pair
//!
//! The request side attaches `Authorization: Bearer <token>` when the session
//! holds a token. The response side reacts to a 401 by dropping the session
//! and navigating to the login route. The 401 reaction is global: it runs for
//! every endpoint unless the path is listed in
//! [`ApiConfig::unauthorized_exempt_paths`](crate::ApiConfig::unauthorized_exempt_paths).

use std::sync::Arc;

use reqwest::RequestBuilder;
use secrecy::ExposeSecret;
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::session::{Navigator, Session};

/// Request/response hooks shared by every call made through the client
#[derive(Debug, Clone)]
pub struct AuthInterceptor {
    session: Session,
    navigator: Arc<dyn Navigator>,
    config: ApiConfig,
}

impl AuthInterceptor {
    /// Build the interceptor pair from configuration
    pub fn new(session: Session, navigator: Arc<dyn Navigator>, config: &ApiConfig) -> Self {
        Self {
            session,
            navigator,
            config: config.clone(),
        }
    }

    /// Session the interceptor reads from and clears
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Attach the bearer token, if any, to an outgoing request
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    /// React to a 401 received for `path`
    ///
    /// Returns `true` if the session was dropped and navigation happened.
    pub fn on_unauthorized(&self, path: &str) -> bool {
        if !self.config.triggers_logout(path) {
            info!(path = %path, "401 on exempt path, keeping session");
            return false;
        }

        if let Err(e) = self.session.clear() {
            warn!(error = %e, "Failed to clear session after 401");
        }

        let route = &self.config.login_route;
        info!(path = %path, route = %route, "Session rejected, redirecting to login");
        self.navigator.navigate(route);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySessionStore, RecordingNavigator, SessionStore, TOKEN_KEY, USER_KEY};

    fn setup(config: &ApiConfig) -> (Arc<MemorySessionStore>, Arc<RecordingNavigator>, AuthInterceptor) {
        let store = Arc::new(MemorySessionStore::with_token("abc123"));
        store.set(USER_KEY, r#"{"name":"Asha"}"#).unwrap();
        let navigator = Arc::new(RecordingNavigator::new());
        let interceptor = AuthInterceptor::new(
            Session::new(store.clone()),
            navigator.clone(),
            config,
        );
        (store, navigator, interceptor)
    }

    #[test]
    fn unauthorized_clears_session_and_navigates_once() {
        let (store, navigator, interceptor) = setup(&ApiConfig::default());

        assert!(interceptor.on_unauthorized("/pricing"));

        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
        assert_eq!(navigator.routes(), vec!["/admin/login"]);
    }

    #[test]
    fn exempt_path_keeps_session() {
        let config = ApiConfig::default().exempt_from_unauthorized("/auth/login");
        let (store, navigator, interceptor) = setup(&config);

        assert!(!interceptor.on_unauthorized("/auth/login"));

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc123"));
        assert!(navigator.routes().is_empty());
    }

    #[test]
    fn custom_login_route_is_used() {
        let config = ApiConfig {
            login_route: "/login".to_string(),
            ..Default::default()
        };
        let (_, navigator, interceptor) = setup(&config);
        interceptor.on_unauthorized("/admin/stats");
        assert_eq!(navigator.current().as_deref(), Some("/login"));
    }

    #[test]
    fn authorize_adds_bearer_header() {
        let (_, _, interceptor) = setup(&ApiConfig::default());
        let request = interceptor
            .authorize(reqwest::Client::new().get("http://localhost/auth/me"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer abc123"
        );
    }

    #[test]
    fn authorize_without_token_adds_nothing() {
        let interceptor = AuthInterceptor::new(
            Session::new(Arc::new(MemorySessionStore::new())),
            Arc::new(RecordingNavigator::new()),
            &ApiConfig::default(),
        );
        let request = interceptor
            .authorize(reqwest::Client::new().get("http://localhost/pricing"))
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());
    }
}
