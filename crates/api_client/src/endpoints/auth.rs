//! `/auth` endpoints and the login/logout session flow

use domain::{LoginCredentials, ProfileUpdate, RegisterRequest, validate_payload};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Authentication endpoints
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/register`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn register(self, request: &RegisterRequest) -> Result<Value, ApiError> {
        self.client.post("/auth/register", request).await
    }

    /// `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn login(self, credentials: &LoginCredentials) -> Result<Value, ApiError> {
        self.client.post("/auth/login", credentials).await
    }

    /// `POST /auth/logout`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn logout(self) -> Result<Value, ApiError> {
        self.client.post_empty("/auth/logout").await
    }

    /// `GET /auth/me`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_profile(self) -> Result<Value, ApiError> {
        self.client.get("/auth/me").await
    }

    /// `PUT /auth/profile`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn update_profile(self, update: &ProfileUpdate) -> Result<Value, ApiError> {
        self.client.put("/auth/profile", update).await
    }

    /// Validate credentials, log in, and store the returned token and user
    ///
    /// The token is looked up as `token` or `data.token`, the user record as
    /// `user` or `data.user`.
    ///
    /// # Errors
    ///
    /// Returns a validation error before sending, the transport error, or a
    /// parse error if the response carries no token.
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn sign_in(self, credentials: &LoginCredentials) -> Result<Value, ApiError> {
        validate_payload(credentials)?;

        let response = self.login(credentials).await?;
        let token = find_field(&response, "token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::ParseError("login response has no token".to_string()))?;
        let user = find_field(&response, "user");

        self.client.session().save(token, user)?;
        info!("Signed in");

        Ok(response)
    }

    /// Validate and submit a registration
    ///
    /// # Errors
    ///
    /// Returns a validation error before sending, or the transport error.
    pub async fn sign_up(self, request: &RegisterRequest) -> Result<Value, ApiError> {
        validate_payload(request)?;
        self.register(request).await
    }

    /// Call `/auth/logout` and clear the local session whatever its outcome
    ///
    /// # Errors
    ///
    /// Returns a storage error if the session cannot be cleared. A failed
    /// logout request is logged and otherwise ignored.
    #[instrument(skip(self))]
    pub async fn sign_out(self) -> Result<(), ApiError> {
        if let Err(e) = self.logout().await {
            warn!(error = %e, "Logout request failed, clearing local session anyway");
        }
        self.client.session().clear()?;
        info!("Signed out");
        Ok(())
    }
}

fn find_field<'v>(response: &'v Value, key: &str) -> Option<&'v Value> {
    response
        .get(key)
        .or_else(|| response.get("data").and_then(|data| data.get(key)))
        .filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_field_top_level() {
        let response = serde_json::json!({ "token": "abc", "user": { "name": "A" } });
        assert_eq!(find_field(&response, "token"), Some(&serde_json::json!("abc")));
    }

    #[test]
    fn find_field_nested_in_data() {
        let response = serde_json::json!({ "success": true, "data": { "token": "abc" } });
        assert_eq!(find_field(&response, "token"), Some(&serde_json::json!("abc")));
        assert_eq!(find_field(&response, "user"), None);
    }

    #[test]
    fn find_field_ignores_null() {
        let response = serde_json::json!({ "user": null });
        assert_eq!(find_field(&response, "user"), None);
    }
}
