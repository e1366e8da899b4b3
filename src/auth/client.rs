use reqwest::blocking::{Client, RequestBuilder};
use serde_json::{json, Value};

use crate::api::ApiError;
use crate::models::{Session, User};

/// Fallback account used by "Lanjutkan sebagai Demo". The account is
/// provisioned on first use: sign-in, and if that fails, sign-up then
/// sign-in again.
pub const DEMO_EMAIL: &str = "demo@waktusholat.com";
pub const DEMO_PASSWORD: &str = "DemoWaktuSholat2025!@#";
pub const DEMO_NAME: &str = "Demo User";

/// Client for a GoTrue-compatible identity provider. This type only
/// sequences which call to make next; all identity logic lives on the
/// provider side.
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl AuthClient {
    pub fn new(http: Client, base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    fn post(&self, path: &str) -> RequestBuilder {
        let mut builder = self.http.post(format!("{}{}", self.base_url, path));
        if !self.anon_key.is_empty() {
            builder = builder.header("apikey", &self.anon_key);
        }
        builder
    }

    pub fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let response = self
            .post("/auth/v1/token?grant_type=password")
            .json(&json!({ "email": email, "password": password }))
            .send()?;

        let status = response.status();
        let body: Value = response.json()?;
        if !status.is_success() {
            return Err(provider_error(status, &body));
        }
        parse_session(&body)
    }

    pub fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Result<(), ApiError> {
        let response = self
            .post("/auth/v1/signup")
            .json(&json!({
                "email": email,
                "password": password,
                "data": { "full_name": full_name },
            }))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().unwrap_or(Value::Null);
            return Err(provider_error(status, &body));
        }
        Ok(())
    }

    pub fn sign_out(&self, access_token: &str) -> Result<(), ApiError> {
        let response = self
            .post("/auth/v1/logout")
            .bearer_auth(access_token)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(())
    }

    /// Authorize URL for the OAuth redirect flow. The redirect itself
    /// completes in the user's browser.
    pub fn oauth_authorize_url(&self, provider: &str, redirect_to: &str) -> String {
        format!(
            "{}/auth/v1/authorize?provider={}&redirect_to={}",
            self.base_url, provider, redirect_to
        )
    }

    /// Demo flow from the login screen: sign in with the fixed demo
    /// credentials; on failure provision the account and retry once.
    pub fn sign_in_demo(&self) -> Result<Session, ApiError> {
        match self.sign_in_with_password(DEMO_EMAIL, DEMO_PASSWORD) {
            Ok(session) => Ok(session),
            Err(first) => {
                log::debug!("demo sign-in failed ({}), provisioning account", first);
                self.sign_up(DEMO_EMAIL, DEMO_PASSWORD, DEMO_NAME)?;
                self.sign_in_with_password(DEMO_EMAIL, DEMO_PASSWORD)
            }
        }
    }
}

fn parse_session(body: &Value) -> Result<Session, ApiError> {
    let access_token = body["access_token"]
        .as_str()
        .ok_or_else(|| ApiError::shape("access_token missing"))?
        .to_string();
    let user = &body["user"];
    let id = user["id"]
        .as_str()
        .ok_or_else(|| ApiError::shape("user.id missing"))?
        .to_string();
    let email = user["email"].as_str().unwrap_or_default().to_string();
    let meta = &user["user_metadata"];

    Ok(Session {
        access_token,
        user: User {
            id,
            email,
            name: meta["full_name"].as_str().map(str::to_owned),
            avatar_url: meta["avatar_url"].as_str().map(str::to_owned),
        },
    })
}

fn provider_error(status: reqwest::StatusCode, body: &Value) -> ApiError {
    let message = body["error_description"]
        .as_str()
        .or_else(|| body["msg"].as_str())
        .or_else(|| body["message"].as_str());
    match message {
        Some(msg) => ApiError::Provider(msg.to_string()),
        None => ApiError::Status(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_projection_reads_metadata() {
        let body = json!({
            "access_token": "tok",
            "user": {
                "id": "u-1",
                "email": "demo@waktusholat.com",
                "user_metadata": { "full_name": "Demo User" }
            }
        });
        let session = parse_session(&body).unwrap();
        assert_eq!(session.access_token, "tok");
        assert_eq!(session.user.display_name(), "Demo User");
        assert_eq!(session.user.avatar_url, None);
    }

    #[test]
    fn missing_token_is_a_shape_error() {
        let body = json!({ "user": { "id": "u-1" } });
        assert!(matches!(
            parse_session(&body),
            Err(ApiError::Shape(_))
        ));
    }

    #[test]
    fn provider_message_wins_over_status() {
        let body = json!({ "error_description": "Invalid login credentials" });
        let err = provider_error(reqwest::StatusCode::BAD_REQUEST, &body);
        assert_eq!(err.to_string(), "Invalid login credentials");
    }
}
