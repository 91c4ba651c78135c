use crate::error::ClientError;
use crate::mount::MountPath;
use crate::request::HttpRequest;
use crate::{Category, Credentials, Me, Profile};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Whether the browser should attach the session cookie to the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialsMode {
    /// Leave the decision to the browser (`same-origin` for `fetch`).
    #[default]
    BrowserDefault,
    /// `credentials: "include"`
    Include,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path, relative to the mount prefix.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Credential policy for this endpoint.
    const CREDENTIALS: CredentialsMode;
    /// Whether `self` is sent as a JSON body.
    const SENDS_BODY: bool = false;

    /// Build the transport-level request under the given mount prefix.
    fn to_http(&self, mount: &MountPath) -> Result<HttpRequest, ClientError> {
        let request =
            HttpRequest::new(&mount.join(Self::PATH), Self::METHOD).with_credentials(Self::CREDENTIALS);
        if !Self::SENDS_BODY {
            return Ok(request);
        }
        let body = serde_json::to_value(self).map_err(|e| ClientError::Build(e.to_string()))?;
        Ok(request
            .with_header("Content-Type", "application/json")
            .with_body(body))
    }
}

// =========================================================
// Request Definitions
// =========================================================

/// Probe the current session identity
#[derive(Debug, Serialize, Deserialize)]
pub struct MeRequest;

impl ApiRequest for MeRequest {
    type Response = Me;
    const PATH: &'static str = "/api/auth/me";
    const METHOD: HttpMethod = HttpMethod::Get;
    const CREDENTIALS: CredentialsMode = CredentialsMode::Include;
}

/// Log in with username and password; the server answers with a session cookie.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }
}

impl ApiRequest for LoginRequest {
    // The body is never inspected; any 2xx means logged in.
    type Response = serde_json::Value;
    const PATH: &'static str = "/api/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const CREDENTIALS: CredentialsMode = CredentialsMode::Include;
    const SENDS_BODY: bool = true;
}

/// End the current session
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutRequest;

impl ApiRequest for LogoutRequest {
    type Response = serde_json::Value;
    const PATH: &'static str = "/api/auth/logout";
    const METHOD: HttpMethod = HttpMethod::Post;
    const CREDENTIALS: CredentialsMode = CredentialsMode::Include;
}

/// Fetch the menu catalog
///
/// The menu is public; this endpoint has never asked the browser to include
/// credentials and keeps the browser default.
#[derive(Debug, Serialize, Deserialize)]
pub struct MenuRequest;

impl ApiRequest for MenuRequest {
    type Response = Vec<Category>;
    const PATH: &'static str = "/api/menu";
    const METHOD: HttpMethod = HttpMethod::Get;
    const CREDENTIALS: CredentialsMode = CredentialsMode::BrowserDefault;
}

/// Fetch the signed-in user's profile
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileRequest;

impl ApiRequest for ProfileRequest {
    type Response = Profile;
    const PATH: &'static str = "/api/profile";
    const METHOD: HttpMethod = HttpMethod::Get;
    const CREDENTIALS: CredentialsMode = CredentialsMode::Include;
}
