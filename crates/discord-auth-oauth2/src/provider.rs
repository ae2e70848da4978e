// IdentityProvider trait and ProviderOptions.
//
// The trait is the capability surface an auth framework composes with.
// ProviderOptions captures the per-deployment configuration.

use discord_auth_core::error::{AuthError, Result};
use serde::{Deserialize, Serialize};

/// Configuration options for an OAuth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOptions {
    /// OAuth client ID.
    pub client_id: String,

    /// OAuth client secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Requested scopes, on top of the provider defaults.
    #[serde(default)]
    pub scope: Vec<String>,

    /// Remove default scopes of the provider.
    #[serde(default)]
    pub disable_default_scope: bool,

    /// Callback registered with the provider. Must be absolute when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

impl ProviderOptions {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
            scope: Vec::new(),
            disable_default_scope: false,
            redirect_uri: None,
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    pub fn with_scopes(mut self, scopes: &[&str]) -> Self {
        self.scope = scopes.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Deserialize options from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(AuthError::config("client_id must not be empty"));
        }
        if let Some(redirect_uri) = &self.redirect_uri {
            url::Url::parse(redirect_uri)?;
        }
        Ok(())
    }
}

/// Authentication method for token requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthenticationMethod {
    /// Send credentials as HTTP Basic auth header.
    Basic,
    /// Send credentials in POST body (default).
    #[default]
    Post,
}

/// What an identity provider contributes to an auth framework.
///
/// The framework owns the HTTP exchange: it redirects to
/// [`authorization_base_url`](Self::authorization_base_url), trades the code
/// at [`access_token_endpoint`](Self::access_token_endpoint), fetches
/// [`profile_url`](Self::profile_url) with the bearer token and hands the
/// body to [`extract`](Self::extract).
pub trait IdentityProvider: Send + Sync + std::fmt::Debug {
    /// Typed profile produced by [`extract`](Self::extract).
    type Profile;

    /// Unique provider identifier (e.g. "discord").
    fn id(&self) -> &str;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    fn authorization_base_url(&self) -> &str;

    fn access_token_endpoint(&self) -> &str;

    fn profile_url(&self) -> &str;

    /// Default scopes for this provider.
    fn default_scopes(&self) -> Vec<String> {
        Vec::new()
    }

    /// Character used to join scopes (default: " ").
    fn scope_joiner(&self) -> &str {
        " "
    }

    /// Authentication method for token requests.
    fn authentication_method(&self) -> AuthenticationMethod {
        AuthenticationMethod::Post
    }

    /// Map a raw profile response body into a profile. Must not fail;
    /// malformed input yields an empty profile.
    fn extract(&self, body: &str) -> Self::Profile;
}
