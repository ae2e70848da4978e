// Endpoint descriptor for the Discord provider.
//
// Declared as a plain `static`, the same way every provider config is a
// constant in a registry. Nothing here is computed at runtime.

use crate::provider::AuthenticationMethod;

/// Static configuration for a social provider.
#[derive(Debug, Clone, Copy)]
pub struct ProviderConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub authorization_endpoint: &'static str,
    pub token_endpoint: &'static str,
    pub userinfo_endpoint: &'static str,
    /// Base URL of the image CDN, without a trailing slash.
    pub cdn_base: &'static str,
    pub default_scopes: &'static [&'static str],
    pub scope_joiner: &'static str,
    pub auth_method: AuthenticationMethod,
}

impl ProviderConfig {
    /// Base URL the user agent is redirected to for authorization.
    pub fn authorization_base_url(&self) -> &'static str {
        self.authorization_endpoint
    }

    /// Endpoint the authorization code is exchanged at.
    pub fn access_token_endpoint(&self) -> &'static str {
        self.token_endpoint
    }

    /// "Current user" endpoint, fetched with the bearer token.
    pub fn profile_url(&self) -> &'static str {
        self.userinfo_endpoint
    }
}

// --- Discord ---
/// See <https://discordapp.com/developers/docs/topics/oauth2>.
pub static DISCORD: ProviderConfig = ProviderConfig {
    id: "discord",
    name: "Discord",
    authorization_endpoint: "https://discordapp.com/api/oauth2/authorize",
    token_endpoint: "https://discordapp.com/api/oauth2/token",
    userinfo_endpoint: "https://discordapp.com/api/users/@me",
    cdn_base: "https://cdn.discordapp.com",
    default_scopes: &["identify", "email"],
    scope_joiner: "+",
    auth_method: AuthenticationMethod::Post,
};
