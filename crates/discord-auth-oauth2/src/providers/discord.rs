// Discord provider: the descriptor, the caller's options and the profile
// extractor behind one `IdentityProvider` implementation.

use discord_auth_core::error::Result;

use crate::descriptor::{ProviderConfig, DISCORD};
use crate::extract::{self, first_node, profile_from_node, ProfileError};
use crate::profile::DiscordProfile;
use crate::provider::{AuthenticationMethod, IdentityProvider, ProviderOptions};
use crate::user_info::UserInfoResult;

#[derive(Debug, Clone)]
pub struct DiscordProvider {
    config: &'static ProviderConfig,
    options: ProviderOptions,
}

impl DiscordProvider {
    /// Validates `options` before building the provider.
    pub fn new(options: ProviderOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            config: &DISCORD,
            options,
        })
    }

    /// The fixed endpoint descriptor, available without options.
    pub fn descriptor() -> &'static ProviderConfig {
        &DISCORD
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }

    /// Default scopes (unless disabled) followed by the configured ones,
    /// first occurrence wins.
    pub fn effective_scopes(&self) -> Vec<String> {
        let mut scopes = if self.options.disable_default_scope {
            Vec::new()
        } else {
            self.default_scopes()
        };
        for scope in &self.options.scope {
            if !scopes.contains(scope) {
                scopes.push(scope.clone());
            }
        }
        scopes
    }

    /// Scopes joined the way Discord expects them in the authorize URL.
    pub fn scope_param(&self) -> String {
        self.effective_scopes().join(self.scope_joiner())
    }

    pub fn try_extract(&self, body: &str) -> std::result::Result<DiscordProfile, ProfileError> {
        extract::try_extract(self.config, body)
    }

    /// Normalized user info plus the raw user object.
    pub fn user_info(&self, body: &str) -> Option<UserInfoResult> {
        let data = first_node(body).ok()?;
        let profile = profile_from_node(self.config, &data).ok()?;
        let user = profile.to_user_info()?;
        Some(UserInfoResult { user, data })
    }
}

impl IdentityProvider for DiscordProvider {
    type Profile = DiscordProfile;

    fn id(&self) -> &str {
        self.config.id
    }

    fn name(&self) -> &str {
        self.config.name
    }

    fn authorization_base_url(&self) -> &str {
        self.config.authorization_base_url()
    }

    fn access_token_endpoint(&self) -> &str {
        self.config.access_token_endpoint()
    }

    fn profile_url(&self) -> &str {
        self.config.profile_url()
    }

    fn default_scopes(&self) -> Vec<String> {
        self.config
            .default_scopes
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn scope_joiner(&self) -> &str {
        self.config.scope_joiner
    }

    fn authentication_method(&self) -> AuthenticationMethod {
        self.config.auth_method
    }

    fn extract(&self, body: &str) -> DiscordProfile {
        extract::extract(self.config, body)
    }
}
