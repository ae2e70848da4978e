#![doc = include_str!("../README.md")]

pub mod avatar;
pub mod definition;
pub mod descriptor;
pub mod extract;
pub mod profile;
pub mod provider;
pub mod providers;
pub mod user_info;

// Re-exports
pub use avatar::{derive_picture_url, PictureUrlError};
pub use descriptor::{ProviderConfig, DISCORD};
pub use extract::ProfileError;
pub use profile::DiscordProfile;
pub use provider::{AuthenticationMethod, IdentityProvider, ProviderOptions};
pub use providers::DiscordProvider;
pub use user_info::{OAuth2UserInfo, UserInfoResult};

/// Extract a profile using the built-in Discord descriptor.
pub fn extract(body: &str) -> DiscordProfile {
    extract::extract(&DISCORD, body)
}
