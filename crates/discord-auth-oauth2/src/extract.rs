// Profile extraction from the "current user" response body.
//
// `try_extract` reports why a body produced nothing; `extract` logs that
// reason and falls back to the empty profile so the caller's flow is never
// interrupted.

use discord_auth_core::error::AuthError;
use serde_json::Value;

use crate::avatar::derive_picture_url;
use crate::definition::{convert_text, ProfileAttribute, PRIMARY_ATTRIBUTES};
use crate::descriptor::ProviderConfig;
use crate::profile::DiscordProfile;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("profile body has no JSON object")]
    NoObject,

    #[error("profile object has no usable id")]
    MissingId,
}

impl From<ProfileError> for AuthError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::Parse(e) => AuthError::Json(e),
            other => AuthError::Other(other.to_string()),
        }
    }
}

/// Locate the profile object: a bare object, or the first element of an
/// array when that element is an object.
pub fn first_node(body: &str) -> Result<Value, ProfileError> {
    match serde_json::from_str::<Value>(body)? {
        node @ Value::Object(_) => Ok(node),
        Value::Array(items) => match items.into_iter().next() {
            Some(node @ Value::Object(_)) => Ok(node),
            _ => Err(ProfileError::NoObject),
        },
        _ => Err(ProfileError::NoObject),
    }
}

/// Strict extraction.
pub fn try_extract(config: &ProviderConfig, body: &str) -> Result<DiscordProfile, ProfileError> {
    let node = first_node(body)?;
    profile_from_node(config, &node)
}

/// Lenient extraction: never fails, returns the empty profile instead.
pub fn extract(config: &ProviderConfig, body: &str) -> DiscordProfile {
    try_extract(config, body).unwrap_or_else(|e| {
        tracing::debug!(provider = config.id, error = %e, "returning empty profile");
        DiscordProfile::default()
    })
}

/// Build a profile from an already located JSON object.
pub fn profile_from_node(
    config: &ProviderConfig,
    node: &Value,
) -> Result<DiscordProfile, ProfileError> {
    let id = node
        .get("id")
        .and_then(convert_text)
        .ok_or(ProfileError::MissingId)?;
    let mut profile = DiscordProfile::with_id(id);

    for attribute in PRIMARY_ATTRIBUTES {
        let Some(raw) = node.get(attribute.json_key()) else {
            continue;
        };
        match attribute {
            ProfileAttribute::Text(attr) => {
                if let Some(value) = attr.convert(raw) {
                    *profile.text_mut(attr) = Some(value);
                }
            }
            ProfileAttribute::Flag(attr) => {
                if let Some(value) = attr.convert(raw) {
                    *profile.flag_mut(attr) = Some(value);
                }
            }
        }
    }

    let user_id = profile.id().unwrap_or_default();
    let picture_url = match derive_picture_url(
        config.cdn_base,
        user_id,
        profile.avatar(),
        profile.discriminator(),
    ) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(provider = config.id, user_id, error = %e, "invalid picture URL");
            None
        }
    };
    profile.set_picture_url(picture_url);

    Ok(profile)
}
