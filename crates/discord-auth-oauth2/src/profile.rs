// Typed Discord profile.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use url::Url;

use crate::definition::{FlagAttribute, TextAttribute};
use crate::user_info::OAuth2UserInfo;

/// Milliseconds between the Unix epoch and the first second of 2015,
/// the epoch Discord snowflakes count from.
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// Identity attributes of a Discord user.
///
/// Built once per extraction. A profile without an `id` is the empty
/// profile and carries no other attribute either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    discriminator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mfa_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    picture_url: Option<Url>,
}

impl DiscordProfile {
    pub(crate) fn with_id(id: String) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub(crate) fn text_mut(&mut self, attr: TextAttribute) -> &mut Option<String> {
        match attr {
            TextAttribute::Username => &mut self.username,
            TextAttribute::Discriminator => &mut self.discriminator,
            TextAttribute::Avatar => &mut self.avatar,
            TextAttribute::Email => &mut self.email,
        }
    }

    pub(crate) fn flag_mut(&mut self, attr: FlagAttribute) -> &mut Option<bool> {
        match attr {
            FlagAttribute::Bot => &mut self.bot,
            FlagAttribute::MfaEnabled => &mut self.mfa_enabled,
            FlagAttribute::Verified => &mut self.verified,
        }
    }

    pub(crate) fn set_picture_url(&mut self, url: Option<Url>) {
        self.picture_url = url;
    }

    /// True when extraction found no identifier.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The user's 4-digit Discord tag, leading zeros kept.
    pub fn discriminator(&self) -> Option<&str> {
        self.discriminator.as_deref()
    }

    /// The user's avatar hash.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Whether the user belongs to an OAuth2 application.
    pub fn is_bot(&self) -> Option<bool> {
        self.bot
    }

    /// Whether the user has two factor enabled on their account.
    pub fn is_mfa_enabled(&self) -> Option<bool> {
        self.mfa_enabled
    }

    /// Whether the email on this account has been verified.
    pub fn is_verified(&self) -> Option<bool> {
        self.verified
    }

    pub fn picture_url(&self) -> Option<&Url> {
        self.picture_url.as_ref()
    }

    /// Account creation time, read from the snowflake id.
    pub fn creation_time(&self) -> Option<DateTime<Utc>> {
        let snowflake = self.id.as_deref()?.parse::<u64>().ok()?;
        let millis = i64::try_from((snowflake >> 22) + DISCORD_EPOCH_MS).ok()?;
        Utc.timestamp_millis_opt(millis).single()
    }

    /// Normalized form for the auth framework. `None` for the empty profile.
    pub fn to_user_info(&self) -> Option<OAuth2UserInfo> {
        Some(OAuth2UserInfo {
            id: self.id.clone()?,
            name: self.username.clone(),
            email: self.email.clone(),
            image: self.picture_url.as_ref().map(|url| url.to_string()),
            email_verified: self.verified.unwrap_or(false),
        })
    }
}
