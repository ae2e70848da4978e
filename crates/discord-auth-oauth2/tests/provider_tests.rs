//! Provider surface integration tests.
//!
//! Covers: endpoint descriptor, options loading, scopes, trait objects.

use discord_auth_core::AuthError;
use discord_auth_oauth2::*;

#[test]
fn descriptor_endpoints() {
    let descriptor = DiscordProvider::descriptor();
    assert_eq!(
        descriptor.authorization_base_url(),
        "https://discordapp.com/api/oauth2/authorize"
    );
    assert_eq!(
        descriptor.access_token_endpoint(),
        "https://discordapp.com/api/oauth2/token"
    );
    assert_eq!(descriptor.profile_url(), "https://discordapp.com/api/users/@me");
    assert_eq!(descriptor.id, DISCORD.id);
}

#[test]
fn options_from_json() {
    let options = ProviderOptions::from_json(
        r#"{
            "clientId": "1234",
            "clientSecret": "shh",
            "scope": ["guilds", "identify"],
            "redirectUri": "https://app.example.com/api/auth/callback/discord"
        }"#,
    )
    .unwrap();
    let provider = DiscordProvider::new(options).unwrap();
    assert_eq!(provider.scope_param(), "identify+email+guilds");
}

#[test]
fn options_errors() {
    assert!(matches!(
        ProviderOptions::from_json("{"),
        Err(AuthError::Json(_))
    ));
    assert!(matches!(
        ProviderOptions::from_json(r#"{"clientId":""}"#),
        Err(AuthError::Config(_))
    ));
    assert!(matches!(
        ProviderOptions::from_json(r#"{"clientId":"x","redirectUri":"callback"}"#),
        Err(AuthError::InvalidUrl(_))
    ));
}

#[test]
fn usable_through_the_trait() {
    fn describe<P: IdentityProvider<Profile = DiscordProfile>>(p: &P, body: &str) -> String {
        let profile = p.extract(body);
        format!("{}:{}", p.id(), profile.id().unwrap_or("-"))
    }

    let provider = DiscordProvider::new(ProviderOptions::new("c")).unwrap();
    assert_eq!(describe(&provider, r#"{"id":"77"}"#), "discord:77");
    assert_eq!(describe(&provider, "garbage"), "discord:-");
}

#[test]
fn trait_object_is_shareable() {
    let provider: std::sync::Arc<dyn IdentityProvider<Profile = DiscordProfile>> =
        std::sync::Arc::new(DiscordProvider::new(ProviderOptions::new("c")).unwrap());
    let handle = {
        let provider = provider.clone();
        std::thread::spawn(move || provider.extract(r#"{"id":"8","avatar":"x"}"#))
    };
    let profile = handle.join().unwrap();
    assert_eq!(
        profile.picture_url().map(|u| u.as_str()),
        Some("https://cdn.discordapp.com/avatars/8/x.png")
    );
    assert_eq!(provider.scope_joiner(), "+");
}

#[test]
fn profile_error_converts_with_question_mark() {
    fn load(body: &str) -> discord_auth_core::Result<String> {
        let provider = DiscordProvider::new(ProviderOptions::new("c"))?;
        let profile = provider.try_extract(body)?;
        Ok(profile.id().unwrap_or_default().to_string())
    }

    assert_eq!(load(r#"{"id":"11"}"#).unwrap(), "11");
    assert!(matches!(load("{}"), Err(AuthError::Other(_))));
    assert!(matches!(load("nope"), Err(AuthError::Json(_))));
}
