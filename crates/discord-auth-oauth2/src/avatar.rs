// Discord picture URL derivation.
//
// See <https://discordapp.com/developers/docs/reference#image-formatting-cdn-endpoints>.
// A custom avatar hash wins; otherwise the discriminator picks one of the
// five default avatars.

use std::num::ParseIntError;

use url::Url;

/// Number of default avatars served under `embed/avatars/`.
pub const DEFAULT_AVATAR_COUNT: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum PictureUrlError {
    #[error("discriminator {value:?} is not a number")]
    InvalidDiscriminator {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid {field} path segment {value:?}")]
    InvalidSegment { field: &'static str, value: String },

    #[error(transparent)]
    Url(#[from] url::ParseError),
}

/// Derive the picture URL for a user.
///
/// Returns `Ok(None)` when neither a non-empty avatar hash nor a
/// discriminator is available.
pub fn derive_picture_url(
    cdn_base: &str,
    user_id: &str,
    avatar: Option<&str>,
    discriminator: Option<&str>,
) -> Result<Option<Url>, PictureUrlError> {
    match (avatar.filter(|hash| !hash.is_empty()), discriminator) {
        (Some(hash), _) => avatar_url(cdn_base, user_id, hash).map(Some),
        (None, Some(discriminator)) => default_avatar_url(cdn_base, discriminator).map(Some),
        (None, None) => Ok(None),
    }
}

/// `{cdn}/avatars/{user_id}/{hash}.png`
pub fn avatar_url(cdn_base: &str, user_id: &str, hash: &str) -> Result<Url, PictureUrlError> {
    let user_id = path_segment("user id", user_id)?;
    let hash = path_segment("avatar hash", hash)?;
    Ok(Url::parse(&format!("{cdn_base}/avatars/{user_id}/{hash}.png"))?)
}

/// `{cdn}/embed/avatars/{discriminator % 5}.png`
pub fn default_avatar_url(cdn_base: &str, discriminator: &str) -> Result<Url, PictureUrlError> {
    let index = default_avatar_index(discriminator)?;
    Ok(Url::parse(&format!("{cdn_base}/embed/avatars/{index}.png"))?)
}

/// The discriminator is read as a number only here; leading zeros are fine.
pub fn default_avatar_index(discriminator: &str) -> Result<u64, PictureUrlError> {
    discriminator
        .parse::<u64>()
        .map(|value| value % DEFAULT_AVATAR_COUNT)
        .map_err(|source| PictureUrlError::InvalidDiscriminator {
            value: discriminator.to_string(),
            source,
        })
}

// A segment is used verbatim, so it may only hold characters the URL parser
// keeps as-is and never reads as a delimiter.
fn path_segment<'a>(field: &'static str, value: &'a str) -> Result<&'a str, PictureUrlError> {
    let dot_segment = field == "user id" && matches!(value, "." | "..");
    if !value.is_empty() && !dot_segment && value.chars().all(is_segment_char) {
        Ok(value)
    } else {
        Err(PictureUrlError::InvalidSegment {
            field,
            value: value.to_string(),
        })
    }
}

fn is_segment_char(c: char) -> bool {
    c.is_ascii_graphic()
        && !matches!(
            c,
            '/' | '\\' | '?' | '#' | '%' | '"' | '<' | '>' | '`' | '{' | '}'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CDN: &str = "https://cdn.discordapp.com";

    #[test]
    fn test_avatar_with_hash() {
        let url = derive_picture_url(CDN, "123456", Some("abc123"), Some("1234"))
            .unwrap()
            .unwrap();
        assert_eq!(url.as_str(), "https://cdn.discordapp.com/avatars/123456/abc123.png");
    }

    #[test]
    fn test_animated_hash_still_png() {
        let url = avatar_url(CDN, "123456", "a_abc123").unwrap();
        assert_eq!(url.as_str(), "https://cdn.discordapp.com/avatars/123456/a_abc123.png");
    }

    #[test]
    fn test_empty_hash_falls_back_to_discriminator() {
        let url = derive_picture_url(CDN, "1", Some(""), Some("0007"))
            .unwrap()
            .unwrap();
        assert_eq!(url.as_str(), "https://cdn.discordapp.com/embed/avatars/2.png");
    }

    #[test]
    fn test_default_avatar_index() {
        assert_eq!(default_avatar_index("0007").unwrap(), 2);
        assert_eq!(default_avatar_index("0420").unwrap(), 0);
        assert_eq!(default_avatar_index("9999").unwrap(), 4);
        assert_eq!(default_avatar_index("0").unwrap(), 0);
    }

    #[test]
    fn test_invalid_discriminator() {
        let err = derive_picture_url(CDN, "1", None, Some("notanumber")).unwrap_err();
        assert!(matches!(err, PictureUrlError::InvalidDiscriminator { .. }));
        assert!(derive_picture_url(CDN, "1", None, Some("")).is_err());
        assert!(derive_picture_url(CDN, "1", None, Some("-3")).is_err());
    }

    #[test]
    fn test_nothing_to_derive_from() {
        assert!(derive_picture_url(CDN, "1", None, None).unwrap().is_none());
        assert!(derive_picture_url(CDN, "1", Some(""), None).unwrap().is_none());
    }

    #[test]
    fn test_rejects_unsafe_segments() {
        for hash in ["../etc", "a b", "abc?x=1", "abc#frag", "ab/cd"] {
            let err = avatar_url(CDN, "1", hash).unwrap_err();
            assert!(matches!(err, PictureUrlError::InvalidSegment { field: "avatar hash", .. }));
        }
        for hash in ["100%", "ab\\cd", "<b>", "caf\u{e9}", "tab\t"] {
            assert!(avatar_url(CDN, "1", hash).is_err(), "hash {hash:?}");
        }
        for user_id in ["", ".", ".."] {
            let err = avatar_url(CDN, user_id, "abc").unwrap_err();
            assert!(matches!(err, PictureUrlError::InvalidSegment { field: "user id", .. }));
        }
    }

    #[test]
    fn test_hash_with_unreserved_and_sub_delims_is_kept_verbatim() {
        for hash in ["ab.cd", "ab~cd", "a:b@c", "x!$&'()*+,;=y", "..", "."] {
            let url = avatar_url(CDN, "1", hash).unwrap();
            assert_eq!(
                url.as_str(),
                format!("https://cdn.discordapp.com/avatars/1/{hash}.png")
            );
        }
        let url = avatar_url(CDN, "1.5~x", "abc").unwrap();
        assert_eq!(url.as_str(), "https://cdn.discordapp.com/avatars/1.5~x/abc.png");
    }

    #[test]
    fn test_bad_cdn_base() {
        let err = avatar_url("not a url", "1", "abc").unwrap_err();
        assert!(matches!(err, PictureUrlError::Url(_)));
    }
}
