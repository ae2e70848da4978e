// Profile definition: which JSON keys of the user object are read, and how
// each one is converted.
//
// See <https://discordapp.com/developers/docs/resources/user#user-object>.

use serde_json::Value;

/// Attributes read as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAttribute {
    Username,
    Discriminator,
    Avatar,
    Email,
}

/// Attributes read as booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagAttribute {
    Bot,
    MfaEnabled,
    Verified,
}

/// One entry of the mapping table: a JSON key and its target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAttribute {
    Text(TextAttribute),
    Flag(FlagAttribute),
}

/// Primary attributes, in the order they are read.
pub const PRIMARY_ATTRIBUTES: [ProfileAttribute; 7] = [
    ProfileAttribute::Text(TextAttribute::Username),
    ProfileAttribute::Text(TextAttribute::Discriminator),
    ProfileAttribute::Text(TextAttribute::Avatar),
    ProfileAttribute::Text(TextAttribute::Email),
    ProfileAttribute::Flag(FlagAttribute::Bot),
    ProfileAttribute::Flag(FlagAttribute::MfaEnabled),
    ProfileAttribute::Flag(FlagAttribute::Verified),
];

impl TextAttribute {
    pub fn json_key(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Discriminator => "discriminator",
            Self::Avatar => "avatar",
            Self::Email => "email",
        }
    }

    /// Strings are taken as-is, integers as their decimal text.
    pub fn convert(self, raw: &Value) -> Option<String> {
        convert_text(raw)
    }
}

impl FlagAttribute {
    pub fn json_key(self) -> &'static str {
        match self {
            Self::Bot => "bot",
            Self::MfaEnabled => "mfa_enabled",
            Self::Verified => "verified",
        }
    }

    /// Booleans as-is, `"true"`/`"false"` in any case, and `1`/`0`.
    pub fn convert(self, raw: &Value) -> Option<bool> {
        match raw {
            Value::Bool(b) => Some(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
            Value::Number(n) => match n.as_u64() {
                Some(1) => Some(true),
                Some(0) => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl ProfileAttribute {
    pub fn json_key(self) -> &'static str {
        match self {
            Self::Text(attr) => attr.json_key(),
            Self::Flag(attr) => attr.json_key(),
        }
    }
}

/// Text conversion shared by the attributes and the `id` field.
///
/// Only integers that fit in 64 bits are rendered; anything wider was
/// already rounded through `f64` by the parser.
pub(crate) fn convert_text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                Some(v.to_string())
            } else {
                n.as_i64().map(|v| v.to_string())
            }
        }
        _ => None,
    }
}
