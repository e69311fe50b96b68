use crate::base62;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A validated short code identifier for a shortened URL.
///
/// Short codes are 1-32 characters long and contain only base62 characters
/// (`[0-9A-Za-z]`).
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShortCode(SmolStr);

const MIN_LENGTH: usize = 1;
const MAX_LENGTH: usize = 32;

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl AsRef<str>) -> Result<Self> {
        let code = code.as_ref();
        Self::validate(code)?;
        Ok(Self(SmolStr::new(code)))
    }

    /// Creates a `ShortCode` from a hash value.
    ///
    /// The value is base62 encoded, so the result is always valid.
    pub fn from_hash(hash: u32) -> Self {
        Self(SmolStr::new(base62::encode(hash)))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources.
    pub fn new_unchecked(code: impl AsRef<str>) -> Self {
        Self(SmolStr::new(code))
    }

    /// Generates the full shortened URL for a resolve path under `base_url`.
    ///
    /// ```
    /// use tinylink_core::ShortCode;
    ///
    /// let code = ShortCode::new("abc123").unwrap();
    /// assert_eq!(code.to_url("https://tiny.link/", "/s"), "https://tiny.link/s/abc123");
    /// ```
    pub fn to_url(&self, base_url: &str, path_prefix: &str) -> String {
        let prefix = path_prefix.trim_matches('/');
        let base = base_url.trim_end_matches('/');
        if prefix.is_empty() {
            format!("{}/{}", base, self)
        } else {
            format!("{}/{}/{}", base, prefix, self)
        }
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<()> {
        if code.len() < MIN_LENGTH || code.len() > MAX_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                code.len()
            )));
        }

        if !code.chars().all(base62::is_base62) {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only base62 characters: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCode").field(&self.0).finish()
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for ShortCode {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for ShortCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("a").is_ok());
        assert!(ShortCode::new("Abc123xyz").is_ok());
        assert!(ShortCode::new("doesNotExist").is_ok());
        assert!(ShortCode::new("a".repeat(32)).is_ok());
    }

    #[test]
    fn empty_or_too_long() {
        assert!(ShortCode::new("").is_err());
        assert!(ShortCode::new("a".repeat(33)).is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("abc def").is_err());
        assert!(ShortCode::new("abc-def").is_err());
        assert!(ShortCode::new("abc_def").is_err());
        assert!(ShortCode::new("abc/def").is_err());
        assert!(ShortCode::new("ünï").is_err());
    }

    #[test]
    fn from_hash_encodes_base62() {
        assert_eq!(ShortCode::from_hash(0).as_str(), "0");
        assert_eq!(ShortCode::from_hash(62).as_str(), "10");
        assert_eq!(ShortCode::from_hash(u32::MAX).as_str(), "4gfFC3");
    }

    #[test]
    fn display_and_debug() {
        let code = ShortCode::new("xYz9").unwrap();
        assert_eq!(code.to_string(), "xYz9");
        assert_eq!(format!("{:?}", code), "ShortCode(\"xYz9\")");
    }

    #[test]
    fn to_url_joins_base_and_prefix() {
        let code = ShortCode::new("abc123").unwrap();
        assert_eq!(code.to_url("https://tiny.link", "/s"), "https://tiny.link/s/abc123");
        assert_eq!(code.to_url("https://tiny.link/", "s/"), "https://tiny.link/s/abc123");
        assert_eq!(code.to_url("https://tiny.link", ""), "https://tiny.link/abc123");
    }

    #[test]
    fn deserialize_validates() {
        let code: ShortCode = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(code.as_str(), "abc");
        assert!(serde_json::from_str::<ShortCode>("\"a-b\"").is_err());
    }
}
