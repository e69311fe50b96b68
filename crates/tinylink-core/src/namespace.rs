use crate::shortcode::ShortCode;
use smol_str::SmolStr;
use std::fmt::Display;

/// Default key namespace for short code mappings.
pub const DEFAULT_NAMESPACE: &str = "shorten-url";

/// A key prefix isolating this application's mappings from other tenants of
/// the same key-value store.
///
/// Keys have the form `{namespace}:{short_code}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(SmolStr);

impl Namespace {
    pub fn new(prefix: impl AsRef<str>) -> Self {
        Self(SmolStr::new(prefix))
    }

    /// Returns the store key for `code` within this namespace.
    pub fn key(&self, code: &ShortCode) -> String {
        format!("{}:{}", self.0, code.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl From<&str> for Namespace {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Namespace {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
