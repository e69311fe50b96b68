use crate::error::RegistryError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

type Result<T> = std::result::Result<T, RegistryError>;

/// A stored mapping from a short code to the URL it redirects to.
///
/// Mappings are created once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlMapping {
    pub short_code: ShortCode,
    pub original_url: String,
}

/// Outcome of [`Registry::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The code now mapped to the resolved URL.
    pub short_code: ShortCode,
    /// `true` if this call wrote the mapping, `false` if it already existed.
    pub created: bool,
}

#[async_trait]
pub trait Registry: Send + Sync + 'static {
    /// Returns the short code for `url`, creating the mapping if needed.
    async fn resolve(&self, url: &str) -> Result<Resolution>;

    /// Retrieves the original URL mapped to `code`.
    /// Returns `None` if the code has no mapping.
    async fn lookup(&self, code: &ShortCode) -> Result<Option<String>>;
}
