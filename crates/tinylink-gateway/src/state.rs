use axum::http::header::HOST;
use axum::http::{HeaderMap, Uri};
use std::sync::Arc;
use tinylink_core::Registry;

/// Origin used when neither a public base URL nor a request host is known.
const FALLBACK_ORIGIN: &str = "http://localhost";

/// Shared state handed to every handler.
///
/// Configuration is injected here at construction time; handlers never read
/// ambient global state.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<dyn Registry>,
    api_key: Arc<str>,
    public_base_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(registry: Arc<dyn Registry>, api_key: impl Into<String>) -> Self {
        let api_key: String = api_key.into();
        Self {
            registry,
            api_key: Arc::from(api_key),
            public_base_url: None,
        }
    }

    /// Pins the origin used to build `shortUrl` values instead of deriving it
    /// from each request.
    pub fn with_public_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.public_base_url = Some(Arc::from(base_url.trim_end_matches('/')));
        self
    }

    pub fn registry(&self) -> &dyn Registry {
        self.registry.as_ref()
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the origin this request was served from.
    ///
    /// Prefers the configured public base URL, then the request authority,
    /// then the `Host` header.
    pub fn origin(&self, uri: &Uri, headers: &HeaderMap) -> String {
        if let Some(base_url) = &self.public_base_url {
            return base_url.to_string();
        }

        if let Some(authority) = uri.authority() {
            let scheme = uri.scheme_str().unwrap_or("http");
            return format!("{scheme}://{authority}");
        }

        headers
            .get(HOST)
            .and_then(|host| host.to_str().ok())
            .filter(|host| !host.is_empty())
            .map(|host| format!("http://{host}"))
            .unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("public_base_url", &self.public_base_url)
            .finish_non_exhaustive()
    }
}
