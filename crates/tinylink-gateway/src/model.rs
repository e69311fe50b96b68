mod mapping;

pub use mapping::{ResolveResponse, UrlInput};

use serde::Serialize;

/// JSON body of every error response except `404`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}
