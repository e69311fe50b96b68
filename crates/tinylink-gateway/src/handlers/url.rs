use crate::app::RESOLVE_PATH;
use crate::error::{AppError, Result};
use crate::input::decode_url;
use crate::model::ResolveResponse;
use crate::state::AppState;
use axum::extract::{Path, Request, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tinylink_core::{ShortCode, StorageError, UrlMapping};
use tracing::{debug, info};

pub async fn resolve_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<ResolveResponse>> {
    let origin = state.origin(request.uri(), request.headers());
    let url = decode_url(request).await?;

    let resolution = state.registry().resolve(&url).await?;
    info!(
        short_code = %resolution.short_code,
        created = resolution.created,
        "resolved url"
    );

    let short_url = resolution.short_code.to_url(&origin, RESOLVE_PATH);
    Ok(Json(ResolveResponse {
        mapping: UrlMapping {
            short_code: resolution.short_code,
            original_url: url,
        },
        short_url,
    }))
}

pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let Ok(code) = ShortCode::new(&short_code) else {
        debug!(%short_code, "rejected malformed short code");
        return Err(AppError::NotFound);
    };

    let original_url = state
        .registry()
        .lookup(&code)
        .await?
        .ok_or(AppError::NotFound)?;

    let location = location_header(&original_url)?;
    Ok((StatusCode::MOVED_PERMANENTLY, [(LOCATION, location)]).into_response())
}

/// Builds a `Location` value, falling back to the parsed serialization when
/// the stored URL carries bytes a header cannot hold.
fn location_header(original_url: &str) -> Result<HeaderValue> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    url::Url::parse(original_url)
        .ok()
        .and_then(|parsed| HeaderValue::from_str(parsed.as_str()).ok())
        .ok_or_else(|| {
            AppError::StoreUnavailable(StorageError::InvalidData(format!(
                "stored url is not a valid location: {original_url}"
            )))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_location_is_kept_verbatim() {
        let value = location_header("https://example.com/a?b=c").unwrap();
        assert_eq!(value, "https://example.com/a?b=c");
    }

    #[test]
    fn control_characters_fall_back_to_parsed_url() {
        let value = location_header("https://example.com/a\nb").unwrap();
        assert_eq!(value, "https://example.com/ab");
    }

    #[test]
    fn unusable_location_is_invalid_data() {
        let err = location_header("not a url\n").unwrap_err();
        assert!(matches!(
            err,
            AppError::StoreUnavailable(StorageError::InvalidData(_))
        ));
    }
}
