//! Decoding of the URL to shorten from a resolve request.
//!
//! A request carries its URL in exactly one place, chosen by [`UrlSource::select`]
//! before any body bytes are read.

use crate::error::AppError;
use crate::model::UrlInput;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::Uri;
use axum::{Form, Json};
use tracing::trace;
use url::form_urlencoded;

/// Where the URL of a resolve request is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSource {
    /// `?url=` query parameter.
    Query,
    /// `url` field of an `application/json` body.
    Json,
    /// `url` field of an `application/x-www-form-urlencoded` body.
    Form,
    /// `url` text part of a `multipart/form-data` body.
    Multipart,
}

impl UrlSource {
    /// Picks the decoding strategy.
    ///
    /// A non-empty `url` query parameter wins over any body. Otherwise the
    /// declared media type decides, ignoring parameters such as `charset`.
    /// Returns `None` for media types no strategy handles.
    pub fn select(has_query_url: bool, content_type: Option<&str>) -> Option<Self> {
        if has_query_url {
            return Some(UrlSource::Query);
        }

        let media_type = content_type?
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match media_type.as_str() {
            "application/json" => Some(UrlSource::Json),
            "application/x-www-form-urlencoded" => Some(UrlSource::Form),
            "multipart/form-data" => Some(UrlSource::Multipart),
            _ => None,
        }
    }
}

/// Extracts the URL to shorten from `request`.
///
/// Fails with `UnsupportedMediaType` when no source applies and with
/// `InvalidUrl` when the chosen source has no usable `url` value.
pub async fn decode_url(request: Request) -> Result<String, AppError> {
    let query_url = query_url(request.uri());

    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let source = UrlSource::select(query_url.is_some(), content_type)
        .ok_or(AppError::UnsupportedMediaType)?;
    trace!(?source, "decoding url");

    let url = match source {
        UrlSource::Query => query_url,
        UrlSource::Json => Json::<UrlInput>::from_request(request, &())
            .await
            .map_err(|e| AppError::InvalidUrl(e.body_text()))?
            .0
            .url,
        UrlSource::Form => Form::<UrlInput>::from_request(request, &())
            .await
            .map_err(|e| AppError::InvalidUrl(e.body_text()))?
            .0
            .url,
        UrlSource::Multipart => {
            let multipart = Multipart::from_request(request, &())
                .await
                .map_err(|e| AppError::InvalidUrl(e.body_text()))?;
            multipart_url(multipart).await?
        }
    };

    url.filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::InvalidUrl("missing url field".to_string()))
}

/// Returns the first non-empty `url` query parameter.
fn query_url(uri: &Uri) -> Option<String> {
    form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
        .find(|(key, value)| key == "url" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

async fn multipart_url(mut multipart: Multipart) -> Result<Option<String>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidUrl(e.body_text()))?
    {
        if field.name() == Some("url") {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::InvalidUrl(e.body_text()))?;
            return Ok(Some(text));
        }
    }
    Ok(None)
}
