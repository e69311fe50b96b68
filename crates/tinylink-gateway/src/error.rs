use crate::model::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tinylink_core::{RegistryError, StorageError};
use tracing::{debug, warn};

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors surfaced at the HTTP boundary.
///
/// Every variant is terminal for its request; nothing here is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("unsupported content type")]
    UnsupportedMediaType,
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("short code not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StorageError),
    #[error("no free short code after {attempts} salted attempts")]
    CapacityExceeded { attempts: u32 },
}

impl From<RegistryError> for AppError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::InvalidUrl(message) => AppError::InvalidUrl(message),
            RegistryError::StoreUnavailable(source) => AppError::StoreUnavailable(source),
            RegistryError::CapacityExceeded { attempts } => {
                AppError::CapacityExceeded { attempts }
            }
        }
    }
}

fn json_error(status: StatusCode, message: &'static str) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => {
                debug!("rejected request with bad credentials");
                json_error(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            AppError::UnsupportedMediaType => {
                json_error(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported Content-Type")
            }
            AppError::InvalidUrl(message) => {
                debug!(reason = %message, "rejected invalid url");
                json_error(StatusCode::BAD_REQUEST, "Invalid URL")
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            AppError::StoreUnavailable(
                source @ (StorageError::Unavailable(_) | StorageError::Timeout(_)),
            ) => {
                warn!(error = %source, "store unavailable");
                json_error(StatusCode::SERVICE_UNAVAILABLE, "Store unavailable")
            }
            AppError::StoreUnavailable(source) => {
                warn!(error = %source, "store operation failed");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "Store error")
            }
            AppError::CapacityExceeded { attempts } => {
                warn!(attempts, "no free short code");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "No free short code")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let cases = [
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AppError::UnsupportedMediaType, StatusCode::UNSUPPORTED_MEDIA_TYPE),
            (AppError::InvalidUrl("x".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound, StatusCode::NOT_FOUND),
            (
                AppError::StoreUnavailable(StorageError::Unavailable("down".into())),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::StoreUnavailable(StorageError::Timeout("slow".into())),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::StoreUnavailable(StorageError::InvalidData("bad".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::CapacityExceeded { attempts: 3 },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn registry_errors_map_to_app_errors() {
        let err: AppError = RegistryError::InvalidUrl("nope".into()).into();
        assert!(matches!(err, AppError::InvalidUrl(_)));

        let err: AppError = RegistryError::CapacityExceeded { attempts: 2 }.into();
        assert!(matches!(err, AppError::CapacityExceeded { attempts: 2 }));

        let err: AppError =
            RegistryError::StoreUnavailable(StorageError::Operation("boom".into())).into();
        assert!(matches!(err, AppError::StoreUnavailable(StorageError::Operation(_))));
    }
}
