use crate::error::AppError;
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use subtle::ConstantTimeEq;

/// Rejects requests whose `Authorization` header is not exactly the API key.
///
/// Runs before the handler, so no body is read and no store is touched for an
/// unauthorized request.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.as_bytes())
        .unwrap_or_default();

    if !key_matches(provided, state.api_key().as_bytes()) {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}

fn key_matches(provided: &[u8], expected: &[u8]) -> bool {
    !expected.is_empty() && bool::from(provided.ct_eq(expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_key_matches() {
        assert!(key_matches(b"secret", b"secret"));
    }

    #[test]
    fn other_keys_do_not_match() {
        assert!(!key_matches(b"", b"secret"));
        assert!(!key_matches(b"secre", b"secret"));
        assert!(!key_matches(b"secret ", b"secret"));
        assert!(!key_matches(b"Bearer secret", b"secret"));
    }

    #[test]
    fn empty_key_never_matches() {
        assert!(!key_matches(b"", b""));
    }
}
