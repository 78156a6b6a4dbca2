use axum::http::{HeaderMap, StatusCode};
use thiserror::Error;

use crate::http::envelope::{Failure, CODE_AUTH_FAILED, MSG_AUTH_FAILED};

/// Header carrying the caller's token on every request.
pub const ACCESS_TOKEN_HEADER: &str = "Access-Token";

/// Why a request failed authentication. The two variants map to the same
/// code and status but keep distinct detail text so callers can tell an
/// absent header from a wrong token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Access-Token header not provided")]
    TokenMissing,
    #[error("Access-Token is incorrect")]
    TokenMismatch,
}

/// Validate the supplied token against the configured secret.
///
/// Plain equality comparison, matching the deployed system; deliberately not
/// a constant-time comparison.
pub fn check(headers: &HeaderMap, expected: &str) -> Result<(), AuthError> {
    let supplied = headers
        .get(ACCESS_TOKEN_HEADER)
        .ok_or(AuthError::TokenMissing)?;

    match supplied.to_str() {
        Ok(token) if token == expected => Ok(()),
        _ => Err(AuthError::TokenMismatch),
    }
}

impl From<AuthError> for Failure {
    fn from(err: AuthError) -> Self {
        Failure {
            code: CODE_AUTH_FAILED,
            message: MSG_AUTH_FAILED.to_string(),
            detail: err.to_string(),
            status: StatusCode::UNAUTHORIZED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(token: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            headers.insert(ACCESS_TOKEN_HEADER, HeaderValue::from_str(token).unwrap());
        }
        headers
    }

    #[test]
    fn accepts_matching_token() {
        assert_eq!(check(&headers_with(Some("secret")), "secret"), Ok(()));
    }

    #[test]
    fn missing_header_is_distinct_from_mismatch() {
        assert_eq!(
            check(&headers_with(None), "secret"),
            Err(AuthError::TokenMissing)
        );
        assert_eq!(
            check(&headers_with(Some("wrong")), "secret"),
            Err(AuthError::TokenMismatch)
        );
        assert_ne!(
            AuthError::TokenMissing.to_string(),
            AuthError::TokenMismatch.to_string()
        );
    }

    #[test]
    fn failure_conversion_is_401_with_auth_code() {
        let failure: Failure = AuthError::TokenMissing.into();
        assert_eq!(failure.status, StatusCode::UNAUTHORIZED);
        assert_eq!(failure.code, CODE_AUTH_FAILED);
        assert!(failure.detail.contains("not provided"));
    }
}
