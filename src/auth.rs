// ABOUTME: Authenticated-user boundary over the application's auth middleware
// ABOUTME: Extracts the user id installed upstream; session handling lives outside this service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Authenticated-user extraction
//!
//! Session and credential handling belong to the gateway in front of this
//! service. By the time a request arrives here, the auth middleware has
//! resolved the session and installed the user's id in the
//! `x-stride-user-id` header; this module only validates and exposes it.

use crate::errors::AppError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

/// Header carrying the authenticated user id, set by the upstream middleware
pub const USER_ID_HEADER: &str = "x-stride-user-id";

/// The authenticated user for the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthedUser {
    /// Resolved user id
    pub user_id: Uuid,
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(AppError::auth_required)?;

        let user_id = Uuid::parse_str(raw)
            .map_err(|_| AppError::auth_invalid(format!("malformed user id: {raw}")))?;

        Ok(Self { user_id })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::ErrorCode;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<AuthedUser, AppError> {
        let (mut parts, ()) = request.into_parts();
        AuthedUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_valid_header_extracts_user() {
        let user_id = Uuid::new_v4();
        let request = Request::builder()
            .header(USER_ID_HEADER, user_id.to_string())
            .body(())
            .unwrap();

        let authed = extract(request).await.unwrap();
        assert_eq!(authed.user_id, user_id);
    }

    #[tokio::test]
    async fn test_missing_header_is_auth_required() {
        let request = Request::builder().body(()).unwrap();
        let error = extract(request).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthRequired);
    }

    #[tokio::test]
    async fn test_malformed_id_is_auth_invalid() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "not-a-uuid")
            .body(())
            .unwrap();
        let error = extract(request).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthInvalid);
    }
}
