// ABOUTME: Bearer token authentication for routes that act on behalf of a signed-in user
// ABOUTME: Extracts the caller token; verification is delegated to the upstream Morizo AI service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

use http::{header::AUTHORIZATION, HeaderMap};
use morizo_core::errors::AppError;

use crate::logging::mask_token;

/// Bearer token presented by the caller.
///
/// Session verification belongs to the upstream service: the token is
/// forwarded unchanged on every upstream call made for this request.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Parse an `Authorization` header value of the form `Bearer <token>`
    ///
    /// Scheme and token may be separated by any run of ASCII whitespace.
    ///
    /// # Errors
    ///
    /// Returns an auth error if the scheme is not `Bearer` or the token is empty
    pub fn parse(header_value: &str) -> Result<Self, AppError> {
        let (scheme, token) = header_value
            .trim()
            .split_once(|c: char| c.is_ascii_whitespace())
            .ok_or_else(|| AppError::auth_invalid("Malformed authorization header"))?;

        if !scheme.eq_ignore_ascii_case("bearer") {
            return Err(AppError::auth_invalid(format!(
                "Unsupported authorization scheme: {scheme}"
            )));
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::auth_invalid("Empty bearer token"));
        }

        Ok(Self(token.to_owned()))
    }

    /// Extract the token from request headers
    ///
    /// # Errors
    ///
    /// Returns an auth error if the header is absent, not UTF-8, or malformed
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        let value = headers
            .get(AUTHORIZATION)
            .ok_or_else(AppError::auth_required)?
            .to_str()
            .map_err(|_| AppError::auth_invalid("Authorization header is not valid UTF-8"))?;

        Self::parse(value)
    }

    /// The raw token
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The token rendered safe for logs
    #[must_use]
    pub fn masked(&self) -> String {
        mask_token(&self.0)
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BearerToken").field(&self.masked()).finish()
    }
}
