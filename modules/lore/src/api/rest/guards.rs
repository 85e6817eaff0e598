//! Request guards, run as an explicit ordered list per route.
//!
//! Each guard either returns the value the handler proceeds with or an
//! `ApiError` that renders as the terminal response; handlers chain them
//! with `?` in declared order, so a failed guard stops everything after
//! it and a request is never answered twice.

use axum::http::HeaderMap;
use users::contract::client::UsersApi;
use users::contract::model::User;
use uuid::Uuid;

use crate::api::rest::error::{map_domain_error, ApiError};
use crate::contract::model::PopulatedLore;
use crate::domain::service::Service;

/// Header carrying the session user id, set by the authentication layer
/// in front of this service.
pub const SESSION_USER_HEADER: &str = "x-session-user-id";

/// The request must carry a session that resolves to an existing user.
pub async fn require_login(users: &dyn UsersApi, headers: &HeaderMap) -> Result<User, ApiError> {
    let session_id = headers
        .get(SESSION_USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok());

    let user = match session_id {
        Some(id) => users.find_by_id(id).await.map_err(|e| {
            tracing::error!(error = ?e, "Session lookup failed");
            ApiError::internal("An internal database error occurred.")
        })?,
        None => None,
    };

    user.ok_or_else(|| ApiError::forbidden("You must be logged in to complete this action."))
}

/// The path id must be well-formed AND name existing lore. A malformed
/// id, an unknown id, and a missing path segment all fail the same way.
pub async fn lore_exists(service: &Service, raw_id: &str) -> Result<PopulatedLore, ApiError> {
    let found = match Uuid::parse_str(raw_id) {
        Ok(id) => service.find_one(id).await.map_err(|e| map_domain_error(&e))?,
        Err(_) => None,
    };

    found.ok_or_else(|| {
        ApiError::not_found(format!("Lore with lore ID {raw_id} does not exist."))
    })
}

/// The trimmed title must be at least one character.
pub fn valid_title(title: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::bad_request(
            "Lore title must be at least one character long.",
        ));
    }
    Ok(())
}

/// The trimmed content must be at least one character.
pub fn valid_content(content: &str) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::bad_request(
            "Lore content must be at least one character long.",
        ));
    }
    Ok(())
}
