use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::Json,
    Extension,
};
use std::sync::Arc;
use tracing::info;
use users::contract::client::UsersApi;

use crate::api::rest::dto::{
    CreateLoreReq, ListLoreQuery, LoreEnvelope, LoreResponse, MessageDto, UpdateLoreReq,
};
use crate::api::rest::error::{map_domain_error, ApiError};
use crate::api::rest::guards;
use crate::domain::service::Service;

type SharedUsers = Arc<dyn UsersApi>;

/// List all lore, or lore whose title contains the `title` query,
/// most recently modified first.
pub async fn list_lore(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<ListLoreQuery>,
) -> Result<Json<Vec<LoreResponse>>, ApiError> {
    let items = match &query.title {
        Some(title) => svc.find_all_by_title(title).await,
        None => svc.find_all().await,
    }
    .map_err(|e| map_domain_error(&e))?;

    Ok(Json(items.into_iter().map(LoreResponse::from).collect()))
}

/// List lore written by the author with the given username.
pub async fn list_lore_by_author(
    Extension(svc): Extension<Arc<Service>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<LoreResponse>>, ApiError> {
    let items = svc
        .find_all_by_username(&username)
        .await
        .map_err(|e| map_domain_error(&e))?;

    Ok(Json(items.into_iter().map(LoreResponse::from).collect()))
}

/// Create new lore.
///
/// Guard order: session, title, content.
pub async fn create_lore(
    Extension(svc): Extension<Arc<Service>>,
    Extension(users_api): Extension<SharedUsers>,
    headers: HeaderMap,
    Json(req): Json<CreateLoreReq>,
) -> Result<(StatusCode, Json<LoreEnvelope>), ApiError> {
    let session_user = guards::require_login(users_api.as_ref(), &headers).await?;
    guards::valid_title(&req.title)?;
    guards::valid_content(&req.content)?;

    let created = svc
        .add_one(session_user.id, &req.title, &req.content)
        .await
        .map_err(|e| map_domain_error(&e))?;
    info!("Created lore {}", created.lore.id);

    Ok((
        StatusCode::CREATED,
        Json(LoreEnvelope {
            message: "Lore was created successfully.".to_string(),
            lore: created.into(),
        }),
    ))
}

/// Modify the content of existing lore.
///
/// Guard order: session, existence, content.
pub async fn update_lore(
    Extension(svc): Extension<Arc<Service>>,
    Extension(users_api): Extension<SharedUsers>,
    headers: HeaderMap,
    Path(lore_id): Path<String>,
    Json(req): Json<UpdateLoreReq>,
) -> Result<Json<LoreEnvelope>, ApiError> {
    update_lore_inner(svc, users_api, headers, &lore_id, req).await
}

/// PATCH with no id segment: the existence guard fails as it would for
/// any unknown id.
pub async fn update_lore_missing_id(
    Extension(svc): Extension<Arc<Service>>,
    Extension(users_api): Extension<SharedUsers>,
    headers: HeaderMap,
    Json(req): Json<UpdateLoreReq>,
) -> Result<Json<LoreEnvelope>, ApiError> {
    update_lore_inner(svc, users_api, headers, "", req).await
}

async fn update_lore_inner(
    svc: Arc<Service>,
    users_api: SharedUsers,
    headers: HeaderMap,
    raw_id: &str,
    req: UpdateLoreReq,
) -> Result<Json<LoreEnvelope>, ApiError> {
    let _session_user = guards::require_login(users_api.as_ref(), &headers).await?;
    let existing = guards::lore_exists(svc.as_ref(), raw_id).await?;
    guards::valid_content(&req.content)?;

    let updated = svc
        .update_one(existing.lore.id, &req.content)
        .await
        .map_err(|e| map_domain_error(&e))?;
    info!("Updated lore {}", updated.lore.id);

    Ok(Json(LoreEnvelope {
        message: "Lore was updated successfully.".to_string(),
        lore: updated.into(),
    }))
}

/// Delete lore.
///
/// Guard order: session, existence.
pub async fn delete_lore(
    Extension(svc): Extension<Arc<Service>>,
    Extension(users_api): Extension<SharedUsers>,
    headers: HeaderMap,
    Path(lore_id): Path<String>,
) -> Result<Json<MessageDto>, ApiError> {
    delete_lore_inner(svc, users_api, headers, &lore_id).await
}

/// DELETE with no id segment: same failure as an unknown id.
pub async fn delete_lore_missing_id(
    Extension(svc): Extension<Arc<Service>>,
    Extension(users_api): Extension<SharedUsers>,
    headers: HeaderMap,
) -> Result<Json<MessageDto>, ApiError> {
    delete_lore_inner(svc, users_api, headers, "").await
}

async fn delete_lore_inner(
    svc: Arc<Service>,
    users_api: SharedUsers,
    headers: HeaderMap,
    raw_id: &str,
) -> Result<Json<MessageDto>, ApiError> {
    let _session_user = guards::require_login(users_api.as_ref(), &headers).await?;
    let existing = guards::lore_exists(svc.as_ref(), raw_id).await?;

    svc.delete_one(existing.lore.id)
        .await
        .map_err(|e| map_domain_error(&e))?;
    info!("Deleted lore {}", existing.lore.id);

    Ok(Json(MessageDto {
        message: "Lore was deleted successfully.".to_string(),
    }))
}
