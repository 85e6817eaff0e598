use axum::{
    routing::{get, patch},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use users::contract::client::UsersApi;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Assemble the lore resource router.
///
/// Guards run in the order each handler declares them; a short-circuit
/// prevents later guards and the handler itself. PATCH/DELETE on the
/// bare collection path stand in for a missing id segment and fail the
/// existence guard.
pub fn register_routes(service: Arc<Service>, users: Arc<dyn UsersApi>) -> Router {
    Router::new()
        .route(
            "/api/lore",
            get(handlers::list_lore)
                .post(handlers::create_lore)
                .patch(handlers::update_lore_missing_id)
                .delete(handlers::delete_lore_missing_id),
        )
        .route(
            "/api/lore/{lore_id}",
            patch(handlers::update_lore).delete(handlers::delete_lore),
        )
        .route(
            "/api/users/{username}/lore",
            get(handlers::list_lore_by_author),
        )
        .layer(Extension(service))
        .layer(Extension(users))
        .layer(TraceLayer::new_for_http())
}
