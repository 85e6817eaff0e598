//! Integration-style tests for the lore module.
//!
//! Key points:
//! - Each test runs on a fresh in-memory SQLite DB and applies migrations.
//! - Service is constructed with a SeaORM-backed repository (Domain Port + Adapter).
//! - Local client is tested against the same Service.
//! - REST layer is exercised via an Axum Router built through the real routes.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use lore::{
    api::rest::dto::{LoreEnvelope, LoreResponse, MessageDto},
    api::rest::guards::SESSION_USER_HEADER,
    api::rest::routes::register_routes,
    contract::client::LoreApi,
    contract::model::NewLore,
    domain::service::Service,
    gateways::local::LoreLocalClient,
    infra::storage::{migrations::Migrator, sea_orm_repo::SeaOrmLoreRepository},
};
use users::{
    contract::client::UsersApi,
    contract::model::{NewUser, User},
    gateways::local::UsersLocalClient,
    infra::storage::sea_orm_repo::SeaOrmUsersRepository,
};

/// Create a fresh test database (in-memory SQLite) and run both migrators.
async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");
    users::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run users migrations");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run lore migrations");
    db
}

struct TestEnv {
    service: Arc<Service>,
    users_api: Arc<dyn UsersApi>,
}

/// Build the domain Service with SeaORM-backed repositories.
async fn create_test_env() -> TestEnv {
    let db = create_test_db().await;
    let users_service = Arc::new(users::domain::service::Service::new(Arc::new(
        SeaOrmUsersRepository::new(db.clone()),
    )));
    let users_api: Arc<dyn UsersApi> = Arc::new(UsersLocalClient::new(users_service));
    let repo = SeaOrmLoreRepository::new(db);
    let service = Arc::new(Service::new(Arc::new(repo), users_api.clone()));
    TestEnv { service, users_api }
}

async fn create_user(env: &TestEnv, username: &str) -> User {
    env.users_api
        .create_user(NewUser {
            username: username.to_string(),
        })
        .await
        .expect("Failed to create user")
}

/// Build an Axum router by calling the real route registration.
async fn create_test_router() -> (Router, TestEnv) {
    let env = create_test_env().await;
    let router = register_routes(env.service.clone(), env.users_api.clone());
    (router, env)
}

async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).expect("Failed to parse body")
}

#[tokio::test]
async fn test_domain_service_crud() -> Result<()> {
    let env = create_test_env().await;
    let alice = create_user(&env, "alice").await;

    // create: both timestamps are stamped with the same instant
    let created = env.service.add_one(alice.id, "Dragon", "A tale").await?;
    assert_eq!(created.lore.title, "Dragon");
    assert_eq!(created.lore.content, "A tale");
    assert_eq!(created.author.username, "alice");
    assert_eq!(created.lore.date_created, created.lore.date_modified);

    // get
    let retrieved = env.service.find_one(created.lore.id).await?.unwrap();
    assert_eq!(retrieved.lore.id, created.lore.id);
    assert_eq!(retrieved.author.username, "alice");

    // update: content and date_modified move, nothing else does
    tokio::time::sleep(Duration::from_millis(5)).await;
    let updated = env
        .service
        .update_one(created.lore.id, "A tale, revised")
        .await?;
    assert_eq!(updated.lore.content, "A tale, revised");
    assert_eq!(updated.lore.title, "Dragon");
    assert_eq!(updated.lore.author_id, alice.id);
    assert_eq!(updated.lore.date_created, created.lore.date_created);
    assert!(updated.lore.date_modified > created.lore.date_modified);

    // delete
    assert!(env.service.delete_one(created.lore.id).await?);
    assert!(env.service.find_one(created.lore.id).await?.is_none());
    assert!(!env.service.delete_one(created.lore.id).await?);

    Ok(())
}

#[tokio::test]
async fn test_domain_service_validation() -> Result<()> {
    let env = create_test_env().await;
    let alice = create_user(&env, "alice").await;

    assert!(env.service.add_one(alice.id, "", "body").await.is_err());
    assert!(env.service.add_one(alice.id, "   ", "body").await.is_err());
    assert!(env.service.add_one(alice.id, "title", "").await.is_err());
    assert!(env.service.add_one(alice.id, "title", " \n ").await.is_err());

    // single non-whitespace characters are enough
    let minimal = env.service.add_one(alice.id, "x", "y").await?;
    assert_eq!(minimal.lore.title, "x");

    let result = env.service.update_one(minimal.lore.id, "   ").await;
    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn test_listing_orders_by_date_modified_desc() -> Result<()> {
    let env = create_test_env().await;
    let alice = create_user(&env, "alice").await;

    let first = env.service.add_one(alice.id, "First", "one").await?;
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = env.service.add_one(alice.id, "Second", "two").await?;

    let all = env.service.find_all().await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].lore.id, second.lore.id);
    assert_eq!(all[1].lore.id, first.lore.id);

    // editing the older record moves it back to the front
    tokio::time::sleep(Duration::from_millis(5)).await;
    env.service.update_one(first.lore.id, "one, edited").await?;
    let all = env.service.find_all().await?;
    assert_eq!(all[0].lore.id, first.lore.id);

    Ok(())
}

#[tokio::test]
async fn test_title_filter_is_case_insensitive_subset() -> Result<()> {
    let env = create_test_env().await;
    let alice = create_user(&env, "alice").await;

    env.service.add_one(alice.id, "Dragon Tales", "a").await?;
    env.service.add_one(alice.id, "dragons of autumn", "b").await?;
    env.service.add_one(alice.id, "Knights", "c").await?;

    let hits = env.service.find_all_by_title("dRaGoN").await?;
    assert_eq!(hits.len(), 2);
    // title search populates the author like every other finder
    assert!(hits.iter().all(|l| l.author.username == "alice"));

    let none = env.service.find_all_by_title("castle").await?;
    assert!(none.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_find_all_by_username_and_cascade() -> Result<()> {
    let env = create_test_env().await;
    let alice = create_user(&env, "alice").await;
    let bob = create_user(&env, "bob").await;

    env.service.add_one(alice.id, "Alpha", "a").await?;
    env.service.add_one(alice.id, "Beta", "b").await?;
    env.service.add_one(bob.id, "Gamma", "c").await?;

    let alices = env.service.find_all_by_username("alice").await?;
    assert_eq!(alices.len(), 2);

    // unknown author is an error, not an empty list
    assert!(env.service.find_all_by_username("ghost").await.is_err());

    // author cascade empties the author's list and leaves others alone
    env.service.delete_by_author(alice.id).await?;
    let alices = env.service.find_all_by_username("alice").await?;
    assert!(alices.is_empty());
    assert_eq!(env.service.find_all_by_username("bob").await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_local_client() -> Result<()> {
    let env = create_test_env().await;
    let alice = create_user(&env, "alice").await;
    let client = LoreLocalClient::new(env.service.clone());

    let created = client
        .add_one(NewLore {
            author_id: alice.id,
            title: "Client".to_string(),
            content: "through the gateway".to_string(),
        })
        .await?;
    assert_eq!(created.author.username, "alice");

    let found = client.find_one(created.lore.id).await?;
    assert!(found.is_some());

    let all = client.find_all().await?;
    assert_eq!(all.len(), 1);

    let updated = client.update_one(created.lore.id, "rewritten").await?;
    assert_eq!(updated.lore.content, "rewritten");

    assert!(client.delete_one(created.lore.id).await?);
    assert!(client.find_one(created.lore.id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_rest_create_update_delete_flow() -> Result<()> {
    let (router, env) = create_test_router().await;
    let alice = create_user(&env, "alice").await;

    // POST while logged in as alice
    let request = Request::builder()
        .method("POST")
        .uri("/api/lore")
        .header("content-type", "application/json")
        .header(SESSION_USER_HEADER, alice.id.to_string())
        .body(Body::from(
            json!({"title": "Dragon", "content": "A tale"}).to_string(),
        ))?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let envelope: LoreEnvelope = read_json(response).await;
    assert_eq!(envelope.message, "Lore was created successfully.");
    assert_eq!(envelope.lore.author, "alice");
    assert_eq!(envelope.lore.content, "A tale");
    assert_eq!(envelope.lore.title, "Dragon");
    let lore_id = envelope.lore.id.clone();

    // PATCH the content
    tokio::time::sleep(Duration::from_millis(5)).await;
    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/api/lore/{lore_id}"))
        .header("content-type", "application/json")
        .header(SESSION_USER_HEADER, alice.id.to_string())
        .body(Body::from(
            json!({"content": "A tale, revised"}).to_string(),
        ))?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let envelope: LoreEnvelope = read_json(response).await;
    assert_eq!(envelope.message, "Lore was updated successfully.");
    assert_eq!(envelope.lore.content, "A tale, revised");
    assert_eq!(envelope.lore.title, "Dragon");

    // DELETE it
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/lore/{lore_id}"))
        .header(SESSION_USER_HEADER, alice.id.to_string())
        .body(Body::empty())?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let message: MessageDto = read_json(response).await;
    assert_eq!(message.message, "Lore was deleted successfully.");

    // PATCH on the deleted id is now a 404
    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/api/lore/{lore_id}"))
        .header("content-type", "application/json")
        .header(SESSION_USER_HEADER, alice.id.to_string())
        .body(Body::from(json!({"content": "too late"}).to_string()))?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_rest_list_and_title_filter() -> Result<()> {
    let (router, env) = create_test_router().await;
    let alice = create_user(&env, "alice").await;
    env.service.add_one(alice.id, "Dragon", "a").await?;
    env.service.add_one(alice.id, "Knight", "b").await?;

    let request = Request::builder()
        .method("GET")
        .uri("/api/lore")
        .body(Body::empty())?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let all: Vec<LoreResponse> = read_json(response).await;
    assert_eq!(all.len(), 2);

    let request = Request::builder()
        .method("GET")
        .uri("/api/lore?title=dragon")
        .body(Body::empty())?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let filtered: Vec<LoreResponse> = read_json(response).await;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Dragon");
    assert_eq!(filtered[0].author, "alice");

    // author-scoped listing
    let request = Request::builder()
        .method("GET")
        .uri("/api/users/alice/lore")
        .body(Body::empty())?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let by_author: Vec<LoreResponse> = read_json(response).await;
    assert_eq!(by_author.len(), 2);

    let request = Request::builder()
        .method("GET")
        .uri("/api/users/ghost/lore")
        .body(Body::empty())?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_rest_auth_and_validation_errors() -> Result<()> {
    let (router, env) = create_test_router().await;
    let alice = create_user(&env, "alice").await;

    // no session header -> 403
    let request = Request::builder()
        .method("POST")
        .uri("/api/lore")
        .header("content-type", "application/json")
        .body(Body::from(json!({"title": "t", "content": "c"}).to_string()))?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // session naming an unknown user -> 403
    let request = Request::builder()
        .method("POST")
        .uri("/api/lore")
        .header("content-type", "application/json")
        .header(SESSION_USER_HEADER, Uuid::new_v4().to_string())
        .body(Body::from(json!({"title": "t", "content": "c"}).to_string()))?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // whitespace-only title -> 400 with the contract message
    let request = Request::builder()
        .method("POST")
        .uri("/api/lore")
        .header("content-type", "application/json")
        .header(SESSION_USER_HEADER, alice.id.to_string())
        .body(Body::from(json!({"title": "  ", "content": "c"}).to_string()))?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = read_json(response).await;
    assert_eq!(
        body["error"],
        "Lore title must be at least one character long."
    );

    // whitespace-only content -> 400
    let request = Request::builder()
        .method("POST")
        .uri("/api/lore")
        .header("content-type", "application/json")
        .header(SESSION_USER_HEADER, alice.id.to_string())
        .body(Body::from(json!({"title": "t", "content": "\n"}).to_string()))?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_rest_not_found_variants() -> Result<()> {
    let (router, env) = create_test_router().await;
    let alice = create_user(&env, "alice").await;

    // well-formed but absent id
    let missing = Uuid::new_v4();
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/lore/{missing}"))
        .header(SESSION_USER_HEADER, alice.id.to_string())
        .body(Body::empty())?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = read_json(response).await;
    assert_eq!(
        body["error"],
        format!("Lore with lore ID {missing} does not exist.")
    );

    // malformed id
    let request = Request::builder()
        .method("DELETE")
        .uri("/api/lore/not-a-uuid")
        .header(SESSION_USER_HEADER, alice.id.to_string())
        .body(Body::empty())?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // missing id segment
    let request = Request::builder()
        .method("DELETE")
        .uri("/api/lore")
        .header(SESSION_USER_HEADER, alice.id.to_string())
        .body(Body::empty())?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // session guard is declared before the existence guard
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/lore/{missing}"))
        .body(Body::empty())?;
    let response = router.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}
