//! HTTP integration tests
//!
//! Drives the axum router through `axum-test` against a temporary database file.

use std::sync::Arc;

use anyhow::Result;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use taskboard::app_context::AppContext;
use taskboard::config::ServerConfig;
use taskboard::database::{establish_connection, get_database_url, setup_database};
use taskboard::graphql::build_schema;
use taskboard::server::app::create_app;
use tempfile::NamedTempFile;

async fn setup_test_server(config: ServerConfig) -> Result<(TestServer, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = get_database_url(temp_file.path().to_str());

    let db = establish_connection(&db_url).await?;
    setup_database(&db).await?;

    let app_context = Arc::new(AppContext::new(db));
    app_context
        .create_organization("acme".to_string(), "Acme Corp".to_string())
        .await?;

    let app = create_app(build_schema(app_context), &config)?;
    let server = TestServer::new(app)?;

    Ok((server, temp_file))
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let (server, _temp_file) = setup_test_server(ServerConfig::default()).await?;

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["service"], "taskboard");
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_graphql_over_http() -> Result<()> {
    let (server, _temp_file) = setup_test_server(ServerConfig::default()).await?;

    let response = server
        .post("/graphql")
        .json(&json!({
            "query": "mutation { createProject(orgSlug: \"acme\", name: \"Launch\") { project { id taskCount } } }"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["createProject"]["project"]["taskCount"], 0);

    let response = server
        .post("/graphql")
        .json(&json!({
            "query": "query Dashboard($orgSlug: String!) { projects(orgSlug: $orgSlug) { name status } }",
            "variables": { "orgSlug": "acme" }
        }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["data"]["projects"][0]["name"], "Launch");
    assert_eq!(body["data"]["projects"][0]["status"], "ACTIVE");

    Ok(())
}

#[tokio::test]
async fn test_not_found_is_reported_in_graphql_errors() -> Result<()> {
    let (server, _temp_file) = setup_test_server(ServerConfig::default()).await?;

    let response = server
        .post("/graphql")
        .json(&json!({ "query": "query { project(id: \"41\") { id } }" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["data"]["project"], Value::Null);
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");

    Ok(())
}

#[tokio::test]
async fn test_playground_toggle() -> Result<()> {
    let (server, _temp_file) = setup_test_server(ServerConfig::default()).await?;
    let response = server.get("/graphql").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("GraphQL Playground"));

    let config = ServerConfig {
        playground: false,
        ..ServerConfig::default()
    };
    let (server, _temp_file) = setup_test_server(config).await?;
    let response = server.get("/graphql").expect_failure().await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
