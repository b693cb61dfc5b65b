use anyhow::{anyhow, Result};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::health;
use crate::config::ServerConfig;
use crate::graphql::TrackerSchema;

#[derive(Clone)]
pub struct AppState {
    pub graphql_schema: TrackerSchema,
}

pub fn create_app(graphql_schema: TrackerSchema, config: &ServerConfig) -> Result<Router> {
    let state = AppState { graphql_schema };

    let cors = match config.cors_origin.as_deref() {
        Some(origin) if origin != "*" => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
            )
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any),
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any),
    };

    let graphql_route = if config.playground {
        get(graphql_playground).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    let app = Router::new()
        .route("/health", get(health::health_check))
        .route("/graphql", graphql_route)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    Ok(app)
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    tracing::debug!("GraphQL request received");
    let response = state.graphql_schema.execute(req.into_inner()).await;
    tracing::debug!(errors = response.errors.len(), "GraphQL request completed");
    response.into()
}

async fn graphql_playground() -> impl axum::response::IntoResponse {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
