use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::http::StatusCode;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use crate::domain::admin::service::AuthService;
use crate::outbound::repositories::PostgresAdminStore;
use crate::outbound::repositories::PostgresOrganizationDirectory;
use crate::outbound::security::Argon2Verifier;
use crate::outbound::security::JwtTokenIssuer;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<
        AuthService<
            PostgresOrganizationDirectory,
            PostgresAdminStore,
            Argon2Verifier,
            JwtTokenIssuer,
        >,
    >,
}

pub fn create_router(
    auth_service: Arc<
        AuthService<
            PostgresOrganizationDirectory,
            PostgresAdminStore,
            Argon2Verifier,
            JwtTokenIssuer,
        >,
    >,
) -> Router {
    let state = AppState { auth_service };

    // Request bodies carry credentials, so the span records the request
    // line only, never headers or payloads.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/api/auth/login", post(login))
        .route("/health", get(|| async { StatusCode::OK }))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
