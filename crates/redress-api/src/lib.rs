//! Redress API /v1: REST endpoints over the session workflow.

pub mod handlers;

use axum::{
    routing::{delete, get, post},
    Router,
};
use handlers::SessionStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_app() -> Router {
    create_app_with_store(handlers::new_store())
}

pub fn create_app_with_store(store: SessionStore) -> Router {
    Router::new()
        .route("/v1/sessions", post(handlers::create_session))
        .route("/v1/sessions/{id}", get(handlers::get_session))
        .route("/v1/sessions/{id}", delete(handlers::delete_session))
        .route("/v1/sessions/{id}/facts", post(handlers::submit_facts))
        .route("/v1/sessions/{id}/acknowledge", post(handlers::acknowledge))
        .route("/v1/sessions/{id}/confirm", post(handlers::confirm_summary))
        .route("/v1/sessions/{id}/letter", post(handlers::request_letter))
        .route("/v1/sessions/{id}/reset", post(handlers::reset_session))
        .route("/v1/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}

pub async fn run(addr: &str) {
    let app = create_app();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("Redress API listening on {}", addr);
    axum::serve(listener, app).await.expect("Server error");
}
