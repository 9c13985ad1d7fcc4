//! HTTP gateway: router assembly and server loop

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::accounts::middleware::jwt_auth_middleware;
use crate::config::AppConfig;
use state::AppState;

/// Build the full application router
pub fn build_router(state: Arc<AppState>) -> Router {
    // ==========================================================================
    // Auth routes (public)
    // ==========================================================================
    let auth_routes = Router::new()
        .route("/login", post(crate::accounts::handlers::librarian_login))
        .route("/admin/login", post(crate::accounts::handlers::admin_login));

    // ==========================================================================
    // Management routes - protected by JWT
    // ==========================================================================
    let management_routes = Router::new()
        // Books
        .route(
            "/books",
            get(crate::books::handlers::list_books).post(crate::books::handlers::add_book),
        )
        .route("/books/search", get(crate::books::handlers::search_books))
        .route(
            "/books/{book_id}",
            put(crate::books::handlers::update_book).delete(crate::books::handlers::delete_book),
        )
        // Donors
        .route(
            "/donors",
            get(crate::donors::handlers::list_donors).post(crate::donors::handlers::create_donor),
        )
        .route("/donors/lookup", post(crate::donors::handlers::lookup_donor))
        .route(
            "/donors/{donor_id}",
            put(crate::donors::handlers::update_donor)
                .delete(crate::donors::handlers::delete_donor),
        )
        .route(
            "/donors/{donor_id}/donations",
            get(crate::donors::handlers::donated_books),
        )
        .route(
            "/donors/{donor_id}/certificate",
            get(crate::certificates::handlers::latest_certificate),
        )
        // Donations
        .route("/donations", post(crate::donations::handlers::record_batch))
        // Transfers
        .route(
            "/transfers",
            get(crate::transfers::handlers::list_transfers)
                .post(crate::transfers::handlers::create_transfer),
        )
        .route(
            "/transfers/books",
            get(crate::transfers::handlers::transferable_books),
        )
        .route(
            "/transfers/{transfer_id}",
            delete(crate::transfers::handlers::delete_transfer),
        )
        // Librarians
        .route(
            "/librarians",
            get(crate::accounts::handlers::list_librarians)
                .post(crate::accounts::handlers::create_librarian),
        )
        .route(
            "/librarians/{account_id}",
            put(crate::accounts::handlers::update_librarian)
                .delete(crate::accounts::handlers::delete_librarian),
        )
        // Certificate uploads (multipart, so raise the body limit)
        .route(
            "/certificates",
            post(crate::certificates::handlers::upload_certificate),
        )
        // Stats
        .route("/stats/dashboard", get(crate::stats::handlers::dashboard))
        .route("/stats/summary", get(crate::stats::handlers::summary))
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    Router::new()
        // Health check
        .route("/api/v1/health", get(handlers::health_check))
        // API Routes
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1", management_routes)
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Bind the gateway address and serve until shutdown
pub async fn run_server(config: &AppConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
