mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::Database;

pub fn create_router(db: Database) -> Router {
    let api = Router::new()
        // Feedback
        .route("/feedback", post(handlers::submit_feedback))
        .route("/feedback", get(handlers::list_feedback))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/node", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
