use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::{admin, search, Ctx};

/// Initialize HTTP routes.
pub fn init_handlers(ctx: Arc<Ctx>) -> Router {
    Router::new()
        .route("/api/config", get(admin::get_config))
        .route("/api/stats", get(admin::get_stats))
        .route("/api/suggest/{digits}", get(search::suggest))
        .route("/api/encode/{word}", get(search::encode))
        .with_state(ctx)
}
