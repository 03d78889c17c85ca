use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
///
/// Paths are relative; the application nests this router under `/api`.
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route(
            "/regions",
            get(handlers::list_regions).post(handlers::create_region),
        )
        .route(
            "/regions/{id}",
            get(handlers::get_region)
                .put(handlers::update_region)
                .delete(handlers::delete_region),
        )
        .with_state(service)
}
