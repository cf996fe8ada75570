use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{AppState, routes};

mod cors;

pub use cors::cors_layer;

pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let api_routes = Router::new()
        .merge(routes::magic::router())
        .merge(routes::generations::router());

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
