use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use brewlog_core::middleware::request_id_layer;

use crate::handlers::{
    coffee::{create_coffee, delete_coffee, get_coffee, list_coffees, restore_coffee},
    health::{health, metrics},
    recommendation::{analyze_preferences, get_taste_profile},
    roaster::{create_roaster, get_roaster, list_roasters},
    tasting::{create_tasting, delete_tasting, get_tasting, list_tastings, update_tasting},
};
use crate::metrics::track_http;
use crate::state::AppState;

/// Allowed CORS origins. An empty list means any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    let parsed: Vec<_> = origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Health
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        // Roasters
        .route("/roasters", post(create_roaster))
        .route("/roasters", get(list_roasters))
        .route("/roasters/{id}", get(get_roaster))
        // Coffees
        .route("/coffees", post(create_coffee))
        .route("/coffees", get(list_coffees))
        .route("/coffees/{id}", get(get_coffee))
        .route("/coffees/{id}", delete(delete_coffee))
        .route("/coffees/{id}/restore", post(restore_coffee))
        // Tastings
        .route("/tastings", get(list_tastings))
        .route("/tastings", post(create_tasting))
        .route("/tastings/{id}", get(get_tasting))
        .route("/tastings/{id}", put(update_tasting))
        .route("/tastings/{id}", delete(delete_tasting))
        // Recommendations
        .route("/recommendations/analysis", get(analyze_preferences))
        .route("/recommendations/preferences", get(get_taste_profile))
        .layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            track_http,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .layer(cors)
        .with_state(state)
}
