pub mod auth;
pub mod routes;
pub mod state;

pub use state::AppState;

use axum::{middleware, routing::put, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// `PUT /register` runs the registration; every other method and path gets the greeting.
/// The token check wraps both the route and the fallback.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/register",
            put(routes::register).fallback(routes::greeting),
        )
        .fallback(routes::greeting)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::require_token,
                )),
        )
        .with_state(state)
}
