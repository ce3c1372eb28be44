pub mod ask;
pub mod health;

#[cfg(test)]
mod mock;

use crate::state::AppState;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub fn configure(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(ask::routes(state))
}

/// Accept any origin, method and header with credentials. Wildcards cannot be
/// combined with credentials, so the request values are mirrored back instead.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn app(state: AppState) -> Router {
    configure(state).layer(cors())
}
