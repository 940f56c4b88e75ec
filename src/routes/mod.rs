//! Router assembly.

mod common;
mod people;
pub use common::common_routes;
pub use people::people_routes;

use crate::state::AppState;
use axum::Router;

/// People CRUD plus health, readiness and version routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(people_routes(state))
}
