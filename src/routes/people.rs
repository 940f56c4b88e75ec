//! Person CRUD routes. `{id}` is digit-only; the `PersonId` extractor answers 404 for anything else,
//! including unsupported methods on a non-digit segment.

use crate::extractors::PersonId;
use crate::handlers::people::{create, delete as delete_handler, read_all, read_one, update};
use crate::state::AppState;
use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};

/// Methods served on /people/{id}, as advertised in `Allow`.
const ID_METHODS: &str = "GET,HEAD,PUT,DELETE";

async fn id_method_not_allowed(PersonId(_): PersonId) -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, ID_METHODS)])
}

pub fn people_routes(state: AppState) -> Router {
    Router::new()
        .route("/people", get(read_all).post(create))
        .route(
            "/people/:id",
            get(read_one)
                .put(update)
                .delete(delete_handler)
                .fallback(id_method_not_allowed),
        )
        .with_state(state)
}
