//! Plain-text success bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const SUCCESS: &str = "success";
pub const UPDATED: &str = "Updated!";
pub const NO_CHANGE: &str = "No change detected";

pub fn success() -> (StatusCode, &'static str) {
    (StatusCode::OK, SUCCESS)
}

/// Result of PUT /people/{id}.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    Unchanged,
}

impl UpdateOutcome {
    pub fn message(self) -> &'static str {
        match self {
            UpdateOutcome::Updated => UPDATED,
            UpdateOutcome::Unchanged => NO_CHANGE,
        }
    }
}

impl IntoResponse for UpdateOutcome {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.message()).into_response()
    }
}
