//! Person CRUD handlers: create, read one, read all, update, delete.

use crate::error::AppError;
use crate::extractors::PersonId;
use crate::model::PersonPayload;
use crate::response::{success, UpdateOutcome};
use crate::service::{apply_payload, SchemaValidator, PERSON_SCHEMA};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

/// Parse, validate and decode a request body into a payload.
pub fn decode_payload(body: &[u8]) -> Result<PersonPayload, AppError> {
    let doc: Value =
        serde_json::from_slice(body).map_err(|e| AppError::MalformedInput(e.to_string()))?;
    SchemaValidator::validate(&doc, &PERSON_SCHEMA)?;
    PersonPayload::from_document(doc)
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let payload = decode_payload(&body)?;
    let person = state.store.create(&payload.into_new_person()).await?;
    tracing::info!(id = person.id, "person created");
    Ok(success())
}

pub async fn read_one(
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let person = state.store.find_by_id(id).await?;
    Ok(Json(person))
}

pub async fn read_all(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let people = state.store.find_all().await?;
    Ok(Json(people))
}

pub async fn update(
    State(state): State<AppState>,
    PersonId(id): PersonId,
    body: Bytes,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let mut person = state.store.find_by_id(id).await?;
    let payload = decode_payload(&body)?;
    if !apply_payload(&mut person, &payload) {
        return Ok(UpdateOutcome::Unchanged);
    }
    state.store.save(&person).await?;
    tracing::info!(id, "person updated");
    Ok(UpdateOutcome::Updated)
}

pub async fn delete(
    State(state): State<AppState>,
    PersonId(id): PersonId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    state.store.delete(id).await?;
    tracing::info!(id, "person deleted");
    Ok(success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_json_body_is_malformed_not_a_schema_violation() {
        assert!(matches!(decode_payload(b"{firstName:"), Err(AppError::MalformedInput(_))));
        assert!(matches!(decode_payload(b""), Err(AppError::MalformedInput(_))));
    }

    #[test]
    fn valid_body_decodes() {
        let p = decode_payload(br#"{"firstName":"Ada","lastName":"Lovelace","age":36}"#).unwrap();
        assert_eq!(p.first_name, "Ada");
        assert_eq!(p.age, 36);
    }

    #[test]
    fn schema_violation_is_reported() {
        match decode_payload(br#"{"firstName":"","lastName":"X","age":1}"#) {
            Err(AppError::Validation(msgs)) => assert!(msgs[0].starts_with("firstName")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
