//! Validation and record mapping between request documents and stored people.

mod mapper;
mod validation;
pub use mapper::apply_payload;
pub use validation::{FieldKind, FieldRule, ObjectSchema, SchemaValidator, PERSON_SCHEMA};
