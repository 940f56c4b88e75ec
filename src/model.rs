//! Person record and the create/update payload accepted at the HTTP boundary.

use crate::error::AppError;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Persisted person. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(serialize_with = "id_as_string")]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

/// Person not yet stored; the store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

/// Body of POST /people and PUT /people/{id}.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PersonPayload {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

impl PersonPayload {
    /// Typed decode of a document that already passed schema validation.
    pub fn from_document(doc: Value) -> Result<Self, AppError> {
        serde_json::from_value(doc).map_err(|e| AppError::Validation(vec![e.to_string()]))
    }

    pub fn into_new_person(self) -> NewPerson {
        NewPerson {
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
        }
    }
}

fn id_as_string<S: Serializer>(id: &i64, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(id)
}
