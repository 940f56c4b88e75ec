//! Persistence gateway for people: trait plus PostgreSQL and in-memory backends.

mod memory;
mod postgres;

pub use memory::MemoryPersonStore;
pub use postgres::{ensure_database_exists, ensure_people_table, people_table, PgPersonStore};

use crate::error::AppError;
use crate::model::{NewPerson, Person};
use async_trait::async_trait;

/// One call is one store round-trip. No transactions, no retries.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Insert and return the record with its assigned id.
    async fn create(&self, person: &NewPerson) -> Result<Person, AppError>;

    /// `AppError::NotFound` when no row has this id.
    async fn find_by_id(&self, id: i64) -> Result<Person, AppError>;

    /// All rows ordered by id; empty when the table is empty.
    async fn find_all(&self) -> Result<Vec<Person>, AppError>;

    /// Persist in-place changes. `AppError::NotFound` if the row is gone.
    async fn save(&self, person: &Person) -> Result<(), AppError>;

    /// `AppError::NotFound` when no row has this id.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Cheap connectivity check used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}

pub(crate) fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("person {}", id))
}
