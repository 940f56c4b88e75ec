//! Request extractors.

pub mod person_id;
pub use person_id::PersonId;
