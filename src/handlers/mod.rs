//! HTTP handlers for person CRUD.

pub mod people;
pub use people::*;
