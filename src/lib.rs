//! People API: JSON CRUD over Person records backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::{NewPerson, Person, PersonPayload};
pub use routes::{app, common_routes, people_routes};
pub use state::AppState;
pub use store::{
    ensure_database_exists, ensure_people_table, MemoryPersonStore, PersonStore, PgPersonStore,
};
