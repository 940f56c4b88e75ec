//! PostgreSQL-backed person store and table setup. The table lives in the schema named by `PEOPLE_SCHEMA` (default `public`).

use super::{not_found, PersonStore};
use crate::error::AppError;
use crate::model::{NewPerson, Person};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const TABLE: &str = "people";
const COLUMNS: &str = "id, first_name, last_name, age";

/// Schema-qualified people table, e.g. `"public"."people"`.
pub fn people_table(schema: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(TABLE))
}

/// Create the schema and the people table if missing.
pub async fn ensure_people_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            age BIGINT NOT NULL
        )
        "#,
        people_table(schema)
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PgPersonStore {
    pool: PgPool,
    table: String,
}

impl PgPersonStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        Self {
            pool,
            table: people_table(schema),
        }
    }
}

#[async_trait]
impl PersonStore for PgPersonStore {
    async fn create(&self, person: &NewPerson) -> Result<Person, AppError> {
        let sql = format!(
            "INSERT INTO {} (first_name, last_name, age) VALUES ($1, $2, $3) RETURNING {}",
            self.table, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Person>(&sql)
            .bind(&person.first_name)
            .bind(&person.last_name)
            .bind(person.age)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Person, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, self.table);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Person>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Person>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn save(&self, person: &Person) -> Result<(), AppError> {
        let sql = format!(
            "UPDATE {} SET first_name = $1, last_name = $2, age = $3 WHERE id = $4",
            self.table
        );
        tracing::debug!(sql = %sql, id = person.id, "query");
        let result = sqlx::query(&sql)
            .bind(&person.first_name)
            .bind(&person.last_name)
            .bind(person.age)
            .bind(person.id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(not_found(person.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database named in `database_url` exists; create it if not. Connects with the
/// same host, credentials and TLS/socket options to the `postgres` database to run CREATE DATABASE.
/// A URL without a database name is left alone. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = admin_options(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the maintenance connection plus the target database name.
/// `None` when the URL names no database or names `postgres` itself.
fn admin_options(url: &str) -> Result<Option<(PgConnectOptions, String)>, AppError> {
    let opts = PgConnectOptions::from_str(url)?;
    let db_name = match opts.get_database().map(str::trim) {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
