//! PostgreSQL access for the registrar: pool lifecycle, migrations, row
//! models, and one repository per table.
//!
//! Uniqueness and referential integrity are enforced by the schema alone.
//! Repositories never pre-check; [`constraint::classify`] turns the resulting
//! database errors into typed violations for the HTTP layer.

use std::str::FromStr;

use serde::Serialize;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod constraint;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// The database name is fixed; only user, host, port, and password vary.
pub const DATABASE_NAME: &str = "postgres";

/// Connection parameters loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Full connection URL. When set, the individual parts below are ignored.
    pub url: Option<String>,
    pub user: String,
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    pub max_connections: u32,
}

impl DbConfig {
    /// Load configuration from process environment variables.
    ///
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `DATABASE_URL`       | unset       |
    /// | `POSTGRES_USER`      | `postgres`  |
    /// | `POSTGRES_HOST`      | `localhost` |
    /// | `POSTGRES_PORT`      | `5432`      |
    /// | `POSTGRES_PASSWORD`  | unset       |
    /// | `DB_MAX_CONNECTIONS` | `20`        |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unparseable numbers
    /// fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            url: non_empty("DATABASE_URL"),
            user: non_empty("POSTGRES_USER").unwrap_or_else(|| "postgres".into()),
            host: non_empty("POSTGRES_HOST").unwrap_or_else(|| "localhost".into()),
            port: non_empty("POSTGRES_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5432),
            password: non_empty("POSTGRES_PASSWORD"),
            max_connections: non_empty("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
        }
    }

    /// Connection options for this configuration.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(DATABASE_NAME);
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }
}

/// Create a connection pool from configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = config.connect_options()?;
    tracing::debug!(
        host = options.get_host(),
        database = options.get_database(),
        max_connections = config.max_connections,
        "Connecting to database",
    );
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Number of rows in each registrar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub students: i64,
    pub instructors: i64,
    pub advisors: i64,
}

/// Count the rows of every registrar table in one round trip.
pub async fn record_counts(pool: &DbPool) -> Result<RecordCounts, sqlx::Error> {
    let (students, instructors, advisors): (i64, i64, i64) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM student), \
                (SELECT COUNT(*) FROM instructor), \
                (SELECT COUNT(*) FROM advisor)",
    )
    .fetch_one(pool)
    .await?;

    Ok(RecordCounts {
        students,
        instructors,
        advisors,
    })
}

/// Version of the newest successfully applied migration, if any.
pub async fn schema_version(pool: &DbPool) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT MAX(version) FROM _sqlx_migrations WHERE success")
        .fetch_one(pool)
        .await
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
