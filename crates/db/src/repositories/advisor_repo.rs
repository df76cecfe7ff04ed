//! Repository for the `advisor` table.

use sqlx::PgPool;

use crate::models::advisor::{Advisor, CreateAdvisor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "adv_id, st_id, created_at, updated_at";

/// Provides insert and lookup operations for advisor assignments.
pub struct AdvisorRepo;

impl AdvisorRepo {
    /// Record that an instructor advises a student, returning the created row.
    ///
    /// Fails with a foreign-key violation if either id is unknown, and with a
    /// primary-key violation if the instructor already advises someone.
    pub async fn create(pool: &PgPool, input: &CreateAdvisor) -> Result<Advisor, sqlx::Error> {
        let query = format!(
            "INSERT INTO advisor (adv_id, st_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Advisor>(&query)
            .bind(&input.adv_id)
            .bind(&input.st_id)
            .fetch_one(pool)
            .await
    }

    /// The assignment held by an instructor, if any.
    pub async fn find_by_instructor(
        pool: &PgPool,
        instructor_id: &str,
    ) -> Result<Option<Advisor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM advisor WHERE adv_id = $1");
        sqlx::query_as::<_, Advisor>(&query)
            .bind(instructor_id)
            .fetch_optional(pool)
            .await
    }

    /// List all assignments ordered by instructor id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Advisor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM advisor ORDER BY adv_id ASC");
        sqlx::query_as::<_, Advisor>(&query).fetch_all(pool).await
    }
}
