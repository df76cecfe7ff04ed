//! Repository for the `instructor` table.

use sqlx::PgPool;

use crate::models::instructor::{CreateInstructor, Instructor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "ins_id, ins_name, ins_email, dept_name, created_at, updated_at";

/// Provides insert and lookup operations for instructors.
pub struct InstructorRepo;

impl InstructorRepo {
    /// Insert a new instructor, returning the created row.
    ///
    /// Fails with a unique violation if the id, name, or email is taken.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInstructor,
    ) -> Result<Instructor, sqlx::Error> {
        let query = format!(
            "INSERT INTO instructor (ins_id, ins_name, ins_email, dept_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Instructor>(&query)
            .bind(&input.ins_id)
            .bind(&input.ins_name)
            .bind(&input.ins_email)
            .bind(&input.dept_name)
            .fetch_one(pool)
            .await
    }

    /// Find a instructor by identifier.
    pub async fn find_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<Instructor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM instructor WHERE ins_id = $1");
        sqlx::query_as::<_, Instructor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all instructors ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Instructor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM instructor ORDER BY ins_name ASC");
        sqlx::query_as::<_, Instructor>(&query).fetch_all(pool).await
    }

    /// Instructors whose name contains `term` (case-sensitive, literal), ordered by name.
    ///
    /// `None` returns every instructor.
    pub async fn search(
        pool: &PgPool,
        term: Option<&str>,
    ) -> Result<Vec<Instructor>, sqlx::Error> {
        let Some(term) = term else {
            return Self::list(pool).await;
        };
        let query = format!(
            "SELECT {COLUMNS} FROM instructor
             WHERE strpos(ins_name, $1) > 0
             ORDER BY ins_name ASC"
        );
        sqlx::query_as::<_, Instructor>(&query)
            .bind(term)
            .fetch_all(pool)
            .await
    }
}
