//! Repository for the `student` table.

use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "std_id, std_name, std_email, dept_name, created_at, updated_at";

/// Provides insert and lookup operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    ///
    /// Fails with a unique violation if the id, name, or email is taken.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO student (std_id, std_name, std_email, dept_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.std_id)
            .bind(&input.std_name)
            .bind(&input.std_email)
            .bind(&input.dept_name)
            .fetch_one(pool)
            .await
    }

    /// Find a student by identifier.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student WHERE std_id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all students ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student ORDER BY std_name ASC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Students whose name contains `term` (case-sensitive, literal), ordered by name.
    ///
    /// `None` returns every student.
    pub async fn search(pool: &PgPool, term: Option<&str>) -> Result<Vec<Student>, sqlx::Error> {
        let Some(term) = term else {
            return Self::list(pool).await;
        };
        let query = format!(
            "SELECT {COLUMNS} FROM student
             WHERE strpos(std_name, $1) > 0
             ORDER BY std_name ASC"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(term)
            .fetch_all(pool)
            .await
    }
}
