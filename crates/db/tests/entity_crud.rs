//! Integration tests for the repository layer against a real database:
//! - Insert and read back students, instructors, and advisors
//! - Unique constraint violations on id, name, and email
//! - Foreign key violations on advisor assignments
//! - Name search filtering and ordering

use assert_matches::assert_matches;
use registrar_db::constraint::{classify, ConstraintViolation};
use registrar_db::models::advisor::CreateAdvisor;
use registrar_db::models::instructor::CreateInstructor;
use registrar_db::models::student::CreateStudent;
use registrar_db::repositories::{AdvisorRepo, InstructorRepo, StudentRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_student(id: &str, name: &str, email: &str) -> CreateStudent {
    CreateStudent {
        std_id: id.to_string(),
        std_name: name.to_string(),
        std_email: email.to_string(),
        dept_name: "CS".to_string(),
    }
}

fn new_instructor(id: &str, name: &str, email: &str) -> CreateInstructor {
    CreateInstructor {
        ins_id: id.to_string(),
        ins_name: name.to_string(),
        ins_email: email.to_string(),
        dept_name: "Math".to_string(),
    }
}

fn new_advisor(instructor_id: &str, student_id: &str) -> CreateAdvisor {
    CreateAdvisor {
        adv_id: instructor_id.to_string(),
        st_id: student_id.to_string(),
    }
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

// ---------------------------------------------------------------------------
// Test: Insert and read back
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_student(pool: PgPool) {
    let created = StudentRepo::create(&pool, &new_student("S1", "Ann Lee", "ann@x.edu"))
        .await
        .unwrap();
    assert_eq!(created.std_id, "S1");
    assert_eq!(created.std_name, "Ann Lee");
    assert_eq!(created.dept_name, "CS");

    let found = StudentRepo::find_by_id(&pool, "S1").await.unwrap().unwrap();
    assert_eq!(found.std_email, "ann@x.edu");

    assert!(StudentRepo::find_by_id(&pool, "missing").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_instructor(pool: PgPool) {
    InstructorRepo::create(&pool, &new_instructor("I1", "Dr. Grace", "grace@x.edu"))
        .await
        .unwrap();

    let found = InstructorRepo::find_by_id(&pool, "I1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.ins_name, "Dr. Grace");
    assert_eq!(found.dept_name, "Math");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_advisor(pool: PgPool) {
    StudentRepo::create(&pool, &new_student("S1", "Ann Lee", "ann@x.edu"))
        .await
        .unwrap();
    InstructorRepo::create(&pool, &new_instructor("I1", "Dr. Grace", "grace@x.edu"))
        .await
        .unwrap();

    let advisor = AdvisorRepo::create(&pool, &new_advisor("I1", "S1"))
        .await
        .unwrap();
    assert_eq!(advisor.adv_id, "I1");
    assert_eq!(advisor.st_id, "S1");

    let found = AdvisorRepo::find_by_instructor(&pool, "I1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.st_id, "S1");
    assert_eq!(AdvisorRepo::list(&pool).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: Unique constraint violations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_student_id_name_or_email_rejected(pool: PgPool) {
    StudentRepo::create(&pool, &new_student("S1", "Ann Lee", "ann@x.edu"))
        .await
        .unwrap();

    let cases = [
        (new_student("S1", "Other", "other@x.edu"), "pk_student"),
        (new_student("S2", "Ann Lee", "other@x.edu"), "uq_student_name"),
        (new_student("S3", "Other", "ann@x.edu"), "uq_student_email"),
    ];

    for (input, expected) in cases {
        let err = StudentRepo::create(&pool, &input).await.unwrap_err();
        assert_matches!(
            classify(&err),
            Some(ConstraintViolation::Unique { constraint }) if constraint == expected
        );
    }

    assert_eq!(count(&pool, "student").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_instructor_rejected(pool: PgPool) {
    InstructorRepo::create(&pool, &new_instructor("I1", "Dr. Grace", "grace@x.edu"))
        .await
        .unwrap();

    let err = InstructorRepo::create(&pool, &new_instructor("I2", "Dr. Grace", "g2@x.edu"))
        .await
        .unwrap_err();
    assert_matches!(
        classify(&err),
        Some(ConstraintViolation::Unique { constraint }) if constraint == "uq_instructor_name"
    );
    assert_eq!(count(&pool, "instructor").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_student_and_instructor_may_share_values(pool: PgPool) {
    StudentRepo::create(&pool, &new_student("X1", "Sam Park", "sam@x.edu"))
        .await
        .unwrap();
    InstructorRepo::create(&pool, &new_instructor("X1", "Sam Park", "sam@x.edu"))
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overlong_id_rejected_by_check(pool: PgPool) {
    let err = StudentRepo::create(&pool, &new_student(&"9".repeat(21), "Ann Lee", "ann@x.edu"))
        .await
        .unwrap_err();
    assert_matches!(
        classify(&err),
        Some(ConstraintViolation::Check { constraint }) if constraint == "ck_student_id_len"
    );
}

// ---------------------------------------------------------------------------
// Test: Foreign key violations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fk_violation_advisor_bad_instructor(pool: PgPool) {
    StudentRepo::create(&pool, &new_student("S1", "Ann Lee", "ann@x.edu"))
        .await
        .unwrap();

    let err = AdvisorRepo::create(&pool, &new_advisor("ghost", "S1"))
        .await
        .unwrap_err();
    assert_matches!(
        classify(&err),
        Some(ConstraintViolation::ForeignKey { constraint }) if constraint == "fk_advisor_instructor"
    );
    assert_eq!(count(&pool, "advisor").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fk_violation_advisor_bad_student(pool: PgPool) {
    InstructorRepo::create(&pool, &new_instructor("I1", "Dr. Grace", "grace@x.edu"))
        .await
        .unwrap();

    let err = AdvisorRepo::create(&pool, &new_advisor("I1", "ghost"))
        .await
        .unwrap_err();
    assert_matches!(
        classify(&err),
        Some(ConstraintViolation::ForeignKey { constraint }) if constraint == "fk_advisor_student"
    );
    assert_eq!(count(&pool, "advisor").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_instructor_advises_at_most_one_student(pool: PgPool) {
    StudentRepo::create(&pool, &new_student("S1", "Ann Lee", "ann@x.edu"))
        .await
        .unwrap();
    StudentRepo::create(&pool, &new_student("S2", "Bo Chan", "bo@x.edu"))
        .await
        .unwrap();
    InstructorRepo::create(&pool, &new_instructor("I1", "Dr. Grace", "grace@x.edu"))
        .await
        .unwrap();

    AdvisorRepo::create(&pool, &new_advisor("I1", "S1"))
        .await
        .unwrap();
    let err = AdvisorRepo::create(&pool, &new_advisor("I1", "S2"))
        .await
        .unwrap_err();
    assert_matches!(
        classify(&err),
        Some(ConstraintViolation::Unique { constraint }) if constraint == "pk_advisor"
    );

    // A student may still have several advisors.
    InstructorRepo::create(&pool, &new_instructor("I2", "Dr. Hopper", "hopper@x.edu"))
        .await
        .unwrap();
    AdvisorRepo::create(&pool, &new_advisor("I2", "S1"))
        .await
        .unwrap();
    assert_eq!(count(&pool, "advisor").await, 2);
}

// ---------------------------------------------------------------------------
// Test: Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_students_by_substring_ordered(pool: PgPool) {
    for (id, name) in [("S1", "Bob Alicia"), ("S2", "Alice Smith"), ("S3", "Carol")] {
        StudentRepo::create(&pool, &new_student(id, name, &format!("{id}@x.edu")))
            .await
            .unwrap();
    }

    let names = |rows: Vec<registrar_db::models::student::Student>| -> Vec<String> {
        rows.into_iter().map(|s| s.std_name).collect()
    };

    let hits = StudentRepo::search(&pool, Some("Alic")).await.unwrap();
    assert_eq!(names(hits), vec!["Alice Smith", "Bob Alicia"]);

    let all = StudentRepo::search(&pool, None).await.unwrap();
    assert_eq!(names(all), vec!["Alice Smith", "Bob Alicia", "Carol"]);

    let none = StudentRepo::search(&pool, Some("Zed")).await.unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_is_case_sensitive_and_literal(pool: PgPool) {
    StudentRepo::create(&pool, &new_student("S1", "Alice Smith", "a@x.edu"))
        .await
        .unwrap();
    StudentRepo::create(&pool, &new_student("S2", "100% Sure", "b@x.edu"))
        .await
        .unwrap();

    assert!(StudentRepo::search(&pool, Some("alice"))
        .await
        .unwrap()
        .is_empty());

    // LIKE wildcards are matched literally.
    let hits = StudentRepo::search(&pool, Some("%")).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].std_id, "S2");
    assert!(StudentRepo::search(&pool, Some("_"))
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_instructors_ordered(pool: PgPool) {
    for (id, name) in [("I1", "Zoe Quinn"), ("I2", "Adam Quill")] {
        InstructorRepo::create(&pool, &new_instructor(id, name, &format!("{id}@x.edu")))
            .await
            .unwrap();
    }
    // Students never leak into instructor search.
    StudentRepo::create(&pool, &new_student("S1", "Quentin", "q@x.edu"))
        .await
        .unwrap();

    let hits: Vec<String> = InstructorRepo::search(&pool, Some("Qu"))
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.ins_name)
        .collect();
    assert_eq!(hits, vec!["Adam Quill", "Zoe Quinn"]);
}
