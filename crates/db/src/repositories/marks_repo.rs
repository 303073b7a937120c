//! Repository for the `marks_records` table.

use skyview_core::marks::MarksDocument;
use skyview_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use skyview_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::marks::{CreateMarksRecord, MarksRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, academic_year, admission_no, student_name, father_name, \
    class_name, section, roll_no, marks, co_scholastic, attendance, teacher_remarks, rank, \
    version, created_at, updated_at";

/// Roll numbers are text; purely numeric ones sort by value ahead of the rest,
/// so "2" comes before "10".
const ROLL_ORDER: &str = "(roll_no ~ '^[0-9]{1,18}$') DESC, \
    CASE WHEN roll_no ~ '^[0-9]{1,18}$' THEN roll_no::BIGINT END ASC, \
    roll_no ASC, id ASC";

/// Provides CRUD operations for marks records.
///
/// Callers validate documents (see [`MarksDocument::validate`]) before any
/// write except [`MarksRepo::set_rank`].
pub struct MarksRepo;

impl MarksRepo {
    /// Insert a new record at version 1.
    ///
    /// A second record for the same `(student_id, academic_year)` violates
    /// `uq_marks_records_student_year`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMarksRecord,
    ) -> Result<MarksRecord, sqlx::Error> {
        let doc = &input.document;
        let query = format!(
            "INSERT INTO marks_records \
                (student_id, academic_year, admission_no, student_name, father_name, \
                 class_name, section, roll_no, marks, co_scholastic, attendance, \
                 teacher_remarks, rank) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MarksRecord>(&query)
            .bind(input.student_id)
            .bind(&input.academic_year)
            .bind(&doc.identity.admission_no)
            .bind(&doc.identity.student_name)
            .bind(&doc.identity.father_name)
            .bind(&doc.identity.class_name)
            .bind(&doc.identity.section)
            .bind(&doc.identity.roll_no)
            .bind(Json(&doc.marks))
            .bind(Json(&doc.co_scholastic))
            .bind(Json(&doc.attendance))
            .bind(&doc.teacher_remarks)
            .bind(doc.rank)
            .fetch_one(pool)
            .await
    }

    /// Find a record by its surrogate ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MarksRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marks_records WHERE id = $1");
        sqlx::query_as::<_, MarksRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the record for one student in one academic year.
    pub async fn find_by_key(
        pool: &PgPool,
        student_id: DbId,
        academic_year: &str,
    ) -> Result<Option<MarksRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM marks_records WHERE student_id = $1 AND academic_year = $2"
        );
        sqlx::query_as::<_, MarksRecord>(&query)
            .bind(student_id)
            .bind(academic_year)
            .fetch_optional(pool)
            .await
    }

    /// All records for a student, newest academic year first.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<MarksRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM marks_records \
             WHERE student_id = $1 \
             ORDER BY academic_year DESC"
        );
        sqlx::query_as::<_, MarksRecord>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// Records for a class section, optionally narrowed to one academic year,
    /// ordered by roll number.
    pub async fn list_by_class_section(
        pool: &PgPool,
        class_name: &str,
        section: &str,
        academic_year: Option<&str>,
    ) -> Result<Vec<MarksRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM marks_records \
             WHERE class_name = $1 AND section = $2 \
               AND ($3::TEXT IS NULL OR academic_year = $3) \
             ORDER BY academic_year DESC, {ROLL_ORDER}"
        );
        sqlx::query_as::<_, MarksRecord>(&query)
            .bind(class_name)
            .bind(section)
            .bind(academic_year)
            .fetch_all(pool)
            .await
    }

    /// List records with pagination.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<MarksRecord>, sqlx::Error> {
        let limit_val = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset_val = clamp_offset(offset);

        let query = format!(
            "SELECT {COLUMNS} FROM marks_records \
             ORDER BY class_name ASC, section ASC, academic_year DESC, {ROLL_ORDER} \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, MarksRecord>(&query)
            .bind(limit_val)
            .bind(offset_val)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable field of a record and bump its version.
    ///
    /// With `expected_version`, the row only matches while it is still at that
    /// version. Returns `None` when no row matched (missing or stale).
    pub async fn update(
        pool: &PgPool,
        student_id: DbId,
        academic_year: &str,
        doc: &MarksDocument,
        expected_version: Option<i32>,
    ) -> Result<Option<MarksRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE marks_records SET \
                admission_no    = $3, \
                student_name    = $4, \
                father_name     = $5, \
                class_name      = $6, \
                section         = $7, \
                roll_no         = $8, \
                marks           = $9, \
                co_scholastic   = $10, \
                attendance      = $11, \
                teacher_remarks = $12, \
                rank            = $13, \
                version         = version + 1 \
             WHERE student_id = $1 AND academic_year = $2 \
               AND ($14::INTEGER IS NULL OR version = $14) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MarksRecord>(&query)
            .bind(student_id)
            .bind(academic_year)
            .bind(&doc.identity.admission_no)
            .bind(&doc.identity.student_name)
            .bind(&doc.identity.father_name)
            .bind(&doc.identity.class_name)
            .bind(&doc.identity.section)
            .bind(&doc.identity.roll_no)
            .bind(Json(&doc.marks))
            .bind(Json(&doc.co_scholastic))
            .bind(Json(&doc.attendance))
            .bind(&doc.teacher_remarks)
            .bind(doc.rank)
            .bind(expected_version)
            .fetch_optional(pool)
            .await
    }

    /// Set (or clear) only the rank. No document validation and no version
    /// bump. Returns `None` if no row with `id` exists.
    pub async fn set_rank(
        pool: &PgPool,
        id: DbId,
        rank: Option<i32>,
    ) -> Result<Option<MarksRecord>, sqlx::Error> {
        let query = format!("UPDATE marks_records SET rank = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, MarksRecord>(&query)
            .bind(id)
            .bind(rank)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a record. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM marks_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
