//! Repository for the `exam_configs` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::exam_config::{ExamConfig, UpsertExamConfig};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, class_name, section, academic_year, exam_configs, created_at, updated_at";

/// Provides lookup and upsert for per-class exam configurations.
///
/// Never synthesizes defaults: a missing configuration is `None`.
pub struct ExamConfigRepo;

impl ExamConfigRepo {
    /// Find the configuration for a class, section and academic year.
    pub async fn find(
        pool: &PgPool,
        class_name: &str,
        section: &str,
        academic_year: &str,
    ) -> Result<Option<ExamConfig>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM exam_configs \
             WHERE class_name = $1 AND section = $2 AND academic_year = $3"
        );
        sqlx::query_as::<_, ExamConfig>(&query)
            .bind(class_name)
            .bind(section)
            .bind(academic_year)
            .fetch_optional(pool)
            .await
    }

    /// Create or fully replace the configuration for the input's key.
    ///
    /// Uses `ON CONFLICT ... DO UPDATE` so the replace is a single atomic
    /// write; the previous entry list is discarded, not merged.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertExamConfig,
    ) -> Result<ExamConfig, sqlx::Error> {
        let query = format!(
            "INSERT INTO exam_configs (class_name, section, academic_year, exam_configs) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT ON CONSTRAINT uq_exam_configs_class_section_year DO UPDATE \
             SET exam_configs = EXCLUDED.exam_configs \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExamConfig>(&query)
            .bind(&input.class_name)
            .bind(&input.section)
            .bind(&input.academic_year)
            .bind(Json(&input.exam_configs))
            .fetch_one(pool)
            .await
    }

    /// List every configuration by class, section, then newest year first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ExamConfig>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM exam_configs \
             ORDER BY class_name ASC, section ASC, academic_year DESC"
        );
        sqlx::query_as::<_, ExamConfig>(&query).fetch_all(pool).await
    }
}
