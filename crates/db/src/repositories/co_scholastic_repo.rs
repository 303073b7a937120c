//! Repository for the `co_scholastic_areas` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::co_scholastic::{CoScholasticAreas, SaveCoScholasticAreas};

/// Column list for `co_scholastic_areas` queries.
const COLUMNS: &str = "id, class_name, academic_year, areas, created_at, updated_at";

/// Provides lookup and upsert for co-scholastic areas.
pub struct CoScholasticAreaRepo;

impl CoScholasticAreaRepo {
    /// Find the areas for a class and academic year.
    pub async fn find(
        pool: &PgPool,
        class_name: &str,
        academic_year: &str,
    ) -> Result<Option<CoScholasticAreas>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM co_scholastic_areas \
             WHERE class_name = $1 AND academic_year = $2"
        );
        sqlx::query_as::<_, CoScholasticAreas>(&query)
            .bind(class_name)
            .bind(academic_year)
            .fetch_optional(pool)
            .await
    }

    /// Create or fully replace the areas for the input's key.
    pub async fn upsert(
        pool: &PgPool,
        input: &SaveCoScholasticAreas,
    ) -> Result<CoScholasticAreas, sqlx::Error> {
        let query = format!(
            "INSERT INTO co_scholastic_areas (class_name, academic_year, areas) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_co_scholastic_areas_class_year DO UPDATE \
             SET areas = EXCLUDED.areas \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CoScholasticAreas>(&query)
            .bind(&input.class_name)
            .bind(&input.academic_year)
            .bind(Json(&input.areas))
            .fetch_one(pool)
            .await
    }
}
