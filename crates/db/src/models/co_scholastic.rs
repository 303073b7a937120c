//! Co-scholastic area models and DTOs.

use serde::{Deserialize, Serialize};
use skyview_core::co_scholastic::{normalize_areas, CoScholasticArea};
use skyview_core::error::CoreError;
use skyview_core::types::{DbId, Timestamp};
use skyview_core::validation::require_non_blank;
use sqlx::types::Json;
use sqlx::FromRow;

/// A `co_scholastic_areas` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CoScholasticAreas {
    pub id: DbId,
    pub class_name: String,
    pub academic_year: String,
    pub areas: Json<Vec<CoScholasticArea>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for saving the areas of a class. Replaces the whole list.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveCoScholasticAreas {
    pub class_name: String,
    pub academic_year: String,
    #[serde(default)]
    pub areas: Vec<CoScholasticArea>,
}

impl SaveCoScholasticAreas {
    /// Trim and check the request; returns it with normalized areas.
    pub fn normalized(self) -> Result<Self, CoreError> {
        require_non_blank(&self.class_name, "class_name")?;
        require_non_blank(&self.academic_year, "academic_year")?;
        Ok(Self {
            class_name: self.class_name.trim().to_string(),
            academic_year: self.academic_year.trim().to_string(),
            areas: normalize_areas(self.areas)?,
        })
    }
}
