//! Exam configuration models and DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use skyview_core::error::CoreError;
use skyview_core::exam::ExamType;
use skyview_core::exam_config::{
    default_exam_entries, entries_from_mapping, normalize_exam_entries, CeilingInput,
    ExamTypeEntry,
};
use skyview_core::types::{DbId, Timestamp};
use skyview_core::validation::require_non_blank;
use sqlx::types::Json;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// An `exam_configs` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExamConfig {
    pub id: DbId,
    pub class_name: String,
    pub section: String,
    pub academic_year: String,
    pub exam_configs: Json<Vec<ExamTypeEntry>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Upsert
// ---------------------------------------------------------------------------

/// Validated input for [`ExamConfigRepo::upsert`](crate::repositories::ExamConfigRepo::upsert).
///
/// `exam_configs` is already checked and in canonical order.
#[derive(Debug, Clone)]
pub struct UpsertExamConfig {
    pub class_name: String,
    pub section: String,
    pub academic_year: String,
    pub exam_configs: Vec<ExamTypeEntry>,
}

/// Request body for saving a configuration.
///
/// Exactly one of `config` (mapping form) or `exam_configs` (list form)
/// must be present.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveExamConfig {
    #[serde(alias = "class")]
    pub class_name: String,
    pub section: String,
    pub academic_year: String,
    #[serde(default)]
    pub config: Option<BTreeMap<ExamType, CeilingInput>>,
    #[serde(default)]
    pub exam_configs: Option<Vec<ExamTypeEntry>>,
}

impl SaveExamConfig {
    /// Validate the request and convert it into the stored entry list.
    pub fn into_upsert(self) -> Result<UpsertExamConfig, CoreError> {
        require_non_blank(&self.class_name, "class_name")?;
        require_non_blank(&self.section, "section")?;
        require_non_blank(&self.academic_year, "academic_year")?;

        let entries = match (self.config, self.exam_configs) {
            (Some(config), None) => entries_from_mapping(&config),
            (None, Some(list)) => list,
            (Some(_), Some(_)) => {
                return Err(CoreError::Validation(
                    "provide either config or exam_configs, not both".to_string(),
                ))
            }
            (None, None) => {
                return Err(CoreError::Validation(
                    "config is required".to_string(),
                ))
            }
        };

        Ok(UpsertExamConfig {
            class_name: self.class_name.trim().to_string(),
            section: self.section.trim().to_string(),
            academic_year: self.academic_year.trim().to_string(),
            exam_configs: normalize_exam_entries(entries)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// A configuration as returned by the get endpoint.
///
/// When nothing is stored for the key, `is_default` is set and the entries
/// are the default four exam types.
#[derive(Debug, Clone, Serialize)]
pub struct ExamConfigView {
    pub id: Option<DbId>,
    pub class_name: String,
    pub section: String,
    pub academic_year: String,
    pub exam_configs: Vec<ExamTypeEntry>,
    pub is_default: bool,
    pub updated_at: Option<Timestamp>,
}

impl ExamConfigView {
    pub fn default_for(class_name: &str, section: &str, academic_year: &str) -> Self {
        Self {
            id: None,
            class_name: class_name.to_string(),
            section: section.to_string(),
            academic_year: academic_year.to_string(),
            exam_configs: default_exam_entries(),
            is_default: true,
            updated_at: None,
        }
    }
}

impl From<ExamConfig> for ExamConfigView {
    fn from(row: ExamConfig) -> Self {
        Self {
            id: Some(row.id),
            class_name: row.class_name,
            section: row.section,
            academic_year: row.academic_year,
            exam_configs: row.exam_configs.0,
            is_default: false,
            updated_at: Some(row.updated_at),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
