//! Exam configuration entries and their validation.
//!
//! An exam configuration is the per (class, section, academic year) list of
//! exam types with their written / oral ceilings. Saving a configuration
//! replaces the whole list, so validation always sees the complete list.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::exam::{validate_ceiling_value, Ceiling, ExamType, DEFAULT_CEILING};

/// One exam type with its ceilings, as stored in a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamTypeEntry {
    pub exam_type: ExamType,
    #[serde(default = "default_max_marks_written")]
    pub max_marks_written: i32,
    #[serde(default = "default_max_marks_oral")]
    pub max_marks_oral: i32,
}

impl ExamTypeEntry {
    pub fn ceiling(&self) -> Ceiling {
        Ceiling {
            max_marks_written: self.max_marks_written,
            max_marks_oral: self.max_marks_oral,
        }
    }
}

fn default_max_marks_written() -> i32 {
    DEFAULT_CEILING.max_marks_written
}

fn default_max_marks_oral() -> i32 {
    DEFAULT_CEILING.max_marks_oral
}

/// Ceilings for one exam type in the mapping form of an upsert request.
///
/// Absent fields fall back to [`DEFAULT_CEILING`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CeilingInput {
    pub max_marks_written: Option<i32>,
    pub max_marks_oral: Option<i32>,
}

/// The configuration used when a class has none saved: all four exam types
/// at the default ceilings.
pub fn default_exam_entries() -> Vec<ExamTypeEntry> {
    ExamType::ALL
        .into_iter()
        .map(|exam_type| ExamTypeEntry {
            exam_type,
            max_marks_written: DEFAULT_CEILING.max_marks_written,
            max_marks_oral: DEFAULT_CEILING.max_marks_oral,
        })
        .collect()
}

/// Convert the `examType -> ceilings` mapping into an entry list.
///
/// The map is keyed by [`ExamType`], so the result is already in canonical
/// order and cannot contain duplicates.
pub fn entries_from_mapping(config: &BTreeMap<ExamType, CeilingInput>) -> Vec<ExamTypeEntry> {
    config
        .iter()
        .map(|(&exam_type, input)| ExamTypeEntry {
            exam_type,
            max_marks_written: input
                .max_marks_written
                .unwrap_or(DEFAULT_CEILING.max_marks_written),
            max_marks_oral: input.max_marks_oral.unwrap_or(DEFAULT_CEILING.max_marks_oral),
        })
        .collect()
}

/// Validate a full entry list: distinct exam types, non-negative ceilings.
pub fn validate_exam_entries(entries: &[ExamTypeEntry]) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for (i, entry) in entries.iter().enumerate() {
        if !seen.insert(entry.exam_type) {
            return Err(CoreError::Validation(format!(
                "exam_configs[{i}].exam_type: duplicate exam type '{}'",
                entry.exam_type
            )));
        }
        validate_ceiling_value(
            entry.max_marks_written,
            &format!("exam_configs[{i}].max_marks_written"),
        )?;
        validate_ceiling_value(
            entry.max_marks_oral,
            &format!("exam_configs[{i}].max_marks_oral"),
        )?;
    }
    Ok(())
}

/// Validate, then sort into canonical exam order.
///
/// Stored lists are always canonical so an upsert followed by a get returns
/// the same list regardless of the order the caller sent.
pub fn normalize_exam_entries(
    mut entries: Vec<ExamTypeEntry>,
) -> Result<Vec<ExamTypeEntry>, CoreError> {
    validate_exam_entries(&entries)?;
    entries.sort_by_key(|e| e.exam_type);
    Ok(entries)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
