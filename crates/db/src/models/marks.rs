//! Marks record models and DTOs.

use serde::{Deserialize, Serialize};
use skyview_core::error::CoreError;
use skyview_core::grading::{overall_result, OverallResult};
use skyview_core::marks::{Attendance, CoScholastic, MarksDocument, SubjectMarks};
use skyview_core::types::{DbId, Timestamp};
use skyview_core::validation::require_non_blank;
use sqlx::types::Json;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A `marks_records` row: one student, one academic year.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MarksRecord {
    pub id: DbId,
    pub student_id: DbId,
    pub academic_year: String,
    pub admission_no: String,
    pub student_name: String,
    pub father_name: String,
    pub class_name: String,
    pub section: String,
    pub roll_no: String,
    pub marks: Json<Vec<SubjectMarks>>,
    pub co_scholastic: Json<CoScholastic>,
    pub attendance: Json<Attendance>,
    pub teacher_remarks: Option<String>,
    pub rank: Option<i32>,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MarksRecord {
    /// Grade the stored marks. Computed fresh on every call.
    pub fn results(&self) -> OverallResult {
        overall_result(&self.marks.0)
    }
}

// ---------------------------------------------------------------------------
// Create / update DTOs
// ---------------------------------------------------------------------------

/// Body of a create request: the key plus a complete document.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMarksRecord {
    pub student_id: DbId,
    pub academic_year: String,
    #[serde(flatten)]
    pub document: MarksDocument,
}

impl CreateMarksRecord {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_blank(&self.academic_year, "academic_year")?;
        self.document.validate()
    }

    /// Validate, then trim the key and identity fields.
    pub fn normalized(self) -> Result<Self, CoreError> {
        self.validate()?;
        Ok(Self {
            student_id: self.student_id,
            academic_year: self.academic_year.trim().to_string(),
            document: trim_identity(self.document),
        })
    }
}

/// Body of a full update. The key comes from the path.
///
/// When `expected_version` is present the write only succeeds if the stored
/// record is still at that version.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMarksRecord {
    #[serde(flatten)]
    pub document: MarksDocument,
    #[serde(default)]
    pub expected_version: Option<i32>,
}

impl UpdateMarksRecord {
    /// Validate, then trim the identity fields.
    pub fn normalized(self) -> Result<Self, CoreError> {
        self.document.validate()?;
        Ok(Self {
            document: trim_identity(self.document),
            expected_version: self.expected_version,
        })
    }
}

fn trim_identity(document: MarksDocument) -> MarksDocument {
    MarksDocument {
        identity: document.identity.trimmed(),
        ..document
    }
}

/// Body of a rank update. `null` clears the rank.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRank {
    pub rank: Option<i32>,
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Graded view of one record, as returned by the results endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct MarksResults {
    pub id: DbId,
    pub student_id: DbId,
    pub academic_year: String,
    pub student_name: String,
    pub class_name: String,
    pub section: String,
    pub roll_no: String,
    pub rank: Option<i32>,
    #[serde(flatten)]
    pub result: OverallResult,
}

impl From<&MarksRecord> for MarksResults {
    fn from(record: &MarksRecord) -> Self {
        Self {
            id: record.id,
            student_id: record.student_id,
            academic_year: record.academic_year.clone(),
            student_name: record.student_name.clone(),
            class_name: record.class_name.clone(),
            section: record.section.clone(),
            roll_no: record.roll_no.clone(),
            rank: record.rank,
            result: record.results(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn create_body() -> serde_json::Value {
        serde_json::json!({
            "student_id": 42,
            "academic_year": "2024-2025",
            "admission_no": "ADM-042",
            "student_name": "Mitali Sen",
            "father_name": "Arup Sen",
            "class_name": "6",
            "section": "B",
            "roll_no": "7",
            "marks": [
                { "subject": "Math", "pt1": { "written": 40, "oral": 8 } }
            ]
        })
    }

    #[test]
    fn create_body_parses_flat_document() {
        let input: CreateMarksRecord = serde_json::from_value(create_body()).unwrap();
        assert_eq!(input.student_id, 42);
        assert_eq!(input.document.identity.roll_no, "7");
        assert_eq!(input.document.marks.len(), 1);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn blank_academic_year_rejected() {
        let mut body = create_body();
        body["academic_year"] = serde_json::json!("");
        let input: CreateMarksRecord = serde_json::from_value(body).unwrap();
        assert!(input.validate().unwrap_err().to_string().contains("academic_year"));
    }

    #[test]
    fn over_ceiling_score_rejected_on_create() {
        let mut body = create_body();
        body["marks"][0]["pt1"]["written"] = serde_json::json!(81);
        let input: CreateMarksRecord = serde_json::from_value(body).unwrap();
        assert!(matches!(input.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn normalized_create_trims_key_and_identity() {
        let mut body = create_body();
        body["academic_year"] = serde_json::json!("2024-2025 ");
        body["class_name"] = serde_json::json!(" 6");
        body["section"] = serde_json::json!("B ");
        let input: CreateMarksRecord = serde_json::from_value(body).unwrap();

        let input = input.normalized().unwrap();
        assert_eq!(input.academic_year, "2024-2025");
        assert_eq!(input.document.identity.class_name, "6");
        assert_eq!(input.document.identity.section, "B");
    }

    #[test]
    fn normalized_update_trims_identity_and_keeps_version() {
        let mut body = create_body();
        body["section"] = serde_json::json!(" B");
        body["expected_version"] = serde_json::json!(2);
        let input: UpdateMarksRecord = serde_json::from_value(body).unwrap();

        let input = input.normalized().unwrap();
        assert_eq!(input.document.identity.section, "B");
        assert_eq!(input.expected_version, Some(2));
    }

    #[test]
    fn update_body_reads_expected_version() {
        let mut body = create_body();
        body["expected_version"] = serde_json::json!(3);
        let input: UpdateMarksRecord = serde_json::from_value(body).unwrap();
        assert_eq!(input.expected_version, Some(3));
        assert_eq!(input.document.identity.student_name, "Mitali Sen");
    }
}
