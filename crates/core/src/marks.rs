//! Marks document types and the score-bound invariants.
//!
//! A marks document is everything stored for one student in one academic
//! year: an identity snapshot, per-subject scores, co-scholastic ratings,
//! attendance, remarks and rank. [`MarksDocument::validate`] is the single
//! gate every create and update goes through.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::exam::{validate_ceiling_value, Ceiling, ExamType, DEFAULT_CEILING};

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Written and oral score for one subject in one exam, with the ceilings
/// that applied when the score was entered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExamScore {
    #[serde(default)]
    pub written: f64,
    #[serde(default)]
    pub oral: f64,
    #[serde(default = "default_max_marks_written")]
    pub max_marks_written: i32,
    #[serde(default = "default_max_marks_oral")]
    pub max_marks_oral: i32,
}

fn default_max_marks_written() -> i32 {
    DEFAULT_CEILING.max_marks_written
}

fn default_max_marks_oral() -> i32 {
    DEFAULT_CEILING.max_marks_oral
}

impl ExamScore {
    /// A score entered against the default ceilings.
    pub fn new(written: f64, oral: f64) -> Self {
        Self::with_ceiling(written, oral, DEFAULT_CEILING)
    }

    pub fn with_ceiling(written: f64, oral: f64, ceiling: Ceiling) -> Self {
        Self {
            written,
            oral,
            max_marks_written: ceiling.max_marks_written,
            max_marks_oral: ceiling.max_marks_oral,
        }
    }

    pub fn ceiling(&self) -> Ceiling {
        Ceiling {
            max_marks_written: self.max_marks_written,
            max_marks_oral: self.max_marks_oral,
        }
    }

    pub fn obtained(&self) -> f64 {
        self.written + self.oral
    }

    fn validate(&self, path: &str) -> Result<(), CoreError> {
        validate_ceiling_value(self.max_marks_written, &format!("{path}.max_marks_written"))?;
        validate_ceiling_value(self.max_marks_oral, &format!("{path}.max_marks_oral"))?;
        validate_score(self.written, self.max_marks_written, &format!("{path}.written"))?;
        validate_score(self.oral, self.max_marks_oral, &format!("{path}.oral"))?;
        Ok(())
    }
}

/// Check `0 <= value <= ceiling`.
///
/// Exactly zero is accepted whatever the ceiling: it marks a score that has
/// not been entered yet.
pub fn validate_score(value: f64, ceiling: i32, field: &str) -> Result<(), CoreError> {
    if value == 0.0 {
        return Ok(());
    }
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    if value > f64::from(ceiling) {
        return Err(CoreError::Validation(format!(
            "{field} ({value}) exceeds maximum allowed marks ({ceiling})"
        )));
    }
    Ok(())
}

/// Scores for one subject. `None` in a slot means the exam has not been
/// recorded for this subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectMarks {
    pub subject: String,
    #[serde(default)]
    pub pt1: Option<ExamScore>,
    #[serde(default)]
    pub hy: Option<ExamScore>,
    #[serde(default)]
    pub pt2: Option<ExamScore>,
    #[serde(default, rename = "final")]
    pub final_exam: Option<ExamScore>,
}

impl SubjectMarks {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            pt1: None,
            hy: None,
            pt2: None,
            final_exam: None,
        }
    }

    /// Builder-style setter for one exam slot.
    pub fn with_score(mut self, exam_type: ExamType, score: ExamScore) -> Self {
        *self.slot_mut(exam_type) = Some(score);
        self
    }

    pub fn score(&self, exam_type: ExamType) -> Option<&ExamScore> {
        match exam_type {
            ExamType::Pt1 => self.pt1.as_ref(),
            ExamType::Hy => self.hy.as_ref(),
            ExamType::Pt2 => self.pt2.as_ref(),
            ExamType::Final => self.final_exam.as_ref(),
        }
    }

    fn slot_mut(&mut self, exam_type: ExamType) -> &mut Option<ExamScore> {
        match exam_type {
            ExamType::Pt1 => &mut self.pt1,
            ExamType::Hy => &mut self.hy,
            ExamType::Pt2 => &mut self.pt2,
            ExamType::Final => &mut self.final_exam,
        }
    }
}

// ---------------------------------------------------------------------------
// Identity, co-scholastic, attendance
// ---------------------------------------------------------------------------

/// Student identity captured when the marks document is written.
///
/// This is a snapshot; later edits to the student are not reflected here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StudentIdentity {
    #[validate(custom(function = "not_blank"))]
    pub admission_no: String,
    #[validate(custom(function = "not_blank"))]
    pub student_name: String,
    #[validate(custom(function = "not_blank"))]
    pub father_name: String,
    #[validate(custom(function = "not_blank"))]
    pub class_name: String,
    #[validate(custom(function = "not_blank"))]
    pub section: String,
    #[validate(custom(function = "not_blank"))]
    pub roll_no: String,
}

impl StudentIdentity {
    /// Strip surrounding whitespace so "5 " and "5" address the same class.
    pub fn trimmed(self) -> Self {
        Self {
            admission_no: self.admission_no.trim().to_string(),
            student_name: self.student_name.trim().to_string(),
            father_name: self.father_name.trim().to_string(),
            class_name: self.class_name.trim().to_string(),
            section: self.section.trim().to_string(),
            roll_no: self.roll_no.trim().to_string(),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("is required".into());
        return Err(err);
    }
    Ok(())
}

/// Free-text co-scholastic ratings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoScholastic {
    pub art_education: Option<String>,
    pub moral_education: Option<String>,
    pub cursive: Option<String>,
    pub responsibility: Option<String>,
    pub cleanliness: Option<String>,
    pub punctuality: Option<String>,
    pub discipline: Option<String>,
    pub participation_in_cca: Option<String>,
    pub communication: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    #[serde(default)]
    pub total_days: i32,
    #[serde(default)]
    pub days_present: i32,
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// The mutable body of a marks record.
///
/// Creates and full updates both carry a complete document; there is no
/// partial merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarksDocument {
    #[serde(flatten)]
    pub identity: StudentIdentity,
    #[serde(default)]
    pub marks: Vec<SubjectMarks>,
    #[serde(default)]
    pub co_scholastic: CoScholastic,
    #[serde(default)]
    pub attendance: Attendance,
    #[serde(default)]
    pub teacher_remarks: Option<String>,
    #[serde(default)]
    pub rank: Option<i32>,
}

impl MarksDocument {
    /// Check identity fields, subject names, score bounds and attendance.
    ///
    /// The error message names the first offending field path, e.g.
    /// `marks[1].hy.written`.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.identity
            .validate()
            .map_err(|errors| CoreError::Validation(describe_validation_errors(&errors)))?;
        validate_subject_marks(&self.marks)?;
        validate_attendance(&self.attendance)
    }
}

/// Validate every score slot of every subject.
pub fn validate_subject_marks(marks: &[SubjectMarks]) -> Result<(), CoreError> {
    for (i, subject) in marks.iter().enumerate() {
        if subject.subject.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "marks[{i}].subject is required"
            )));
        }
        for exam_type in ExamType::ALL {
            if let Some(score) = subject.score(exam_type) {
                score.validate(&format!("marks[{i}].{exam_type}"))?;
            }
        }
    }
    Ok(())
}

fn validate_attendance(attendance: &Attendance) -> Result<(), CoreError> {
    if attendance.total_days < 0 {
        return Err(CoreError::Validation(format!(
            "attendance.total_days must be non-negative, got {}",
            attendance.total_days
        )));
    }
    if attendance.days_present < 0 {
        return Err(CoreError::Validation(format!(
            "attendance.days_present must be non-negative, got {}",
            attendance.days_present
        )));
    }
    Ok(())
}

/// Flatten `validator` errors into one line, fields in sorted order.
fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field} {message}")
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
