//! Exam types and the default mark ceilings.
//!
//! The four assessment windows of an academic year and the single
//! definition of the 80 / 20 fallback ceilings. Both the exam-configuration
//! fallback and the per-score defaulting read [`DEFAULT_CEILING`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Default ceilings
// ---------------------------------------------------------------------------

/// Maximum written marks when nothing else is configured.
pub const DEFAULT_MAX_MARKS_WRITTEN: i32 = 80;

/// Maximum oral marks when nothing else is configured.
pub const DEFAULT_MAX_MARKS_ORAL: i32 = 20;

/// Written / oral ceiling pair for one subject and exam type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ceiling {
    pub max_marks_written: i32,
    pub max_marks_oral: i32,
}

impl Ceiling {
    /// Sum of both ceilings, widened so large configured ceilings cannot
    /// overflow.
    pub fn total(&self) -> i64 {
        i64::from(self.max_marks_written) + i64::from(self.max_marks_oral)
    }
}

/// The 80 / 20 ceiling pair.
pub const DEFAULT_CEILING: Ceiling = Ceiling {
    max_marks_written: DEFAULT_MAX_MARKS_WRITTEN,
    max_marks_oral: DEFAULT_MAX_MARKS_ORAL,
};

impl Default for Ceiling {
    fn default() -> Self {
        DEFAULT_CEILING
    }
}

/// Reject a negative ceiling, naming the offending field.
pub fn validate_ceiling_value(value: i32, field: &str) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Exam type
// ---------------------------------------------------------------------------

/// One of the four periodic assessment windows.
///
/// The declaration order is the canonical order used everywhere a list of
/// exam types is produced (`Ord` follows it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamType {
    Pt1,
    Hy,
    Pt2,
    Final,
}

impl ExamType {
    /// All exam types in canonical order.
    pub const ALL: [ExamType; 4] = [ExamType::Pt1, ExamType::Hy, ExamType::Pt2, ExamType::Final];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Pt1 => "pt1",
            ExamType::Hy => "hy",
            ExamType::Pt2 => "pt2",
            ExamType::Final => "final",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExamType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown exam type: '{s}'. Valid types: pt1, hy, pt2, final"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
