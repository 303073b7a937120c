//! Grade computation over stored marks.
//!
//! Everything here is a pure function of the subject marks passed in.
//! Results are recomputed on every read; no stored grade is ever used as
//! an input.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::exam::ExamType;
use crate::marks::SubjectMarks;

/// Overall percentage at or above which a student passes.
pub const PASS_PERCENTAGE: f64 = 33.0;

// ---------------------------------------------------------------------------
// Grade bands
// ---------------------------------------------------------------------------

/// Letter grade, ordered from lowest (`E`) to highest (`A1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    E,
    D,
    C2,
    C1,
    B2,
    B1,
    A2,
    A1,
}

/// Inclusive lower bounds, highest band first.
const GRADE_BANDS: &[(f64, Grade)] = &[
    (91.0, Grade::A1),
    (81.0, Grade::A2),
    (71.0, Grade::B1),
    (61.0, Grade::B2),
    (51.0, Grade::C1),
    (41.0, Grade::C2),
    (33.0, Grade::D),
];

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A1 => "A1",
            Grade::A2 => "A2",
            Grade::B1 => "B1",
            Grade::B2 => "B2",
            Grade::C1 => "C1",
            Grade::C2 => "C2",
            Grade::D => "D",
            Grade::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a percentage to its grade band. Anything below 33 (including NaN)
/// is `E`.
pub fn grade(percentage: f64) -> Grade {
    GRADE_BANDS
        .iter()
        .find(|(lower, _)| percentage >= *lower)
        .map(|&(_, g)| g)
        .unwrap_or(Grade::E)
}

/// Pass / fail classification of the overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "NEEDS IMPROVEMENT")]
    NeedsImprovement,
}

impl ResultStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= PASS_PERCENTAGE {
            ResultStatus::Pass
        } else {
            ResultStatus::NeedsImprovement
        }
    }
}

// ---------------------------------------------------------------------------
// Per-exam computations
// ---------------------------------------------------------------------------

/// Sum of written + oral over subjects that recorded `exam_type`.
pub fn exam_total(marks: &[SubjectMarks], exam_type: ExamType) -> f64 {
    marks
        .iter()
        .filter_map(|s| s.score(exam_type))
        .map(|score| score.obtained())
        .sum()
}

/// Total as a percentage of the summed ceilings for `exam_type`.
///
/// Returns 0 when no subject recorded the exam or all its ceilings are 0.
pub fn exam_percentage(marks: &[SubjectMarks], exam_type: ExamType) -> f64 {
    let (obtained, max) = marks
        .iter()
        .filter_map(|s| s.score(exam_type))
        .fold((0.0, 0i64), |(obtained, max), score| {
            (
                obtained + score.obtained(),
                max + score.ceiling().total(),
            )
        });

    if max > 0 {
        obtained / max as f64 * 100.0
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Overall result
// ---------------------------------------------------------------------------

/// Result for one exam type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    pub total: f64,
    pub percentage: f64,
    pub grade: Grade,
}

/// Mean over the included exam types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallSummary {
    pub percentage: f64,
    pub grade: Grade,
    pub result: ResultStatus,
}

impl Default for OverallSummary {
    fn default() -> Self {
        Self {
            percentage: 0.0,
            grade: Grade::E,
            result: ResultStatus::NeedsImprovement,
        }
    }
}

/// Exam-wise breakdown plus the overall summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallResult {
    pub exam_wise: BTreeMap<ExamType, ExamResult>,
    pub overall: OverallSummary,
}

/// Compute the full result for a student's marks.
///
/// Exam types whose percentage is 0 are left out of `exam_wise` and of the
/// mean. With nothing left, the summary is `0 / E / NEEDS IMPROVEMENT`.
pub fn overall_result(marks: &[SubjectMarks]) -> OverallResult {
    let exam_wise: BTreeMap<ExamType, ExamResult> = ExamType::ALL
        .into_iter()
        .filter_map(|exam_type| {
            let percentage = exam_percentage(marks, exam_type);
            (percentage > 0.0).then(|| {
                (
                    exam_type,
                    ExamResult {
                        total: exam_total(marks, exam_type),
                        percentage,
                        grade: grade(percentage),
                    },
                )
            })
        })
        .collect();

    let overall = if exam_wise.is_empty() {
        OverallSummary::default()
    } else {
        let percentage =
            exam_wise.values().map(|r| r.percentage).sum::<f64>() / exam_wise.len() as f64;
        OverallSummary {
            percentage,
            grade: grade(percentage),
            result: ResultStatus::from_percentage(percentage),
        }
    };

    OverallResult { exam_wise, overall }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
