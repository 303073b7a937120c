//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped in the repository layer via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Optional `?academic_year=` filter.
#[derive(Debug, Deserialize)]
pub struct AcademicYearParams {
    pub academic_year: Option<String>,
}

impl AcademicYearParams {
    /// The filter value, treating a blank parameter as absent.
    pub fn year(&self) -> Option<&str> {
        self.academic_year
            .as_deref()
            .map(str::trim)
            .filter(|y| !y.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_year_is_no_filter() {
        let params = AcademicYearParams {
            academic_year: Some("  ".to_string()),
        };
        assert_eq!(params.year(), None);

        let params = AcademicYearParams {
            academic_year: Some("2024-2025".to_string()),
        };
        assert_eq!(params.year(), Some("2024-2025"));
    }
}
