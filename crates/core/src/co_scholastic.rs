//! Co-scholastic assessment areas configured per class and academic year.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One assessed area, e.g. "Discipline".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoScholasticArea {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Trim names and descriptions, then check names are non-blank and unique.
///
/// Uniqueness is case-insensitive ("Art" and "art" collide). Blank
/// descriptions become `None`.
pub fn normalize_areas(areas: Vec<CoScholasticArea>) -> Result<Vec<CoScholasticArea>, CoreError> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::with_capacity(areas.len());

    for (i, area) in areas.into_iter().enumerate() {
        let name = area.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Validation(format!("areas[{i}].name is required")));
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(CoreError::Validation(format!(
                "areas[{i}].name: duplicate area '{name}'"
            )));
        }
        let description = area
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        normalized.push(CoScholasticArea { name, description });
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(name: &str, description: Option<&str>) -> CoScholasticArea {
        CoScholasticArea {
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn trims_and_keeps_order() {
        let areas = normalize_areas(vec![
            area("  Discipline ", Some(" Behaviour in class ")),
            area("Cleanliness", Some("   ")),
        ])
        .unwrap();
        assert_eq!(
            areas,
            vec![
                area("Discipline", Some("Behaviour in class")),
                area("Cleanliness", None),
            ]
        );
    }

    #[test]
    fn blank_name_rejected() {
        let err = normalize_areas(vec![area("Art", None), area(" ", None)]).unwrap_err();
        assert!(err.to_string().contains("areas[1].name is required"));
    }

    #[test]
    fn duplicate_name_rejected_case_insensitively() {
        let err = normalize_areas(vec![area("Art Education", None), area("art education ", None)])
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("duplicate area"));
    }
}
