//! Input validation helpers shared by the request types

use serde::Deserialize;

use crate::domain::entities::Page;
use crate::error::DomainError;

/// Presence check. Absent and `null` wire fields both arrive as `None`.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, DomainError> {
    value.ok_or(DomainError::MissingField(field))
}

/// Like `required`, but also rejects an empty or blank string
pub fn required_text(value: &Option<String>, field: &'static str) -> Result<String, DomainError> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(DomainError::MissingField(field)),
    }
}

/// A numeric wire value. HTML form fields submit strings, so `"7"` is
/// accepted wherever `7` is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntegerInput {
    Number(i64),
    Text(String),
}

impl IntegerInput {
    pub fn to_i32(&self, field: &str) -> Result<i32, DomainError> {
        let parsed = match self {
            IntegerInput::Number(n) => i32::try_from(*n).ok(),
            IntegerInput::Text(s) => s.trim().parse::<i32>().ok(),
        };
        parsed.ok_or_else(|| {
            DomainError::Validation(format!("{} must be an integer, got {}", field, self))
        })
    }

    /// Integer that must not be negative, such as a score
    pub fn to_non_negative(&self, field: &str) -> Result<i32, DomainError> {
        let value = self.to_i32(field)?;
        if value < 0 {
            return Err(DomainError::Validation(format!(
                "{} must not be negative, got {}",
                field, value
            )));
        }
        Ok(value)
    }
}

impl std::fmt::Display for IntegerInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegerInput::Number(n) => write!(f, "{}", n),
            IntegerInput::Text(s) => write!(f, "'{}'", s),
        }
    }
}

/// Convert a list of wire ids, failing on the first bad entry
pub fn id_list(values: &[IntegerInput], field: &str) -> Result<Vec<i32>, DomainError> {
    values.iter().map(|v| v.to_i32(field)).collect()
}

/// Build a page from optional `limit` and `offset`
pub fn page(limit: Option<i64>, offset: Option<i64>) -> Result<Page, DomainError> {
    match (limit, offset) {
        (None, None) => Ok(Page::all()),
        (None, Some(_)) => Err(DomainError::Validation(
            "offset requires a limit".to_string(),
        )),
        (Some(limit), _) if limit < 1 => Err(DomainError::Validation(format!(
            "limit must be at least 1, got {}",
            limit
        ))),
        (Some(_), Some(offset)) if offset < 0 => Err(DomainError::Validation(format!(
            "offset must not be negative, got {}",
            offset
        ))),
        (Some(limit), offset) => Ok(Page {
            limit: Some(limit as u64),
            offset: offset.map(|o| o as u64),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_reports_field() {
        let err = required::<i32>(None, "teamId").unwrap_err();
        assert!(matches!(err, DomainError::MissingField("teamId")));
        assert_eq!(required(Some(3), "teamId").unwrap(), 3);
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let err = required_text(&Some("  ".to_string()), "position").unwrap_err();
        assert!(matches!(err, DomainError::MissingField("position")));
        assert_eq!(
            required_text(&Some(" QB ".to_string()), "position").unwrap(),
            "QB"
        );
    }

    #[test]
    fn integer_input_accepts_numbers_and_numeric_strings() {
        let number: IntegerInput = serde_json::from_str("12").unwrap();
        let text: IntegerInput = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(number.to_i32("teamId").unwrap(), 12);
        assert_eq!(text.to_i32("teamId").unwrap(), 12);
    }

    #[test]
    fn integer_input_rejects_garbage() {
        let text = IntegerInput::Text("twelve".to_string());
        assert!(matches!(
            text.to_i32("teamId"),
            Err(DomainError::Validation(_))
        ));
        let huge = IntegerInput::Number(i64::MAX);
        assert!(huge.to_i32("teamId").is_err());
    }

    #[test]
    fn negative_scores_are_rejected() {
        assert!(IntegerInput::Number(-1).to_non_negative("homeTeamScore").is_err());
        assert_eq!(
            IntegerInput::Number(0).to_non_negative("homeTeamScore").unwrap(),
            0
        );
    }

    #[test]
    fn page_rules() {
        assert_eq!(page(None, None).unwrap(), Page::all());
        assert!(page(None, Some(5)).is_err());
        assert!(page(Some(0), None).is_err());
        assert!(page(Some(5), Some(-1)).is_err());
        assert_eq!(
            page(Some(5), Some(10)).unwrap(),
            Page {
                limit: Some(5),
                offset: Some(10)
            }
        );
    }
}
