use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::timefmt;

/// A stored unit of source code with descriptive metadata.
///
/// `id` and `created_at` are assigned by the store at creation time and are
/// immutable afterwards; there is no update or delete anywhere in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub code: String,
    pub language: String,
    pub category: Option<String>,
    #[serde(with = "timefmt")]
    pub created_at: jiff::Timestamp,
}

/// Creation payload for a snippet.
///
/// Required fields default to empty on deserialization so that an absent
/// field and an empty one fail validation the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewSnippet {
    /// Reject payloads with a missing or empty required field.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, value) in [
            ("title", &self.title),
            ("code", &self.code),
            ("language", &self.language),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::MissingField(name.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewSnippet {
        NewSnippet {
            title: "Quicksort".to_string(),
            code: "def quicksort(xs): ...".to_string(),
            language: "python".to_string(),
            category: None,
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn empty_title_rejected() {
        let mut s = valid();
        s.title = "  ".to_string();
        let err = s.validate().unwrap_err();
        assert_eq!(err.to_string(), "missing required field: title");
    }

    #[test]
    fn absent_required_field_fails_validation_after_deserialize() {
        let s: NewSnippet =
            serde_json::from_str(r#"{"code": "c", "language": "rust"}"#).unwrap();
        assert!(s.validate().is_err());
    }

    #[test]
    fn missing_category_deserializes_as_none() {
        let s: NewSnippet = serde_json::from_str(
            r#"{"title": "t", "code": "c", "language": "rust"}"#,
        )
        .unwrap();
        assert_eq!(s.category, None);
    }

    #[test]
    fn snippet_wire_shape() {
        let snippet = Snippet {
            id: 7,
            title: "t".to_string(),
            code: "c".to_string(),
            language: "rust".to_string(),
            category: None,
            created_at: timefmt::parse("2026-08-07 12:34:56").unwrap(),
        };

        let json = serde_json::to_value(&snippet).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["category"], serde_json::Value::Null);
        assert_eq!(json["created_at"], "2026-08-07 12:34:56");

        let back: Snippet = serde_json::from_value(json).unwrap();
        assert_eq!(back, snippet);
    }
}
