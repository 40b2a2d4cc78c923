use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Title
// ---------------------------------------------------------------------------

/// DynamoDB rejects partition key values larger than this.
const MAX_TITLE_BYTES: usize = 2048;

/// A validated announcement title: non-empty, at most 2048 bytes.
///
/// The title doubles as the table's partition key, so two announcements with
/// the same title are the same record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Create a new `Title` after validation.
    pub fn new(s: impl Into<String>) -> Result<Self, TitleError> {
        let s = s.into();

        if s.is_empty() {
            return Err(TitleError::Empty);
        }

        if s.len() > MAX_TITLE_BYTES {
            return Err(TitleError::TooLong(s.len()));
        }

        Ok(Self(s))
    }
}

impl TryFrom<String> for Title {
    type Error = TitleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur when validating a title.
#[derive(Debug, Clone, Error)]
pub enum TitleError {
    #[error("title must not be empty")]
    Empty,

    #[error("title length {0} bytes exceeds maximum of {MAX_TITLE_BYTES}")]
    TooLong(usize),
}

// ---------------------------------------------------------------------------
// Announcement
// ---------------------------------------------------------------------------

/// An announcement as posted by clients and stored in DynamoDB.
///
/// Wire and attribute names carry the `a` prefix used by the table schema.
/// Fields not listed here are dropped on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Unique identifier and partition key.
    #[serde(rename = "atitle")]
    pub title: Title,

    #[serde(rename = "adescription", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form; not parsed.
    #[serde(rename = "adate", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(rename = "astatus", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Announcement {
    /// An announcement carrying only a title.
    pub fn new(title: Title) -> Self {
        Self {
            title,
            description: None,
            date: None,
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Title tests --

    #[test]
    fn valid_titles() {
        assert!(Title::new("Launch").is_ok());
        assert!(Title::new("a").is_ok());
        assert!(Title::new("Quarterly maintenance window: 2 hours").is_ok());
        assert!(Title::new("x".repeat(MAX_TITLE_BYTES)).is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(Title::new(""), Err(TitleError::Empty)));
    }

    #[test]
    fn rejects_too_long() {
        let long = "x".repeat(MAX_TITLE_BYTES + 1);
        assert!(matches!(Title::new(long), Err(TitleError::TooLong(2049))));
    }

    #[test]
    fn length_is_measured_in_bytes() {
        // 'é' is two bytes in UTF-8
        let title = "é".repeat(1025);
        assert!(matches!(Title::new(title), Err(TitleError::TooLong(2050))));
    }

    #[test]
    fn display_and_as_ref() {
        let title = Title::new("Launch").unwrap();
        assert_eq!(title.to_string(), "Launch");
        assert_eq!(title.as_ref(), "Launch");
    }

    // -- Announcement serde tests --

    #[test]
    fn deserialize_full_payload() {
        let a: Announcement = serde_json::from_str(
            r#"{"atitle":"Launch","adescription":"v1 release","adate":"2024-01-01","astatus":"draft"}"#,
        )
        .unwrap();

        assert_eq!(a.title.as_ref(), "Launch");
        assert_eq!(a.description.as_deref(), Some("v1 release"));
        assert_eq!(a.date.as_deref(), Some("2024-01-01"));
        assert_eq!(a.status.as_deref(), Some("draft"));
    }

    #[test]
    fn missing_title_fails() {
        let err = serde_json::from_str::<Announcement>(r#"{"adescription":"missing title"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("atitle"));
    }

    #[test]
    fn empty_title_fails() {
        let err = serde_json::from_str::<Announcement>(r#"{"atitle":""}"#).unwrap_err();
        assert!(err.to_string().contains("title must not be empty"));
    }

    #[test]
    fn non_string_field_fails() {
        assert!(serde_json::from_str::<Announcement>(r#"{"atitle":"x","astatus":3}"#).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let a: Announcement =
            serde_json::from_str(r#"{"atitle":"Launch","priority":"high"}"#).unwrap();
        assert_eq!(a, Announcement::new(Title::new("Launch").unwrap()));
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let mut a = Announcement::new(Title::new("Launch").unwrap());
        a.description = Some("v1 release".into());

        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"atitle":"Launch","adescription":"v1 release"}"#);
    }
}
