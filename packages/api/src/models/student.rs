//! # Student records and the responses that carry them
//!
//! ## [`Student`]
//!
//! One record as returned by the service. `id`, `created_at` and `updated_at` are
//! assigned by the server and never sent back by the client. Timestamps arrive as
//! naive ISO-8601 strings (`2024-05-01T10:20:30.123456`) and are parsed into
//! [`NaiveDateTime`].
//!
//! ## [`NewStudent`]
//!
//! The request body for create and update: `{name, age, email}`.
//!
//! ## [`StudentPage`]
//!
//! One page of the list endpoint. The backend also echoes `page` and `per_page`;
//! both are optional here so older servers that omit them still decode.
//!
//! ## [`SummaryResponse`]
//!
//! The generated summary plus the metadata the backend attaches (`source` is
//! `"cache"` when the server reused an earlier generation).

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("valid email regex"));

/// Accepted age range, inclusive.
pub const AGE_RANGE: std::ops::RangeInclusive<i64> = 5..=120;

/// Accepted name length in characters after trimming, inclusive.
pub const NAME_LENGTH: std::ops::RangeInclusive<usize> = 2..=100;

/// Whether the service would accept this name.
pub fn is_valid_name(name: &str) -> bool {
    NAME_LENGTH.contains(&name.trim().chars().count())
}

/// Whether the service would accept this age.
pub fn is_valid_age(age: i64) -> bool {
    AGE_RANGE.contains(&age)
}

/// Whether the service would accept this email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Identifier assigned to a student by the service.
pub type StudentId = u64;

/// A student record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: u32,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Student {
    /// Timestamp rendered for display, e.g. `2024-05-01 10:20`.
    pub fn created_display(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Timestamp rendered for display, e.g. `2024-05-01 10:20`.
    pub fn updated_display(&self) -> String {
        self.updated_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Request body for creating or updating a student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub age: u32,
    pub email: String,
}

impl NewStudent {
    /// Messages for every field the service would reject, in field order.
    pub fn problems(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !is_valid_name(&self.name) {
            errors.push("Name must be between 2 and 100 characters".to_string());
        }
        if !is_valid_age(i64::from(self.age)) {
            errors.push("Age must be between 5 and 120".to_string());
        }
        if !is_valid_email(&self.email) {
            errors.push("Invalid email format".to_string());
        }
        errors
    }
}

/// One page of students.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StudentPage {
    pub students: Vec<Student>,
    pub total: u64,
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl StudentPage {
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Response of the summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryResponse {
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,
    /// `"cache"` or the generator that produced the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

impl SummaryResponse {
    /// A bare response carrying only the summary text.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            student_id: None,
            source: None,
            model: None,
            generated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_rules() {
        assert!(is_valid_name("Al"));
        assert!(!is_valid_name(" A "));
        assert!(!is_valid_name(&"x".repeat(101)));
        assert!(is_valid_age(5) && is_valid_age(120));
        assert!(!is_valid_age(4) && !is_valid_age(121));
        assert!(is_valid_email("first.last@uni-x.edu"));
        assert!(!is_valid_email("no-at-sign.edu"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_problems_in_field_order() {
        let data = NewStudent {
            name: "A".into(),
            age: 200,
            email: "nope".into(),
        };
        assert_eq!(
            data.problems(),
            vec![
                "Name must be between 2 and 100 characters",
                "Age must be between 5 and 120",
                "Invalid email format",
            ]
        );
    }

    #[test]
    fn test_decode_backend_page() {
        let body = r#"{
            "students": [{
                "id": 1,
                "name": "Ada",
                "age": 21,
                "email": "ada@example.com",
                "created_at": "2024-05-01T10:20:30.123456",
                "updated_at": "2024-05-01T10:20:30.123456"
            }],
            "total": 11,
            "page": 2,
            "per_page": 10,
            "total_pages": 2
        }"#;
        let page: StudentPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.students.len(), 1);
        assert_eq!(page.total, 11);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, Some(2));
        assert_eq!(page.students[0].created_display(), "2024-05-01 10:20");
    }

    #[test]
    fn test_decode_page_without_echo_fields() {
        let page: StudentPage =
            serde_json::from_str(r#"{"students": [], "total": 0, "total_pages": 0}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.per_page, None);
    }

    #[test]
    fn test_decode_summary_with_metadata() {
        let body = r#"{
            "student_id": 4,
            "summary": "1. Bright 2. Curious",
            "source": "cache",
            "generated_at": "2024-05-01T10:20:30"
        }"#;
        let response: SummaryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.summary, "1. Bright 2. Curious");
        assert_eq!(response.student_id, Some(4));
        assert_eq!(response.source.as_deref(), Some("cache"));
        assert_eq!(response.model, None);
    }
}
