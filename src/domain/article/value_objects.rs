use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;
pub const BODY_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::ValidationFailed(vec![
                "article id must be positive".into(),
            ]))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn title_too_short_message() -> String {
    format!("Title must be at least {TITLE_MIN_CHARS} characters")
}

pub fn title_too_long_message() -> String {
    format!("Title cannot be longer than {TITLE_MAX_CHARS} characters")
}

pub fn body_too_long_message() -> String {
    format!("Body cannot be longer than {BODY_MAX_CHARS} characters")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// Validates presence and length. An absent title fails both rules.
    pub fn new(value: Option<String>) -> DomainResult<Self> {
        let mut messages = Vec::new();

        if is_blank(value.as_deref()) {
            messages.push("Title must be present".to_string());
        }

        let len = value.as_deref().map_or(0, char_len);
        if len < TITLE_MIN_CHARS {
            messages.push(title_too_short_message());
        } else if len > TITLE_MAX_CHARS {
            messages.push(title_too_long_message());
        }

        match value {
            Some(value) if messages.is_empty() => Ok(Self(value)),
            _ => Err(DomainError::ValidationFailed(messages)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBody(String);

impl ArticleBody {
    /// Blank bodies are stored as given; only the length is constrained.
    pub fn new(value: Option<String>) -> DomainResult<Option<Self>> {
        if is_blank(value.as_deref()) {
            return Ok(value.map(Self));
        }

        match value {
            Some(value) if char_len(&value) > BODY_MAX_CHARS => {
                Err(DomainError::ValidationFailed(vec![body_too_long_message()]))
            }
            other => Ok(other.map(Self)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    Published,
    Archived,
}

impl ArticleStatus {
    pub const ALL: [Self; 3] = [Self::Draft, Self::Published, Self::Archived];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    /// Validates an incoming status value. A missing or blank status fails
    /// presence and is also reported as not being one of the allowed values.
    pub fn parse(value: Option<&str>) -> DomainResult<Self> {
        if !is_blank(value) {
            return value.unwrap_or_default().parse();
        }

        Err(DomainError::ValidationFailed(vec![
            "Status can't be blank".into(),
            invalid_status_message(value.unwrap_or_default()),
        ]))
    }
}

pub fn invalid_status_message(value: &str) -> String {
    format!("{value} is not a valid status, status must be one of: 'draft', 'published', 'archived'")
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::ValidationFailed(vec![invalid_status_message(s)]))
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(err: DomainError) -> Vec<String> {
        err.messages().to_vec()
    }

    #[test]
    fn title_accepts_value_within_bounds() {
        let title = ArticleTitle::new(Some("ok title".into())).unwrap();
        assert_eq!(title.as_str(), "ok title");
    }

    #[test]
    fn missing_title_reports_presence_and_length() {
        let err = ArticleTitle::new(None).unwrap_err();
        assert_eq!(
            messages(err),
            vec![
                "Title must be present".to_string(),
                "Title must be at least 3 characters".to_string(),
            ]
        );
    }

    #[test]
    fn short_title_reports_length_only() {
        let err = ArticleTitle::new(Some("bb".into())).unwrap_err();
        assert_eq!(
            messages(err),
            vec!["Title must be at least 3 characters".to_string()]
        );
    }

    #[test]
    fn whitespace_title_fails_presence_but_not_length() {
        let err = ArticleTitle::new(Some("   ".into())).unwrap_err();
        assert_eq!(messages(err), vec!["Title must be present".to_string()]);
    }

    #[test]
    fn long_title_is_rejected() {
        let err = ArticleTitle::new(Some("x".repeat(101))).unwrap_err();
        assert_eq!(
            messages(err),
            vec!["Title cannot be longer than 100 characters".to_string()]
        );
        assert!(ArticleTitle::new(Some("x".repeat(100))).is_ok());
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        assert!(ArticleTitle::new(Some("é".repeat(100))).is_ok());
    }

    #[test]
    fn body_is_optional_and_length_limited() {
        assert!(ArticleBody::new(None).unwrap().is_none());
        assert!(ArticleBody::new(Some("x".repeat(1000))).unwrap().is_some());
        let err = ArticleBody::new(Some("x".repeat(1001))).unwrap_err();
        assert_eq!(
            messages(err),
            vec!["Body cannot be longer than 1000 characters".to_string()]
        );
    }

    #[test]
    fn status_parses_known_values() {
        assert_eq!(
            ArticleStatus::parse(Some("published")).unwrap(),
            ArticleStatus::Published
        );
        assert_eq!(ArticleStatus::Archived.to_string(), "archived");
    }

    #[test]
    fn unknown_status_names_the_value() {
        let err = ArticleStatus::parse(Some("pending")).unwrap_err();
        assert_eq!(
            messages(err),
            vec![
                "pending is not a valid status, status must be one of: 'draft', 'published', 'archived'"
                    .to_string()
            ]
        );
    }

    #[test]
    fn blank_status_fails_presence_and_inclusion() {
        let err = ArticleStatus::parse(Some("")).unwrap_err();
        assert_eq!(
            messages(err),
            vec![
                "Status can't be blank".to_string(),
                " is not a valid status, status must be one of: 'draft', 'published', 'archived'"
                    .to_string(),
            ]
        );

        let err = ArticleStatus::parse(None).unwrap_err();
        assert_eq!(messages(err).len(), 2);
    }
}
