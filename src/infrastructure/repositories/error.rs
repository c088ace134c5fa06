// src/infrastructure/repositories/error.rs
use crate::domain::article::value_objects::{
    body_too_long_message, invalid_status_message, title_too_long_message,
    title_too_short_message,
};
use crate::domain::errors::DomainError;

const CNT_ARTICLE_STATUS: &str = "articles_status_check";
const CNT_ARTICLE_TITLE_MIN_LENGTH: &str = "articles_title_min_length_check";
const CNT_ARTICLE_TITLE_MAX_LENGTH: &str = "articles_title_max_length_check";
const CNT_ARTICLE_BODY_LENGTH: &str = "articles_body_length_check";

/// Maps storage errors for a write whose status was `status`. Check
/// constraints mirror the domain rules and report the same messages.
pub fn map_write_sqlx(err: sqlx::Error, status: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        let message = match db_err.constraint() {
            Some(CNT_ARTICLE_STATUS) => Some(invalid_status_message(status)),
            Some(CNT_ARTICLE_TITLE_MIN_LENGTH) => Some(title_too_short_message()),
            Some(CNT_ARTICLE_TITLE_MAX_LENGTH) => Some(title_too_long_message()),
            Some(CNT_ARTICLE_BODY_LENGTH) => Some(body_too_long_message()),
            _ => None,
        };
        if let Some(message) = message {
            return DomainError::ValidationFailed(vec![message]);
        }
    }

    map_sqlx(err)
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return DomainError::Persistence(format!(
                    "database constraint violation: {constraint}"
                ));
            }

            if db_err.code().as_deref() == Some("23514") {
                return DomainError::ValidationFailed(vec!["check constraint violated".into()]);
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_persistence_failures() {
        let err = map_write_sqlx(sqlx::Error::RowNotFound, "draft");
        assert!(matches!(err, DomainError::Persistence(_)));
    }

    #[test]
    fn constraint_messages_match_validation_messages() {
        assert_eq!(title_too_short_message(), "Title must be at least 3 characters");
        assert_eq!(title_too_long_message(), "Title cannot be longer than 100 characters");
        assert_eq!(body_too_long_message(), "Body cannot be longer than 1000 characters");
        assert_eq!(
            invalid_status_message("hidden"),
            "hidden is not a valid status, status must be one of: 'draft', 'published', 'archived'"
        );
    }
}
