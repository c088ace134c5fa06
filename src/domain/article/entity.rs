// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleStatus, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: Option<ArticleBody>,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub body: Option<ArticleBody>,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    /// Validates every field and gathers all violations before failing, so a
    /// caller sees the complete list of messages in title, body, status order.
    pub fn validate(
        title: Option<String>,
        body: Option<String>,
        status: Option<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let mut messages = Vec::new();

        let title = collect(ArticleTitle::new(title), &mut messages);
        let body = collect(ArticleBody::new(body), &mut messages);
        let status = collect(ArticleStatus::parse(status.as_deref()), &mut messages);

        match (title, body, status) {
            (Some(title), Some(body), Some(status)) => Ok(Self {
                title,
                body,
                status,
                created_at: now,
                updated_at: now,
            }),
            _ => Err(DomainError::ValidationFailed(messages)),
        }
    }
}

fn collect<T>(result: DomainResult<T>, messages: &mut Vec<String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(DomainError::ValidationFailed(mut found)) => {
            messages.append(&mut found);
            None
        }
        Err(other) => {
            messages.push(other.to_string());
            None
        }
    }
}
