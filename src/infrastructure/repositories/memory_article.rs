// src/infrastructure/repositories/memory_article.rs
use crate::domain::article::{
    Article, ArticleId, ArticleListQuery, ArticlePage, ArticleReadRepository,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Store {
    next_id: i64,
    articles: Vec<Article>,
}

/// Process-local article storage. A single instance serves as both the read
/// and write side; clones share the same store.
#[derive(Clone, Default)]
pub struct InMemoryArticleRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> DomainError {
        DomainError::Persistence("article store lock poisoned".into())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut store = self.store.write().map_err(|_| Self::poisoned())?;
        store.next_id += 1;

        let created = Article {
            id: ArticleId::new(store.next_id)?,
            title: article.title,
            body: article.body,
            status: article.status,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        store.articles.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn list(&self, query: &ArticleListQuery) -> DomainResult<ArticlePage> {
        let snapshot = self
            .store
            .read()
            .map_err(|_| Self::poisoned())?
            .articles
            .clone();

        let (articles, total) = query.apply(snapshot);
        Ok(ArticlePage { articles, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::Pagination;
    use chrono::Utc;

    fn new_article(title: &str) -> NewArticle {
        NewArticle::validate(Some(title.into()), None, Some("draft".into()), Utc::now()).unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let repo = InMemoryArticleRepository::new();
        let first = repo.insert(new_article("First")).await.unwrap();
        let second = repo.insert(new_article("Second")).await.unwrap();
        assert_eq!(i64::from(first.id), 1);
        assert_eq!(i64::from(second.id), 2);
    }

    #[tokio::test]
    async fn paginated_list_reports_full_total() {
        let repo = InMemoryArticleRepository::new();
        for title in ["One", "Two", "Three"] {
            repo.insert(new_article(title)).await.unwrap();
        }

        let query = ArticleListQuery::all().paginated(Some(Pagination {
            page: 2,
            per_page: 2,
        }));
        let page = repo.list(&query).await.unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.articles.len(), 1);
        assert_eq!(page.articles[0].title.as_str(), "Three");
    }
}
