// tests/support/mocks/article_repos.rs
use articles_api::domain::article::{
    Article, ArticleListQuery, ArticlePage, ArticleReadRepository, ArticleWriteRepository,
    NewArticle,
};
use articles_api::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

/// ストレージ障害を模擬するリポジトリ
pub struct FailingArticleRepo;

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn list(&self, _query: &ArticleListQuery) -> DomainResult<ArticlePage> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
