use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::listing::ArticleListQuery;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// A page of articles together with the size of the filtered set it was cut from.
#[derive(Debug, Clone)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub total: u64,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn list(&self, query: &ArticleListQuery) -> DomainResult<ArticlePage>;
}
